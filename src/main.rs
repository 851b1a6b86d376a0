use anyhow::Result;
use clap::Parser;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use freelance_match::auth::Role;
use freelance_match::cli::{commands, Cli, Commands};

#[tokio::main]
async fn main() -> Result<()> {
    // Initialize tracing; stdout is reserved for command output
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "freelance_match=info".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let Cli { api_url, command } = Cli::parse();

    match command {
        Commands::Init => commands::init().await,
        Commands::Login {
            role,
            email,
            password,
        } => commands::login(api_url, role.into(), &email, password).await,
        Commands::AdminLogin { email, password } => {
            commands::login(api_url, Role::Admin, &email, password).await
        }
        Commands::Logout => commands::logout(api_url).await,
        Commands::Whoami => commands::whoami(api_url).await,
        Commands::Register {
            role,
            name,
            email,
            password,
            company,
            phone,
            skills,
            portfolio_url,
        } => {
            let registration = commands::Registration {
                role,
                name,
                email,
                password,
                company,
                phone,
                skills,
                portfolio_url,
            };
            commands::register(api_url, registration).await
        }
        Commands::Profile {
            name,
            company,
            phone,
            skills,
            portfolio_url,
            change_password,
        } => {
            commands::profile(api_url, name, company, phone, skills, portfolio_url, change_password)
                .await
        }
        Commands::Dashboard { section, format } => {
            commands::dashboard(api_url, section, format).await
        }
        Commands::Projects { action } => commands::projects(api_url, action).await,
        Commands::Proposals { action } => commands::proposals(api_url, action).await,
        Commands::Messages { action } => commands::messages(api_url, action).await,
        Commands::Review {
            project,
            rating,
            comment,
            freelancer,
            client,
        } => commands::review(api_url, project, rating, comment, freelancer, client).await,
        Commands::Recommend { project, format } => {
            commands::recommend(api_url, project, format).await
        }
        Commands::Admin { action } => commands::admin(api_url, action).await,
    }
}
