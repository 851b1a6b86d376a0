//! CLI command implementations

use anyhow::Result;
use chrono::{NaiveDate, NaiveDateTime, NaiveTime};
use colored::Colorize;
use indicatif::{ProgressBar, ProgressStyle};
use std::fs;
use std::sync::Arc;
use std::time::Duration;

use crate::api::{AdminRecord, ApiClient};
use crate::auth::{Credentials, FileTokenStorage, Navigator, Role, SessionStore};
use crate::cli::{
    confirm, error, info, print_client_profile, print_client_table, print_dashboard,
    print_freelancer_profile, print_freelancer_table, print_messages, print_project_detail,
    print_project_table, print_proposal_table, print_recommendations, print_structured, success,
    warn, AccountKind, AdminAction, MessageAction, OutputFormat, ProjectAction, ProjectFields,
    ProposalAction, RecordKind, TerminalNavigator,
};
use crate::config::{self, Config};
use crate::dashboard::{self, SectionKind};
use crate::error::Error;
use crate::models::{
    ClientUpdate, FreelancerUpdate, NewClient, NewFreelancer, NewMessage, NewProject,
    NewProposal, NewReview, ProjectUpdate, ProposalStatus,
};

/// Initialize a new freelance-match.toml configuration file
pub async fn init() -> Result<()> {
    let config_path = std::path::Path::new(config::loader::CONFIG_FILENAME);

    if config_path.exists() {
        warn(&format!("{} already exists", config::loader::CONFIG_FILENAME));
        return Ok(());
    }

    let content = config::loader::default_config_content();
    fs::write(config_path, content)?;

    success(&format!("Created {}", config::loader::CONFIG_FILENAME));
    info("Set the API address and run 'freelance-match login --email <email>' to sign in");

    Ok(())
}

/// Sign in as a client, freelancer or administrator
pub async fn login(api_url: Option<String>, role: Role, email: &str, password: Option<String>) -> Result<()> {
    let client = api_client(api_url)?;
    let password = match password {
        Some(password) => password,
        None => prompt_password("Password")?,
    };

    match client.sign_in(role, &Credentials::new(email, password)).await {
        Ok(identity) => {
            success(&format!("Signed in as {}", identity));
            TerminalNavigator.navigate(identity.role.dashboard());
            Ok(())
        }
        Err(e) => {
            error(&e.user_message("Sign-in failed. Check your email and password."));
            Err(e.into())
        }
    }
}

/// Forget the stored token
pub async fn logout(api_url: Option<String>) -> Result<()> {
    let client = api_client(api_url)?;
    if !client.session().is_authenticated().await {
        info("Not signed in");
    }
    client.sign_out().await;
    Ok(())
}

/// Show the signed-in identity
pub async fn whoami(api_url: Option<String>) -> Result<()> {
    let client = api_client(api_url)?;
    match client.session().identity().await {
        Some(identity) => {
            println!("{} {}", "Signed in as".bold(), identity);
            println!("  {} {}", "API:".bold(), client.base_url());
        }
        None => info("Not signed in"),
    }
    Ok(())
}

/// Account details collected by `register`
pub struct Registration {
    pub role: AccountKind,
    pub name: String,
    pub email: String,
    pub password: Option<String>,
    pub company: Option<String>,
    pub phone: Option<String>,
    pub skills: Option<String>,
    pub portfolio_url: Option<String>,
}

/// Create a client or freelancer account
pub async fn register(api_url: Option<String>, registration: Registration) -> Result<()> {
    let client = api_client(api_url)?;
    let password = match registration.password {
        Some(password) => password,
        None => prompt_new_password()?,
    };

    let result = match registration.role {
        AccountKind::Client => {
            client
                .register_client(&NewClient {
                    name: registration.name,
                    email: registration.email.clone(),
                    password,
                    company: registration.company,
                    phone: registration.phone,
                })
                .await
        }
        AccountKind::Freelancer => {
            client
                .register_freelancer(&NewFreelancer {
                    name: registration.name,
                    email: registration.email.clone(),
                    password,
                    skills: registration.skills,
                    portfolio_url: registration.portfolio_url,
                    phone: registration.phone,
                })
                .await
        }
    };

    match result {
        Ok(status) => {
            success(status.message.as_deref().unwrap_or("Account created"));
            info(&format!(
                "Sign in with 'freelance-match login --role {} --email {}'",
                Role::from(registration.role),
                registration.email
            ));
            Ok(())
        }
        Err(e) => {
            error(&e.user_message("Registration failed."));
            Err(e.into())
        }
    }
}

/// Show or change the signed-in user's own profile
pub async fn profile(
    api_url: Option<String>,
    name: Option<String>,
    company: Option<String>,
    phone: Option<String>,
    skills: Option<String>,
    portfolio_url: Option<String>,
    change_password: bool,
) -> Result<()> {
    let client = api_client(api_url)?;
    let identity = require_identity(&client).await?;
    let password = if change_password {
        Some(prompt_new_password()?)
    } else {
        None
    };

    match identity.role {
        Role::Client => {
            let update = ClientUpdate {
                name,
                company,
                phone,
                password,
            };
            let result = if update.is_empty() {
                client.client_profile().await
            } else {
                client.update_client_profile(&update).await
            };
            match result {
                Ok(profile) => {
                    if !update.is_empty() {
                        success("Profile updated");
                    }
                    print_client_profile(&profile);
                    Ok(())
                }
                Err(e) => fail(e, "Could not load your profile."),
            }
        }
        Role::Freelancer => {
            let update = FreelancerUpdate {
                name,
                skills,
                portfolio_url,
                phone,
                password,
            };
            let result = if update.is_empty() {
                client.freelancer_me().await
            } else {
                client.update_freelancer_profile(&update).await
            };
            match result {
                Ok(profile) => {
                    if !update.is_empty() {
                        success("Profile updated");
                    }
                    print_freelancer_profile(&profile);
                    Ok(())
                }
                Err(e) => fail(e, "Could not load your profile."),
            }
        }
        Role::Admin => {
            warn("Administrator accounts have no profile");
            Ok(())
        }
    }
}

/// Load the dashboard, or only the requested sections
pub async fn dashboard(api_url: Option<String>, sections: Vec<SectionKind>, format: OutputFormat) -> Result<()> {
    let client = api_client(api_url)?;
    let identity = require_identity(&client).await?;

    let pb = ProgressBar::new_spinner();
    pb.set_style(ProgressStyle::default_spinner().template("{spinner:.cyan} {msg}")?);
    pb.enable_steady_tick(Duration::from_millis(100));
    pb.set_message("Loading dashboard...");

    let board = if sections.is_empty() {
        dashboard::load_sections(&client, identity, SectionKind::for_role(identity.role)).await
    } else {
        dashboard::load_sections(&client, identity, &sections).await
    };
    pb.finish_and_clear();

    if board.session_ended() {
        return Err(Error::Unauthorized { message: None }.into());
    }

    let loaded: Vec<_> = board
        .sections
        .iter()
        .filter_map(|s| s.outcome.as_ref().ok().map(|data| (s.kind, data)))
        .collect();
    if !print_structured(format, &loaded)? {
        print_dashboard(&board);
    }

    let failed = board.failed_sections().count();
    if failed > 0 {
        anyhow::bail!("{} dashboard section(s) failed to load", failed);
    }
    Ok(())
}

/// Handle project subcommands
pub async fn projects(api_url: Option<String>, action: ProjectAction) -> Result<()> {
    let client = api_client(api_url)?;

    match action {
        ProjectAction::List { format } => match client.projects().await {
            Ok(projects) => {
                if !print_structured(format, &projects)? {
                    print_project_table(&projects);
                }
                Ok(())
            }
            Err(e) => fail(e, "Could not load projects."),
        },
        ProjectAction::Show { id } => match client.project(id).await {
            Ok(project) => {
                print_project_detail(&project);
                Ok(())
            }
            Err(e) => fail(e, "Could not load the project."),
        },
        ProjectAction::Create {
            title,
            description,
            skills,
            budget,
            deadline,
        } => {
            let project = NewProject {
                title,
                description,
                skills_required: skills,
                budget,
                deadline: deadline.map(start_of_day),
            };
            match client.create_project(&project).await {
                Ok(created) => {
                    success(&format!("Created project #{}: {}", created.id, created.title));
                    Ok(())
                }
                Err(e) => fail(e, "Could not create the project."),
            }
        }
        ProjectAction::Update { id, fields } => {
            let update = project_update(fields);
            match client.update_project(id, &update).await {
                Ok(project) => {
                    success(&format!("Updated project #{}", project.id));
                    Ok(())
                }
                Err(e) => fail(e, "Could not update the project."),
            }
        }
        ProjectAction::Delete { id, force } => {
            if !force && !confirm(&format!("Delete project #{} and its proposals?", id)) {
                info("Cancelled");
                return Ok(());
            }
            match client.delete_project(id).await {
                Ok(status) => {
                    success(status.message.as_deref().unwrap_or("Project deleted"));
                    Ok(())
                }
                Err(e) => fail(e, "Could not delete the project."),
            }
        }
        ProjectAction::Complete { id } => match client.complete_project(id).await {
            Ok(project) => {
                success(&format!("Project #{} marked {}", project.id, project.status));
                Ok(())
            }
            Err(e) => fail(e, "Could not complete the project."),
        },
    }
}

/// Handle proposal subcommands
pub async fn proposals(api_url: Option<String>, action: ProposalAction) -> Result<()> {
    let client = api_client(api_url)?;

    match action {
        ProposalAction::List { project, format } => match client.project_proposals(project).await {
            Ok(proposals) => {
                if !print_structured(format, &proposals)? {
                    print_proposal_table(&proposals);
                }
                Ok(())
            }
            Err(e) => fail(e, "Could not load proposals."),
        },
        ProposalAction::Mine { format } => match client.my_proposals().await {
            Ok(proposals) => {
                if !print_structured(format, &proposals)? {
                    print_proposal_table(&proposals);
                }
                Ok(())
            }
            Err(e) => fail(e, "Could not load your proposals."),
        },
        ProposalAction::Submit {
            project,
            bid,
            days,
            message,
        } => {
            let proposal = NewProposal {
                project_id: project,
                bid_amount: bid,
                estimated_days: days,
                message,
            };
            match client.create_proposal(&proposal).await {
                Ok(created) => {
                    success(&format!("Submitted proposal #{} for project #{}", created.id, project));
                    Ok(())
                }
                Err(e) => fail(e, "Could not submit the proposal."),
            }
        }
        ProposalAction::Accept { id } => set_proposal_status(&client, id, ProposalStatus::Accepted).await,
        ProposalAction::Reject { id } => set_proposal_status(&client, id, ProposalStatus::Rejected).await,
        ProposalAction::Delete { id, force } => {
            if !force && !confirm(&format!("Delete proposal #{}?", id)) {
                info("Cancelled");
                return Ok(());
            }
            match client.delete_proposal(id).await {
                Ok(status) => {
                    success(status.message.as_deref().unwrap_or("Proposal deleted"));
                    Ok(())
                }
                Err(e) => fail(e, "Could not delete the proposal."),
            }
        }
        ProposalAction::Complete { id } => match client.complete_proposal(id).await {
            Ok(proposal) => {
                success(&format!("Proposal #{} marked {}", proposal.id, proposal.status));
                Ok(())
            }
            Err(e) => fail(e, "Could not complete the proposal."),
        },
    }
}

async fn set_proposal_status(client: &ApiClient, id: u64, status: ProposalStatus) -> Result<()> {
    match client.update_proposal_status(id, status).await {
        Ok(proposal) => {
            success(&format!("Proposal #{} is now {}", proposal.id, proposal.status));
            Ok(())
        }
        Err(e) => fail(e, "Could not update the proposal."),
    }
}

/// Handle message subcommands
pub async fn messages(api_url: Option<String>, action: MessageAction) -> Result<()> {
    let client = api_client(api_url)?;

    match action {
        MessageAction::List { project } => match client.project_messages(project).await {
            Ok(messages) => {
                print_messages(&messages);
                Ok(())
            }
            Err(e) => fail(e, "Could not load messages."),
        },
        MessageAction::Send {
            project,
            to,
            to_role,
            content,
        } => {
            let message = NewMessage {
                project_id: project,
                receiver_id: to,
                receiver_role: to_role,
                content,
            };
            match client.send_message(&message).await {
                Ok(_) => {
                    success(&format!("Message sent to {} #{}", to_role, to));
                    Ok(())
                }
                Err(e) => fail(e, "Could not send the message."),
            }
        }
    }
}

/// Review the other party of a completed project
pub async fn review(
    api_url: Option<String>,
    project: u64,
    rating: u8,
    comment: Option<String>,
    freelancer: Option<u64>,
    client_id: Option<u64>,
) -> Result<()> {
    let client = api_client(api_url)?;
    let identity = require_identity(&client).await?;

    let review = NewReview {
        project_id: project,
        freelancer_id: freelancer,
        client_id,
        rating,
        comment,
    };
    if !review.rating_in_range() {
        anyhow::bail!(
            "Rating must be between {} and {}",
            NewReview::MIN_RATING,
            NewReview::MAX_RATING
        );
    }

    let result = match identity.role {
        Role::Client if freelancer.is_some() => client.review_freelancer(&review).await,
        Role::Freelancer if client_id.is_some() => client.review_client(&review).await,
        Role::Client => anyhow::bail!("Pass --freelancer with the id of the freelancer to review"),
        Role::Freelancer => anyhow::bail!("Pass --client with the id of the client to review"),
        Role::Admin => anyhow::bail!("Administrators cannot leave reviews"),
    };

    match result {
        Ok(receipt) => {
            success(receipt.message.as_deref().unwrap_or("Review submitted"));
            Ok(())
        }
        Err(e) => fail(e, "Could not submit the review."),
    }
}

/// Show recommended freelancers for a project
pub async fn recommend(api_url: Option<String>, project: u64, format: OutputFormat) -> Result<()> {
    let client = api_client(api_url)?;

    match client.recommendations(project).await {
        Ok(list) => {
            if !print_structured(format, &list)? {
                print_recommendations(project, &list);
            }
            Ok(())
        }
        Err(e) => fail(e, "Could not load recommendations."),
    }
}

/// Handle administrator subcommands
pub async fn admin(api_url: Option<String>, action: AdminAction) -> Result<()> {
    let client = api_client(api_url)?;

    match action {
        AdminAction::Clients { format } => match client.admin_clients().await {
            Ok(clients) => {
                if !print_structured(format, &clients)? {
                    print_client_table(&clients);
                }
                Ok(())
            }
            Err(e) => fail(e, "Could not load clients."),
        },
        AdminAction::Freelancers { format } => match client.admin_freelancers().await {
            Ok(freelancers) => {
                if !print_structured(format, &freelancers)? {
                    print_freelancer_table(&freelancers);
                }
                Ok(())
            }
            Err(e) => fail(e, "Could not load freelancers."),
        },
        AdminAction::Projects { format } => match client.admin_projects().await {
            Ok(projects) => {
                if !print_structured(format, &projects)? {
                    print_project_table(&projects);
                }
                Ok(())
            }
            Err(e) => fail(e, "Could not load projects."),
        },
        AdminAction::Proposals { format } => match client.admin_proposals().await {
            Ok(proposals) => {
                if !print_structured(format, &proposals)? {
                    print_proposal_table(&proposals);
                }
                Ok(())
            }
            Err(e) => fail(e, "Could not load proposals."),
        },
        AdminAction::Create {
            role,
            name,
            email,
            password,
        } => {
            let password = match password {
                Some(password) => password,
                None => prompt_new_password()?,
            };
            let created = match role {
                AccountKind::Client => client
                    .admin_create_client(&NewClient {
                        name,
                        email,
                        password,
                        company: None,
                        phone: None,
                    })
                    .await
                    .map(|c| c.id),
                AccountKind::Freelancer => client
                    .admin_create_freelancer(&NewFreelancer {
                        name,
                        email,
                        password,
                        skills: None,
                        portfolio_url: None,
                        phone: None,
                    })
                    .await
                    .map(|f| f.id),
            };
            match created {
                Ok(id) => {
                    success(&format!("Created {} #{}", Role::from(role), id));
                    Ok(())
                }
                Err(e) => fail(e, "Could not create the account."),
            }
        }
        AdminAction::UpdateAccount {
            role,
            id,
            name,
            phone,
            password,
        } => {
            let updated = match role {
                AccountKind::Client => client
                    .admin_update_client(
                        id,
                        &ClientUpdate {
                            name,
                            phone,
                            password,
                            ..Default::default()
                        },
                    )
                    .await
                    .map(|c| c.id),
                AccountKind::Freelancer => client
                    .admin_update_freelancer(
                        id,
                        &FreelancerUpdate {
                            name,
                            phone,
                            password,
                            ..Default::default()
                        },
                    )
                    .await
                    .map(|f| f.id),
            };
            match updated {
                Ok(id) => {
                    success(&format!("Updated {} #{}", Role::from(role), id));
                    Ok(())
                }
                Err(e) => fail(e, "Could not update the account."),
            }
        }
        AdminAction::UpdateProject { id, fields } => {
            match client.admin_update_project(id, &project_update(fields)).await {
                Ok(project) => {
                    success(&format!("Updated project #{}", project.id));
                    Ok(())
                }
                Err(e) => fail(e, "Could not update the project."),
            }
        }
        AdminAction::SetProposalStatus { id, status } => {
            match client.admin_update_proposal(id, status).await {
                Ok(proposal) => {
                    success(&format!("Proposal #{} is now {}", proposal.id, proposal.status));
                    Ok(())
                }
                Err(e) => fail(e, "Could not update the proposal."),
            }
        }
        AdminAction::Delete { kind, id, force } => {
            let record = match kind {
                RecordKind::Client => AdminRecord::Client,
                RecordKind::Freelancer => AdminRecord::Freelancer,
                RecordKind::Project => AdminRecord::Project,
                RecordKind::Proposal => AdminRecord::Proposal,
            };
            if !force && !confirm(&format!("Delete {:?} #{}? This cannot be undone.", record, id)) {
                info("Cancelled");
                return Ok(());
            }
            match client.admin_delete(record, id).await {
                Ok(status) => {
                    success(status.message.as_deref().unwrap_or("Record deleted"));
                    Ok(())
                }
                Err(e) => fail(e, "Could not delete the record."),
            }
        }
    }
}

fn api_client(api_url: Option<String>) -> Result<ApiClient> {
    let config = load_config()?.with_base_url(api_url);
    let storage = FileTokenStorage::new(config.session.token_file.clone());
    let session = SessionStore::hydrate(Arc::new(storage), Arc::new(TerminalNavigator));
    ApiClient::new(&config.api, session).map_err(|e| anyhow::anyhow!("{}", e))
}

fn load_config() -> Result<Config> {
    config::load_config_or_default().map_err(|e| anyhow::anyhow!("{}", e))
}

async fn require_identity(client: &ApiClient) -> Result<crate::auth::Identity> {
    match client.session().identity().await {
        Some(identity) => Ok(identity),
        None => {
            error(&Error::NotSignedIn.to_string());
            Err(Error::NotSignedIn.into())
        }
    }
}

/// Report a failed request with the server's message, or `fallback`
fn fail(e: Error, fallback: &str) -> Result<()> {
    error(&e.user_message(fallback));
    Err(e.into())
}

fn project_update(fields: ProjectFields) -> ProjectUpdate {
    ProjectUpdate {
        title: fields.title,
        description: fields.description,
        skills_required: fields.skills,
        budget: fields.budget,
        deadline: fields.deadline.map(start_of_day),
        status: fields.status,
    }
}

fn start_of_day(date: NaiveDate) -> NaiveDateTime {
    date.and_time(NaiveTime::MIN)
}

fn prompt_password(prompt: &str) -> Result<String> {
    Ok(dialoguer::Password::new().with_prompt(prompt).interact()?)
}

fn prompt_new_password() -> Result<String> {
    Ok(dialoguer::Password::new()
        .with_prompt("Password")
        .with_confirmation("Repeat password", "Passwords do not match")
        .interact()?)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_start_of_day() {
        let date = NaiveDate::from_ymd_opt(2025, 6, 30).unwrap();
        assert_eq!(start_of_day(date).to_string(), "2025-06-30 00:00:00");
    }

    #[test]
    fn test_project_update_maps_fields() {
        let update = project_update(ProjectFields {
            title: None,
            description: None,
            skills: Some("rust".to_string()),
            budget: Some(900.0),
            deadline: None,
            status: None,
        });
        let json = serde_json::to_value(&update).unwrap();
        assert_eq!(json, serde_json::json!({"skills_required": "rust", "budget": 900.0}));
    }
}
