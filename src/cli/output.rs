//! CLI output formatting utilities

use colored::Colorize;
use comfy_table::{presets::UTF8_FULL, Cell, Color, ContentArrangement, Table};
use serde::Serialize;

use crate::cli::OutputFormat;
use crate::dashboard::{Dashboard, SectionData};
use crate::models::{
    ClientProfile, FreelancerProfile, Message, Project, ProjectStatus, Proposal, ProposalStatus,
    RecommendationList,
};

/// Print a success message
pub fn success(message: &str) {
    println!("{} {}", "✓".green(), message);
}

/// Print an error message
pub fn error(message: &str) {
    eprintln!("{} {}", "✗".red(), message);
}

/// Print a warning message
pub fn warn(message: &str) {
    println!("{} {}", "⚠".yellow(), message);
}

/// Print an info message
pub fn info(message: &str) {
    println!("{} {}", "ℹ".blue(), message);
}

/// Print `value` as json or yaml; returns false when the table format was requested
pub fn print_structured<T: Serialize + ?Sized>(format: OutputFormat, value: &T) -> anyhow::Result<bool> {
    match format {
        OutputFormat::Table => Ok(false),
        OutputFormat::Json => {
            println!("{}", serde_json::to_string_pretty(value)?);
            Ok(true)
        }
        OutputFormat::Yaml => {
            println!("{}", serde_yaml::to_string(value)?);
            Ok(true)
        }
    }
}

fn new_table(headers: &[&str]) -> Table {
    let mut table = Table::new();
    table
        .load_preset(UTF8_FULL)
        .set_content_arrangement(ContentArrangement::Dynamic)
        .set_header(
            headers
                .iter()
                .map(|h| Cell::new(h).fg(Color::Cyan))
                .collect::<Vec<_>>(),
        );
    table
}

fn project_status_color(status: ProjectStatus) -> Color {
    match status {
        ProjectStatus::Open => Color::Green,
        ProjectStatus::InProgress => Color::Yellow,
        ProjectStatus::Completed => Color::Blue,
        ProjectStatus::Unknown => Color::DarkGrey,
    }
}

fn proposal_status_color(status: ProposalStatus) -> Color {
    match status {
        ProposalStatus::Pending => Color::Yellow,
        ProposalStatus::Accepted => Color::Green,
        ProposalStatus::Rejected => Color::Red,
        ProposalStatus::Completed => Color::Blue,
        ProposalStatus::Unknown => Color::DarkGrey,
    }
}

fn money(amount: Option<f64>) -> String {
    amount
        .map(|a| format!("R$ {:.2}", a))
        .unwrap_or_else(|| "-".to_string())
}

/// Print a table of projects
pub fn print_project_table(projects: &[Project]) {
    if projects.is_empty() {
        info("No projects found.");
        return;
    }

    let mut table = new_table(&["ID", "Title", "Status", "Budget", "Deadline", "Skills"]);
    for project in projects {
        table.add_row(vec![
            Cell::new(project.id),
            Cell::new(&project.title),
            Cell::new(project.status).fg(project_status_color(project.status)),
            Cell::new(money(project.budget)),
            Cell::new(
                project
                    .deadline
                    .map(|d| d.format("%Y-%m-%d").to_string())
                    .unwrap_or_else(|| "-".to_string()),
            ),
            Cell::new(project.skills_required.as_deref().unwrap_or("-")),
        ]);
    }

    println!("{table}");
}

/// Print detailed project information
pub fn print_project_detail(project: &Project) {
    println!("{}", "Project Details".bold().underline());
    println!();
    println!("  {} {}", "ID:".bold(), project.id);
    println!("  {} {}", "Title:".bold(), project.title);
    println!("  {} {}", "Status:".bold(), project.status);
    println!("  {} {}", "Budget:".bold(), money(project.budget));
    if let Some(deadline) = project.deadline {
        println!("  {} {}", "Deadline:".bold(), deadline.format("%Y-%m-%d"));
    }
    if let Some(skills) = &project.skills_required {
        println!("  {} {}", "Skills:".bold(), skills);
    }
    println!("  {} {}", "Client:".bold(), project.client_id);
    println!(
        "  {} {}",
        "Created:".bold(),
        project.created_at.format("%Y-%m-%d %H:%M")
    );
    println!();
    println!("  {}", project.description);
}

/// Print a table of proposals
pub fn print_proposal_table(proposals: &[Proposal]) {
    if proposals.is_empty() {
        info("No proposals found.");
        return;
    }

    let mut table = new_table(&["ID", "Project", "Freelancer", "Bid", "Days", "Status", "Message"]);
    for proposal in proposals {
        table.add_row(vec![
            Cell::new(proposal.id),
            Cell::new(proposal.project_id),
            Cell::new(proposal.freelancer_id),
            Cell::new(money(Some(proposal.bid_amount))),
            Cell::new(proposal.estimated_days),
            Cell::new(proposal.status).fg(proposal_status_color(proposal.status)),
            Cell::new(proposal.message.as_deref().unwrap_or("")),
        ]);
    }

    println!("{table}");
}

pub fn print_client_table(clients: &[ClientProfile]) {
    if clients.is_empty() {
        info("No clients found.");
        return;
    }

    let mut table = new_table(&["ID", "Name", "Email", "Company", "Phone", "Created"]);
    for client in clients {
        table.add_row(vec![
            Cell::new(client.id),
            Cell::new(&client.name),
            Cell::new(&client.email),
            Cell::new(client.company.as_deref().unwrap_or("-")),
            Cell::new(client.phone.as_deref().unwrap_or("-")),
            Cell::new(client.created_at.format("%Y-%m-%d").to_string()),
        ]);
    }

    println!("{table}");
}

pub fn print_freelancer_table(freelancers: &[FreelancerProfile]) {
    if freelancers.is_empty() {
        info("No freelancers found.");
        return;
    }

    let mut table = new_table(&["ID", "Name", "Email", "Skills", "Portfolio"]);
    for freelancer in freelancers {
        table.add_row(vec![
            Cell::new(freelancer.id),
            Cell::new(&freelancer.name),
            Cell::new(&freelancer.email),
            Cell::new(freelancer.skill_names()),
            Cell::new(freelancer.portfolio_url.as_deref().unwrap_or("-")),
        ]);
    }

    println!("{table}");
}

pub fn print_client_profile(profile: &ClientProfile) {
    println!("  {} {}", "Name:".bold(), profile.name);
    println!("  {} {}", "Email:".bold(), profile.email);
    if let Some(company) = &profile.company {
        println!("  {} {}", "Company:".bold(), company);
    }
    if let Some(phone) = &profile.phone {
        println!("  {} {}", "Phone:".bold(), phone);
    }
}

pub fn print_freelancer_profile(profile: &FreelancerProfile) {
    println!("  {} {}", "Name:".bold(), profile.name);
    println!("  {} {}", "Email:".bold(), profile.email);
    let skills = profile.skill_names();
    println!(
        "  {} {}",
        "Skills:".bold(),
        if skills.is_empty() { "none listed" } else { skills.as_str() }
    );
    if let Some(url) = &profile.portfolio_url {
        println!("  {} {}", "Portfolio:".bold(), url.cyan());
    }
    if let Some(phone) = &profile.phone {
        println!("  {} {}", "Phone:".bold(), phone);
    }
}

/// Print a project's conversation, oldest first
pub fn print_messages(messages: &[Message]) {
    if messages.is_empty() {
        info("No messages yet.");
        return;
    }

    for message in messages {
        println!(
            "{} {} #{} → {} #{}",
            message.created_at.format("%Y-%m-%d %H:%M").to_string().dimmed(),
            message.sender_role.to_string().bold(),
            message.sender_id,
            message.receiver_role,
            message.receiver_id
        );
        println!("  {}", message.content);
    }
}

pub fn print_recommendations(project_id: u64, list: &RecommendationList) {
    println!(
        "{}",
        format!("Recommendations for project #{}", project_id)
            .bold()
            .underline()
    );
    if let Some(message) = &list.message {
        info(message);
    }
    if list.is_empty() {
        info("No recommendations available.");
        return;
    }

    let mut table = new_table(&["Freelancer", "Name", "Email", "Skills", "Score", "Matching", "Rating"]);
    for rec in &list.recommendations {
        let rating = match rec.average_rating {
            Some(avg) => format!("{:.1}/5 ({} reviews)", avg, rec.review_count),
            None => "no reviews".to_string(),
        };
        table.add_row(vec![
            Cell::new(rec.freelancer.id),
            Cell::new(&rec.freelancer.name),
            Cell::new(&rec.freelancer.email),
            Cell::new(rec.freelancer.skill_names()),
            Cell::new(format!("{:.0}%", rec.score * 100.0)),
            Cell::new(rec.matching_skills),
            Cell::new(rating),
        ]);
    }

    println!("{table}");
}

/// Print every dashboard section; failed sections get a notice and a retry hint
pub fn print_dashboard(dashboard: &Dashboard) {
    println!(
        "{}",
        format!("Dashboard ({})", dashboard.identity).bold().underline()
    );

    for section in &dashboard.sections {
        println!();
        println!("{}", section.kind.title().bold());
        match &section.outcome {
            Ok(SectionData::ClientProfile(profile)) => print_client_profile(profile),
            Ok(SectionData::FreelancerProfile(profile)) => print_freelancer_profile(profile),
            Ok(SectionData::Projects(projects)) => print_project_table(projects),
            Ok(SectionData::Proposals(proposals)) => print_proposal_table(proposals),
            Ok(SectionData::Clients(clients)) => print_client_table(clients),
            Ok(SectionData::Freelancers(freelancers)) => print_freelancer_table(freelancers),
            Err(_) => {
                let notice = section
                    .failure_message()
                    .unwrap_or_else(|| section.kind.failure_notice());
                error(&notice);
                info(&format!(
                    "Retry with 'freelance-match dashboard --section {}'",
                    section_arg(section.kind)
                ));
            }
        }
    }
}

fn section_arg(kind: crate::dashboard::SectionKind) -> String {
    use clap::ValueEnum;
    kind.to_possible_value()
        .map(|v| v.get_name().to_string())
        .unwrap_or_else(|| kind.title().to_lowercase())
}

/// Confirm an action with the user
pub fn confirm(message: &str) -> bool {
    dialoguer::Confirm::new()
        .with_prompt(message)
        .default(false)
        .interact()
        .unwrap_or(false)
}
