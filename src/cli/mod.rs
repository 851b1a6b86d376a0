//! CLI interface for freelance-match

pub mod commands;
mod navigator;
mod output;

pub use navigator::TerminalNavigator;
pub use output::*;

use chrono::NaiveDate;
use clap::{Parser, Subcommand, ValueEnum};

use crate::auth::Role;
use crate::dashboard::SectionKind;
use crate::models::{ProjectStatus, ProposalStatus};

#[derive(Parser)]
#[command(name = "freelance-match")]
#[command(author = "Krakaw")]
#[command(version = "1.0.0")]
#[command(about = "Terminal client for the Match para Freelancers marketplace", long_about = None)]
pub struct Cli {
    /// Override the API base address from the config file
    #[arg(long, global = true, env = "FREELANCE_MATCH_API_URL")]
    pub api_url: Option<String>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Initialize a new freelance-match.toml configuration file
    Init,

    /// Sign in as a client or freelancer
    Login {
        /// Account type to sign in as
        #[arg(short, long, default_value = "client")]
        role: AccountKind,

        #[arg(short, long)]
        email: String,

        /// Prompted for when omitted
        #[arg(short, long)]
        password: Option<String>,
    },

    /// Sign in as an administrator
    AdminLogin {
        #[arg(short, long)]
        email: String,

        /// Prompted for when omitted
        #[arg(short, long)]
        password: Option<String>,
    },

    /// Sign out and forget the stored token
    Logout,

    /// Show who is signed in
    Whoami,

    /// Create a client or freelancer account
    Register {
        #[arg(short, long, default_value = "client")]
        role: AccountKind,

        #[arg(short, long)]
        name: String,

        #[arg(short, long)]
        email: String,

        /// Prompted for when omitted
        #[arg(short, long)]
        password: Option<String>,

        /// Company name (clients)
        #[arg(long)]
        company: Option<String>,

        #[arg(long)]
        phone: Option<String>,

        /// Comma-separated skills (freelancers)
        #[arg(long)]
        skills: Option<String>,

        /// Portfolio link (freelancers)
        #[arg(long)]
        portfolio_url: Option<String>,
    },

    /// Show your profile, or change it when any field is given
    Profile {
        #[arg(long)]
        name: Option<String>,

        /// Company name (clients)
        #[arg(long)]
        company: Option<String>,

        #[arg(long)]
        phone: Option<String>,

        /// Comma-separated skills (freelancers)
        #[arg(long)]
        skills: Option<String>,

        /// Portfolio link (freelancers)
        #[arg(long)]
        portfolio_url: Option<String>,

        /// Prompt for a new password
        #[arg(long)]
        change_password: bool,
    },

    /// Show the dashboard for the signed-in account
    Dashboard {
        /// Reload only these sections
        #[arg(short, long, value_enum)]
        section: Vec<SectionKind>,

        /// Output format
        #[arg(short, long, default_value = "table")]
        format: OutputFormat,
    },

    /// Manage projects
    Projects {
        #[command(subcommand)]
        action: ProjectAction,
    },

    /// Manage proposals
    Proposals {
        #[command(subcommand)]
        action: ProposalAction,
    },

    /// Read and send project messages
    Messages {
        #[command(subcommand)]
        action: MessageAction,
    },

    /// Review the other party of a completed project
    Review {
        #[arg(long)]
        project: u64,

        /// Rating from 1 to 5
        #[arg(short, long)]
        rating: u8,

        #[arg(short, long)]
        comment: Option<String>,

        /// Freelancer being reviewed (when signed in as a client)
        #[arg(long)]
        freelancer: Option<u64>,

        /// Client being reviewed (when signed in as a freelancer)
        #[arg(long)]
        client: Option<u64>,
    },

    /// Recommended freelancers for one of your projects
    Recommend {
        project: u64,

        #[arg(short, long, default_value = "table")]
        format: OutputFormat,
    },

    /// Administrator record management
    Admin {
        #[command(subcommand)]
        action: AdminAction,
    },
}

#[derive(Subcommand)]
pub enum ProjectAction {
    /// List your projects (clients) or open projects (freelancers)
    List {
        #[arg(short, long, default_value = "table")]
        format: OutputFormat,
    },

    /// Show one project
    Show { id: u64 },

    /// Post a new project
    Create {
        #[arg(short, long)]
        title: String,

        #[arg(short, long)]
        description: String,

        /// Comma-separated skills required
        #[arg(short, long)]
        skills: Option<String>,

        #[arg(short, long)]
        budget: Option<f64>,

        /// Deadline as YYYY-MM-DD
        #[arg(long)]
        deadline: Option<NaiveDate>,
    },

    /// Change a project's fields
    Update {
        id: u64,

        #[command(flatten)]
        fields: ProjectFields,
    },

    /// Delete a project
    Delete {
        id: u64,

        /// Skip confirmation prompt
        #[arg(short, long)]
        force: bool,
    },

    /// Mark a project as completed
    Complete { id: u64 },
}

#[derive(clap::Args)]
pub struct ProjectFields {
    #[arg(long)]
    pub title: Option<String>,

    #[arg(long)]
    pub description: Option<String>,

    #[arg(long)]
    pub skills: Option<String>,

    #[arg(long)]
    pub budget: Option<f64>,

    #[arg(long)]
    pub deadline: Option<NaiveDate>,

    #[arg(long, value_enum)]
    pub status: Option<ProjectStatus>,
}

#[derive(Subcommand)]
pub enum ProposalAction {
    /// Proposals received for one of your projects
    List {
        #[arg(short, long)]
        project: u64,

        #[arg(short, long, default_value = "table")]
        format: OutputFormat,
    },

    /// Proposals you have submitted
    Mine {
        #[arg(short, long, default_value = "table")]
        format: OutputFormat,
    },

    /// Submit a proposal for an open project
    Submit {
        #[arg(short, long)]
        project: u64,

        /// Bid amount
        #[arg(short, long)]
        bid: f64,

        /// Estimated days to deliver
        #[arg(short, long)]
        days: u32,

        #[arg(short, long)]
        message: Option<String>,
    },

    /// Accept a proposal
    Accept { id: u64 },

    /// Reject a proposal
    Reject { id: u64 },

    /// Withdraw or delete a proposal
    Delete {
        id: u64,

        #[arg(short, long)]
        force: bool,
    },

    /// Mark an accepted proposal as completed
    Complete { id: u64 },
}

#[derive(Subcommand)]
pub enum MessageAction {
    /// Messages exchanged on a project
    List { project: u64 },

    /// Send a message on a project
    Send {
        #[arg(short, long)]
        project: u64,

        /// Recipient user id
        #[arg(long)]
        to: u64,

        /// Recipient role
        #[arg(long, value_enum)]
        to_role: Role,

        content: String,
    },
}

#[derive(Subcommand)]
pub enum AdminAction {
    /// List all clients
    Clients {
        #[arg(short, long, default_value = "table")]
        format: OutputFormat,
    },

    /// List all freelancers
    Freelancers {
        #[arg(short, long, default_value = "table")]
        format: OutputFormat,
    },

    /// List all projects
    Projects {
        #[arg(short, long, default_value = "table")]
        format: OutputFormat,
    },

    /// List all proposals
    Proposals {
        #[arg(short, long, default_value = "table")]
        format: OutputFormat,
    },

    /// Create a client or freelancer account
    Create {
        #[arg(short, long)]
        role: AccountKind,

        #[arg(short, long)]
        name: String,

        #[arg(short, long)]
        email: String,

        #[arg(short, long)]
        password: Option<String>,
    },

    /// Rename an account or reset its password
    UpdateAccount {
        #[arg(short, long)]
        role: AccountKind,

        id: u64,

        #[arg(long)]
        name: Option<String>,

        #[arg(long)]
        phone: Option<String>,

        #[arg(long)]
        password: Option<String>,
    },

    /// Change any project's fields
    UpdateProject {
        id: u64,

        #[command(flatten)]
        fields: ProjectFields,
    },

    /// Set a proposal's status
    SetProposalStatus {
        id: u64,

        #[arg(value_enum)]
        status: ProposalStatus,
    },

    /// Delete any record
    Delete {
        #[arg(value_enum)]
        kind: RecordKind,

        id: u64,

        #[arg(short, long)]
        force: bool,
    },
}

/// Self-service account types
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum AccountKind {
    Client,
    Freelancer,
}

impl From<AccountKind> for Role {
    fn from(kind: AccountKind) -> Self {
        match kind {
            AccountKind::Client => Role::Client,
            AccountKind::Freelancer => Role::Freelancer,
        }
    }
}

#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum RecordKind {
    Client,
    Freelancer,
    Project,
    Proposal,
}

#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum OutputFormat {
    Table,
    Json,
    Yaml,
}
