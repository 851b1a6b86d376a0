//! Marketplace API access layer

mod admin;
mod auth;
pub mod client;
mod messages;
mod profiles;
mod projects;
mod proposals;

pub use admin::AdminRecord;
pub use client::ApiClient;
pub use messages::ReviewReceipt;
