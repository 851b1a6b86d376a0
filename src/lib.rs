//! freelance-match - Client for the Match para Freelancers marketplace
//!
//! The library keeps the signed-in session consistent with the stored
//! access token and exposes a typed client for every marketplace endpoint.
//! The `freelance-match` binary is a terminal front-end built on top of it.

pub mod api;
pub mod auth;
pub mod cli;
pub mod config;
pub mod dashboard;
pub mod error;
pub mod models;

pub use api::ApiClient;
pub use auth::SessionStore;
pub use config::Config;
pub use error::Error;
