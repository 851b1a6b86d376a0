//! Authentication models

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::Error;

/// Account type carried in the token's `role` claim
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    /// Posts projects and hires freelancers
    Client,
    /// Bids on projects
    Freelancer,
    /// Manages every record; signs in through its own endpoint
    Admin,
}

impl Role {
    /// Path of the sign-in endpoint for this role
    pub fn login_path(&self) -> &'static str {
        match self {
            Role::Client => "/client/login",
            Role::Freelancer => "/freelancer/login",
            Role::Admin => "/admin/login",
        }
    }

    /// Landing route after a successful sign-in
    pub fn dashboard(&self) -> super::Route {
        match self {
            Role::Client => super::Route::ClientDashboard,
            Role::Freelancer => super::Route::FreelancerDashboard,
            Role::Admin => super::Route::AdminDashboard,
        }
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Role::Client => write!(f, "client"),
            Role::Freelancer => write!(f, "freelancer"),
            Role::Admin => write!(f, "admin"),
        }
    }
}

impl FromStr for Role {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "client" => Ok(Role::Client),
            "freelancer" => Ok(Role::Freelancer),
            "admin" => Ok(Role::Admin),
            other => Err(Error::InvalidToken(format!("unknown role '{}'", other))),
        }
    }
}

/// The signed-in account, derived from a valid token
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Identity {
    pub id: u64,
    pub role: Role,
}

impl Identity {
    pub fn new(id: u64, role: Role) -> Self {
        Self { id, role }
    }

    pub fn is_admin(&self) -> bool {
        self.role == Role::Admin
    }
}

impl fmt::Display for Identity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} #{}", self.role, self.id)
    }
}

/// Login credentials
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Credentials {
    pub email: String,
    pub password: String,
}

impl Credentials {
    pub fn new(email: impl Into<String>, password: impl Into<String>) -> Self {
        Self {
            email: email.into(),
            password: password.into(),
        }
    }
}

/// Sign-in response body
#[derive(Debug, Clone, Deserialize)]
pub struct LoginResponse {
    pub access_token: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_role_parse_and_display() {
        for role in [Role::Client, Role::Freelancer, Role::Admin] {
            let parsed: Role = role.to_string().parse().unwrap();
            assert_eq!(parsed, role);
        }
        assert!("viewer".parse::<Role>().is_err());
    }

    #[test]
    fn test_role_login_paths() {
        assert_eq!(Role::Client.login_path(), "/client/login");
        assert_eq!(Role::Freelancer.login_path(), "/freelancer/login");
        assert_eq!(Role::Admin.login_path(), "/admin/login");
    }

    #[test]
    fn test_credentials_serialize() {
        let json = serde_json::to_value(Credentials::new("a@b.c", "pw")).unwrap();
        assert_eq!(json["email"], "a@b.c");
        assert_eq!(json["password"], "pw");
    }
}
