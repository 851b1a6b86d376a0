//! Error types for freelance-match

use thiserror::Error;

#[derive(Error, Debug)]
pub enum Error {
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("TOML parse error: {0}")]
    TomlParse(#[from] toml::de::Error),

    #[error("TOML serialize error: {0}")]
    TomlSerialize(#[from] toml::ser::Error),

    #[error("YAML parse error: {0}")]
    YamlParse(#[from] serde_yaml::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Transport-level failure (connection refused, DNS, body decode).
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// The server answered 401. The session has already been cleared.
    #[error("{}", .message.as_deref().unwrap_or("Session expired or invalid, please sign in again"))]
    Unauthorized { message: Option<String> },

    /// Any non-401 error status, with the server's `error`/`message` field if it sent one.
    #[error("API error ({status}): {}", .message.as_deref().unwrap_or("no details"))]
    Api {
        status: u16,
        message: Option<String>,
    },

    #[error("Invalid token: {0}")]
    InvalidToken(String),

    #[error("Not signed in. Run 'freelance-match login' first.")]
    NotSignedIn,

    #[error("Config file not found. Run 'freelance-match init' first.")]
    ConfigNotFound,

    #[error("{0}")]
    Other(String),
}

impl Error {
    /// Message to show the user: the server's own text when it sent one,
    /// otherwise `fallback`.
    pub fn user_message(&self, fallback: &str) -> String {
        match self {
            Error::Api {
                message: Some(message),
                ..
            }
            | Error::Unauthorized {
                message: Some(message),
            } => message.clone(),
            Error::Unauthorized { message: None } | Error::NotSignedIn | Error::Other(_) => {
                self.to_string()
            }
            _ => fallback.to_string(),
        }
    }

    /// True when the error means the session is gone and the user must sign in.
    pub fn is_session_invalid(&self) -> bool {
        matches!(self, Error::Unauthorized { .. } | Error::NotSignedIn)
    }

    /// HTTP status carried by the error, if it came from a response.
    pub fn status(&self) -> Option<u16> {
        match self {
            Error::Unauthorized { .. } => Some(401),
            Error::Api { status, .. } => Some(*status),
            Error::Http(e) => e.status().map(|s| s.as_u16()),
            _ => None,
        }
    }
}

impl From<anyhow::Error> for Error {
    fn from(err: anyhow::Error) -> Self {
        Error::Other(err.to_string())
    }
}

pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_user_message_prefers_server_text() {
        let err = Error::Api {
            status: 400,
            message: Some("Email já está em uso.".to_string()),
        };
        assert_eq!(err.user_message("Erro ao registrar."), "Email já está em uso.");
    }

    #[test]
    fn test_user_message_falls_back() {
        let err = Error::Api {
            status: 500,
            message: None,
        };
        assert_eq!(err.user_message("Erro ao carregar projetos."), "Erro ao carregar projetos.");
        assert_eq!(err.status(), Some(500));
    }

    #[test]
    fn test_unauthorized_is_session_invalid() {
        let err = Error::Unauthorized { message: None };
        assert!(err.is_session_invalid());
        assert!(!Error::ConfigNotFound.is_session_invalid());
        assert_eq!(err.status(), Some(401));
        assert!(err.to_string().contains("sign in again"));
    }

    #[test]
    fn test_unauthorized_carries_server_text() {
        let err = Error::Unauthorized {
            message: Some("Email ou senha incorretos.".to_string()),
        };
        assert_eq!(err.user_message("Erro ao fazer login."), "Email ou senha incorretos.");
    }
}
