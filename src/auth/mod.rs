//! Authentication and session management

pub mod jwt;
pub mod models;
pub mod navigator;
pub mod session;
pub mod storage;

pub use jwt::{decode_token, Claims};
pub use models::{Credentials, Identity, LoginResponse, Role};
pub use navigator::{LogNavigator, Navigator, Route};
pub use session::SessionStore;
pub use storage::{FileTokenStorage, MemoryTokenStorage, TokenStorage, ACCESS_TOKEN_KEY};
