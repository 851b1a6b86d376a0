//! Navigation hints for the terminal front-end

use crate::auth::{Navigator, Route};
use crate::cli::{info, warn};

/// Prints the command that reaches the screen a browser would have opened
#[derive(Debug, Clone, Copy, Default)]
pub struct TerminalNavigator;

impl TerminalNavigator {
    fn hint(route: Route) -> &'static str {
        match route {
            Route::SignIn => "freelance-match login --email <email>",
            Route::AdminSignIn => "freelance-match admin-login --email <email>",
            Route::ClientDashboard | Route::FreelancerDashboard | Route::AdminDashboard => {
                "freelance-match dashboard"
            }
        }
    }
}

impl Navigator for TerminalNavigator {
    fn navigate(&self, route: Route) {
        tracing::debug!(route = route.path(), "Navigating");
        match route {
            Route::SignIn | Route::AdminSignIn => {
                warn(&format!("Signed out. Sign in again with '{}'", Self::hint(route)));
            }
            _ => info(&format!("Continue with '{}'", Self::hint(route))),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_dashboard_routes_share_hint() {
        assert_eq!(
            TerminalNavigator::hint(Route::ClientDashboard),
            TerminalNavigator::hint(Route::AdminDashboard)
        );
        assert!(TerminalNavigator::hint(Route::SignIn).contains("login"));
    }
}
