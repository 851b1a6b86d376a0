//! Navigation between front-end screens

use std::fmt;

/// Screens the session lifecycle can send the user to
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Route {
    SignIn,
    AdminSignIn,
    ClientDashboard,
    FreelancerDashboard,
    AdminDashboard,
}

impl Route {
    /// Browser path of the screen
    pub fn path(&self) -> &'static str {
        match self {
            Route::SignIn => "/sign",
            Route::AdminSignIn => "/admin/sign",
            Route::ClientDashboard => "/client/dashboard",
            Route::FreelancerDashboard => "/freelancer/dashboard",
            Route::AdminDashboard => "/admin/dashboard",
        }
    }
}

impl fmt::Display for Route {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.path())
    }
}

/// Sends the user to another screen.
///
/// The terminal front-end prints a hint; a GUI would switch views.
pub trait Navigator: Send + Sync {
    fn navigate(&self, route: Route);
}

/// Navigator that only records the transition in the log
#[derive(Debug, Clone, Copy, Default)]
pub struct LogNavigator;

impl Navigator for LogNavigator {
    fn navigate(&self, route: Route) {
        tracing::info!(route = route.path(), "Navigating");
    }
}
