//! Route Guard
//!
//! Pure mapping from session state to "may this protected view
//! render". Kept free of I/O so every branch is trivially testable.

use super::session::SessionSnapshot;

/// What the shell should do with a protected route
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RouteDecision {
    /// Bootstrap still in flight, render nothing yet
    Loading,
    /// No session, send the user to the auth wizard
    RedirectToAuth,
    /// Session present, render the view
    Allow,
}

/// Decide access for a protected route from the current session
pub fn route_decision(session: &SessionSnapshot) -> RouteDecision {
    match session {
        SessionSnapshot::Loading => RouteDecision::Loading,
        SessionSnapshot::Guest => RouteDecision::RedirectToAuth,
        SessionSnapshot::Authenticated(_) => RouteDecision::Allow,
    }
}
