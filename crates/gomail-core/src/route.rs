//! Route authorization decisions.
//!
//! Only the gating decision lives here; the navigation wiring itself is
//! the view layer's business. Two independent concerns hang off the role:
//! which navigation entries are visible, and which routes refuse
//! anonymous or non-privileged access.

use crate::session::{SessionManager, TokenStore};

/// The client's navigable screens.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Route {
    /// Login form.
    Login,
    /// Registration form.
    Register,
    /// Inbox folder.
    Inbox,
    /// Sent folder.
    Sent,
    /// Compose form.
    Compose,
    /// Trash folder.
    Trash,
    /// Admin panel.
    Admin,
}

/// Outcome of an authorization check.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RouteDecision {
    /// The route may be shown.
    Allow,
    /// Anonymous access refused; go to the login form.
    RedirectToLogin,
    /// Authenticated but not privileged; go to the inbox.
    RedirectToInbox,
}

/// Decides whether the session may enter `route`.
pub fn authorize<S: TokenStore>(route: Route, session: &SessionManager<S>) -> RouteDecision {
    match route {
        Route::Login | Route::Register => RouteDecision::Allow,
        Route::Inbox | Route::Sent | Route::Compose | Route::Trash => {
            if session.is_authenticated() {
                RouteDecision::Allow
            } else {
                RouteDecision::RedirectToLogin
            }
        }
        Route::Admin => {
            if !session.is_authenticated() {
                RouteDecision::RedirectToLogin
            } else if session.is_admin() {
                RouteDecision::Allow
            } else {
                RouteDecision::RedirectToInbox
            }
        }
    }
}

/// The navigation entries visible to the session.
pub fn visible_nav<S: TokenStore>(session: &SessionManager<S>) -> Vec<Route> {
    if !session.is_authenticated() {
        return vec![Route::Login, Route::Register];
    }

    let mut routes = vec![Route::Inbox, Route::Sent, Route::Compose, Route::Trash];
    if session.is_admin() {
        routes.push(Route::Admin);
    }
    routes
}
