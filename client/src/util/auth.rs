//! Shared auth UI helpers.
//!
//! SYSTEM CONTEXT
//! ==============
//! Gated routes must apply identical unauthenticated redirect behavior, and
//! the login page must only ever bounce back to a local path.

#[cfg(test)]
#[path = "auth_test.rs"]
mod auth_test;

use leptos::prelude::*;
use leptos_router::NavigateOptions;

use crate::routes::{View, route_for};
use crate::state::auth::{AuthContext, AuthState};

/// What the admin portal should render for a session.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum AdminAccess {
    /// Session lookup still in flight.
    Pending,
    RedirectToLogin,
    /// Signed in without the admin flag.
    Denied,
    Granted,
}

pub fn admin_access(state: &AuthState) -> AdminAccess {
    match &state.user {
        Some(user) if user.is_admin => AdminAccess::Granted,
        Some(_) => AdminAccess::Denied,
        None if state.loading => AdminAccess::Pending,
        None => AdminAccess::RedirectToLogin,
    }
}

pub fn should_redirect_unauth(state: &AuthState) -> bool {
    !state.loading && state.user.is_none()
}

/// Login URL that returns to `view` after a successful sign-in.
pub fn login_redirect_target(view: View) -> String {
    format!("{}?next={}", route_for(View::Login).path, route_for(view).path)
}

/// Accept a post-login redirect only if it stays on this origin.
///
/// Rejects absolute URLs, protocol-relative `//host` paths, backslash
/// variants browsers treat like `//`, and any control character. URL parsers
/// drop tab and newline anywhere, so `/\t/host` would become `//host`.
pub fn safe_next_path(next: Option<&str>) -> &str {
    match next.map(str::trim) {
        Some(path)
            if path.starts_with('/')
                && !path.starts_with("//")
                && !path.starts_with("/\\")
                && !path.chars().any(char::is_control) =>
        {
            path
        }
        _ => "/",
    }
}

/// Redirect to the login page whenever auth has loaded and no user is present.
pub fn install_unauth_redirect<F>(auth: AuthContext, from: View, navigate: F)
where
    F: Fn(&str, NavigateOptions) + Clone + 'static,
{
    let target = login_redirect_target(from);
    Effect::new(move || {
        if should_redirect_unauth(&auth.state()) {
            navigate(&target, NavigateOptions { replace: true, ..NavigateOptions::default() });
        }
    });
}
