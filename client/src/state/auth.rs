//! Auth-session state for the current browser user.
//!
//! SYSTEM CONTEXT
//! ==============
//! Created once by the app root and passed as a prop to the navbar layout and
//! every page. Route guards and user-aware components read it to decide
//! between loading markers, login redirects and identity-dependent rendering.

#[cfg(test)]
#[path = "auth_test.rs"]
mod auth_test;

use leptos::prelude::*;

use crate::net::types::User;

/// Authentication state tracking the current user and loading status.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct AuthState {
    pub user: Option<User>,
    pub loading: bool,
}

impl AuthState {
    /// State before the session lookup has settled.
    pub fn pending() -> Self {
        Self { user: None, loading: true }
    }

    pub fn status(&self) -> AuthStatus {
        match (&self.user, self.loading) {
            (Some(_), _) => AuthStatus::SignedIn,
            (None, true) => AuthStatus::Loading,
            (None, false) => AuthStatus::Anonymous,
        }
    }
}

/// Coarse session status derived from [`AuthState`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum AuthStatus {
    Loading,
    Anonymous,
    SignedIn,
}

/// Copyable handle to the session state.
///
/// Copies share one underlying signal, so an update through any handle is
/// observed by every component holding a copy.
#[derive(Clone, Copy, Debug)]
pub struct AuthContext {
    state: RwSignal<AuthState>,
}

impl AuthContext {
    pub fn new() -> Self {
        Self { state: RwSignal::new(AuthState::pending()) }
    }

    /// Start the one-time session lookup.
    ///
    /// Only the browser has the session cookie; on the server the state stays
    /// pending so the SSR markup matches the first client render.
    pub fn init(self) {
        #[cfg(feature = "hydrate")]
        leptos::task::spawn_local(async move {
            let user = crate::net::api::fetch_current_user().await;
            match &user {
                Some(u) => log::info!("session restored for {}", u.id),
                None => log::debug!("no active session"),
            }
            self.state.set(AuthState { user, loading: false });
        });
    }

    /// Reactive snapshot of the full state.
    pub fn state(self) -> AuthState {
        self.state.get()
    }

    pub fn status(self) -> AuthStatus {
        self.state.with(AuthState::status)
    }

    pub fn user(self) -> Option<User> {
        self.state.with(|s| s.user.clone())
    }

    pub fn sign_in(self, user: User) {
        self.state.set(AuthState { user: Some(user), loading: false });
    }

    pub fn sign_out(self) {
        self.state.set(AuthState { user: None, loading: false });
    }
}

impl Default for AuthContext {
    fn default() -> Self {
        Self::new()
    }
}
