//! Static route table and path dispatcher.
//!
//! DESIGN
//! ======
//! The table is the single source of truth for which paths exist, which view
//! each one renders, and which layout wraps it. The Leptos route tree in
//! `app`, the navbar links, and the document title are all derived from it.

#[cfg(test)]
#[path = "routes_test.rs"]
mod routes_test;

use crate::state::auth::AuthStatus;

/// Screen rendered into the layout's content slot.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum View {
    Home,
    Login,
    AdminPortal,
}

impl View {
    /// Path segment used when declaring the Leptos route (`""` for the index).
    pub fn segment(self) -> &'static str {
        match self {
            Self::Home => "",
            Self::Login => "login",
            Self::AdminPortal => "admin",
        }
    }

    /// Document title shown while this view is active.
    pub fn title(self) -> &'static str {
        match self {
            Self::Home => "Home",
            Self::Login => "Sign in",
            Self::AdminPortal => "Admin Portal",
        }
    }

    /// Label used for the navbar link.
    pub fn nav_label(self) -> &'static str {
        match self {
            Self::Home => "Home",
            Self::Login => "Sign in",
            Self::AdminPortal => "Admin",
        }
    }
}

/// Persistent wrapper rendered around a matched view.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Layout {
    Navbar,
}

/// One entry of the route table.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Route {
    pub path: &'static str,
    pub view: View,
    pub parent: Layout,
    pub requires_auth: bool,
}

/// Every route the app serves, in navbar order.
pub const ROUTES: &[Route] = &[
    Route { path: "/", view: View::Home, parent: Layout::Navbar, requires_auth: false },
    Route { path: "/login", view: View::Login, parent: Layout::Navbar, requires_auth: false },
    Route { path: "/admin", view: View::AdminPortal, parent: Layout::Navbar, requires_auth: true },
];

/// Title used when no route matches.
pub const NOT_FOUND_TITLE: &str = "Not Found";

/// Outcome of dispatching a path against [`ROUTES`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Resolution {
    Matched(View),
    NotFound,
}

impl Resolution {
    /// Layout wrapping the outcome. Unmatched paths share the navbar too.
    pub fn layout(self) -> Layout {
        match self {
            Self::Matched(view) => route_for(view).parent,
            Self::NotFound => Layout::Navbar,
        }
    }

    pub fn title(self) -> &'static str {
        match self {
            Self::Matched(view) => view.title(),
            Self::NotFound => NOT_FOUND_TITLE,
        }
    }
}

/// Select the view for a browser path.
///
/// Query string and fragment are ignored, as is a single trailing slash on
/// non-root paths. Matching is exact and case-sensitive.
pub fn resolve(path: &str) -> Resolution {
    let path = normalize_path(path);
    ROUTES
        .iter()
        .find(|route| route.path == path)
        .map_or(Resolution::NotFound, |route| Resolution::Matched(route.view))
}

/// Table entry for a view.
pub fn route_for(view: View) -> &'static Route {
    // Every `View` variant has exactly one table entry (see routes_test).
    ROUTES
        .iter()
        .find(|route| route.view == view)
        .unwrap_or(&ROUTES[0])
}

/// Routes linked from the navbar for the given session status.
///
/// The login link is hidden once signed in; auth-gated routes are only
/// linked when a user is present.
pub fn nav_links(status: AuthStatus) -> Vec<&'static Route> {
    ROUTES
        .iter()
        .filter(|route| match route.view {
            View::Login => status != AuthStatus::SignedIn,
            _ if route.requires_auth => status == AuthStatus::SignedIn,
            _ => true,
        })
        .collect()
}

fn normalize_path(path: &str) -> &str {
    let end = path.find(['?', '#']).unwrap_or(path.len());
    let path = &path[..end];
    if path.len() > 1 {
        path.strip_suffix('/').unwrap_or(path)
    } else if path.is_empty() {
        "/"
    } else {
        path
    }
}
