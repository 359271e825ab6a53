//! Navigation chrome shared by every route.
//!
//! SYSTEM CONTEXT
//! ==============
//! `NavbarLayout` is the parent route of the whole table: it renders the
//! brand, table-driven links and the session area, then the matched page in
//! its `<main>` slot. The not-found fallback reuses `NavShell` directly so
//! unmatched paths keep the same chrome.

#[cfg(test)]
#[path = "navbar_test.rs"]
mod navbar_test;

use leptos::prelude::*;
use leptos_meta::Title;
use leptos_router::components::{A, Outlet};
use leptos_router::hooks::use_location;

use crate::net::types::User;
use crate::routes::{Resolution, nav_links, resolve};
use crate::state::auth::{AuthContext, AuthStatus};

pub const APP_NAME: &str = "Portal";

/// Document title for a dispatch outcome.
pub fn page_title(resolution: Resolution) -> String {
    format!("{} · {APP_NAME}", resolution.title())
}

/// Name shown next to the sign-out button.
pub fn session_label(user: &User) -> &str {
    if user.name.trim().is_empty() {
        user.email.as_deref().unwrap_or(&user.id)
    } else {
        &user.name
    }
}

/// Layout route: navbar around the router outlet.
#[component]
pub fn NavbarLayout(auth: AuthContext) -> impl IntoView {
    view! {
        <NavShell auth=auth>
            <Outlet/>
        </NavShell>
    }
}

/// Navbar plus a single content slot filled by `children`.
#[component]
pub fn NavShell(auth: AuthContext, children: Children) -> impl IntoView {
    let location = use_location();

    let title = move || page_title(resolve(&location.pathname.get()));

    // Local state clears at once; the reload waits for the logout request.
    let on_sign_out = move |_: leptos::ev::MouseEvent| {
        auth.sign_out();
        #[cfg(feature = "hydrate")]
        leptos::task::spawn_local(async move {
            crate::net::api::logout().await;
            if let Some(window) = web_sys::window() {
                let _ = window.location().set_href("/");
            }
        });
    };

    let links = move || {
        nav_links(auth.status())
            .into_iter()
            .map(|route| {
                view! {
                    <A href=route.path attr:class="navbar__link">
                        {route.view.nav_label()}
                    </A>
                }
            })
            .collect_view()
    };

    let session = move || match auth.status() {
        AuthStatus::Loading => view! { <span class="navbar__session-pending">"…"</span> }.into_any(),
        AuthStatus::Anonymous => ().into_any(),
        AuthStatus::SignedIn => {
            let label = auth.user().map(|u| session_label(&u).to_owned()).unwrap_or_default();
            view! {
                <span class="navbar__user">{label}</span>
                <button class="navbar__sign-out" type="button" on:click=on_sign_out>
                    "Sign out"
                </button>
            }
            .into_any()
        }
    };

    view! {
        <Title text=title/>
        <header class="navbar">
            <A href="/" attr:class="navbar__brand">
                {APP_NAME}
            </A>
            <nav class="navbar__links">{links}</nav>
            <div class="navbar__session">{session}</div>
        </header>
        <main class="page">{children()}</main>
    }
}
