//! Admin portal entry screen, gated on a signed-in admin user.

use leptos::prelude::*;
use leptos_router::components::A;
use leptos_router::hooks::use_navigate;

use crate::components::navbar::session_label;
use crate::routes::View;
use crate::state::auth::AuthContext;
use crate::util::auth::{AdminAccess, admin_access, install_unauth_redirect};

#[component]
pub fn AdminPortalPage(auth: AuthContext) -> impl IntoView {
    install_unauth_redirect(auth, View::AdminPortal, use_navigate());

    let body = move || match admin_access(&auth.state()) {
        AdminAccess::Pending => view! { <p class="admin__status">"Checking session…"</p> }.into_any(),
        AdminAccess::RedirectToLogin => {
            view! { <p class="admin__status">"Redirecting to sign in…"</p> }.into_any()
        }
        AdminAccess::Denied => view! {
            <div class="admin__denied">
                <h1>"Access restricted"</h1>
                <p>"Your account does not have admin access."</p>
                <A href="/">"Back to home"</A>
            </div>
        }
        .into_any(),
        AdminAccess::Granted => {
            let who = auth.user().map(|u| session_label(&u).to_owned()).unwrap_or_default();
            view! {
                <header class="admin__header">
                    <h1>"Admin Portal"</h1>
                    <p>"Signed in as " {who}</p>
                </header>
            }
            .into_any()
        }
    };

    view! { <section class="admin">{body}</section> }
}
