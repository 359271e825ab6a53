//! Landing page.

#[cfg(test)]
#[path = "home_test.rs"]
mod home_test;

use leptos::prelude::*;
use leptos_router::components::A;

use crate::net::types::User;
use crate::state::auth::AuthContext;

/// Headline for the landing page, personalised once a user is known.
pub fn greeting(user: Option<&User>) -> String {
    match user {
        Some(user) => format!("Welcome back, {}", user.name),
        None => "Welcome".to_owned(),
    }
}

#[component]
pub fn HomePage(auth: AuthContext) -> impl IntoView {
    let headline = move || greeting(auth.user().as_ref());
    let signed_out = move || auth.user().is_none();

    view! {
        <section class="home">
            <h1>{headline}</h1>
            <Show
                when=signed_out
                fallback=|| view! { <A href="/admin">"Open the admin portal"</A> }
            >
                <p>"Sign in to reach the admin portal."</p>
            </Show>
        </section>
    }
}
