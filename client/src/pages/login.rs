//! Login page with email + password sign-in.

#[cfg(test)]
#[path = "login_test.rs"]
mod login_test;

use leptos::prelude::*;
use leptos_router::components::A;
use leptos_router::hooks::{use_navigate, use_query_map};

use crate::state::auth::AuthContext;
use crate::util::auth::safe_next_path;

pub const MISSING_FIELDS_MESSAGE: &str = "Enter your email and password.";
pub const INVALID_EMAIL_MESSAGE: &str = "Enter a valid email address.";

/// Trim the email and require both fields.
///
/// The password is passed through untouched; leading/trailing spaces may be
/// part of it.
pub fn validate_login_input(email: &str, password: &str) -> Result<(String, String), &'static str> {
    let email = email.trim();
    if email.is_empty() || password.is_empty() {
        return Err(MISSING_FIELDS_MESSAGE);
    }
    match email.split_once('@') {
        Some((local, domain)) if !local.is_empty() && !domain.is_empty() => {
            Ok((email.to_owned(), password.to_owned()))
        }
        _ => Err(INVALID_EMAIL_MESSAGE),
    }
}

#[component]
pub fn LoginPage(auth: AuthContext) -> impl IntoView {
    let email = RwSignal::new(String::new());
    let password = RwSignal::new(String::new());
    let info = RwSignal::new(String::new());
    let busy = RwSignal::new(false);
    let query = use_query_map();
    let navigate = use_navigate();

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if busy.get_untracked() {
            return;
        }
        let (email_value, password_value) =
            match validate_login_input(&email.get_untracked(), &password.get_untracked()) {
                Ok(values) => values,
                Err(msg) => {
                    info.set(msg.to_owned());
                    return;
                }
            };
        let next = safe_next_path(query.with_untracked(|q| q.get("next")).as_deref()).to_owned();
        busy.set(true);
        info.set("Signing in...".to_owned());

        #[cfg(feature = "hydrate")]
        {
            let navigate = navigate.clone();
            leptos::task::spawn_local(async move {
                match crate::net::api::login(&email_value, &password_value).await {
                    Ok(user) => {
                        log::info!("signed in as {}", user.id);
                        auth.sign_in(user);
                        password.set(String::new());
                        info.set(String::new());
                        busy.set(false);
                        navigate(&next, leptos_router::NavigateOptions::default());
                    }
                    Err(e) => {
                        info.set(format!("Sign-in failed: {e}"));
                        busy.set(false);
                    }
                }
            });
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = (&navigate, email_value, password_value, next);
        }
    };

    let signed_in_as = move || auth.user().map(|u| u.name);

    view! {
        <div class="login-page">
            <div class="login-card">
                <h1>"Sign in"</h1>
                <Show when=move || signed_in_as().is_some()>
                    <p class="login-message">
                        "Signed in as " {move || signed_in_as().unwrap_or_default()} ". "
                        <A href="/">"Continue"</A>
                    </p>
                </Show>
                <form class="login-form" on:submit=on_submit>
                    <input
                        class="login-input"
                        type="email"
                        autocomplete="username"
                        placeholder="you@example.com"
                        prop:value=move || email.get()
                        on:input=move |ev| email.set(event_target_value(&ev))
                    />
                    <input
                        class="login-input"
                        type="password"
                        autocomplete="current-password"
                        placeholder="Password"
                        prop:value=move || password.get()
                        on:input=move |ev| password.set(event_target_value(&ev))
                    />
                    <button class="login-button" type="submit" disabled=move || busy.get()>
                        "Sign in"
                    </button>
                </form>
                <Show when=move || !info.get().is_empty()>
                    <p class="login-message">{move || info.get()}</p>
                </Show>
            </div>
        </div>
    }
}
