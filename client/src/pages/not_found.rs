//! Fallback for paths missing from the route table.

use leptos::prelude::*;
use leptos_router::components::A;

/// Rendered inside the navbar shell; answers SSR requests with 404.
#[component]
pub fn NotFoundPage() -> impl IntoView {
    #[cfg(feature = "ssr")]
    {
        if let Some(resp) = use_context::<leptos_axum::ResponseOptions>() {
            resp.set_status(http::StatusCode::NOT_FOUND);
        }
    }

    view! {
        <section class="not-found">
            <h1>"Page not found"</h1>
            <p>"There is nothing at this address."</p>
            <A href="/">"Back to home"</A>
        </section>
    }
}
