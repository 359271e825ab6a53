//! Root application component with routing and the session context.

use leptos::prelude::*;
use leptos_meta::{MetaTags, provide_meta_context};
use leptos_router::{
    StaticSegment,
    components::{ParentRoute, Route, Router, Routes},
};

use crate::components::navbar::{NavShell, NavbarLayout};
use crate::mount::MOUNT_ELEMENT_ID;
use crate::pages::{
    admin_portal::AdminPortalPage, home::HomePage, login::LoginPage, not_found::NotFoundPage,
};
use crate::routes::View;
use crate::state::auth::AuthContext;

/// HTML shell rendered on the server for SSR + hydration.
///
/// The app lives inside a single `#root` element; `mount::hydrate_root`
/// attaches to that element in the browser.
pub fn shell(options: LeptosOptions) -> impl IntoView {
    view! {
        <!DOCTYPE html>
        <html lang="en">
            <head>
                <meta charset="utf-8"/>
                <meta name="viewport" content="width=device-width, initial-scale=1"/>
                <AutoReload options=options.clone()/>
                <HydrationScripts options/>
                <MetaTags/>
            </head>
            <body>
                <div id=MOUNT_ELEMENT_ID>
                    <App/>
                </div>
            </body>
        </html>
    }
}

/// Root application component.
///
/// Owns the one `AuthContext` for the app's lifetime and passes it to the
/// layout and each page. Every route, including the not-found fallback,
/// renders inside the navbar.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    let auth = AuthContext::new();
    auth.init();

    view! {
        <Router>
            <Routes fallback=move || view! { <NavShell auth=auth><NotFoundPage/></NavShell> }>
                <ParentRoute path=StaticSegment("") view=move || view! { <NavbarLayout auth=auth/> }>
                    <Route
                        path=StaticSegment(View::Home.segment())
                        view=move || view! { <HomePage auth=auth/> }
                    />
                    <Route
                        path=StaticSegment(View::Login.segment())
                        view=move || view! { <LoginPage auth=auth/> }
                    />
                    <Route
                        path=StaticSegment(View::AdminPortal.segment())
                        view=move || view! { <AdminPortalPage auth=auth/> }
                    />
                </ParentRoute>
            </Routes>
        </Router>
    }
}
