//! Not found page component
//!
//! A 404 error page displayed when a route is not found.

use leptos::prelude::*;
use leptos_router::components::A;

use crate::core::auth::HOME_PATH;

/// Not found (404) page component
#[component]
pub fn NotFoundPage() -> impl IntoView {
    // Set the HTTP status on the server response
    #[cfg(feature = "ssr")]
    {
        if let Some(response) = use_context::<leptos_axum::ResponseOptions>() {
            response.set_status(axum::http::StatusCode::NOT_FOUND);
        }
    }

    view! {
        <main class="page not-found">
            <h1>"404"</h1>
            <h2>"Page Not Found"</h2>
            <p class="muted">"The page you're looking for doesn't exist or has been moved."</p>
            <A href=HOME_PATH attr:class="btn-primary">"Go Home"</A>
        </main>
    }
}
