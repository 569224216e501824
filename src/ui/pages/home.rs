//! Home page component

use leptos::prelude::*;
use leptos_router::components::A;

use crate::core::auth::{DASHBOARD_PATH, SIGNIN_PATH};
use crate::ui::auth::use_auth_context;

/// Home page component
#[component]
pub fn HomePage() -> impl IntoView {
    let auth = use_auth_context();

    view! {
        <main class="page">
            <h1>"Welcome"</h1>
            {move || {
                if auth.is_authenticated() {
                    view! {
                        <p>
                            "You are signed in. Head to your "
                            <A href=DASHBOARD_PATH>"dashboard"</A>
                            "."
                        </p>
                    }
                    .into_any()
                } else {
                    view! {
                        <p>
                            <A href=SIGNIN_PATH>"Sign in"</A>
                            " to continue."
                        </p>
                    }
                    .into_any()
                }
            }}
        </main>
    }
}
