//! Dashboard page component
//!
//! Only meaningful when signed in; otherwise points the visitor at the
//! sign-in page.

use leptos::prelude::*;
use leptos_router::components::A;

use crate::core::auth::SIGNIN_PATH;
use crate::ui::auth::use_auth_context;

/// Dashboard page component
#[component]
pub fn DashboardPage() -> impl IntoView {
    let auth = use_auth_context();

    view! {
        <main class="page">
            <h1>"Dashboard"</h1>
            <Show
                when=move || auth.is_authenticated()
                fallback=|| view! {
                    <p class="muted">
                        "You need to "
                        <A href=SIGNIN_PATH>"sign in"</A>
                        " to see your dashboard."
                    </p>
                }
            >
                <p>"You are signed in."</p>
            </Show>
        </main>
    }
}
