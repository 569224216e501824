//! Sign-in page component
//!
//! Wraps the sign-in form in a container styled from the current theme.

use leptos::prelude::*;
use leptos_router::hooks::use_navigate;

use crate::core::{StyleMap, signin_redirect};
use crate::ui::auth::{SigninForm, use_auth_context};
use crate::ui::theme::use_theme_context;

/// Sign-in page component
#[component]
pub fn SigninPage(
    /// Styles derived from the theme tokens
    #[prop(into)]
    styles: Signal<StyleMap>,
) -> impl IntoView {
    view! {
        <div class="signin-page" style=move || styles.with(|s| s.root.to_css())>
            <div class="signin-content" style=move || styles.with(|s| s.content.to_css())>
                <SigninForm />
            </div>
        </div>
    }
}

/// `/signin` route: feeds the theme styles in and leaves for the dashboard once signed in
///
/// This is the only place that redirects after sign-in; the form just flips the flag.
#[component]
pub fn SigninRoute() -> impl IntoView {
    let auth = use_auth_context();
    let theme = use_theme_context();

    Effect::new(move |_| {
        if let Some(path) = signin_redirect(auth.is_authenticated().into()) {
            let navigate = use_navigate();
            navigate(path, Default::default());
        }
    });

    view! { <SigninPage styles=theme.sign_in_styles /> }
}
