use leptos::prelude::*;
use leptos_meta::{MetaTags, Stylesheet, Title, provide_meta_context};
use leptos_router::components::{Route, Router, Routes};
use leptos_router::path;

use crate::ui::pages::{DashboardPage, HomePage, NotFoundPage, SigninRoute};
use crate::ui::theme::{THEME_META_NAME, base_theme_tokens};
use crate::ui::{SiteHeader, ThemeToggle, provide_auth_context, provide_theme_context};

pub fn shell(options: LeptosOptions) -> impl IntoView {
    // Hands the configured theme to the hydrating client
    let theme_json = serde_json::to_string(&base_theme_tokens()).unwrap_or_default();

    view! {
        <!DOCTYPE html>
        <html lang="en">
            <head>
                <meta charset="utf-8"/>
                <meta name="viewport" content="width=device-width, initial-scale=1"/>
                <meta name=THEME_META_NAME content=theme_json/>
                <AutoReload options=options.clone() />
                <HydrationScripts options/>
                <MetaTags/>
            </head>
            <body>
                <App/>
            </body>
        </html>
    }
}

#[component]
pub fn App() -> impl IntoView {
    // Provides context that manages stylesheets, titles, meta tags, etc.
    provide_meta_context();

    let auth = provide_auth_context();
    let _theme = provide_theme_context(base_theme_tokens());

    view! {
        // id=leptos means cargo-leptos will hot-reload this stylesheet
        <Stylesheet id="leptos" href="/pkg/gatehouse.css"/>

        <Title text="Gatehouse"/>

        <Router>
            <div class="app-frame">
                <SiteHeader auth=auth.state() />
                <ThemeToggle />
            </div>
            <Routes fallback=|| view! { <NotFoundPage /> }>
                <Route path=path!("/") view=HomePage />
                <Route path=path!("/dashboard") view=DashboardPage />
                <Route path=path!("/signin") view=SigninRoute />
            </Routes>
        </Router>
    }
}
