//! Site header
//!
//! Shows a home link plus either the dashboard link and a logout button, or a
//! login button. The auth record is injected by the caller.

use leptos::prelude::*;
use leptos_router::components::A;

use crate::core::{AuthPresentationState, NavItem, header_nav};
use crate::ui::auth::AuthState;

/// Site header component
#[component]
pub fn SiteHeader(
    /// Auth flag and actions to render against
    auth: AuthState,
) -> impl IntoView {
    let render_item = move |item: NavItem| match item {
        NavItem::Link { label, href } => view! {
            <A href=href attr:class="nav-link">{label}</A>
        }
        .into_any(),
        NavItem::Control(action) => view! {
            <button
                type="button"
                class="nav-button"
                on:click=move |_| auth.dispatch(action)
            >
                {action.label()}
            </button>
        }
        .into_any(),
    };

    view! {
        <header class="site-header">
            <div class="header-content">
                {move || {
                    let nav = header_nav(auth.presentation());
                    let home = render_item(nav.home);
                    let items = nav.items.into_iter().map(render_item).collect_view();

                    match nav.state {
                        AuthPresentationState::Authenticated => view! {
                            <h3>{home}</h3>
                            <ul class="nav-items">{items}</ul>
                        }
                        .into_any(),
                        AuthPresentationState::Unauthenticated => view! {
                            <h3>{home}</h3>
                            {items}
                        }
                        .into_any(),
                    }
                }}
            </div>
        </header>
    }
}

#[cfg(all(test, feature = "ssr"))]
mod tests {
    use super::*;
    use leptos::tachys::view::RenderHtml;
    use leptos_router::components::Router;
    use leptos_router::location::RequestUrl;

    fn render_header(signed_in: bool) -> String {
        let owner = Owner::new();
        owner.with(|| {
            provide_context(RequestUrl::new("/"));
            let auth = AuthState::new(
                Signal::stored(signed_in),
                Callback::new(|_| {}),
                Callback::new(|_| {}),
            );

            view! {
                <Router>
                    <SiteHeader auth=auth />
                </Router>
            }
            .to_html()
        })
    }

    #[test]
    fn test_signed_in_header() {
        let html = render_header(true);
        assert!(html.contains("href=\"/\""));
        assert!(html.contains("HOME"));
        assert!(html.contains("<ul"));
        assert!(html.contains("href=\"/dashboard\""));
        assert!(html.contains("logout"));
        assert!(!html.contains("login"));
        assert_eq!(html.matches("<button").count(), 1);
    }

    #[test]
    fn test_signed_out_header() {
        let html = render_header(false);
        assert!(html.contains("href=\"/\""));
        assert!(html.contains("HOME"));
        assert!(html.contains("login"));
        assert!(!html.contains("logout"));
        assert!(!html.contains("<ul"));
        assert!(!html.contains("/dashboard"));
        assert_eq!(html.matches("<button").count(), 1);
    }
}
