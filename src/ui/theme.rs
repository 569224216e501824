//! Theme context module for managing dark/light/automatic theme
//!
//! Provides:
//! - ThemeMode enum (Auto, Dark, Light)
//! - ThemeContext with reactive theme tokens and the sign-in style map
//! - System theme detection via prefers-color-scheme
//! - LocalStorage persistence
//!
//! The light tokens come from server configuration. The server renders them
//! into a `<meta>` tag so the hydrating client starts from the same values.

use leptos::prelude::*;

#[cfg(not(feature = "ssr"))]
use leptos::web_sys;

use crate::core::{StyleMap, ThemeTokens, sign_in_styles};

#[allow(dead_code)]
const STORAGE_KEY_THEME: &str = "gatehouse-theme";

/// Name of the meta tag carrying the server's theme tokens
pub const THEME_META_NAME: &str = "gatehouse-theme";

/// Theme mode options
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum ThemeMode {
    #[default]
    Auto,
    Dark,
    Light,
}

impl ThemeMode {
    pub fn as_str(&self) -> &'static str {
        match self {
            ThemeMode::Auto => "auto",
            ThemeMode::Dark => "dark",
            ThemeMode::Light => "light",
        }
    }

    pub fn parse(s: &str) -> Self {
        match s {
            "dark" => ThemeMode::Dark,
            "light" => ThemeMode::Light,
            _ => ThemeMode::Auto,
        }
    }

    /// Resolve against the system preference
    pub fn is_dark(&self, system_prefers_dark: bool) -> bool {
        match self {
            ThemeMode::Dark => true,
            ThemeMode::Light => false,
            ThemeMode::Auto => system_prefers_dark,
        }
    }
}

/// Tokens for the effective theme
pub fn resolve_tokens(base: &ThemeTokens, is_dark: bool) -> ThemeTokens {
    if is_dark {
        base.to_dark()
    } else {
        base.clone()
    }
}

/// Theme context for managing theme state
#[derive(Clone, Copy)]
pub struct ThemeContext {
    /// Current theme mode setting
    pub mode: RwSignal<ThemeMode>,
    /// Whether the current effective theme is dark (considering auto mode)
    pub is_dark: Memo<bool>,
    /// System prefers dark mode
    pub system_prefers_dark: RwSignal<bool>,
    /// Tokens of the effective theme
    pub tokens: Memo<ThemeTokens>,
    /// Sign-in styles, recomputed only when the tokens change
    pub sign_in_styles: Memo<StyleMap>,
}

impl ThemeContext {
    /// Set the theme mode and persist to localStorage
    pub fn set_mode(&self, mode: ThemeMode) {
        self.mode.set(mode);
        persist_theme(mode);
    }

    /// Flip between dark and light based on what is shown now
    pub fn toggle(&self) {
        let next = if self.is_dark.get_untracked() {
            ThemeMode::Light
        } else {
            ThemeMode::Dark
        };
        self.set_mode(next);
    }

    /// Apply the dark class to the document element
    pub fn apply_theme_class(&self) {
        #[cfg(not(feature = "ssr"))]
        {
            if let Some(html) = web_sys::window()
                .and_then(|window| window.document())
                .and_then(|document| document.document_element())
            {
                let class_list = html.class_list();
                if self.is_dark.get_untracked() {
                    let _ = class_list.add_1("dark");
                } else {
                    let _ = class_list.remove_1("dark");
                }
            }
        }
    }
}

/// Persist theme to localStorage
fn persist_theme(mode: ThemeMode) {
    #[cfg(not(feature = "ssr"))]
    {
        if let Some(window) = web_sys::window() {
            if let Ok(Some(storage)) = window.local_storage() {
                let _ = storage.set_item(STORAGE_KEY_THEME, mode.as_str());
            }
        }
    }
    #[cfg(feature = "ssr")]
    {
        let _ = mode;
    }
}

/// Load theme from localStorage
#[cfg(not(feature = "ssr"))]
fn load_persisted_theme() -> ThemeMode {
    if let Some(window) = web_sys::window() {
        if let Ok(Some(storage)) = window.local_storage() {
            if let Ok(Some(value)) = storage.get_item(STORAGE_KEY_THEME) {
                return ThemeMode::parse(&value);
            }
        }
    }
    ThemeMode::Auto
}

/// Detect system color scheme preference
#[cfg(not(feature = "ssr"))]
fn detect_system_prefers_dark() -> bool {
    if let Some(window) = web_sys::window() {
        if let Ok(Some(media_query)) = window.match_media("(prefers-color-scheme: dark)") {
            return media_query.matches();
        }
    }
    false
}

/// Light tokens configured on the server
///
/// On the server they come from context (provided by the shell); on the
/// client they are read back from the meta tag the shell rendered.
pub fn base_theme_tokens() -> ThemeTokens {
    #[cfg(feature = "ssr")]
    {
        use_context::<ThemeTokens>().unwrap_or_default()
    }
    #[cfg(not(feature = "ssr"))]
    {
        read_meta_tokens().unwrap_or_default()
    }
}

#[cfg(not(feature = "ssr"))]
fn read_meta_tokens() -> Option<ThemeTokens> {
    let document = web_sys::window()?.document()?;
    let selector = format!("meta[name=\"{}\"]", THEME_META_NAME);
    let meta = document.query_selector(&selector).ok()??;
    let content = meta.get_attribute("content")?;
    serde_json::from_str(&content).ok()
}

/// Provide theme context to the application
pub fn provide_theme_context(base: ThemeTokens) -> ThemeContext {
    // Server and first client render agree on Auto/light; the persisted mode
    // and system preference are applied after hydration.
    let mode = RwSignal::new(ThemeMode::Auto);
    let system_prefers_dark = RwSignal::new(false);

    let is_dark = Memo::new(move |_| mode.get().is_dark(system_prefers_dark.get()));
    let tokens = Memo::new(move |_| resolve_tokens(&base, is_dark.get()));
    let styles = Memo::new(move |_| tokens.with(sign_in_styles));

    let ctx = ThemeContext {
        mode,
        is_dark,
        system_prefers_dark,
        tokens,
        sign_in_styles: styles,
    };

    #[cfg(not(feature = "ssr"))]
    {
        use leptos::wasm_bindgen::JsCast;
        use leptos::wasm_bindgen::closure::Closure;

        Effect::new(move |_| {
            mode.set(load_persisted_theme());
            system_prefers_dark.set(detect_system_prefers_dark());

            // Listen for system theme changes
            if let Some(window) = web_sys::window() {
                if let Ok(Some(media_query)) = window.match_media("(prefers-color-scheme: dark)") {
                    let handler = Closure::<dyn Fn(web_sys::MediaQueryListEvent)>::new(
                        move |e: web_sys::MediaQueryListEvent| {
                            system_prefers_dark.set(e.matches());
                        },
                    );

                    let _ = media_query.add_event_listener_with_callback(
                        "change",
                        handler.as_ref().unchecked_ref(),
                    );

                    // Keep the closure alive
                    handler.forget();
                }
            }
        });

        // Apply theme class initially and on changes
        Effect::new(move |_| {
            let _ = ctx.is_dark.get();
            ctx.apply_theme_class();
        });
    }

    provide_context(ctx);

    ctx
}

/// Use theme context from anywhere in the component tree
pub fn use_theme_context() -> ThemeContext {
    expect_context::<ThemeContext>()
}

/// Button switching between light and dark
#[component]
pub fn ThemeToggle() -> impl IntoView {
    let theme = use_theme_context();

    view! {
        <button
            type="button"
            class="theme-toggle"
            title="Toggle theme"
            on:click=move |_| theme.toggle()
        >
            {move || if theme.is_dark.get() { "light" } else { "dark" }}
        </button>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::style::DARK_BACKGROUND;

    #[test]
    fn test_mode_parse_roundtrip() {
        for mode in [ThemeMode::Auto, ThemeMode::Dark, ThemeMode::Light] {
            assert_eq!(ThemeMode::parse(mode.as_str()), mode);
        }
        assert_eq!(ThemeMode::parse("sepia"), ThemeMode::Auto);
    }

    #[test]
    fn test_mode_resolution() {
        assert!(ThemeMode::Dark.is_dark(false));
        assert!(!ThemeMode::Light.is_dark(true));
        assert!(ThemeMode::Auto.is_dark(true));
        assert!(!ThemeMode::Auto.is_dark(false));
    }

    #[test]
    fn test_resolve_tokens() {
        let base = ThemeTokens::new("#ffffff", 6);
        assert_eq!(resolve_tokens(&base, false), base);

        let dark = resolve_tokens(&base, true);
        assert_eq!(dark.palette.background.default, DARK_BACKGROUND);
        assert_eq!(dark.spacing.unit, 6);
    }

    #[test]
    fn test_styles_follow_mode() {
        let owner = Owner::new();
        owner.with(|| {
            let ctx = provide_theme_context(ThemeTokens::new("#ffffff", 2));

            let light = ctx.sign_in_styles.get_untracked();
            assert_eq!(light.content.get("background-color"), Some("#ffffff"));
            assert_eq!(light.content.get("padding"), Some("6px"));

            ctx.set_mode(ThemeMode::Dark);
            let dark = ctx.sign_in_styles.get_untracked();
            assert_eq!(dark.content.get("background-color"), Some(DARK_BACKGROUND));

            ctx.toggle();
            assert_eq!(ctx.mode.get_untracked(), ThemeMode::Light);
        });
    }

    #[test]
    fn test_base_tokens_from_context() {
        let owner = Owner::new();
        owner.with(|| {
            assert_eq!(base_theme_tokens(), ThemeTokens::default());
            provide_context(ThemeTokens::new("#010101", 3));
            assert_eq!(base_theme_tokens(), ThemeTokens::new("#010101", 3));
        });
    }
}
