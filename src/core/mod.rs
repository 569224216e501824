//! Framework-independent models: auth presentation, theme styles and server configuration

pub mod auth;
#[cfg(feature = "ssr")]
pub mod config;
#[cfg(feature = "ssr")]
pub mod error;
pub mod style;

pub use auth::{AuthAction, AuthPresentationState, HeaderNav, NavItem, header_nav, signin_redirect};
pub use style::{StyleDecl, StyleMap, ThemeTokens, sign_in_styles};
