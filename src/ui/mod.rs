pub mod auth;
pub mod header;
pub mod pages;
pub mod theme;

pub use auth::{AuthContext, AuthState, provide_auth_context, use_auth_context};
pub use header::SiteHeader;
pub use theme::{ThemeContext, ThemeToggle, provide_theme_context, use_theme_context};
