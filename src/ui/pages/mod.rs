//! Application pages module
//!
//! - Home page
//! - Dashboard
//! - Sign-in page
//! - Not found fallback

mod dashboard;
mod home;
mod not_found;
mod signin;

pub use dashboard::DashboardPage;
pub use home::HomePage;
pub use not_found::NotFoundPage;
pub use signin::{SigninPage, SigninRoute};
