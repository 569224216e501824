//! Authentication UI module
//!
//! This module provides the auth provider and the sign-in form.

mod context;
mod signin_form;

pub use context::{AuthContext, AuthState, provide_auth_context, use_auth_context};
pub use signin_form::{SigninForm, validate_email, validate_password};
