//! Auth context for managing the signed-in flag
//!
//! This module provides the authentication provider used by the app:
//! - Holds a single reactive "signed in" flag
//! - Exposes idempotent `login` / `logout` actions
//! - Persists the flag to localStorage and restores it after hydration
//!
//! Components never receive the provider itself. They get an `AuthState`,
//! a read-only view of the flag plus the two actions.

use leptos::logging::log;
use leptos::prelude::*;
#[cfg(not(feature = "ssr"))]
use leptos::web_sys;

use crate::core::{AuthAction, AuthPresentationState};

#[allow(dead_code)]
const STORAGE_KEY_SIGNED_IN: &str = "gatehouse_signed_in";

/// Read-only auth record handed to subscribers
#[derive(Clone, Copy)]
pub struct AuthState {
    /// Whether a user is currently signed in
    pub is_authenticated: Signal<bool>,
    /// Requests a transition to the signed-in state
    pub login: Callback<()>,
    /// Requests a transition to the signed-out state
    pub logout: Callback<()>,
}

impl AuthState {
    pub fn new(is_authenticated: Signal<bool>, login: Callback<()>, logout: Callback<()>) -> Self {
        Self {
            is_authenticated,
            login,
            logout,
        }
    }

    /// Current flag as a presentation state (tracked)
    pub fn presentation(&self) -> AuthPresentationState {
        self.is_authenticated.get().into()
    }

    /// Run the action bound to a header control
    pub fn dispatch(&self, action: AuthAction) {
        match action {
            AuthAction::Login => self.login.run(()),
            AuthAction::Logout => self.logout.run(()),
        }
    }
}

/// Auth provider holding the signed-in flag
#[derive(Clone, Copy)]
pub struct AuthContext {
    signed_in: RwSignal<bool>,
}

impl AuthContext {
    pub fn new(signed_in: bool) -> Self {
        Self {
            signed_in: RwSignal::new(signed_in),
        }
    }

    /// Check if user is authenticated
    pub fn is_authenticated(&self) -> bool {
        self.signed_in.get()
    }

    /// Mark the user as signed in. No-op if already signed in.
    pub fn login(&self) {
        if self.signed_in.get_untracked() {
            return;
        }
        log!("auth: signed in");
        self.signed_in.set(true);
        save_to_storage(true);
    }

    /// Mark the user as signed out. No-op if already signed out.
    pub fn logout(&self) {
        if !self.signed_in.get_untracked() {
            return;
        }
        log!("auth: signed out");
        self.signed_in.set(false);
        save_to_storage(false);
    }

    /// Read-only view for subscribers
    pub fn state(&self) -> AuthState {
        let ctx = *self;
        AuthState {
            is_authenticated: self.signed_in.read_only().into(),
            login: Callback::new(move |_| ctx.login()),
            logout: Callback::new(move |_| ctx.logout()),
        }
    }
}

/// Provide auth context to the component tree
pub fn provide_auth_context() -> AuthContext {
    // Start signed out on both server and client to avoid hydration mismatch
    let ctx = AuthContext::new(false);

    // Restore the flag from localStorage after hydration (client-side only)
    #[cfg(not(feature = "ssr"))]
    {
        Effect::new(move |_| {
            if load_from_storage() {
                ctx.signed_in.set(true);
            }
        });
    }

    provide_context(ctx);
    ctx
}

/// Get auth context from the component tree
pub fn use_auth_context() -> AuthContext {
    expect_context::<AuthContext>()
}

/// Persist the flag to localStorage
#[cfg(not(feature = "ssr"))]
fn save_to_storage(signed_in: bool) {
    if let Some(window) = web_sys::window() {
        if let Ok(Some(storage)) = window.local_storage() {
            if signed_in {
                let _ = storage.set_item(STORAGE_KEY_SIGNED_IN, "1");
            } else {
                let _ = storage.remove_item(STORAGE_KEY_SIGNED_IN);
            }
        }
    }
}

/// Read the persisted flag from localStorage
#[cfg(not(feature = "ssr"))]
fn load_from_storage() -> bool {
    web_sys::window()
        .and_then(|window| window.local_storage().ok().flatten())
        .and_then(|storage| storage.get_item(STORAGE_KEY_SIGNED_IN).ok().flatten())
        .is_some_and(|value| value == "1")
}

#[cfg(feature = "ssr")]
fn save_to_storage(_signed_in: bool) {}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;
    use std::sync::atomic::{AtomicUsize, Ordering};

    fn counting_state(flag: bool) -> (AuthState, Arc<AtomicUsize>, Arc<AtomicUsize>) {
        let logins = Arc::new(AtomicUsize::new(0));
        let logouts = Arc::new(AtomicUsize::new(0));
        let state = AuthState::new(
            Signal::stored(flag),
            Callback::new({
                let logins = Arc::clone(&logins);
                move |_| {
                    logins.fetch_add(1, Ordering::SeqCst);
                }
            }),
            Callback::new({
                let logouts = Arc::clone(&logouts);
                move |_| {
                    logouts.fetch_add(1, Ordering::SeqCst);
                }
            }),
        );
        (state, logins, logouts)
    }

    #[test]
    fn test_dispatch_login_calls_once_per_click() {
        let owner = Owner::new();
        owner.with(|| {
            let (state, logins, logouts) = counting_state(false);

            state.dispatch(AuthAction::Login);
            assert_eq!(logins.load(Ordering::SeqCst), 1);
            state.dispatch(AuthAction::Login);
            assert_eq!(logins.load(Ordering::SeqCst), 2);
            assert_eq!(logouts.load(Ordering::SeqCst), 0);
        });
    }

    #[test]
    fn test_dispatch_logout_calls_once_per_click() {
        let owner = Owner::new();
        owner.with(|| {
            let (state, logins, logouts) = counting_state(true);

            state.dispatch(AuthAction::Logout);
            assert_eq!(logouts.load(Ordering::SeqCst), 1);
            assert_eq!(logins.load(Ordering::SeqCst), 0);
        });
    }

    #[test]
    fn test_presentation_follows_flag() {
        let owner = Owner::new();
        owner.with(|| {
            let (signed_in, _, _) = counting_state(true);
            let (signed_out, _, _) = counting_state(false);

            assert_eq!(
                signed_in.presentation(),
                AuthPresentationState::Authenticated
            );
            assert_eq!(
                signed_out.presentation(),
                AuthPresentationState::Unauthenticated
            );
        });
    }

    #[test]
    fn test_login_logout_are_idempotent() {
        let owner = Owner::new();
        owner.with(|| {
            let ctx = AuthContext::new(false);

            ctx.login();
            ctx.login();
            assert!(ctx.is_authenticated());

            ctx.logout();
            ctx.logout();
            assert!(!ctx.is_authenticated());
        });
    }

    #[test]
    fn test_state_view_tracks_provider() {
        let owner = Owner::new();
        owner.with(|| {
            let ctx = AuthContext::new(false);
            let state = ctx.state();

            assert!(!state.is_authenticated.get_untracked());
            state.dispatch(AuthAction::Login);
            assert!(state.is_authenticated.get_untracked());
            assert!(ctx.is_authenticated());
            state.dispatch(AuthAction::Logout);
            assert!(!state.is_authenticated.get_untracked());
        });
    }
}
