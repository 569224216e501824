//! Sign-in form component
//!
//! Email and password inputs with inline validation. A valid submit asks the
//! auth provider to sign in; leaving the page is up to the route hosting the form.

use leptos::prelude::*;

use super::context::use_auth_context;

/// Validate an email address, returning the message to show on failure
pub fn validate_email(value: &str) -> Result<(), &'static str> {
    let value = value.trim();
    if value.is_empty() {
        return Err("Email is required");
    }
    match value.split_once('@') {
        Some((local, domain)) if !local.is_empty() && domain.contains('.') => Ok(()),
        _ => Err("Please enter a valid email"),
    }
}

/// Validate a password, returning the message to show on failure
pub fn validate_password(value: &str) -> Result<(), &'static str> {
    if value.is_empty() {
        Err("Password is required")
    } else {
        Ok(())
    }
}

/// Sign-in form component
#[component]
pub fn SigninForm() -> impl IntoView {
    let auth = use_auth_context();

    // Form state
    let email = RwSignal::new(String::new());
    let password = RwSignal::new(String::new());

    // Field errors
    let email_error = RwSignal::new(None::<&'static str>);
    let password_error = RwSignal::new(None::<&'static str>);

    let check_email = move || {
        let result = validate_email(&email.get_untracked());
        email_error.set(result.err());
        result.is_ok()
    };

    let check_password = move || {
        let result = validate_password(&password.get_untracked());
        password_error.set(result.err());
        result.is_ok()
    };

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();

        // Validate both so each field shows its own message
        let email_ok = check_email();
        let password_ok = check_password();
        if !email_ok || !password_ok {
            return;
        }

        password.set(String::new());
        auth.login();
    };

    view! {
        <form on:submit=on_submit class="signin-form">
            <h2 class="signin-title">"Sign in"</h2>

            <div class="form-field">
                <label for="email">"Email"</label>
                <input
                    type="email"
                    id="email"
                    name="email"
                    autocomplete="email"
                    placeholder="you@example.com"
                    class:input-error=move || email_error.get().is_some()
                    prop:value=move || email.get()
                    on:input=move |ev| {
                        email.set(event_target_value(&ev));
                        email_error.set(None);
                    }
                    on:blur=move |_| { check_email(); }
                />
                {move || email_error.get().map(|error| view! { <p class="field-error">{error}</p> })}
            </div>

            <div class="form-field">
                <label for="password">"Password"</label>
                <input
                    type="password"
                    id="password"
                    name="password"
                    autocomplete="current-password"
                    class:input-error=move || password_error.get().is_some()
                    prop:value=move || password.get()
                    on:input=move |ev| {
                        password.set(event_target_value(&ev));
                        password_error.set(None);
                    }
                    on:blur=move |_| { check_password(); }
                />
                {move || password_error.get().map(|error| view! { <p class="field-error">{error}</p> })}
            </div>

            <button type="submit" class="btn-primary">"Sign In"</button>
        </form>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_email_required() {
        assert_eq!(validate_email(""), Err("Email is required"));
        assert_eq!(validate_email("   "), Err("Email is required"));
    }

    #[test]
    fn test_email_shape() {
        assert_eq!(validate_email("user@example.com"), Ok(()));
        assert_eq!(validate_email("  user@example.com "), Ok(()));
        assert_eq!(validate_email("user"), Err("Please enter a valid email"));
        assert_eq!(validate_email("@example.com"), Err("Please enter a valid email"));
        assert_eq!(validate_email("user@localhost"), Err("Please enter a valid email"));
    }

    #[test]
    fn test_password_required() {
        assert_eq!(validate_password(""), Err("Password is required"));
        assert_eq!(validate_password(" "), Ok(()));
        assert_eq!(validate_password("hunter2"), Ok(()));
    }
}
