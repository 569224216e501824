//! Authentication presentation model
//!
//! The header never looks at the raw flag directly. It converts it into an
//! `AuthPresentationState` and asks `header_nav` what to show, so the whole
//! branching contract can be checked without a DOM.

pub const HOME_PATH: &str = "/";
pub const DASHBOARD_PATH: &str = "/dashboard";
pub const SIGNIN_PATH: &str = "/signin";

/// What the header should present for the current auth flag
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AuthPresentationState {
    Authenticated,
    Unauthenticated,
}

impl AuthPresentationState {
    pub fn is_authenticated(&self) -> bool {
        matches!(self, AuthPresentationState::Authenticated)
    }
}

impl From<bool> for AuthPresentationState {
    fn from(is_authenticated: bool) -> Self {
        if is_authenticated {
            AuthPresentationState::Authenticated
        } else {
            AuthPresentationState::Unauthenticated
        }
    }
}

/// Actions a header control can request from the auth provider
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AuthAction {
    Login,
    Logout,
}

impl AuthAction {
    pub fn label(&self) -> &'static str {
        match self {
            AuthAction::Login => "login",
            AuthAction::Logout => "logout",
        }
    }
}

/// A single header entry
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NavItem {
    Link {
        label: &'static str,
        href: &'static str,
    },
    Control(AuthAction),
}

impl NavItem {
    pub fn href(&self) -> Option<&'static str> {
        match self {
            NavItem::Link { href, .. } => Some(href),
            NavItem::Control(_) => None,
        }
    }

    pub fn action(&self) -> Option<AuthAction> {
        match self {
            NavItem::Control(action) => Some(*action),
            NavItem::Link { .. } => None,
        }
    }
}

/// Header contents for one auth state
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HeaderNav {
    pub home: NavItem,
    pub state: AuthPresentationState,
    pub items: Vec<NavItem>,
}

impl HeaderNav {
    /// All links, home first
    pub fn links(&self) -> impl Iterator<Item = &'static str> + '_ {
        std::iter::once(&self.home)
            .chain(self.items.iter())
            .filter_map(NavItem::href)
    }

    /// All controls, in render order
    pub fn actions(&self) -> impl Iterator<Item = AuthAction> + '_ {
        self.items.iter().filter_map(NavItem::action)
    }
}

/// Build the header for a given state
pub fn header_nav(state: AuthPresentationState) -> HeaderNav {
    let items = match state {
        AuthPresentationState::Authenticated => vec![
            NavItem::Link {
                label: "Dashboard",
                href: DASHBOARD_PATH,
            },
            NavItem::Control(AuthAction::Logout),
        ],
        AuthPresentationState::Unauthenticated => vec![NavItem::Control(AuthAction::Login)],
    };

    HeaderNav {
        home: NavItem::Link {
            label: "HOME",
            href: HOME_PATH,
        },
        state,
        items,
    }
}

/// Where the sign-in route sends a visitor, if anywhere
pub fn signin_redirect(state: AuthPresentationState) -> Option<&'static str> {
    state.is_authenticated().then_some(DASHBOARD_PATH)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_flag() {
        assert_eq!(
            AuthPresentationState::from(true),
            AuthPresentationState::Authenticated
        );
        assert_eq!(
            AuthPresentationState::from(false),
            AuthPresentationState::Unauthenticated
        );
        assert!(AuthPresentationState::Authenticated.is_authenticated());
        assert!(!AuthPresentationState::Unauthenticated.is_authenticated());
    }

    #[test]
    fn test_exactly_one_branch() {
        for flag in [true, false] {
            let nav = header_nav(flag.into());
            let actions: Vec<_> = nav.actions().collect();
            assert_eq!(actions.len(), 1);
            if flag {
                assert_eq!(actions, vec![AuthAction::Logout]);
            } else {
                assert_eq!(actions, vec![AuthAction::Login]);
            }
        }
    }

    #[test]
    fn test_home_link_always_present() {
        for flag in [true, false] {
            let nav = header_nav(flag.into());
            assert_eq!(nav.home.href(), Some(HOME_PATH));
            assert_eq!(nav.links().next(), Some("/"));
        }
    }

    #[test]
    fn test_dashboard_only_when_authenticated() {
        let signed_in: Vec<_> = header_nav(AuthPresentationState::Authenticated)
            .links()
            .collect();
        assert_eq!(signed_in, vec!["/", "/dashboard"]);

        let signed_out: Vec<_> = header_nav(AuthPresentationState::Unauthenticated)
            .links()
            .collect();
        assert_eq!(signed_out, vec!["/"]);
    }

    #[test]
    fn test_authenticated_order() {
        let nav = header_nav(AuthPresentationState::Authenticated);
        assert_eq!(
            nav.items,
            vec![
                NavItem::Link {
                    label: "Dashboard",
                    href: DASHBOARD_PATH
                },
                NavItem::Control(AuthAction::Logout),
            ]
        );
    }

    #[test]
    fn test_nav_is_deterministic() {
        assert_eq!(
            header_nav(AuthPresentationState::Authenticated),
            header_nav(AuthPresentationState::Authenticated)
        );
        assert_ne!(
            header_nav(AuthPresentationState::Authenticated),
            header_nav(AuthPresentationState::Unauthenticated)
        );
    }

    #[test]
    fn test_signin_redirect_only_when_signed_in() {
        assert_eq!(
            signin_redirect(AuthPresentationState::Authenticated),
            Some(DASHBOARD_PATH)
        );
        assert_eq!(signin_redirect(AuthPresentationState::Unauthenticated), None);
    }

    #[test]
    fn test_action_labels() {
        assert_eq!(AuthAction::Login.label(), "login");
        assert_eq!(AuthAction::Logout.label(), "logout");
    }
}
