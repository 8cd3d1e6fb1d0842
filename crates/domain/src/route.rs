//! Navigation targets and modals the client core asks the UI for.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// Why the sign-in view is shown.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SignInReason {
    /// The target needs a logged-in user.
    Required,
    /// The session was rejected by the server.
    Expired,
}

/// A place in the UI.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(tag = "name", rename_all = "snake_case")]
pub enum Route {
    /// Sign-in view.
    SignIn {
        /// Why sign-in is asked.
        reason: SignInReason,
    },
    /// Unrecoverable server error.
    CriticalError,
    /// Access to the resource is not allowed.
    PermissionDenied,
    /// The user's subscription just ran out.
    Expired,
    /// Diet selection.
    DietChoice {
        /// Shortened configuration flow after login.
        fast_completion: bool,
    },
    /// The user's home.
    UserHome,
    /// The autologin token was refused.
    WrongToken,
    /// Any other view, owned by the UI.
    Named {
        /// View name.
        view: String,
        /// View parameters.
        #[serde(default)]
        params: BTreeMap<String, String>,
    },
}

impl Route {
    /// Sign-in with the given reason.
    #[must_use]
    pub const fn sign_in(reason: SignInReason) -> Self {
        Self::SignIn { reason }
    }

    /// A UI-owned view without parameters.
    #[must_use]
    pub fn named(view: impl Into<String>) -> Self {
        Self::Named {
            view: view.into(),
            params: BTreeMap::new(),
        }
    }

    /// Adds a parameter to a `Named` route; other routes are returned as-is.
    #[must_use]
    pub fn with_param(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        if let Self::Named { params, .. } = &mut self {
            params.insert(key.into(), value.into());
        }
        self
    }

    /// The view name.
    #[must_use]
    pub fn name(&self) -> &str {
        match self {
            Self::SignIn { .. } => "SignIn",
            Self::CriticalError => "CriticalError",
            Self::PermissionDenied => "PermissionDenied",
            Self::Expired => "Expired",
            Self::DietChoice { .. } => "DietChoice",
            Self::UserHome => "UserHome",
            Self::WrongToken => "WrongToken",
            Self::Named { view, .. } => view,
        }
    }

    /// Returns true for the sign-in view.
    #[must_use]
    pub const fn is_sign_in(&self) -> bool {
        matches!(self, Self::SignIn { .. })
    }
}

impl std::fmt::Display for Route {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

/// Global modal dialogs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Modal {
    /// The server is unreachable or in maintenance.
    Maintenance,
    /// The feature needs a premium subscription.
    Premium,
}

/// A navigation about to happen, with the metadata the guard needs.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NavigationTarget {
    /// Where the user is going.
    pub route: Route,
    /// Only logged-in users may see it.
    pub requires_auth: bool,
    /// Where to send a logged-in user instead, if anywhere.
    pub redirect_if_logged: Option<Route>,
    /// `autologin_token` carried by the navigation, if any.
    pub autologin_token: Option<String>,
}

impl NavigationTarget {
    /// A target that requires authentication, as views do by default.
    #[must_use]
    pub const fn new(route: Route) -> Self {
        Self {
            route,
            requires_auth: true,
            redirect_if_logged: None,
            autologin_token: None,
        }
    }

    /// A target open to anonymous users.
    #[must_use]
    pub const fn public(route: Route) -> Self {
        Self {
            route,
            requires_auth: false,
            redirect_if_logged: None,
            autologin_token: None,
        }
    }

    /// Sends logged-in users to `route` instead.
    #[must_use]
    pub fn redirect_if_logged(mut self, route: Route) -> Self {
        self.redirect_if_logged = Some(route);
        self
    }

    /// Attaches an autologin token.
    #[must_use]
    pub fn with_autologin_token(mut self, token: impl Into<String>) -> Self {
        self.autologin_token = Some(token.into());
        self
    }
}

/// What the navigation guard decided.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GuardDecision {
    /// Let the navigation through.
    Proceed,
    /// Go somewhere else instead.
    Redirect(Route),
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_route_names() {
        assert_eq!(Route::sign_in(SignInReason::Expired).name(), "SignIn");
        assert_eq!(Route::named("RecipeDetails").name(), "RecipeDetails");
        assert_eq!(Route::DietChoice { fast_completion: true }.to_string(), "DietChoice");
    }

    #[test]
    fn test_only_sign_in_is_sign_in() {
        assert!(Route::sign_in(SignInReason::Required).is_sign_in());
        assert!(!Route::UserHome.is_sign_in());
        assert!(!Route::named("SignIn").is_sign_in());
    }

    #[test]
    fn test_params_only_on_named() {
        let route = Route::named("Recipe").with_param("id", "4");
        assert_eq!(
            route,
            Route::Named {
                view: "Recipe".to_string(),
                params: BTreeMap::from([("id".to_string(), "4".to_string())]),
            }
        );
        assert_eq!(Route::UserHome.with_param("id", "4"), Route::UserHome);
    }

    #[test]
    fn test_route_serialization() {
        let json = serde_json::to_value(Route::sign_in(SignInReason::Required)).unwrap_or_default();
        assert_eq!(json, serde_json::json!({"name": "sign_in", "reason": "required"}));
    }

    #[test]
    fn test_navigation_target_defaults() {
        let target = NavigationTarget::new(Route::UserHome);
        assert!(target.requires_auth);
        let target = NavigationTarget::public(Route::named("Home")).redirect_if_logged(Route::UserHome);
        assert!(!target.requires_auth);
        assert_eq!(target.redirect_if_logged, Some(Route::UserHome));
    }
}
