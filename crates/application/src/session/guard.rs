//! Route guard run before every navigation.

use mealplan_domain::{GuardDecision, NavigationTarget, Route, SignInReason};
use tracing::debug;

use super::SessionContext;

/// Decides whether a navigation may proceed.
#[derive(Debug, Clone)]
pub struct NavigationGuard {
    session: SessionContext,
}

impl NavigationGuard {
    /// Creates a guard reading `session`.
    #[must_use]
    pub const fn new(session: SessionContext) -> Self {
        Self { session }
    }

    /// Checks `target` against the session.
    ///
    /// Anonymous users heading for a protected view go to sign-in, and the
    /// view is remembered for after the login. Logged-in users heading for
    /// a view that redirects them go to the post-login landing route if one
    /// is pending, and to the view's own redirect otherwise.
    pub async fn before_each(&self, target: &NavigationTarget) -> GuardDecision {
        let logged_in = self.session.is_logged_in().await;

        if target.requires_auth && !logged_in {
            if target.autologin_token.is_some() {
                return GuardDecision::Redirect(Route::WrongToken);
            }
            self.session.set_pending_redirect(target.route.clone()).await;
            return GuardDecision::Redirect(Route::sign_in(SignInReason::Required));
        }

        if logged_in {
            if self.session.landing_route().await.as_ref() == Some(&target.route) {
                self.session.take_landing_route().await;
                return GuardDecision::Proceed;
            }
            if let Some(redirect) = &target.redirect_if_logged {
                let next = self
                    .session
                    .take_landing_route()
                    .await
                    .unwrap_or_else(|| redirect.clone());
                debug!(from = %target.route, to = %next, "already logged in");
                return GuardDecision::Redirect(next);
            }
        }

        GuardDecision::Proceed
    }
}
