//! Shared session state.
//!
//! One `SessionContext` is created per client and cloned into the gateway,
//! the dispatcher, the session service and the navigation guard. Updates are
//! last-write-wins.

use std::sync::Arc;

use chrono::{DateTime, Utc};
use mealplan_domain::{AuthTokens, CurrentUser, Id, Role, Route};
use tokio::sync::RwLock;
use tracing::{info, warn};

use crate::ports::{StorageError, TokenStorage};

#[derive(Debug, Default)]
struct SessionState {
    tokens: Option<AuthTokens>,
    user: Option<CurrentUser>,
    pending_redirect: Option<Route>,
    landing_route: Option<Route>,
    promo_code: Option<String>,
}

/// Handle on the client's single session.
#[derive(Clone)]
pub struct SessionContext {
    state: Arc<RwLock<SessionState>>,
    storage: Arc<dyn TokenStorage>,
}

impl std::fmt::Debug for SessionContext {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SessionContext").finish_non_exhaustive()
    }
}

impl SessionContext {
    /// Creates an empty session persisting its tokens to `storage`.
    #[must_use]
    pub fn new(storage: Arc<dyn TokenStorage>) -> Self {
        Self {
            state: Arc::new(RwLock::new(SessionState::default())),
            storage,
        }
    }

    /// Loads persisted tokens into the session.
    ///
    /// Returns true if tokens were found.
    ///
    /// # Errors
    ///
    /// Returns an error if the storage cannot be read.
    pub async fn restore(&self) -> Result<bool, StorageError> {
        let tokens = self.storage.load().await?;
        let found = tokens.is_some();
        self.state.write().await.tokens = tokens;
        Ok(found)
    }

    /// Current token pair.
    pub async fn tokens(&self) -> Option<AuthTokens> {
        self.state.read().await.tokens.clone()
    }

    /// Stores and persists a new token pair.
    ///
    /// # Errors
    ///
    /// Returns an error if the tokens cannot be persisted; the in-memory
    /// session is updated anyway.
    pub async fn set_tokens(&self, tokens: AuthTokens) -> Result<(), StorageError> {
        self.state.write().await.tokens = Some(tokens.clone());
        self.storage.save(&tokens).await
    }

    /// Replaces the access token after a refresh, keeping the refresh token.
    ///
    /// # Errors
    ///
    /// Returns an error if the tokens cannot be persisted.
    pub async fn set_access_token(&self, access: String) -> Result<(), StorageError> {
        let tokens = {
            let mut state = self.state.write().await;
            let Some(tokens) = state.tokens.as_mut() else {
                return Ok(());
            };
            tokens.access = access;
            tokens.clone()
        };
        self.storage.save(&tokens).await
    }

    /// Drops the tokens, in memory and in storage.
    pub async fn clear_tokens(&self) {
        self.state.write().await.tokens = None;
        if let Err(e) = self.storage.clear().await {
            warn!(error = %e, "failed to clear stored tokens");
        }
    }

    /// Ends the session: forgets the user, the tokens and any landing
    /// route not reached yet.
    pub async fn logout(&self) {
        let had_user = {
            let mut state = self.state.write().await;
            state.landing_route = None;
            state.user.take().is_some()
        };
        self.clear_tokens().await;
        if had_user {
            info!("session closed");
        }
    }

    /// The logged-in user, if any.
    pub async fn user(&self) -> Option<CurrentUser> {
        self.state.read().await.user.clone()
    }

    /// Records the logged-in user.
    pub async fn set_user(&self, user: CurrentUser) {
        info!(user_id = ?user.id, "user logged in");
        self.state.write().await.user = Some(user);
    }

    /// Returns true if a user is logged in.
    pub async fn is_logged_in(&self) -> bool {
        self.state.read().await.user.is_some()
    }

    /// Id of the logged-in user.
    pub async fn user_id(&self) -> Option<Id> {
        self.state.read().await.user.as_ref().and_then(|u| u.id)
    }

    /// Checks a role of the logged-in user; `false` when logged out.
    pub async fn has_role(&self, role: Role) -> bool {
        self.state
            .read()
            .await
            .user
            .as_ref()
            .is_some_and(|u| u.has_role(role))
    }

    /// Returns true if the logged-in user joined less than 24 hours before `now`.
    pub async fn recently_joined(&self, now: DateTime<Utc>) -> bool {
        self.state
            .read()
            .await
            .user
            .as_ref()
            .is_some_and(|u| u.recently_joined(now))
    }

    /// Updates the user's first and last name.
    pub async fn set_user_fullname(&self, first_name: String, last_name: String) {
        if let Some(user) = self.state.write().await.user.as_mut() {
            user.set_fullname(first_name, last_name);
        }
    }

    /// Remembers where to go after the next login.
    ///
    /// The sign-in view itself is never recorded, so the first target
    /// survives the burst of rejections that follows an expired session.
    pub async fn set_pending_redirect(&self, route: Route) {
        if route.is_sign_in() {
            return;
        }
        self.state.write().await.pending_redirect = Some(route);
    }

    /// The recorded redirect, without consuming it.
    pub async fn pending_redirect(&self) -> Option<Route> {
        self.state.read().await.pending_redirect.clone()
    }

    /// Consumes the recorded redirect; `UserHome` if there is none.
    pub async fn pop_pending_redirect(&self) -> Route {
        self.state
            .write()
            .await
            .pending_redirect
            .take()
            .unwrap_or(Route::UserHome)
    }

    /// Records the view the post-login sequence wants shown.
    pub async fn set_landing_route(&self, route: Route) {
        self.state.write().await.landing_route = Some(route);
    }

    /// The recorded landing route, without consuming it.
    pub async fn landing_route(&self) -> Option<Route> {
        self.state.read().await.landing_route.clone()
    }

    /// Consumes the landing route.
    pub async fn take_landing_route(&self) -> Option<Route> {
        self.state.write().await.landing_route.take()
    }

    /// Promo code sent with the next signup.
    pub async fn promo_code(&self) -> Option<String> {
        self.state.read().await.promo_code.clone()
    }

    /// Sets the promo code sent with the next signup.
    pub async fn set_promo_code(&self, promo_code: Option<String>) {
        self.state.write().await.promo_code = promo_code;
    }
}
