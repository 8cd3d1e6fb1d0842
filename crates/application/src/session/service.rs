//! Login, signup and session bootstrap flows.

use std::sync::Arc;

use mealplan_domain::{
    ApiRequest, ApiResponse, AuthTokens, CurrentUser, FeatureFlags, Id, Payload, Role, Route, StatusCode,
    catalog,
};
use serde_json::{Value, json};
use tracing::{debug, info};

use crate::error::{ApiError, SessionError, SessionResult};
use crate::gateway::Gateway;
use crate::ports::{CancellationReceiver, Clock, HttpTransport, Navigator};

use super::SessionContext;

/// `status` of a successful signup or autologin answer.
const STATUS_OK: &str = "ok";

/// Result of a login or signup attempt.
#[derive(Debug, Clone, PartialEq)]
pub enum LoginOutcome {
    /// The session is open.
    Connected,
    /// The server refused; `data` is its answer, for the form to display.
    Rejected {
        /// Response body of the refusal, `Null` when none was received.
        data: Value,
    },
}

impl LoginOutcome {
    /// Returns true if the session is open.
    #[must_use]
    pub const fn is_connected(&self) -> bool {
        matches!(self, Self::Connected)
    }

    /// `{connected: true}` or `{connected: false, data}`.
    #[must_use]
    pub fn to_value(&self) -> Value {
        match self {
            Self::Connected => json!({ "connected": true }),
            Self::Rejected { data } => json!({ "connected": false, "data": data }),
        }
    }
}

/// How a flow decides that its answer opened a session.
#[derive(Debug, Clone, Copy)]
enum Acceptance {
    /// HTTP 200; anything else also logs out.
    StatusOk,
    /// `status: "ok"` in the body.
    BodyOk,
}

/// Session flows over the gateway.
pub struct SessionService<T> {
    gateway: Arc<Gateway<T>>,
    navigator: Arc<dyn Navigator>,
    clock: Arc<dyn Clock>,
    features: FeatureFlags,
    secure_mode: bool,
}

impl<T: HttpTransport> SessionService<T> {
    /// Creates the service. `secure_mode` keeps the role flags the server
    /// sends; otherwise they are all cleared.
    #[must_use]
    pub fn new(
        gateway: Arc<Gateway<T>>,
        navigator: Arc<dyn Navigator>,
        clock: Arc<dyn Clock>,
        features: FeatureFlags,
        secure_mode: bool,
    ) -> Self {
        Self {
            gateway,
            navigator,
            clock,
            features,
            secure_mode,
        }
    }

    /// The shared session.
    #[must_use]
    pub fn session(&self) -> &SessionContext {
        self.gateway.session()
    }

    /// Loads the persisted tokens.
    ///
    /// # Errors
    ///
    /// Returns an error if the token storage cannot be read.
    pub async fn restore(&self) -> SessionResult<bool> {
        let found = self.session().restore().await?;
        debug!(found, "persisted tokens restored");
        Ok(found)
    }

    /// Logs in with user credentials.
    ///
    /// A refusal is reported in the outcome, not as an error.
    ///
    /// # Errors
    ///
    /// Returns an error if the post-login sequence fails.
    pub async fn login(&self, credentials: Payload) -> SessionResult<LoginOutcome> {
        let request = catalog::LOGIN.request(()).with_payload(credentials);
        self.open(&request, Acceptance::StatusOk).await
    }

    /// Logs in with a Facebook access token.
    ///
    /// # Errors
    ///
    /// Returns an error if the post-login sequence fails.
    pub async fn facebook_login(&self, fb_access_token: &str) -> SessionResult<LoginOutcome> {
        let payload = Payload::new().with("fbInputToken", fb_access_token);
        let request = catalog::FACEBOOK_LOGIN.request(()).with_payload(payload);
        self.open(&request, Acceptance::StatusOk).await
    }

    /// Creates an account. The session's promo code is sent along.
    ///
    /// # Errors
    ///
    /// Returns an error if the post-login sequence fails.
    pub async fn signup(&self, form: Payload) -> SessionResult<LoginOutcome> {
        let promo_code = self.session().promo_code().await;
        let request = catalog::SIGNUP
            .request(())
            .with_payload(form.with("promoCode", promo_code));
        self.open(&request, Acceptance::BodyOk).await
    }

    /// Creates an account from a Facebook access token.
    ///
    /// # Errors
    ///
    /// Returns an error if the post-login sequence fails.
    pub async fn facebook_signup(&self, fb_access_token: &str) -> SessionResult<LoginOutcome> {
        let promo_code = self.session().promo_code().await;
        let payload = Payload::new()
            .with("accessToken", fb_access_token)
            .with("promoCode", promo_code);
        let request = catalog::FACEBOOK_SIGNUP.request(()).with_payload(payload);
        self.open(&request, Acceptance::BodyOk).await
    }

    /// Logs in with a one-time autologin token.
    ///
    /// # Errors
    ///
    /// Returns an error if the post-login sequence fails.
    pub async fn autologin(&self, token: &str) -> SessionResult<LoginOutcome> {
        let payload = Payload::new().with("token", token);
        let request = catalog::AUTOLOGIN.request(()).with_payload(payload);
        self.open(&request, Acceptance::BodyOk).await
    }

    /// Bootstraps the session at start-up.
    ///
    /// With an autologin token, logs in with it first and shows
    /// `WrongToken` if the server refuses it. Then asks the server who is
    /// logged in: the answer replaces the local user, or logs out.
    ///
    /// # Errors
    ///
    /// Returns an error if a call fails or the user record is invalid.
    pub async fn load(&self, autologin_token: Option<&str>) -> SessionResult<()> {
        if let Some(token) = autologin_token
            && !self.autologin(token).await?.is_connected()
        {
            info!("autologin token refused");
            self.navigator.navigate(Route::WrongToken);
        }

        let body = self.gateway.fetch(&catalog::CURRENT_USER.request(())).await?;
        if CurrentUser::is_logged_in_status(&body) {
            let user = CurrentUser::from_server(body, self.secure_mode)?;
            self.session().set_user(user).await;
        } else {
            self.session().logout().await;
        }
        Ok(())
    }

    /// Ends the session. No navigation happens.
    pub async fn logout(&self) {
        self.session().logout().await;
    }

    /// Sets the promo code sent with the next signup.
    pub async fn set_promo_code(&self, promo_code: Option<String>) {
        self.session().set_promo_code(promo_code).await;
    }

    /// Updates the logged-in user's names locally.
    pub async fn set_user_fullname(&self, first_name: String, last_name: String) {
        self.session()
            .set_user_fullname(first_name, last_name)
            .await;
    }

    /// The logged-in user.
    pub async fn user(&self) -> Option<CurrentUser> {
        self.session().user().await
    }

    /// Returns true if a user is logged in.
    pub async fn is_logged_in(&self) -> bool {
        self.session().is_logged_in().await
    }

    /// Id of the logged-in user.
    pub async fn user_id(&self) -> Option<Id> {
        self.session().user_id().await
    }

    /// Returns true if the logged-in user has `role`.
    pub async fn has_role(&self, role: Role) -> bool {
        self.session().has_role(role).await
    }

    /// Returns true if the logged-in user joined in the last 24 hours.
    pub async fn recently_joined(&self) -> bool {
        self.session().recently_joined(self.clock.now()).await
    }

    async fn open(
        &self,
        request: &ApiRequest,
        acceptance: Acceptance,
    ) -> SessionResult<LoginOutcome> {
        let response = match self
            .gateway
            .send_raw(request, CancellationReceiver::never())
            .await
        {
            Ok(response) => response,
            Err(ApiError::Cancelled) => return Err(ApiError::Cancelled.into()),
            Err(e) => {
                debug!(operation = request.name(), error = %e, "login refused");
                return Ok(LoginOutcome::Rejected {
                    data: e.body().cloned().unwrap_or(Value::Null),
                });
            }
        };

        let accepted = match acceptance {
            Acceptance::StatusOk => response.status_code() == StatusCode::OK,
            Acceptance::BodyOk => response.body_str("status") == Some(STATUS_OK),
        };
        if !accepted {
            if matches!(acceptance, Acceptance::StatusOk) {
                self.session().logout().await;
            }
            return Ok(LoginOutcome::Rejected {
                data: response.body,
            });
        }

        self.complete_login(&response).await?;
        Ok(LoginOutcome::Connected)
    }

    /// Stores the tokens, loads the user and picks the view to show.
    async fn complete_login(&self, response: &ApiResponse) -> SessionResult<()> {
        let (Some(access), Some(refresh)) =
            (response.body_str("access"), response.body_str("refresh"))
        else {
            return Err(SessionError::MissingTokens);
        };
        self.session()
            .set_tokens(AuthTokens::new(access, refresh))
            .await?;

        let body = self.gateway.fetch(&catalog::CURRENT_USER.request(())).await?;
        let user = CurrentUser::from_server(body, self.secure_mode)?;
        let never_chose_diet = user.never_chose_diet();
        let just_expired = user.just_expired;
        self.session().set_user(user).await;

        let next = if self.features.diet_choice_at_login && never_chose_diet {
            let route = Route::DietChoice {
                fast_completion: true,
            };
            self.session().set_landing_route(route.clone()).await;
            route
        } else if just_expired {
            Route::Expired
        } else {
            self.session().pop_pending_redirect().await
        };
        self.navigator.navigate(next);
        Ok(())
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::test_support::{API_HOST, Harness, MockTransport, RecordingNavigator, jwt};
    use chrono::TimeDelta;
    use pretty_assertions::assert_eq;

    struct Fixture {
        h: Harness,
        navigator: Arc<RecordingNavigator>,
        service: SessionService<MockTransport>,
    }

    fn fixture(features: FeatureFlags) -> Fixture {
        let h = Harness::new(MockTransport::new());
        let navigator = Arc::new(RecordingNavigator::default());
        let service = SessionService::new(
            h.gateway.clone(),
            navigator.clone(),
            h.clock.clone(),
            features,
            true,
        );
        Fixture {
            h,
            navigator,
            service,
        }
    }

    impl Fixture {
        fn access(&self) -> String {
            jwt(Some(self.h.now() + 3600))
        }

        fn tokens_body(&self) -> Value {
            json!({"access": self.access(), "refresh": "r"})
        }
    }

    fn credentials() -> Payload {
        Payload::new()
            .with("username", "jane@example.com")
            .with("password", "secret")
    }

    fn user_body(extra: Value) -> Value {
        let mut body = json!({
            "status": "logged in",
            "userid": 7,
            "username": "jane",
            "diet_changed_at": "2024-01-01T00:00:00Z",
            "is_admin": true,
        });
        if let (Value::Object(body), Value::Object(extra)) = (&mut body, extra) {
            body.extend(extra);
        }
        body
    }

    #[tokio::test]
    async fn test_login_runs_post_login_sequence() {
        let f = fixture(FeatureFlags::default());
        f.h.transport.reply(200, f.tokens_body());
        f.h.transport.reply(200, user_body(json!({})));
        f.h.session.set_pending_redirect(Route::named("Planning")).await;

        let outcome = f.service.login(credentials()).await.unwrap();

        assert_eq!(outcome, LoginOutcome::Connected);
        assert_eq!(outcome.to_value(), json!({"connected": true}));
        assert_eq!(
            f.h.storage.stored().await,
            Some(AuthTokens::new(f.access(), "r"))
        );
        assert_eq!(f.service.user_id().await, Some(7));
        assert!(f.service.has_role(Role::Admin).await);
        assert_eq!(f.navigator.history(), vec![Route::named("Planning")]);
        assert_eq!(
            f.h.transport.urls(),
            vec![format!("{API_HOST}/token/"), format!("{API_HOST}/current_user/")]
        );
        assert_eq!(
            f.h.transport.requests()[1].header("Authorization"),
            Some(format!("Bearer {}", f.access()).as_str())
        );
    }

    #[tokio::test]
    async fn test_login_without_pending_redirect_goes_home() {
        let f = fixture(FeatureFlags::default());
        f.h.transport.reply(200, f.tokens_body());
        f.h.transport.reply(200, user_body(json!({})));

        f.service.login(credentials()).await.unwrap();

        assert_eq!(f.navigator.history(), vec![Route::UserHome]);
    }

    #[tokio::test]
    async fn test_login_refused_is_not_an_error() {
        let f = fixture(FeatureFlags::default());
        f.h.transport
            .reply(400, json!({"detail": "bad credentials"}));

        let outcome = f.service.login(credentials()).await.unwrap();

        assert_eq!(
            outcome.to_value(),
            json!({"connected": false, "data": {"detail": "bad credentials"}})
        );
        assert!(!f.service.is_logged_in().await);
        assert!(f.navigator.history().is_empty());
        // Login errors are handled by the form.
        assert!(f.h.listener.events().is_empty());
    }

    #[tokio::test]
    async fn test_login_other_success_status_logs_out() {
        let f = fixture(FeatureFlags::default());
        f.h.session
            .set_tokens(AuthTokens::new("old", "old"))
            .await
            .unwrap();
        f.h.transport.reply(202, json!({"pending": true}));

        let outcome = f.service.login(credentials()).await.unwrap();

        assert_eq!(
            outcome,
            LoginOutcome::Rejected {
                data: json!({"pending": true})
            }
        );
        assert_eq!(f.h.session.tokens().await, None);
        assert_eq!(f.h.storage.stored().await, None);
    }

    #[tokio::test]
    async fn test_login_answer_without_tokens() {
        let f = fixture(FeatureFlags::default());
        f.h.transport.reply(200, json!({"access": "a"}));

        let result = f.service.login(credentials()).await;

        assert!(matches!(result, Err(SessionError::MissingTokens)));
    }

    #[tokio::test]
    async fn test_diet_choice_at_login_sets_landing_route() {
        let features = FeatureFlags {
            diet_choice_at_login: true,
            ..FeatureFlags::default()
        };
        let f = fixture(features);
        f.h.transport.reply(200, f.tokens_body());
        f.h.transport
            .reply(200, user_body(json!({"diet_changed_at": null})));
        f.h.session.set_pending_redirect(Route::named("Planning")).await;

        f.service.login(credentials()).await.unwrap();

        let diet_choice = Route::DietChoice {
            fast_completion: true,
        };
        assert_eq!(f.navigator.history(), vec![diet_choice.clone()]);
        assert_eq!(f.h.session.landing_route().await, Some(diet_choice));
        // The pending redirect stays for a later login.
        assert_eq!(
            f.h.session.pending_redirect().await,
            Some(Route::named("Planning"))
        );
    }

    #[tokio::test]
    async fn test_diet_choice_disabled_ignores_missing_diet() {
        let f = fixture(FeatureFlags::default());
        f.h.transport.reply(200, f.tokens_body());
        f.h.transport
            .reply(200, user_body(json!({"diet_changed_at": null})));

        f.service.login(credentials()).await.unwrap();

        assert_eq!(f.navigator.history(), vec![Route::UserHome]);
        assert_eq!(f.h.session.landing_route().await, None);
    }

    #[tokio::test]
    async fn test_just_expired_user_sees_expired_view() {
        let f = fixture(FeatureFlags::default());
        f.h.transport.reply(200, f.tokens_body());
        f.h.transport
            .reply(200, user_body(json!({"just_expired": true})));

        f.service.login(credentials()).await.unwrap();

        assert_eq!(f.navigator.history(), vec![Route::Expired]);
    }

    #[tokio::test]
    async fn test_signup_sends_promo_code() {
        let f = fixture(FeatureFlags::default());
        f.service.set_promo_code(Some("SPRING".to_string())).await;
        f.h.transport
            .reply(201, json!({"status": "ok", "access": f.access(), "refresh": "r"}));
        f.h.transport.reply(200, user_body(json!({})));

        let form = Payload::new()
            .with("email", "jane@example.com")
            .with("firstName", "Jane")
            .with("password", "secret");
        let outcome = f.service.signup(form).await.unwrap();

        assert!(outcome.is_connected());
        let sent = &f.h.transport.requests()[0];
        assert_eq!(
            sent.body,
            Some(json!({
                "app": "public",
                "email": "jane@example.com",
                "first_name": "Jane",
                "password": "secret",
                "promo_code": "SPRING",
            }))
        );
    }

    #[tokio::test]
    async fn test_signup_refused_by_status_field() {
        let f = fixture(FeatureFlags::default());
        f.h.transport
            .reply(200, json!({"status": "error", "errors": {"email": "taken"}}));

        let outcome = f.service.signup(Payload::new()).await.unwrap();

        assert_eq!(
            outcome,
            LoginOutcome::Rejected {
                data: json!({"status": "error", "errors": {"email": "taken"}})
            }
        );
        assert_eq!(f.h.transport.requests().len(), 1);
    }

    #[tokio::test]
    async fn test_facebook_flows_payloads() {
        let f = fixture(FeatureFlags::default());
        f.h.transport.reply(403, json!({"detail": "unknown account"}));
        f.h.transport.reply(200, json!({"status": "ko"}));

        let login = f.service.facebook_login("fb-token").await.unwrap();
        let signup = f.service.facebook_signup("fb-token").await.unwrap();

        assert!(!login.is_connected());
        assert!(!signup.is_connected());
        let sent = f.h.transport.requests();
        assert_eq!(
            sent[0].body,
            Some(json!({"app": "public", "fb_input_token": "fb-token"}))
        );
        assert_eq!(
            sent[1].body,
            Some(json!({"app": "public", "access_token": "fb-token", "promo_code": null}))
        );
        assert!(f.h.listener.events().is_empty());
    }

    #[tokio::test]
    async fn test_load_with_valid_autologin_token() {
        let f = fixture(FeatureFlags::default());
        f.h.transport
            .reply(200, json!({"status": "ok", "access": f.access(), "refresh": "r"}));
        f.h.transport.reply(200, user_body(json!({})));
        f.h.transport.reply(200, user_body(json!({})));

        f.service.load(Some("one-time")).await.unwrap();

        assert!(f.service.is_logged_in().await);
        assert_eq!(f.navigator.history(), vec![Route::UserHome]);
        assert_eq!(
            f.h.transport.requests()[0].body,
            Some(json!({"token": "one-time"}))
        );
    }

    #[tokio::test]
    async fn test_load_with_refused_autologin_token() {
        let f = fixture(FeatureFlags::default());
        f.h.transport.reply(200, json!({"status": "invalid"}));
        f.h.transport.reply(200, json!({"status": "anonymous"}));

        f.service.load(Some("stale")).await.unwrap();

        assert_eq!(f.navigator.history(), vec![Route::WrongToken]);
        assert!(!f.service.is_logged_in().await);
    }

    #[tokio::test]
    async fn test_load_without_token_checks_current_user() {
        let f = fixture(FeatureFlags::default());
        f.h.session
            .set_tokens(AuthTokens::new(f.access(), "r"))
            .await
            .unwrap();
        f.h.transport.reply(200, user_body(json!({})));

        f.service.load(None).await.unwrap();

        assert_eq!(f.service.user().await.unwrap().name.as_deref(), Some("jane"));
        assert!(f.navigator.history().is_empty());
    }

    #[tokio::test]
    async fn test_load_logs_out_when_server_forgot_the_session() {
        let f = fixture(FeatureFlags::default());
        f.h.session
            .set_tokens(AuthTokens::new(f.access(), "r"))
            .await
            .unwrap();
        f.h.transport.reply(200, json!({"status": "not logged in"}));

        f.service.load(None).await.unwrap();

        assert!(!f.service.is_logged_in().await);
        assert_eq!(f.h.storage.stored().await, None);
    }

    #[tokio::test]
    async fn test_restore_and_logout() {
        let f = fixture(FeatureFlags::default());
        f.h.storage.put(AuthTokens::new("a", "r")).await;

        assert!(f.service.restore().await.unwrap());
        assert_eq!(f.h.session.tokens().await, Some(AuthTokens::new("a", "r")));

        f.service.logout().await;
        assert_eq!(f.h.storage.stored().await, None);
        assert!(f.navigator.history().is_empty());
    }

    #[tokio::test]
    async fn test_recently_joined_uses_clock() {
        let f = fixture(FeatureFlags::default());
        let joined = f.h.clock.now() - TimeDelta::hours(2);
        f.h.transport.reply(200, f.tokens_body());
        f.h.transport
            .reply(200, user_body(json!({"creation_date": joined.to_rfc3339()})));
        f.service.login(credentials()).await.unwrap();

        assert!(f.service.recently_joined().await);
        f.h.clock.advance(TimeDelta::days(1));
        assert!(!f.service.recently_joined().await);
    }

    #[tokio::test]
    async fn test_insecure_mode_clears_roles() {
        let h = Harness::new(MockTransport::new());
        let service = SessionService::new(
            h.gateway.clone(),
            Arc::new(RecordingNavigator::default()),
            h.clock.clone(),
            FeatureFlags::default(),
            false,
        );
        h.transport
            .reply(200, json!({"access": jwt(Some(h.now() + 3600)), "refresh": "r"}));
        h.transport.reply(200, user_body(json!({})));

        service.login(credentials()).await.unwrap();

        assert!(!service.has_role(Role::Admin).await);
    }
}
