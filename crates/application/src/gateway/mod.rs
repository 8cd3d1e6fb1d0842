//! The HTTP gateway
//!
//! Every call to the API goes through [`Gateway`]. It resolves the URL,
//! converts key case, attaches and refreshes the bearer token, serves and
//! fills the response cache, classifies the response and reports the
//! classification to an [`ApiEventListener`].

mod cache;
mod events;

pub use cache::ResponseCache;
pub use events::{ApiEvent, ApiEventListener};

use std::sync::Arc;

use mealplan_domain::catalog::TOKEN_REFRESH_PATH;
use mealplan_domain::{
    ApiRequest, ApiResponse, ClientConfig, Environment, ErrorClass, ErrorHandling, HttpMethod,
    KeyCase, Outcome, RefreshRequest, RefreshResponse, ResponseShape, StatusCode, classify,
    convert_keys, join_url,
};
use serde_json::Value;
use thiserror::Error;
use tracing::{debug, warn};

use crate::error::ApiError;
use crate::ports::{
    CancellationReceiver, Clock, HttpTransport, TransportError, TransportRequest,
};
use crate::session::SessionContext;

/// What a successful call resolves to, according to the endpoint's shape.
#[derive(Debug, Clone, PartialEq)]
pub enum ApiReply {
    /// The decoded body.
    Body(Value),
    /// The whole response.
    Raw(ApiResponse),
}

impl ApiReply {
    fn shaped(shape: ResponseShape, response: ApiResponse) -> Self {
        match shape {
            ResponseShape::Body => Self::Body(response.body),
            ResponseShape::Raw => Self::Raw(response),
        }
    }

    /// The body, whatever the shape.
    #[must_use]
    pub fn into_body(self) -> Value {
        match self {
            Self::Body(body) => body,
            Self::Raw(response) => response.body,
        }
    }
}

#[derive(Debug, Error)]
enum RefreshFailure {
    #[error("{0}")]
    Transport(#[from] TransportError),
    #[error("refresh answered with status {0}")]
    Status(u16),
    #[error("invalid refresh answer: {0}")]
    Decode(#[from] serde_json::Error),
}

/// The single chokepoint for outbound API calls.
pub struct Gateway<T> {
    transport: Arc<T>,
    session: SessionContext,
    clock: Arc<dyn Clock>,
    api_host: String,
    environment: Environment,
    cache: ResponseCache,
    listener: Option<Arc<dyn ApiEventListener>>,
}

impl<T: HttpTransport> Gateway<T> {
    /// Creates a gateway for the API described by `config`.
    #[must_use]
    pub fn new(
        transport: Arc<T>,
        session: SessionContext,
        clock: Arc<dyn Clock>,
        config: &ClientConfig,
    ) -> Self {
        Self {
            transport,
            session,
            clock,
            api_host: config.api_host.to_string(),
            environment: config.environment,
            cache: ResponseCache::new(),
            listener: None,
        }
    }

    /// Reports classifications to `listener`.
    #[must_use]
    pub fn with_listener(mut self, listener: Arc<dyn ApiEventListener>) -> Self {
        self.listener = Some(listener);
        self
    }

    /// The session whose tokens this gateway uses.
    #[must_use]
    pub const fn session(&self) -> &SessionContext {
        &self.session
    }

    /// The response cache.
    #[must_use]
    pub const fn cache(&self) -> &ResponseCache {
        &self.cache
    }

    /// Absolute URL of an API path.
    #[must_use]
    pub fn url(&self, target: &str) -> String {
        join_url(&self.api_host, target)
    }

    /// Sends `request`, resolving to the body or the whole response
    /// depending on the endpoint.
    ///
    /// # Errors
    ///
    /// Returns the classified rejection.
    pub async fn send(&self, request: &ApiRequest) -> Result<ApiReply, ApiError> {
        self.send_cancellable(request, CancellationReceiver::never())
            .await
    }

    /// Like [`Gateway::send`], aborted when `cancel` fires.
    ///
    /// A cancelled call has no side effect and resolves to
    /// [`ApiError::Cancelled`].
    ///
    /// # Errors
    ///
    /// Returns the classified rejection, or `ApiError::Cancelled`.
    pub async fn send_cancellable(
        &self,
        request: &ApiRequest,
        cancel: CancellationReceiver,
    ) -> Result<ApiReply, ApiError> {
        let response = self.send_raw(request, cancel).await?;
        Ok(ApiReply::shaped(request.shape(), response))
    }

    /// Sends `request` and resolves to the decoded body.
    ///
    /// # Errors
    ///
    /// Returns the classified rejection.
    pub async fn fetch(&self, request: &ApiRequest) -> Result<Value, ApiError> {
        self.send(request).await.map(ApiReply::into_body)
    }

    /// Sends `request` and resolves to the whole response, whatever the
    /// endpoint's shape.
    ///
    /// # Errors
    ///
    /// Returns the classified rejection, or `ApiError::Cancelled`.
    pub async fn send_raw(
        &self,
        request: &ApiRequest,
        mut cancel: CancellationReceiver,
    ) -> Result<ApiResponse, ApiError> {
        if cancel.is_cancelled() {
            return Err(ApiError::Cancelled);
        }
        tokio::select! {
            result = self.execute(request) => result,
            () = cancel.cancelled() => Err(ApiError::Cancelled),
        }
    }

    async fn execute(&self, request: &ApiRequest) -> Result<ApiResponse, ApiError> {
        let method = request.method();
        let url = self.url(&request.target());
        let local = request.options().error_handling == ErrorHandling::Local;

        let max_age = request
            .options()
            .cache
            .max_age()
            .filter(|_| method.uses_query_string());
        let cache_key = max_age.map(|_| ResponseCache::key(method, &url, request.payload()));
        if let (Some(max_age), Some(key)) = (max_age, cache_key.as_deref())
            && let Some(hit) = self.cache.get(key, max_age, self.clock.now()).await
        {
            if self.environment.is_development() {
                debug!(%method, %url, "served from cache");
            }
            return Ok(hit);
        }

        let mut outbound = TransportRequest::new(method, url.clone());
        match self.authorization().await {
            Ok(Some(header)) => outbound = outbound.with_header("Authorization", header),
            Ok(None) => {}
            Err(failure) => {
                warn!(error = %failure, "token refresh failed, session cleared");
                let error = rejection(method, &url, ErrorClass::Unauthenticated, None, Value::Null);
                return Err(self.fail(error, local).await);
            }
        }
        if let Some(body) = request.body() {
            outbound = outbound.with_body(convert_keys(body.into(), KeyCase::Snake));
        }

        let response = match self.transport.send(outbound).await {
            Ok(response) => response,
            Err(e) => {
                if self.environment.is_development() {
                    debug!(%method, %url, error = %e, "api call failed");
                }
                let error = ApiError::Rejected {
                    class: ErrorClass::Unreachable,
                    method,
                    url,
                    status: None,
                    body: Value::Null,
                    cause: Some(e),
                };
                return Err(self.fail(error, local).await);
            }
        };

        let body = decode_body(&response.body);
        if self.environment.is_development() {
            debug!(%method, %url, status = response.status, %body, "api response");
        }
        let outcome = classify(StatusCode::new(response.status), &body);
        let response = ApiResponse::new(
            response.status,
            response.headers,
            convert_keys(body, KeyCase::Camel),
        );

        match outcome {
            Outcome::Success => {}
            Outcome::PremiumRequired => {
                if !local {
                    self.publish(ApiEvent::PremiumRequired).await;
                }
            }
            Outcome::Failure(class) => {
                let error = rejection(method, &url, class, Some(response.status), response.body);
                return Err(self.fail(error, local).await);
            }
        }

        if let (Some(key), Some(max_age)) = (cache_key, max_age) {
            self.cache
                .put(key, response.clone(), max_age, self.clock.now())
                .await;
        }
        Ok(response)
    }

    /// `Authorization` header value for the current session, refreshing
    /// the access token first if it expired.
    async fn authorization(&self) -> Result<Option<String>, RefreshFailure> {
        let Some(tokens) = self.session.tokens().await else {
            return Ok(None);
        };
        if !tokens.is_access_expired(self.clock.now()) {
            return Ok(Some(tokens.authorization_header()));
        }

        match self.refresh(&tokens.refresh).await {
            Ok(access) => {
                let header = format!("Bearer {access}");
                if let Err(e) = self.session.set_access_token(access).await {
                    warn!(error = %e, "failed to persist refreshed token");
                }
                Ok(Some(header))
            }
            Err(failure) => {
                self.session.logout().await;
                Err(failure)
            }
        }
    }

    // No auth header and no key conversion on this exchange.
    async fn refresh(&self, refresh: &str) -> Result<String, RefreshFailure> {
        let body = serde_json::to_value(RefreshRequest {
            refresh: refresh.to_string(),
        })?;
        let request =
            TransportRequest::new(HttpMethod::Post, self.url(TOKEN_REFRESH_PATH)).with_body(body);
        let response = self.transport.send(request).await?;
        if !StatusCode::new(response.status).is_success() {
            return Err(RefreshFailure::Status(response.status));
        }
        let answer: RefreshResponse = serde_json::from_slice(&response.body)?;
        debug!("access token refreshed");
        Ok(answer.access)
    }

    async fn fail(&self, error: ApiError, local: bool) -> ApiError {
        if let Some(class) = error.class() {
            if class == ErrorClass::UnexpectedRedirect {
                warn!(%error, "unexpected permanent redirect");
            }
            if !local {
                self.publish(ApiEvent::Rejected(class)).await;
            }
        }
        error
    }

    async fn publish(&self, event: ApiEvent) {
        if let Some(listener) = &self.listener {
            listener.on_event(event).await;
        }
    }
}

fn rejection(
    method: HttpMethod,
    url: &str,
    class: ErrorClass,
    status: Option<u16>,
    body: Value,
) -> ApiError {
    ApiError::Rejected {
        class,
        method,
        url: url.to_string(),
        status,
        body,
        cause: None,
    }
}

fn decode_body(bytes: &[u8]) -> Value {
    if bytes.is_empty() {
        return Value::Null;
    }
    serde_json::from_slice(bytes)
        .unwrap_or_else(|_| Value::String(String::from_utf8_lossy(bytes).into_owned()))
}
