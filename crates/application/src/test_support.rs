//! Hand-written port doubles shared by the unit tests.

#![allow(clippy::unwrap_used, missing_docs)]

use std::collections::VecDeque;
use std::sync::{Arc, Mutex};
use std::time::Duration;

use async_trait::async_trait;
use base64::Engine as _;
use base64::engine::general_purpose::URL_SAFE_NO_PAD;
use chrono::{DateTime, TimeDelta, Utc};
use mealplan_domain::{AuthTokens, ClientConfig, Environment, Modal, Route};
use serde_json::{Value, json};

use crate::gateway::{ApiEvent, ApiEventListener, Gateway};
use crate::ports::{
    Clock, Dialogs, HttpTransport, Navigator, StorageError, TokenStorage, TransportError,
    TransportFuture, TransportRequest, TransportResponse,
};
use crate::session::SessionContext;

pub const API_HOST: &str = "https://api.mealplan.test";

/// Unsigned JWT with the given `exp` claim.
pub fn jwt(exp: Option<i64>) -> String {
    let header = URL_SAFE_NO_PAD.encode(br#"{"alg":"HS256","typ":"JWT"}"#);
    let claims = exp.map_or_else(|| json!({"user_id": 1}), |exp| json!({"user_id": 1, "exp": exp}));
    let payload = URL_SAFE_NO_PAD.encode(claims.to_string());
    format!("{header}.{payload}.sig")
}

#[derive(Debug, Default)]
pub struct MemoryStorage {
    tokens: tokio::sync::Mutex<Option<AuthTokens>>,
}

impl MemoryStorage {
    pub async fn stored(&self) -> Option<AuthTokens> {
        self.tokens.lock().await.clone()
    }

    pub async fn put(&self, tokens: AuthTokens) {
        *self.tokens.lock().await = Some(tokens);
    }
}

#[async_trait]
impl TokenStorage for MemoryStorage {
    async fn load(&self) -> Result<Option<AuthTokens>, StorageError> {
        Ok(self.tokens.lock().await.clone())
    }

    async fn save(&self, tokens: &AuthTokens) -> Result<(), StorageError> {
        *self.tokens.lock().await = Some(tokens.clone());
        Ok(())
    }

    async fn clear(&self) -> Result<(), StorageError> {
        *self.tokens.lock().await = None;
        Ok(())
    }
}

/// Answers from a script, in order; `200 {}` once the script runs out.
#[derive(Default)]
pub struct MockTransport {
    script: Mutex<VecDeque<Result<TransportResponse, TransportError>>>,
    requests: Mutex<Vec<TransportRequest>>,
    delay: Option<Duration>,
}

impl MockTransport {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_delay(delay: Duration) -> Self {
        Self {
            delay: Some(delay),
            ..Self::default()
        }
    }

    pub fn reply(&self, status: u16, body: Value) {
        self.script
            .lock()
            .unwrap()
            .push_back(Ok(TransportResponse::json(status, &body)));
    }

    pub fn fail(&self, error: TransportError) {
        self.script.lock().unwrap().push_back(Err(error));
    }

    pub fn requests(&self) -> Vec<TransportRequest> {
        self.requests.lock().unwrap().clone()
    }

    pub fn urls(&self) -> Vec<String> {
        self.requests().into_iter().map(|r| r.url).collect()
    }
}

impl HttpTransport for MockTransport {
    fn send(&self, request: TransportRequest) -> TransportFuture<'_> {
        self.requests.lock().unwrap().push(request);
        let next = self
            .script
            .lock()
            .unwrap()
            .pop_front()
            .unwrap_or_else(|| Ok(TransportResponse::json(200, &json!({}))));
        let delay = self.delay;
        Box::pin(async move {
            if let Some(delay) = delay {
                tokio::time::sleep(delay).await;
            }
            next
        })
    }
}

pub struct FixedClock {
    now: Mutex<DateTime<Utc>>,
}

impl FixedClock {
    pub fn at(now: DateTime<Utc>) -> Self {
        Self {
            now: Mutex::new(now),
        }
    }

    pub fn advance(&self, delta: TimeDelta) {
        *self.now.lock().unwrap() += delta;
    }
}

impl Clock for FixedClock {
    fn now(&self) -> DateTime<Utc> {
        *self.now.lock().unwrap()
    }
}

#[derive(Default)]
pub struct RecordingNavigator {
    current: Mutex<Option<Route>>,
    history: Mutex<Vec<Route>>,
}

impl RecordingNavigator {
    pub fn showing(route: Route) -> Self {
        Self {
            current: Mutex::new(Some(route)),
            history: Mutex::new(Vec::new()),
        }
    }

    pub fn history(&self) -> Vec<Route> {
        self.history.lock().unwrap().clone()
    }
}

impl Navigator for RecordingNavigator {
    fn current_route(&self) -> Option<Route> {
        self.current.lock().unwrap().clone()
    }

    fn navigate(&self, route: Route) {
        *self.current.lock().unwrap() = Some(route.clone());
        self.history.lock().unwrap().push(route);
    }
}

#[derive(Default)]
pub struct RecordingDialogs {
    shown: Mutex<Vec<Modal>>,
}

impl RecordingDialogs {
    pub fn shown(&self) -> Vec<Modal> {
        self.shown.lock().unwrap().clone()
    }
}

impl Dialogs for RecordingDialogs {
    fn show_modal(&self, modal: Modal) {
        self.shown.lock().unwrap().push(modal);
    }
}

#[derive(Default)]
pub struct RecordingListener {
    events: Mutex<Vec<ApiEvent>>,
}

impl RecordingListener {
    pub fn events(&self) -> Vec<ApiEvent> {
        self.events.lock().unwrap().clone()
    }
}

#[async_trait]
impl ApiEventListener for RecordingListener {
    async fn on_event(&self, event: ApiEvent) {
        self.events.lock().unwrap().push(event);
    }
}

pub fn config() -> ClientConfig {
    let mut config = ClientConfig::new(API_HOST).unwrap();
    config.environment = Environment::Development;
    config
}

/// A gateway over `transport` with an empty session and a clock at `now`.
pub struct Harness {
    pub transport: Arc<MockTransport>,
    pub clock: Arc<FixedClock>,
    pub storage: Arc<MemoryStorage>,
    pub session: SessionContext,
    pub listener: Arc<RecordingListener>,
    pub gateway: Arc<Gateway<MockTransport>>,
}

impl Harness {
    pub fn new(transport: MockTransport) -> Self {
        let transport = Arc::new(transport);
        let clock = Arc::new(FixedClock::at(
            DateTime::from_timestamp(1_700_000_000, 0).unwrap(),
        ));
        let storage = Arc::new(MemoryStorage::default());
        let session = SessionContext::new(storage.clone());
        let listener = Arc::new(RecordingListener::default());
        let gateway = Arc::new(
            Gateway::new(transport.clone(), session.clone(), clock.clone(), &config())
                .with_listener(listener.clone()),
        );
        Self {
            transport,
            clock,
            storage,
            session,
            listener,
            gateway,
        }
    }

    pub fn now(&self) -> i64 {
        self.clock.now().timestamp()
    }
}
