//! Mealplan API client - Main Entry Point
//!
//! Wires the adapters into the gateway and the session flows, then
//! bootstraps the session: persisted tokens first, then the optional
//! one-time token from `MEALPLAN_AUTOLOGIN_TOKEN`, then the server's view
//! of the current user.

mod headless;

use std::sync::Arc;

use mealplan_application::ports::TokenStorage;
use mealplan_application::{Gateway, ResponseDispatcher, SessionContext, SessionService};
use mealplan_domain::ClientConfig;
use mealplan_infrastructure::{FileTokenStorage, MemoryTokenStorage, ReqwestTransport, SystemClock};
use tracing::{info, warn};
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

use crate::headless::{LogDialogs, LogNavigator};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .with(tracing_subscriber::fmt::layer())
        .init();

    let config = ClientConfig::from_env()?;
    info!(
        api_host = %config.api_host,
        environment = ?config.environment,
        "starting Mealplan client v{}",
        env!("CARGO_PKG_VERSION")
    );

    let storage: Arc<dyn TokenStorage> =
        match config.token_file.clone().or_else(FileTokenStorage::default_path) {
            Some(path) => Arc::new(FileTokenStorage::new(path)),
            None => {
                warn!("no config directory, tokens will not survive this run");
                Arc::new(MemoryTokenStorage::new())
            }
        };

    let session = SessionContext::new(storage);
    let navigator = Arc::new(LogNavigator::default());
    let dispatcher = Arc::new(ResponseDispatcher::new(
        session.clone(),
        navigator.clone(),
        Arc::new(LogDialogs),
    ));
    let clock = Arc::new(SystemClock::new());
    let gateway = Arc::new(
        Gateway::new(
            Arc::new(ReqwestTransport::new()?),
            session,
            clock.clone(),
            &config,
        )
        .with_listener(dispatcher),
    );
    let service = SessionService::new(
        gateway,
        navigator,
        clock,
        config.features,
        config.secure_mode,
    );

    service.restore().await?;
    let autologin_token = std::env::var("MEALPLAN_AUTOLOGIN_TOKEN")
        .ok()
        .filter(|token| !token.is_empty());
    service.load(autologin_token.as_deref()).await?;

    match service.user().await {
        Some(user) => info!(
            id = ?user.id,
            name = user.name.as_deref().unwrap_or_default(),
            "logged in"
        ),
        None => info!("not logged in"),
    }

    Ok(())
}
