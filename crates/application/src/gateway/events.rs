//! Classification events published by the gateway.

use async_trait::async_trait;
use mealplan_domain::ErrorClass;

/// An outcome with a global consequence.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ApiEvent {
    /// A successful call carried a premium-required business error.
    PremiumRequired,
    /// A call was rejected.
    Rejected(ErrorClass),
}

/// Receives the classification of every globally handled call.
///
/// Calls to endpoints with local error handling and cancelled calls are
/// never reported.
#[async_trait]
pub trait ApiEventListener: Send + Sync {
    /// Handles one event. Runs before the call resolves.
    async fn on_event(&self, event: ApiEvent);
}
