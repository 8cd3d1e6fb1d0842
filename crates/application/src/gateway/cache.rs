//! In-memory cache of successful GET responses.

use std::collections::HashMap;
use std::time::Duration;

use chrono::{DateTime, TimeDelta, Utc};
use mealplan_domain::{ApiResponse, HttpMethod, Payload};
use tokio::sync::RwLock;

#[derive(Debug, Clone)]
struct CachedResponse {
    response: ApiResponse,
    stored_at: DateTime<Utc>,
}

/// Responses keyed by method, URL and payload.
#[derive(Debug, Default)]
pub struct ResponseCache {
    entries: RwLock<HashMap<String, CachedResponse>>,
}

impl ResponseCache {
    /// Creates an empty cache.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds the cache key of a call.
    #[must_use]
    pub fn key(method: HttpMethod, url: &str, payload: Option<&Payload>) -> String {
        let payload = payload.map(|p| p.to_value().to_string()).unwrap_or_default();
        format!("{method} {url} {payload}")
    }

    /// Returns the response stored under `key` if it is younger than `max_age`.
    ///
    /// A stale entry is dropped.
    pub async fn get(&self, key: &str, max_age: Duration, now: DateTime<Utc>) -> Option<ApiResponse> {
        let max_age = window(max_age);
        let mut entries = self.entries.write().await;
        let fresh = entries
            .get(key)
            .map(|entry| now - entry.stored_at < max_age)?;
        if fresh {
            entries.get(key).map(|entry| entry.response.clone())
        } else {
            entries.remove(key);
            None
        }
    }

    /// Stores a 2xx response; anything else is ignored.
    ///
    /// Entries older than `max_age` are purged first.
    pub async fn put(&self, key: String, response: ApiResponse, max_age: Duration, now: DateTime<Utc>) {
        if !response.status_code().is_success() {
            return;
        }
        let max_age = window(max_age);
        let mut entries = self.entries.write().await;
        entries.retain(|_, entry| now - entry.stored_at < max_age);
        entries.insert(
            key,
            CachedResponse {
                response,
                stored_at: now,
            },
        );
    }

    /// Drops every entry.
    pub async fn clear(&self) {
        self.entries.write().await.clear();
    }

    /// Number of stored entries, fresh or not.
    pub async fn len(&self) -> usize {
        self.entries.read().await.len()
    }

    /// Returns true if nothing is stored.
    pub async fn is_empty(&self) -> bool {
        self.entries.read().await.is_empty()
    }
}

fn window(max_age: Duration) -> TimeDelta {
    TimeDelta::from_std(max_age).unwrap_or(TimeDelta::MAX)
}
