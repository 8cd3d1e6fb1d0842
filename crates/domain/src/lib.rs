//! Mealplan Domain - Core client types
//!
//! This crate defines the types shared by every layer of the meal-planning
//! client: the endpoint catalog and request building, tokens, the user
//! record, routes, response classification and configuration.
//! All types here are pure Rust with no I/O dependencies.

pub mod auth;
pub mod case;
pub mod config;
pub mod endpoint;
pub mod error;
pub mod request;
pub mod response;
pub mod route;
pub mod user;

pub use auth::{AuthTokens, RefreshRequest, RefreshResponse, TokenExpiry, access_token_expiry};
pub use case::{KeyCase, convert_keys};
pub use config::{ClientConfig, Environment, FeatureFlags};
pub use endpoint::{
    ApiRequest, CachePolicy, CallOptions, Endpoint, ErrorHandling, Id, ResponseShape, catalog,
    join_url,
};
pub use error::{DomainError, DomainResult};
pub use request::{HttpMethod, Payload, QueryParams};
pub use response::{ApiResponse, ErrorClass, Outcome, StatusCode, classify};
pub use route::{GuardDecision, Modal, NavigationTarget, Route, SignInReason};
pub use user::{CurrentUser, Role};
