//! Mealplan Infrastructure - Adapters and implementations
//!
//! This crate provides concrete implementations of the ports
//! defined in the application layer: the reqwest transport, the system
//! clock and token storage.

pub mod adapters;
pub mod persistence;
pub mod serialization;

pub use adapters::{ReqwestTransport, SystemClock};
pub use persistence::{FileTokenStorage, MemoryTokenStorage};
pub use serialization::{SerializationError, from_json_bytes, to_json_stable_bytes};
