//! Port definitions (interfaces)
//!
//! Ports define the boundaries between the application core and external systems.
//! Each port is a trait that can be implemented by adapters in the infrastructure layer
//! or, for navigation and dialogs, by the UI.

mod cancellation;
mod clock;
mod http_transport;
mod token_storage;
mod ui;

pub use cancellation::{CancellationReceiver, CancellationToken};
pub use clock::Clock;
pub use http_transport::{
    HttpTransport, TransportFuture, TransportError, TransportRequest, TransportResponse,
};
pub use token_storage::{StorageError, TokenStorage};
pub use ui::{Dialogs, Navigator};
