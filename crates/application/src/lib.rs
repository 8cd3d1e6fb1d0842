//! Mealplan Application - Gateway and session flows
//!
//! This crate holds the ports the client needs from the outside world,
//! the HTTP gateway every API call goes through, the dispatcher that turns
//! rejections into navigation and dialogs, and the session flows (login,
//! signup, autologin, bootstrap) with the navigation guard.

pub mod dispatcher;
pub mod error;
pub mod gateway;
pub mod ports;
pub mod session;

#[cfg(test)]
mod test_support;

pub use dispatcher::ResponseDispatcher;
pub use error::{ApiError, SessionError, SessionResult};
pub use gateway::{ApiEvent, ApiEventListener, ApiReply, Gateway, ResponseCache};
pub use ports::{
    CancellationReceiver, CancellationToken, Clock, Dialogs, HttpTransport, Navigator,
    StorageError, TokenStorage, TransportError, TransportFuture, TransportRequest,
    TransportResponse,
};
pub use session::{LoginOutcome, NavigationGuard, SessionContext, SessionService};
