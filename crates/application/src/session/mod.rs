//! Session state, flows and the navigation guard

mod context;
mod guard;
mod service;

pub use context::SessionContext;
pub use guard::NavigationGuard;
pub use service::{LoginOutcome, SessionService};
