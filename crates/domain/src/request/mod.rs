//! Request building blocks

mod method;
mod payload;
mod query;

pub use method::HttpMethod;
pub use payload::{DefaultPayload, Payload};
pub use query::{QueryParam, QueryParams};
