//! Endpoint registry
//!
//! Every server operation is a typed [`Endpoint`] constant in [`catalog`].
//! Binding path parameters yields an [`ApiRequest`] that the gateway sends.

pub mod catalog;
mod descriptor;

pub use descriptor::{
    ApiRequest, CachePolicy, CallOptions, Endpoint, ErrorHandling, Id, PathTemplate,
    RESPONSE_CACHE_MAX_AGE, ResponseShape, join_url,
};
