//! JSON serialization for the files the client writes.

mod json;

pub use json::*;
