//! Persistence of the local session state.

mod token_repository;

pub use token_repository::{FileTokenStorage, MemoryTokenStorage};
