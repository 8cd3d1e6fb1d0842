//! Authentication domain types

mod tokens;

pub use tokens::{
    AuthTokens, RefreshRequest, RefreshResponse, TOKEN_EXPIRY_MARGIN_SECS, TokenExpiry,
    access_token_expiry,
};
