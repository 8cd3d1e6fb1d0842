//! Access/refresh token pair and JWT expiry checks.

use base64::Engine as _;
use base64::engine::general_purpose::URL_SAFE_NO_PAD;
use chrono::{DateTime, TimeDelta, Utc};
use serde::{Deserialize, Serialize};

/// Seconds subtracted from `exp` so a token is refreshed slightly early.
pub const TOKEN_EXPIRY_MARGIN_SECS: i64 = 10;

/// The token pair issued at login.
#[derive(Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AuthTokens {
    /// Short-lived bearer token.
    pub access: String,
    /// Long-lived token exchanged for a new access token.
    pub refresh: String,
}

impl AuthTokens {
    /// Creates a token pair.
    #[must_use]
    pub fn new(access: impl Into<String>, refresh: impl Into<String>) -> Self {
        Self {
            access: access.into(),
            refresh: refresh.into(),
        }
    }

    /// Returns the Authorization header value.
    #[must_use]
    pub fn authorization_header(&self) -> String {
        format!("Bearer {}", self.access)
    }

    /// Check if the access token is expired at `now`, margin included.
    #[must_use]
    pub fn is_access_expired(&self, now: DateTime<Utc>) -> bool {
        access_token_expiry(&self.access).is_expired(now)
    }
}

// Tokens never show up in logs.
impl std::fmt::Debug for AuthTokens {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AuthTokens")
            .field("access", &"<redacted>")
            .field("refresh", &"<redacted>")
            .finish()
    }
}

/// Body of `POST /token/refresh`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RefreshRequest {
    /// The refresh token.
    pub refresh: String,
}

/// Successful answer of `POST /token/refresh`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RefreshResponse {
    /// The new access token.
    pub access: String,
}

/// What the `exp` claim of an access token says.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TokenExpiry {
    /// No `exp` claim: the token does not expire.
    Never,
    /// Expires at this instant.
    At(DateTime<Utc>),
    /// The token cannot be decoded; it is treated as expired.
    Malformed,
}

impl TokenExpiry {
    /// Returns true if a refresh is needed at `now`.
    #[must_use]
    pub fn is_expired(self, now: DateTime<Utc>) -> bool {
        match self {
            Self::Never => false,
            Self::At(expires_at) => {
                now + TimeDelta::seconds(TOKEN_EXPIRY_MARGIN_SECS) >= expires_at
            }
            Self::Malformed => true,
        }
    }
}

#[derive(Deserialize)]
struct Claims {
    exp: Option<i64>,
}

/// Reads the `exp` claim of a JWT without verifying its signature.
#[must_use]
pub fn access_token_expiry(token: &str) -> TokenExpiry {
    let mut parts = token.split('.');
    let (Some(_header), Some(payload), Some(_signature)) = (parts.next(), parts.next(), parts.next())
    else {
        return TokenExpiry::Malformed;
    };

    let Ok(bytes) = URL_SAFE_NO_PAD.decode(payload.trim_end_matches('=')) else {
        return TokenExpiry::Malformed;
    };
    let Ok(claims) = serde_json::from_slice::<Claims>(&bytes) else {
        return TokenExpiry::Malformed;
    };

    match claims.exp {
        None => TokenExpiry::Never,
        Some(exp) => DateTime::from_timestamp(exp, 0).map_or(TokenExpiry::Malformed, TokenExpiry::At),
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    /// Builds an unsigned JWT carrying the given claims.
    fn jwt(claims: &serde_json::Value) -> String {
        let header = URL_SAFE_NO_PAD.encode(br#"{"alg":"HS256","typ":"JWT"}"#);
        let payload = URL_SAFE_NO_PAD.encode(claims.to_string());
        format!("{header}.{payload}.signature")
    }

    fn at(secs: i64) -> DateTime<Utc> {
        DateTime::from_timestamp(secs, 0).unwrap()
    }

    #[test]
    fn test_expiry_is_read_from_exp_claim() {
        let token = jwt(&serde_json::json!({"exp": 1_700_000_000, "user_id": 3}));
        assert_eq!(access_token_expiry(&token), TokenExpiry::At(at(1_700_000_000)));
    }

    #[test]
    fn test_expiry_margin() {
        let expiry = TokenExpiry::At(at(1_000));
        assert!(!expiry.is_expired(at(989)));
        assert!(expiry.is_expired(at(990)));
        assert!(expiry.is_expired(at(2_000)));
    }

    #[test]
    fn test_token_without_exp_never_expires() {
        let token = jwt(&serde_json::json!({"user_id": 3}));
        assert_eq!(access_token_expiry(&token), TokenExpiry::Never);
        assert!(!AuthTokens::new(token, "r").is_access_expired(at(i64::from(i32::MAX))));
    }

    #[test]
    fn test_malformed_token_is_expired() {
        assert_eq!(access_token_expiry("not-a-jwt"), TokenExpiry::Malformed);
        assert_eq!(access_token_expiry("a.!!!.c"), TokenExpiry::Malformed);
        assert!(AuthTokens::new("garbage", "r").is_access_expired(at(0)));
    }

    #[test]
    fn test_debug_redacts_tokens() {
        let tokens = AuthTokens::new("secret-access", "secret-refresh");
        let debug = format!("{tokens:?}");
        assert!(!debug.contains("secret"));
        assert_eq!(tokens.authorization_header(), "Bearer secret-access");
    }
}
