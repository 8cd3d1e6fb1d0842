//! Maps a response (or its absence) to the global action it calls for.

use serde_json::Value;

use super::status::StatusCode;

/// `detail` sent with a 403 when the session token is gone or invalid.
pub const EXPIRED_SESSION_DETAIL: &str = "Informations d'authentification non fournies.";

/// `error` value of a 2xx body asking for a premium subscription.
pub const PREMIUM_REQUIRED_ERROR: &str = "requires_premium";

/// Why a call was rejected.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorClass {
    /// No response at all: connection refused, reset or timed out.
    Unreachable,
    /// 503.
    Maintenance,
    /// Any 5xx other than 503, or 400.
    ServerError,
    /// 301, which the API never sends on purpose.
    UnexpectedRedirect,
    /// 401, or a failed token refresh.
    Unauthenticated,
    /// 403 carrying [`EXPIRED_SESSION_DETAIL`].
    SessionExpired,
    /// Any other 403.
    PermissionDenied,
    /// A non-2xx status with no global meaning (404, 409, ...).
    Unhandled,
}

impl ErrorClass {
    /// Short label used in logs and error messages.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Unreachable => "server unreachable",
            Self::Maintenance => "maintenance",
            Self::ServerError => "server error",
            Self::UnexpectedRedirect => "unexpected permanent redirect",
            Self::Unauthenticated => "authentication required",
            Self::SessionExpired => "session expired",
            Self::PermissionDenied => "permission denied",
            Self::Unhandled => "request rejected",
        }
    }

    /// Returns true if the maintenance modal follows.
    #[must_use]
    pub const fn is_maintenance(self) -> bool {
        matches!(self, Self::Unreachable | Self::Maintenance)
    }
}

impl std::fmt::Display for ErrorClass {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

/// Result of classifying one HTTP response.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    /// Pass through to the caller.
    Success,
    /// Pass through, and prompt for a premium upgrade.
    PremiumRequired,
    /// Reject.
    Failure(ErrorClass),
}

/// Classifies a response by status code and body.
#[must_use]
pub fn classify(status: StatusCode, body: &Value) -> Outcome {
    if status.is_success() {
        let premium = body.get("status").and_then(Value::as_str) == Some("error")
            && body.get("error").and_then(Value::as_str) == Some(PREMIUM_REQUIRED_ERROR);
        return if premium {
            Outcome::PremiumRequired
        } else {
            Outcome::Success
        };
    }

    let class = match status {
        StatusCode::SERVICE_UNAVAILABLE => ErrorClass::Maintenance,
        StatusCode::BAD_REQUEST => ErrorClass::ServerError,
        s if s.is_server_error() => ErrorClass::ServerError,
        StatusCode::MOVED_PERMANENTLY => ErrorClass::UnexpectedRedirect,
        StatusCode::UNAUTHORIZED => ErrorClass::Unauthenticated,
        StatusCode::FORBIDDEN => {
            if body.get("detail").and_then(Value::as_str) == Some(EXPIRED_SESSION_DETAIL) {
                ErrorClass::SessionExpired
            } else {
                ErrorClass::PermissionDenied
            }
        }
        _ => ErrorClass::Unhandled,
    };
    Outcome::Failure(class)
}
