//! The logged-in user record.

use chrono::{DateTime, NaiveDate, NaiveDateTime, TimeDelta, Utc};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::endpoint::Id;
use crate::error::{DomainError, DomainResult};

/// `status` of `/current_user/` when a session is active.
pub const LOGGED_IN_STATUS: &str = "logged in";

/// Role flags carried by the user record.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Role {
    /// Site administrator.
    Admin,
    /// Back-office operator.
    Operator,
    /// Recipe author.
    Author,
    /// Recipe reviewer.
    Reviewer,
    /// Developer tools access.
    Developer,
    /// Dietician.
    Dietician,
}

/// The `/current_user/` record.
///
/// Keys arrive camelCased. `username` and `userid` are renamed to `name`
/// and `id`; every other key the server sends is kept in `extra`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct CurrentUser {
    /// Server-side user id.
    pub id: Option<Id>,
    /// Login name.
    pub name: Option<String>,
    /// First name.
    pub first_name: Option<String>,
    /// Last name.
    pub last_name: Option<String>,
    /// See [`Role::Admin`].
    pub is_admin: bool,
    /// See [`Role::Operator`].
    pub is_operator: bool,
    /// See [`Role::Author`].
    pub is_author: bool,
    /// See [`Role::Reviewer`].
    pub is_reviewer: bool,
    /// See [`Role::Developer`].
    pub is_developer: bool,
    /// See [`Role::Dietician`].
    pub is_dietician: bool,
    /// When the user last picked a diet; never set if they never did.
    pub diet_changed_at: Option<String>,
    /// The subscription ran out since the last visit.
    pub just_expired: bool,
    /// Account creation timestamp, as sent.
    pub creation_date: Option<String>,
    /// Every other field, verbatim.
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl CurrentUser {
    /// Builds the record from a camelCased `/current_user/` body.
    ///
    /// Outside secure mode every `is*` flag is forced to `false`.
    ///
    /// # Errors
    ///
    /// Returns `DomainError::InvalidUser` if the body is not an object or a
    /// known field has the wrong type.
    pub fn from_server(body: Value, secure_mode: bool) -> DomainResult<Self> {
        let Value::Object(fields) = body else {
            return Err(DomainError::InvalidUser(format!(
                "expected a JSON object, got {body}"
            )));
        };

        let mut record = Map::new();
        for (key, value) in fields {
            match key.as_str() {
                "username" => {
                    record.insert("name".to_string(), value);
                }
                "userid" => {
                    record.insert("id".to_string(), value);
                }
                k if k.starts_with("is") && !secure_mode => {
                    record.insert(key, Value::Bool(false));
                }
                _ => {
                    record.insert(key, value);
                }
            }
        }

        serde_json::from_value(Value::Object(record))
            .map_err(|e| DomainError::InvalidUser(e.to_string()))
    }

    /// Returns true if `body` is a `/current_user/` answer for an active session.
    #[must_use]
    pub fn is_logged_in_status(body: &Value) -> bool {
        body.get("status").and_then(Value::as_str) == Some(LOGGED_IN_STATUS)
    }

    /// Checks a role flag.
    #[must_use]
    pub const fn has_role(&self, role: Role) -> bool {
        match role {
            Role::Admin => self.is_admin,
            Role::Operator => self.is_operator,
            Role::Author => self.is_author,
            Role::Reviewer => self.is_reviewer,
            Role::Developer => self.is_developer,
            Role::Dietician => self.is_dietician,
        }
    }

    /// Returns true if the user never selected a diet.
    #[must_use]
    pub fn never_chose_diet(&self) -> bool {
        self.diet_changed_at.as_deref().is_none_or(str::is_empty)
    }

    /// Parses `creationDate`.
    #[must_use]
    pub fn joined_at(&self) -> Option<DateTime<Utc>> {
        let raw = self.creation_date.as_deref()?;
        DateTime::parse_from_rfc3339(raw)
            .map(|d| d.with_timezone(&Utc))
            .ok()
            .or_else(|| {
                NaiveDateTime::parse_from_str(raw, "%Y-%m-%dT%H:%M:%S%.f")
                    .ok()
                    .map(|d| d.and_utc())
            })
            .or_else(|| {
                NaiveDate::parse_from_str(raw, "%Y-%m-%d")
                    .ok()
                    .and_then(|d| d.and_hms_opt(0, 0, 0))
                    .map(|d| d.and_utc())
            })
    }

    /// Returns true if the account is less than 24 hours old at `now`.
    #[must_use]
    pub fn recently_joined(&self, now: DateTime<Utc>) -> bool {
        self.joined_at()
            .is_some_and(|joined| now - joined < TimeDelta::hours(24))
    }

    /// Replaces first and last name.
    pub fn set_fullname(&mut self, first_name: impl Into<String>, last_name: impl Into<String>) {
        self.first_name = Some(first_name.into());
        self.last_name = Some(last_name.into());
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use serde_json::json;

    fn body() -> Value {
        json!({
            "status": "logged in",
            "username": "ana@example.com",
            "userid": 12,
            "firstName": "Ana",
            "isAdmin": true,
            "isDietician": true,
            "dietChangedAt": null,
            "justExpired": false,
            "creationDate": "2024-05-01T08:00:00Z",
            "ustensils": [1, 2]
        })
    }

    #[test]
    fn test_from_server_renames_identity_keys() {
        let user = CurrentUser::from_server(body(), true).unwrap();
        assert_eq!(user.id, Some(12));
        assert_eq!(user.name.as_deref(), Some("ana@example.com"));
        assert_eq!(user.first_name.as_deref(), Some("Ana"));
        assert!(user.has_role(Role::Admin));
        assert!(user.has_role(Role::Dietician));
        assert!(!user.has_role(Role::Author));
        assert_eq!(user.extra.get("ustensils"), Some(&json!([1, 2])));
        assert_eq!(user.extra.get("status"), Some(&json!("logged in")));
    }

    #[test]
    fn test_insecure_mode_clears_flags() {
        let user = CurrentUser::from_server(body(), false).unwrap();
        assert!(!user.is_admin);
        assert!(!user.is_dietician);
        assert_eq!(user.id, Some(12));
    }

    #[test]
    fn test_from_server_rejects_non_object() {
        assert!(matches!(
            CurrentUser::from_server(json!("nope"), true),
            Err(DomainError::InvalidUser(_))
        ));
    }

    #[test]
    fn test_logged_in_status() {
        assert!(CurrentUser::is_logged_in_status(&body()));
        assert!(!CurrentUser::is_logged_in_status(&json!({"status": "not logged"})));
        assert!(!CurrentUser::is_logged_in_status(&Value::Null));
    }

    #[test]
    fn test_never_chose_diet() {
        let mut user = CurrentUser::from_server(body(), true).unwrap();
        assert!(user.never_chose_diet());
        user.diet_changed_at = Some("2024-05-02".to_string());
        assert!(!user.never_chose_diet());
    }

    #[test]
    fn test_recently_joined() {
        let user = CurrentUser::from_server(body(), true).unwrap();
        let joined = DateTime::parse_from_rfc3339("2024-05-01T08:00:00Z")
            .unwrap()
            .with_timezone(&Utc);
        assert!(user.recently_joined(joined + TimeDelta::hours(23)));
        assert!(!user.recently_joined(joined + TimeDelta::hours(24)));
    }

    #[test]
    fn test_creation_date_formats() {
        let mut user = CurrentUser {
            creation_date: Some("2024-05-01T08:00:00.123456".to_string()),
            ..CurrentUser::default()
        };
        assert!(user.joined_at().is_some());
        user.creation_date = Some("2024-05-01".to_string());
        assert!(user.joined_at().is_some());
        user.creation_date = Some("yesterday".to_string());
        assert!(user.joined_at().is_none());
        assert!(!user.recently_joined(Utc::now()));
    }

    #[test]
    fn test_set_fullname() {
        let mut user = CurrentUser::default();
        user.set_fullname("Jo", "Doe");
        assert_eq!(user.first_name.as_deref(), Some("Jo"));
        assert_eq!(user.last_name.as_deref(), Some("Doe"));
    }
}
