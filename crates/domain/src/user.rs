//! User domain types and validation rules.

use chrono::{DateTime, SecondsFormat, Utc};
use serde::{Deserialize, Serialize};
use userlookup_core::{AppError, AppResult, UserId};

use crate::CapabilityMap;

/// Validated login lookup key.
///
/// Accepts ASCII letters, digits, `_` and `-` only, matching the route
/// pattern `[0-9a-zA-Z_-]+`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct UserLogin(String);

impl UserLogin {
    /// Creates a validated login lookup key.
    pub fn new(value: impl Into<String>) -> AppResult<Self> {
        let value = value.into();

        if value.is_empty() {
            return Err(AppError::Validation("login must not be empty".to_owned()));
        }

        if !value
            .chars()
            .all(|character| character.is_ascii_alphanumeric() || matches!(character, '_' | '-'))
        {
            return Err(AppError::Validation(format!(
                "login '{value}' may only contain letters, digits, '_' and '-'"
            )));
        }

        Ok(Self(value))
    }

    /// Returns the validated login string.
    #[must_use]
    pub fn as_str(&self) -> &str {
        self.0.as_str()
    }
}

/// User entity as read from the user store.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct User {
    /// Unique user identifier.
    pub id: UserId,
    /// Login name.
    pub login: String,
    /// Name shown publicly.
    pub display_name: String,
    /// Given name, possibly empty.
    pub first_name: String,
    /// Family name, possibly empty.
    pub last_name: String,
    /// Nickname, possibly empty.
    pub nickname: String,
    /// URL-safe slug.
    pub slug: String,
    /// Personal website URL, possibly empty.
    pub url: String,
    /// Email address.
    pub email: String,
    /// Free-text biography.
    pub description: String,
    /// Registration instant.
    pub registered_at: DateTime<Utc>,
    /// Role names assigned to the user.
    pub roles: Vec<String>,
    /// Effective capabilities, including those inherited from roles.
    pub all_capabilities: CapabilityMap,
    /// Capabilities granted to the user directly.
    pub own_capabilities: CapabilityMap,
}

impl User {
    /// Returns the registration instant as ISO-8601 with a numeric UTC offset.
    #[must_use]
    pub fn registered_iso8601(&self) -> String {
        self.registered_at.to_rfc3339_opts(SecondsFormat::Secs, false)
    }
}
