//! JSON seed format for development user stores.

use chrono::{DateTime, Utc};
use serde::Deserialize;

use userlookup_core::{AppError, AppResult, UserId};
use userlookup_domain::{CapabilityMap, User};

/// One user entry of a seed document.
#[derive(Debug, Clone, Deserialize)]
pub struct UserSeed {
    id: u64,
    login: String,
    email: String,
    #[serde(default)]
    display_name: Option<String>,
    #[serde(default)]
    first_name: String,
    #[serde(default)]
    last_name: String,
    #[serde(default)]
    nickname: Option<String>,
    #[serde(default)]
    slug: Option<String>,
    #[serde(default)]
    url: String,
    #[serde(default)]
    description: String,
    registered: DateTime<Utc>,
    #[serde(default)]
    roles: Vec<String>,
    #[serde(default)]
    capabilities: CapabilityMap,
    #[serde(default)]
    extra_capabilities: CapabilityMap,
}

impl UserSeed {
    /// Parses a JSON array of seed users.
    pub fn parse_document(document: &str) -> AppResult<Vec<Self>> {
        serde_json::from_str(document)
            .map_err(|error| AppError::Validation(format!("invalid user seed document: {error}")))
    }

    /// Converts the seed into a user entity.
    ///
    /// Display name, nickname and slug fall back to the login when omitted.
    pub fn into_user(self) -> AppResult<User> {
        if self.id == 0 {
            return Err(AppError::Validation(format!(
                "seed user '{}' must have a non-zero id",
                self.login
            )));
        }

        if self.login.trim().is_empty() {
            return Err(AppError::Validation(format!(
                "seed user {} must have a login",
                self.id
            )));
        }

        Ok(User {
            id: UserId::new(self.id),
            display_name: self.display_name.unwrap_or_else(|| self.login.clone()),
            nickname: self.nickname.unwrap_or_else(|| self.login.clone()),
            slug: self.slug.unwrap_or_else(|| self.login.to_lowercase()),
            login: self.login,
            first_name: self.first_name,
            last_name: self.last_name,
            url: self.url,
            email: self.email,
            description: self.description,
            registered_at: self.registered,
            roles: self.roles,
            all_capabilities: self.capabilities,
            own_capabilities: self.extra_capabilities,
        })
    }
}
