use std::collections::HashMap;
use std::path::Path;

use async_trait::async_trait;
use tokio::sync::RwLock;
use tracing::info;

use userlookup_application::{CapabilityRepository, UserRepository};
use userlookup_core::{AppError, AppResult, UserId};
use userlookup_domain::User;

use crate::UserSeed;

/// In-memory user store implementation.
#[derive(Debug, Default)]
pub struct InMemoryUserRepository {
    users: RwLock<HashMap<UserId, User>>,
}

impl InMemoryUserRepository {
    /// Creates an empty in-memory repository.
    #[must_use]
    pub fn new() -> Self {
        Self {
            users: RwLock::new(HashMap::new()),
        }
    }

    /// Creates a repository holding the given users.
    ///
    /// Ids, logins and emails (case-insensitive) must be unique.
    pub fn from_users(users: Vec<User>) -> AppResult<Self> {
        let mut by_id: HashMap<UserId, User> = HashMap::with_capacity(users.len());

        for user in users {
            if by_id.contains_key(&user.id) {
                return Err(AppError::Validation(format!(
                    "user id {} is defined more than once",
                    user.id
                )));
            }

            if let Some(existing) = by_id.values().find(|existing| {
                existing.login == user.login || existing.email.eq_ignore_ascii_case(&user.email)
            }) {
                return Err(AppError::Validation(format!(
                    "user {} duplicates the login or email of user {}",
                    user.id, existing.id
                )));
            }

            by_id.insert(user.id, user);
        }

        Ok(Self {
            users: RwLock::new(by_id),
        })
    }

    /// Creates a repository from a JSON seed document.
    pub fn from_seed_json(document: &str) -> AppResult<Self> {
        Self::from_users(parse_seed_users(document)?)
    }

    /// Creates a repository from a JSON seed file.
    pub fn from_seed_file(path: &Path) -> AppResult<Self> {
        let document = std::fs::read_to_string(path).map_err(|error| {
            AppError::Internal(format!(
                "failed to read user seed file '{}': {error}",
                path.display()
            ))
        })?;

        let users = parse_seed_users(&document)?;
        info!(path = %path.display(), users = users.len(), "loaded user seed");

        Self::from_users(users)
    }
}

#[async_trait]
impl UserRepository for InMemoryUserRepository {
    async fn find_by_login(&self, login: &str) -> AppResult<Option<User>> {
        let users = self.users.read().await;

        Ok(users.values().find(|user| user.login == login).cloned())
    }

    async fn find_by_email(&self, email: &str) -> AppResult<Option<User>> {
        let users = self.users.read().await;

        Ok(users
            .values()
            .find(|user| user.email.eq_ignore_ascii_case(email))
            .cloned())
    }
}

#[async_trait]
impl CapabilityRepository for InMemoryUserRepository {
    async fn has_capability(&self, user_id: UserId, capability: &str) -> AppResult<bool> {
        let users = self.users.read().await;

        Ok(users
            .get(&user_id)
            .is_some_and(|user| user.all_capabilities.grants(capability)))
    }
}

fn parse_seed_users(document: &str) -> AppResult<Vec<User>> {
    UserSeed::parse_document(document)?
        .into_iter()
        .map(UserSeed::into_user)
        .collect()
}
