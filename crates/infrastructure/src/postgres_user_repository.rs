//! PostgreSQL-backed user store.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::PgPool;
use sqlx::types::Json;

use userlookup_application::{CapabilityRepository, UserRepository};
use userlookup_core::{AppError, AppResult, UserId};
use userlookup_domain::{CapabilityMap, User};

/// PostgreSQL implementation of the user lookup ports.
#[derive(Clone)]
pub struct PostgresUserRepository {
    pool: PgPool,
}

impl PostgresUserRepository {
    /// Creates a repository with the provided connection pool.
    #[must_use]
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[derive(Debug, sqlx::FromRow)]
struct UserRow {
    id: i64,
    login: String,
    display_name: String,
    first_name: String,
    last_name: String,
    nickname: String,
    slug: String,
    url: String,
    email: String,
    description: String,
    registered_at: DateTime<Utc>,
    roles: Json<Vec<String>>,
    capabilities: Json<CapabilityMap>,
    extra_capabilities: Json<CapabilityMap>,
}

impl TryFrom<UserRow> for User {
    type Error = AppError;

    fn try_from(row: UserRow) -> Result<Self, Self::Error> {
        let id = u64::try_from(row.id).map_err(|_| {
            AppError::Internal(format!("user row has negative id {}", row.id))
        })?;

        Ok(Self {
            id: UserId::new(id),
            login: row.login,
            display_name: row.display_name,
            first_name: row.first_name,
            last_name: row.last_name,
            nickname: row.nickname,
            slug: row.slug,
            url: row.url,
            email: row.email,
            description: row.description,
            registered_at: row.registered_at,
            roles: row.roles.0,
            all_capabilities: row.capabilities.0,
            own_capabilities: row.extra_capabilities.0,
        })
    }
}

fn user_id_param(user_id: UserId) -> AppResult<i64> {
    i64::try_from(user_id.get())
        .map_err(|_| AppError::Validation(format!("user id {user_id} is out of range")))
}

mod lookup;

#[async_trait]
impl UserRepository for PostgresUserRepository {
    async fn find_by_login(&self, login: &str) -> AppResult<Option<User>> {
        self.find_by_login_impl(login).await
    }

    async fn find_by_email(&self, email: &str) -> AppResult<Option<User>> {
        self.find_by_email_impl(email).await
    }
}

#[async_trait]
impl CapabilityRepository for PostgresUserRepository {
    async fn has_capability(&self, user_id: UserId, capability: &str) -> AppResult<bool> {
        self.has_capability_impl(user_id, capability).await
    }
}
