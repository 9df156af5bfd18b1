//! Ports consumed by the user lookup use-cases.

use async_trait::async_trait;

use userlookup_core::{AppResult, UserId};
use userlookup_domain::{RequestContext, User};

use crate::ProjectedUserRecord;

/// Repository port for read-only user lookups.
#[async_trait]
pub trait UserRepository: Send + Sync {
    /// Finds a user by exact login name.
    async fn find_by_login(&self, login: &str) -> AppResult<Option<User>>;

    /// Finds a user by email (case-insensitive).
    async fn find_by_email(&self, email: &str) -> AppResult<Option<User>>;
}

/// Repository port for effective capability checks.
#[async_trait]
pub trait CapabilityRepository: Send + Sync {
    /// Returns whether the user effectively holds the named capability.
    ///
    /// Unknown users hold no capabilities.
    async fn has_capability(&self, user_id: UserId, capability: &str) -> AppResult<bool>;
}

/// Resolves the public avatar URL for an email address.
pub trait AvatarResolver: Send + Sync {
    /// Returns the avatar URL.
    fn avatar_url(&self, email: &str) -> String;
}

/// Builds absolute URLs for API routes.
pub trait RouteUrlBuilder: Send + Sync {
    /// Returns the absolute URL of a route path such as `/users/7`.
    fn route_url(&self, path: &str) -> String;
}

/// Post-processing hook applied to every projected user record.
///
/// Extensions may add, remove or rewrite fields. Their output replaces the
/// record handed to the next extension.
pub trait UserRecordExtension: Send + Sync {
    /// Returns the transformed record.
    fn apply(
        &self,
        record: ProjectedUserRecord,
        user: &User,
        context: RequestContext,
    ) -> ProjectedUserRecord;
}
