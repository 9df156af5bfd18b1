use std::sync::Arc;

use userlookup_core::{AppError, AppResult, Principal, UserId};
use userlookup_domain::Capability;

use crate::CapabilityRepository;

/// Error code returned when a caller may not view a user.
pub const USER_CANNOT_LIST_CODE: &str = "user_cannot_list";

const USER_CANNOT_LIST_MESSAGE: &str = "Sorry, you are not allowed to view this user.";

/// Application service for user visibility checks.
#[derive(Clone)]
pub struct AuthorizationService {
    capability_repository: Arc<dyn CapabilityRepository>,
}

impl AuthorizationService {
    /// Creates a new authorization service from a repository implementation.
    #[must_use]
    pub fn new(capability_repository: Arc<dyn CapabilityRepository>) -> Self {
        Self {
            capability_repository,
        }
    }

    /// Returns whether the principal currently holds the capability.
    ///
    /// Anonymous principals hold no capabilities.
    pub async fn has_capability(
        &self,
        principal: &Principal,
        capability: Capability,
    ) -> AppResult<bool> {
        let Some(user_id) = principal.user_id() else {
            return Ok(false);
        };

        self.capability_repository
            .has_capability(user_id, capability.as_str())
            .await
    }

    /// Ensures the principal may view the record of `target`.
    ///
    /// `target` must be the id of the already resolved user. Viewing oneself
    /// is always allowed; viewing anyone else requires `list_users`.
    pub async fn authorize_user_view(&self, principal: &Principal, target: UserId) -> AppResult<()> {
        if principal.is_user(target) {
            return Ok(());
        }

        if self.has_capability(principal, Capability::ListUsers).await? {
            return Ok(());
        }

        Err(AppError::Forbidden {
            code: USER_CANNOT_LIST_CODE,
            message: USER_CANNOT_LIST_MESSAGE.to_owned(),
        })
    }
}

#[cfg(test)]
mod tests;
