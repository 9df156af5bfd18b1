//! User lookup use-cases.
//!
//! Every lookup resolves the key first, then authorizes the caller against
//! the resolved user, then projects the record. A key that matches nobody
//! yields `None`, which the transport renders as an empty object rather than
//! a not-found error.

use std::sync::Arc;

use userlookup_core::{AppResult, Principal};
use userlookup_domain::{RequestContext, User, UserLogin};

use crate::{AuthorizationService, ProjectedUserRecord, UserProjector, UserRepository};

/// Application service for looking up single users.
#[derive(Clone)]
pub struct UserLookupService {
    user_repository: Arc<dyn UserRepository>,
    authorization_service: AuthorizationService,
    projector: UserProjector,
}

impl UserLookupService {
    /// Creates a new user lookup service.
    #[must_use]
    pub fn new(
        user_repository: Arc<dyn UserRepository>,
        authorization_service: AuthorizationService,
        projector: UserProjector,
    ) -> Self {
        Self {
            user_repository,
            authorization_service,
            projector,
        }
    }

    /// Returns the record of the user with the given login, if any.
    pub async fn get_user_by_login(
        &self,
        principal: &Principal,
        login: &str,
        context: RequestContext,
    ) -> AppResult<Option<ProjectedUserRecord>> {
        let login = UserLogin::new(login)?;
        let user = self.user_repository.find_by_login(login.as_str()).await?;

        self.authorize_and_project(principal, user, context).await
    }

    /// Returns the record of the user with the given email, if any.
    ///
    /// The email is matched case-insensitively and is not validated as an
    /// address.
    pub async fn get_user_by_email(
        &self,
        principal: &Principal,
        email: &str,
        context: RequestContext,
    ) -> AppResult<Option<ProjectedUserRecord>> {
        let email = email.trim();
        if email.is_empty() {
            return Ok(None);
        }

        let user = self.user_repository.find_by_email(email).await?;

        self.authorize_and_project(principal, user, context).await
    }

    async fn authorize_and_project(
        &self,
        principal: &Principal,
        user: Option<User>,
        context: RequestContext,
    ) -> AppResult<Option<ProjectedUserRecord>> {
        let Some(user) = user else {
            return Ok(None);
        };

        self.authorization_service
            .authorize_user_view(principal, user.id)
            .await?;

        Ok(Some(self.projector.project(&user, context)))
    }
}
