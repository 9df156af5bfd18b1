use crate::UserId;

/// Identity associated with an inbound request.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Principal {
    /// Request carries no authenticated identity.
    #[default]
    Anonymous,
    /// Request was made on behalf of a known user.
    User(UserId),
}

impl Principal {
    /// Returns the user id when the principal is authenticated.
    #[must_use]
    pub fn user_id(&self) -> Option<UserId> {
        match self {
            Self::Anonymous => None,
            Self::User(user_id) => Some(*user_id),
        }
    }

    /// Returns whether the principal is the given user.
    #[must_use]
    pub fn is_user(&self, user_id: UserId) -> bool {
        self.user_id() == Some(user_id)
    }
}
