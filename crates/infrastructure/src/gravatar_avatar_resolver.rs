use sha2::{Digest, Sha256};

use userlookup_application::AvatarResolver;

/// Default avatar host.
pub const DEFAULT_GRAVATAR_BASE_URL: &str = "https://secure.gravatar.com/avatar";

/// Resolves avatars through Gravatar's SHA-256 email hashes.
#[derive(Debug, Clone)]
pub struct GravatarAvatarResolver {
    base_url: String,
    size: u16,
}

impl GravatarAvatarResolver {
    /// Creates a resolver for the given avatar host and pixel size.
    #[must_use]
    pub fn new(base_url: impl Into<String>, size: u16) -> Self {
        Self {
            base_url: base_url.into().trim_end_matches('/').to_owned(),
            size,
        }
    }
}

impl Default for GravatarAvatarResolver {
    fn default() -> Self {
        Self::new(DEFAULT_GRAVATAR_BASE_URL, 96)
    }
}

impl AvatarResolver for GravatarAvatarResolver {
    fn avatar_url(&self, email: &str) -> String {
        let normalized = email.trim().to_lowercase();
        let hash = hex::encode(Sha256::digest(normalized.as_bytes()));

        format!("{}/{hash}?s={}&d=mm", self.base_url, self.size)
    }
}
