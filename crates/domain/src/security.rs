use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// Capabilities enforced by application policy checks.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Capability {
    /// Allows viewing any user's record.
    ListUsers,
}

impl Capability {
    /// Returns the stable capability name used by the user store.
    #[must_use]
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::ListUsers => "list_users",
        }
    }
}

/// Capability name to grant flag mapping attached to a user.
///
/// An entry mapped to `false` is an explicit denial and does not grant the
/// capability.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CapabilityMap(BTreeMap<String, bool>);

impl CapabilityMap {
    /// Creates an empty capability map.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns whether the named capability is explicitly granted.
    #[must_use]
    pub fn grants(&self, capability: &str) -> bool {
        self.0.get(capability).copied().unwrap_or(false)
    }

    /// Records a grant flag for one capability.
    pub fn insert(&mut self, capability: impl Into<String>, granted: bool) {
        self.0.insert(capability.into(), granted);
    }

    /// Iterates entries in capability name order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, bool)> {
        self.0.iter().map(|(name, granted)| (name.as_str(), *granted))
    }

    /// Returns the number of entries, including denials.
    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Returns whether the map has no entries.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl<K: Into<String>> FromIterator<(K, bool)> for CapabilityMap {
    fn from_iter<I: IntoIterator<Item = (K, bool)>>(iter: I) -> Self {
        Self(
            iter.into_iter()
                .map(|(name, granted)| (name.into(), granted))
                .collect(),
        )
    }
}
