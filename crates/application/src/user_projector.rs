//! Projection of user entities into context-dependent output records.

use std::sync::Arc;

use serde::Serialize;
use serde_json::{Map, Value, json};

use userlookup_domain::{CapabilityMap, RequestContext, User};

use crate::{AvatarResolver, RouteUrlBuilder, UserRecordExtension};

/// Insertion-ordered field mapping returned for one user.
///
/// The default value is the empty record returned when no user matched a
/// lookup.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(transparent)]
pub struct ProjectedUserRecord(Map<String, Value>);

impl ProjectedUserRecord {
    /// Creates an empty record.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets a field, returning the previous value if any.
    pub fn insert(&mut self, key: impl Into<String>, value: impl Into<Value>) -> Option<Value> {
        self.0.insert(key.into(), value.into())
    }

    /// Removes a field, keeping the order of the remaining ones.
    pub fn remove(&mut self, key: &str) -> Option<Value> {
        self.0.shift_remove(key)
    }

    /// Returns a field value.
    #[must_use]
    pub fn get(&self, key: &str) -> Option<&Value> {
        self.0.get(key)
    }

    /// Returns whether the field is present.
    #[must_use]
    pub fn contains_key(&self, key: &str) -> bool {
        self.0.contains_key(key)
    }

    /// Iterates field names in insertion order.
    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.0.keys().map(String::as_str)
    }

    /// Returns the number of fields.
    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Returns whether the record has no fields.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

/// Builds output records for users.
#[derive(Clone)]
pub struct UserProjector {
    avatar_resolver: Arc<dyn AvatarResolver>,
    route_url_builder: Arc<dyn RouteUrlBuilder>,
    extensions: Vec<Arc<dyn UserRecordExtension>>,
}

impl UserProjector {
    /// Creates a projector without record extensions.
    #[must_use]
    pub fn new(
        avatar_resolver: Arc<dyn AvatarResolver>,
        route_url_builder: Arc<dyn RouteUrlBuilder>,
    ) -> Self {
        Self {
            avatar_resolver,
            route_url_builder,
            extensions: Vec::new(),
        }
    }

    /// Registers an extension run after every extension registered before it.
    #[must_use]
    pub fn with_extension(mut self, extension: Arc<dyn UserRecordExtension>) -> Self {
        self.extensions.push(extension);
        self
    }

    /// Projects a user into the record exposed for the requested context.
    #[must_use]
    pub fn project(&self, user: &User, context: RequestContext) -> ProjectedUserRecord {
        let mut record = ProjectedUserRecord::new();

        record.insert("ID", user.id.get());
        record.insert("username", user.login.as_str());
        record.insert("name", user.display_name.as_str());
        record.insert("first_name", user.first_name.as_str());
        record.insert("last_name", user.last_name.as_str());
        record.insert("nickname", user.nickname.as_str());
        record.insert("slug", user.slug.as_str());
        record.insert("URL", user.url.as_str());
        record.insert("avatar", self.avatar_resolver.avatar_url(&user.email));
        record.insert("description", user.description.as_str());
        record.insert("registered", user.registered_iso8601());

        if context.includes_account_fields() {
            record.insert("roles", user.roles.clone());
            record.insert("capabilities", capabilities_value(&user.all_capabilities));
            record.insert("email", false);
        }

        if context.includes_private_fields() {
            record.insert("email", user.email.as_str());
            record.insert(
                "extra_capabilities",
                capabilities_value(&user.own_capabilities),
            );
        }

        record.insert(
            "meta",
            json!({
                "links": {
                    "self": self.route_url_builder.route_url(&format!("/users/{}", user.id)),
                    "archives": self
                        .route_url_builder
                        .route_url(&format!("/users/{}/posts", user.id)),
                }
            }),
        );

        self.extensions
            .iter()
            .fold(record, |record, extension| {
                extension.apply(record, user, context)
            })
    }
}

fn capabilities_value(capabilities: &CapabilityMap) -> Value {
    Value::Object(
        capabilities
            .iter()
            .map(|(name, granted)| (name.to_owned(), Value::Bool(granted)))
            .collect(),
    )
}
