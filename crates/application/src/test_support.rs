//! Hand-written fakes shared by the service test suites.

use async_trait::async_trait;
use chrono::{TimeZone, Utc};
use tokio::sync::Mutex;

use userlookup_core::{AppResult, UserId};
use userlookup_domain::{CapabilityMap, User};

use crate::{AvatarResolver, CapabilityRepository, RouteUrlBuilder, UserRepository};

pub(crate) fn alice() -> User {
    User {
        id: UserId::new(7),
        login: "alice".to_owned(),
        display_name: "Alice Liddell".to_owned(),
        first_name: "Alice".to_owned(),
        last_name: "Liddell".to_owned(),
        nickname: "ally".to_owned(),
        slug: "alice".to_owned(),
        url: "https://alice.example".to_owned(),
        email: "alice@example.com".to_owned(),
        description: "Curious.".to_owned(),
        registered_at: Utc
            .with_ymd_and_hms(2015, 3, 9, 14, 5, 7)
            .single()
            .unwrap_or_else(|| panic!("valid timestamp")),
        roles: vec!["author".to_owned()],
        all_capabilities: CapabilityMap::from_iter([
            ("author", true),
            ("edit_posts", true),
            ("read", true),
        ]),
        own_capabilities: CapabilityMap::from_iter([("author", true)]),
    }
}

pub(crate) fn bob() -> User {
    User {
        id: UserId::new(5),
        login: "bob".to_owned(),
        display_name: "Bob".to_owned(),
        first_name: String::new(),
        last_name: String::new(),
        nickname: "bob".to_owned(),
        slug: "bob".to_owned(),
        url: String::new(),
        email: "bob@example.com".to_owned(),
        description: String::new(),
        registered_at: Utc
            .with_ymd_and_hms(2016, 1, 1, 0, 0, 0)
            .single()
            .unwrap_or_else(|| panic!("valid timestamp")),
        roles: vec!["subscriber".to_owned()],
        all_capabilities: CapabilityMap::from_iter([("read", true), ("subscriber", true)]),
        own_capabilities: CapabilityMap::from_iter([("subscriber", true)]),
    }
}

pub(crate) fn admin() -> User {
    User {
        id: UserId::new(1),
        login: "admin".to_owned(),
        display_name: "Site Admin".to_owned(),
        first_name: String::new(),
        last_name: String::new(),
        nickname: "admin".to_owned(),
        slug: "admin".to_owned(),
        url: String::new(),
        email: "admin@example.com".to_owned(),
        description: String::new(),
        registered_at: Utc
            .with_ymd_and_hms(2014, 6, 1, 8, 30, 0)
            .single()
            .unwrap_or_else(|| panic!("valid timestamp")),
        roles: vec!["administrator".to_owned()],
        all_capabilities: CapabilityMap::from_iter([
            ("administrator", true),
            ("list_users", true),
            ("read", true),
        ]),
        own_capabilities: CapabilityMap::from_iter([("administrator", true)]),
    }
}

/// User store fake that records every port call in order.
#[derive(Default)]
pub(crate) struct FakeUserStore {
    users: Vec<User>,
    calls: Mutex<Vec<String>>,
}

impl FakeUserStore {
    pub(crate) fn with_users(users: Vec<User>) -> Self {
        Self {
            users,
            calls: Mutex::new(Vec::new()),
        }
    }

    pub(crate) async fn calls(&self) -> Vec<String> {
        self.calls.lock().await.clone()
    }
}

#[async_trait]
impl UserRepository for FakeUserStore {
    async fn find_by_login(&self, login: &str) -> AppResult<Option<User>> {
        self.calls.lock().await.push(format!("find_by_login:{login}"));
        Ok(self.users.iter().find(|user| user.login == login).cloned())
    }

    async fn find_by_email(&self, email: &str) -> AppResult<Option<User>> {
        self.calls.lock().await.push(format!("find_by_email:{email}"));
        Ok(self
            .users
            .iter()
            .find(|user| user.email.eq_ignore_ascii_case(email))
            .cloned())
    }
}

#[async_trait]
impl CapabilityRepository for FakeUserStore {
    async fn has_capability(&self, user_id: UserId, capability: &str) -> AppResult<bool> {
        self.calls
            .lock()
            .await
            .push(format!("has_capability:{user_id}:{capability}"));
        Ok(self
            .users
            .iter()
            .find(|user| user.id == user_id)
            .is_some_and(|user| user.all_capabilities.grants(capability)))
    }
}

pub(crate) struct FakeAvatarResolver;

impl AvatarResolver for FakeAvatarResolver {
    fn avatar_url(&self, email: &str) -> String {
        format!("https://avatars.test/{email}")
    }
}

pub(crate) struct FakeRouteUrlBuilder;

impl RouteUrlBuilder for FakeRouteUrlBuilder {
    fn route_url(&self, path: &str) -> String {
        format!("https://site.test/wp-json{path}")
    }
}
