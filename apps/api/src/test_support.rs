//! In-memory application state shared by the API test suites.

use std::sync::Arc;

use axum::http::HeaderName;
use userlookup_application::{AuthorizationService, UserLookupService, UserProjector};
use userlookup_infrastructure::{
    GravatarAvatarResolver, HiddenFieldsExtension, InMemoryUserRepository, UrlRouteBuilder,
};

use crate::state::AppState;

const SEED: &str = r#"[
    {
        "id": 1,
        "login": "admin",
        "email": "admin@example.com",
        "registered": "2014-06-01T08:30:00Z",
        "roles": ["administrator"],
        "capabilities": {"administrator": true, "list_users": true}
    },
    {
        "id": 5,
        "login": "bob",
        "email": "bob@example.com",
        "registered": "2016-01-01T00:00:00Z",
        "roles": ["subscriber"],
        "capabilities": {"read": true, "subscriber": true}
    },
    {
        "id": 7,
        "login": "alice",
        "email": "alice@example.com",
        "display_name": "Alice Liddell",
        "registered": "2015-03-09T14:05:07Z",
        "roles": ["author"],
        "capabilities": {"author": true, "read": true},
        "extra_capabilities": {"author": true}
    }
]"#;

pub fn app_state_with(projector_hidden_fields: &str) -> AppState {
    let repository = Arc::new(
        InMemoryUserRepository::from_seed_json(SEED)
            .unwrap_or_else(|error| panic!("seed should load: {error}")),
    );
    let route_builder = UrlRouteBuilder::new("https://example.com/wp-json")
        .unwrap_or_else(|error| panic!("valid base url: {error}"));

    let mut projector = UserProjector::new(
        Arc::new(GravatarAvatarResolver::default()),
        Arc::new(route_builder),
    );
    let hidden_fields = HiddenFieldsExtension::from_list(projector_hidden_fields);
    if !hidden_fields.is_empty() {
        projector = projector.with_extension(Arc::new(hidden_fields));
    }

    AppState {
        user_lookup_service: UserLookupService::new(
            repository.clone(),
            AuthorizationService::new(repository),
            projector,
        ),
        principal_header: HeaderName::from_static("x-user-id"),
    }
}
