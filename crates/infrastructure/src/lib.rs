//! Infrastructure adapters for application ports.

#![forbid(unsafe_code)]

mod gravatar_avatar_resolver;
mod hidden_fields_extension;
mod in_memory_user_repository;
mod postgres_user_repository;
mod url_route_builder;
mod user_seed;

pub use gravatar_avatar_resolver::{DEFAULT_GRAVATAR_BASE_URL, GravatarAvatarResolver};
pub use hidden_fields_extension::HiddenFieldsExtension;
pub use in_memory_user_repository::InMemoryUserRepository;
pub use postgres_user_repository::PostgresUserRepository;
pub use url_route_builder::UrlRouteBuilder;
pub use user_seed::UserSeed;
