//! Application services and ports.

#![forbid(unsafe_code)]

mod authorization_service;
mod user_lookup_ports;
mod user_lookup_service;
mod user_projector;

#[cfg(test)]
mod test_support;

pub use authorization_service::{AuthorizationService, USER_CANNOT_LIST_CODE};
pub use user_lookup_ports::{
    AvatarResolver, CapabilityRepository, RouteUrlBuilder, UserRecordExtension, UserRepository,
};
pub use user_lookup_service::UserLookupService;
pub use user_projector::{ProjectedUserRecord, UserProjector};
