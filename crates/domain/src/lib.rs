//! Domain entities and invariants.

#![forbid(unsafe_code)]

mod context;
mod security;
mod user;

pub use context::RequestContext;
pub use security::{Capability, CapabilityMap};
pub use user::{User, UserLogin};
