// Common types and utilities shared across the crate

pub mod auth;
pub mod entity_ids;
pub mod errors;
pub mod id;
pub mod principal;

pub use auth::{Actor, CapabilityCheck, RegistryCapability};
pub use entity_ids::*;
pub use errors::RegistryError;
pub use id::Id;
pub use principal::Principal;
