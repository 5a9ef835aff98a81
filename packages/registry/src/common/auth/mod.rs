/// Authorization module for the provider registry
///
/// Provides a fluent API for capability checks in action code:
///
/// ```rust,ignore
/// use registry_core::common::auth::{Actor, RegistryCapability};
///
/// // In an action:
/// Actor::new(caller)
///     .can(RegistryCapability::RecordVerification)
///     .check(registry)?;
/// ```
///
/// Roles are capability-set checks against registry state - admin is an
/// equality check on the fixed admin principal, verifier is membership in
/// the verifier set. There are no type-level roles.
mod builder;
mod capability;

pub use builder::{Actor, CapabilityCheck};
pub use capability::RegistryCapability;
