// Provider Registry - Core
//
// In-process provider registry with a delegated verification workflow:
// providers self-register, a fixed admin grants verification authority to
// designated verifiers, and verifiers attest to background checks and
// status. The `Registry` is the whole system - access-control gate, entity
// store, and workflow state machine - consumed as an in-process API by a
// layer that supplies the caller principal already authenticated.
//
// Architecture follows domain-driven design: domains own their models,
// inputs, actions, and fact events; `common` holds the shared typed-ID,
// principal, error, and capability machinery.

pub mod common;
pub mod config;
pub mod domains;
pub mod registry;

pub use common::{Actor, Principal, ProviderId, RegistryCapability, RegistryError};
pub use config::Config;
pub use registry::{Registry, RegistryEvent, SharedRegistry};
