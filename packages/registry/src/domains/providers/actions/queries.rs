//! Provider query actions
//!
//! Reads are unrestricted and side-effect free; absence is `None` or
//! `false`, never an error.

use crate::common::{Principal, ProviderId};
use crate::domains::providers::models::{Provider, VerificationStatus};
use crate::registry::Registry;

/// Get a single provider by ID.
pub fn get_provider(registry: &Registry, provider_id: ProviderId) -> Option<&Provider> {
    registry.providers.get(&provider_id)
}

/// Get the provider ID a principal registered, if any.
pub fn get_provider_id(registry: &Registry, principal: &Principal) -> Option<ProviderId> {
    registry.principal_to_provider.get(principal).copied()
}

/// Whether the provider currently holds verified status.
///
/// Derived from `status` alone - the background-check outcome does not
/// participate. Unknown providers are not verified.
pub fn is_provider_verified(registry: &Registry, provider_id: ProviderId) -> bool {
    registry
        .providers
        .get(&provider_id)
        .map(|provider| provider.status == VerificationStatus::Verified)
        .unwrap_or(false)
}

/// All providers with a given status, in registration order.
pub fn list_providers_by_status(
    registry: &Registry,
    status: VerificationStatus,
) -> Vec<&Provider> {
    registry
        .providers
        .values()
        .filter(|provider| provider.status == status)
        .collect()
}

/// All providers awaiting review, in registration order.
pub fn pending_providers(registry: &Registry) -> Vec<&Provider> {
    list_providers_by_status(registry, VerificationStatus::Pending)
}

/// Total number of registered providers.
pub fn count_providers(registry: &Registry) -> u64 {
    registry.providers.len() as u64
}
