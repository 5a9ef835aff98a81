//! Verifier mutation actions

use tracing::info;

use crate::common::{Actor, Principal, RegistryCapability, RegistryError};
use crate::domains::verifiers::events::VerifierEvent;
use crate::registry::Registry;

/// Grant verifier status to a principal (admin only).
///
/// Idempotent: granting an existing verifier is a no-op success and emits
/// no duplicate event.
pub fn add_verifier(
    registry: &mut Registry,
    verifier: Principal,
    caller: &Principal,
) -> Result<bool, RegistryError> {
    // Admin authorization check
    Actor::new(caller)
        .can(RegistryCapability::GrantVerifier)
        .check(registry)?;

    let newly_granted = registry.verifiers.insert(verifier.clone());

    if newly_granted {
        info!(verifier = %verifier, granted_by = %caller, "Verifier granted");
        registry.emit(VerifierEvent::VerifierGranted {
            verifier,
            granted_by: caller.clone(),
        });
    }

    Ok(true)
}
