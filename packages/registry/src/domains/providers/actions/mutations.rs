//! Provider mutation actions
//!
//! Actions are self-contained: they handle precondition checks, apply the
//! state transition, and emit fact events. Authorization is always evaluated
//! before entity existence, so unauthorized callers cannot probe for
//! provider IDs.

use tracing::{info, warn};

use crate::common::{Actor, Principal, ProviderId, RegistryCapability, RegistryError};
use crate::domains::providers::data::{RegisterProviderInput, VerificationOutcome};
use crate::domains::providers::events::ProviderEvent;
use crate::domains::providers::models::{CreateProvider, Provider};
use crate::registry::Registry;

/// Register a new provider for the calling principal.
///
/// Each principal holds at most one provider record; re-registration never
/// overwrites the original. Returns the freshly assigned ID.
pub fn register_provider(
    registry: &mut Registry,
    input: RegisterProviderInput,
    caller: &Principal,
) -> Result<ProviderId, RegistryError> {
    if registry.principal_to_provider.contains_key(caller) {
        warn!(principal = %caller, "Registration rejected: principal already registered");
        return Err(RegistryError::AlreadyRegistered);
    }

    let id = registry.next_provider_id();
    let name = input.name.clone();

    info!(provider_id = %id, name = %name, "Registering provider");

    let provider = Provider::new(
        id,
        CreateProvider {
            name: input.name,
            credentials: input.credentials,
            registered_by: caller.clone(),
        },
    );

    registry.insert_provider(caller.clone(), provider);

    registry.emit(ProviderEvent::ProviderRegistered {
        provider_id: id,
        name,
        registered_by: caller.clone(),
    });

    Ok(id)
}

/// Record a verification outcome for a provider (verifiers only).
///
/// Overwrites the background-check outcome and status with the supplied
/// values unconditionally - every status transition is legal and the two
/// fields are independent.
pub fn verify_provider(
    registry: &mut Registry,
    provider_id: ProviderId,
    outcome: VerificationOutcome,
    caller: &Principal,
) -> Result<bool, RegistryError> {
    // Authorization check - strictly before existence, so a caller without
    // verifier status receives Unauthorized even for an unknown ID
    Actor::new(caller)
        .can(RegistryCapability::RecordVerification)
        .check(registry)?;

    let provider = registry
        .providers
        .get_mut(&provider_id)
        .ok_or(RegistryError::NotFound(provider_id))?;

    provider.record_verification(
        outcome.background_check_passed,
        outcome.status,
        caller.clone(),
    );

    info!(
        provider_id = %provider_id,
        background_check_passed = outcome.background_check_passed,
        status = %outcome.status,
        reviewed_by = %caller,
        "Provider verification recorded"
    );

    registry.emit(ProviderEvent::ProviderVerified {
        provider_id,
        background_check_passed: outcome.background_check_passed,
        status: outcome.status,
        reviewed_by: caller.clone(),
    });

    Ok(true)
}
