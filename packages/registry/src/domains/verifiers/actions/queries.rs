//! Verifier query actions

use crate::common::Principal;
use crate::registry::Registry;

/// Whether the principal has been granted verifier status.
pub fn is_verifier(registry: &Registry, principal: &Principal) -> bool {
    registry.is_verifier(principal)
}

/// All granted verifiers.
pub fn verifiers<'a>(registry: &'a Registry) -> impl Iterator<Item = &'a Principal> {
    registry.verifiers.iter()
}
