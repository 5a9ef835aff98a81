use tracing::warn;

use super::RegistryCapability;
use crate::common::{Principal, RegistryError};
use crate::registry::Registry;

/// Entry point for authorization checks
///
/// Usage:
/// ```rust,ignore
/// Actor::new(caller)
///     .can(RegistryCapability::GrantVerifier)
///     .check(registry)?;
/// ```
pub struct Actor<'a> {
    principal: &'a Principal,
}

impl<'a> Actor<'a> {
    /// Create a new actor for authorization checks
    ///
    /// # Arguments
    /// * `principal` - The caller identity (already authenticated upstream)
    pub fn new(principal: &'a Principal) -> Self {
        Self { principal }
    }

    /// Specify what capability the actor needs
    pub fn can(self, capability: RegistryCapability) -> CapabilityCheck<'a> {
        CapabilityCheck {
            principal: self.principal,
            capability,
        }
    }
}

/// Check after specifying capability
pub struct CapabilityCheck<'a> {
    principal: &'a Principal,
    capability: RegistryCapability,
}

impl CapabilityCheck<'_> {
    /// Perform the authorization check against current registry state.
    ///
    /// Authorization is evaluated before any other precondition in the
    /// calling action, so an unauthorized caller learns nothing about
    /// entity existence.
    pub fn check(self, registry: &Registry) -> Result<(), RegistryError> {
        let authorized = match self.capability {
            RegistryCapability::GrantVerifier => registry.is_admin(self.principal),
            RegistryCapability::RecordVerification => registry.is_verifier(self.principal),
        };

        if !authorized {
            warn!(
                principal = %self.principal,
                capability = ?self.capability,
                "Capability check denied"
            );
            return Err(RegistryError::Unauthorized);
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn registry() -> Registry {
        Registry::new(Principal::new("admin"))
    }

    #[test]
    fn test_admin_can_grant_verifier() {
        let registry = registry();
        let admin = Principal::new("admin");
        assert!(Actor::new(&admin)
            .can(RegistryCapability::GrantVerifier)
            .check(&registry)
            .is_ok());
    }

    #[test]
    fn test_non_admin_cannot_grant_verifier() {
        let registry = registry();
        let other = Principal::new("other");
        assert_eq!(
            Actor::new(&other)
                .can(RegistryCapability::GrantVerifier)
                .check(&registry),
            Err(RegistryError::Unauthorized)
        );
    }

    #[test]
    fn test_admin_is_not_implicitly_a_verifier() {
        let registry = registry();
        let admin = Principal::new("admin");
        assert_eq!(
            Actor::new(&admin)
                .can(RegistryCapability::RecordVerification)
                .check(&registry),
            Err(RegistryError::Unauthorized)
        );
    }
}
