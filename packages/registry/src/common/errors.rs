//! Registry error taxonomy.
//!
//! A closed, flat set of failures, each with a fixed integer code. Every
//! failure is a precondition violation the caller must correct before
//! retrying - none are transient, so no retry machinery exists. Operations
//! return these alongside; nothing in the registry panics or throws.

use thiserror::Error;

use crate::common::ProviderId;

/// Errors returned by registry operations.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum RegistryError {
    /// The caller lacks the required role (admin or verifier).
    #[error("unauthorized: caller lacks the required role")]
    Unauthorized,

    /// The caller already holds a provider record; one principal maps to at
    /// most one provider.
    #[error("already registered: principal holds a provider record")]
    AlreadyRegistered,

    /// The referenced provider does not exist.
    #[error("provider {0} not found")]
    NotFound(ProviderId),
}

impl RegistryError {
    /// The fixed wire code for this error.
    pub fn code(&self) -> u16 {
        match self {
            RegistryError::Unauthorized => 100,
            RegistryError::AlreadyRegistered => 101,
            RegistryError::NotFound(_) => 102,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_codes_are_fixed() {
        assert_eq!(RegistryError::Unauthorized.code(), 100);
        assert_eq!(RegistryError::AlreadyRegistered.code(), 101);
        assert_eq!(RegistryError::NotFound(ProviderId::first()).code(), 102);
    }

    #[test]
    fn test_not_found_names_the_provider() {
        let err = RegistryError::NotFound(ProviderId::from_u64(9));
        assert_eq!(err.to_string(), "provider 9 not found");
    }
}
