/// Capabilities in the provider registry
///
/// This is a deliberately small model: the only delegation path is the admin
/// granting verifier status, and the only verifier power is recording
/// verification outcomes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RegistryCapability {
    /// Grant verifier status to a principal (admin only)
    GrantVerifier,

    /// Record a background-check outcome and verification status for a
    /// provider (verifiers only)
    RecordVerification,
}
