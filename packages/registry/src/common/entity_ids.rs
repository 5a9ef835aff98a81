//! Typed ID definitions for registry entities.
//!
//! Type aliases per entity give compile-time safety for ID usage throughout
//! the crate: a `ProviderId` cannot be passed where another entity's ID is
//! expected.

// Re-export the core Id type
pub use super::id::Id;

// ============================================================================
// Entity marker types
// ============================================================================

/// Marker type for Provider entities (registered care providers).
pub struct Provider;

// ============================================================================
// Type aliases - the primary API
// ============================================================================

/// Typed ID for Provider entities. Assigned sequentially at registration,
/// starting at 1, never reused.
pub type ProviderId = Id<Provider>;
