//! Typed sequential ID wrappers for compile-time type safety.
//!
//! This module provides `Id<T>`, a typed wrapper around a sequential `u64`
//! that prevents accidentally mixing up different ID types. Registry IDs are
//! assigned monotonically (`count + 1`) and never reused, so the natural
//! representation is a positive integer rather than a random identifier.
//!
//! # Example
//!
//! ```rust
//! use registry_core::common::id::Id;
//!
//! // Define entity marker types
//! pub struct Provider;
//! pub struct Claim;
//!
//! // Create type aliases
//! pub type ProviderId = Id<Provider>;
//! pub type ClaimId = Id<Claim>;
//!
//! // These are now incompatible types:
//! let provider_id = ProviderId::first();
//! let claim_id = ClaimId::first();
//!
//! // This would be a compile error:
//! // let wrong: ClaimId = provider_id;
//! ```

use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::cmp::Ordering;
use std::fmt::{self, Debug, Display};
use std::hash::{Hash, Hasher};
use std::marker::PhantomData;
use std::num::ParseIntError;
use std::str::FromStr;

/// A typed wrapper around a sequential `u64` identifier.
///
/// The type parameter `T` is the entity type this ID belongs to. IDs with
/// different `T` parameters are incompatible at compile time:
///
/// ```compile_fail
/// use registry_core::common::id::Id;
///
/// struct Provider;
/// struct Claim;
///
/// let provider_id: Id<Provider> = Id::first();
/// let claim_id: Id<Claim> = provider_id; // Compile error!
/// ```
#[repr(transparent)]
pub struct Id<T>(u64, PhantomData<fn() -> T>);

// ============================================================================
// Core implementations
// ============================================================================

impl<T> Id<T> {
    /// The first ID in a sequence. Sequences start at 1; zero is never a
    /// valid identifier.
    #[inline]
    pub fn first() -> Self {
        Self(1, PhantomData)
    }

    /// Creates an `Id` from a raw `u64`.
    ///
    /// Useful when rehydrating IDs from a serialized form or an external
    /// caller's input.
    #[inline]
    pub fn from_u64(value: u64) -> Self {
        Self(value, PhantomData)
    }

    /// Returns the raw `u64` value.
    #[inline]
    pub fn as_u64(&self) -> u64 {
        self.0
    }

    /// The next ID in the sequence.
    #[inline]
    pub fn next(&self) -> Self {
        Self(self.0 + 1, PhantomData)
    }

    /// Parses an `Id` from a decimal string.
    ///
    /// # Errors
    ///
    /// Returns an error if the string is not a valid unsigned integer.
    #[inline]
    pub fn parse(s: &str) -> Result<Self, ParseIntError> {
        Ok(Self(s.parse()?, PhantomData))
    }
}

// ============================================================================
// Standard trait implementations
// ============================================================================
//
// Manual impls so `Id<T>` is Copy/Eq/Ord/Hash for every marker type `T`,
// without requiring the marker itself to implement anything.

impl<T> Clone for Id<T> {
    #[inline]
    fn clone(&self) -> Self {
        *self
    }
}

impl<T> Copy for Id<T> {}

impl<T> Debug for Id<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        // Include type name for debugging clarity
        f.debug_tuple(&format!("Id<{}>", std::any::type_name::<T>()))
            .field(&self.0)
            .finish()
    }
}

impl<T> Display for Id<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        Display::fmt(&self.0, f)
    }
}

impl<T> PartialEq for Id<T> {
    #[inline]
    fn eq(&self, other: &Self) -> bool {
        self.0 == other.0
    }
}

impl<T> Eq for Id<T> {}

impl<T> PartialOrd for Id<T> {
    #[inline]
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl<T> Ord for Id<T> {
    #[inline]
    fn cmp(&self, other: &Self) -> Ordering {
        self.0.cmp(&other.0)
    }
}

impl<T> Hash for Id<T> {
    #[inline]
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.0.hash(state);
    }
}

impl<T> From<u64> for Id<T> {
    #[inline]
    fn from(value: u64) -> Self {
        Self::from_u64(value)
    }
}

impl<T> From<Id<T>> for u64 {
    #[inline]
    fn from(id: Id<T>) -> Self {
        id.0
    }
}

impl<T> FromStr for Id<T> {
    type Err = ParseIntError;

    #[inline]
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

// ============================================================================
// Serde support
// ============================================================================

impl<T> Serialize for Id<T> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        self.0.serialize(serializer)
    }
}

impl<'de, T> Deserialize<'de> for Id<T> {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        u64::deserialize(deserializer).map(Self::from_u64)
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    struct Widget;

    type WidgetId = Id<Widget>;

    #[test]
    fn test_first_and_next_are_sequential() {
        let id1 = WidgetId::first();
        let id2 = id1.next();
        assert_eq!(id1.as_u64(), 1);
        assert_eq!(id2.as_u64(), 2);
        assert!(id1 < id2);
    }

    #[test]
    fn test_parse_and_display_roundtrip() {
        let id = WidgetId::from_u64(42);
        let s = id.to_string();
        let parsed = WidgetId::parse(&s).unwrap();
        assert_eq!(id, parsed);
    }

    #[test]
    fn test_parse_rejects_garbage() {
        assert!(WidgetId::parse("not-a-number").is_err());
    }

    #[test]
    fn test_serde_roundtrip() {
        let id = WidgetId::from_u64(7);
        let json = serde_json::to_string(&id).unwrap();
        assert_eq!(json, "7");
        let parsed: WidgetId = serde_json::from_str(&json).unwrap();
        assert_eq!(id, parsed);
    }

    #[test]
    fn test_map_key() {
        use std::collections::BTreeMap;
        let mut map: BTreeMap<WidgetId, &str> = BTreeMap::new();
        let id = WidgetId::first();
        map.insert(id, "test");
        assert_eq!(map.get(&id), Some(&"test"));
    }

    #[test]
    fn test_debug_includes_type_name() {
        let id = WidgetId::first();
        let debug = format!("{:?}", id);
        assert!(debug.contains("Widget"));
    }
}
