//! Opaque caller identity.

use serde::{Deserialize, Serialize};
use std::fmt::{self, Display};

/// An opaque, externally-authenticated caller identity.
///
/// The registry never creates, destroys, or inspects principals; the
/// embedding layer verifies identity upstream and hands the result in as-is.
/// A principal is used only as a lookup key and role marker (admin equality,
/// verifier-set membership, provider index).
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Principal(String);

impl Principal {
    /// Wrap an already-authenticated identity value.
    pub fn new(value: impl Into<String>) -> Self {
        Self(value.into())
    }

    /// The underlying identity string.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl Display for Principal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        Display::fmt(&self.0, f)
    }
}

impl From<&str> for Principal {
    fn from(value: &str) -> Self {
        Self::new(value)
    }
}

impl From<String> for Principal {
    fn from(value: String) -> Self {
        Self(value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_equality_is_by_value() {
        assert_eq!(Principal::new("ST1ABC"), Principal::from("ST1ABC"));
        assert_ne!(Principal::new("ST1ABC"), Principal::new("ST2DEF"));
    }

    #[test]
    fn test_serde_is_transparent() {
        let principal = Principal::new("ST1ABC");
        let json = serde_json::to_string(&principal).unwrap();
        assert_eq!(json, r#""ST1ABC""#);
    }
}
