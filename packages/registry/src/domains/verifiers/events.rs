//! Verifier events - FACT EVENTS ONLY

use serde::{Deserialize, Serialize};

use crate::common::Principal;

/// Verifier domain events - FACT EVENTS ONLY
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum VerifierEvent {
    /// Verifier status was granted. Emitted once per principal; an
    /// idempotent re-grant emits nothing.
    VerifierGranted {
        verifier: Principal,
        granted_by: Principal,
    },
}
