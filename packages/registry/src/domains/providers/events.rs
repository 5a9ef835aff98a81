//! Provider events - FACT EVENTS ONLY
//!
//! Events are immutable facts about applied effects. Rejected preconditions
//! emit nothing; the embedding layer drains these from the registry for any
//! downstream notification or audit concern.

use serde::{Deserialize, Serialize};

use crate::common::{Principal, ProviderId};
use crate::domains::providers::models::VerificationStatus;

/// Provider domain events - FACT EVENTS ONLY
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum ProviderEvent {
    /// Provider was registered (starts pending, background check not passed)
    ProviderRegistered {
        provider_id: ProviderId,
        name: String,
        registered_by: Principal,
    },

    /// A verifier recorded a background-check outcome and status
    ProviderVerified {
        provider_id: ProviderId,
        background_check_passed: bool,
        status: VerificationStatus,
        reviewed_by: Principal,
    },
}
