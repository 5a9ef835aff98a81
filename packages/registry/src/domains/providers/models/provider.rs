use anyhow::Result;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::common::{Principal, ProviderId};

/// Verification status enum for type-safe workflow state
///
/// Every status is re-enterable: verifiers may move a provider between any
/// two statuses, in either direction. Wire codes are fixed: pending=1,
/// verified=2, rejected=3.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum VerificationStatus {
    Pending,
    Verified,
    Rejected,
}

impl VerificationStatus {
    /// The fixed wire code for this status.
    pub fn code(&self) -> u8 {
        match self {
            VerificationStatus::Pending => 1,
            VerificationStatus::Verified => 2,
            VerificationStatus::Rejected => 3,
        }
    }

    /// Decode a wire code, if valid.
    pub fn from_code(code: u8) -> Option<Self> {
        match code {
            1 => Some(VerificationStatus::Pending),
            2 => Some(VerificationStatus::Verified),
            3 => Some(VerificationStatus::Rejected),
            _ => None,
        }
    }
}

impl std::fmt::Display for VerificationStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            VerificationStatus::Pending => write!(f, "pending"),
            VerificationStatus::Verified => write!(f, "verified"),
            VerificationStatus::Rejected => write!(f, "rejected"),
        }
    }
}

impl std::str::FromStr for VerificationStatus {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "pending" => Ok(VerificationStatus::Pending),
            "verified" => Ok(VerificationStatus::Verified),
            "rejected" => Ok(VerificationStatus::Rejected),
            _ => Err(anyhow::anyhow!("Invalid verification status: {}", s)),
        }
    }
}

/// Provider model - a registered entity awaiting or holding a verification
/// status
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Provider {
    pub id: ProviderId,

    // Profile
    pub name: String,
    pub credentials: String,

    // Verification workflow
    pub background_check_passed: bool,
    pub status: VerificationStatus,
    pub registered_by: Principal,
    pub reviewed_by: Option<Principal>,
    pub reviewed_at: Option<DateTime<Utc>>,

    // Timestamps
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Input for creating a new provider record
#[derive(Debug, Clone)]
pub struct CreateProvider {
    pub name: String,
    pub credentials: String,
    pub registered_by: Principal,
}

impl Provider {
    /// Build the record a fresh registration inserts: background check not
    /// yet passed, status pending, no review on file.
    pub fn new(id: ProviderId, input: CreateProvider) -> Self {
        let now = Utc::now();
        Self {
            id,
            name: input.name,
            credentials: input.credentials,
            background_check_passed: false,
            status: VerificationStatus::Pending,
            registered_by: input.registered_by,
            reviewed_by: None,
            reviewed_at: None,
            created_at: now,
            updated_at: now,
        }
    }

    /// Record a verifier's attestation.
    ///
    /// Overwrites the background-check outcome and status unconditionally -
    /// the two fields are independent and every transition is legal,
    /// including regressions away from `Verified`.
    pub fn record_verification(
        &mut self,
        background_check_passed: bool,
        status: VerificationStatus,
        reviewed_by: Principal,
    ) {
        let now = Utc::now();
        self.background_check_passed = background_check_passed;
        self.status = status;
        self.reviewed_by = Some(reviewed_by);
        self.reviewed_at = Some(now);
        self.updated_at = now;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_display_and_parse_roundtrip() {
        for status in [
            VerificationStatus::Pending,
            VerificationStatus::Verified,
            VerificationStatus::Rejected,
        ] {
            let parsed: VerificationStatus = status.to_string().parse().unwrap();
            assert_eq!(parsed, status);
        }
    }

    #[test]
    fn test_status_parse_rejects_unknown() {
        assert!("approved".parse::<VerificationStatus>().is_err());
    }

    #[test]
    fn test_status_wire_codes() {
        assert_eq!(VerificationStatus::Pending.code(), 1);
        assert_eq!(VerificationStatus::Verified.code(), 2);
        assert_eq!(VerificationStatus::Rejected.code(), 3);
        for code in 1..=3 {
            let status = VerificationStatus::from_code(code).unwrap();
            assert_eq!(status.code(), code);
        }
        assert_eq!(VerificationStatus::from_code(0), None);
        assert_eq!(VerificationStatus::from_code(4), None);
    }

    #[test]
    fn test_new_provider_starts_pending_and_unchecked() {
        let provider = Provider::new(
            ProviderId::first(),
            CreateProvider {
                name: "Happy Kids Daycare".to_string(),
                credentials: "License #12345".to_string(),
                registered_by: Principal::new("ST1OWNER"),
            },
        );
        assert!(!provider.background_check_passed);
        assert_eq!(provider.status, VerificationStatus::Pending);
        assert_eq!(provider.reviewed_by, None);
        assert_eq!(provider.reviewed_at, None);
    }

    #[test]
    fn test_record_verification_stamps_review() {
        let mut provider = Provider::new(
            ProviderId::first(),
            CreateProvider {
                name: "Happy Kids Daycare".to_string(),
                credentials: "License #12345".to_string(),
                registered_by: Principal::new("ST1OWNER"),
            },
        );
        provider.record_verification(
            true,
            VerificationStatus::Verified,
            Principal::new("ST1VERIFIER"),
        );
        assert!(provider.background_check_passed);
        assert_eq!(provider.status, VerificationStatus::Verified);
        assert_eq!(provider.reviewed_by, Some(Principal::new("ST1VERIFIER")));
        assert!(provider.reviewed_at.is_some());
    }
}
