use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::domains::providers::models::{Provider, VerificationStatus};

/// Provider data type - the JSON view a front end consumes
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProviderData {
    pub id: u64,

    // Profile
    pub name: String,
    pub credentials: String,

    // Verification workflow
    pub background_check_passed: bool,
    pub status: String,
    pub registered_by: String,
    pub reviewed_by: Option<String>,
    pub reviewed_at: Option<DateTime<Utc>>,

    // Timestamps
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl From<Provider> for ProviderData {
    fn from(provider: Provider) -> Self {
        Self {
            id: provider.id.as_u64(),
            name: provider.name,
            credentials: provider.credentials,
            background_check_passed: provider.background_check_passed,
            status: provider.status.to_string(),
            registered_by: provider.registered_by.to_string(),
            reviewed_by: provider.reviewed_by.map(|p| p.to_string()),
            reviewed_at: provider.reviewed_at,
            created_at: provider.created_at,
            updated_at: provider.updated_at,
        }
    }
}

/// Input for registering a new provider
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RegisterProviderInput {
    pub name: String,
    pub credentials: String,
}

/// The two fields a verifier attests in one operation.
///
/// They are independent: a passed background check does not imply verified
/// status, and verified status does not imply a passed check.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct VerificationOutcome {
    pub background_check_passed: bool,
    pub status: VerificationStatus,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::common::{Principal, ProviderId};
    use crate::domains::providers::models::CreateProvider;

    #[test]
    fn test_provider_data_stringifies_status_and_principals() {
        let provider = Provider::new(
            ProviderId::first(),
            CreateProvider {
                name: "Happy Kids Daycare".to_string(),
                credentials: "License #12345".to_string(),
                registered_by: Principal::new("ST1OWNER"),
            },
        );
        let data = ProviderData::from(provider);
        assert_eq!(data.id, 1);
        assert_eq!(data.status, "pending");
        assert_eq!(data.registered_by, "ST1OWNER");

        let json = serde_json::to_value(&data).unwrap();
        assert_eq!(json["status"], "pending");
        assert_eq!(json["background_check_passed"], false);
    }
}
