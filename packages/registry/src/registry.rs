//! The registry state - entity store, role sets, and event buffer.
//!
//! One `Registry` instance owns all state for the process (or for a test).
//! The admin principal is fixed at construction and no operation can alter
//! it. Actions in `domains::*::actions` are the operation surface; this
//! module only holds state, role predicates, and the low-level insertions
//! actions build on.

use std::collections::{BTreeMap, BTreeSet, HashMap};
use std::sync::{Arc, RwLock};

use serde::{Deserialize, Serialize};

use crate::common::{Principal, ProviderId};
use crate::config::Config;
use crate::domains::providers::events::ProviderEvent;
use crate::domains::providers::models::Provider;
use crate::domains::verifiers::events::VerifierEvent;

/// A fact event from any registry domain, in emission order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum RegistryEvent {
    Provider(ProviderEvent),
    Verifier(VerifierEvent),
}

impl From<ProviderEvent> for RegistryEvent {
    fn from(event: ProviderEvent) -> Self {
        RegistryEvent::Provider(event)
    }
}

impl From<VerifierEvent> for RegistryEvent {
    fn from(event: VerifierEvent) -> Self {
        RegistryEvent::Verifier(event)
    }
}

/// The provider registry.
///
/// Simultaneously the access-control gate, the entity store, and the
/// workflow state machine. Mutating operations check preconditions and
/// apply their effect atomically with respect to this handle - a failed
/// precondition never leaves a partial mutation behind.
pub struct Registry {
    /// Fixed at construction; the only principal that can grant verifier
    /// status.
    admin: Principal,
    /// Equals the highest assigned provider ID. IDs are assigned as
    /// `provider_count + 1` and never reused.
    provider_count: u64,
    pub(crate) providers: BTreeMap<ProviderId, Provider>,
    /// At most one provider record per principal.
    pub(crate) principal_to_provider: HashMap<Principal, ProviderId>,
    /// Append-only; no revocation path exists.
    pub(crate) verifiers: BTreeSet<Principal>,
    events: Vec<RegistryEvent>,
}

impl Registry {
    /// Create an empty registry with the given admin principal.
    pub fn new(admin: Principal) -> Self {
        Self {
            admin,
            provider_count: 0,
            providers: BTreeMap::new(),
            principal_to_provider: HashMap::new(),
            verifiers: BTreeSet::new(),
            events: Vec::new(),
        }
    }

    /// Create a registry from loaded configuration.
    pub fn from_config(config: &Config) -> Self {
        Self::new(config.admin_principal.clone())
    }

    /// The fixed admin principal.
    pub fn admin(&self) -> &Principal {
        &self.admin
    }

    /// The highest assigned provider ID (0 before any registration).
    pub fn provider_count(&self) -> u64 {
        self.provider_count
    }

    /// Whether the principal is the admin.
    pub fn is_admin(&self, principal: &Principal) -> bool {
        self.admin == *principal
    }

    /// Whether the principal has been granted verifier status.
    pub fn is_verifier(&self, principal: &Principal) -> bool {
        self.verifiers.contains(principal)
    }

    /// The next provider ID to assign.
    pub(crate) fn next_provider_id(&self) -> ProviderId {
        ProviderId::from_u64(self.provider_count + 1)
    }

    /// Insert a freshly registered provider and index its registrant.
    ///
    /// Callers have already checked the one-provider-per-principal
    /// precondition; this applies the whole effect in one step so the
    /// counter, the record, and the index never disagree.
    pub(crate) fn insert_provider(&mut self, registrant: Principal, provider: Provider) {
        let id = provider.id;
        self.principal_to_provider.insert(registrant, id);
        self.providers.insert(id, provider);
        self.provider_count = id.as_u64();
    }

    /// Append a fact event to the buffer.
    pub(crate) fn emit(&mut self, event: impl Into<RegistryEvent>) {
        self.events.push(event.into());
    }

    /// Hand all buffered events to the embedding layer, oldest first.
    /// Each event is delivered exactly once.
    pub fn drain_events(&mut self) -> Vec<RegistryEvent> {
        std::mem::take(&mut self.events)
    }
}

/// Handle for use behind a concurrent front end.
///
/// The registry itself is sequential: each mutating operation combines a
/// precondition check and an effect that must be atomic with respect to
/// other writers. The write lock serializes mutations; reads share the
/// read lock and observe a consistent snapshot.
pub type SharedRegistry = Arc<RwLock<Registry>>;

/// Wrap a registry for shared use.
pub fn shared(registry: Registry) -> SharedRegistry {
    Arc::new(RwLock::new(registry))
}
