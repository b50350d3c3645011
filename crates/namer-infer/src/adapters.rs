//! Reactive/async wrapper adapter registry.
//!
//! The inferencer never hard-codes wrapper type names. Instead, a registry
//! injected at construction answers "is this declared type a wrapper, and
//! does it carry a value?". Wrappers that carry a value name after their
//! inner type with the wrapper's short name as a suffix (`productMono`);
//! "no value" wrappers (completion signals) name like ordinary types.
//!
//! A registry is built programmatically or from JSON configuration:
//!
//! ```json
//! {
//!   "adapters": [
//!     { "type": "reactor.core.publisher.Mono", "kind": "single_value" },
//!     { "type": "reactor.core.publisher.Flux", "kind": "multi_value" },
//!     { "type": "io.reactivex.Completable", "kind": "no_value" }
//!   ]
//! }
//! ```

use crate::error::ConfigError;
use namer_types::{TypeId, TypeIntrospector, TypeStore};
use rustc_hash::{FxHashMap, FxHashSet};
use serde::{Deserialize, Serialize};
use tracing::{debug, trace};

/// Cardinality of the values a wrapper type produces.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AdapterKind {
    /// Zero or one value (promise/future/single style).
    SingleValue,
    /// Zero or more values (stream/observable style).
    MultiValue,
    /// Completion signal without a value.
    NoValue,
}

/// Description of a registered wrapper type.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct AdapterDescriptor {
    /// The wrapper type the adapter was registered for.
    pub wrapper: TypeId,
    pub kind: AdapterKind,
}

impl AdapterDescriptor {
    pub const fn is_no_value(&self) -> bool {
        matches!(self.kind, AdapterKind::NoValue)
    }

    pub const fn is_multi_value(&self) -> bool {
        matches!(self.kind, AdapterKind::MultiValue)
    }
}

/// The adapter lookup capability consumed by the inferencer.
pub trait AdapterLookup: Send + Sync {
    /// Find the adapter for a declared type, if it is a registered wrapper
    /// or a subtype of one.
    fn adapter_for(&self, ty: TypeId, db: &dyn TypeIntrospector) -> Option<AdapterDescriptor>;
}

// =============================================================================
// Configuration
// =============================================================================

/// Serialized form of a registry.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct RegistryConfig {
    #[serde(default)]
    pub adapters: Vec<AdapterConfig>,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct AdapterConfig {
    /// Fully qualified wrapper type name, resolved against a `TypeStore`.
    #[serde(rename = "type")]
    pub type_name: String,
    pub kind: AdapterKind,
}

impl RegistryConfig {
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        Ok(serde_json::from_str(json)?)
    }
}

// =============================================================================
// ReactiveAdapterRegistry
// =============================================================================

/// Read-only (after construction) map from wrapper type to adapter.
#[derive(Clone, Debug, Default)]
pub struct ReactiveAdapterRegistry {
    adapters: FxHashMap<TypeId, AdapterDescriptor>,
}

impl ReactiveAdapterRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register `wrapper` as a wrapper type of the given kind. Registering
    /// the same wrapper twice replaces the earlier kind.
    pub fn register(&mut self, wrapper: TypeId, kind: AdapterKind) -> &mut Self {
        trace!(wrapper = %wrapper, ?kind, "ReactiveAdapterRegistry::register");
        self.adapters
            .insert(wrapper, AdapterDescriptor { wrapper, kind });
        self
    }

    /// Builder-style variant of [`register`](Self::register).
    pub fn with(mut self, wrapper: TypeId, kind: AdapterKind) -> Self {
        self.register(wrapper, kind);
        self
    }

    /// Build a registry from configuration, resolving type names in `store`.
    pub fn from_config(config: &RegistryConfig, store: &TypeStore) -> Result<Self, ConfigError> {
        let mut registry = Self::new();
        for adapter in &config.adapters {
            let wrapper = store
                .find(&adapter.type_name)
                .ok_or_else(|| ConfigError::UnknownType(adapter.type_name.clone()))?;
            registry.register(wrapper, adapter.kind);
        }
        debug!(
            adapters = registry.len(),
            "ReactiveAdapterRegistry::from_config"
        );
        Ok(registry)
    }

    /// Parse JSON configuration and build a registry from it.
    pub fn from_json(json: &str, store: &TypeStore) -> Result<Self, ConfigError> {
        Self::from_config(&RegistryConfig::from_json(json)?, store)
    }

    /// Exact-type lookup, without walking supertypes.
    pub fn get(&self, ty: TypeId) -> Option<AdapterDescriptor> {
        self.adapters.get(&ty).copied()
    }

    pub fn contains(&self, ty: TypeId) -> bool {
        self.adapters.contains_key(&ty)
    }

    pub fn len(&self) -> usize {
        self.adapters.len()
    }

    pub fn is_empty(&self) -> bool {
        self.adapters.is_empty()
    }
}

impl AdapterLookup for ReactiveAdapterRegistry {
    /// Exact match first, then the nearest registered supertype
    /// (breadth-first, superclass before interfaces).
    fn adapter_for(&self, ty: TypeId, db: &dyn TypeIntrospector) -> Option<AdapterDescriptor> {
        if self.adapters.is_empty() {
            return None;
        }
        if let Some(exact) = self.get(ty) {
            return Some(exact);
        }
        let mut visited = FxHashSet::default();
        visited.insert(ty);
        let mut frontier = vec![ty];
        while !frontier.is_empty() {
            let mut next = Vec::new();
            for current in frontier {
                let supertypes = db.superclass(current).into_iter().chain(db.interfaces(current));
                for supertype in supertypes {
                    if !visited.insert(supertype) {
                        continue;
                    }
                    if let Some(found) = self.get(supertype) {
                        return Some(found);
                    }
                    next.push(supertype);
                }
            }
            frontier = next;
        }
        None
    }
}

#[cfg(test)]
#[path = "../tests/adapters_tests.rs"]
mod tests;
