//! Conventional variable name inference.
//!
//! Given a runtime value, a declared parameter type, or a method's resolved
//! return type, derive the identifier a framework uses to refer to it
//! (model attributes, view variables):
//!
//! - **`NameInferencer`**: the four derivation entry points
//! - **`class_for_value`**: proxy and synthetic subclass normalization
//! - **`peek_element`**: first-element inspection with illegal-state checks
//! - **Strategies**: ordered static-then-runtime element resolution
//! - **`ReactiveAdapterRegistry`**: injected wrapper-type lookup
//!
//! The string helpers `attribute_name_to_property_name` and
//! `qualified_attribute_name` are re-exported from `namer_common`.
pub mod adapters;
pub mod error;
mod inferencer;
pub mod method;
mod peek;
mod runtime;
pub mod strategies;

pub use adapters::{
    AdapterConfig, AdapterDescriptor, AdapterKind, AdapterLookup, ReactiveAdapterRegistry,
    RegistryConfig,
};
pub use error::{ConfigError, DerivationPath, NamingError};
pub use inferencer::NameInferencer;
pub use method::{MethodDescriptor, MethodKind, MethodParameter};
pub use namer_common::{attribute_name_to_property_name, pluralize, qualified_attribute_name};
pub use peek::peek_element;
pub use runtime::{class_for_value, normalize_runtime_type};
pub use strategies::{ElementStrategy, Resolution};

// Test modules are loaded by their source files via #[path = "../tests/..."]
// declarations, except the fixture shared between them.
#[cfg(test)]
#[path = "../tests/fixtures.rs"]
pub(crate) mod fixtures;
