//! Type-driven conventional variable name inference.
//!
//! Facade over the workspace crates:
//! - [`common`]: naming constants, string conventions, diagnostic messages
//! - [`types`]: type descriptors, `TypeStore`, runtime values
//! - [`infer`]: `NameInferencer`, adapter registry, errors
//!
//! ```
//! use namer::infer::{NameInferencer, ReactiveAdapterRegistry};
//! use namer::types::{TypeInfo, TypeStore, Value};
//!
//! let store = TypeStore::new();
//! let product = store.register(TypeInfo::class("com.myapp.Product"));
//! let registry = ReactiveAdapterRegistry::new();
//! let inferencer = NameInferencer::new(&store, &registry);
//!
//! let name = inferencer.infer_from_value(&Value::object(product)).unwrap();
//! assert_eq!(name, "product");
//! ```

pub use namer_common as common;
pub use namer_infer as infer;
pub use namer_types as types;

pub use namer_infer::{
    AdapterKind, MethodDescriptor, NameInferencer, NamingError, ReactiveAdapterRegistry,
    attribute_name_to_property_name, qualified_attribute_name,
};
pub use namer_types::{GenericType, TypeFlags, TypeId, TypeInfo, TypeStore, Value};

// Tracing subscriber setup for debugging derivations
pub mod tracing_config;
pub use tracing_config::init_tracing;
