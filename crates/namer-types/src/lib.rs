//! Type model for conventional name inference.
//!
//! This crate provides everything the inferencer needs to know about types
//! and values without depending on a host reflection API:
//!
//! - **`TypeId` / `TypeInfo`**: interned type descriptors with kind, flags,
//!   supertypes and declaring type
//! - **`TypeStore`**: thread-safe registry of descriptors (`DashMap` backed)
//! - **`GenericType`**: possibly-parameterized type references and static
//!   collection element resolution with type argument substitution
//! - **`RuntimeShape`**: classification of runtime types into plain, dynamic
//!   proxy and synthetic subclass shapes
//! - **`Value`**: the runtime value model (null, object, array, collection)
//! - **`TypeIntrospector`**: the capability trait the inferencer consumes
pub mod classifier;
pub mod generics;
pub mod introspect;
pub mod store;
pub mod types;
pub mod value;

pub use classifier::RuntimeShape;
pub use generics::GenericType;
pub use introspect::TypeIntrospector;
pub use store::TypeStore;
pub use types::{TypeFlags, TypeId, TypeInfo, TypeKind};
pub use value::{Container, Value};
