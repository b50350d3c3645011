//! Runtime type shape classification.
//!
//! Runtime enhancement and proxying must not leak implementation-detail type
//! names into derived identifiers. Every runtime type falls into exactly one
//! of three shapes, and each shape carries the data needed to normalize it.
//!
//! ```rust,ignore
//! match store.runtime_shape(ty) {
//!     RuntimeShape::Plain(ty) => { /* name after ty */ }
//!     RuntimeShape::DynamicProxy { interfaces, .. } => { /* pick an interface */ }
//!     RuntimeShape::SyntheticSubclass { superclass, .. } => { /* name after superclass */ }
//! }
//! ```

use crate::introspect::TypeIntrospector;
use crate::types::TypeId;
use namer_common::conventions::NESTED_CLASS_SEPARATOR;
use smallvec::SmallVec;

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum RuntimeShape {
    /// Ordinary type, named after itself.
    Plain(TypeId),

    /// Dynamic proxy class with the interfaces it implements, in
    /// declaration order.
    DynamicProxy {
        proxy: TypeId,
        interfaces: SmallVec<[TypeId; 4]>,
    },

    /// Runtime-generated subclass: a `$` in the simple name but no
    /// declaring type.
    SyntheticSubclass { generated: TypeId, superclass: TypeId },
}

impl RuntimeShape {
    /// The runtime type that was classified.
    pub const fn runtime_type(&self) -> TypeId {
        match self {
            Self::Plain(ty) => *ty,
            Self::DynamicProxy { proxy, .. } => *proxy,
            Self::SyntheticSubclass { generated, .. } => *generated,
        }
    }
}

/// Classify `id` into its runtime shape.
///
/// A generated-looking type without a superclass is classified as plain.
pub fn classify_runtime_type<T: TypeIntrospector + ?Sized>(db: &T, id: TypeId) -> RuntimeShape {
    if db.is_dynamic_proxy(id) {
        return RuntimeShape::DynamicProxy {
            proxy: id,
            interfaces: db.interfaces(id).into_iter().collect(),
        };
    }
    if db.simple_name(id).contains(NESTED_CLASS_SEPARATOR) && db.declaring_type(id).is_none() {
        if let Some(superclass) = db.superclass(id) {
            return RuntimeShape::SyntheticSubclass {
                generated: id,
                superclass,
            };
        }
    }
    RuntimeShape::Plain(id)
}

#[cfg(test)]
#[path = "../tests/classifier_tests.rs"]
mod tests;
