//! Runtime value model.
//!
//! The inferencer never inspects field data; it only needs to know a value's
//! runtime type, whether it is an array, and for collections, whether the
//! container is empty and what its first element is.

use crate::introspect::TypeIntrospector;
use crate::types::TypeId;
use std::collections::VecDeque;
use std::fmt;
use std::sync::Arc;

/// A multi-element container with no ordering guarantee beyond "the first
/// element is reachable via iteration".
///
/// `is_empty` is what the container reports about itself; it is not
/// required to agree with `iter`. The inferencer reports a container that
/// claims to be non-empty but yields nothing as an illegal state.
pub trait Container: Send + Sync + fmt::Debug {
    fn is_empty(&self) -> bool;

    fn iter(&self) -> Box<dyn Iterator<Item = &Value> + '_>;
}

impl Container for Vec<Value> {
    fn is_empty(&self) -> bool {
        Vec::is_empty(self)
    }

    fn iter(&self) -> Box<dyn Iterator<Item = &Value> + '_> {
        Box::new(self.as_slice().iter())
    }
}

impl Container for VecDeque<Value> {
    fn is_empty(&self) -> bool {
        VecDeque::is_empty(self)
    }

    fn iter(&self) -> Box<dyn Iterator<Item = &Value> + '_> {
        Box::new(VecDeque::iter(self))
    }
}

/// A runtime value as seen by the naming core.
#[derive(Clone, Debug)]
pub enum Value {
    /// The null reference.
    Null,

    /// An instance of the given runtime type. Proxy and generated types are
    /// normalized by the inferencer, not here.
    Object(TypeId),

    /// An array with its component type. Elements are never inspected.
    Array {
        component: TypeId,
        elements: Vec<Value>,
    },

    /// A collection instance of runtime type `ty`.
    Collection {
        ty: TypeId,
        items: Arc<dyn Container>,
    },
}

impl Value {
    pub const fn object(ty: TypeId) -> Self {
        Self::Object(ty)
    }

    pub const fn array(component: TypeId, elements: Vec<Value>) -> Self {
        Self::Array {
            component,
            elements,
        }
    }

    pub fn collection(ty: TypeId, items: impl Container + 'static) -> Self {
        Self::Collection {
            ty,
            items: Arc::new(items),
        }
    }

    pub const fn is_null(&self) -> bool {
        matches!(self, Self::Null)
    }

    pub const fn is_array(&self) -> bool {
        matches!(self, Self::Array { .. })
    }

    /// The container, when this value is a collection.
    pub fn as_collection(&self) -> Option<&dyn Container> {
        match self {
            Self::Collection { items, .. } => Some(items.as_ref()),
            _ => None,
        }
    }

    /// The runtime type of this value; `None` for `Null`.
    pub fn runtime_type<T: TypeIntrospector + ?Sized>(&self, db: &T) -> Option<TypeId> {
        match self {
            Self::Null => None,
            Self::Object(ty) => Some(*ty),
            Self::Array { component, .. } => Some(db.array_of(*component)),
            Self::Collection { ty, .. } => Some(*ty),
        }
    }
}

#[cfg(test)]
#[path = "../tests/value_tests.rs"]
mod tests;
