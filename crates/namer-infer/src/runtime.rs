//! Runtime type normalization.

use namer_types::{RuntimeShape, TypeId, TypeIntrospector, Value};
use tracing::trace;

/// Determine the type to name a value after.
///
/// Returns the value's runtime type, except that dynamic proxies resolve to
/// their primary interface and synthetic subclasses to their superclass
/// (see [`normalize_runtime_type`]). `None` only for `Value::Null`.
pub fn class_for_value<T: TypeIntrospector + ?Sized>(db: &T, value: &Value) -> Option<TypeId> {
    let runtime = value.runtime_type(db)?;
    Some(normalize_runtime_type(db, runtime))
}

/// Normalize a runtime type by its shape.
///
/// - Dynamic proxy: the first implemented interface that is not a
///   language-intrinsic marker; the proxy itself if every interface is one.
/// - Synthetic subclass: its superclass.
/// - Plain: unchanged.
pub fn normalize_runtime_type<T: TypeIntrospector + ?Sized>(db: &T, ty: TypeId) -> TypeId {
    let normalized = match db.runtime_shape(ty) {
        RuntimeShape::Plain(ty) => ty,
        RuntimeShape::DynamicProxy { proxy, interfaces } => interfaces
            .into_iter()
            .find(|&ifc| !db.is_language_interface(ifc))
            .unwrap_or(proxy),
        RuntimeShape::SyntheticSubclass { superclass, .. } => superclass,
    };
    if normalized != ty {
        trace!(runtime = %ty, normalized = %normalized, "normalize_runtime_type");
    }
    normalized
}

#[cfg(test)]
#[path = "../tests/runtime_tests.rs"]
mod tests;
