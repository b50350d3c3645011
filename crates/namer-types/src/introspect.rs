//! The type introspection capability consumed by the inferencer.
//!
//! `TypeIntrospector` bundles the services the naming core treats as
//! already available: type-hierarchy queries, short-name rendering with
//! bean-style decapitalization, and static collection element resolution.
//! `TypeStore` is the in-tree implementation; hosts with their own type
//! model implement the required methods and inherit the rest.

use crate::classifier::{RuntimeShape, classify_runtime_type};
use crate::generics::GenericType;
use crate::store::TypeStore;
use crate::types::{TypeFlags, TypeId};
use namer_common::conventions::{ARRAY_SUFFIX, NESTED_CLASS_SEPARATOR, PACKAGE_SEPARATOR};
use namer_common::decapitalize;

pub trait TypeIntrospector: Send + Sync {
    /// Fully qualified name (empty for unknown types).
    fn qualified_name(&self, id: TypeId) -> String;

    /// Qualified name without its package prefix (empty for unknown types).
    fn simple_name(&self, id: TypeId) -> String;

    fn component_type(&self, id: TypeId) -> Option<TypeId>;

    /// The array type whose component is `component`.
    fn array_of(&self, component: TypeId) -> TypeId;

    fn flags(&self, id: TypeId) -> TypeFlags;

    fn superclass(&self, id: TypeId) -> Option<TypeId>;

    /// Implemented interfaces in declaration order.
    fn interfaces(&self, id: TypeId) -> Vec<TypeId>;

    fn declaring_type(&self, id: TypeId) -> Option<TypeId>;

    fn is_collection_like(&self, id: TypeId) -> bool;

    /// Statically resolve the element type of a collection-like declared
    /// type; `None` when generics are erased or unresolvable.
    fn resolve_collection_element(&self, declared: &GenericType) -> Option<TypeId>;

    fn is_array(&self, id: TypeId) -> bool {
        self.component_type(id).is_some()
    }

    fn is_language_interface(&self, id: TypeId) -> bool {
        self.flags(id).contains(TypeFlags::LANGUAGE_INTERFACE)
    }

    fn is_dynamic_proxy(&self, id: TypeId) -> bool {
        self.flags(id).contains(TypeFlags::DYNAMIC_PROXY)
    }

    /// Short name: simple name with nested separators rendered as `.`
    /// (`Outer.Inner`); arrays render as `Component[]`.
    fn short_name(&self, id: TypeId) -> String {
        if let Some(component) = self.component_type(id) {
            let mut name = self.short_name(component);
            name.push_str(ARRAY_SUFFIX);
            return name;
        }
        self.simple_name(id)
            .replace(NESTED_CLASS_SEPARATOR, &PACKAGE_SEPARATOR.to_string())
    }

    /// Short name as a property: the innermost segment of the short name,
    /// decapitalized (`com.myapp.Outer$MyProduct` becomes `myProduct`).
    fn short_name_as_property(&self, id: TypeId) -> String {
        let short_name = self.short_name(id);
        let innermost = match short_name.rfind(PACKAGE_SEPARATOR) {
            Some(idx) => &short_name[idx + 1..],
            None => short_name.as_str(),
        };
        decapitalize(innermost)
    }

    /// Classify a runtime type as plain, dynamic proxy or synthetic subclass.
    fn runtime_shape(&self, id: TypeId) -> RuntimeShape {
        classify_runtime_type(self, id)
    }
}

impl TypeIntrospector for TypeStore {
    fn qualified_name(&self, id: TypeId) -> String {
        self.name(id).unwrap_or_default()
    }

    fn simple_name(&self, id: TypeId) -> String {
        self.get(id)
            .map(|info| info.simple_name().to_string())
            .unwrap_or_default()
    }

    fn component_type(&self, id: TypeId) -> Option<TypeId> {
        TypeStore::component_type(self, id)
    }

    fn array_of(&self, component: TypeId) -> TypeId {
        TypeStore::array_of(self, component)
    }

    fn flags(&self, id: TypeId) -> TypeFlags {
        TypeStore::flags(self, id)
    }

    fn superclass(&self, id: TypeId) -> Option<TypeId> {
        TypeStore::superclass(self, id)
    }

    fn interfaces(&self, id: TypeId) -> Vec<TypeId> {
        TypeStore::interfaces(self, id)
    }

    fn declaring_type(&self, id: TypeId) -> Option<TypeId> {
        TypeStore::declaring_type(self, id)
    }

    fn is_collection_like(&self, id: TypeId) -> bool {
        TypeStore::is_collection_like(self, id)
    }

    fn resolve_collection_element(&self, declared: &GenericType) -> Option<TypeId> {
        TypeStore::resolve_collection_element(self, declared)
    }
}

#[cfg(test)]
#[path = "../tests/introspect_tests.rs"]
mod tests;
