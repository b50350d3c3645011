//! Thread-safe storage for type descriptors.

use crate::generics::GenericType;
use crate::types::{TypeFlags, TypeId, TypeInfo};
use dashmap::DashMap;
use rustc_hash::FxHashSet;
use std::sync::atomic::{AtomicU32, AtomicU64, Ordering};
use tracing::trace;

/// Global counter for assigning unique instance IDs to `TypeStore` instances.
static NEXT_INSTANCE_ID: AtomicU64 = AtomicU64::new(1);

/// Name under which the top-level object type is registered.
pub const OBJECT_TYPE_NAME: &str = "Object";

/// Thread-safe registry of `TypeInfo` descriptors.
///
/// Uses `DashMap` so one store can be shared read-only between threads while
/// array types are interned lazily.
///
/// ## Usage
///
/// ```ignore
/// let store = TypeStore::new();
/// let product = store.register(TypeInfo::class("com.myapp.Product"));
/// let products = store.array_of(product);
/// assert_eq!(store.component_type(products), Some(product));
/// ```
pub struct TypeStore {
    /// Unique instance ID for debugging
    instance_id: u64,

    /// `TypeId` -> `TypeInfo` mapping
    types: DashMap<TypeId, TypeInfo>,

    /// Qualified name -> `TypeId` index (last registration wins)
    by_name: DashMap<String, TypeId>,

    /// Component `TypeId` -> interned array `TypeId`
    arrays: DashMap<TypeId, TypeId>,

    /// Next available `TypeId`
    next_id: AtomicU32,
}

impl Default for TypeStore {
    fn default() -> Self {
        Self::new()
    }
}

impl TypeStore {
    /// Create a store containing only `TypeId::OBJECT`.
    pub fn new() -> Self {
        let instance_id = NEXT_INSTANCE_ID.fetch_add(1, Ordering::SeqCst);
        trace!(instance_id, "TypeStore::new - creating new instance");
        let store = Self {
            instance_id,
            types: DashMap::new(),
            by_name: DashMap::new(),
            arrays: DashMap::new(),
            next_id: AtomicU32::new(TypeId::FIRST_USER),
        };
        store
            .types
            .insert(TypeId::OBJECT, TypeInfo::object(OBJECT_TYPE_NAME));
        store
            .by_name
            .insert(OBJECT_TYPE_NAME.to_string(), TypeId::OBJECT);
        store
    }

    fn allocate(&self) -> TypeId {
        let id = self.next_id.fetch_add(1, Ordering::SeqCst);
        TypeId(id)
    }

    /// Register a new type and return its `TypeId`.
    pub fn register(&self, info: TypeInfo) -> TypeId {
        let id = self.allocate();
        trace!(
            instance_id = self.instance_id,
            type_id = id.0,
            name = %info.name,
            kind = ?info.kind,
            "TypeStore::register"
        );
        self.by_name.insert(info.name.clone(), id);
        self.types.insert(id, info);
        id
    }

    /// Return the interned array type whose component is `component`.
    pub fn array_of(&self, component: TypeId) -> TypeId {
        if let Some(existing) = self.arrays.get(&component) {
            return *existing;
        }
        let component_name = self.name(component).unwrap_or_default();
        // `entry` keeps two racing callers from interning twice.
        *self.arrays.entry(component).or_insert_with(|| {
            let id = self.allocate();
            let info = TypeInfo::array(component, &component_name);
            trace!(
                instance_id = self.instance_id,
                type_id = id.0,
                name = %info.name,
                "TypeStore::array_of - interning array type"
            );
            self.types.insert(id, info);
            id
        })
    }

    /// Get a copy of the descriptor for `id`.
    pub fn get(&self, id: TypeId) -> Option<TypeInfo> {
        self.types.get(&id).map(|r| r.clone())
    }

    pub fn contains(&self, id: TypeId) -> bool {
        self.types.contains_key(&id)
    }

    /// Look up a type by its fully qualified name.
    pub fn find(&self, name: &str) -> Option<TypeId> {
        self.by_name.get(name).map(|r| *r)
    }

    pub fn name(&self, id: TypeId) -> Option<String> {
        self.types.get(&id).map(|r| r.name.clone())
    }

    pub fn flags(&self, id: TypeId) -> TypeFlags {
        self.types
            .get(&id)
            .map(|r| r.flags)
            .unwrap_or_default()
    }

    pub fn component_type(&self, id: TypeId) -> Option<TypeId> {
        self.types.get(&id).and_then(|r| r.component_type())
    }

    /// Raw superclass, if any.
    pub fn superclass(&self, id: TypeId) -> Option<TypeId> {
        self.types
            .get(&id)
            .and_then(|r| r.superclass.as_ref().and_then(GenericType::raw_type))
    }

    /// Raw implemented interfaces in declaration order.
    pub fn interfaces(&self, id: TypeId) -> Vec<TypeId> {
        self.types
            .get(&id)
            .map(|r| {
                r.interfaces
                    .iter()
                    .filter_map(GenericType::raw_type)
                    .collect()
            })
            .unwrap_or_default()
    }

    pub fn declaring_type(&self, id: TypeId) -> Option<TypeId> {
        self.types.get(&id).and_then(|r| r.declaring)
    }

    /// Whether `id` or any of its supertypes is a collection root.
    pub fn is_collection_like(&self, id: TypeId) -> bool {
        let mut visited = FxHashSet::default();
        let mut pending = vec![id];
        while let Some(current) = pending.pop() {
            if !visited.insert(current) {
                continue;
            }
            let Some(info) = self.types.get(&current) else {
                continue;
            };
            if info.flags.contains(TypeFlags::COLLECTION) {
                return true;
            }
            pending.extend(info.supertypes().filter_map(GenericType::raw_type));
        }
        false
    }

    /// Resolve the element type of a collection-like declared type.
    ///
    /// Walks the supertype hierarchy from `declared`, substituting type
    /// arguments at every step, until a collection root is reached. The
    /// root's first argument is the element type. Returns `None` when the
    /// declared type is not collection-like or the argument is erased,
    /// a wildcard or an unbound type parameter.
    pub fn resolve_collection_element(&self, declared: &GenericType) -> Option<TypeId> {
        let mut visited = FxHashSet::default();
        let resolved = self.collection_element_in(declared, &mut visited);
        trace!(
            instance_id = self.instance_id,
            declared = ?declared,
            resolved = ?resolved,
            "TypeStore::resolve_collection_element"
        );
        resolved
    }

    fn collection_element_in(
        &self,
        declared: &GenericType,
        visited: &mut FxHashSet<TypeId>,
    ) -> Option<TypeId> {
        let GenericType::Concrete { raw, args } = declared else {
            return None;
        };
        if !visited.insert(*raw) {
            return None;
        }
        let info = self.get(*raw)?;
        if info.flags.contains(TypeFlags::COLLECTION) {
            return args.first().and_then(GenericType::raw_type);
        }
        info.supertypes()
            .map(|supertype| supertype.substitute(args))
            .find_map(|supertype| self.collection_element_in(&supertype, visited))
    }

    pub fn len(&self) -> usize {
        self.types.len()
    }

    pub fn is_empty(&self) -> bool {
        self.types.is_empty()
    }
}

#[cfg(test)]
#[path = "../tests/store_tests.rs"]
mod tests;
