//! Shared type world for the inference tests.

use crate::adapters::{AdapterKind, ReactiveAdapterRegistry};
use crate::inferencer::NameInferencer;
use namer_types::{GenericType, TypeFlags, TypeId, TypeInfo, TypeStore, Value};

pub(crate) struct World {
    pub store: TypeStore,
    pub registry: ReactiveAdapterRegistry,
    pub collection: TypeId,
    pub list: TypeId,
    pub array_list: TypeId,
    pub set: TypeId,
    pub hash_set: TypeId,
    pub serializable: TypeId,
    pub cloneable: TypeId,
    pub string: TypeId,
    pub product: TypeId,
    pub my_product: TypeId,
    pub uk_product: TypeId,
    pub order: TypeId,
    pub foo: TypeId,
    pub mono: TypeId,
    pub flux: TypeId,
    pub completable: TypeId,
}

impl World {
    pub fn new() -> Self {
        let store = TypeStore::new();
        let serializable = store.register(
            TypeInfo::interface("java.io.Serializable").with_flags(TypeFlags::LANGUAGE_INTERFACE),
        );
        let cloneable = store.register(
            TypeInfo::interface("java.lang.Cloneable").with_flags(TypeFlags::LANGUAGE_INTERFACE),
        );
        let string = store.register(TypeInfo::class("java.lang.String").with_interfaces([serializable]));
        let collection = store.register(
            TypeInfo::interface("java.util.Collection")
                .with_type_params(1)
                .with_flags(TypeFlags::COLLECTION),
        );
        let list = store.register(
            TypeInfo::interface("java.util.List")
                .with_type_params(1)
                .with_interfaces([GenericType::of(collection, [GenericType::Param(0)])]),
        );
        let array_list = store.register(
            TypeInfo::class("java.util.ArrayList")
                .with_type_params(1)
                .with_interfaces([
                    GenericType::of(list, [GenericType::Param(0)]),
                    GenericType::raw(serializable),
                    GenericType::raw(cloneable),
                ]),
        );
        let set = store.register(
            TypeInfo::interface("java.util.Set")
                .with_type_params(1)
                .with_interfaces([GenericType::of(collection, [GenericType::Param(0)])]),
        );
        let hash_set = store.register(
            TypeInfo::class("java.util.HashSet")
                .with_type_params(1)
                .with_interfaces([GenericType::of(set, [GenericType::Param(0)])]),
        );
        let product = store.register(TypeInfo::class("com.myapp.Product"));
        let my_product = store.register(TypeInfo::class("com.myapp.MyProduct"));
        let uk_product = store.register(TypeInfo::class("com.myapp.UKProduct"));
        let order = store.register(TypeInfo::class("com.myapp.Order"));
        let foo = store.register(TypeInfo::interface("com.myapp.Foo"));
        let mono = store.register(TypeInfo::class("reactor.core.publisher.Mono").with_type_params(1));
        let flux = store.register(TypeInfo::class("reactor.core.publisher.Flux").with_type_params(1));
        let completable = store.register(TypeInfo::class("io.reactivex.Completable"));

        let registry = ReactiveAdapterRegistry::new()
            .with(mono, AdapterKind::SingleValue)
            .with(flux, AdapterKind::MultiValue)
            .with(completable, AdapterKind::NoValue);

        Self {
            store,
            registry,
            collection,
            list,
            array_list,
            set,
            hash_set,
            serializable,
            cloneable,
            string,
            product,
            my_product,
            uk_product,
            order,
            foo,
            mono,
            flux,
            completable,
        }
    }

    pub fn inferencer(&self) -> NameInferencer<'_> {
        NameInferencer::new(&self.store, &self.registry)
    }

    /// An `ArrayList` holding `count` products.
    pub fn product_list(&self, count: usize) -> Value {
        Value::collection(
            self.array_list,
            vec![Value::object(self.product); count],
        )
    }

    /// A dynamic proxy class implementing `interfaces` in order.
    pub fn proxy(&self, interfaces: &[TypeId]) -> TypeId {
        self.store.register(
            TypeInfo::class("jdk.proxy1.$Proxy42")
                .with_flags(TypeFlags::DYNAMIC_PROXY)
                .with_interfaces(interfaces.iter().copied()),
        )
    }
}
