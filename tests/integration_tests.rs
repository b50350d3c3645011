//! End-to-end naming through the `namer` facade with a JSON-configured
//! adapter registry.

use namer::infer::{DerivationPath, MethodDescriptor, RegistryConfig};
use namer::types::TypeIntrospector;
use namer::{
    AdapterKind, GenericType, NameInferencer, ReactiveAdapterRegistry, TypeFlags, TypeId,
    TypeInfo, TypeStore, Value,
};

const REGISTRY_JSON: &str = r#"{
    "adapters": [
        { "type": "reactor.core.publisher.Mono", "kind": "single_value" },
        { "type": "reactor.core.publisher.Flux", "kind": "multi_value" },
        { "type": "io.reactivex.Completable", "kind": "no_value" }
    ]
}"#;

struct App {
    store: TypeStore,
    registry: ReactiveAdapterRegistry,
    collection: TypeId,
    list: TypeId,
    array_list: TypeId,
    product: TypeId,
    order: TypeId,
    mono: TypeId,
    flux: TypeId,
    controller: TypeId,
}

impl App {
    fn new() -> Self {
        let store = TypeStore::new();
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
                .with_interfaces([GenericType::of(list, [GenericType::Param(0)])]),
        );
        let product = store.register(TypeInfo::class("com.shop.Product"));
        let order = store.register(TypeInfo::class("com.shop.Order"));
        let mono = store.register(TypeInfo::class("reactor.core.publisher.Mono").with_type_params(1));
        let flux = store.register(TypeInfo::class("reactor.core.publisher.Flux").with_type_params(1));
        store.register(TypeInfo::class("io.reactivex.Completable"));
        let controller = store.register(TypeInfo::class("com.shop.web.ShopController"));

        let registry =
            ReactiveAdapterRegistry::from_json(REGISTRY_JSON, &store).expect("valid registry");

        Self {
            store,
            registry,
            collection,
            list,
            array_list,
            product,
            order,
            mono,
            flux,
            controller,
        }
    }

    fn inferencer(&self) -> NameInferencer<'_> {
        NameInferencer::new(&self.store, &self.registry)
    }
}

#[test]
fn test_registry_config_round_trips_through_serde() {
    let config = RegistryConfig::from_json(REGISTRY_JSON).expect("valid config");
    assert_eq!(config.adapters.len(), 3);
    assert_eq!(config.adapters[2].kind, AdapterKind::NoValue);

    let json = serde_json::to_value(&config).expect("serializable");
    assert_eq!(json["adapters"][0]["type"], "reactor.core.publisher.Mono");
    assert_eq!(json["adapters"][1]["kind"], "multi_value");
}

#[test]
fn test_controller_method_names() {
    let app = App::new();
    let inferencer = app.inferencer();

    let get_product = MethodDescriptor::method(app.controller, "getProduct").returning(app.product);
    assert_eq!(inferencer.infer_from_method_return(&get_product).unwrap(), "product");

    let list_orders = MethodDescriptor::method(app.controller, "listOrders")
        .returning(GenericType::of(app.list, [app.order]));
    assert_eq!(inferencer.infer_from_method_return(&list_orders).unwrap(), "orderList");

    let find_product = MethodDescriptor::method(app.controller, "findProduct")
        .returning(GenericType::of(app.mono, [app.product]));
    assert_eq!(inferencer.infer_from_method_return(&find_product).unwrap(), "productMono");

    let stream_orders = MethodDescriptor::method(app.controller, "streamOrders")
        .returning(GenericType::of(app.flux, [app.order]));
    assert_eq!(inferencer.infer_from_method_return(&stream_orders).unwrap(), "orderFlux");
}

#[test]
fn test_no_value_wrapper_named_as_plain_type() {
    let app = App::new();
    let completable = app.store.find("io.reactivex.Completable").expect("registered");
    let method = MethodDescriptor::method(app.controller, "save").returning(completable);
    assert_eq!(app.inferencer().infer_from_method_return(&method).unwrap(), "completable");
}

#[test]
fn test_handler_parameters() {
    let app = App::new();
    let inferencer = app.inferencer();
    let handler = MethodDescriptor::method(app.controller, "handle").with_parameters([
        GenericType::raw(app.product),
        GenericType::of(app.collection, [app.order]),
        GenericType::raw(app.store.array_of(app.product)),
        GenericType::raw(app.list),
    ]);

    let name = |index| inferencer.infer_from_parameter(&handler.parameter(index).unwrap());
    assert_eq!(name(0).unwrap(), "product");
    assert_eq!(name(1).unwrap(), "orderList");
    assert_eq!(name(2).unwrap(), "productList");

    let err = name(3).unwrap_err();
    assert!(err.is_invalid_argument());
    assert_eq!(err.path(), DerivationPath::Parameter);
    assert_eq!(err.subject(), "handle#3");
}

#[test]
fn test_raw_collection_return_uses_value() {
    let app = App::new();
    let method = MethodDescriptor::method(app.controller, "recent").returning(app.list);
    let value = Value::collection(app.array_list, vec![Value::object(app.order)]);
    assert_eq!(
        app.inferencer()
            .infer_from_method_return_with_value(&method, &value)
            .unwrap(),
        "orderList"
    );

    let empty = Value::collection(app.array_list, Vec::<Value>::new());
    let err = app
        .inferencer()
        .infer_from_method_return_with_value(&method, &empty)
        .unwrap_err();
    assert!(err.is_invalid_argument());
    assert_eq!(err.path(), DerivationPath::ReturnType);
}

#[test]
fn test_object_return_type_requires_value() {
    let app = App::new();
    let method = MethodDescriptor::method(app.controller, "lookup");
    let inferencer = app.inferencer();

    let err = inferencer.infer_from_method_return(&method).unwrap_err();
    assert!(err.is_invalid_argument());
    assert_eq!(err.subject(), "lookup");

    let value = Value::object(app.product);
    assert_eq!(
        inferencer
            .infer_from_method_return_with_value(&method, &value)
            .unwrap(),
        "product"
    );
}

#[test]
fn test_collection_value_with_null_first_element_is_illegal_state() {
    let app = App::new();
    let value = Value::collection(app.array_list, vec![Value::Null, Value::object(app.product)]);
    let err = app.inferencer().infer_from_value(&value).unwrap_err();
    assert!(err.is_illegal_state());
}

#[test]
fn test_attribute_and_qualified_names() {
    let app = App::new();
    assert_eq!(namer::attribute_name_to_property_name("max-age"), "maxAge");
    assert_eq!(
        namer::qualified_attribute_name("com.shop.web.ShopController", "cart"),
        "com.shop.web.ShopController.cart"
    );
    assert_eq!(
        app.inferencer().qualified_attribute_name_for(app.controller, "cart"),
        "com.shop.web.ShopController.cart"
    );
    assert_eq!(app.store.short_name(app.controller), "ShopController");
}

#[test]
fn test_init_tracing_is_repeatable() {
    let first = namer::init_tracing();
    let second = namer::init_tracing();
    // Without a log env var both calls are no-ops; with one, only the
    // first can install the global subscriber.
    assert!(first || !second);
}
