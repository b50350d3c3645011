//! Conventional variable name inference.
//!
//! `NameInferencer` derives the name a framework would use for a value:
//!
//! | Source | Name |
//! |--------|------|
//! | `com.myapp.Product` | `product` |
//! | `com.myapp.UKProduct` | `UKProduct` |
//! | `Product[]` | `productList` |
//! | `List<Product>` | `productList` |
//! | `Mono<Product>` | `productMono` |
//! | `Flux<MyProduct>` | `myProductFlux` |
//!
//! Static type information is used first; the runtime value is consulted
//! only when the declaration is not specific enough (`Object` return type,
//! erased collection generics).

use crate::adapters::AdapterLookup;
use crate::error::{DerivationPath, NamingError};
use crate::method::{MethodDescriptor, MethodParameter};
use crate::peek::peek_element;
use crate::runtime::class_for_value;
use crate::strategies::{
    ElementContext, ElementStrategy, PARAMETER_STRATEGIES, RETURN_TYPE_STRATEGIES,
    resolve_element,
};
use namer_common::diagnostics::diagnostic_messages;
use namer_common::{DiagnosticMessage, pluralize};
use namer_types::{GenericType, TypeId, TypeIntrospector, Value};
use tracing::{debug, trace};

/// Intermediate result shared by every entry point: the type to name after,
/// plus either pluralization or a wrapper suffix (never both).
#[derive(Clone, Debug, PartialEq, Eq)]
enum Derivation {
    Single(TypeId),
    Plural(TypeId),
    Wrapped { element: TypeId, suffix: String },
}

/// Stateless name inference over an injected type model and adapter
/// registry. Cheap to construct; holds only borrows.
#[derive(Clone, Copy)]
pub struct NameInferencer<'a> {
    db: &'a dyn TypeIntrospector,
    adapters: &'a dyn AdapterLookup,
}

impl<'a> NameInferencer<'a> {
    pub fn new(db: &'a dyn TypeIntrospector, adapters: &'a dyn AdapterLookup) -> Self {
        Self { db, adapters }
    }

    // =========================================================================
    // Entry points
    // =========================================================================

    /// Name a value by its concrete runtime type.
    ///
    /// Arrays use the pluralized component type; collections peek at their
    /// first element and pluralize its type.
    pub fn infer_from_value(&self, value: &Value) -> Result<String, NamingError> {
        let derivation = self.derive_from_value(value)?;
        let name = self.finish(&derivation);
        debug!(name = %name, "infer_from_value");
        Ok(name)
    }

    /// Name a method or constructor parameter by its declared type.
    pub fn infer_from_parameter(
        &self,
        parameter: &MethodParameter<'_>,
    ) -> Result<String, NamingError> {
        let subject = parameter.describe();
        let derivation = self.derive_from_declaration(
            DeclarationSite {
                declared: parameter.declared_type(),
                resolved: parameter.parameter_type(),
                value: None,
                path: DerivationPath::Parameter,
                subject: &subject,
            },
            PARAMETER_STRATEGIES,
            diagnostic_messages::UNTYPED_COLLECTION_PARAMETER,
        )?;
        let name = self.finish(&derivation);
        debug!(parameter = %subject, name = %name, "infer_from_parameter");
        Ok(name)
    }

    /// Name a method's return value by its resolved return type, falling
    /// back on `value` when the type is the top-level object type or an
    /// erased collection.
    pub fn infer_from_return_type(
        &self,
        method: &MethodDescriptor,
        resolved_type: TypeId,
        value: Option<&Value>,
    ) -> Result<String, NamingError> {
        let value = value.filter(|v| !v.is_null());
        if resolved_type == TypeId::OBJECT {
            let Some(value) = value else {
                return Err(NamingError::new(
                    DerivationPath::ReturnType,
                    method.name.as_str(),
                    diagnostic_messages::OBJECT_RETURN_TYPE_WITHOUT_VALUE,
                ));
            };
            trace!(method = %method.name, "infer_from_return_type: object return type, using value");
            return self.infer_from_value(value);
        }

        // The declaration only describes the resolved type when their raw
        // types agree; otherwise treat the resolved type as erased.
        let erased;
        let declared = if method.return_type.raw_type() == Some(resolved_type) {
            &method.return_type
        } else {
            erased = GenericType::raw(resolved_type);
            &erased
        };
        let derivation = self.derive_from_declaration(
            DeclarationSite {
                declared,
                resolved: resolved_type,
                value,
                path: DerivationPath::ReturnType,
                subject: &method.name,
            },
            RETURN_TYPE_STRATEGIES,
            diagnostic_messages::UNTYPED_COLLECTION_NON_COLLECTION_VALUE,
        )?;
        let name = self.finish(&derivation);
        debug!(method = %method.name, name = %name, "infer_from_return_type");
        Ok(name)
    }

    /// [`infer_from_return_type`](Self::infer_from_return_type) with the
    /// method's declared return type and no value.
    pub fn infer_from_method_return(&self, method: &MethodDescriptor) -> Result<String, NamingError> {
        self.infer_from_return_type(method, method.declared_return_type(), None)
    }

    /// [`infer_from_return_type`](Self::infer_from_return_type) with the
    /// method's declared return type and the actual return value.
    pub fn infer_from_method_return_with_value(
        &self,
        method: &MethodDescriptor,
        value: &Value,
    ) -> Result<String, NamingError> {
        self.infer_from_return_type(method, method.declared_return_type(), Some(value))
    }

    /// Qualify an attribute name by a registered type's qualified name.
    pub fn qualified_attribute_name_for(&self, scope: TypeId, attribute_name: &str) -> String {
        namer_common::qualified_attribute_name(&self.db.qualified_name(scope), attribute_name)
    }

    // =========================================================================
    // Derivations
    // =========================================================================

    fn derive_from_value(&self, value: &Value) -> Result<Derivation, NamingError> {
        match value {
            Value::Null => Err(NamingError::new(
                DerivationPath::Value,
                "null",
                diagnostic_messages::VALUE_MUST_NOT_BE_NULL,
            )),
            Value::Array { component, .. } => Ok(Derivation::Plural(*component)),
            Value::Collection { ty, items } => {
                let subject = self.db.qualified_name(*ty);
                if items.is_empty() {
                    return Err(NamingError::new(
                        DerivationPath::Value,
                        subject,
                        diagnostic_messages::EMPTY_COLLECTION,
                    ));
                }
                let element = peek_element(items.as_ref())
                    .map_err(|err| err.within(DerivationPath::Value, &subject))?;
                Ok(Derivation::Plural(self.class_for_non_null(element)))
            }
            Value::Object(_) => Ok(Derivation::Single(self.class_for_non_null(value))),
        }
    }

    fn derive_from_declaration(
        &self,
        site: DeclarationSite<'_>,
        strategies: &[ElementStrategy],
        unresolved: DiagnosticMessage,
    ) -> Result<Derivation, NamingError> {
        let resolved = site.resolved;
        if let Some(component) = self.db.component_type(resolved) {
            return Ok(Derivation::Plural(component));
        }
        if self.db.is_collection_like(resolved) {
            let cx = ElementContext {
                declared: site.declared,
                value: site.value,
                path: site.path,
                subject: site.subject,
            };
            let element = resolve_element(self.db, strategies, &cx, unresolved)?;
            return Ok(Derivation::Plural(element));
        }
        match self.adapters.adapter_for(resolved, self.db) {
            Some(adapter) if !adapter.is_no_value() => {
                let element = site.declared.arg_type_or_object(0);
                trace!(
                    wrapper = %resolved,
                    element = %element,
                    kind = ?adapter.kind,
                    "derive_from_declaration: unwrapping reactive type"
                );
                Ok(Derivation::Wrapped {
                    element,
                    suffix: self.db.short_name(resolved),
                })
            }
            _ => Ok(Derivation::Single(resolved)),
        }
    }

    fn class_for_non_null(&self, value: &Value) -> TypeId {
        // Callers reject `Value::Null` before normalizing.
        class_for_value(self.db, value).unwrap_or(TypeId::OBJECT)
    }

    fn finish(&self, derivation: &Derivation) -> String {
        match derivation {
            Derivation::Single(ty) => self.db.short_name_as_property(*ty),
            Derivation::Plural(ty) => pluralize(&self.db.short_name_as_property(*ty)),
            Derivation::Wrapped { element, suffix } => {
                let mut name = self.db.short_name_as_property(*element);
                name.push_str(suffix);
                name
            }
        }
    }
}

/// Where a declared type came from.
struct DeclarationSite<'s> {
    declared: &'s GenericType,
    resolved: TypeId,
    value: Option<&'s Value>,
    path: DerivationPath,
    subject: &'s str,
}

#[cfg(test)]
#[path = "../tests/inferencer_tests.rs"]
mod tests;
