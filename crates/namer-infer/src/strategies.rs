//! Element type resolution strategies for collection-like declared types.
//!
//! Generic erasure is handled as an ordered list of strategies. Each one
//! either resolves the element type, reports it unresolved (the next
//! strategy runs), or fails outright.

use crate::error::{DerivationPath, NamingError};
use crate::peek::peek_element;
use crate::runtime::class_for_value;
use namer_common::DiagnosticMessage;
use namer_common::diagnostics::diagnostic_messages;
use namer_types::{GenericType, TypeId, TypeIntrospector, Value};
use tracing::trace;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Resolution {
    Resolved(TypeId),
    Unresolved,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ElementStrategy {
    /// Resolve the element type from the declared generic arguments.
    StaticGeneric,
    /// Peek at the runtime value, which must be a non-empty collection.
    RuntimeValue,
}

/// Parameters only carry declarations.
pub const PARAMETER_STRATEGIES: &[ElementStrategy] = &[ElementStrategy::StaticGeneric];

/// Return types may fall back to the returned value.
pub const RETURN_TYPE_STRATEGIES: &[ElementStrategy] =
    &[ElementStrategy::StaticGeneric, ElementStrategy::RuntimeValue];

/// Inputs shared by every strategy.
#[derive(Clone, Copy, Debug)]
pub struct ElementContext<'a> {
    pub declared: &'a GenericType,
    pub value: Option<&'a Value>,
    pub path: DerivationPath,
    pub subject: &'a str,
}

impl ElementStrategy {
    pub fn resolve<T: TypeIntrospector + ?Sized>(
        self,
        db: &T,
        cx: &ElementContext<'_>,
    ) -> Result<Resolution, NamingError> {
        match self {
            Self::StaticGeneric => Ok(db
                .resolve_collection_element(cx.declared)
                .map_or(Resolution::Unresolved, Resolution::Resolved)),
            Self::RuntimeValue => {
                let Some(items) = cx.value.and_then(Value::as_collection) else {
                    return Err(NamingError::new(
                        cx.path,
                        cx.subject,
                        diagnostic_messages::UNTYPED_COLLECTION_NON_COLLECTION_VALUE,
                    ));
                };
                if items.is_empty() {
                    return Err(NamingError::new(
                        cx.path,
                        cx.subject,
                        diagnostic_messages::UNTYPED_COLLECTION_EMPTY_VALUE,
                    ));
                }
                let element =
                    peek_element(items).map_err(|err| err.within(cx.path, cx.subject))?;
                Ok(class_for_value(db, element).map_or(Resolution::Unresolved, Resolution::Resolved))
            }
        }
    }
}

/// Run `strategies` in order and return the first resolved element type.
///
/// Fails with `unresolved` when every strategy reports unresolved.
pub fn resolve_element<T: TypeIntrospector + ?Sized>(
    db: &T,
    strategies: &[ElementStrategy],
    cx: &ElementContext<'_>,
    unresolved: DiagnosticMessage,
) -> Result<TypeId, NamingError> {
    for strategy in strategies {
        if let Resolution::Resolved(element) = strategy.resolve(db, cx)? {
            trace!(?strategy, element = %element, subject = cx.subject, "resolve_element");
            return Ok(element);
        }
        trace!(?strategy, subject = cx.subject, "resolve_element: unresolved");
    }
    Err(NamingError::new(cx.path, cx.subject, unresolved))
}

#[cfg(test)]
#[path = "../tests/strategies_tests.rs"]
mod tests;
