//! Collection element inspection.

use crate::error::{DerivationPath, NamingError};
use namer_common::diagnostics::diagnostic_messages;
use namer_types::{Container, Value};

/// Return the first element of `container` in its own iteration order.
///
/// Callers check emptiness first; this only fails for inconsistent
/// containers:
/// - iteration yields nothing (`PEEK_NO_ELEMENT`)
/// - the first element is null (`PEEK_NULL_ELEMENT`)
///
/// Both are `IllegalState`, never `InvalidArgument`.
pub fn peek_element<C: Container + ?Sized>(container: &C) -> Result<&Value, NamingError> {
    let Some(first) = container.iter().next() else {
        return Err(NamingError::new(
            DerivationPath::ElementPeek,
            "",
            diagnostic_messages::PEEK_NO_ELEMENT,
        ));
    };
    if first.is_null() {
        return Err(NamingError::new(
            DerivationPath::ElementPeek,
            "",
            diagnostic_messages::PEEK_NULL_ELEMENT,
        ));
    }
    Ok(first)
}

#[cfg(test)]
#[path = "../tests/peek_tests.rs"]
mod tests;
