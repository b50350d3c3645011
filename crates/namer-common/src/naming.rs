//! String-level naming conventions.
//!
//! These helpers operate on plain strings and know nothing about the type
//! model. The inferencer combines them with type short names to produce
//! variable names; hosts may also call them directly.

use crate::conventions::{ATTRIBUTE_WORD_SEPARATOR, PACKAGE_SEPARATOR, PLURAL_SUFFIX};

/// Pluralize a derived name by appending [`PLURAL_SUFFIX`].
///
/// `"product"` becomes `"productList"`.
pub fn pluralize(name: &str) -> String {
    let mut result = String::with_capacity(name.len() + PLURAL_SUFFIX.len());
    result.push_str(name);
    result.push_str(PLURAL_SUFFIX);
    result
}

/// Decapitalize a name following bean property rules.
///
/// The first character is lower-cased, except when the first two characters
/// are both upper case, in which case the name is returned unchanged:
///
/// | Input | Output |
/// |-------|--------|
/// | `Product` | `product` |
/// | `MyProduct` | `myProduct` |
/// | `UKProduct` | `UKProduct` |
/// | `X` | `x` |
pub fn decapitalize(name: &str) -> String {
    let mut chars = name.chars();
    let Some(first) = chars.next() else {
        return String::new();
    };
    if let Some(second) = chars.clone().next() {
        if first.is_uppercase() && second.is_uppercase() {
            return name.to_string();
        }
    }
    let mut result = String::with_capacity(name.len());
    result.push(single_char_case(first, first.to_lowercase()));
    result.push_str(chars.as_str());
    result
}

/// Case mappings that expand to several characters keep the original char,
/// so case conversion never changes the character count.
fn single_char_case(c: char, mut mapped: impl Iterator<Item = char>) -> char {
    match (mapped.next(), mapped.next()) {
        (Some(single), None) => single,
        _ => c,
    }
}

/// Convert an attribute-style name (lowercase, hyphen separated) into a
/// camel-case property name.
///
/// Names without a hyphen are returned unchanged. Otherwise every hyphen is
/// dropped and the character following it is upper-cased; a trailing hyphen
/// contributes nothing.
///
/// ```
/// use namer_common::attribute_name_to_property_name;
///
/// assert_eq!(attribute_name_to_property_name("transaction-manager"), "transactionManager");
/// assert_eq!(attribute_name_to_property_name("plain"), "plain");
/// ```
pub fn attribute_name_to_property_name(attribute_name: &str) -> String {
    if !attribute_name.contains(ATTRIBUTE_WORD_SEPARATOR) {
        return attribute_name.to_string();
    }
    let mut result = String::with_capacity(attribute_name.len());
    let mut upper_case_next = false;
    for c in attribute_name.chars() {
        if c == ATTRIBUTE_WORD_SEPARATOR {
            upper_case_next = true;
        } else if upper_case_next {
            result.push(single_char_case(c, c.to_uppercase()));
            upper_case_next = false;
        } else {
            result.push(c);
        }
    }
    result
}

/// Qualify an attribute name by its enclosing scope.
///
/// A pure join with `.`; neither side is validated.
pub fn qualified_attribute_name(scope_name: &str, attribute_name: &str) -> String {
    let mut result = String::with_capacity(scope_name.len() + 1 + attribute_name.len());
    result.push_str(scope_name);
    result.push(PACKAGE_SEPARATOR);
    result.push_str(attribute_name);
    result
}

#[cfg(test)]
#[path = "../tests/naming_tests.rs"]
mod tests;
