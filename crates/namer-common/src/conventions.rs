//! Shared naming conventions (well-known separators and suffixes).

/// Suffix appended to a derived name when the source is multi-valued
/// (arrays and collections).
pub const PLURAL_SUFFIX: &str = "List";

/// Separator between package segments in a fully qualified type name.
pub const PACKAGE_SEPARATOR: char = '.';

/// Separator used in runtime type names for nested and generated types.
///
/// A nested type `Outer$Inner` has a declaring type; a generated subclass
/// such as `Product$$Enhanced` does not.
pub const NESTED_CLASS_SEPARATOR: char = '$';

/// Word separator in attribute-style names (`transaction-manager`).
pub const ATTRIBUTE_WORD_SEPARATOR: char = '-';

/// Suffix used when rendering the short name of an array type.
pub const ARRAY_SUFFIX: &str = "[]";
