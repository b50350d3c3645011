//! Common types and utilities for the namer workspace.
//!
//! This crate provides the string-level building blocks shared by the type
//! model and the inferencer:
//! - Naming constants (`conventions`)
//! - String conventions: decapitalization, pluralization, attribute/property
//!   name conversion, qualified attribute names (`naming`)
//! - Diagnostic message table used by every error path (`diagnostics`)

// Well-known separators and suffixes
pub mod conventions;
pub use conventions::{
    ATTRIBUTE_WORD_SEPARATOR, NESTED_CLASS_SEPARATOR, PACKAGE_SEPARATOR, PLURAL_SUFFIX,
};

// String conventions
pub mod naming;
pub use naming::{
    attribute_name_to_property_name, decapitalize, pluralize, qualified_attribute_name,
};

// Diagnostic messages and categories
pub mod diagnostics;
pub use diagnostics::{DiagnosticCategory, DiagnosticMessage};
