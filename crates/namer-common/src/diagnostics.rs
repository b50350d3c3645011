//! Diagnostic messages for naming failures.
//!
//! Every failure the inferencer can report is listed here once, with a
//! stable numeric code and a category. Error values carry a reference to the
//! message so callers can match on the code without parsing text.

use serde::Serialize;

/// Diagnostic category.
///
/// `InvalidArgument` covers ordinary bad input; `IllegalState` signals a
/// malformed or inconsistent container.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize)]
pub enum DiagnosticCategory {
    InvalidArgument = 0,
    IllegalState = 1,
}

/// A static diagnostic message.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub struct DiagnosticMessage {
    pub code: u32,
    pub category: DiagnosticCategory,
    pub message: &'static str,
}

pub mod diagnostic_codes {
    pub const VALUE_MUST_NOT_BE_NULL: u32 = 1001;
    pub const EMPTY_COLLECTION: u32 = 1002;
    pub const UNTYPED_COLLECTION_PARAMETER: u32 = 1003;
    pub const UNTYPED_COLLECTION_NON_COLLECTION_VALUE: u32 = 1004;
    pub const UNTYPED_COLLECTION_EMPTY_VALUE: u32 = 1005;
    pub const OBJECT_RETURN_TYPE_WITHOUT_VALUE: u32 = 1006;
    pub const PARAMETER_INDEX_OUT_OF_RANGE: u32 = 1007;
    pub const PEEK_NO_ELEMENT: u32 = 2001;
    pub const PEEK_NULL_ELEMENT: u32 = 2002;
}

pub mod diagnostic_messages {
    use super::{DiagnosticCategory, DiagnosticMessage, diagnostic_codes};

    pub const VALUE_MUST_NOT_BE_NULL: DiagnosticMessage = DiagnosticMessage {
        code: diagnostic_codes::VALUE_MUST_NOT_BE_NULL,
        category: DiagnosticCategory::InvalidArgument,
        message: "Value must not be null",
    };

    pub const EMPTY_COLLECTION: DiagnosticMessage = DiagnosticMessage {
        code: diagnostic_codes::EMPTY_COLLECTION,
        category: DiagnosticCategory::InvalidArgument,
        message: "Cannot generate variable name for an empty collection",
    };

    pub const UNTYPED_COLLECTION_PARAMETER: DiagnosticMessage = DiagnosticMessage {
        code: diagnostic_codes::UNTYPED_COLLECTION_PARAMETER,
        category: DiagnosticCategory::InvalidArgument,
        message: "Cannot generate variable name for non-typed collection parameter type",
    };

    pub const UNTYPED_COLLECTION_NON_COLLECTION_VALUE: DiagnosticMessage = DiagnosticMessage {
        code: diagnostic_codes::UNTYPED_COLLECTION_NON_COLLECTION_VALUE,
        category: DiagnosticCategory::InvalidArgument,
        message: "Cannot generate variable name for non-typed collection return type and a non-collection value",
    };

    pub const UNTYPED_COLLECTION_EMPTY_VALUE: DiagnosticMessage = DiagnosticMessage {
        code: diagnostic_codes::UNTYPED_COLLECTION_EMPTY_VALUE,
        category: DiagnosticCategory::InvalidArgument,
        message: "Cannot generate variable name for non-typed collection return type and an empty collection value",
    };

    pub const OBJECT_RETURN_TYPE_WITHOUT_VALUE: DiagnosticMessage = DiagnosticMessage {
        code: diagnostic_codes::OBJECT_RETURN_TYPE_WITHOUT_VALUE,
        category: DiagnosticCategory::InvalidArgument,
        message: "Cannot generate variable name for an object return type with null value",
    };

    pub const PARAMETER_INDEX_OUT_OF_RANGE: DiagnosticMessage = DiagnosticMessage {
        code: diagnostic_codes::PARAMETER_INDEX_OUT_OF_RANGE,
        category: DiagnosticCategory::InvalidArgument,
        message: "Parameter index is out of range for the declaring method",
    };

    pub const PEEK_NO_ELEMENT: DiagnosticMessage = DiagnosticMessage {
        code: diagnostic_codes::PEEK_NO_ELEMENT,
        category: DiagnosticCategory::IllegalState,
        message: "Unable to peek ahead in non-empty collection - no element found",
    };

    pub const PEEK_NULL_ELEMENT: DiagnosticMessage = DiagnosticMessage {
        code: diagnostic_codes::PEEK_NULL_ELEMENT,
        category: DiagnosticCategory::IllegalState,
        message: "Unable to peek ahead in non-empty collection - only null element found",
    };
}

/// All known diagnostic messages, in code order.
pub const DIAGNOSTIC_MESSAGES: &[DiagnosticMessage] = &[
    diagnostic_messages::VALUE_MUST_NOT_BE_NULL,
    diagnostic_messages::EMPTY_COLLECTION,
    diagnostic_messages::UNTYPED_COLLECTION_PARAMETER,
    diagnostic_messages::UNTYPED_COLLECTION_NON_COLLECTION_VALUE,
    diagnostic_messages::UNTYPED_COLLECTION_EMPTY_VALUE,
    diagnostic_messages::OBJECT_RETURN_TYPE_WITHOUT_VALUE,
    diagnostic_messages::PARAMETER_INDEX_OUT_OF_RANGE,
    diagnostic_messages::PEEK_NO_ELEMENT,
    diagnostic_messages::PEEK_NULL_ELEMENT,
];

/// Look up a message by code.
pub fn get_message(code: u32) -> Option<&'static DiagnosticMessage> {
    DIAGNOSTIC_MESSAGES.iter().find(|m| m.code == code)
}

#[cfg(test)]
#[path = "../tests/diagnostics_tests.rs"]
mod tests;
