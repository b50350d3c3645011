//! Error types for name inference and registry configuration.

use namer_common::diagnostics::{DiagnosticCategory, DiagnosticMessage};
use std::fmt;
use thiserror::Error;

/// Which derivation was running when a failure occurred.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum DerivationPath {
    /// Runtime-only inference from a value.
    Value,
    /// Static inference from a declared parameter type.
    Parameter,
    /// Static inference from a method return type.
    ReturnType,
    /// Direct element peek on a container.
    ElementPeek,
}

impl fmt::Display for DerivationPath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Value => "value",
            Self::Parameter => "parameter",
            Self::ReturnType => "return type",
            Self::ElementPeek => "element peek",
        })
    }
}

/// A failed derivation. There is no partial result.
///
/// `subject` names the input that was being inspected: a runtime type name,
/// `method#index` for parameters, or the method name for return types.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum NamingError {
    #[error("invalid argument in {path} derivation of `{subject}`: {}", .message.message)]
    InvalidArgument {
        path: DerivationPath,
        subject: String,
        message: DiagnosticMessage,
    },

    #[error("illegal state in {path} derivation of `{subject}`: {}", .message.message)]
    IllegalState {
        path: DerivationPath,
        subject: String,
        message: DiagnosticMessage,
    },
}

impl NamingError {
    /// Build an error whose variant follows the message category.
    pub fn new(path: DerivationPath, subject: impl Into<String>, message: DiagnosticMessage) -> Self {
        let subject = subject.into();
        match message.category {
            DiagnosticCategory::InvalidArgument => Self::InvalidArgument {
                path,
                subject,
                message,
            },
            DiagnosticCategory::IllegalState => Self::IllegalState {
                path,
                subject,
                message,
            },
        }
    }

    pub const fn path(&self) -> DerivationPath {
        match self {
            Self::InvalidArgument { path, .. } | Self::IllegalState { path, .. } => *path,
        }
    }

    pub fn subject(&self) -> &str {
        match self {
            Self::InvalidArgument { subject, .. } | Self::IllegalState { subject, .. } => subject,
        }
    }

    pub const fn message(&self) -> &DiagnosticMessage {
        match self {
            Self::InvalidArgument { message, .. } | Self::IllegalState { message, .. } => message,
        }
    }

    pub const fn code(&self) -> u32 {
        self.message().code
    }

    pub const fn is_invalid_argument(&self) -> bool {
        matches!(self, Self::InvalidArgument { .. })
    }

    pub const fn is_illegal_state(&self) -> bool {
        matches!(self, Self::IllegalState { .. })
    }

    /// Re-attribute the error to the derivation that triggered it.
    pub(crate) fn within(self, path: DerivationPath, subject: &str) -> Self {
        Self::new(path, subject, *self.message())
    }
}

/// Errors building a `ReactiveAdapterRegistry` from configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to parse adapter registry config: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("unknown wrapper type `{0}` in adapter registry config")]
    UnknownType(String),
}

#[cfg(test)]
#[path = "../tests/error_tests.rs"]
mod tests;
