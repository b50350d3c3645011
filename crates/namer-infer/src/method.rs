//! Method and parameter descriptors.
//!
//! A descriptor carries only what the inferencer needs from a callable
//! declaration: its name, declaring type, and the declared (possibly
//! parameterized) parameter and return types.

use crate::error::{DerivationPath, NamingError};
use namer_common::diagnostics::diagnostic_messages;
use namer_types::{GenericType, TypeId};

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum MethodKind {
    Method,
    Constructor,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct MethodDescriptor {
    pub name: String,
    pub kind: MethodKind,
    pub declaring: TypeId,
    pub parameters: Vec<GenericType>,
    pub return_type: GenericType,
}

impl MethodDescriptor {
    /// A method returning the top-level object type until told otherwise.
    pub fn method(declaring: TypeId, name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            kind: MethodKind::Method,
            declaring,
            parameters: Vec::new(),
            return_type: GenericType::raw(TypeId::OBJECT),
        }
    }

    /// A constructor; its return type is the declaring type.
    pub fn constructor(declaring: TypeId) -> Self {
        Self {
            name: "<init>".to_string(),
            kind: MethodKind::Constructor,
            declaring,
            parameters: Vec::new(),
            return_type: GenericType::raw(declaring),
        }
    }

    pub fn with_parameters<I, G>(mut self, parameters: I) -> Self
    where
        I: IntoIterator<Item = G>,
        G: Into<GenericType>,
    {
        self.parameters = parameters.into_iter().map(Into::into).collect();
        self
    }

    pub fn returning(mut self, return_type: impl Into<GenericType>) -> Self {
        self.return_type = return_type.into();
        self
    }

    /// Raw declared return type; `TypeId::OBJECT` for type variables and
    /// wildcards.
    pub fn declared_return_type(&self) -> TypeId {
        self.return_type.raw_type().unwrap_or(TypeId::OBJECT)
    }

    pub fn parameter(&self, index: usize) -> Result<MethodParameter<'_>, NamingError> {
        MethodParameter::new(self, index)
    }
}

/// One parameter of a method or constructor.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct MethodParameter<'a> {
    method: &'a MethodDescriptor,
    index: usize,
}

impl<'a> MethodParameter<'a> {
    pub fn new(method: &'a MethodDescriptor, index: usize) -> Result<Self, NamingError> {
        if index >= method.parameters.len() {
            return Err(NamingError::new(
                DerivationPath::Parameter,
                format!("{}#{index}", method.name),
                diagnostic_messages::PARAMETER_INDEX_OUT_OF_RANGE,
            ));
        }
        Ok(Self { method, index })
    }

    pub const fn method(&self) -> &'a MethodDescriptor {
        self.method
    }

    pub const fn index(&self) -> usize {
        self.index
    }

    /// The declared, possibly parameterized, type.
    pub fn declared_type(&self) -> &'a GenericType {
        &self.method.parameters[self.index]
    }

    /// Raw parameter type; `TypeId::OBJECT` for type variables and wildcards.
    pub fn parameter_type(&self) -> TypeId {
        self.declared_type().raw_type().unwrap_or(TypeId::OBJECT)
    }

    /// `method#index`, used to identify the parameter in errors and logs.
    pub fn describe(&self) -> String {
        format!("{}#{}", self.method.name, self.index)
    }
}
