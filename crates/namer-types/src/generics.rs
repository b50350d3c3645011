//! Possibly-parameterized type references.
//!
//! `GenericType` is how declarations refer to types: a method's return type
//! `List<Product>`, a parameter `Mono<Order>`, or a supertype clause
//! `ArrayList<E> implements List<E>` (where `E` is `Param(0)` of the declaring
//! type). Erased generics are a `Concrete` reference with no arguments.

use crate::types::TypeId;

#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub enum GenericType {
    /// A concrete type with its (possibly empty) type arguments.
    Concrete { raw: TypeId, args: Vec<GenericType> },
    /// Reference to the declaring type's type parameter by index.
    Param(u32),
    /// Wildcard or otherwise unresolvable type.
    Unbound,
}

impl GenericType {
    /// A raw (non-parameterized or erased) reference.
    pub const fn raw(raw: TypeId) -> Self {
        Self::Concrete {
            raw,
            args: Vec::new(),
        }
    }

    /// A parameterized reference `raw<args...>`.
    pub fn of<I, G>(raw: TypeId, args: I) -> Self
    where
        I: IntoIterator<Item = G>,
        G: Into<GenericType>,
    {
        Self::Concrete {
            raw,
            args: args.into_iter().map(Into::into).collect(),
        }
    }

    /// The raw type, when this reference is concrete.
    pub const fn raw_type(&self) -> Option<TypeId> {
        match self {
            Self::Concrete { raw, .. } => Some(*raw),
            _ => None,
        }
    }

    pub fn args(&self) -> &[GenericType] {
        match self {
            Self::Concrete { args, .. } => args,
            _ => &[],
        }
    }

    pub fn arg(&self, index: usize) -> Option<&GenericType> {
        self.args().get(index)
    }

    /// The raw type of the argument at `index`, or `TypeId::OBJECT` when the
    /// argument is missing (erased), a type parameter or a wildcard.
    pub fn arg_type_or_object(&self, index: usize) -> TypeId {
        self.arg(index)
            .and_then(GenericType::raw_type)
            .unwrap_or(TypeId::OBJECT)
    }

    /// Replace type parameter references with the given arguments.
    ///
    /// Parameters without a corresponding argument become `Unbound`.
    pub fn substitute(&self, args: &[GenericType]) -> GenericType {
        match self {
            Self::Concrete { raw, args: inner } => Self::Concrete {
                raw: *raw,
                args: inner.iter().map(|a| a.substitute(args)).collect(),
            },
            Self::Param(index) => args
                .get(*index as usize)
                .cloned()
                .unwrap_or(Self::Unbound),
            Self::Unbound => Self::Unbound,
        }
    }
}

impl From<TypeId> for GenericType {
    fn from(raw: TypeId) -> Self {
        Self::raw(raw)
    }
}

#[cfg(test)]
#[path = "../tests/generics_tests.rs"]
mod tests;
