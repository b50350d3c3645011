//! Type descriptors.
//!
//! A `TypeInfo` describes one runtime or declared type: its fully qualified
//! name, its kind, classification flags, its supertypes (as possibly
//! parameterized `GenericType` references) and its declaring type when it
//! is nested.

use crate::generics::GenericType;
use bitflags::bitflags;
use smallvec::SmallVec;

// =============================================================================
// TypeId
// =============================================================================

/// Interned handle to a `TypeInfo` inside a `TypeStore`.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct TypeId(pub u32);

impl TypeId {
    /// Sentinel value for an unknown type.
    pub const NONE: Self = Self(0);

    /// The top-level "any object" type. Every `TypeStore` registers it first.
    pub const OBJECT: Self = Self(1);

    /// First id handed out for user-registered types.
    pub const FIRST_USER: u32 = 2;

    pub const fn is_valid(self) -> bool {
        self.0 != Self::NONE.0
    }
}

impl std::fmt::Display for TypeId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "#{}", self.0)
    }
}

// =============================================================================
// TypeFlags / TypeKind
// =============================================================================

bitflags! {
    /// Classification flags attached to a type descriptor.
    #[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
    pub struct TypeFlags: u8 {
        /// Root of the collection hierarchy. Any type with this type among
        /// its supertypes is collection-like; its first type parameter is the
        /// element type.
        const COLLECTION = 1 << 0;
        /// Language-intrinsic marker interface (serialization, cloning, ...).
        /// Never chosen as the primary interface of a dynamic proxy.
        const LANGUAGE_INTERFACE = 1 << 1;
        /// Runtime-generated dynamic proxy class.
        const DYNAMIC_PROXY = 1 << 2;
    }
}

/// Kind of type.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum TypeKind {
    Class,
    Interface,
    /// Array type with its component type.
    Array { component: TypeId },
}

// =============================================================================
// TypeInfo
// =============================================================================

/// Complete description of a type.
#[derive(Clone, Debug, PartialEq)]
pub struct TypeInfo {
    /// Fully qualified name, `.` between packages and `$` before nested or
    /// generated type names (`com.myapp.Outer$Inner`).
    pub name: String,

    pub kind: TypeKind,

    pub flags: TypeFlags,

    /// Number of declared type parameters.
    pub type_params: u32,

    /// Superclass reference, possibly parameterized in terms of this type's
    /// own type parameters (`GenericType::Param`).
    pub superclass: Option<GenericType>,

    /// Implemented (for classes) or extended (for interfaces) interfaces,
    /// in declaration order.
    pub interfaces: SmallVec<[GenericType; 2]>,

    /// Enclosing type for nested types.
    pub declaring: Option<TypeId>,
}

impl TypeInfo {
    fn new(name: impl Into<String>, kind: TypeKind) -> Self {
        Self {
            name: name.into(),
            kind,
            flags: TypeFlags::empty(),
            type_params: 0,
            superclass: None,
            interfaces: SmallVec::new(),
            declaring: None,
        }
    }

    /// A class extending the top-level object type.
    pub fn class(name: impl Into<String>) -> Self {
        Self::new(name, TypeKind::Class).with_superclass(TypeId::OBJECT)
    }

    pub fn interface(name: impl Into<String>) -> Self {
        Self::new(name, TypeKind::Interface)
    }

    /// An array type. The name is derived from the component name.
    pub fn array(component: TypeId, component_name: &str) -> Self {
        let mut info = Self::new(
            format!("{component_name}{}", namer_common::conventions::ARRAY_SUFFIX),
            TypeKind::Array { component },
        );
        info.superclass = Some(GenericType::raw(TypeId::OBJECT));
        info
    }

    /// The top-level object type itself: a class without superclass.
    pub(crate) fn object(name: impl Into<String>) -> Self {
        Self::new(name, TypeKind::Class)
    }

    pub fn with_superclass(mut self, superclass: impl Into<GenericType>) -> Self {
        self.superclass = Some(superclass.into());
        self
    }

    pub fn without_superclass(mut self) -> Self {
        self.superclass = None;
        self
    }

    pub fn with_interfaces<I, G>(mut self, interfaces: I) -> Self
    where
        I: IntoIterator<Item = G>,
        G: Into<GenericType>,
    {
        self.interfaces = interfaces.into_iter().map(Into::into).collect();
        self
    }

    pub const fn with_type_params(mut self, count: u32) -> Self {
        self.type_params = count;
        self
    }

    pub fn with_flags(mut self, flags: TypeFlags) -> Self {
        self.flags |= flags;
        self
    }

    /// Mark this type as nested inside `declaring`.
    pub const fn nested_in(mut self, declaring: TypeId) -> Self {
        self.declaring = Some(declaring);
        self
    }

    pub const fn is_array(&self) -> bool {
        matches!(self.kind, TypeKind::Array { .. })
    }

    pub const fn component_type(&self) -> Option<TypeId> {
        match self.kind {
            TypeKind::Array { component } => Some(component),
            _ => None,
        }
    }

    /// Simple name: the part of the qualified name after the last package
    /// separator (`Outer$Inner` for `com.myapp.Outer$Inner`).
    pub fn simple_name(&self) -> &str {
        let name = self.name.as_str();
        match name.rfind(namer_common::PACKAGE_SEPARATOR) {
            Some(idx) => &name[idx + 1..],
            None => name,
        }
    }

    /// Supertype references: superclass first, then interfaces.
    pub fn supertypes(&self) -> impl Iterator<Item = &GenericType> {
        self.superclass.iter().chain(self.interfaces.iter())
    }
}
