use crate::loc;
use crate::types::FieldDefinition;
use crate::types::InterfaceType;
use crate::types::ObjectType;
use crate::types::UnionType;
use indexmap::IndexMap;

/// A type that has fields to select: an object, interface, or union type.
///
/// These are the types that become vertices with outgoing edges in a query
/// graph.
#[derive(Clone, Debug, PartialEq, serde::Deserialize, serde::Serialize)]
pub enum CompositeType {
    Interface(InterfaceType),
    Object(ObjectType),
    Union(UnionType),
}
impl CompositeType {
    pub fn as_interface(&self) -> Option<&InterfaceType> {
        if let Self::Interface(type_) = self {
            Some(type_)
        } else {
            None
        }
    }

    pub fn as_object(&self) -> Option<&ObjectType> {
        if let Self::Object(type_) = self {
            Some(type_)
        } else {
            None
        }
    }

    pub fn as_union(&self) -> Option<&UnionType> {
        if let Self::Union(type_) = self {
            Some(type_)
        } else {
            None
        }
    }

    pub fn def_location(&self) -> &loc::SourceLocation {
        match self {
            Self::Interface(type_) => type_.def_location(),
            Self::Object(type_) => type_.def_location(),
            Self::Union(type_) => type_.def_location(),
        }
    }

    pub fn field(&self, name: &str) -> Option<&FieldDefinition> {
        self.fields().get(name)
    }

    pub fn fields(&self) -> &IndexMap<String, FieldDefinition> {
        match self {
            Self::Interface(type_) => type_.fields(),
            Self::Object(type_) => type_.fields(),
            Self::Union(type_) => type_.fields(),
        }
    }

    /// Interfaces and unions are abstract: a value of such a type is always,
    /// at runtime, a value of one of its possible object types.
    pub fn is_abstract(&self) -> bool {
        !matches!(self, Self::Object(_))
    }

    pub fn kind(&self) -> CompositeTypeKind {
        self.into()
    }

    pub fn name(&self) -> &str {
        match self {
            Self::Interface(type_) => type_.name(),
            Self::Object(type_) => type_.name(),
            Self::Union(type_) => type_.name(),
        }
    }
}

/// Similar to [`CompositeType`] except without the corresponding type data.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub enum CompositeTypeKind {
    Interface,
    Object,
    Union,
}
impl CompositeTypeKind {
    pub fn name(&self) -> &'static str {
        match self {
            Self::Interface => "Interface",
            Self::Object => "Object",
            Self::Union => "Union",
        }
    }
}
impl std::convert::From<&CompositeType> for CompositeTypeKind {
    fn from(value: &CompositeType) -> Self {
        match value {
            CompositeType::Interface(_) => Self::Interface,
            CompositeType::Object(_) => Self::Object,
            CompositeType::Union(_) => Self::Union,
        }
    }
}
