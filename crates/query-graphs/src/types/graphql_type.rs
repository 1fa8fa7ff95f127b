use crate::loc;
use crate::types::CompositeType;

/// Any named type defined in a [`Schema`](crate::schema::Schema).
#[derive(Clone, Debug, PartialEq, serde::Deserialize, serde::Serialize)]
pub enum GraphQLType {
    Composite(CompositeType),
    Enum(OpaqueType),
    InputObject(OpaqueType),
    Scalar(OpaqueType),
}
impl GraphQLType {
    pub(crate) fn builtin_scalar(name: &str) -> Self {
        Self::Scalar(OpaqueType {
            def_location: loc::SourceLocation::GraphQLBuiltIn,
            description: None,
            name: name.to_string(),
        })
    }

    pub fn as_composite(&self) -> Option<&CompositeType> {
        if let Self::Composite(type_) = self {
            Some(type_)
        } else {
            None
        }
    }

    pub fn def_location(&self) -> &loc::SourceLocation {
        match self {
            Self::Composite(type_) => type_.def_location(),
            Self::Enum(type_)
            | Self::InputObject(type_)
            | Self::Scalar(type_) => &type_.def_location,
        }
    }

    /// Enums and scalars end a path through a query graph: they have no
    /// fields to select.
    pub fn is_leaf(&self) -> bool {
        matches!(self, Self::Enum(_) | Self::Scalar(_))
    }

    pub fn name(&self) -> &str {
        match self {
            Self::Composite(type_) => type_.name(),
            Self::Enum(type_)
            | Self::InputObject(type_)
            | Self::Scalar(type_) => type_.name.as_str(),
        }
    }
}

/// A type the query graph only needs to know by name: an enum, scalar, or
/// input object type.
#[derive(Clone, Debug, PartialEq, serde::Deserialize, serde::Serialize)]
pub struct OpaqueType {
    pub(crate) def_location: loc::SourceLocation,
    pub(crate) description: Option<String>,
    pub(crate) name: String,
}
impl OpaqueType {
    pub fn def_location(&self) -> &loc::SourceLocation {
        &self.def_location
    }

    pub fn description(&self) -> Option<&str> {
        self.description.as_deref()
    }

    pub fn name(&self) -> &str {
        self.name.as_str()
    }
}
