use crate::loc;
use crate::types::NamedTypeRef;
use graphql_parser::schema as ast;

/// The declared type of a [`FieldDefinition`](crate::types::FieldDefinition),
/// including list wrappers and nullability.
#[derive(Clone, Debug, PartialEq, serde::Deserialize, serde::Serialize)]
pub enum TypeAnnotation {
    List {
        inner: Box<TypeAnnotation>,
        nullable: bool,
    },
    Named {
        nullable: bool,
        type_ref: NamedTypeRef,
    },
}
impl TypeAnnotation {
    pub(crate) fn from_ast_type(
        location: &loc::SourceLocation,
        ast_type: &ast::Type<'_, String>,
    ) -> Self {
        Self::from_ast_type_impl(location, ast_type, /* nullable = */ true)
    }

    fn from_ast_type_impl(
        location: &loc::SourceLocation,
        ast_type: &ast::Type<'_, String>,
        nullable: bool,
    ) -> Self {
        match ast_type {
            ast::Type::ListType(inner) => Self::List {
                inner: Box::new(Self::from_ast_type_impl(location, inner, true)),
                nullable,
            },

            ast::Type::NamedType(name) => Self::Named {
                nullable,
                type_ref: NamedTypeRef::new(name, location.to_owned()),
            },

            ast::Type::NonNullType(inner) =>
                Self::from_ast_type_impl(location, inner, false),
        }
    }

    /// Recursively unwrap list wrappers and return the reference to the
    /// named type at the bottom. For a field, this names its "base type".
    pub fn innermost_type_ref(&self) -> &NamedTypeRef {
        match self {
            Self::List { inner, .. } => inner.innermost_type_ref(),
            Self::Named { type_ref, .. } => type_ref,
        }
    }

    pub fn is_list(&self) -> bool {
        matches!(self, Self::List { .. })
    }

    /// Indicates if this annotation is
    /// [nullable or non-nullable](https://spec.graphql.org/October2021/#sec-Non-Null)
    /// at its outermost level.
    pub fn nullable(&self) -> bool {
        match self {
            Self::List { nullable, .. } => *nullable,
            Self::Named { nullable, .. } => *nullable,
        }
    }
}
impl std::fmt::Display for TypeAnnotation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::List { inner, nullable } => write!(
                f,
                "[{inner}]{}",
                if *nullable { "" } else { "!" },
            ),

            Self::Named { nullable, type_ref } => write!(
                f,
                "{}{}",
                type_ref.name(),
                if *nullable { "" } else { "!" },
            ),
        }
    }
}
