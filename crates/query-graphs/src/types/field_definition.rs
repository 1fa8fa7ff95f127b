use crate::loc;
use crate::schema::Schema;
use crate::types::CompositeType;
use crate::types::DerefByNameError;
use crate::types::GraphQLType;
use crate::types::NamedTypeRef;
use crate::types::TypeAnnotation;
use crate::types::TYPENAME_FIELD_NAME;

/// A field defined on a [`CompositeType`].
///
/// In a query graph, a [`FieldDefinition`] labels the edge that goes from its
/// parent type's vertex to its base type's vertex (see
/// [`Transition::FieldCollection`](crate::Transition::FieldCollection)).
#[derive(Clone, Debug, PartialEq, serde::Deserialize, serde::Serialize)]
pub struct FieldDefinition {
    pub(crate) def_location: loc::SourceLocation,
    pub(crate) description: Option<String>,
    pub(crate) name: String,
    pub(crate) parent_type_name: String,
    pub(crate) type_annotation: TypeAnnotation,
}
impl FieldDefinition {
    /// The implicit `__typename: String!` field of `parent_type_name`.
    pub(crate) fn typename(parent_type_name: &str) -> Self {
        Self {
            def_location: loc::SourceLocation::GraphQLBuiltIn,
            description: None,
            name: TYPENAME_FIELD_NAME.to_string(),
            parent_type_name: parent_type_name.to_string(),
            type_annotation: TypeAnnotation::Named {
                nullable: false,
                type_ref: NamedTypeRef::new(
                    "String",
                    loc::SourceLocation::GraphQLBuiltIn,
                ),
            },
        }
    }

    /// The named type at the bottom of this field's [`TypeAnnotation`]
    /// (e.g. `Product` for a field of type `[Product!]!`).
    pub fn base_type<'schema>(
        &self,
        schema: &'schema Schema,
    ) -> Result<&'schema GraphQLType, DerefByNameError> {
        self.type_annotation.innermost_type_ref().deref(schema)
    }

    pub fn base_type_name(&self) -> &str {
        self.type_annotation.innermost_type_ref().name()
    }

    pub fn def_location(&self) -> &loc::SourceLocation {
        &self.def_location
    }

    pub fn description(&self) -> Option<&str> {
        self.description.as_deref()
    }

    pub fn is_typename(&self) -> bool {
        self.name == TYPENAME_FIELD_NAME
    }

    pub fn name(&self) -> &str {
        self.name.as_str()
    }

    /// The [`CompositeType`] this field is declared on, looked up in
    /// `schema`.
    pub fn parent_type<'schema>(
        &self,
        schema: &'schema Schema,
    ) -> Option<&'schema CompositeType> {
        schema.composite_type(self.parent_type_name.as_str())
    }

    pub fn parent_type_name(&self) -> &str {
        self.parent_type_name.as_str()
    }

    pub fn type_annotation(&self) -> &TypeAnnotation {
        &self.type_annotation
    }
}
