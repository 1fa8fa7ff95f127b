mod composite_type;
mod field_definition;
mod graphql_type;
mod interface_type;
mod named_type_ref;
mod object_or_interface_type_data;
mod object_or_interface_type_trait;
mod object_type;
mod type_annotation;
mod union_type;

pub use composite_type::CompositeType;
pub use composite_type::CompositeTypeKind;
pub use field_definition::FieldDefinition;
pub use graphql_type::GraphQLType;
pub use graphql_type::OpaqueType;
pub use interface_type::InterfaceType;
pub use named_type_ref::DerefByNameError;
pub use named_type_ref::NamedTypeRef;
pub(crate) use object_or_interface_type_data::ObjectOrInterfaceTypeData;
use object_or_interface_type_trait::ObjectOrInterfaceTypeTrait;
pub use object_type::ObjectType;
pub use type_annotation::TypeAnnotation;
pub use union_type::UnionType;

/// Name of the meta-field every composite type implicitly exposes.
pub const TYPENAME_FIELD_NAME: &str = "__typename";

#[cfg(test)]
mod tests;
