mod operation_kind;
#[allow(clippy::module_inception)]
mod schema;
mod schema_build_error;
mod schema_builder;
mod type_validation_error;
mod type_validator;

pub use operation_kind::OperationKind;
pub use schema::Schema;
pub use schema_build_error::SchemaBuildError;
pub use schema_builder::SchemaBuilder;
pub use type_validation_error::TypeValidationError;

#[cfg(test)]
mod tests;
