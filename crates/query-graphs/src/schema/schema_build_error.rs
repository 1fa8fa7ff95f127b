use crate::loc;
use crate::schema::OperationKind;
use crate::schema::TypeValidationError;
use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum SchemaBuildError {
    #[error(
        "Field `{type_name}.{field_name}` is defined twice ({def1} and {def2})."
    )]
    DuplicateFieldDefinition {
        def1: loc::SourceLocation,
        def2: loc::SourceLocation,
        field_name: String,
        type_name: String,
    },

    #[error(
        "The {operation} root operation type is defined twice ({location1} \
        and {location2})."
    )]
    DuplicateOperationDefinition {
        location1: loc::SourceLocation,
        location2: loc::SourceLocation,
        operation: OperationKind,
    },

    #[error("Type `{type_name}` is defined twice ({def1} and {def2}).")]
    DuplicateTypeDefinition {
        def1: loc::SourceLocation,
        def2: loc::SourceLocation,
        type_name: String,
    },

    #[error(
        "Type extension at {ext_location} extends `{type_name}`, which is \
        never defined."
    )]
    ExtensionOfUndefinedType {
        ext_location: loc::SourceLocation,
        type_name: String,
    },

    #[error(
        "Failed to read schema file `{}`: {err}",
        .file_path.display(),
    )]
    FileReadError {
        err: std::io::Error,
        file_path: PathBuf,
    },

    #[error(
        "Type extension at {ext_location} extends `{type_name}` as a \
        {extension_kind} type, but it is not defined as one."
    )]
    InvalidExtensionTypeKind {
        ext_location: loc::SourceLocation,
        extension_kind: &'static str,
        type_name: String,
    },

    #[error(
        "The {operation} root operation type `{type_name}` must be a \
        defined object type."
    )]
    InvalidRootOperationType {
        operation: OperationKind,
        type_name: String,
    },

    #[error(
        "Type `{type_name}` (at {def_location}) starts with `__`, a prefix \
        reserved for GraphQL introspection."
    )]
    InvalidDunderPrefixedTypeName {
        def_location: loc::SourceLocation,
        type_name: String,
    },

    #[error("No `Query` type (or schema-defined query root type) was defined.")]
    NoQueryOperationTypeDefined,

    #[error(
        "Failed to parse GraphQL schema source{}: {err}",
        .file.as_ref()
            .map(|file| format!(" `{}`", file.display()))
            .unwrap_or_default(),
    )]
    ParseError {
        err: String,
        file: Option<PathBuf>,
    },

    #[error(
        "Schema failed validation with {} error(s):\n{}",
        .errors.len(),
        .errors.iter()
            .map(|err| format!("  * {err}"))
            .collect::<Vec<_>>()
            .join("\n"),
    )]
    TypeValidationErrors {
        errors: Vec<TypeValidationError>,
    },
}
