use crate::loc;
use thiserror::Error;

#[derive(Debug, Error, PartialEq)]
pub enum TypeValidationError {
    #[error(
        "`{type_name}` declares that it implements `{interface_name}` more \
        than once (again at {location})."
    )]
    DuplicateImplementedInterface {
        interface_name: String,
        location: loc::SourceLocation,
        type_name: String,
    },

    #[error(
        "Union `{union_type_name}` lists `{member_type_name}` as a member more \
        than once (again at {location})."
    )]
    DuplicateUnionMember {
        location: loc::SourceLocation,
        member_type_name: String,
        union_type_name: String,
    },

    #[error(
        "Field `{parent_type_name}.{field_name}` is declared with type \
        `{type_name}`, which is an input object type and cannot be used as a \
        field's output type."
    )]
    InvalidFieldOutputType {
        field_name: String,
        location: loc::SourceLocation,
        parent_type_name: String,
        type_name: String,
    },

    #[error(
        "`{type_name}` declares that it implements `{interface_name}`, but \
        `{interface_name}` is not an interface type."
    )]
    InvalidImplementedInterfaceType {
        interface_name: String,
        location: loc::SourceLocation,
        type_name: String,
    },

    #[error(
        "Union `{union_type_name}` lists `{member_type_name}` as a member, but \
        only object types may be union members."
    )]
    InvalidUnionMemberTypeKind {
        location: loc::SourceLocation,
        member_type_name: String,
        union_type_name: String,
    },

    #[error("Reference to undefined type `{undefined_type_name}` at {ref_location}.")]
    UndefinedTypeName {
        ref_location: loc::SourceLocation,
        undefined_type_name: String,
    },
}
