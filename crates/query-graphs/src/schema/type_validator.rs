use crate::schema::TypeValidationError;
use crate::types::CompositeType;
use crate::types::FieldDefinition;
use crate::types::GraphQLType;
use crate::types::NamedTypeRef;
use crate::types::UnionType;
use indexmap::IndexMap;
use std::collections::HashSet;

/// Cross-type checks that can only run once every type definition (and
/// extension) has been loaded.
pub(super) struct TypeValidator<'a> {
    errors: Vec<TypeValidationError>,
    types: &'a IndexMap<String, GraphQLType>,
}
impl<'a> TypeValidator<'a> {
    pub fn new(types: &'a IndexMap<String, GraphQLType>) -> Self {
        Self {
            errors: vec![],
            types,
        }
    }

    pub fn validate(mut self) -> Vec<TypeValidationError> {
        for type_ in self.types.values() {
            match type_ {
                GraphQLType::Composite(CompositeType::Interface(iface_type)) => {
                    self.validate_fields(iface_type.fields().values());
                    self.validate_interfaces(iface_type.name(), &iface_type.0.interfaces);
                },

                GraphQLType::Composite(CompositeType::Object(obj_type)) => {
                    self.validate_fields(obj_type.fields().values());
                    self.validate_interfaces(obj_type.name(), &obj_type.0.interfaces);
                },

                GraphQLType::Composite(CompositeType::Union(union_type)) =>
                    self.validate_union_members(union_type),

                GraphQLType::Enum(_)
                | GraphQLType::InputObject(_)
                | GraphQLType::Scalar(_)
                    => (),
            }
        }

        self.errors
    }

    fn validate_fields<'f>(
        &mut self,
        fields: impl Iterator<Item = &'f FieldDefinition>,
    ) {
        for field in fields {
            let type_ref = field.type_annotation().innermost_type_ref();
            match self.types.get(type_ref.name()) {
                None => self.errors.push(TypeValidationError::UndefinedTypeName {
                    ref_location: type_ref.ref_location().to_owned(),
                    undefined_type_name: type_ref.name().to_string(),
                }),

                // Input objects may only appear in argument positions.
                Some(GraphQLType::InputObject(_)) => self.errors.push(
                    TypeValidationError::InvalidFieldOutputType {
                        field_name: field.name().to_string(),
                        location: field.def_location().to_owned(),
                        parent_type_name: field.parent_type_name().to_string(),
                        type_name: type_ref.name().to_string(),
                    }
                ),

                Some(_) => (),
            }
        }
    }

    fn validate_interfaces(
        &mut self,
        type_name: &str,
        interfaces: &[NamedTypeRef],
    ) {
        let mut seen_iface_names = HashSet::new();
        for iface_ref in interfaces {
            if !seen_iface_names.insert(iface_ref.name()) {
                self.errors.push(TypeValidationError::DuplicateImplementedInterface {
                    interface_name: iface_ref.name().to_string(),
                    location: iface_ref.ref_location().to_owned(),
                    type_name: type_name.to_string(),
                });
                continue;
            }

            match self.types.get(iface_ref.name()) {
                None => self.errors.push(TypeValidationError::UndefinedTypeName {
                    ref_location: iface_ref.ref_location().to_owned(),
                    undefined_type_name: iface_ref.name().to_string(),
                }),

                Some(GraphQLType::Composite(CompositeType::Interface(_))) => (),

                Some(_) => self.errors.push(
                    TypeValidationError::InvalidImplementedInterfaceType {
                        interface_name: iface_ref.name().to_string(),
                        location: iface_ref.ref_location().to_owned(),
                        type_name: type_name.to_string(),
                    }
                ),
            }
        }
    }

    fn validate_union_members(&mut self, union_type: &UnionType) {
        // https://spec.graphql.org/October2021/#sel-HAHdfFDABABlG3ib
        let mut seen_member_names = HashSet::new();
        for member_ref in &union_type.members {
            if !seen_member_names.insert(member_ref.name()) {
                self.errors.push(TypeValidationError::DuplicateUnionMember {
                    location: member_ref.ref_location().to_owned(),
                    member_type_name: member_ref.name().to_string(),
                    union_type_name: union_type.name().to_string(),
                });
                continue;
            }

            match self.types.get(member_ref.name()) {
                None => self.errors.push(TypeValidationError::UndefinedTypeName {
                    ref_location: member_ref.ref_location().to_owned(),
                    undefined_type_name: member_ref.name().to_string(),
                }),

                Some(GraphQLType::Composite(CompositeType::Object(_))) => (),

                Some(_) => self.errors.push(
                    TypeValidationError::InvalidUnionMemberTypeKind {
                        location: member_ref.ref_location().to_owned(),
                        member_type_name: member_ref.name().to_string(),
                        union_type_name: union_type.name().to_string(),
                    }
                ),
            }
        }
    }
}
