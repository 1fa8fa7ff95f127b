use crate::loc;
use crate::schema::OperationKind;
use crate::schema::Schema;
use crate::schema::SchemaBuildError;
use crate::schema::type_validator::TypeValidator;
use crate::types::CompositeType;
use crate::types::FieldDefinition;
use crate::types::GraphQLType;
use crate::types::InterfaceType;
use crate::types::NamedTypeRef;
use crate::types::ObjectOrInterfaceTypeData;
use crate::types::ObjectType;
use crate::types::OpaqueType;
use crate::types::TypeAnnotation;
use crate::types::UnionType;
use graphql_parser::schema as ast;
use indexmap::IndexMap;
use std::path::Path;
use std::path::PathBuf;

type Result<T> = std::result::Result<T, SchemaBuildError>;

const BUILTIN_SCALAR_NAMES: [&str; 5] = ["Boolean", "Float", "ID", "Int", "String"];

#[derive(Clone, Debug)]
struct NamedTypeDefLocation {
    def_location: loc::SourceLocation,
    type_name: String,
}

/// A type extension waiting for [`SchemaBuilder::build()`]. Extensions are
/// applied only after every source is loaded since the type they extend may
/// be defined in a source loaded later.
#[derive(Debug)]
struct PendingExtension {
    extension: ast::TypeExtension<'static, String>,
    file_path: Option<PathBuf>,
}

/// Utility for building a [`Schema`] from GraphQL SDL sources.
///
/// ```
/// use query_graphs::SchemaBuilder;
///
/// let schema = SchemaBuilder::new()
///     .load_str(None, "type Query { me: User } type User { id: ID! }")?
///     .build()?;
///
/// assert_eq!(schema.field("User", "id").unwrap().base_type_name(), "ID");
/// # Ok::<(), query_graphs::SchemaBuildError>(())
/// ```
#[derive(Debug)]
pub struct SchemaBuilder {
    mutation_type: Option<NamedTypeDefLocation>,
    pending_extensions: Vec<PendingExtension>,
    query_type: Option<NamedTypeDefLocation>,
    subscription_type: Option<NamedTypeDefLocation>,
    types: IndexMap<String, GraphQLType>,
}
impl SchemaBuilder {
    pub fn build(mut self) -> Result<Schema> {
        for pending in std::mem::take(&mut self.pending_extensions) {
            self.apply_extension(pending)?;
        }

        let errors = TypeValidator::new(&self.types).validate();
        if !errors.is_empty() {
            return Err(SchemaBuildError::TypeValidationErrors { errors });
        }

        let query_type = self.resolve_root_type(
            OperationKind::Query,
            self.query_type.clone(),
        )?.ok_or(SchemaBuildError::NoQueryOperationTypeDefined)?;
        let mutation_type = self.resolve_root_type(
            OperationKind::Mutation,
            self.mutation_type.clone(),
        )?;
        let subscription_type = self.resolve_root_type(
            OperationKind::Subscription,
            self.subscription_type.clone(),
        )?;

        log::debug!(
            "Built schema with {} types (query root: `{}`).",
            self.types.len(),
            query_type.name(),
        );

        Ok(Schema {
            mutation_type,
            query_type,
            subscription_type,
            types: self.types,
        })
    }

    pub fn from_files(file_paths: &[impl AsRef<Path>]) -> Result<Self> {
        Self::new().load_files(file_paths)
    }

    pub fn load_file(self, file_path: impl AsRef<Path>) -> Result<Self> {
        let file_path = file_path.as_ref();
        log::debug!("Loading schema file {file_path:?}.");
        let content = std::fs::read_to_string(file_path)
            .map_err(|err| SchemaBuildError::FileReadError {
                err,
                file_path: file_path.to_path_buf(),
            })?;
        self.load_str(Some(file_path.to_path_buf()), content.as_str())
    }

    pub fn load_files(mut self, file_paths: &[impl AsRef<Path>]) -> Result<Self> {
        for file_path in file_paths {
            self = self.load_file(file_path)?;
        }
        Ok(self)
    }

    /// Parse `content` as GraphQL SDL and add its definitions to the schema
    /// being built. `file_path` is only used for source locations.
    pub fn load_str(
        mut self,
        file_path: Option<PathBuf>,
        content: &str,
    ) -> Result<Self> {
        let ast_doc =
            ast::parse_schema::<String>(content)
                .map_err(|err| SchemaBuildError::ParseError {
                    err: err.to_string(),
                    file: file_path.to_owned(),
                })?.into_static();

        for def in ast_doc.definitions {
            self.visit_ast_def(file_path.as_deref(), def)?;
        }

        Ok(self)
    }

    pub fn new() -> Self {
        Self {
            mutation_type: None,
            pending_extensions: vec![],
            query_type: None,
            subscription_type: None,
            types: BUILTIN_SCALAR_NAMES
                .iter()
                .map(|name| (name.to_string(), GraphQLType::builtin_scalar(name)))
                .collect(),
        }
    }

    fn add_type(
        &mut self,
        type_name: &str,
        def_location: &loc::SourceLocation,
        type_: GraphQLType,
    ) -> Result<()> {
        if type_name.starts_with("__") {
            return Err(SchemaBuildError::InvalidDunderPrefixedTypeName {
                def_location: def_location.to_owned(),
                type_name: type_name.to_string(),
            });
        }

        if let Some(conflicting_type) = self.types.get(type_name) {
            return Err(SchemaBuildError::DuplicateTypeDefinition {
                def1: conflicting_type.def_location().to_owned(),
                def2: def_location.to_owned(),
                type_name: type_name.to_string(),
            });
        }

        log::trace!("Defined type `{type_name}` at {def_location}.");
        self.types.insert(type_name.to_string(), type_);
        Ok(())
    }

    fn apply_extension(&mut self, pending: PendingExtension) -> Result<()> {
        let file_path = pending.file_path.as_deref();
        match pending.extension {
            ast::TypeExtension::Interface(ext) => {
                let ext_location = source_location(file_path, ext.position);
                match self.types.get_mut(&ext.name) {
                    Some(GraphQLType::Composite(CompositeType::Interface(iface_type))) => {
                        extend_fields(&mut iface_type.0.fields, &ext.name, file_path, ext.fields)?;
                        iface_type.0.interfaces.extend(
                            interface_refs(&ext_location, ext.implements_interfaces),
                        );
                        Ok(())
                    },
                    Some(_) => Err(SchemaBuildError::InvalidExtensionTypeKind {
                        ext_location,
                        extension_kind: "interface",
                        type_name: ext.name,
                    }),
                    None => Err(SchemaBuildError::ExtensionOfUndefinedType {
                        ext_location,
                        type_name: ext.name,
                    }),
                }
            },

            ast::TypeExtension::Object(ext) => {
                let ext_location = source_location(file_path, ext.position);
                match self.types.get_mut(&ext.name) {
                    Some(GraphQLType::Composite(CompositeType::Object(obj_type))) => {
                        extend_fields(&mut obj_type.0.fields, &ext.name, file_path, ext.fields)?;
                        obj_type.0.interfaces.extend(
                            interface_refs(&ext_location, ext.implements_interfaces),
                        );
                        Ok(())
                    },
                    Some(_) => Err(SchemaBuildError::InvalidExtensionTypeKind {
                        ext_location,
                        extension_kind: "object",
                        type_name: ext.name,
                    }),
                    None => Err(SchemaBuildError::ExtensionOfUndefinedType {
                        ext_location,
                        type_name: ext.name,
                    }),
                }
            },

            ast::TypeExtension::Union(ext) => {
                let ext_location = source_location(file_path, ext.position);
                match self.types.get_mut(&ext.name) {
                    Some(GraphQLType::Composite(CompositeType::Union(union_type))) => {
                        for member_name in ext.types {
                            union_type.members.push(
                                NamedTypeRef::new(member_name, ext_location.to_owned()),
                            );
                        }
                        Ok(())
                    },
                    Some(_) => Err(SchemaBuildError::InvalidExtensionTypeKind {
                        ext_location,
                        extension_kind: "union",
                        type_name: ext.name,
                    }),
                    None => Err(SchemaBuildError::ExtensionOfUndefinedType {
                        ext_location,
                        type_name: ext.name,
                    }),
                }
            },

            // Enum values, input fields and scalar directives never become
            // query graph edges, so only the target type is checked.
            ast::TypeExtension::Enum(ext) => self.check_opaque_extension(
                source_location(file_path, ext.position),
                "enum",
                ext.name,
                |type_| matches!(type_, GraphQLType::Enum(_)),
            ),

            ast::TypeExtension::InputObject(ext) => self.check_opaque_extension(
                source_location(file_path, ext.position),
                "input object",
                ext.name,
                |type_| matches!(type_, GraphQLType::InputObject(_)),
            ),

            ast::TypeExtension::Scalar(ext) => self.check_opaque_extension(
                source_location(file_path, ext.position),
                "scalar",
                ext.name,
                |type_| matches!(type_, GraphQLType::Scalar(_)),
            ),
        }
    }

    fn check_opaque_extension(
        &self,
        ext_location: loc::SourceLocation,
        extension_kind: &'static str,
        type_name: String,
        is_expected_kind: impl Fn(&GraphQLType) -> bool,
    ) -> Result<()> {
        match self.types.get(type_name.as_str()) {
            Some(type_) if is_expected_kind(type_) => Ok(()),
            Some(_) => Err(SchemaBuildError::InvalidExtensionTypeKind {
                ext_location,
                extension_kind,
                type_name,
            }),
            None => Err(SchemaBuildError::ExtensionOfUndefinedType {
                ext_location,
                type_name,
            }),
        }
    }

    /// Pick the root type for `operation`: the one named in a `schema { .. }`
    /// block if there was one, otherwise the object type with the
    /// conventional name (`Query`, `Mutation`, `Subscription`), if any.
    fn resolve_root_type(
        &self,
        operation: OperationKind,
        explicit_def: Option<NamedTypeDefLocation>,
    ) -> Result<Option<NamedTypeRef>> {
        if let Some(def) = explicit_def {
            return match self.types.get(def.type_name.as_str()) {
                Some(GraphQLType::Composite(CompositeType::Object(_))) =>
                    Ok(Some(NamedTypeRef::new(def.type_name, def.def_location))),
                _ => Err(SchemaBuildError::InvalidRootOperationType {
                    operation,
                    type_name: def.type_name,
                }),
            };
        }

        let conventional_name = match operation {
            OperationKind::Mutation => "Mutation",
            OperationKind::Query => "Query",
            OperationKind::Subscription => "Subscription",
        };
        Ok(match self.types.get(conventional_name) {
            Some(GraphQLType::Composite(CompositeType::Object(obj_type))) =>
                Some(NamedTypeRef::new(
                    conventional_name,
                    obj_type.def_location().to_owned(),
                )),
            _ => None,
        })
    }

    fn visit_ast_def(
        &mut self,
        file_path: Option<&Path>,
        def: ast::Definition<'static, String>,
    ) -> Result<()> {
        match def {
            ast::Definition::DirectiveDefinition(directive_def) => {
                log::trace!(
                    "Ignoring definition of directive `@{}`.",
                    directive_def.name,
                );
                Ok(())
            },

            ast::Definition::SchemaDefinition(schema_def) =>
                self.visit_ast_schemablock_def(file_path, schema_def),

            ast::Definition::TypeDefinition(type_def) =>
                self.visit_ast_type_def(file_path, type_def),

            ast::Definition::TypeExtension(extension) => {
                self.pending_extensions.push(PendingExtension {
                    extension,
                    file_path: file_path.map(Path::to_path_buf),
                });
                Ok(())
            },
        }
    }

    fn visit_ast_schemablock_def(
        &mut self,
        file_path: Option<&Path>,
        schema_def: ast::SchemaDefinition<'static, String>,
    ) -> Result<()> {
        let def_location = source_location(file_path, schema_def.position);
        let root_defs = [
            (OperationKind::Query, schema_def.query),
            (OperationKind::Mutation, schema_def.mutation),
            (OperationKind::Subscription, schema_def.subscription),
        ];

        for (operation, type_name) in root_defs {
            let Some(type_name) = type_name else {
                continue;
            };

            let root_def = match operation {
                OperationKind::Mutation => &mut self.mutation_type,
                OperationKind::Query => &mut self.query_type,
                OperationKind::Subscription => &mut self.subscription_type,
            };
            if let Some(existing_def) = root_def {
                return Err(SchemaBuildError::DuplicateOperationDefinition {
                    location1: existing_def.def_location.to_owned(),
                    location2: def_location.to_owned(),
                    operation,
                });
            }
            *root_def = Some(NamedTypeDefLocation {
                def_location: def_location.to_owned(),
                type_name,
            });
        }

        Ok(())
    }

    fn visit_ast_type_def(
        &mut self,
        file_path: Option<&Path>,
        type_def: ast::TypeDefinition<'static, String>,
    ) -> Result<()> {
        match type_def {
            ast::TypeDefinition::Enum(def) => {
                let def_location = source_location(file_path, def.position);
                self.add_type(&def.name, &def_location, GraphQLType::Enum(OpaqueType {
                    def_location: def_location.to_owned(),
                    description: def.description,
                    name: def.name.to_string(),
                }))
            },

            ast::TypeDefinition::InputObject(def) => {
                let def_location = source_location(file_path, def.position);
                self.add_type(&def.name, &def_location, GraphQLType::InputObject(OpaqueType {
                    def_location: def_location.to_owned(),
                    description: def.description,
                    name: def.name.to_string(),
                }))
            },

            ast::TypeDefinition::Interface(def) => {
                let def_location = source_location(file_path, def.position);
                let mut data = ObjectOrInterfaceTypeData::new(
                    &def.name,
                    def_location.to_owned(),
                    def.description,
                );
                extend_fields(&mut data.fields, &def.name, file_path, def.fields)?;
                data.interfaces = interface_refs(&def_location, def.implements_interfaces);
                self.add_type(
                    &def.name,
                    &def_location,
                    GraphQLType::Composite(CompositeType::Interface(InterfaceType(data))),
                )
            },

            ast::TypeDefinition::Object(def) => {
                let def_location = source_location(file_path, def.position);
                let mut data = ObjectOrInterfaceTypeData::new(
                    &def.name,
                    def_location.to_owned(),
                    def.description,
                );
                extend_fields(&mut data.fields, &def.name, file_path, def.fields)?;
                data.interfaces = interface_refs(&def_location, def.implements_interfaces);
                self.add_type(
                    &def.name,
                    &def_location,
                    GraphQLType::Composite(CompositeType::Object(ObjectType(data))),
                )
            },

            ast::TypeDefinition::Scalar(def) => {
                let def_location = source_location(file_path, def.position);
                self.add_type(&def.name, &def_location, GraphQLType::Scalar(OpaqueType {
                    def_location: def_location.to_owned(),
                    description: def.description,
                    name: def.name.to_string(),
                }))
            },

            ast::TypeDefinition::Union(def) => {
                let def_location = source_location(file_path, def.position);
                let mut union_type = UnionType::new(
                    &def.name,
                    def_location.to_owned(),
                    def.description,
                );
                for member_name in def.types {
                    union_type.members.push(
                        NamedTypeRef::new(member_name, def_location.to_owned()),
                    );
                }
                self.add_type(
                    &def.name,
                    &def_location,
                    GraphQLType::Composite(CompositeType::Union(union_type)),
                )
            },
        }
    }
}
impl std::default::Default for SchemaBuilder {
    fn default() -> Self {
        Self::new()
    }
}

fn extend_fields(
    fields: &mut IndexMap<String, FieldDefinition>,
    parent_type_name: &str,
    file_path: Option<&Path>,
    ast_fields: Vec<ast::Field<'static, String>>,
) -> Result<()> {
    for ast_field in ast_fields {
        let def_location = source_location(file_path, ast_field.position);
        if let Some(existing_field) = fields.get(ast_field.name.as_str()) {
            return Err(SchemaBuildError::DuplicateFieldDefinition {
                def1: existing_field.def_location().to_owned(),
                def2: def_location,
                field_name: ast_field.name,
                type_name: parent_type_name.to_string(),
            });
        }

        fields.insert(ast_field.name.to_string(), FieldDefinition {
            type_annotation: TypeAnnotation::from_ast_type(
                &def_location,
                &ast_field.field_type,
            ),
            def_location,
            description: ast_field.description,
            name: ast_field.name,
            parent_type_name: parent_type_name.to_string(),
        });
    }
    Ok(())
}

fn interface_refs(
    ref_location: &loc::SourceLocation,
    interface_names: Vec<String>,
) -> Vec<NamedTypeRef> {
    interface_names.into_iter()
        .map(|iface_name| NamedTypeRef::new(iface_name, ref_location.to_owned()))
        .collect()
}

fn source_location(
    file_path: Option<&Path>,
    pos: graphql_parser::Pos,
) -> loc::SourceLocation {
    loc::FilePosition::from_pos(file_path, pos).into()
}
