use crate::schema::OperationKind;
use crate::schema::SchemaBuildError;
use crate::schema::type_validator::TypeValidator;
use crate::types::CompositeType;
use crate::types::FieldDefinition;
use crate::types::GraphQLType;
use crate::types::NamedTypeRef;
use indexmap::IndexMap;

/// A validated GraphQL schema: the type system a query graph is derived
/// from.
///
/// A [`Schema`] owns every type it defines. The
/// [`Transition`](crate::Transition)s labeling a query graph's edges borrow
/// [`FieldDefinition`]s and [`CompositeType`]s from it, so the schema must
/// outlive any query graph built over it.
///
/// Build one with a [`SchemaBuilder`](crate::schema::SchemaBuilder).
/// Deserialized schemas go through the same type and root-type validation
/// as built ones, and fail to decode if it does not pass.
#[derive(Clone, Debug, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(try_from = "UnvalidatedSchema")]
pub struct Schema {
    pub(crate) mutation_type: Option<NamedTypeRef>,
    pub(crate) query_type: NamedTypeRef,
    pub(crate) subscription_type: Option<NamedTypeRef>,
    pub(crate) types: IndexMap<String, GraphQLType>,
}
impl Schema {
    pub fn composite_type(&self, name: &str) -> Option<&CompositeType> {
        self.types.get(name).and_then(GraphQLType::as_composite)
    }

    /// Every [`CompositeType`] in the schema, in definition order.
    pub fn composite_types(&self) -> impl Iterator<Item = &CompositeType> {
        self.types.values().filter_map(GraphQLType::as_composite)
    }

    /// Look up the field named `field_name` on the composite type named
    /// `type_name`.
    pub fn field(
        &self,
        type_name: &str,
        field_name: &str,
    ) -> Option<&FieldDefinition> {
        self.composite_type(type_name)?.field(field_name)
    }

    /// Whether a value of `abstract_type` may, at runtime, be a value of
    /// `candidate`. This is the membership fact that makes a
    /// [`Transition::DownCast`](crate::Transition::DownCast) from
    /// `abstract_type` to `candidate` meaningful.
    ///
    /// An object type is only a possible runtime type of itself.
    pub fn is_possible_runtime_type(
        &self,
        abstract_type: &CompositeType,
        candidate: &CompositeType,
    ) -> bool {
        match (abstract_type, candidate) {
            (CompositeType::Object(obj_type), CompositeType::Object(candidate))
                => obj_type.name() == candidate.name(),
            (CompositeType::Interface(iface_type), CompositeType::Object(candidate))
                => candidate.implements_interface(iface_type.name()),
            (CompositeType::Union(union_type), CompositeType::Object(candidate))
                => union_type.has_member(candidate.name()),
            (_, CompositeType::Interface(_) | CompositeType::Union(_))
                => false,
        }
    }

    pub fn mutation_type(&self) -> Option<&CompositeType> {
        self.mutation_type.as_ref()
            .and_then(|type_ref| self.composite_type(type_ref.name()))
    }

    /// The object types a value of `type_` may be at runtime, in schema
    /// definition order.
    pub fn possible_runtime_types(
        &self,
        type_: &CompositeType,
    ) -> Vec<&CompositeType> {
        self.composite_types()
            .filter(|candidate| self.is_possible_runtime_type(type_, candidate))
            .collect()
    }

    pub fn query_type(&self) -> &CompositeType {
        self.composite_type(self.query_type.name())
            .expect("query root type was verified to be an object type")
    }

    /// The root type of each operation kind this schema defines, `query`
    /// first.
    pub fn root_types(&self) -> Vec<(OperationKind, &CompositeType)> {
        let mut root_types = vec![(OperationKind::Query, self.query_type())];
        if let Some(mutation_type) = self.mutation_type() {
            root_types.push((OperationKind::Mutation, mutation_type));
        }
        if let Some(subscription_type) = self.subscription_type() {
            root_types.push((OperationKind::Subscription, subscription_type));
        }
        root_types
    }

    pub fn subscription_type(&self) -> Option<&CompositeType> {
        self.subscription_type.as_ref()
            .and_then(|type_ref| self.composite_type(type_ref.name()))
    }

    pub fn type_(&self, name: &str) -> Option<&GraphQLType> {
        self.types.get(name)
    }

    /// Every type defined in the schema (including the built-in scalars),
    /// keyed by name.
    pub fn types(&self) -> &IndexMap<String, GraphQLType> {
        &self.types
    }
}

/// The serialized form of a [`Schema`] before it has been validated.
#[derive(serde::Deserialize)]
struct UnvalidatedSchema {
    mutation_type: Option<NamedTypeRef>,
    query_type: NamedTypeRef,
    subscription_type: Option<NamedTypeRef>,
    types: IndexMap<String, GraphQLType>,
}
impl std::convert::TryFrom<UnvalidatedSchema> for Schema {
    type Error = SchemaBuildError;

    fn try_from(unvalidated: UnvalidatedSchema) -> Result<Self, Self::Error> {
        let errors = TypeValidator::new(&unvalidated.types).validate();
        if !errors.is_empty() {
            return Err(SchemaBuildError::TypeValidationErrors { errors });
        }

        let root_type_refs = [
            (OperationKind::Query, Some(&unvalidated.query_type)),
            (OperationKind::Mutation, unvalidated.mutation_type.as_ref()),
            (OperationKind::Subscription, unvalidated.subscription_type.as_ref()),
        ];
        for (operation, type_ref) in root_type_refs {
            let Some(type_ref) = type_ref else {
                continue;
            };
            if !matches!(
                unvalidated.types.get(type_ref.name()),
                Some(GraphQLType::Composite(CompositeType::Object(_))),
            ) {
                return Err(SchemaBuildError::InvalidRootOperationType {
                    operation,
                    type_name: type_ref.name().to_string(),
                });
            }
        }

        Ok(Self {
            mutation_type: unvalidated.mutation_type,
            query_type: unvalidated.query_type,
            subscription_type: unvalidated.subscription_type,
            types: unvalidated.types,
        })
    }
}
