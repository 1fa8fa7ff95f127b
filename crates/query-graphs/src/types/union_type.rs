use crate::loc;
use crate::types::FieldDefinition;
use crate::types::NamedTypeRef;
use indexmap::IndexMap;

/// Represents a
/// [union type](https://spec.graphql.org/October2021/#sec-Unions) defined
/// within some [`Schema`](crate::schema::Schema).
#[derive(Clone, Debug, PartialEq, serde::Deserialize, serde::Serialize)]
pub struct UnionType {
    pub(crate) def_location: loc::SourceLocation,
    pub(crate) description: Option<String>,
    pub(crate) members: Vec<NamedTypeRef>,
    pub(crate) name: String,
    pub(crate) typename_field: IndexMap<String, FieldDefinition>,
}
impl UnionType {
    pub(crate) fn new(
        name: &str,
        def_location: loc::SourceLocation,
        description: Option<String>,
    ) -> Self {
        let typename_field = FieldDefinition::typename(name);
        Self {
            def_location,
            description,
            members: vec![],
            name: name.to_string(),
            typename_field: IndexMap::from([
                (typename_field.name.to_string(), typename_field),
            ]),
        }
    }

    pub fn def_location(&self) -> &loc::SourceLocation {
        &self.def_location
    }

    pub fn description(&self) -> Option<&str> {
        self.description.as_deref()
    }

    /// Unions declare no fields of their own; the only selectable field is
    /// the implicit `__typename`.
    pub fn fields(&self) -> &IndexMap<String, FieldDefinition> {
        &self.typename_field
    }

    pub fn has_member(&self, type_name: &str) -> bool {
        self.members.iter().any(|member_ref| member_ref.name() == type_name)
    }

    /// An ordered list of the names of each member type of this union.
    ///
    /// Members retain the order they were listed in the schema source.
    /// Members added by a type extension follow those of the definition.
    pub fn member_type_names(&self) -> Vec<&str> {
        self.members.iter()
            .map(|member_ref| member_ref.name())
            .collect()
    }

    pub fn name(&self) -> &str {
        self.name.as_str()
    }
}
