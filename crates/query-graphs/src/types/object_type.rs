use crate::loc;
use crate::types::FieldDefinition;
use crate::types::ObjectOrInterfaceTypeData;
use crate::types::ObjectOrInterfaceTypeTrait;
use indexmap::IndexMap;
use inherent::inherent;

/// Represents an
/// [object type](https://spec.graphql.org/October2021/#sec-Objects) defined
/// within some [`Schema`](crate::schema::Schema).
#[derive(Clone, Debug, PartialEq, serde::Deserialize, serde::Serialize)]
pub struct ObjectType(pub(crate) ObjectOrInterfaceTypeData);

#[inherent]
impl ObjectOrInterfaceTypeTrait for ObjectType {
    /// The [`SourceLocation`](loc::SourceLocation) indicating where this
    /// [`ObjectType`] was defined.
    pub fn def_location(&self) -> &loc::SourceLocation {
        self.0.def_location()
    }

    pub fn description(&self) -> Option<&str> {
        self.0.description()
    }

    pub fn field(&self, name: &str) -> Option<&FieldDefinition> {
        self.0.field(name)
    }

    /// A map from FieldName -> [`FieldDefinition`] for every field defined
    /// on this [`ObjectType`], starting with the implicit `__typename` and
    /// then in the order fields appear in the schema source.
    pub fn fields(&self) -> &IndexMap<String, FieldDefinition> {
        self.0.fields()
    }

    /// Whether this type declares `interface_name` in its `implements`
    /// clause.
    pub fn implements_interface(&self, interface_name: &str) -> bool {
        self.0.implements_interface(interface_name)
    }

    pub fn interface_names(&self) -> Vec<&str> {
        self.0.interface_names()
    }

    pub fn name(&self) -> &str {
        self.0.name()
    }
}
