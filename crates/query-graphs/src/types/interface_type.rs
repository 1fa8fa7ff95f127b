use crate::loc;
use crate::types::FieldDefinition;
use crate::types::ObjectOrInterfaceTypeData;
use crate::types::ObjectOrInterfaceTypeTrait;
use indexmap::IndexMap;
use inherent::inherent;

/// Represents an
/// [interface type](https://spec.graphql.org/October2021/#sec-Interfaces)
/// defined within some [`Schema`](crate::schema::Schema).
#[derive(Clone, Debug, PartialEq, serde::Deserialize, serde::Serialize)]
pub struct InterfaceType(pub(crate) ObjectOrInterfaceTypeData);

#[inherent]
impl ObjectOrInterfaceTypeTrait for InterfaceType {
    pub fn def_location(&self) -> &loc::SourceLocation {
        self.0.def_location()
    }

    pub fn description(&self) -> Option<&str> {
        self.0.description()
    }

    pub fn field(&self, name: &str) -> Option<&FieldDefinition> {
        self.0.field(name)
    }

    pub fn fields(&self) -> &IndexMap<String, FieldDefinition> {
        self.0.fields()
    }

    pub fn implements_interface(&self, interface_name: &str) -> bool {
        self.0.implements_interface(interface_name)
    }

    /// The names of the interfaces this interface itself implements.
    pub fn interface_names(&self) -> Vec<&str> {
        self.0.interface_names()
    }

    pub fn name(&self) -> &str {
        self.0.name()
    }
}
