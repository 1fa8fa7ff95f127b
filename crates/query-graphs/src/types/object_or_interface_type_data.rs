use crate::loc;
use crate::types::FieldDefinition;
use crate::types::NamedTypeRef;
use crate::types::ObjectOrInterfaceTypeTrait;
use indexmap::IndexMap;
use inherent::inherent;

#[derive(Clone, Debug, PartialEq, serde::Deserialize, serde::Serialize)]
pub(crate) struct ObjectOrInterfaceTypeData {
    pub(crate) def_location: loc::SourceLocation,
    pub(crate) description: Option<String>,
    pub(crate) fields: IndexMap<String, FieldDefinition>,
    pub(crate) interfaces: Vec<NamedTypeRef>,
    pub(crate) name: String,
}
impl ObjectOrInterfaceTypeData {
    /// New type data holding only the implicit `__typename` field.
    pub(crate) fn new(
        name: &str,
        def_location: loc::SourceLocation,
        description: Option<String>,
    ) -> Self {
        let typename_field = FieldDefinition::typename(name);
        Self {
            def_location,
            description,
            fields: IndexMap::from([
                (typename_field.name.to_string(), typename_field),
            ]),
            interfaces: vec![],
            name: name.to_string(),
        }
    }
}

#[inherent]
impl ObjectOrInterfaceTypeTrait for ObjectOrInterfaceTypeData {
    pub fn def_location(&self) -> &loc::SourceLocation {
        &self.def_location
    }

    pub fn description(&self) -> Option<&str> {
        self.description.as_deref()
    }

    pub fn field(&self, name: &str) -> Option<&FieldDefinition> {
        self.fields.get(name)
    }

    pub fn fields(&self) -> &IndexMap<String, FieldDefinition> {
        &self.fields
    }

    pub fn implements_interface(&self, interface_name: &str) -> bool {
        self.interfaces
            .iter()
            .any(|iface_ref| iface_ref.name() == interface_name)
    }

    pub fn interface_names(&self) -> Vec<&str> {
        self.interfaces
            .iter()
            .map(|iface_ref| iface_ref.name())
            .collect()
    }

    pub fn name(&self) -> &str {
        self.name.as_str()
    }
}
