use crate::loc;
use crate::types::FieldDefinition;
use indexmap::IndexMap;

pub(super) trait ObjectOrInterfaceTypeTrait {
    fn def_location(&self) -> &loc::SourceLocation;
    fn description(&self) -> Option<&str>;
    fn field(&self, name: &str) -> Option<&FieldDefinition>;
    fn fields(&self) -> &IndexMap<String, FieldDefinition>;
    fn implements_interface(&self, interface_name: &str) -> bool;
    fn interface_names(&self) -> Vec<&str>;
    fn name(&self) -> &str;
}
