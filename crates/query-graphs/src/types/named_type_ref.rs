use crate::loc;
use crate::schema::Schema;
use crate::types::GraphQLType;

/// A `String`-named reference to a [`GraphQLType`] stored in some
/// [`Schema`], without holding a reference to the [`Schema`] itself.
///
/// Storing names rather than `&GraphQLType`s is what lets a [`Schema`] own
/// all of its types without self-references. De-referencing is done with
/// [`NamedTypeRef::deref()`] given the [`Schema`] to look the name up in.
#[derive(Clone, Debug, PartialEq, serde::Deserialize, serde::Serialize)]
pub struct NamedTypeRef {
    name: String,
    ref_location: loc::SourceLocation,
}
impl NamedTypeRef {
    pub fn new(
        name: impl AsRef<str>,
        ref_location: loc::SourceLocation,
    ) -> Self {
        Self {
            name: name.as_ref().to_string(),
            ref_location,
        }
    }

    pub fn deref<'schema>(
        &self,
        schema: &'schema Schema,
    ) -> Result<&'schema GraphQLType, DerefByNameError> {
        schema.type_(self.name.as_str()).ok_or_else(
            || DerefByNameError::DanglingReference(self.name.to_string())
        )
    }

    pub fn name(&self) -> &str {
        self.name.as_str()
    }

    /// Where this reference appears in the schema source.
    pub fn ref_location(&self) -> &loc::SourceLocation {
        &self.ref_location
    }
}

#[derive(Clone, Debug, PartialEq, thiserror::Error)]
pub enum DerefByNameError {
    #[error("no type named `{0}` is defined in the schema")]
    DanglingReference(String),
}
