use std::path::Path;
use std::path::PathBuf;

/// A line/column position within a GraphQL source, plus the path of the file
/// it came from (if it came from a file at all).
#[derive(Clone, Debug, Eq, PartialEq, serde::Deserialize, serde::Serialize)]
pub struct FilePosition {
    pub col: usize,
    pub file: Option<PathBuf>,
    pub line: usize,
}
impl FilePosition {
    pub(crate) fn from_pos(
        file: Option<&Path>,
        pos: graphql_parser::Pos,
    ) -> Self {
        Self {
            col: pos.column,
            file: file.map(|f| f.to_path_buf()),
            line: pos.line,
        }
    }
}
impl std::fmt::Display for FilePosition {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match &self.file {
            Some(file) => write!(f, "{}:{}:{}", file.display(), self.line, self.col),
            None => write!(f, "<str>:{}:{}", self.line, self.col),
        }
    }
}

/// Where some schema element was defined.
#[derive(Clone, Debug, Eq, PartialEq, serde::Deserialize, serde::Serialize)]
pub enum SourceLocation {
    /// Defined implicitly by GraphQL itself (built-in scalars, `__typename`).
    GraphQLBuiltIn,

    /// Defined in loaded schema source.
    Schema(FilePosition),
}
impl std::fmt::Display for SourceLocation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::GraphQLBuiltIn => write!(f, "<builtin>"),
            Self::Schema(pos) => pos.fmt(f),
        }
    }
}
impl std::convert::From<FilePosition> for SourceLocation {
    fn from(value: FilePosition) -> Self {
        Self::Schema(value)
    }
}
