use crate::output_utils;
use crate::Cli;
use crate::CommandResult;
use crate::RunnableCommand;
use query_graphs::free_transition;
use query_graphs::Schema;
use query_graphs::SchemaBuilder;
use query_graphs::Transition;
use std::collections::HashSet;
use std::path::Path;
use std::path::PathBuf;
use walkdir::WalkDir;

#[derive(Debug, clap::Args)]
pub(crate) struct TransitionsCmd {
    #[arg(
        help="Only print transitions that lead to a composite type (i.e. skip \
             fields of scalar, enum and `__typename` type).",
        long,
    )]
    pub(super) composite_only: bool,

    #[arg(
        default_values_t=[
            "graphql".to_string(),
            "graphqls".to_string(),
        ],
        help="Set of file extensions to filter to when searching for files \
             within a directory.",
        long,
        value_delimiter = ',',
    )]
    pub(super) graphql_file_exts: Vec<String>,

    #[arg(
        help="Paths to one or more GraphQL schema files or directories \
             containing GraphQL schema files. All files are loaded into a \
             single schema.",
        name="FILE_OR_DIR_PATHS",
        required=true,
    )]
    pub(super) file_or_dir_paths: Vec<PathBuf>,
}

#[inherent::inherent]
impl RunnableCommand for TransitionsCmd {
    pub async fn run(self, _cli: Cli) -> CommandResult {
        let file_paths = match self.find_schema_files() {
            Ok(file_paths) => file_paths,
            Err(err) => return CommandResult::stderr(format_args!(
                "{} Failed to find schema files: {err}",
                output_utils::RED_X,
            )),
        };

        log::debug!("Found {} GraphQL files to load.", file_paths.len());

        let schema = match SchemaBuilder::from_files(&file_paths)
            .and_then(SchemaBuilder::build) {
            Ok(schema) => schema,
            Err(err) => return CommandResult::stderr(format_args!(
                "{} Failed to build schema: {err}",
                output_utils::RED_X,
            )),
        };

        let lines = render_transitions(&schema, self.composite_only);
        log::debug!("Rendered {} transitions.", lines.len());
        CommandResult::stdout(format_args!("{}", lines.join("\n")))
    }
}

impl TransitionsCmd {
    /// Find all GraphQL files recursively located at or under each path
    /// passed as an arg.
    pub(super) fn find_schema_files(&self) -> Result<Vec<PathBuf>, walkdir::Error> {
        let graphql_file_exts: HashSet<String> =
            self.graphql_file_exts.iter()
                .map(|ext| ext.trim_start_matches('.').to_string())
                .collect();

        // A single file named explicitly is loaded regardless of its
        // extension.
        if let [path] = self.file_or_dir_paths.as_slice()
            && path.is_file() {
            return Ok(vec![path.to_owned()]);
        }

        let mut file_paths = vec![];
        for path in &self.file_or_dir_paths {
            for entry in WalkDir::new(path.as_path()).follow_links(true).sort_by_file_name() {
                let entry = entry?;
                let path = entry.path();
                if !entry.file_type().is_file() {
                    log::trace!("Skipping non-file: {path:#?}.");
                    continue;
                }
                if has_graphql_ext(path, &graphql_file_exts) {
                    log::trace!("Found GraphQL file at {path:#?}.");
                    file_paths.push(path.to_path_buf());
                } else {
                    log::trace!("Skipping non-GraphQL file: {path:#?}.");
                }
            }
        }
        Ok(file_paths)
    }
}

fn has_graphql_ext(path: &Path, graphql_file_exts: &HashSet<String>) -> bool {
    path.extension()
        .is_some_and(|ext| graphql_file_exts.contains(ext.to_string_lossy().as_ref()))
}

/// One line per query graph edge the schema gives rise to, in the form
/// `Source -[transition]-> Target (collects|structural)`.
///
/// Root operation types come first, reached from the root vertex by free
/// transitions. Then, for each composite type in definition order, one
/// field collection per field followed by one down cast per possible
/// runtime type (for abstract types).
pub(super) fn render_transitions(schema: &Schema, composite_only: bool) -> Vec<String> {
    let mut lines = vec![];

    for (operation, root_type) in schema.root_types() {
        lines.push(render_edge(
            &format!("[{operation}]"),
            free_transition(),
            root_type.name(),
        ));
    }

    for type_ in schema.composite_types() {
        for field in type_.fields().values() {
            let leads_to_composite = schema.composite_type(field.base_type_name()).is_some();
            if composite_only && !leads_to_composite {
                continue;
            }
            lines.push(render_edge(
                type_.name(),
                &Transition::field_collection(field),
                field.base_type_name(),
            ));
        }

        if type_.is_abstract() {
            for runtime_type in schema.possible_runtime_types(type_) {
                lines.push(render_edge(
                    type_.name(),
                    &Transition::down_cast(type_, runtime_type),
                    runtime_type.name(),
                ));
            }
        }
    }

    lines
}

fn render_edge(source: &str, transition: &Transition<'_>, target: &str) -> String {
    format!(
        "{source} -[{transition}]-> {target} ({})",
        if transition.collect_operation_elements() {
            "collects"
        } else {
            "structural"
        },
    )
}
