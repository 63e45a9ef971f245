use anyhow::Context;
use crate::output_utils;
use crate::Cli;
use crate::CommandResult;
use crate::RunnableCommand;
use graphql_tsgen::codegen::EnumMode;
use graphql_tsgen::document;
use graphql_tsgen::render;
use graphql_tsgen::transform_document;
use graphql_tsgen::CodegenConfig;
use graphql_tsgen::Schema;
use std::collections::HashMap;
use std::collections::HashSet;
use std::path::Path;
use std::path::PathBuf;
use walkdir::WalkDir;

#[derive(Debug, clap::Args)]
pub(crate) struct GenerateCmd {
    #[arg(
        help="Path to a JSON file of codegen options (`enumAs`, \
             `multilineOperationAST`, `emitGlobalTypes`, \
             `emitRuntimeDocuments`). Flags given on the command line take \
             precedence over values from this file.",
        long,
    )]
    config: Option<PathBuf>,

    #[arg(
        help="Emit a declaration for every scalar and enum in the schema.",
        long,
    )]
    emit_global_types: bool,

    #[arg(
        help="Emit a typed constant holding each operation's document.",
        long,
    )]
    emit_runtime_documents: bool,

    #[arg(
        help="How schema enums are declared: `union`, `enum`, or `const-enum`.",
        long,
    )]
    enum_as: Option<EnumMode>,

    #[arg(
        default_values_t=[
            "graphql".to_string(),
            "gql".to_string(),
        ],
        help="Set of file extensions to filter to when searching for \
             operation documents within a directory.",
        long,
        value_delimiter = ',',
    )]
    graphql_file_exts: Vec<String>,

    #[arg(
        help="Lay generated operation documents out over multiple lines.",
        long,
    )]
    multiline_operation_ast: bool,

    #[arg(
        help="Directory to write generated files into. Defaults to writing \
             each generated file next to its operation document.",
        long,
    )]
    out_dir: Option<PathBuf>,

    #[arg(
        help="Path to the schema: GraphQL SDL (`.graphql`/`.graphqls`) or an \
             introspection query result (`.json`).",
        long,
        required=true,
    )]
    schema: PathBuf,

    #[arg(
        help="Print generated output to stdout instead of writing files.",
        long,
    )]
    stdout: bool,

    #[arg(
        help="Paths to one or more operation documents or directories \
             containing operation documents.",
        name="FILE_OR_DIR_PATHS",
        required=true,
    )]
    file_or_dir_paths: Vec<PathBuf>,
}
impl GenerateCmd {
    /// Reads `--config` (if given) and layers command-line flags on top.
    fn codegen_config(&self) -> anyhow::Result<CodegenConfig> {
        let base_config = match &self.config {
            Some(config_path) => {
                let json = std::fs::read_to_string(config_path)
                    .with_context(|| format!("reading config file {config_path:#?}"))?;
                serde_json::from_str::<CodegenConfig>(&json)
                    .with_context(|| format!("parsing config file {config_path:#?}"))?
            },
            None => CodegenConfig::default(),
        };
        Ok(self.apply_flag_overrides(base_config))
    }

    pub(crate) fn apply_flag_overrides(&self, mut config: CodegenConfig) -> CodegenConfig {
        if let Some(enum_as) = self.enum_as {
            config.enum_as = enum_as;
        }
        config.emit_global_types |= self.emit_global_types;
        config.emit_runtime_documents |= self.emit_runtime_documents;
        config.multiline_operation_ast |= self.multiline_operation_ast;
        config
    }

    /// Finds every operation document at or under the input paths.
    fn find_document_paths(&self) -> anyhow::Result<Vec<DocumentPath>> {
        // Normalize the set of file extensions to filter with
        let graphql_file_exts: HashSet<String> =
            self.graphql_file_exts.iter()
                .map(|ext| ext.trim_start_matches('.').to_string())
                .collect();

        log::debug!(
            "Scanning {} input paths...",
            self.file_or_dir_paths.len(),
        );
        let mut file_paths = vec![];
        for path in &self.file_or_dir_paths {
            // A file named explicitly is always treated as a document, even
            // if its extension isn't one of `graphql_file_exts`.
            if path.is_file() {
                file_paths.push(DocumentPath::explicit(path));
                continue;
            }

            for entry in WalkDir::new(path.as_path()).follow_links(true).sort_by_file_name() {
                let entry = entry.with_context(|| format!(
                    "walking files at/under {path:#?}",
                ))?;
                let entry_path = entry.path();
                if !entry.file_type().is_file() {
                    log::trace!("Skipping non-file: {entry_path:#?}.");
                    continue;
                }

                let has_graphql_ext = entry_path.extension()
                    .map(|ext| ext.to_string_lossy())
                    .is_some_and(|ext| graphql_file_exts.contains(&*ext));
                if has_graphql_ext {
                    log::trace!("Found operation document at {entry_path:#?}.");
                    file_paths.push(DocumentPath::under_dir(path, entry_path));
                } else {
                    log::trace!("Skipping file with a non-GraphQL extension: {entry_path:#?}.");
                }
            }
        }

        Ok(file_paths)
    }

    /// Generates the file for one document, returning its rendered text.
    fn generate_file(
        &self,
        schema: &Schema,
        config: &CodegenConfig,
        document_path: &Path,
    ) -> anyhow::Result<String> {
        let operation_document = document::load_document_file(document_path)?;
        let declarations = transform_document(schema, &operation_document, config)
            .with_context(|| format!("generating declarations for {document_path:#?}"))?;
        log::debug!(
            "Generated {} declarations for {document_path:#?}.",
            declarations.len(),
        );

        let source_name = document_path.file_name()
            .map(|name| name.to_string_lossy().into_owned())
            .unwrap_or_else(|| document_path.display().to_string());
        Ok(render::render_file(source_name.as_str(), &declarations))
    }
}

#[inherent::inherent]
impl RunnableCommand for GenerateCmd {
    pub async fn run(self, _cli: Cli) -> CommandResult {
        let config = match self.codegen_config() {
            Ok(config) => config,
            Err(err) => return CommandResult::stderr(format_args!(
                "{} Invalid codegen configuration: {err:#}",
                output_utils::RED_X,
            )),
        };
        log::debug!("Using codegen config: {config:?}");

        let schema = match Schema::load_file(&self.schema) {
            Ok(schema) => schema,
            Err(err) => return CommandResult::stderr(format_args!(
                "{} Error loading schema {:#?}: {err}",
                output_utils::RED_X,
                self.schema,
            )),
        };

        let document_paths = match self.find_document_paths() {
            Ok(paths) => paths,
            Err(err) => return CommandResult::stderr(format_args!(
                "{} {err:#}",
                output_utils::RED_X,
            )),
        };
        log::debug!(
            "Found {} operation documents to generate from.",
            document_paths.len(),
        );

        let out_paths = plan_output_paths(&document_paths, self.out_dir.as_deref());

        let mut errors = vec![];
        let mut printed = vec![];
        let mut num_written = 0;
        for (document, out_path) in document_paths.iter().zip(out_paths) {
            let generated = match self.generate_file(&schema, &config, &document.path) {
                Ok(generated) => generated,
                Err(err) => {
                    errors.push(format!("{} {err:#}", output_utils::RED_X));
                    continue;
                },
            };

            if self.stdout {
                printed.push(generated);
                continue;
            }

            let out_path = match out_path {
                Ok(out_path) => out_path,
                Err(err) => {
                    errors.push(format!("{} {err:#}", output_utils::RED_X));
                    continue;
                },
            };

            let write_result = out_path.parent()
                .filter(|dir| !dir.as_os_str().is_empty())
                .map_or(Ok(()), std::fs::create_dir_all)
                .and_then(|_| std::fs::write(&out_path, generated));
            match write_result {
                Ok(()) => {
                    log::info!("Wrote {out_path:#?}.");
                    num_written += 1;
                },
                Err(err) => errors.push(format!(
                    "{} Error writing {out_path:#?}: {err}",
                    output_utils::RED_X,
                )),
            }
        }

        if !errors.is_empty() {
            return CommandResult::stderr(format_args!(
                "{} of {} operation documents failed:\n{}",
                errors.len(),
                document_paths.len(),
                errors.join("\n"),
            ));
        }

        if self.stdout {
            CommandResult::stdout(format_args!("{}", printed.join("\n")))
        } else {
            CommandResult::stdout(format_args!(
                "{} Generated {num_written} TypeScript files.",
                output_utils::GREEN_CHECK,
            ))
        }
    }
}

/// An operation document found on disk.
#[derive(Clone, Debug, PartialEq)]
pub(crate) struct DocumentPath {
    pub path: PathBuf,

    /// Where the document sits relative to the input path it was found
    /// under. Just the file name for documents named on the command line.
    pub relative_path: PathBuf,
}
impl DocumentPath {
    pub fn explicit(path: &Path) -> Self {
        let relative_path = path.file_name()
            .map(PathBuf::from)
            .unwrap_or_else(|| path.to_owned());
        Self {
            path: path.to_owned(),
            relative_path,
        }
    }

    pub fn under_dir(dir: &Path, path: &Path) -> Self {
        match path.strip_prefix(dir) {
            Ok(relative_path) => Self {
                path: path.to_owned(),
                relative_path: relative_path.to_owned(),
            },
            Err(_) => Self::explicit(path),
        }
    }
}

/// `<stem>.ts` beside the document, or at the document's relative path
/// inside `out_dir`.
pub(crate) fn output_path(document: &DocumentPath, out_dir: Option<&Path>) -> PathBuf {
    match out_dir {
        Some(out_dir) => out_dir.join(&document.relative_path).with_extension("ts"),
        None => document.path.with_extension("ts"),
    }
}

/// The output path for each document, in order. A document whose output path
/// was already claimed by an earlier document gets an error instead.
pub(crate) fn plan_output_paths(
    documents: &[DocumentPath],
    out_dir: Option<&Path>,
) -> Vec<anyhow::Result<PathBuf>> {
    let mut claimed_by = HashMap::<PathBuf, &Path>::new();
    documents.iter()
        .map(|document| {
            let out_path = output_path(document, out_dir);
            if let Some(earlier) = claimed_by.get(&out_path) {
                anyhow::bail!(
                    "{:#?} and {earlier:#?} would both generate {out_path:#?}",
                    document.path,
                );
            }
            claimed_by.insert(out_path.clone(), &document.path);
            Ok(out_path)
        })
        .collect()
}
