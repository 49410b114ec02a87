//! The run loop: documents in, artifacts out.

use std::fs;
use std::path::{Path, PathBuf};

use tokenforge_codegen::{generator_for, CodeGenerator};
use tokenforge_core::{ConfigError, TokenValue};
use tokenforge_io::ArtifactStore;
use tokenforge_resolver::{compile_document, CompiledDocument};
use tracing::{info, warn};

use crate::config::CompilerConfig;
use crate::error::{CompileError, Result};
use crate::source::{source_name, TokenSource};

/// Outcome of a successful run.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RunSummary {
    /// Documents that compiled.
    pub documents: usize,
    /// Documents skipped because they failed to compile.
    pub skipped: Vec<PathBuf>,
    pub themes: usize,
    /// Every artifact written, in write order.
    pub files: Vec<PathBuf>,
}

/// Compiles token documents into platform artifacts.
pub struct Compiler {
    config: CompilerConfig,
    generators: Vec<Box<dyn CodeGenerator>>,
}

impl Compiler {
    /// Create a compiler with a generator for each selected platform.
    pub fn new(config: CompilerConfig) -> Result<Self> {
        let generators = config
            .platforms
            .platforms()
            .into_iter()
            .map(|platform| generator_for(platform, &config.layout, config.merge_policy))
            .collect::<std::result::Result<Vec<_>, _>>()?;

        Ok(Self { config, generators })
    }

    pub fn config(&self) -> &CompilerConfig {
        &self.config
    }

    /// Run over every document of the configured token source.
    pub fn run(&self, store: &mut dyn ArtifactStore) -> Result<RunSummary> {
        let source = TokenSource::discover(&self.config.tokens)?;
        let mut summary = RunSummary::default();

        for path in source.documents() {
            let document = match self.compile_file(path) {
                Ok(document) => document,
                Err(err) if err.is_per_document() && !source.is_single() => {
                    warn!(path = %path.display(), error = %err, "skipping token document");
                    summary.skipped.push(path.clone());
                    continue;
                }
                Err(err) => return Err(err),
            };

            let written = self.emit(&document, store)?;
            summary.documents += 1;
            summary.themes += document.themes.len();
            summary.files.extend(written);
        }

        if summary.documents == 0 {
            return Err(ConfigError::NoUsableDocuments {
                path: source.path().to_path_buf(),
            }
            .into());
        }

        info!(
            documents = summary.documents,
            skipped = summary.skipped.len(),
            themes = summary.themes,
            files = summary.files.len(),
            "token compilation finished"
        );
        Ok(summary)
    }

    /// Read, parse, and resolve one document.
    pub fn compile_file(&self, path: &Path) -> Result<CompiledDocument> {
        let text = fs::read_to_string(path).map_err(|source| CompileError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        self.compile_str(&source_name(path), &text)
            .map_err(|err| match err {
                CompileError::Document { source, .. } => CompileError::Document {
                    path: path.to_path_buf(),
                    source,
                },
                other => other,
            })
    }

    /// Parse and resolve a document held in memory. `source` names it.
    pub fn compile_str(&self, source: &str, text: &str) -> Result<CompiledDocument> {
        let document_error = |err| CompileError::Document {
            path: PathBuf::from(source),
            source: err,
        };
        let document = TokenValue::from_json_str(text).map_err(|err| document_error(err.into()))?;
        compile_document(source, &document, &self.config.rules).map_err(document_error)
    }

    /// Generate and write every artifact of a compiled document.
    pub fn emit(
        &self,
        document: &CompiledDocument,
        store: &mut dyn ArtifactStore,
    ) -> Result<Vec<PathBuf>> {
        let mut written = Vec::new();

        for theme in &document.themes {
            info!(
                source = %document.source,
                theme = %theme.name,
                tokens = theme.len(),
                "built theme"
            );
            for generator in &self.generators {
                for file in generator.generate(theme, store)? {
                    store.write(&file.path, &file.content)?;
                    written.push(file.path);
                }
            }
        }

        Ok(written)
    }
}
