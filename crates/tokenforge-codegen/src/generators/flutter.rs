//! Flutter generator: a Dart class of `static const String` fields.

use std::path::PathBuf;

use tokenforge_core::{Platform, Theme};
use tokenforge_io::ArtifactStore;

use super::templates::TemplateEngine;
use super::{declarations, escape_literal, render_file, CodeGenerator, GeneratedFile};
use crate::error::Result;

const DART_FILE: &str = r#"// Auto-generated from {{source}}.json
// Do not edit manually.

class {{pascal_case theme}}ThemeTokens {
  {{pascal_case theme}}ThemeTokens._();

{{body}}
}
"#;

const DART_DECLARATION: &str = r#"  static const String {{name}} = "{{value}}";"#;

/// Dart generator.
pub struct FlutterGenerator<'a> {
    engine: TemplateEngine<'a>,
    dir: PathBuf,
}

impl<'a> FlutterGenerator<'a> {
    pub fn new(dir: impl Into<PathBuf>) -> Result<Self> {
        let mut engine = TemplateEngine::new();
        engine.register_template("dart", DART_FILE)?;
        engine.register_template("dart.declaration", DART_DECLARATION)?;

        Ok(Self {
            engine,
            dir: dir.into(),
        })
    }
}

impl CodeGenerator for FlutterGenerator<'_> {
    fn platform(&self) -> Platform {
        Platform::Flutter
    }

    fn generate(&self, theme: &Theme, _store: &dyn ArtifactStore) -> Result<Vec<GeneratedFile>> {
        let decls = declarations(
            Platform::Flutter,
            theme,
            |record| record.identifier_name.as_str(),
            |value| escape_literal(value, true),
        );
        let content = render_file(
            &self.engine,
            "dart",
            "dart.declaration",
            theme,
            decls.iter().map(|(name, value)| (*name, value.as_str())),
        )?;

        Ok(vec![GeneratedFile {
            path: self.dir.join(format!("theme_{}.dart", theme.file_stem())),
            content,
        }])
    }
}
