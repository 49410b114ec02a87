//! Android generator: a Kotlin object of `const val` strings.

use std::path::PathBuf;

use tokenforge_core::{Platform, Theme};
use tokenforge_io::ArtifactStore;

use super::templates::TemplateEngine;
use super::{declarations, escape_literal, render_file, CodeGenerator, GeneratedFile};
use crate::error::Result;

const KOTLIN_FILE: &str = r#"// Auto-generated from {{source}}.json
// Do not edit manually.

object {{pascal_case theme}}ThemeTokens {
{{body}}
}
"#;

const KOTLIN_DECLARATION: &str = r#"    const val {{name}} = "{{value}}""#;

/// Kotlin generator. Declarations follow traversal order.
pub struct AndroidGenerator<'a> {
    engine: TemplateEngine<'a>,
    dir: PathBuf,
}

impl<'a> AndroidGenerator<'a> {
    /// Create an Android generator writing into `dir`.
    pub fn new(dir: impl Into<PathBuf>) -> Result<Self> {
        let mut engine = TemplateEngine::new();
        engine.register_template("kotlin", KOTLIN_FILE)?;
        engine.register_template("kotlin.declaration", KOTLIN_DECLARATION)?;

        Ok(Self {
            engine,
            dir: dir.into(),
        })
    }
}

impl CodeGenerator for AndroidGenerator<'_> {
    fn platform(&self) -> Platform {
        Platform::Android
    }

    fn generate(&self, theme: &Theme, _store: &dyn ArtifactStore) -> Result<Vec<GeneratedFile>> {
        let decls = declarations(
            Platform::Android,
            theme,
            |record| record.constant_name.as_str(),
            |value| escape_literal(value, true),
        );
        let content = render_file(
            &self.engine,
            "kotlin",
            "kotlin.declaration",
            theme,
            decls.iter().map(|(name, value)| (*name, value.as_str())),
        )?;

        Ok(vec![GeneratedFile {
            path: self.dir.join(format!("theme_{}.kt", theme.file_stem())),
            content,
        }])
    }
}
