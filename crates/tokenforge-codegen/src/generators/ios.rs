//! iOS generator: a Swift namespace enum of static strings.

use std::path::PathBuf;

use tokenforge_core::{Platform, Theme};
use tokenforge_io::ArtifactStore;

use super::templates::TemplateEngine;
use super::{declarations, escape_literal, render_file, CodeGenerator, GeneratedFile};
use crate::error::Result;

const SWIFT_FILE: &str = r#"// Auto-generated from {{source}}.json
// Do not edit manually.

public enum {{pascal_case theme}}ThemeTokens {
{{body}}
}
"#;

const SWIFT_DECLARATION: &str = r#"    public static let {{name}} = "{{value}}""#;

/// Swift generator.
pub struct IosGenerator<'a> {
    engine: TemplateEngine<'a>,
    dir: PathBuf,
}

impl<'a> IosGenerator<'a> {
    pub fn new(dir: impl Into<PathBuf>) -> Result<Self> {
        let mut engine = TemplateEngine::new();
        engine.register_template("swift", SWIFT_FILE)?;
        engine.register_template("swift.declaration", SWIFT_DECLARATION)?;

        Ok(Self {
            engine,
            dir: dir.into(),
        })
    }
}

impl CodeGenerator for IosGenerator<'_> {
    fn platform(&self) -> Platform {
        Platform::Ios
    }

    fn generate(&self, theme: &Theme, _store: &dyn ArtifactStore) -> Result<Vec<GeneratedFile>> {
        let decls = declarations(
            Platform::Ios,
            theme,
            |record| record.identifier_name.as_str(),
            |value| escape_literal(value, false),
        );
        let content = render_file(
            &self.engine,
            "swift",
            "swift.declaration",
            theme,
            decls.iter().map(|(name, value)| (*name, value.as_str())),
        )?;

        Ok(vec![GeneratedFile {
            path: self.dir.join(format!("Theme{}.swift", theme.type_name())),
            content,
        }])
    }
}
