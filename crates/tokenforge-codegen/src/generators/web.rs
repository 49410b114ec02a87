//! Web generator: CSS custom properties and a TypeScript constants module.

use std::path::{Path, PathBuf};

use tokenforge_core::{Platform, Theme};
use tokenforge_io::ArtifactStore;
use tracing::debug;

use super::templates::TemplateEngine;
use super::{escape_literal, render_file, CodeGenerator, GeneratedFile};
use crate::error::Result;
use crate::registry::{MergePolicy, TokenRegistry};

const CSS_FILE: &str = r#"/**
 * Auto-generated from {{source}}.json
 * Do not edit manually.
 */

[data-theme="{{kebab_case theme}}"] {
{{body}}
}
"#;

const CSS_DECLARATION: &str = "  --{{name}}: {{value}};";

const TS_FILE: &str = r#"/**
 * Auto-generated from {{source}}.json
 * Do not edit manually.
 */

{{body}}
"#;

const TS_DECLARATION: &str = r#"export const {{name}} = "{{value}}";"#;

/// Web generator.
///
/// Output is merge-forward through a [`TokenRegistry`] stored next to the
/// theme files.
pub struct WebGenerator<'a> {
    engine: TemplateEngine<'a>,
    dir: PathBuf,
    policy: MergePolicy,
}

/// Paths of the three files that make up one web theme.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WebArtifacts {
    pub css: PathBuf,
    pub ts: PathBuf,
    pub registry: PathBuf,
}

impl<'a> WebGenerator<'a> {
    /// Create a web generator writing into `dir`.
    pub fn new(dir: impl Into<PathBuf>, policy: MergePolicy) -> Result<Self> {
        let mut engine = TemplateEngine::new();
        engine.register_template("css", CSS_FILE)?;
        engine.register_template("css.declaration", CSS_DECLARATION)?;
        engine.register_template("ts", TS_FILE)?;
        engine.register_template("ts.declaration", TS_DECLARATION)?;

        Ok(Self {
            engine,
            dir: dir.into(),
            policy,
        })
    }

    /// Artifact paths for a theme.
    pub fn artifacts(&self, theme: &Theme) -> WebArtifacts {
        let slug = theme.slug();
        WebArtifacts {
            css: self.dir.join(format!("theme-{slug}.css")),
            ts: self.dir.join(format!("theme-{slug}.ts")),
            registry: self.dir.join(format!("theme-{slug}.tokens.json")),
        }
    }

    /// Load the registry of earlier runs, seeding it from legacy theme files
    /// when none was stored.
    fn load_registry(
        &self,
        theme: &Theme,
        artifacts: &WebArtifacts,
        store: &dyn ArtifactStore,
    ) -> Result<TokenRegistry> {
        if let Some(text) = store.read(&artifacts.registry)? {
            return TokenRegistry::from_json(&artifacts.registry, &text);
        }

        let css = store.read(&artifacts.css)?;
        let ts = store.read(&artifacts.ts)?;
        let registry = TokenRegistry::from_legacy(&theme.name, css.as_deref(), ts.as_deref());
        if !registry.is_empty() {
            debug!(
                theme = %theme.name,
                css_vars = registry.css_vars.len(),
                constants = registry.constants.len(),
                "seeded registry from existing theme files"
            );
        }
        Ok(registry)
    }

    /// Render the CSS file of a registry.
    pub fn render_css(&self, theme: &Theme, registry: &TokenRegistry) -> Result<String> {
        render_file(
            &self.engine,
            "css",
            "css.declaration",
            theme,
            registry
                .css_vars
                .iter()
                .map(|(name, value)| (name.as_str(), value.as_str())),
        )
    }

    /// Render the TypeScript module of a registry.
    pub fn render_ts(&self, theme: &Theme, registry: &TokenRegistry) -> Result<String> {
        let escaped: Vec<(&str, String)> = registry
            .constants
            .iter()
            .map(|(name, value)| (name.as_str(), escape_literal(value, false)))
            .collect();

        render_file(
            &self.engine,
            "ts",
            "ts.declaration",
            theme,
            escaped.iter().map(|(name, value)| (*name, value.as_str())),
        )
    }
}

impl CodeGenerator for WebGenerator<'_> {
    fn platform(&self) -> Platform {
        Platform::Web
    }

    fn generate(&self, theme: &Theme, store: &dyn ArtifactStore) -> Result<Vec<GeneratedFile>> {
        let artifacts = self.artifacts(theme);
        let mut registry = self.load_registry(theme, &artifacts, store)?;
        let prior = registry.css_vars.len();

        registry.merge(theme, self.policy);
        debug!(
            theme = %theme.name,
            prior,
            total = registry.css_vars.len(),
            policy = ?self.policy,
            "merged web tokens"
        );

        Ok(vec![
            file(&artifacts.css, self.render_css(theme, &registry)?),
            file(&artifacts.ts, self.render_ts(theme, &registry)?),
            file(&artifacts.registry, registry.to_json()?),
        ])
    }
}

fn file(path: &Path, content: String) -> GeneratedFile {
    GeneratedFile {
        path: path.to_path_buf(),
        content,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::CodegenError;
    use crate::generators::test_support::theme;
    use tokenforge_io::MemoryStore;

    fn generator() -> WebGenerator<'static> {
        WebGenerator::new("src/styles", MergePolicy::Retain).unwrap()
    }

    fn write_all(store: &mut MemoryStore, files: &[GeneratedFile]) {
        for file in files {
            store.write(&file.path, &file.content).unwrap();
        }
    }

    #[test]
    fn test_css_output() {
        let theme = theme(&[
            ("Button-Text", "#FFFFFF"),
            ("Button-Background", "#1E40AF"),
        ]);
        let files = generator().generate(&theme, &MemoryStore::new()).unwrap();

        assert_eq!(files[0].path, Path::new("src/styles/theme-brand-a.css"));
        insta::assert_snapshot!(&files[0].content, @r###"
/**
 * Auto-generated from design-tokens.json
 * Do not edit manually.
 */

[data-theme="brand-a"] {
  --component-tokens-brand-a-button-background: #1E40AF;
  --component-tokens-brand-a-button-text: #FFFFFF;
}
"###);
    }

    #[test]
    fn test_ts_output_is_sorted_and_escaped() {
        let theme = theme(&[("Font-Family", r#"Inter, "Helvetica""#), ("Border", "1px")]);
        let files = generator().generate(&theme, &MemoryStore::new()).unwrap();

        assert_eq!(files[1].path, Path::new("src/styles/theme-brand-a.ts"));
        insta::assert_snapshot!(&files[1].content, @r###"
/**
 * Auto-generated from design-tokens.json
 * Do not edit manually.
 */

export const brandaBorder = "1px";
export const brandaFontFamily = "Inter, \"Helvetica\"";
"###);
    }

    #[test]
    fn test_legacy_css_is_merged() {
        let mut store = MemoryStore::new();
        store
            .write(
                Path::new("src/styles/theme-brand-a.css"),
                "[data-theme=\"brand-a\"] {\n  --old-var: red;\n}\n",
            )
            .unwrap();

        let theme = theme(&[("New-Var", "blue")]);
        let files = generator().generate(&theme, &store).unwrap();

        let css = &files[0].content;
        let old = css.find("  --old-var: red;").unwrap();
        let new = css
            .find("  --component-tokens-brand-a-new-var: blue;")
            .unwrap();
        assert!(new < old);
    }

    #[test]
    fn test_runs_accumulate_through_registry() {
        let mut store = MemoryStore::new();
        let generator = generator();

        let first = generator.generate(&theme(&[("Text", "black")]), &store).unwrap();
        write_all(&mut store, &first);
        let second = generator.generate(&theme(&[("Gap", "4px")]), &store).unwrap();
        write_all(&mut store, &second);

        let css = store.get("src/styles/theme-brand-a.css").unwrap();
        assert!(css.contains("--component-tokens-brand-a-text: black;"));
        assert!(css.contains("--component-tokens-brand-a-gap: 4px;"));

        let ts = store.get("src/styles/theme-brand-a.ts").unwrap();
        assert!(ts.contains("export const brandaText = \"black\";"));
        assert!(ts.contains("export const brandaGap = \"4px\";"));
    }

    #[test]
    fn test_prune_drops_prior_entries() {
        let mut store = MemoryStore::new();
        let first = generator().generate(&theme(&[("Text", "black")]), &store).unwrap();
        write_all(&mut store, &first);

        let pruning = WebGenerator::new("src/styles", MergePolicy::Prune).unwrap();
        let second = pruning.generate(&theme(&[("Gap", "4px")]), &store).unwrap();

        assert!(!second[0].content.contains("brand-a-text"));
        assert!(second[0].content.contains("brand-a-gap"));
    }

    #[test]
    fn test_newer_registry_is_an_error() {
        let mut store = MemoryStore::new();
        store
            .write(
                Path::new("src/styles/theme-brand-a.tokens.json"),
                r#"{"version": 9, "theme": "BrandA"}"#,
            )
            .unwrap();

        let err = generator()
            .generate(&theme(&[("Text", "black")]), &store)
            .unwrap_err();
        assert!(matches!(err, CodegenError::UnsupportedRegistryVersion { found: 9, .. }));
    }
}
