//! Code generators for each target platform.

mod android;
mod flutter;
mod ios;
mod templates;
mod web;

pub use android::AndroidGenerator;
pub use flutter::FlutterGenerator;
pub use ios::IosGenerator;
pub use templates::TemplateEngine;
pub use web::{WebArtifacts, WebGenerator};

use std::path::PathBuf;

use indexmap::map::Entry;
use indexmap::IndexMap;
use serde::Serialize;
use tokenforge_core::{Platform, Theme, TokenRecord};
use tokenforge_io::{ArtifactStore, OutputLayout};
use tracing::warn;

use crate::error::Result;
use crate::registry::MergePolicy;

/// Common trait for platform generators.
pub trait CodeGenerator {
    /// Target platform.
    fn platform(&self) -> Platform;

    /// Render every artifact of one theme.
    ///
    /// `store` holds the output of earlier runs. Generators that merge with
    /// previous output read it; none of them write to it.
    fn generate(&self, theme: &Theme, store: &dyn ArtifactStore) -> Result<Vec<GeneratedFile>>;
}

/// A generated file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GeneratedFile {
    /// File path relative to the store root.
    pub path: PathBuf,
    /// File content.
    pub content: String,
}

/// Build the generator for a platform.
pub fn generator_for(
    platform: Platform,
    layout: &OutputLayout,
    policy: MergePolicy,
) -> Result<Box<dyn CodeGenerator>> {
    let dir = layout.dir(platform);
    let generator: Box<dyn CodeGenerator> = match platform {
        Platform::Web => Box::new(WebGenerator::new(dir, policy)?),
        Platform::Android => Box::new(AndroidGenerator::new(dir)?),
        Platform::Ios => Box::new(IosGenerator::new(dir)?),
        Platform::Flutter => Box::new(FlutterGenerator::new(dir)?),
    };
    Ok(generator)
}

/// Template context shared by every theme file.
#[derive(Serialize)]
struct FileContext<'a> {
    source: &'a str,
    theme: &'a str,
    body: String,
}

/// Template context of one declaration line.
#[derive(Serialize)]
struct DeclarationContext<'a> {
    name: &'a str,
    value: &'a str,
}

/// Render a theme file from a file template and a per-declaration template.
///
/// Declarations are `(name, value)` pairs with values already escaped for
/// the target language.
fn render_file<'a>(
    engine: &TemplateEngine<'_>,
    file_template: &str,
    declaration_template: &str,
    theme: &Theme,
    declarations: impl IntoIterator<Item = (&'a str, &'a str)>,
) -> Result<String> {
    let lines = declarations
        .into_iter()
        .map(|(name, value)| engine.render(declaration_template, &DeclarationContext { name, value }))
        .collect::<Result<Vec<_>>>()?;

    engine.render(
        file_template,
        &FileContext {
            source: &theme.source,
            theme: &theme.name,
            body: lines.join("\n"),
        },
    )
}

/// Collapse records sharing a name into one declaration.
///
/// Each name keeps the position of its first record and the value of its
/// last one. Values are converted to literals and escaped with `escape`.
fn declarations<'a>(
    platform: Platform,
    theme: &'a Theme,
    name: impl Fn(&'a TokenRecord) -> &'a str,
    escape: impl Fn(&str) -> String,
) -> IndexMap<&'a str, String> {
    let mut out = IndexMap::with_capacity(theme.records.len());

    for record in &theme.records {
        let value = escape(&record.value.to_literal());
        match out.entry(name(record)) {
            Entry::Occupied(mut entry) => {
                warn!(
                    %platform,
                    theme = %theme.name,
                    name = *entry.key(),
                    logical_name = %record.logical_name,
                    "identifier collision, keeping last value"
                );
                entry.insert(value);
            }
            Entry::Vacant(entry) => {
                entry.insert(value);
            }
        }
    }

    out
}

/// Escape a value for a double-quoted string literal.
///
/// `interpolates_dollar` is set for languages where `$` starts string
/// interpolation (Kotlin, Dart).
fn escape_literal(value: &str, interpolates_dollar: bool) -> String {
    let mut out = String::with_capacity(value.len());
    for ch in value.chars() {
        match ch {
            '\\' => out.push_str("\\\\"),
            '"' => out.push_str("\\\""),
            '\n' => out.push_str("\\n"),
            '\r' => out.push_str("\\r"),
            '\t' => out.push_str("\\t"),
            '$' if interpolates_dollar => out.push_str("\\$"),
            ch => out.push(ch),
        }
    }
    out
}

#[cfg(test)]
pub(crate) mod test_support {
    use tokenforge_core::{Scalar, Theme, TokenRecord};

    /// Theme `BrandA` from document `design-tokens` with string values.
    pub fn theme(records: &[(&str, &str)]) -> Theme {
        Theme {
            name: "BrandA".to_string(),
            brand_key: "BrandA".to_string(),
            source: "design-tokens".to_string(),
            records: records
                .iter()
                .map(|(name, value)| TokenRecord::new("BrandA", *name, Scalar::from(*value)))
                .collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tokenforge_io::MemoryStore;

    #[test]
    fn test_escape_literal() {
        assert_eq!(escape_literal(r#"a"b\c"#, false), r#"a\"b\\c"#);
        assert_eq!(escape_literal("$x", false), "$x");
        assert_eq!(escape_literal("$x", true), "\\$x");
        assert_eq!(escape_literal("a\nb", false), "a\\nb");
    }

    #[test]
    fn test_declarations_collision_keeps_first_position_last_value() {
        let theme = test_support::theme(&[("A-B", "1"), ("Other", "2"), ("A_B", "3")]);
        let decls = declarations(
            Platform::Android,
            &theme,
            |r| r.constant_name.as_str(),
            |v| v.to_string(),
        );

        let entries: Vec<_> = decls.iter().map(|(k, v)| (*k, v.as_str())).collect();
        assert_eq!(entries, vec![("BRAND_A_A_B", "3"), ("BRAND_A_OTHER", "2")]);
    }

    #[test]
    fn test_generator_for_every_platform() {
        let layout = OutputLayout::default();
        let theme = test_support::theme(&[("Text", "black")]);
        let store = MemoryStore::new();

        for platform in Platform::ALL {
            let generator = generator_for(platform, &layout, MergePolicy::Retain).unwrap();
            assert_eq!(generator.platform(), platform);

            let files = generator.generate(&theme, &store).unwrap();
            assert!(!files.is_empty());
            for file in files {
                assert!(file.path.starts_with(layout.dir(platform)));
            }
        }
    }
}
