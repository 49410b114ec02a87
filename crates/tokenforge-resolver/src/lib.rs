//! Token resolution for tokenforge documents.
//!
//! This crate turns a parsed token document into themes:
//! - Collection detection (which top-level keys are primitives and brands)
//! - Primitive flattening (`Color/blue/500` paths from the base mode)
//! - Alias resolution (`{Color/blue/500}` -> `#1E40AF`, one hop)
//! - Brand tree traversal into token records

mod alias;
mod collections;
mod flatten;
mod walker;

pub use alias::{alias_target, resolve_alias};
pub use collections::{CollectionRules, CollectionSelection, CollectionStrategy};
pub use flatten::{flatten_base_mode, flatten_primitives};
pub use walker::TreeWalker;

use tokenforge_core::{DocumentError, Theme, TokenValue};
use tracing::info;

/// Result of compiling one token document.
#[derive(Debug, Clone)]
pub struct CompiledDocument {
    pub source: String,
    pub selection: CollectionSelection,
    /// Number of flattened primitives in the base mode.
    pub primitive_count: usize,
    pub themes: Vec<Theme>,
}

/// Resolve every brand of a document into a theme.
///
/// `source` names the document (its file stem) and prefixes theme names
/// when the document defines more than one brand.
pub fn compile_document(
    source: &str,
    document: &TokenValue,
    rules: &CollectionRules,
) -> Result<CompiledDocument, DocumentError> {
    if document.as_node().is_none() {
        return Err(DocumentError::NotAMapping);
    }

    let selection = rules.resolve(document)?;
    info!(
        source,
        primitive = %selection.primitive,
        primitive_via = %selection.primitive_strategy,
        component = %selection.component,
        component_via = %selection.component_strategy,
        "resolved collections"
    );

    let primitive_collection = document
        .get(&selection.primitive)
        .ok_or_else(|| DocumentError::InvalidCollection {
            collection: selection.primitive.clone(),
        })?;
    let primitives = flatten_base_mode(&selection.primitive, primitive_collection)?;

    let brands = document
        .get(&selection.component)
        .and_then(TokenValue::as_node)
        .ok_or_else(|| DocumentError::InvalidCollection {
            collection: selection.component.clone(),
        })?;
    info!(source, count = brands.len(), "found brands");

    let walker = TreeWalker::new(&primitives);
    let themes = brands
        .iter()
        .map(|(brand_key, tree)| Theme {
            name: Theme::name_for(source, brand_key, brands.len()),
            brand_key: brand_key.clone(),
            source: source.to_string(),
            records: walker.walk(brand_key, tree),
        })
        .collect();

    Ok(CompiledDocument {
        source: source.to_string(),
        primitive_count: primitives.len(),
        selection,
        themes,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use tokenforge_core::{ConfigError, Scalar};

    #[test]
    fn test_compile_single_brand() {
        let document: TokenValue = json!({
            "Color": {"Mode1": {"blue": {"500": "#1E40AF"}}},
            "Components": {"BrandA": {"Button": {"Background": "{Color/blue/500}"}}}
        })
        .into();

        let compiled = compile_document("design-tokens", &document, &CollectionRules::default()).unwrap();

        assert_eq!(compiled.selection.primitive, "Color");
        assert_eq!(compiled.selection.component, "Components");
        assert_eq!(compiled.primitive_count, 1);
        assert_eq!(compiled.themes.len(), 1);

        let theme = &compiled.themes[0];
        assert_eq!(theme.name, "BrandA");
        assert_eq!(theme.records[0].value, Scalar::from("#1E40AF"));
    }

    #[test]
    fn test_css_var_prefix_ignores_collection_name() {
        let document: TokenValue = json!({
            "Primitives": {"Base": {"ink": "#000"}},
            "Brands": {"BrandA": {"Text": "{ink}"}}
        })
        .into();

        let compiled = compile_document("tokens", &document, &CollectionRules::default()).unwrap();
        let record = &compiled.themes[0].records[0];

        assert_eq!(compiled.selection.component, "Brands");
        assert_eq!(record.css_var, "component-tokens-brand-a-text");
        assert_eq!(record.value, Scalar::from("#000"));
    }

    #[test]
    fn test_compile_unresolved_alias() {
        let document: TokenValue = json!({
            "Color": {"Mode1": {"blue": {"500": "#1E40AF"}}},
            "Brand": {"BrandA": {"Button": {"Background": "{Color/missing}"}}}
        })
        .into();

        let compiled = compile_document("tokens", &document, &CollectionRules::default()).unwrap();
        assert_eq!(compiled.themes[0].records[0].value, Scalar::from("{Color/missing}"));
    }

    #[test]
    fn test_compile_multiple_brands_prefixes_source() {
        let document: TokenValue = json!({
            "Primitive Tokens": {"Mode 1": {"red": "#f00"}},
            "Component Tokens": {
                "BrandA": {"Text": "{red}"},
                "Brand B": {"Text": "#000"}
            }
        })
        .into();

        let compiled = compile_document("marketing", &document, &CollectionRules::default()).unwrap();
        let slugs: Vec<String> = compiled.themes.iter().map(Theme::slug).collect();

        assert_eq!(slugs, vec!["marketing-brand-a", "marketing-brand-b"]);
    }

    #[test]
    fn test_compile_rejects_bad_documents() {
        let rules = CollectionRules::default();

        let scalar: TokenValue = json!([1, 2]).into();
        assert!(matches!(
            compile_document("x", &scalar, &rules),
            Err(DocumentError::NotAMapping)
        ));

        let single: TokenValue = json!({"Primitives": {"Mode": {}}}).into();
        assert!(matches!(
            compile_document("x", &single, &rules),
            Err(DocumentError::Collections(ConfigError::UnresolvedCollections { .. }))
        ));

        let no_modes: TokenValue = json!({"Primitives": {}, "Brands": {}}).into();
        assert!(matches!(
            compile_document("x", &no_modes, &rules),
            Err(DocumentError::NoPrimitiveModes { .. })
        ));

        let flat_brands: TokenValue = json!({"Primitives": {"Mode": {}}, "Brands": "none"}).into();
        assert!(matches!(
            compile_document("x", &flat_brands, &rules),
            Err(DocumentError::InvalidCollection { .. })
        ));
    }
}
