//! Brand tree traversal.

use tokenforge_core::{PrimitiveMap, TokenRecord, TokenValue, LOGICAL_NAME_SEPARATOR};

use crate::alias::resolve_alias;

/// Walks brand trees into token records, resolving aliases against one
/// document's primitives.
pub struct TreeWalker<'a> {
    primitives: &'a PrimitiveMap,
}

impl<'a> TreeWalker<'a> {
    pub fn new(primitives: &'a PrimitiveMap) -> Self {
        Self { primitives }
    }

    /// Collect one record per non-null leaf of `tree`, in document order.
    ///
    /// Null leaves mark intentional non-overrides and produce nothing.
    pub fn walk(&self, brand_key: &str, tree: &TokenValue) -> Vec<TokenRecord> {
        tree.leaves()
            .filter_map(|(segments, raw)| {
                let value = resolve_alias(raw, self.primitives);
                if value.is_null() {
                    return None;
                }
                Some(TokenRecord::new(
                    brand_key,
                    segments.join(LOGICAL_NAME_SEPARATOR),
                    value.clone(),
                ))
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use tokenforge_core::Scalar;

    fn primitives() -> PrimitiveMap {
        [("Color/blue/500".to_string(), Scalar::from("#1E40AF"))]
            .into_iter()
            .collect()
    }

    #[test]
    fn test_walk_resolves_and_names() {
        let primitives = primitives();
        let walker = TreeWalker::new(&primitives);
        let tree: TokenValue = json!({
            "Button": {
                "Background": "{Color/blue/500}",
                "Radius": 4
            }
        })
        .into();

        let records = walker.walk("BrandA", &tree);

        assert_eq!(records.len(), 2);
        assert_eq!(records[0].logical_name, "Button-Background");
        assert_eq!(records[0].value, Scalar::from("#1E40AF"));
        assert_eq!(records[0].css_var, "component-tokens-brand-a-button-background");
        assert_eq!(records[0].identifier_name, "brandaButtonBackground");
        assert_eq!(records[1].logical_name, "Button-Radius");
        assert_eq!(records[1].value, Scalar::from(4));
    }

    #[test]
    fn test_walk_skips_null_leaves() {
        let primitives = primitives();
        let walker = TreeWalker::new(&primitives);
        let tree: TokenValue = json!({
            "Button": {"Background": null, "Border": "{Color/missing}"},
            "Link": null
        })
        .into();

        let records = walker.walk("BrandB", &tree);

        assert_eq!(records.len(), 1);
        assert_eq!(records[0].logical_name, "Button-Border");
        assert_eq!(records[0].value, Scalar::from("{Color/missing}"));
    }

    #[test]
    fn test_walk_preserves_document_order() {
        let primitives = PrimitiveMap::new();
        let walker = TreeWalker::new(&primitives);
        let tree: TokenValue = json!({"z": 1, "a": {"y": 2, "b": 3}, "m": 4}).into();

        let names: Vec<String> = walker
            .walk("X", &tree)
            .into_iter()
            .map(|record| record.logical_name)
            .collect();

        assert_eq!(names, vec!["z", "a-y", "a-b", "m"]);
    }
}
