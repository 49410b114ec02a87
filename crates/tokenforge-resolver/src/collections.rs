//! Collection detection.
//!
//! Decides which top-level keys of a token document hold the primitives and
//! which hold the component/brand overrides. Detection is an ordered list of
//! strategies per side; the first strategy that picks a key wins.

use std::fmt;

use tokenforge_core::{ConfigError, TokenValue};
use tracing::warn;

/// One way of picking a collection key.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CollectionStrategy {
    /// Use this key if the document has it.
    Explicit(String),
    /// First key containing this text, ignoring case.
    NameContains(String),
    /// First key in document order that is still available.
    Positional,
}

impl CollectionStrategy {
    /// Pick a key from `keys`, never returning `taken`.
    fn pick<'k>(&self, keys: &[&'k str], taken: Option<&str>) -> Option<&'k str> {
        let mut available = keys.iter().copied().filter(|key| Some(*key) != taken);

        match self {
            CollectionStrategy::Explicit(name) => available.find(|key| *key == name.as_str()),
            CollectionStrategy::NameContains(pattern) => {
                let pattern = pattern.to_lowercase();
                available.find(|key| key.to_lowercase().contains(&pattern))
            }
            CollectionStrategy::Positional => available.next(),
        }
    }
}

impl fmt::Display for CollectionStrategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CollectionStrategy::Explicit(name) => write!(f, "explicit override '{name}'"),
            CollectionStrategy::NameContains(pattern) => write!(f, "name contains '{pattern}'"),
            CollectionStrategy::Positional => f.write_str("position"),
        }
    }
}

/// Ordered strategies for both collections.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CollectionRules {
    pub primitive: Vec<CollectionStrategy>,
    pub component: Vec<CollectionStrategy>,
}

impl Default for CollectionRules {
    fn default() -> Self {
        Self {
            primitive: vec![
                CollectionStrategy::NameContains("primitive".to_string()),
                CollectionStrategy::NameContains("base".to_string()),
                CollectionStrategy::Positional,
            ],
            component: vec![
                CollectionStrategy::NameContains("component".to_string()),
                CollectionStrategy::NameContains("brand".to_string()),
                CollectionStrategy::Positional,
            ],
        }
    }
}

/// The keys picked for a document and how they were picked.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CollectionSelection {
    pub primitive: String,
    pub primitive_strategy: CollectionStrategy,
    pub component: String,
    pub component_strategy: CollectionStrategy,
}

impl CollectionRules {
    /// Prepend explicit overrides, if any, ahead of the existing strategies.
    pub fn with_overrides(mut self, primitive: Option<String>, component: Option<String>) -> Self {
        if let Some(name) = primitive.filter(|name| !name.is_empty()) {
            self.primitive.insert(0, CollectionStrategy::Explicit(name));
        }
        if let Some(name) = component.filter(|name| !name.is_empty()) {
            self.component.insert(0, CollectionStrategy::Explicit(name));
        }
        self
    }

    /// Resolve the collections of a document.
    pub fn resolve(&self, document: &TokenValue) -> Result<CollectionSelection, ConfigError> {
        let keys: Vec<&str> = document.keys().collect();
        self.resolve_keys(&keys)
    }

    /// Resolve the collections given the document's top-level keys in order.
    pub fn resolve_keys(&self, keys: &[&str]) -> Result<CollectionSelection, ConfigError> {
        let primitive = first_pick(&self.primitive, keys, None);
        let component = primitive
            .as_ref()
            .and_then(|(key, _)| first_pick(&self.component, keys, Some(*key)));

        match (primitive, component) {
            (Some((primitive, primitive_strategy)), Some((component, component_strategy))) => {
                Ok(CollectionSelection {
                    primitive: primitive.to_string(),
                    primitive_strategy,
                    component: component.to_string(),
                    component_strategy,
                })
            }
            (primitive, _) => Err(ConfigError::UnresolvedCollections {
                primitive: primitive.map(|(key, _)| key.to_string()),
                component: None,
                keys: keys.iter().map(|key| key.to_string()).collect(),
            }),
        }
    }
}

fn first_pick<'k>(
    strategies: &[CollectionStrategy],
    keys: &[&'k str],
    taken: Option<&str>,
) -> Option<(&'k str, CollectionStrategy)> {
    strategies.iter().find_map(|strategy| {
        let picked = strategy.pick(keys, taken);
        if picked.is_none() {
            if let CollectionStrategy::Explicit(name) = strategy {
                warn!(collection = %name, "explicit collection override does not name an available key");
            }
        }
        picked.map(|key| (key, strategy.clone()))
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_name_heuristics() {
        let rules = CollectionRules::default();
        let selection = rules
            .resolve_keys(&["Component Tokens", "Primitive Tokens"])
            .unwrap();

        assert_eq!(selection.primitive, "Primitive Tokens");
        assert_eq!(selection.component, "Component Tokens");
        assert_eq!(
            selection.primitive_strategy,
            CollectionStrategy::NameContains("primitive".to_string())
        );
    }

    #[test]
    fn test_heuristics_ignore_case_and_order() {
        let rules = CollectionRules::default();
        let selection = rules.resolve_keys(&["BRANDS", "base palette"]).unwrap();

        assert_eq!(selection.primitive, "base palette");
        assert_eq!(selection.component, "BRANDS");
    }

    #[test]
    fn test_primitive_pattern_beats_base_pattern() {
        let rules = CollectionRules::default();
        let selection = rules
            .resolve_keys(&["Base", "Primitives", "Brand"])
            .unwrap();

        assert_eq!(selection.primitive, "Primitives");
        assert_eq!(selection.component, "Brand");
    }

    #[test]
    fn test_positional_fallback() {
        let rules = CollectionRules::default();
        let selection = rules.resolve_keys(&["colors", "themes", "extra"]).unwrap();

        assert_eq!(selection.primitive, "colors");
        assert_eq!(selection.primitive_strategy, CollectionStrategy::Positional);
        assert_eq!(selection.component, "themes");
        assert_eq!(selection.component_strategy, CollectionStrategy::Positional);
    }

    #[test]
    fn test_component_never_reuses_primitive_key() {
        let rules = CollectionRules::default();
        let selection = rules
            .resolve_keys(&["Primitive Component Tokens", "Other"])
            .unwrap();

        assert_eq!(selection.primitive, "Primitive Component Tokens");
        assert_eq!(selection.component, "Other");
    }

    #[test]
    fn test_overrides_win() {
        let rules = CollectionRules::default()
            .with_overrides(Some("tokens".to_string()), Some("Primitive".to_string()));
        let selection = rules.resolve_keys(&["Primitive", "tokens"]).unwrap();

        assert_eq!(selection.primitive, "tokens");
        assert_eq!(selection.component, "Primitive");
        assert_eq!(
            selection.component_strategy,
            CollectionStrategy::Explicit("Primitive".to_string())
        );
    }

    #[test]
    fn test_missing_override_falls_through() {
        let rules = CollectionRules::default().with_overrides(Some("nope".to_string()), None);
        let selection = rules.resolve_keys(&["Primitives", "Brands"]).unwrap();

        assert_eq!(selection.primitive, "Primitives");
    }

    #[test]
    fn test_empty_override_is_ignored() {
        let rules = CollectionRules::default().with_overrides(Some(String::new()), None);
        assert_eq!(rules, CollectionRules::default());
    }

    #[test]
    fn test_single_key_fails() {
        let rules = CollectionRules::default();
        let err = rules.resolve_keys(&["Primitives"]).unwrap_err();

        match err {
            ConfigError::UnresolvedCollections { primitive, component, keys } => {
                assert_eq!(primitive.as_deref(), Some("Primitives"));
                assert!(component.is_none());
                assert_eq!(keys, vec!["Primitives".to_string()]);
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn test_empty_document_fails() {
        let rules = CollectionRules::default();
        assert!(rules.resolve(&TokenValue::default()).is_err());
    }
}
