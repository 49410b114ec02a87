//! Token system types.

use indexmap::IndexMap;

use crate::naming::{camel_case, kebab_case, pascal_case, snake_case, upper_snake_case};
use crate::value::{Scalar, TokenValue};

/// Separator between segments of a primitive path (`Color/blue/500`).
pub const PRIMITIVE_PATH_SEPARATOR: &str = "/";

/// Separator between segments of a logical token name (`Button-Background`).
pub const LOGICAL_NAME_SEPARATOR: &str = "-";

/// Leading segment of every CSS custom property, whatever the component
/// collection is called in the document.
pub const CSS_VAR_PREFIX: &str = "component-tokens";

/// Flat map of slash-joined primitive paths to literal values.
///
/// Built once per document and read-only afterwards.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PrimitiveMap {
    entries: IndexMap<String, Scalar>,
}

impl PrimitiveMap {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert a primitive, returning the value it replaced.
    pub fn insert(&mut self, path: impl Into<String>, value: Scalar) -> Option<Scalar> {
        self.entries.insert(path.into(), value)
    }

    /// Get a primitive by its slash-joined path.
    pub fn get(&self, path: &str) -> Option<&Scalar> {
        self.entries.get(path)
    }

    /// Check if a primitive exists.
    pub fn contains(&self, path: &str) -> bool {
        self.entries.contains_key(path)
    }

    /// Iterate over all primitives in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = (&String, &Scalar)> {
        self.entries.iter()
    }

    /// Number of primitives in the map.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Check if the map is empty.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// View the map as a one-level token document.
    pub fn to_document(&self) -> TokenValue {
        self.entries
            .iter()
            .map(|(path, value)| (path.clone(), TokenValue::Leaf(value.clone())))
            .collect()
    }
}

impl FromIterator<(String, Scalar)> for PrimitiveMap {
    fn from_iter<I: IntoIterator<Item = (String, Scalar)>>(iter: I) -> Self {
        Self {
            entries: iter.into_iter().collect(),
        }
    }
}

/// One resolved leaf of a brand tree, with every platform identifier
/// precomputed.
#[derive(Debug, Clone, PartialEq)]
pub struct TokenRecord {
    pub brand_key: String,
    /// Tree keys from the brand root to the leaf, joined by `-`.
    pub logical_name: String,
    /// CSS custom property name, without the leading `--`.
    pub css_var: String,
    /// camelCase name used by the web constants module, iOS, and Flutter.
    pub identifier_name: String,
    /// UPPER_SNAKE_CASE name used by Android.
    pub constant_name: String,
    pub value: Scalar,
}

impl TokenRecord {
    /// Build a record for a leaf of `brand_key`.
    pub fn new(brand_key: &str, logical_name: impl Into<String>, value: Scalar) -> Self {
        let logical_name = logical_name.into();
        let scoped = format!("{brand_key}{LOGICAL_NAME_SEPARATOR}{logical_name}");

        Self {
            brand_key: brand_key.to_string(),
            css_var: format!(
                "{CSS_VAR_PREFIX}{LOGICAL_NAME_SEPARATOR}{}{LOGICAL_NAME_SEPARATOR}{}",
                kebab_case(brand_key),
                kebab_case(&logical_name)
            ),
            identifier_name: camel_case(&scoped),
            constant_name: upper_snake_case(&scoped),
            logical_name,
            value,
        }
    }
}

/// The resolved tokens of one brand, grouped under a theme name.
#[derive(Debug, Clone, PartialEq)]
pub struct Theme {
    pub name: String,
    pub brand_key: String,
    /// Name of the document the theme was compiled from.
    pub source: String,
    pub records: Vec<TokenRecord>,
}

impl Theme {
    /// Theme name for `brand_key` of a document that defines `brand_count` brands.
    pub fn name_for(source: &str, brand_key: &str, brand_count: usize) -> String {
        if brand_count > 1 {
            format!("{source}{LOGICAL_NAME_SEPARATOR}{brand_key}")
        } else {
            brand_key.to_string()
        }
    }

    /// kebab-case slug used by web file names and the `data-theme` selector.
    pub fn slug(&self) -> String {
        kebab_case(&self.name)
    }

    /// snake_case stem used by Android and Flutter file names.
    pub fn file_stem(&self) -> String {
        snake_case(&self.name)
    }

    /// PascalCase name used for generated types.
    pub fn type_name(&self) -> String {
        pascal_case(&self.name)
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}
