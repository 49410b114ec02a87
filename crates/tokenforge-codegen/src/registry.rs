//! Persistent state behind the web theme files.
//!
//! Web output is merge-forward: a run adds and overwrites entries but never
//! drops names produced by earlier runs unless asked to. The registry is the
//! source of truth for that union, and the CSS and TypeScript files are
//! rendered purely from it.

use std::collections::BTreeMap;
use std::path::Path;

use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Serialize};
use tokenforge_core::Theme;

use crate::error::{CodegenError, Result};

/// Newest registry format this crate reads and the one it writes.
pub const REGISTRY_VERSION: u32 = 1;

static LEGACY_CSS_VAR: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?i)--([a-z0-9\-]+)\s*:\s*([^;]+);").expect("valid CSS variable pattern")
});

static LEGACY_TS_CONST: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r#"export const\s+([A-Za-z0-9_]+)\s*=\s*["'`]([^"'`]+)["'`];"#)
        .expect("valid TS constant pattern")
});

/// What happens to entries from earlier runs that the current run did not
/// produce.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum MergePolicy {
    /// Keep them.
    #[default]
    Retain,
    /// Drop them.
    Prune,
}

/// Accumulated web entries of one theme.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TokenRegistry {
    pub version: u32,
    pub theme: String,
    /// CSS custom property name (without `--`) to value.
    #[serde(default)]
    pub css_vars: BTreeMap<String, String>,
    /// TypeScript constant name to value.
    #[serde(default)]
    pub constants: BTreeMap<String, String>,
}

#[derive(Deserialize)]
struct VersionHeader {
    version: u32,
}

impl TokenRegistry {
    /// Create an empty registry for a theme.
    pub fn new(theme: impl Into<String>) -> Self {
        Self {
            version: REGISTRY_VERSION,
            theme: theme.into(),
            css_vars: BTreeMap::new(),
            constants: BTreeMap::new(),
        }
    }

    /// Parse a stored registry. `path` is only used for error reporting.
    pub fn from_json(path: &Path, text: &str) -> Result<Self> {
        let invalid = |source| CodegenError::InvalidRegistry {
            path: path.to_path_buf(),
            source,
        };

        let header: VersionHeader = serde_json::from_str(text).map_err(invalid)?;
        if header.version > REGISTRY_VERSION {
            return Err(CodegenError::UnsupportedRegistryVersion {
                path: path.to_path_buf(),
                found: header.version,
                supported: REGISTRY_VERSION,
            });
        }

        serde_json::from_str(text).map_err(invalid)
    }

    /// Rebuild a registry from theme files written before registries existed.
    pub fn from_legacy(theme: impl Into<String>, css: Option<&str>, ts: Option<&str>) -> Self {
        let mut registry = Self::new(theme);

        if let Some(css) = css {
            for caps in LEGACY_CSS_VAR.captures_iter(css) {
                registry
                    .css_vars
                    .insert(caps[1].to_string(), caps[2].trim().to_string());
            }
        }
        if let Some(ts) = ts {
            for caps in LEGACY_TS_CONST.captures_iter(ts) {
                registry
                    .constants
                    .insert(caps[1].to_string(), caps[2].to_string());
            }
        }

        registry
    }

    /// Fold the current run's records into the registry.
    ///
    /// Current names overwrite earlier values. Later records of the same
    /// theme win over earlier ones.
    pub fn merge(&mut self, theme: &Theme, policy: MergePolicy) {
        if policy == MergePolicy::Prune {
            self.css_vars.clear();
            self.constants.clear();
        }

        self.version = REGISTRY_VERSION;
        self.theme = theme.name.clone();

        for record in &theme.records {
            let value = record.value.to_literal();
            self.css_vars.insert(record.css_var.clone(), value.clone());
            self.constants.insert(record.identifier_name.clone(), value);
        }
    }

    /// Serialize for storage.
    pub fn to_json(&self) -> Result<String> {
        let mut text = serde_json::to_string_pretty(self)?;
        text.push('\n');
        Ok(text)
    }

    pub fn is_empty(&self) -> bool {
        self.css_vars.is_empty() && self.constants.is_empty()
    }
}
