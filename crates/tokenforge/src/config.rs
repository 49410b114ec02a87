//! Run configuration.

use std::path::PathBuf;

use tokenforge_codegen::MergePolicy;
use tokenforge_core::PlatformSelection;
use tokenforge_io::OutputLayout;
use tokenforge_resolver::CollectionRules;

/// Default location of the token documents.
pub const DEFAULT_TOKEN_SOURCE: &str = "tokens";

/// Everything a run needs besides the artifact store.
#[derive(Debug, Clone)]
pub struct CompilerConfig {
    /// A token document or a directory of them.
    pub tokens: PathBuf,
    pub rules: CollectionRules,
    pub platforms: PlatformSelection,
    pub layout: OutputLayout,
    pub merge_policy: MergePolicy,
}

impl Default for CompilerConfig {
    fn default() -> Self {
        Self {
            tokens: PathBuf::from(DEFAULT_TOKEN_SOURCE),
            rules: CollectionRules::default(),
            platforms: PlatformSelection::default(),
            layout: OutputLayout::default(),
            merge_policy: MergePolicy::default(),
        }
    }
}

impl CompilerConfig {
    pub fn new(tokens: impl Into<PathBuf>) -> Self {
        Self {
            tokens: tokens.into(),
            ..Self::default()
        }
    }

    pub fn with_platforms(mut self, platforms: PlatformSelection) -> Self {
        self.platforms = platforms;
        self
    }

    pub fn with_rules(mut self, rules: CollectionRules) -> Self {
        self.rules = rules;
        self
    }

    pub fn with_layout(mut self, layout: OutputLayout) -> Self {
        self.layout = layout;
        self
    }

    pub fn with_merge_policy(mut self, policy: MergePolicy) -> Self {
        self.merge_policy = policy;
        self
    }
}
