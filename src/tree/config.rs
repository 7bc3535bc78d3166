//! Configuration types for the tree renderer

use super::filter::ExclusionSet;

/// Directory names skipped when the caller does not supply its own list.
pub const DEFAULT_EXCLUDED_DIRS: &[&str] = &[
    "node_modules",
    "__pycache__",
    ".git",
    ".husky",
    ".vscode",
    "dist",
    "migrations",
];

/// Nesting limit applied when none is configured.
pub const DEFAULT_MAX_DEPTH: usize = 256;

/// What to do when a subdirectory below the root cannot be listed.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum UnreadablePolicy {
    /// Stop the whole traversal with a `PermissionDenied` error.
    #[default]
    Abort,
    /// Keep the directory's own line, emit nothing under it, continue with siblings.
    Skip,
}

/// Configuration for tree rendering.
#[derive(Debug, Clone)]
pub struct RenderConfig {
    /// Prefix written before every line of the top level.
    pub prefix: String,
    pub excluded: ExclusionSet,
    /// Deepest nesting level that may be emitted; root children are level 1.
    pub max_depth: usize,
    pub on_unreadable: UnreadablePolicy,
}

impl RenderConfig {
    /// A config that excludes nothing.
    pub fn without_exclusions() -> Self {
        Self {
            excluded: ExclusionSet::new(),
            ..Default::default()
        }
    }

    pub fn with_prefix(mut self, prefix: impl Into<String>) -> Self {
        self.prefix = prefix.into();
        self
    }

    pub fn with_excluded(mut self, excluded: ExclusionSet) -> Self {
        self.excluded = excluded;
        self
    }

    pub fn with_max_depth(mut self, max_depth: usize) -> Self {
        self.max_depth = max_depth;
        self
    }

    pub fn with_unreadable_policy(mut self, policy: UnreadablePolicy) -> Self {
        self.on_unreadable = policy;
        self
    }
}

impl Default for RenderConfig {
    fn default() -> Self {
        Self {
            prefix: String::new(),
            excluded: ExclusionSet::defaults(),
            max_depth: DEFAULT_MAX_DEPTH,
            on_unreadable: UnreadablePolicy::Abort,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config_uses_default_exclusions() {
        let config = RenderConfig::default();
        assert!(config.prefix.is_empty());
        assert_eq!(config.max_depth, DEFAULT_MAX_DEPTH);
        assert_eq!(config.on_unreadable, UnreadablePolicy::Abort);
        for name in DEFAULT_EXCLUDED_DIRS {
            assert!(config.excluded.contains(name), "{name} should be excluded");
        }
    }

    #[test]
    fn builders_override_fields() {
        let config = RenderConfig::without_exclusions()
            .with_prefix("  ")
            .with_max_depth(3)
            .with_unreadable_policy(UnreadablePolicy::Skip);
        assert!(config.excluded.is_empty());
        assert_eq!(config.prefix, "  ");
        assert_eq!(config.max_depth, 3);
        assert_eq!(config.on_unreadable, UnreadablePolicy::Skip);
    }
}
