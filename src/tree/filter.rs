//! Directory exclusion by exact name

use std::collections::BTreeSet;

use super::config::DEFAULT_EXCLUDED_DIRS;

/// Set of directory names to leave out of the tree, subtrees included.
///
/// Matching is exact and case-sensitive against an entry's base name.
/// Only directories are tested; a file with an excluded name is still listed.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ExclusionSet(BTreeSet<String>);

impl ExclusionSet {
    pub fn new() -> Self {
        Self(BTreeSet::new())
    }

    /// The built-in list of VCS, dependency and build directories.
    pub fn defaults() -> Self {
        DEFAULT_EXCLUDED_DIRS.iter().copied().collect()
    }

    pub fn insert(&mut self, name: impl Into<String>) -> bool {
        self.0.insert(name.into())
    }

    /// Add every non-empty item of a comma-separated list.
    pub fn extend_from_list(&mut self, list: &str) {
        for name in list.split(',').map(str::trim).filter(|n| !n.is_empty()) {
            self.insert(name);
        }
    }

    pub fn contains(&self, name: &str) -> bool {
        self.0.contains(name)
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.0.iter().map(String::as_str)
    }
}

impl<S: Into<String>> FromIterator<S> for ExclusionSet {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        Self(iter.into_iter().map(Into::into).collect())
    }
}
