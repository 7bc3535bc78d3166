//! TreeRenderer - depth-first walk that streams one line per entry
//!
//! The walk keeps its pending entries on an explicit stack instead of
//! recursing, so pathological nesting (symlink cycles included) ends in a
//! `DepthExceeded` error rather than a stack overflow.

use std::path::Path;

use tracing::{debug, trace, warn};

use crate::error::{TreeError, TreeResult};

use super::config::{RenderConfig, UnreadablePolicy};
use super::entry::{Entry, ensure_directory, read_entries};

/// Continuation written under a sibling that has more siblings after it.
pub const PIPE_INDENT: &str = "│   ";
/// Continuation written under the last sibling.
pub const SPACE_INDENT: &str = "    ";

/// Receives entries in display order.
pub trait TreeOutput {
    /// Emit one entry. `prefix` is the accumulated indentation for its level.
    fn output_entry(&mut self, entry: &Entry, is_last: bool, prefix: &str) -> std::io::Result<()>;
}

/// Counts gathered during a render.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RenderSummary {
    pub directories: usize,
    pub files: usize,
    /// Directories whose contents were left out under `UnreadablePolicy::Skip`.
    pub skipped: usize,
}

/// An entry waiting on the work stack.
#[derive(Debug)]
struct PendingEntry {
    entry: Entry,
    is_last: bool,
    prefix: String,
    depth: usize,
}

/// Prefix for the children of an entry printed with `prefix`.
pub fn child_prefix(prefix: &str, is_last: bool) -> String {
    if is_last {
        format!("{}{}", prefix, SPACE_INDENT)
    } else {
        format!("{}{}", prefix, PIPE_INDENT)
    }
}

pub struct TreeRenderer {
    config: RenderConfig,
}

impl TreeRenderer {
    pub fn new(config: RenderConfig) -> Self {
        Self { config }
    }

    /// Walk `root` and hand every visible entry to `output`.
    ///
    /// The root itself is not emitted. Errors on the root always propagate;
    /// errors below it follow `RenderConfig::on_unreadable`.
    pub fn render<O: TreeOutput>(&self, root: &Path, output: &mut O) -> TreeResult<RenderSummary> {
        ensure_directory(root)?;

        let mut summary = RenderSummary::default();
        let mut stack = Vec::new();

        let children = self.visible_children(root)?;
        self.push_children(&mut stack, root, children, &self.config.prefix, 1)?;

        while let Some(item) = stack.pop() {
            output
                .output_entry(&item.entry, item.is_last, &item.prefix)
                .map_err(TreeError::Write)?;

            if !item.entry.is_dir() {
                summary.files += 1;
                continue;
            }
            summary.directories += 1;

            let children = match self.visible_children(&item.entry.path) {
                Ok(children) => children,
                Err(TreeError::PermissionDenied(path))
                    if self.config.on_unreadable == UnreadablePolicy::Skip =>
                {
                    warn!(path = %path.display(), "skipping unreadable directory");
                    summary.skipped += 1;
                    continue;
                }
                Err(e) => return Err(e),
            };

            let prefix = child_prefix(&item.prefix, item.is_last);
            self.push_children(&mut stack, &item.entry.path, children, &prefix, item.depth + 1)?;
        }

        Ok(summary)
    }

    /// Sorted children of `dir` with excluded directories removed.
    fn visible_children(&self, dir: &Path) -> TreeResult<Vec<Entry>> {
        let entries = read_entries(dir)?;
        debug!(dir = %dir.display(), count = entries.len(), "listed directory");

        Ok(entries
            .into_iter()
            .filter(|entry| {
                let excluded = entry.is_dir() && self.config.excluded.contains(&entry.name);
                if excluded {
                    trace!(path = %entry.path.display(), "excluded directory");
                }
                !excluded
            })
            .collect())
    }

    /// Push `children` so the first one is popped first. Lastness is decided
    /// on the filtered list, so the final emitted sibling always closes the level.
    fn push_children(
        &self,
        stack: &mut Vec<PendingEntry>,
        parent: &Path,
        children: Vec<Entry>,
        prefix: &str,
        depth: usize,
    ) -> TreeResult<()> {
        if children.is_empty() {
            return Ok(());
        }
        if depth > self.config.max_depth {
            return Err(TreeError::DepthExceeded {
                path: parent.to_path_buf(),
                limit: self.config.max_depth,
            });
        }

        let last = children.len() - 1;
        stack.extend(
            children
                .into_iter()
                .enumerate()
                .rev()
                .map(|(i, entry)| PendingEntry {
                    entry,
                    is_last: i == last,
                    prefix: prefix.to_string(),
                    depth,
                }),
        );
        Ok(())
    }
}
