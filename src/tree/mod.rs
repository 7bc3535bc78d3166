//! Directory tree walking logic
//!
//! `TreeRenderer` walks a directory depth-first and streams each visible
//! entry to a `TreeOutput`, using O(depth) memory for pending siblings.

mod config;
mod entry;
mod filter;
mod renderer;

pub use config::{DEFAULT_EXCLUDED_DIRS, DEFAULT_MAX_DEPTH, RenderConfig, UnreadablePolicy};
pub use entry::{Entry, EntryKind, ensure_directory, read_entries};
pub use filter::ExclusionSet;
pub use renderer::{PIPE_INDENT, RenderSummary, SPACE_INDENT, TreeOutput, TreeRenderer, child_prefix};
