//! projtree - write a plain-text tree view of a project directory

pub mod error;
pub mod output;
pub mod tree;

#[cfg(any(test, feature = "test-utils"))]
pub mod test_utils;

pub use error::{TreeError, TreeResult};
pub use output::{
    DEFAULT_OUTPUT_FILE, PlainOutput, render_to_string, render_tree, write_report, write_report_file,
};
pub use tree::{
    DEFAULT_EXCLUDED_DIRS, DEFAULT_MAX_DEPTH, Entry, EntryKind, ExclusionSet, RenderConfig,
    RenderSummary, TreeOutput, TreeRenderer, UnreadablePolicy,
};
