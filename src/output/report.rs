//! Complete tree report: header line, blank line, tree body
//!
//! The file variant validates the root before creating anything and flushes
//! its buffer on every exit path, so an aborted walk still leaves only whole
//! lines on disk.

use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::{Path, PathBuf};

use tracing::debug;

use crate::error::{TreeError, TreeResult};
use crate::tree::{RenderConfig, RenderSummary, TreeRenderer, ensure_directory};

use super::plain::PlainOutput;

/// Output file written when none is given.
pub const DEFAULT_OUTPUT_FILE: &str = "project_tree.txt";

/// Absolute form of `root` for the header line.
///
/// Relative paths are joined onto the current directory, then canonicalized
/// when possible.
pub fn absolute_root(root: &Path) -> PathBuf {
    let joined = if root.is_absolute() {
        root.to_path_buf()
    } else {
        std::env::current_dir()
            .unwrap_or_else(|_| PathBuf::from("."))
            .join(root)
    };
    joined.canonicalize().unwrap_or(joined)
}

pub fn write_header<W: Write>(writer: &mut W, root: &Path) -> io::Result<()> {
    writeln!(writer, "Tree view of: {}", absolute_root(root).display())?;
    writeln!(writer)
}

/// Write the header and tree body for `root` into `writer`, then flush it.
///
/// Nothing is written when `root` is not a readable directory.
pub fn write_report<W: Write>(root: &Path, writer: W, config: &RenderConfig) -> TreeResult<RenderSummary> {
    ensure_directory(root)?;
    write_validated(root, writer, config)
}

/// Write the report for `root` into the file at `output`.
///
/// Fails without touching `output` when `root` is not a readable directory.
pub fn write_report_file(root: &Path, output: &Path, config: &RenderConfig) -> TreeResult<RenderSummary> {
    ensure_directory(root)?;

    let file = File::create(output).map_err(|source| TreeError::Io {
        path: output.to_path_buf(),
        source,
    })?;
    debug!(output = %output.display(), "writing tree report");

    write_validated(root, BufWriter::new(file), config)
}

/// Header, body and flush for a root the caller has already checked.
fn write_validated<W: Write>(root: &Path, writer: W, config: &RenderConfig) -> TreeResult<RenderSummary> {
    let mut output = PlainOutput::new(writer);
    write_header(output.get_mut(), root).map_err(TreeError::Write)?;

    let result = TreeRenderer::new(config.clone()).render(root, &mut output);
    let flushed = output.get_mut().flush().map_err(TreeError::Write);

    let summary = result?;
    flushed?;
    Ok(summary)
}
