//! Plain-text connector lines
//!
//! `PlainOutput` turns each entry into `{prefix}{connector}{name}` on any
//! `Write` sink, matching the classic `tree` layout without colors.

use std::io::{self, Write};
use std::path::Path;

use crate::error::TreeResult;
use crate::tree::{Entry, RenderConfig, RenderSummary, TreeOutput, TreeRenderer};

pub const BRANCH: &str = "├── ";
pub const LAST_BRANCH: &str = "└── ";

/// Writes one line per entry to the wrapped writer.
pub struct PlainOutput<W: Write> {
    writer: W,
}

impl<W: Write> PlainOutput<W> {
    pub fn new(writer: W) -> Self {
        Self { writer }
    }

    pub fn get_mut(&mut self) -> &mut W {
        &mut self.writer
    }
}

impl<W: Write> TreeOutput for PlainOutput<W> {
    fn output_entry(&mut self, entry: &Entry, is_last: bool, prefix: &str) -> io::Result<()> {
        let connector = if is_last { LAST_BRANCH } else { BRANCH };
        // One write per line so an aborted walk never leaves half a line behind.
        let line = format!("{}{}{}\n", prefix, connector, entry.name);
        self.writer.write_all(line.as_bytes())
    }
}

/// Render the tree under `root` as plain text into `writer`.
pub fn render_tree<W: Write>(root: &Path, writer: W, config: &RenderConfig) -> TreeResult<RenderSummary> {
    let mut output = PlainOutput::new(writer);
    TreeRenderer::new(config.clone()).render(root, &mut output)
}

/// Render the tree under `root` into a `String`.
pub fn render_to_string(root: &Path, config: &RenderConfig) -> TreeResult<String> {
    let mut buf = Vec::new();
    render_tree(root, &mut buf, config)?;
    Ok(String::from_utf8_lossy(&buf).into_owned())
}
