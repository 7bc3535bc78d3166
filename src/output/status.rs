//! Status messages printed by the CLI after a run

use std::io::{self, Write};

use termcolor::{Color, ColorChoice, ColorSpec, StandardStream, WriteColor};

use crate::error::TreeError;
use crate::tree::RenderSummary;

fn color_choice(use_color: bool) -> ColorChoice {
    if use_color {
        ColorChoice::Auto
    } else {
        ColorChoice::Never
    }
}

/// One-line summary of a finished run, e.g. `3 directories, 12 files`.
pub fn summary_line(summary: &RenderSummary) -> String {
    let mut line = format!(
        "{} {}, {} {}",
        summary.directories,
        if summary.directories == 1 { "directory" } else { "directories" },
        summary.files,
        if summary.files == 1 { "file" } else { "files" },
    );
    if summary.skipped > 0 {
        line.push_str(&format!(", {} unreadable skipped", summary.skipped));
    }
    line
}

/// Confirm where the tree went. Goes to stderr when the tree itself went to stdout.
pub fn print_confirmation(
    destination: &str,
    summary: &RenderSummary,
    use_color: bool,
    to_stderr: bool,
) -> io::Result<()> {
    let mut stream = if to_stderr {
        StandardStream::stderr(color_choice(use_color))
    } else {
        StandardStream::stdout(color_choice(use_color))
    };

    stream.set_color(ColorSpec::new().set_fg(Some(Color::Green)).set_bold(true))?;
    write!(stream, "Tree written to")?;
    stream.reset()?;
    write!(stream, " {} ", destination)?;
    stream.set_color(ColorSpec::new().set_fg(Some(Color::Cyan)))?;
    write!(stream, "({})", summary_line(summary))?;
    stream.reset()?;
    writeln!(stream)
}

/// Print `projtree: {error}` to stderr.
pub fn print_error(err: &TreeError, use_color: bool) -> io::Result<()> {
    let mut stderr = StandardStream::stderr(color_choice(use_color));
    stderr.set_color(ColorSpec::new().set_fg(Some(Color::Red)).set_bold(true))?;
    write!(stderr, "projtree:")?;
    stderr.reset()?;
    writeln!(stderr, " {}", err)
}
