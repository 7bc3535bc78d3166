//! Output formatting for tree display
//!
//! - `plain` - connector lines on any `Write` sink
//! - `report` - header plus tree body, written to a file or stream
//! - `status` - colored confirmation and error messages for the CLI

mod plain;
mod report;
mod status;

pub use plain::{BRANCH, LAST_BRANCH, PlainOutput, render_to_string, render_tree};
pub use report::{DEFAULT_OUTPUT_FILE, absolute_root, write_header, write_report, write_report_file};
pub use status::{print_confirmation, print_error, summary_line};
