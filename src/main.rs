//! CLI entry point for projtree

use std::io::{self, IsTerminal};
use std::path::PathBuf;
use std::process;

use clap::{ArgAction, Parser, ValueEnum};
use projtree::output::{print_confirmation, print_error};
use projtree::{
    DEFAULT_MAX_DEPTH, DEFAULT_OUTPUT_FILE, ExclusionSet, RenderConfig, UnreadablePolicy,
    write_report, write_report_file,
};
use tracing_subscriber::EnvFilter;

/// Color output mode
#[derive(Debug, Clone, Copy, Default, ValueEnum)]
enum ColorMode {
    /// Auto-detect based on terminal and environment
    #[default]
    Auto,
    /// Always use colors
    Always,
    /// Never use colors
    Never,
}

/// Determine whether to use color output based on mode and environment.
fn should_use_color(mode: ColorMode) -> bool {
    match mode {
        ColorMode::Always => true,
        ColorMode::Never => false,
        ColorMode::Auto => {
            // https://no-color.org/
            if std::env::var_os("NO_COLOR").is_some() {
                return false;
            }
            if std::env::var_os("FORCE_COLOR").is_some() {
                return true;
            }
            if std::env::var("TERM").map(|t| t == "dumb").unwrap_or(false) {
                return false;
            }
            io::stdout().is_terminal()
        }
    }
}

#[derive(Parser, Debug)]
#[command(name = "projtree")]
#[command(about = "Write a plain-text tree view of a directory to a file")]
#[command(version)]
struct Args {
    /// Directory to display
    #[arg(default_value = ".")]
    path: PathBuf,

    /// File to write the tree to ("-" for stdout)
    #[arg(short, long, default_value = DEFAULT_OUTPUT_FILE)]
    output: String,

    /// Directory name to skip (repeatable, or comma-separated)
    #[arg(short, long = "exclude", value_name = "NAME")]
    exclude: Vec<String>,

    /// Do not skip the built-in list of VCS/dependency/build directories
    #[arg(long = "no-default-excludes")]
    no_default_excludes: bool,

    /// Fail when nesting goes deeper than N levels
    #[arg(long = "max-depth", value_name = "N", default_value_t = DEFAULT_MAX_DEPTH)]
    max_depth: usize,

    /// Keep going when a subdirectory cannot be read
    #[arg(long = "skip-unreadable")]
    skip_unreadable: bool,

    /// Do not print the confirmation message
    #[arg(short, long)]
    quiet: bool,

    /// Increase log verbosity (-v debug, -vv trace)
    #[arg(short, long, action = ArgAction::Count)]
    verbose: u8,

    /// Control color output: auto, always, never
    #[arg(long = "color", value_name = "WHEN", default_value = "auto")]
    color: ColorMode,
}

impl Args {
    fn render_config(&self) -> RenderConfig {
        let mut excluded = if self.no_default_excludes {
            ExclusionSet::new()
        } else {
            ExclusionSet::defaults()
        };
        for list in &self.exclude {
            excluded.extend_from_list(list);
        }

        let policy = if self.skip_unreadable {
            UnreadablePolicy::Skip
        } else {
            UnreadablePolicy::Abort
        };

        RenderConfig::default()
            .with_excluded(excluded)
            .with_max_depth(self.max_depth)
            .with_unreadable_policy(policy)
    }
}

fn init_logging(verbose: u8) {
    let level = match verbose {
        0 => "warn",
        1 => "debug",
        _ => "trace",
    };
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(format!("projtree={level}")));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .with_target(false)
        .init();
}

fn main() {
    let args = Args::parse();
    init_logging(args.verbose);

    let use_color = should_use_color(args.color);
    let config = args.render_config();
    let to_stdout = args.output == "-";

    let result = if to_stdout {
        write_report(&args.path, io::stdout().lock(), &config)
    } else {
        write_report_file(&args.path, PathBuf::from(&args.output).as_path(), &config)
    };

    match result {
        Ok(summary) => {
            if !args.quiet {
                let destination = if to_stdout { "stdout" } else { args.output.as_str() };
                if let Err(e) = print_confirmation(destination, &summary, use_color, to_stdout) {
                    eprintln!("projtree: error writing output: {}", e);
                    process::exit(1);
                }
            }
        }
        Err(e) => {
            if print_error(&e, use_color).is_err() {
                eprintln!("projtree: {}", e);
            }
            process::exit(1);
        }
    }
}
