//! TinyPy Compiler - Main Entry Point
//!
//! ```text
//! tinypy program.tpy                 writes program.py
//! tinypy program.tpy -o out.py       writes out.py
//! tinypy program.tpy --stdout        prints the Python
//! ```

use std::path::PathBuf;
use std::process::ExitCode;

use clap::{ArgAction, CommandFactory, Parser};
use tracing_subscriber::EnvFilter;

use tinypy::{read_source, transpile_file, transpile_source_with, TranspileOptions};

mod ansi {
    pub const BOLD_RED: &str = "\x1b[1;31m";
    pub const GREEN: &str = "\x1b[32m";
    pub const RESET: &str = "\x1b[0m";
}

#[derive(Parser, Debug)]
#[command(name = "tinypy", version, about = "Transpile TinyPy (.tpy) source to Python")]
struct Cli {
    /// TinyPy source file
    input: Option<PathBuf>,

    /// Output file (defaults to the input path with a .py extension)
    #[arg(short, long, value_name = "FILE")]
    output: Option<PathBuf>,

    /// Print the Python to stdout instead of writing a file
    #[arg(long, conflicts_with = "output")]
    stdout: bool,

    /// Spaces per indentation level
    #[arg(long, value_name = "N", default_value_t = 4)]
    indent: usize,

    /// Do not append the `if __name__ == "__main__"` guard
    #[arg(long)]
    no_main_guard: bool,

    /// Suppress the success message
    #[arg(short, long)]
    quiet: bool,

    /// Increase log verbosity (-v debug, -vv trace)
    #[arg(short, long, action = ArgAction::Count)]
    verbose: u8,
}

impl Cli {
    fn options(&self) -> TranspileOptions {
        TranspileOptions {
            indent_width: self.indent,
            entry_guard: !self.no_main_guard,
        }
    }
}

fn init_tracing(verbose: u8) {
    let default_level = match verbose {
        0 => "warn",
        1 => "debug",
        _ => "trace",
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    // No input is not an error: show usage and stop
    let Some(input) = cli.input.as_deref() else {
        return match Cli::command().print_help() {
            Ok(()) => ExitCode::SUCCESS,
            Err(e) => {
                eprintln!("{}error{}: {}", ansi::BOLD_RED, ansi::RESET, e);
                ExitCode::FAILURE
            }
        };
    };
    let options = cli.options();

    if cli.stdout {
        return match read_source(input) {
            Ok(source) => {
                println!("{}", transpile_source_with(&source, &options));
                ExitCode::SUCCESS
            }
            Err(e) => {
                eprintln!("{}error{}: {}", ansi::BOLD_RED, ansi::RESET, e);
                ExitCode::FAILURE
            }
        };
    }

    match transpile_file(input, cli.output.as_deref(), &options) {
        Ok(path) => {
            if !cli.quiet {
                println!("{}✓ Transpiled to{} {}", ansi::GREEN, ansi::RESET, path.display());
            }
            ExitCode::SUCCESS
        }
        Err(e) => {
            eprintln!("{}error{}: {}", ansi::BOLD_RED, ansi::RESET, e);
            ExitCode::FAILURE
        }
    }
}
