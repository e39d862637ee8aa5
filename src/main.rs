use std::{
    fs,
    io::{self, Write},
    path::{Path, PathBuf},
    process::ExitCode,
};

use clap::Parser;
use probscript::{
    error::RuntimeError, interpreter::evaluator::core::DEFAULT_SEED, run_source, selftest,
};
use tracing::info;
use tracing_subscriber::EnvFilter;

/// probscript runs probabilistic simulation scripts: draw random numbers,
/// collect them into samples and print descriptive statistics.
///
/// Without a file, the built-in self-test suite runs instead.
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// Seed for the random generator. The same seed repeats the same draws.
    #[arg(long, default_value_t = DEFAULT_SEED)]
    seed: u64,

    /// Run the built-in self-test suite.
    #[arg(long)]
    test: bool,

    /// Script to run.
    #[arg(value_name = "FILE")]
    file: Option<PathBuf>,
}

fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")))
        .with_writer(io::stderr)
        .init();

    let args = Args::parse();

    match (args.test, args.file) {
        (false, Some(path)) => run_file(&path, args.seed),
        _ => run_selftest(),
    }
}

fn run_file(path: &Path, seed: u64) -> ExitCode {
    let source = match fs::read_to_string(path) {
        Ok(source) => source,
        Err(e) => {
            eprintln!("Error: failed to read '{}': {e}", path.display());
            return ExitCode::FAILURE;
        },
    };

    info!(path = %path.display(), seed, "running script");

    let stdout = io::stdout();
    let mut out = stdout.lock();
    match run_source(&source, seed, &mut out) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            let _ = out.flush();
            eprintln!("Error: {e}");
            ExitCode::FAILURE
        },
    }
}

fn run_selftest() -> ExitCode {
    let stdout = io::stdout();
    let mut out = stdout.lock();
    match selftest::run_all(&mut out) {
        Ok(0) => ExitCode::SUCCESS,
        Ok(_) => ExitCode::FAILURE,
        Err(e) => {
            eprintln!("Error: {}", RuntimeError::Output(e));
            ExitCode::FAILURE
        },
    }
}
