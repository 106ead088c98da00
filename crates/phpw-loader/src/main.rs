//! Command-line embedding shell.
//!
//! Loads a guest module and drives evaluation cycles against its
//! `pib_init` export. Module, cycle count, and log filter come from the
//! command line or from a loader.toml file.

use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;
use tracing_subscriber::EnvFilter;

use phpw_loader::config::LoaderConfig;
use phpw_loader::{EvalStatus, Loader};

#[derive(Parser)]
#[command(
    name = "phpw-loader",
    about = "Drive evaluation cycles of a phpw guest module"
)]
struct Args {
    /// Path to the guest .wasm module (overrides the config file).
    module: Option<PathBuf>,

    /// Path to a loader.toml config file.
    #[arg(long)]
    config: Option<PathBuf>,

    /// Number of evaluation cycles to run (at least 1).
    #[arg(long)]
    cycles: Option<u32>,
}

fn main() -> ExitCode {
    let args = Args::parse();

    // The config file is read before the subscriber comes up so its
    // log_filter can take effect.
    let config = match &args.config {
        Some(path) => match LoaderConfig::from_file(path) {
            Ok(config) => Some(config),
            Err(err) => {
                eprintln!("failed to read config {}: {err}", path.display());
                return ExitCode::FAILURE;
            }
        },
        None => None,
    };

    tracing_subscriber::fmt()
        .with_env_filter(log_filter(config.as_ref()))
        .init();

    match run(&args, config) {
        Ok(EvalStatus::Completed) => ExitCode::SUCCESS,
        Ok(EvalStatus::BootstrapFailed) => {
            tracing::error!("guest bootstrap failed");
            ExitCode::FAILURE
        }
        Err(err) => {
            tracing::error!(%err, "loader failed");
            ExitCode::FAILURE
        }
    }
}

/// The config file's filter wins; otherwise fall back to `RUST_LOG`.
fn log_filter(config: Option<&LoaderConfig>) -> EnvFilter {
    match config.and_then(LoaderConfig::log_filter) {
        Some(filter) => EnvFilter::try_new(filter).unwrap_or_else(|err| {
            eprintln!("invalid log_filter {filter:?}: {err}");
            EnvFilter::from_default_env()
        }),
        None => EnvFilter::from_default_env(),
    }
}

/// Resolve the cycle count; the command line wins over the config file.
/// Zero cycles would report success without evaluating anything, so it
/// is rejected.
fn effective_cycles(args: &Args, config: Option<&LoaderConfig>) -> anyhow::Result<u32> {
    let cycles = args
        .cycles
        .or_else(|| config.map(LoaderConfig::cycles))
        .unwrap_or(1);
    anyhow::ensure!(cycles > 0, "cycle count must be at least 1");
    Ok(cycles)
}

fn run(args: &Args, config: Option<LoaderConfig>) -> anyhow::Result<EvalStatus> {
    let (name, path) = match (&args.module, &config) {
        (Some(path), _) => {
            let name = path
                .file_stem()
                .map(|stem| stem.to_string_lossy().into_owned())
                .unwrap_or_else(|| "guest".to_string());
            (name, path.clone())
        }
        (None, Some(config)) => (config.module.name.clone(), config.module.path.clone()),
        (None, None) => anyhow::bail!("no module given; pass a path or --config"),
    };

    let cycles = effective_cycles(args, config.as_ref())?;

    let loader = Loader::new()?;
    let mut evaluator = loader.load_file(&name, &path)?;

    let mut last = EvalStatus::Completed;
    for cycle in 0..cycles {
        last = evaluator.evaluate()?;
        if last == EvalStatus::BootstrapFailed {
            tracing::warn!(cycle, "stopping after bootstrap failure");
            break;
        }
    }
    Ok(last)
}
