use clap::Parser;
use mp_balance::{analysis, error::AnalysisError, ui::cli::Args};
use std::{io, process::ExitCode};
use tracing::{error, info, warn};
use tracing_subscriber::EnvFilter;

fn init_logging(verbose: bool) {
    let default_level = if verbose { "debug" } else { "warn" };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(io::stderr)
        .init();
}

fn main() -> ExitCode {
    let args = Args::parse();
    init_logging(args.verbose);

    let exit_code = match analysis::run(&args, &mut io::stdout().lock()) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err @ AnalysisError::MissingDatafile) => {
            warn!("{}", err);
            ExitCode::SUCCESS
        }
        Err(err @ AnalysisError::SourceNotFound { .. }) => {
            error!("Ow :( The file was not found. {}", err);
            ExitCode::FAILURE
        }
        Err(err) => {
            error!("{}", err);
            ExitCode::FAILURE
        }
    };

    info!("#################### Analysis is over ######################");
    exit_code
}
