//! `randrange` command-line entry point.

use std::io;
use std::process::ExitCode;

use randrange_cli::app;
use randrange_cli::config::{Config, LogFormat};
use randrange_cli::error::AppError;
use randrange_os::OsPrimitive;
use tracing_subscriber::EnvFilter;

fn main() -> ExitCode {
    match try_main() {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            tracing::error!(error = %err, "randrange failed");
            eprintln!("randrange: {err}");
            ExitCode::from(err.exit_code())
        }
    }
}

fn try_main() -> Result<(), AppError> {
    // Read configuration from environment.
    let config = Config::from_env()?;
    init_tracing(config.log_format);

    let stdout = io::stdout();
    let mut out = stdout.lock();
    app::run(&mut OsPrimitive, &config, std::env::args().skip(1), &mut out)
}

fn init_tracing(format: LogFormat) {
    let builder = tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(io::stderr);

    match format {
        LogFormat::Json => builder.json().init(),
        LogFormat::Pretty => builder.init(),
    }
}
