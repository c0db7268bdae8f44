//! Logging setup
//!
//! One subscriber per invocation: a console layer on stdout and, when a log
//! file is given, a second plain-text layer appending to it. `RUST_LOG`
//! takes precedence over the level chosen on the command line.

use std::fs::OpenOptions;
use std::io;
use std::path::Path;
use std::sync::Mutex;

use is_terminal::IsTerminal;
use tracing::subscriber::DefaultGuard;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::{fmt, EnvFilter};

use crate::error::{MultideployerError, MultideployerResult};

/// Level used when neither `-v` nor `-d` is given
pub const DEFAULT_LEVEL: &str = "warn";

/// Map the verbosity flags to a filter directive. `debug` wins.
pub fn level_for(verbose: bool, debug: bool) -> &'static str {
    if debug {
        "debug"
    } else if verbose {
        "info"
    } else {
        DEFAULT_LEVEL
    }
}

/// Installed logging configuration; dropping it uninstalls the subscriber.
pub struct LoggingContext {
    _guard: DefaultGuard,
}

impl LoggingContext {
    pub fn init(level: &str, log_file: Option<&Path>) -> MultideployerResult<Self> {
        let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));

        let console = fmt::layer()
            .with_target(false)
            .with_ansi(io::stdout().is_terminal())
            .with_writer(io::stdout);

        let file = match log_file {
            Some(path) => {
                let handle = OpenOptions::new()
                    .create(true)
                    .append(true)
                    .open(path)
                    .map_err(|e| {
                        MultideployerError::io(format!("cannot open log file {}", path.display()), e)
                    })?;
                Some(
                    fmt::layer()
                        .with_target(false)
                        .with_ansi(false)
                        .with_writer(Mutex::new(handle)),
                )
            }
            None => None,
        };

        let subscriber = tracing_subscriber::registry()
            .with(filter)
            .with(console)
            .with(file);

        Ok(Self {
            _guard: tracing::subscriber::set_default(subscriber),
        })
    }
}
