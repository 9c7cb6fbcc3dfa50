//! Logging setup.
//!
//! Every log line goes to stdout and, when a file is configured, to the log
//! file as well. `RUST_LOG` directives take precedence over the configured
//! level.

use std::fs::{self, File};
use std::path::Path;
use std::sync::Arc;

use tracing::Level;
use tracing_subscriber::fmt::writer::MakeWriterExt;
use tracing_subscriber::prelude::*;
use tracing_subscriber::EnvFilter;

use crate::config::LoggingConfig;
use crate::Result;

/// Transport crates that are chatty at debug level.
const QUIET_TARGETS: [&str; 3] = ["hyper=info", "reqwest=info", "h2=info"];

fn parse_level(level: &str) -> Level {
    level.trim().parse().unwrap_or_else(|_| {
        eprintln!("Unknown log level {level:?}, using info");
        Level::INFO
    })
}

fn build_filter(level: &str) -> EnvFilter {
    let mut filter = EnvFilter::from_default_env().add_directive(parse_level(level).into());
    for target in QUIET_TARGETS {
        if let Ok(directive) = target.parse() {
            filter = filter.add_directive(directive);
        }
    }
    filter
}

/// Open the log file, creating its directory when missing.
fn open_log_file(path: &str) -> Result<File> {
    if let Some(dir) = Path::new(path).parent() {
        if !dir.as_os_str().is_empty() {
            fs::create_dir_all(dir)?;
        }
    }
    Ok(File::create(path)?)
}

/// Install the global subscriber writing to stdout and `config.file`.
pub fn init(config: &LoggingConfig) -> Result<()> {
    let log_file = Arc::new(open_log_file(&config.file)?);

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::fmt::layer()
                .with_writer(std::io::stdout.and(log_file))
                .with_ansi(false)
                .with_target(true),
        )
        .with(build_filter(&config.level))
        .init();

    Ok(())
}

/// Install a stdout-only subscriber.
pub fn init_console_only(level: &str) {
    tracing_subscriber::registry()
        .with(tracing_subscriber::fmt::layer().with_target(true))
        .with(build_filter(level))
        .init();
}
