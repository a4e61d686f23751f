//! Structured logging set-up for the kruskal CLI.
//!
//! Installs a global `tracing` subscriber writing to stderr, human-readable
//! or JSON, and bridges the `log` facade so dependencies using either API
//! end up in the same stream.

use std::{env, sync::OnceLock};

use thiserror::Error;
use tracing_log::LogTracer;
use tracing_subscriber::{
    EnvFilter, Layer,
    fmt::format::FmtSpan,
    layer::SubscriberExt,
    util::{SubscriberInitExt, TryInitError},
};

/// Environment variable selecting the log output format.
pub const LOG_FORMAT_ENV: &str = "KRUSKAL_LOG_FORMAT";

static INITIALISED: OnceLock<()> = OnceLock::new();

/// Output format for diagnostics.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
pub enum LogFormat {
    /// Human-readable lines.
    #[default]
    Human,
    /// One JSON object per event, including the active span list.
    Json,
}

/// Reasons the CLI could not set up its diagnostics stream.
#[derive(Debug, Error)]
pub enum LoggingError {
    /// `KRUSKAL_LOG_FORMAT` held bytes that are not UTF-8.
    #[error("`{name}` is not valid UTF-8: {source}")]
    InvalidUnicode {
        /// Variable that was read.
        name: &'static str,
        /// Lookup failure reported by `std::env`.
        #[source]
        source: env::VarError,
    },
    /// `KRUSKAL_LOG_FORMAT` named a format other than `human` or `json`.
    #[error("unknown log format `{provided}` (use `human` or `json`)")]
    UnsupportedFormat {
        /// Normalised value that was rejected.
        provided: String,
    },
    /// Another global subscriber was already in place.
    #[error("a global tracing subscriber is already installed: {source}")]
    InstallFailed {
        /// Failure returned by `try_init`.
        #[source]
        source: TryInitError,
    },
}

/// Install global structured logging if it has not already been configured.
///
/// Output defaults to human-readable lines; set `KRUSKAL_LOG_FORMAT=json` for
/// JSON. Everything goes to stderr so the forest printed on stdout stays
/// machine-readable. Levels follow `RUST_LOG`, defaulting to `info`.
///
/// # Errors
/// Returns [`LoggingError`] if the format variable holds invalid Unicode or
/// an unsupported value.
pub fn init_logging() -> Result<(), LoggingError> {
    if INITIALISED.get().is_some() {
        return Ok(());
    }

    match install_subscriber() {
        Ok(()) => {}
        Err(LoggingError::InstallFailed { source }) => report_existing_subscriber(&source),
        Err(err) => return Err(err),
    }
    let _ = INITIALISED.set(());
    Ok(())
}

fn describe_existing_subscriber(source: &TryInitError) -> String {
    format!("keeping the tracing subscriber installed elsewhere: {source}")
}

#[expect(
    clippy::print_stderr,
    reason = "No subscriber of ours is installed to carry this diagnostic"
)]
fn report_existing_subscriber(source: &TryInitError) {
    eprintln!("{}", describe_existing_subscriber(source));
}

fn install_subscriber() -> Result<(), LoggingError> {
    let format = match env::var(LOG_FORMAT_ENV) {
        Ok(raw) => parse_log_format(&raw)?,
        Err(env::VarError::NotPresent) => LogFormat::Human,
        Err(err @ env::VarError::NotUnicode(_)) => {
            return Err(LoggingError::InvalidUnicode {
                name: LOG_FORMAT_ENV,
                source: err,
            });
        }
    };

    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    let fmt_layer = tracing_subscriber::fmt::layer()
        .with_span_events(FmtSpan::CLOSE)
        .with_writer(std::io::stderr);

    let fmt_layer = match format {
        LogFormat::Json => fmt_layer
            .json()
            .with_current_span(true)
            .with_span_list(true)
            .boxed(),
        LogFormat::Human => fmt_layer.boxed(),
    };

    // Best effort: another logger may already own the `log` slot.
    let _ = LogTracer::init();

    tracing_subscriber::registry()
        .with(env_filter)
        .with(fmt_layer)
        .try_init()
        .map_err(|source| LoggingError::InstallFailed { source })
}

/// Parses a `KRUSKAL_LOG_FORMAT` value, ignoring case and surrounding
/// whitespace.
///
/// # Errors
/// Returns [`LoggingError::UnsupportedFormat`] for anything other than
/// `human` or `json`.
///
/// # Examples
/// ```
/// use kruskal_cli::logging::{LogFormat, parse_log_format};
///
/// assert_eq!(parse_log_format(" JSON ").ok(), Some(LogFormat::Json));
/// assert!(parse_log_format("xml").is_err());
/// ```
pub fn parse_log_format(raw: &str) -> Result<LogFormat, LoggingError> {
    match raw.trim().to_ascii_lowercase().as_str() {
        "human" => Ok(LogFormat::Human),
        "json" => Ok(LogFormat::Json),
        other => Err(LoggingError::UnsupportedFormat {
            provided: other.to_owned(),
        }),
    }
}
