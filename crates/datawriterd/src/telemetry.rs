//! Structured telemetry initialisation for the writer daemon.
//!
//! Dispatch, handler and lifecycle events all go to stderr through one
//! global subscriber. With [`LogFormat::Json`] each event is a single JSON
//! object whose fields (`event`, `client_address`, `message_id`, ...) sit at
//! the top level next to `target` and `level`.

use std::io::{self, IsTerminal};

use once_cell::sync::OnceCell;
use tracing::{Subscriber, subscriber::SetGlobalDefaultError};
use tracing_subscriber::EnvFilter;
use tracing_subscriber::fmt::{self, MakeWriter};

use datawriter_config::{Config, DEFAULT_LOG_FILTER, LogFormat};

static TELEMETRY_GUARD: OnceCell<()> = OnceCell::new();

type BoxedSubscriber = Box<dyn Subscriber + Send + Sync>;

/// Handle returned when telemetry has been initialised.
#[derive(Debug, Default, Clone, Copy)]
pub struct TelemetryHandle;

/// Errors encountered while configuring telemetry.
#[derive(Debug, thiserror::Error)]
pub enum TelemetryError {
    /// The configured log filter expression did not parse.
    #[error("invalid log filter: {0}")]
    Filter(String),
    /// Installing the tracing subscriber failed.
    #[error("failed to install telemetry subscriber: {0}")]
    Subscriber(SetGlobalDefaultError),
}

/// Installs the global tracing subscriber on first use.
///
/// Later calls return a fresh [`TelemetryHandle`] and leave the installed
/// subscriber alone, even when `config` differs.
///
/// # Errors
///
/// Returns [`TelemetryError::Filter`] for an unparsable filter and
/// [`TelemetryError::Subscriber`] if another subscriber is already global.
pub fn initialise(config: &Config) -> Result<TelemetryHandle, TelemetryError> {
    TELEMETRY_GUARD
        .get_or_try_init(|| install_subscriber(config))
        .map(|()| TelemetryHandle)
}

fn install_subscriber(config: &Config) -> Result<(), TelemetryError> {
    let subscriber = build_subscriber(config, io::stderr, io::stderr().is_terminal())?;
    tracing::subscriber::set_global_default(subscriber).map_err(TelemetryError::Subscriber)
}

/// Filter expression actually applied for `config`.
///
/// A blank `log_filter` (for example an empty `DATAWRITER_LOG_FILTER`) falls
/// back to the built-in default instead of silencing the writer.
fn effective_filter(config: &Config) -> &str {
    match config.log_filter().trim() {
        "" => DEFAULT_LOG_FILTER,
        filter => filter,
    }
}

fn build_subscriber<W>(
    config: &Config,
    make_writer: W,
    ansi: bool,
) -> Result<BoxedSubscriber, TelemetryError>
where
    W: for<'writer> MakeWriter<'writer> + Send + Sync + 'static,
{
    let filter = EnvFilter::try_new(effective_filter(config))
        .map_err(|error| TelemetryError::Filter(error.to_string()))?;
    let builder = fmt::Subscriber::builder()
        .with_env_filter(filter)
        .with_target(true)
        .with_level(true)
        .with_thread_names(true)
        .with_writer(make_writer)
        .with_ansi(ansi)
        .with_timer(fmt::time::UtcTime::rfc_3339());

    Ok(match config.log_format() {
        LogFormat::Json => Box::new(builder.json().flatten_event(true).finish()),
        LogFormat::Compact => Box::new(builder.compact().finish()),
    })
}
