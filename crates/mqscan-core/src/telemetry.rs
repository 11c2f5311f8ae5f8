//! Centralised tracing initialisation for MQSCAN hosts.
//!
//! Call [`init_tracing`] once at program start to configure the global
//! subscriber. Safe to call more than once — subsequent calls are silently
//! ignored (the global subscriber can only be set once per process).

use tracing::Level;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::{fmt, EnvFilter, Layer};

/// Initialise the global tracing subscriber.
///
/// * `json` — when `true`, emit newline-delimited JSON log lines
///   (useful for log aggregation pipelines).
/// * `level` — default verbosity when `RUST_LOG` is not set. Scan progress
///   notices are emitted at `info`; pass `Level::WARN` for quiet scans.
///
/// Respects the `RUST_LOG` environment variable for fine-grained filtering
/// (e.g. `RUST_LOG=mqscan_core=debug`).
pub fn init_tracing(json: bool, level: Level) {
    let env_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level.as_str()));

    let fmt_layer = if json {
        fmt::layer().with_target(false).json().boxed()
    } else {
        fmt::layer().with_target(false).boxed()
    };

    tracing_subscriber::registry()
        .with(env_filter)
        .with(fmt_layer)
        .try_init()
        .ok();
}
