//! Tracing initialization and configuration.

use std::sync::Once;

use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use crate::constants::{DEFAULT_LOG_FILTER, LOG_ENV_VAR};

static INIT: Once = Once::new();

/// Initialize the quantex tracing/logging system.
///
/// Reads `QUANTEX_LOG` for per-module log levels.
/// Format: `QUANTEX_LOG=quantex_engine=debug,quantex_core=warn`
///
/// Falls back to `quantex=info` if `QUANTEX_LOG` is not set or is invalid.
/// Safe to call more than once; only the first call installs a subscriber.
pub fn init_tracing() {
    INIT.call_once(|| {
        let filter = EnvFilter::try_from_env(LOG_ENV_VAR)
            .unwrap_or_else(|_| EnvFilter::new(DEFAULT_LOG_FILTER));

        // Another subscriber may already be installed by the host application.
        let _ = tracing_subscriber::registry()
            .with(
                fmt::layer()
                    .with_target(true)
                    .with_thread_ids(true)
                    .with_file(true)
                    .with_line_number(true),
            )
            .with(filter)
            .try_init();
    });
}
