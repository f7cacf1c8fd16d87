//! Tests for the quantex tracing setup.

use std::sync::Mutex;

use quantex_core::tracing::init_tracing;

/// Global mutex to serialize tracing tests (env var manipulation).
static TRACING_MUTEX: Mutex<()> = Mutex::new(());

/// A per-module filter is accepted.
#[test]
fn test_per_module_filtering() {
    let _lock = TRACING_MUTEX.lock().unwrap();
    std::env::set_var("QUANTEX_LOG", "quantex_engine=debug,quantex_core=warn");
    init_tracing();
    std::env::remove_var("QUANTEX_LOG");
}

/// Repeated initialization does not panic.
#[test]
fn test_init_tracing_idempotent() {
    let _lock = TRACING_MUTEX.lock().unwrap();
    init_tracing();
    init_tracing();
    init_tracing();
}

/// A garbage filter falls back to the default.
#[test]
fn test_invalid_filter_fallback() {
    let _lock = TRACING_MUTEX.lock().unwrap();
    std::env::set_var("QUANTEX_LOG", "this_is_garbage=not_a_level");
    init_tracing();
    std::env::remove_var("QUANTEX_LOG");
}
