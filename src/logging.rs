// src/logging.rs
// =============================================================================
// Diagnostic output setup.
//
// stdout is reserved for the link list, so every log line goes to stderr.
// RUST_LOG overrides the default filter, e.g. RUST_LOG=debug to see
// browser handler errors, or RUST_LOG=chromiumoxide=debug for the protocol.
// =============================================================================

use std::io::IsTerminal;

use tracing_subscriber::EnvFilter;

// chromiumoxide reports every CDP message it can't decode; that's noise here
const DEFAULT_FILTER: &str = "info,chromiumoxide=off";

pub fn init() {
    let env_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER));

    tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_writer(std::io::stderr)
        .with_ansi(std::io::stderr().is_terminal())
        .with_target(false)
        .init();
}
