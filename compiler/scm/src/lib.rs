//! Scheme interpreter shell.
//!
//! Hosts the read/eval/print loop around the value model. Reading and
//! printing go through `InputPort` / `OutputPort` objects so the loop only
//! depends on the streams it is handed; evaluation is currently the
//! identity on the text that was read.

pub mod config;
pub mod repl;

use std::sync::Once;

pub use config::{parse_args, Command, ConfigError, ReplConfig};
pub use repl::{farewell, run, ReplError};

static TRACING_INIT: Once = Once::new();

/// Initialize tracing for debug output.
///
/// Safe to call multiple times. Only installs a subscriber when `RUST_LOG`
/// is set, e.g. `RUST_LOG=scm=debug` or `RUST_LOG=scm_ir=trace`.
pub fn init_tracing() {
    TRACING_INIT.call_once(|| {
        use tracing_subscriber::{prelude::*, EnvFilter};

        if std::env::var("RUST_LOG").is_ok() {
            tracing_subscriber::registry()
                .with(EnvFilter::from_default_env())
                .with(tracing_tree::HierarchicalLayer::new(2).with_targets(true))
                .init();
        }
    });
}
