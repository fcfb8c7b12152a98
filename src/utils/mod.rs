pub mod build_info;

use std::sync::Once;

use tracing_subscriber::{fmt, EnvFilter};

static TRACING_INIT: Once = Once::new();

const DEFAULT_DIRECTIVE: &str = "expense_tracker=info";

/// Initializes the global tracing subscriber, honouring `RUST_LOG` when set.
pub fn init_tracing() {
    TRACING_INIT.call_once(|| {
        let filter = if std::env::var_os(EnvFilter::DEFAULT_ENV).is_some() {
            EnvFilter::from_default_env()
        } else {
            EnvFilter::new(DEFAULT_DIRECTIVE)
        };

        // An embedding application may already own the global subscriber.
        let _ = fmt()
            .with_env_filter(filter)
            .with_writer(std::io::stderr)
            .try_init();
    });
}
