pub mod build_info;

use std::sync::Once;

static TRACING_INIT: Once = Once::new();
const DEFAULT_FILTER: &str = "finbti=warn,finbti_core=warn";

/// Initializes the global tracing subscriber. `RUST_LOG` overrides the default
/// filter. Events go to stderr so they never mix with rendered command output.
pub fn init_tracing() {
    TRACING_INIT.call_once(|| {
        use tracing_subscriber::{fmt, EnvFilter};

        let filter =
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER));

        let _ = fmt()
            .with_env_filter(filter)
            .with_writer(std::io::stderr)
            .try_init();
    });
}
