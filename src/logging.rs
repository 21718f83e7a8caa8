//! Logging setup for the benchmark binary using `tracing_subscriber`.

use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::EnvFilter;

/// Default filter directives when `RUST_LOG` is unset.
const DEFAULT_DIRECTIVES: &str = "warn";

/// Installs a stderr formatter filtered by `RUST_LOG`.
///
/// Results are printed on stdout by the caller, so logs never interleave with them in a pipe.
pub fn setup_logging() {
    let main_layer = tracing_subscriber::fmt::layer()
        .with_writer(std::io::stderr)
        .with_target(false);

    tracing_subscriber::registry()
        .with(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new(DEFAULT_DIRECTIVES)),
        )
        .with(main_layer)
        .init()
}
