use tracing_subscriber::{fmt, EnvFilter};

/// Initializes the tracing subscriber for the binaries.
///
/// The filter comes from `RUST_LOG` (default: `info`), e.g.
/// `RUST_LOG=beerbot=debug` to see per-request dispatch decisions.
pub fn init() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    fmt().with_env_filter(filter).with_target(true).init();
}
