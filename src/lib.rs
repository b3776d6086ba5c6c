pub mod api;
pub mod core;

use tracing_subscriber::EnvFilter;

/// Initialize structured logging for any surface embedding the backend.
pub fn init_tracing() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info,mrdoom=debug")),
        )
        .init();
}
