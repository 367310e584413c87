// src/logging.rs

use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

/// Console logger for the app process. `RUST_LOG` overrides the
/// default filter. User-facing text stays in the GUI; anything with
/// diagnostic detail (status codes, error chains) goes through here.
pub fn init() {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("brew_browse=info"));

    tracing_subscriber::registry()
        .with(filter)
        .with(
            tracing_subscriber::fmt::layer()
                .with_target(false)
                .compact(),
        )
        .init();
}
