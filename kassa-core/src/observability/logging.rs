use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

/// Install a JSON tracing subscriber for applications embedding the binding.
///
/// `RUST_LOG` takes precedence over `log_level`. Calling this more than once
/// is a no-op.
pub fn init_tracing(log_level: &str) {
    let env_filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(log_level));

    let result = tracing_subscriber::registry()
        .with(env_filter)
        .with(
            tracing_subscriber::fmt::layer()
                .with_file(true)
                .with_line_number(true)
                .json()
                .flatten_event(true),
        )
        .try_init();

    if let Err(e) = result {
        tracing::debug!(error = %e, "Tracing subscriber already installed");
    }
}
