use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

use crate::config::AppEnv;

/// Initialize stdout tracing. Call once at service startup.
///
/// Filtering follows `RUST_LOG` (default `info`). Production emits JSON lines,
/// development emits the compact human format.
///
/// Later calls are ignored.
pub fn init_tracing(env: AppEnv) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let registry = tracing_subscriber::registry().with(filter);
    let _ = if env.is_development() {
        registry.with(fmt::layer().compact()).try_init()
    } else {
        registry.with(fmt::layer().json()).try_init()
    };
}
