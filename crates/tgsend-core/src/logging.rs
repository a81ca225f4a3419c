use tracing_subscriber::{fmt, EnvFilter};

/// Initialize tracing for a binary.
///
/// Default: info for our crates, warn for everything else. Overridable with
/// `RUST_LOG`.
pub fn init(service_name: &str) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| {
        EnvFilter::new(format!(
            "warn,tgsend_core=info,tgsend_http=info,{service_name}=info"
        ))
    });

    fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_ansi(true)
        .init();
}
