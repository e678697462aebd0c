use tracing_subscriber::{EnvFilter, fmt, prelude::*};

/// Default filter when `RUST_LOG` is not set.
const DEFAULT_FILTER: &str = "info";

/// Install a global tracing subscriber for hosts that have none.
///
/// Logs go to stderr in compact form. The level comes from `RUST_LOG`,
/// defaulting to `info`. Fails if a global subscriber is already set; the
/// library itself never calls this.
pub fn init() -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
    init_with_default(DEFAULT_FILTER)
}

/// [`init`] with a different fallback filter for when `RUST_LOG` is unset.
pub fn init_with_default(
    default_filter: &str,
) -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
    let fmt_layer = fmt::layer()
        .with_writer(std::io::stderr)
        .with_target(true)
        .with_level(true)
        .compact();

    let filter_layer =
        EnvFilter::try_from_default_env().or_else(|_| EnvFilter::try_new(default_filter))?;

    tracing_subscriber::registry()
        .with(filter_layer)
        .with(fmt_layer)
        .try_init()?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tracing::{info, warn};

    #[test]
    fn test_logging_init() {
        // Only the first init in a process can succeed.
        let _ = init();

        info!("scan started");
        warn!(path = "/opt/Kiro/kiro", "manifest unreadable");
    }

    #[test]
    fn test_second_init_fails() {
        let _ = init();
        assert!(init().is_err());
        assert!(init_with_default("debug").is_err());
    }
}
