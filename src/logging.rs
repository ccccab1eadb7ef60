//! Log output for the binary and the Python module.

use tracing_subscriber::EnvFilter;

/// Filter used when `RUST_LOG` is not set.
pub const DEFAULT_FILTER: &str = "info";

/// Installs a `tracing_subscriber::fmt` subscriber filtered by `RUST_LOG`
/// (or `DEFAULT_FILTER`), so that verbose cost lines and the training time
/// reach stderr.
///
/// Returns `false` if a global subscriber was already set; the existing one
/// is kept.
pub fn try_init() -> bool {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER)),
        )
        .with_writer(std::io::stderr)
        .try_init()
        .is_ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn second_init_keeps_first_subscriber() {
        try_init();
        assert!(tracing::dispatcher::has_been_set());
        assert!(!try_init());
    }
}
