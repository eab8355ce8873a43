use tracing_subscriber::{fmt, EnvFilter};

/// Default filter directive for a `-v` count.
pub fn level_for_verbosity(verbosity: u8) -> &'static str {
    match verbosity {
        0 => "top10=warn",
        1 => "top10=info",
        2 => "top10=debug",
        _ => "top10=trace",
    }
}

/// Install a stderr subscriber. `RUST_LOG` wins over `verbosity` when set.
///
/// Safe to call more than once; later calls are ignored.
pub fn init_logging(verbosity: u8) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(level_for_verbosity(verbosity)));

    let _ = fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init();
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn verbosity_maps_to_levels() {
        assert_eq!(level_for_verbosity(0), "top10=warn");
        assert_eq!(level_for_verbosity(2), "top10=debug");
        assert_eq!(level_for_verbosity(9), "top10=trace");
    }

    #[test]
    fn init_twice_does_not_panic() {
        init_logging(0);
        init_logging(1);
    }
}
