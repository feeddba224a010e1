//! Tracing subscriber setup.
//!
//! `WELLQUEST_LOG` takes an `EnvFilter` directive string ("debug",
//! "wellquest=trace"). Without it the level is `warn`, or `debug` with
//! `--verbose`. Logs go to stderr so stdout stays clean for `--json` output.

use tracing_subscriber::EnvFilter;

pub const LOG_ENV_VAR: &str = "WELLQUEST_LOG";

pub fn default_directive(verbose: bool) -> &'static str {
    if verbose {
        "wellquest=debug,warn"
    } else {
        "warn"
    }
}

pub fn init_tracing(verbose: bool) {
    let filter = EnvFilter::try_from_env(LOG_ENV_VAR)
        .unwrap_or_else(|_| EnvFilter::new(default_directive(verbose)));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(verbose)
        .init();
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_directive_parses() {
        for verbose in [false, true] {
            assert!(EnvFilter::try_new(default_directive(verbose)).is_ok());
        }
    }
}
