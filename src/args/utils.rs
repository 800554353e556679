//! Shared utilities for argument processing.

/// What: Determine the log level based on command-line arguments and environment variables.
///
/// Inputs:
/// - `args`: Parsed command-line arguments.
///
/// Output:
/// - Log level filter string (trace, debug, info, warn, error, or a full `EnvFilter` directive).
///
/// Details:
/// - `RUST_LOG` wins when set, so per-module directives keep working.
/// - Verbose flag overrides the `--log-level` argument.
pub fn determine_log_level(args: &crate::args::Args) -> String {
    if let Ok(directive) = std::env::var("RUST_LOG")
        && !directive.trim().is_empty()
    {
        return directive;
    }
    if args.verbose {
        "debug".to_string()
    } else {
        args.log_level.clone()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::args::Args;

    #[test]
    fn verbose_overrides_log_level() {
        if std::env::var_os("RUST_LOG").is_some() {
            return;
        }
        let args = Args {
            log_level: "warn".into(),
            ..Args::default()
        };
        assert_eq!(determine_log_level(&args), "warn");
        let args = Args {
            log_level: "warn".into(),
            verbose: true,
            ..Args::default()
        };
        assert_eq!(determine_log_level(&args), "debug");
    }
}
