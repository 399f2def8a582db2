//! Logging initialisation.

use eyre::Result;
use tracing_subscriber::EnvFilter;

use crate::cli::LogArgs;

/// Build the log filter from command line arguments.
///
/// Precedence:
/// 1. If `--quiet` is set, only errors are shown
/// 2. Otherwise, start with `RUST_LOG` if set, or a level derived from `-v`
///    (warn, info, debug, trace)
/// 3. Apply any custom directives from `--log.filter`
pub fn build_filter(args: &LogArgs) -> EnvFilter {
    filter_with_env(args, EnvFilter::try_from_default_env().ok())
}

/// Level selected by the number of `-v` flags.
fn verbosity_level(verbosity: u8) -> &'static str {
    match verbosity {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    }
}

fn filter_with_env(args: &LogArgs, env: Option<EnvFilter>) -> EnvFilter {
    if args.quiet {
        return EnvFilter::new("error");
    }

    let mut filter = env.unwrap_or_else(|| EnvFilter::new(verbosity_level(args.verbosity)));

    if let Some(custom_filter) = &args.filter {
        for directive in custom_filter.split(',') {
            if let Ok(d) = directive.parse() {
                filter = filter.add_directive(d);
            }
        }
    }

    filter
}

/// Install the global subscriber. Logs go to stderr so stdout stays pipeable.
pub fn init_logging(args: &LogArgs) -> Result<()> {
    let builder = tracing_subscriber::fmt()
        .with_env_filter(build_filter(args))
        .with_writer(std::io::stderr)
        .without_time();

    let installed = if args.json {
        builder.json().try_init()
    } else {
        builder.try_init()
    };

    installed.map_err(|e| eyre::eyre!("failed to install log subscriber: {e}"))
}

#[cfg(test)]
mod tests {
    use tracing_subscriber::filter::LevelFilter;

    use super::*;

    #[test]
    fn test_quiet_overrides_everything() {
        let args = LogArgs {
            quiet: true,
            verbosity: 3,
            filter: Some("addrutil_core=trace".to_string()),
            json: false,
        };
        assert_eq!(build_filter(&args).to_string(), "error");
    }

    #[test]
    fn test_verbosity_levels() {
        for (verbosity, level, hint) in [
            (0, "warn", LevelFilter::WARN),
            (1, "info", LevelFilter::INFO),
            (2, "debug", LevelFilter::DEBUG),
            (3, "trace", LevelFilter::TRACE),
            (9, "trace", LevelFilter::TRACE),
        ] {
            let args = LogArgs { verbosity, ..Default::default() };
            let filter = filter_with_env(&args, None);
            assert_eq!(filter.to_string(), level);
            assert_eq!(filter.max_level_hint(), Some(hint));
        }
    }

    #[test]
    fn test_env_replaces_verbosity() {
        let args = LogArgs { verbosity: 3, ..Default::default() };
        let filter = filter_with_env(&args, Some(EnvFilter::new("error")));
        assert_eq!(filter.max_level_hint(), Some(LevelFilter::ERROR));
    }

    #[test]
    fn test_custom_directives_are_added() {
        let args = LogArgs {
            filter: Some("addrutil_core=trace,addrutil_ipc=loud,addrutil_cli=debug".into()),
            ..Default::default()
        };
        let filter = filter_with_env(&args, None).to_string();

        assert!(filter.contains("warn"), "{filter}");
        assert!(filter.contains("addrutil_core=trace"), "{filter}");
        assert!(filter.contains("addrutil_cli=debug"), "{filter}");
        assert!(!filter.contains("loud"), "{filter}");
    }
}
