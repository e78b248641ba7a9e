//! Command-line arguments.

use std::ffi::OsString;
use std::path::PathBuf;

use clap::Parser;

/// Default location of the configuration file.
pub const DEFAULT_CONFIG_PATH: &str = "./config.json";

#[derive(Debug, Clone, Parser)]
#[command(name = "service-launcher")]
#[command(about = "Load configuration, start the service and stop it cleanly on SIGINT/SIGTERM", long_about = None)]
pub struct Args {
    /// Path to configuration file
    #[arg(short, long, default_value = DEFAULT_CONFIG_PATH)]
    pub config: PathBuf,

    /// Enable verbose mode
    #[arg(short, long)]
    pub verbose: bool,
}

impl Args {
    /// Parse the process arguments, accepting `-config`/`-verbose` as well.
    pub fn parse_compat() -> Self {
        Self::parse_from(normalize_args(std::env::args_os()))
    }
}

/// Rewrite single-dash long flags into the `--` form clap expects.
///
/// `-config x`, `-config=x`, `-verbose` and `-verbose=<bool>` are rewritten;
/// everything else passes through, including `-c`/`-v` and anything after
/// a bare `--`.
pub fn normalize_args<I, T>(args: I) -> Vec<OsString>
where
    I: IntoIterator<Item = T>,
    T: Into<OsString>,
{
    let mut out = Vec::new();
    let mut passthrough = false;

    for arg in args.into_iter().map(Into::into) {
        if passthrough {
            out.push(arg);
            continue;
        }

        let rewritten = match arg.to_str() {
            Some("--") => {
                passthrough = true;
                None
            }
            Some("-config") => Some(Some("--config".to_string())),
            Some(s) if s.starts_with("-config=") => Some(Some(format!("-{s}"))),
            Some("-verbose") | Some("-verbose=true") => Some(Some("--verbose".to_string())),
            Some("-verbose=false") => Some(None),
            _ => None,
        };

        match rewritten {
            Some(Some(flag)) => out.push(flag.into()),
            Some(None) => {}
            None => out.push(arg),
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let args = Args::parse_from(["service-launcher"]);
        assert_eq!(args.config, PathBuf::from("./config.json"));
        assert!(!args.verbose);
    }

    #[test]
    fn test_long_flags() {
        let args = Args::parse_from(["service-launcher", "--config", "/etc/app.json", "--verbose"]);
        assert_eq!(args.config, PathBuf::from("/etc/app.json"));
        assert!(args.verbose);
    }

    #[test]
    fn test_short_flags() {
        let args = Args::parse_from(["service-launcher", "-c", "local.json", "-v"]);
        assert_eq!(args.config, PathBuf::from("local.json"));
        assert!(args.verbose);
    }

    #[test]
    fn test_single_dash_long_flags() {
        let argv = normalize_args(["service-launcher", "-config", "x.json", "-verbose"]);
        let args = Args::try_parse_from(argv).unwrap();
        assert_eq!(args.config, PathBuf::from("x.json"));
        assert!(args.verbose);
    }

    #[test]
    fn test_single_dash_with_equals() {
        let argv = normalize_args(["service-launcher", "-config=/etc/app.json", "-verbose=false"]);
        let args = Args::try_parse_from(argv).unwrap();
        assert_eq!(args.config, PathBuf::from("/etc/app.json"));
        assert!(!args.verbose);

        let argv = normalize_args(["service-launcher", "-verbose=true"]);
        assert!(Args::try_parse_from(argv).unwrap().verbose);
    }

    #[test]
    fn test_normalize_leaves_other_forms_alone() {
        let argv = normalize_args(["service-launcher", "-c", "a.json", "-v", "--config", "b.json"]);
        assert_eq!(
            argv,
            ["service-launcher", "-c", "a.json", "-v", "--config", "b.json"]
                .map(OsString::from)
                .to_vec()
        );
    }

    #[test]
    fn test_normalize_stops_at_double_dash() {
        let argv = normalize_args(["service-launcher", "--", "-verbose"]);
        assert_eq!(argv, ["service-launcher", "--", "-verbose"].map(OsString::from).to_vec());
    }

    #[test]
    fn test_rejects_unknown_flag() {
        assert!(Args::try_parse_from(["service-launcher", "--port", "80"]).is_err());
    }

    #[test]
    fn test_command_definition() {
        use clap::CommandFactory;
        Args::command().debug_assert();
    }
}
