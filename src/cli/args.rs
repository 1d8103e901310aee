use crate::constants::verbosity;
use clap::{Arg, ArgAction, Command, CommandFactory, FromArgMatches, Parser};
use std::ffi::OsString;
use log::LevelFilter;

/// CLI arguments for structra.
///
/// Everything about the project itself is asked interactively.
#[derive(Parser, Debug, Clone)]
#[command(author, version, about, long_about = None)]
pub struct Args {
    /// Increase logging verbosity (`--verbose`, repeat for more).
    #[arg(long, action = ArgAction::Count)]
    pub verbose: u8,
}

/// The clap command, with `-v` taking over `--version` from the default `-V`.
pub fn command() -> Command {
    Args::command().disable_version_flag(true).arg(
        Arg::new("version")
            .short('v')
            .long("version")
            .action(ArgAction::Version)
            .help("Print version and exit"),
    )
}

pub fn try_parse_from<I, T>(itr: I) -> Result<Args, clap::Error>
where
    I: IntoIterator<Item = T>,
    T: Into<OsString> + Clone,
{
    let matches = command().try_get_matches_from(itr)?;
    Args::from_arg_matches(&matches)
}

/// Parse command line arguments; exits on `--help`, `--version` or bad input.
pub fn get_args() -> Args {
    try_parse_from(std::env::args_os()).unwrap_or_else(|e| e.exit())
}

/// Map `--verbose` counts to the appropriate log level.
pub fn get_log_level_from_verbose(verbose_count: u8) -> LevelFilter {
    match verbose_count {
        verbosity::OFF => LevelFilter::Error,
        verbosity::INFO => LevelFilter::Info,
        verbosity::DEBUG => LevelFilter::Debug,
        verbosity::TRACE.. => LevelFilter::Trace,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::constants::exit_codes;
    use clap::error::ErrorKind;

    #[test]
    fn maps_verbose_flags_to_log_filters() {
        assert_eq!(get_log_level_from_verbose(verbosity::OFF), LevelFilter::Error);
        assert_eq!(get_log_level_from_verbose(verbosity::INFO), LevelFilter::Info);
        assert_eq!(get_log_level_from_verbose(verbosity::DEBUG), LevelFilter::Debug);
        assert_eq!(get_log_level_from_verbose(verbosity::TRACE), LevelFilter::Trace);
        assert_eq!(get_log_level_from_verbose(verbosity::TRACE + 1), LevelFilter::Trace);
    }

    #[test]
    fn parses_without_arguments() {
        let args = try_parse_from(["structra"]).unwrap();
        assert_eq!(args.verbose, 0);
    }

    #[test]
    fn counts_verbose_flags() {
        let args = try_parse_from(["structra", "--verbose", "--verbose"]).unwrap();
        assert_eq!(args.verbose, 2);
    }

    #[test]
    fn short_and_long_version_request_version_display() {
        for flag in ["-v", "--version"] {
            let err = try_parse_from(["structra", flag]).unwrap_err();
            assert_eq!(err.kind(), ErrorKind::DisplayVersion);
            assert_eq!(err.exit_code(), exit_codes::SUCCESS);
        }
    }

    #[test]
    fn rejects_unknown_arguments() {
        assert!(try_parse_from(["structra", "extra"]).is_err());
    }
}
