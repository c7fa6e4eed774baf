// crates/parse_envi_hdr/src/config.rs

use std::path::PathBuf;

use clap::{Arg, ArgMatches, Command};
use extract_wavelengths::TrailerPolicy;
use load_header_lines::{resolve_header_path, RetryPolicy};

/// Runtime configuration composed from the command line and environment.
#[derive(Clone, Debug)]
pub struct AppConfig {
    pub header_path: PathBuf,
    pub retry_policy: RetryPolicy,
    pub trailer_policy: TrailerPolicy,
    pub show_info: bool,
    pub verbose: bool,
}

pub fn build_cli() -> Command {
    Command::new("parse_envi_hdr")
        .version("0.1.0")
        .about("Prints the wavelength list of an ENVI hyperspectral header")
        .arg(
            Arg::new("header")
                .value_name("HEADER")
                .help("Path to the .hdr file (defaults to $ENVI_HDR_PATH, then data.hdr)"),
        )
        .arg(
            Arg::new("max_retries")
                .long("max-retries")
                .value_name("N")
                .value_parser(clap::value_parser!(usize))
                .help("Ask for a replacement filename at most N times"),
        )
        .arg(
            Arg::new("non_interactive")
                .long("non-interactive")
                .help("Fail instead of prompting when the header cannot be opened")
                .action(clap::ArgAction::SetTrue),
        )
        .arg(
            Arg::new("until_brace")
                .long("until-brace")
                .help("End the list at its closing brace instead of dropping the file's last line")
                .action(clap::ArgAction::SetTrue),
        )
        .arg(
            Arg::new("info")
                .long("info")
                .help("Print the header summary before the wavelengths")
                .action(clap::ArgAction::SetTrue),
        )
        .arg(
            Arg::new("verbose")
                .long("verbose")
                .help("Enable verbose logging")
                .action(clap::ArgAction::SetTrue),
        )
}

impl AppConfig {
    /// `env_path` is the value of `ENVI_HDR_PATH`, if set.
    pub fn from_matches(matches: &ArgMatches, env_path: Option<&str>) -> Self {
        let header_path = resolve_header_path(
            matches.get_one::<String>("header").map(String::as_str),
            env_path,
        );

        let retry_policy = if matches.get_flag("non_interactive") {
            RetryPolicy::FailFast
        } else if let Some(max) = matches.get_one::<usize>("max_retries") {
            RetryPolicy::Bounded(*max)
        } else {
            RetryPolicy::Unbounded
        };

        let trailer_policy = if matches.get_flag("until_brace") {
            TrailerPolicy::UntilClosingBrace
        } else {
            TrailerPolicy::ExcludeLastLine
        };

        Self {
            header_path,
            retry_policy,
            trailer_policy,
            show_info: matches.get_flag("info"),
            verbose: matches.get_flag("verbose"),
        }
    }
}
