// crates/parse_envi_hdr/src/main.rs

use std::env;
use std::io;

use anyhow::Result;
use log::LevelFilter;

use load_header_lines::StreamPrompter;
use parse_envi_hdr::{build_cli, run, AppConfig};
use wavelength_marker::HEADER_PATH_ENV;

fn main() -> Result<()> {
    let matches = build_cli().get_matches();
    let env_path = env::var(HEADER_PATH_ENV).ok();
    let config = AppConfig::from_matches(&matches, env_path.as_deref());

    init_logging(config.verbose);
    log::debug!("Configuration: {:?}", config);

    let stdout = io::stdout();
    let mut out = stdout.lock();
    run(&config, StreamPrompter::stdio(), &mut out)
}

/// Warnings only by default, debug with `--verbose`; `RUST_LOG` overrides both.
fn init_logging(verbose: bool) {
    let level = if verbose {
        LevelFilter::Debug
    } else {
        LevelFilter::Warn
    };
    env_logger::Builder::new()
        .filter_level(level)
        .parse_default_env()
        .init();
}
