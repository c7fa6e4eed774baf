// crates/parse_envi_hdr/src/lib.rs

use std::io::Write;

use anyhow::{Context, Result};
use envi_header::EnviHeader;
use extract_wavelengths::WavelengthExtractor;
use load_header_lines::{HeaderLoader, PathPrompter};

pub mod config;

pub use config::{build_cli, AppConfig};

/// Loads the configured header, extracts its wavelength list and writes
/// one entry per line to `out`. With `show_info` the header summary is
/// written first.
///
/// Nothing is written unless extraction succeeds.
pub fn run<P: PathPrompter, W: Write>(config: &AppConfig, prompter: P, out: &mut W) -> Result<()> {
    let mut loader = HeaderLoader::new(prompter, config.retry_policy);
    let document = loader
        .load(&config.header_path)
        .context("Failed to load header")?;
    let source = document
        .source()
        .unwrap_or(config.header_path.as_path())
        .display()
        .to_string();

    let wavelengths = WavelengthExtractor::new(config.trailer_policy)
        .extract(&document)
        .with_context(|| format!("Failed to extract wavelengths from {}", source))?;

    if config.show_info {
        let header = EnviHeader::parse(&document)
            .with_context(|| format!("Failed to parse header fields in {}", source))?;
        write!(out, "{}", header)?;
    }

    for entry in &wavelengths {
        writeln!(out, "{}", entry)?;
    }
    out.flush()?;

    log::debug!("Printed {} wavelength(s) from {}", wavelengths.len(), source);
    Ok(())
}
