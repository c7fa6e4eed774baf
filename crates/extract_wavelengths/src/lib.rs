// crates/extract_wavelengths/src/lib.rs

use load_header_lines::HeaderDocument;
use thiserror::Error;
use wavelength_marker::{CLOSING_BRACE, WAVELENGTH_MARKER};

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ExtractError {
    #[error("Marker {:?} not found in header", WAVELENGTH_MARKER)]
    MarkerNotFound,

    #[error("Wavelength list opened on line {} is never closed by {:?}", .marker_index + 1, CLOSING_BRACE)]
    UnterminatedList { marker_index: usize },
}

/// Decides where the wavelength list ends.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TrailerPolicy {
    /// Take every line after the marker except the last line of the
    /// document, whatever that line holds. Headers written by the
    /// acquisition software end with the list's closing `}`.
    #[default]
    ExcludeLastLine,
    /// Stop before the first `}` line that follows the marker.
    UntilClosingBrace,
}

/// Wavelength entries in document order, each with one trailing comma
/// removed. Values are kept as text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WavelengthList {
    marker_index: usize,
    entries: Vec<String>,
}

impl WavelengthList {
    /// Zero-based line index of the `wavelength = {` marker.
    pub fn marker_index(&self) -> usize {
        self.marker_index
    }

    pub fn entries(&self) -> &[String] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, String> {
        self.entries.iter()
    }

    pub fn into_entries(self) -> Vec<String> {
        self.entries
    }
}

impl<'a> IntoIterator for &'a WavelengthList {
    type Item = &'a String;
    type IntoIter = std::slice::Iter<'a, String>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.iter()
    }
}

impl IntoIterator for WavelengthList {
    type Item = String;
    type IntoIter = std::vec::IntoIter<String>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.into_iter()
    }
}

/// Pulls the wavelength list out of a loaded header.
#[derive(Debug, Clone, Copy, Default)]
pub struct WavelengthExtractor {
    policy: TrailerPolicy,
}

impl WavelengthExtractor {
    pub fn new(policy: TrailerPolicy) -> Self {
        Self { policy }
    }

    /// Locates the marker and collects the lines that follow it, up to the
    /// boundary chosen by the trailer policy. The document is not modified.
    pub fn extract(&self, document: &HeaderDocument) -> Result<WavelengthList, ExtractError> {
        let marker_index = find_marker(document)?;
        let lines = document.lines();
        let begin = marker_index + 1;

        let selected: &[String] = match self.policy {
            TrailerPolicy::ExcludeLastLine => {
                let end = lines.len().saturating_sub(1);
                if begin >= end {
                    &[]
                } else {
                    &lines[begin..end]
                }
            }
            TrailerPolicy::UntilClosingBrace => {
                let offset = lines[begin..]
                    .iter()
                    .position(|line| line == CLOSING_BRACE)
                    .ok_or(ExtractError::UnterminatedList { marker_index })?;
                &lines[begin..begin + offset]
            }
        };

        let entries: Vec<String> = selected
            .iter()
            .map(|line| strip_trailing_comma(line).to_string())
            .collect();

        log::debug!(
            "Marker on line {}; extracted {} wavelength(s) using {:?}",
            marker_index + 1,
            entries.len(),
            self.policy
        );

        Ok(WavelengthList {
            marker_index,
            entries,
        })
    }
}

/// Extracts wavelengths using the default trailer policy.
pub fn extract_wavelengths(document: &HeaderDocument) -> Result<WavelengthList, ExtractError> {
    WavelengthExtractor::default().extract(document)
}

/// Returns the index of the first line exactly equal to the marker.
pub fn find_marker(document: &HeaderDocument) -> Result<usize, ExtractError> {
    document
        .position_of(WAVELENGTH_MARKER)
        .ok_or(ExtractError::MarkerNotFound)
}

/// Removes a single trailing comma. Leading and interior commas stay.
pub fn strip_trailing_comma(line: &str) -> &str {
    line.strip_suffix(',').unwrap_or(line)
}
