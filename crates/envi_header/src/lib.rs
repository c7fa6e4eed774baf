// crates/envi_header/src/lib.rs

//! Parses the key/value fields of an ENVI header into an [`EnviHeader`]
//! and renders the header summary printed by `parse_envi_hdr --info`.

use std::collections::BTreeMap;
use std::fmt;

use load_header_lines::HeaderDocument;
use once_cell::sync::Lazy;
use regex::Regex;
use thiserror::Error;
use wavelength_marker::ENVI_MAGIC;

mod types;

pub use types::{ByteOrder, DataType, Interleave};

static KEY_VALUE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^([^=]+?)\s*=\s*(.*)$").expect("key/value pattern is valid"));

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum HeaderError {
    #[error("File is not an ENVI header file")]
    NotEnviHeader,

    #[error("Header is missing required key '{0}'")]
    MissingKey(&'static str),

    #[error("Invalid value '{value}' for key '{key}'")]
    InvalidValue { key: String, value: String },

    #[error("Unrecognized interleave type '{0}'")]
    UnknownInterleave(String),

    #[error("Value of '{key}' opened on line {line} is never closed")]
    UnterminatedBrace { key: String, line: usize },
}

/// The fields of an ENVI header that describe the image layout.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EnviHeader {
    pub samples: usize,
    pub lines: usize,
    pub bands: usize,
    pub header_offset: usize,
    pub data_type: Option<DataType>,
    pub byte_order: Option<ByteOrder>,
    pub interleave: Option<Interleave>,
    pub wavelength_units: Option<String>,
    pub wavelengths: Vec<String>,
    /// Every other key, lowercased, with its raw value.
    pub fields: BTreeMap<String, String>,
}

impl EnviHeader {
    /// Parses a loaded header document.
    pub fn parse(document: &HeaderDocument) -> Result<Self, HeaderError> {
        let mut lines = document
            .lines()
            .iter()
            .enumerate()
            .filter(|(_, line)| !line.is_empty());

        match lines.next() {
            Some((_, first)) if first == ENVI_MAGIC => {}
            _ => return Err(HeaderError::NotEnviHeader),
        }

        let mut samples = None;
        let mut rows = None;
        let mut bands = None;
        let mut header = EnviHeader {
            samples: 0,
            lines: 0,
            bands: 0,
            header_offset: 0,
            data_type: None,
            byte_order: None,
            interleave: None,
            wavelength_units: None,
            wavelengths: Vec::new(),
            fields: BTreeMap::new(),
        };

        while let Some((index, line)) = lines.next() {
            let Some(caps) = KEY_VALUE.captures(line) else {
                log::debug!("Skipping header line {}: {}", index + 1, line);
                continue;
            };
            let key = caps[1].trim().to_ascii_lowercase();
            let mut value = caps[2].trim().to_string();

            if value.starts_with('{') && !value.ends_with('}') {
                loop {
                    match lines.next() {
                        Some((_, next)) => {
                            value.push(' ');
                            value.push_str(next);
                            if next.ends_with('}') {
                                break;
                            }
                        }
                        None => {
                            return Err(HeaderError::UnterminatedBrace {
                                key,
                                line: index + 1,
                            })
                        }
                    }
                }
            }

            match key.as_str() {
                "samples" => samples = Some(parse_count(&key, &value)?),
                "lines" => rows = Some(parse_count(&key, &value)?),
                "bands" => bands = Some(parse_count(&key, &value)?),
                "header offset" => header.header_offset = parse_count(&key, &value)?,
                "data type" => {
                    let code = parse_code(&key, &value)?;
                    header.data_type =
                        Some(DataType::from_code(code).ok_or_else(|| invalid(&key, &value))?);
                }
                "byte order" => {
                    let code = parse_code(&key, &value)?;
                    header.byte_order =
                        Some(ByteOrder::from_code(code).ok_or_else(|| invalid(&key, &value))?);
                }
                "interleave" => {
                    header.interleave = Some(
                        value
                            .parse::<Interleave>()
                            .map_err(HeaderError::UnknownInterleave)?,
                    );
                }
                "wavelength units" => header.wavelength_units = Some(value),
                "wavelength" => header.wavelengths = split_list(&value),
                other => {
                    header.fields.insert(other.to_string(), value);
                }
            }
        }

        header.samples = samples.ok_or(HeaderError::MissingKey("samples"))?;
        header.lines = rows.ok_or(HeaderError::MissingKey("lines"))?;
        header.bands = bands.ok_or(HeaderError::MissingKey("bands"))?;

        if !header.wavelengths.is_empty() && header.wavelengths.len() != header.bands {
            log::warn!(
                "Header declares {} band(s) but lists {} wavelength(s)",
                header.bands,
                header.wavelengths.len()
            );
        }

        Ok(header)
    }

    /// Parses raw header text.
    pub fn parse_str(text: &str) -> Result<Self, HeaderError> {
        Self::parse(&HeaderDocument::from_text(text))
    }

}

impl fmt::Display for EnviHeader {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.data_type {
            Some(data_type) => writeln!(f, "DataType: {}", data_type.code())?,
            None => writeln!(f, "DataType: unknown")?,
        }
        match self.byte_order {
            Some(order) => writeln!(f, "Endianness: {}", order.code())?,
            None => writeln!(f, "Endianness: unknown")?,
        }
        match self.interleave {
            Some(interleave) => writeln!(f, "Interleave: {interleave}")?,
            None => writeln!(f, "Interleave: unknown")?,
        }
        writeln!(f, "Samples (Width): {}", self.samples)?;
        writeln!(f, "Lines (Height): {}", self.lines)?;
        writeln!(f, "Bands (Depth): {}", self.bands)?;
        writeln!(f, "Band ID count: {}", self.wavelengths.len())?;
        writeln!(f, "IDs:")?;
        for (count, id) in self.wavelengths.iter().enumerate() {
            writeln!(f, "    {count}: {id}")?;
        }
        Ok(())
    }
}

fn invalid(key: &str, value: &str) -> HeaderError {
    HeaderError::InvalidValue {
        key: key.to_string(),
        value: value.to_string(),
    }
}

fn parse_count(key: &str, value: &str) -> Result<usize, HeaderError> {
    value.parse().map_err(|_| invalid(key, value))
}

fn parse_code(key: &str, value: &str) -> Result<u8, HeaderError> {
    value.parse().map_err(|_| invalid(key, value))
}

/// Splits a `{a, b, c}` list value into its trimmed, non-empty items.
fn split_list(value: &str) -> Vec<String> {
    value
        .trim_start_matches('{')
        .trim_end_matches('}')
        .split(',')
        .map(str::trim)
        .filter(|item| !item.is_empty())
        .map(str::to_string)
        .collect()
}
