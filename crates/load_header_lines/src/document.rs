// crates/load_header_lines/src/document.rs

use std::path::{Path, PathBuf};

/// A header file held in memory as one trimmed string per source line.
///
/// Line order matches the file. Blank lines are kept as empty strings so
/// that positions stay aligned with the original file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HeaderDocument {
    source: Option<PathBuf>,
    lines: Vec<String>,
}

impl HeaderDocument {
    /// Builds a document from raw text, splitting on line endings and
    /// trimming every line.
    pub fn from_text(text: &str) -> Self {
        Self {
            source: None,
            lines: trim_lines(text),
        }
    }

    /// Builds a document from already-split lines. Each line is trimmed.
    pub fn from_lines<I, S>(lines: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        Self {
            source: None,
            lines: lines
                .into_iter()
                .map(|line| line.as_ref().trim().to_string())
                .collect(),
        }
    }

    pub(crate) fn with_source(mut self, path: PathBuf) -> Self {
        self.source = Some(path);
        self
    }

    /// The path the document was read from, if it came from disk.
    pub fn source(&self) -> Option<&Path> {
        self.source.as_deref()
    }

    pub fn lines(&self) -> &[String] {
        &self.lines
    }

    pub fn len(&self) -> usize {
        self.lines.len()
    }

    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    /// Returns the index of the first line exactly equal to `needle`.
    pub fn position_of(&self, needle: &str) -> Option<usize> {
        self.lines.iter().position(|line| line == needle)
    }
}

/// Splits `content` into lines and strips leading/trailing whitespace from
/// each one. Interior whitespace is left alone.
///
/// `\n`, `\r\n` and a lone `\r` all end a line.
pub fn trim_lines(content: &str) -> Vec<String> {
    content
        .replace("\r\n", "\n")
        .replace('\r', "\n")
        .lines()
        .map(|line| line.trim().to_string())
        .collect()
}
