// crates/load_header_lines/src/lib.rs

//! Resolves an ENVI header path and loads the file as trimmed lines.
//!
//! When the path cannot be opened the loader reports "Filename not valid"
//! and asks a [`PathPrompter`] for a replacement, as often as the
//! [`RetryPolicy`] allows.

use std::fs::File;
use std::io::{self, Read};
use std::path::{Path, PathBuf};

mod document;
mod error;
pub mod prompt;

pub use document::{trim_lines, HeaderDocument};
pub use error::LoadError;
pub use prompt::{PathPrompter, StreamPrompter};

/// How many times the loader may ask for a replacement path.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum RetryPolicy {
    /// Keep prompting until a file opens or the input closes.
    #[default]
    Unbounded,
    /// Ask for at most this many replacement paths.
    Bounded(usize),
    /// Never prompt; the first failure is returned.
    FailFast,
}

/// Loads header documents, falling back to a prompter on open failures.
pub struct HeaderLoader<P: PathPrompter> {
    prompter: P,
    policy: RetryPolicy,
}

impl<P: PathPrompter> HeaderLoader<P> {
    pub fn new(prompter: P, policy: RetryPolicy) -> Self {
        Self { prompter, policy }
    }

    pub fn into_prompter(self) -> P {
        self.prompter
    }

    /// Opens `initial`, prompting for replacements on failure, and returns
    /// the file's trimmed lines.
    pub fn load<Q: AsRef<Path>>(&mut self, initial: Q) -> Result<HeaderDocument, LoadError> {
        let mut path = initial.as_ref().to_path_buf();
        let mut replacements = 0;

        loop {
            let source = match read_trimmed_lines(&path) {
                Ok(lines) => {
                    log::debug!("Loaded {} line(s) from {}", lines.len(), path.display());
                    return Ok(HeaderDocument::from_lines(lines).with_source(path));
                }
                Err(err) => err,
            };
            log::info!("Could not read {}: {}", path.display(), source);

            match self.policy {
                RetryPolicy::FailFast => return Err(LoadError::Open { path, source }),
                RetryPolicy::Bounded(max) if replacements >= max => {
                    return Err(LoadError::RetriesExhausted {
                        attempts: replacements,
                        last_path: path,
                        source,
                    });
                }
                _ => {}
            }

            self.prompter
                .report_invalid(&path, &source)
                .map_err(LoadError::Prompt)?;
            path = self
                .prompter
                .prompt_path()
                .map_err(LoadError::Prompt)?
                .ok_or(LoadError::PromptClosed)?;
            replacements += 1;
        }
    }
}

/// Reads the whole file and trims every line. The file handle is closed
/// before trimming starts.
pub fn read_trimmed_lines(path: &Path) -> io::Result<Vec<String>> {
    let content = {
        let mut file = File::open(path)?;
        let mut content = String::new();
        file.read_to_string(&mut content)?;
        content
    };
    Ok(trim_lines(&content))
}

/// Picks the header path: an explicit argument wins over the environment
/// value, which wins over the built-in default.
pub fn resolve_header_path(explicit: Option<&str>, from_env: Option<&str>) -> PathBuf {
    explicit
        .or(from_env)
        .filter(|candidate| !candidate.trim().is_empty())
        .map(PathBuf::from)
        .unwrap_or_else(|| PathBuf::from(wavelength_marker::DEFAULT_HEADER_PATH))
}
