// crates/load_header_lines/src/error.rs

use std::io;
use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum LoadError {
    /// The path could not be opened and the retry policy forbids prompting.
    #[error("Error opening file {}: {source}", path.display())]
    Open {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("Gave up after {attempts} replacement filename(s); last tried {}: {source}", last_path.display())]
    RetriesExhausted {
        attempts: usize,
        last_path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("Filename prompt closed before a readable header was entered")]
    PromptClosed,

    #[error("Failed to prompt for a filename: {0}")]
    Prompt(#[source] io::Error),
}
