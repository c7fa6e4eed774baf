// crates/load_header_lines/src/prompt.rs

use std::io::{self, BufRead, Stderr, StdinLock, Write};
use std::path::{Path, PathBuf};

/// Printed whenever a header path fails to open.
pub const INVALID_FILENAME_MESSAGE: &str = "Filename not valid";

/// Shown when asking the operator for a replacement path.
pub const FILENAME_PROMPT: &str = "Enter filename: ";

/// Source of replacement paths when a header cannot be opened.
pub trait PathPrompter {
    /// Tells the operator that `path` could not be opened.
    fn report_invalid(&mut self, path: &Path, err: &io::Error) -> io::Result<()>;

    /// Asks for a replacement path. Returns `Ok(None)` once the input is
    /// exhausted.
    fn prompt_path(&mut self) -> io::Result<Option<PathBuf>>;
}

/// Line-based prompter over any reader/writer pair.
pub struct StreamPrompter<R, W> {
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> StreamPrompter<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Self { input, output }
    }

    pub fn into_inner(self) -> (R, W) {
        (self.input, self.output)
    }
}

impl StreamPrompter<StdinLock<'static>, Stderr> {
    /// Reads paths from stdin and writes prompts to stderr, leaving stdout
    /// for extracted values.
    pub fn stdio() -> Self {
        Self::new(io::stdin().lock(), io::stderr())
    }
}

impl<R: BufRead, W: Write> PathPrompter for StreamPrompter<R, W> {
    fn report_invalid(&mut self, _path: &Path, _err: &io::Error) -> io::Result<()> {
        writeln!(self.output, "{}", INVALID_FILENAME_MESSAGE)?;
        self.output.flush()
    }

    fn prompt_path(&mut self) -> io::Result<Option<PathBuf>> {
        write!(self.output, "{}", FILENAME_PROMPT)?;
        self.output.flush()?;

        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Ok(None);
        }
        Ok(Some(PathBuf::from(line.trim())))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    #[test]
    fn test_prompt_reads_one_trimmed_line() {
        let mut prompter = StreamPrompter::new(Cursor::new("  /tmp/a.hdr \n/tmp/b.hdr\n"), Vec::new());
        assert_eq!(prompter.prompt_path().unwrap(), Some(PathBuf::from("/tmp/a.hdr")));
        assert_eq!(prompter.prompt_path().unwrap(), Some(PathBuf::from("/tmp/b.hdr")));
        let (_, output) = prompter.into_inner();
        assert_eq!(String::from_utf8(output).unwrap(), "Enter filename: Enter filename: ");
    }

    #[test]
    fn test_prompt_returns_none_at_eof() {
        let mut prompter = StreamPrompter::new(Cursor::new(""), Vec::new());
        assert_eq!(prompter.prompt_path().unwrap(), None);
    }

    #[test]
    fn test_report_invalid_writes_message_line() {
        let mut prompter = StreamPrompter::new(Cursor::new(""), Vec::new());
        let err = io::Error::new(io::ErrorKind::NotFound, "missing");
        prompter.report_invalid(Path::new("nope.hdr"), &err).unwrap();
        let (_, output) = prompter.into_inner();
        assert_eq!(String::from_utf8(output).unwrap(), "Filename not valid\n");
    }
}
