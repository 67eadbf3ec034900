// crates/engine/src/source.rs
//! Text sources and their character streams.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::fs::File;
use std::io::{self, BufRead, BufReader};
use std::path::PathBuf;

use crate::error::{EngineError, Result};

/// Argument that designates standard input.
pub const STDIN_ARG: &str = "-";

/// Where the words of one channel (or of the filter) come from.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum InputSource {
    /// Standard input, shown under `name` in progress messages.
    Stdin { name: String },
    File(PathBuf),
}

impl InputSource {
    /// `-` selects standard input under `stdin_name`, anything else a file.
    #[must_use]
    pub fn from_arg(arg: &str, stdin_name: &str) -> Self {
        if arg == STDIN_ARG {
            Self::stdin(stdin_name)
        } else {
            Self::File(PathBuf::from(arg))
        }
    }

    #[must_use]
    pub fn stdin(name: impl Into<String>) -> Self {
        Self::Stdin { name: name.into() }
    }

    #[must_use]
    pub const fn is_stdin(&self) -> bool {
        matches!(self, Self::Stdin { .. })
    }

    /// Opens the source for reading.
    ///
    /// # Errors
    ///
    /// Returns [`EngineError::Open`] when the file cannot be opened.
    pub fn open(&self) -> Result<Box<dyn BufRead>> {
        match self {
            Self::Stdin { .. } => Ok(Box::new(io::stdin().lock())),
            Self::File(path) => {
                let file = File::open(path).map_err(|source| EngineError::Open {
                    path: path.clone(),
                    source,
                })?;
                Ok(Box::new(BufReader::new(file)))
            }
        }
    }
}

impl fmt::Display for InputSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Stdin { name } => f.write_str(name),
            Self::File(path) => write!(f, "{}", path.display()),
        }
    }
}

/// Decodes UTF-8 from a buffered reader one `char` at a time.
///
/// Invalid or truncated sequences decode to `U+FFFD`, like
/// `String::from_utf8_lossy`; the byte that broke a sequence is read again as
/// the start of the next character.
#[derive(Debug)]
pub struct CharReader<R> {
    inner: R,
}

impl<R: BufRead> CharReader<R> {
    pub const fn new(inner: R) -> Self {
        Self { inner }
    }

    pub fn into_inner(self) -> R {
        self.inner
    }

    fn peek_byte(&mut self) -> io::Result<Option<u8>> {
        loop {
            match self.inner.fill_buf() {
                Ok(buf) => return Ok(buf.first().copied()),
                Err(e) if e.kind() == io::ErrorKind::Interrupted => {}
                Err(e) => return Err(e),
            }
        }
    }

    fn decode(&mut self, lead: u8) -> io::Result<char> {
        let width = utf8_width(lead);
        if width == 1 {
            return Ok(char::from(lead));
        }
        if width == 0 {
            return Ok(char::REPLACEMENT_CHARACTER);
        }
        let mut bytes = [lead, 0, 0, 0];
        for slot in bytes.iter_mut().take(width).skip(1) {
            match self.peek_byte()? {
                Some(b) if b & 0xC0 == 0x80 => {
                    *slot = b;
                    self.inner.consume(1);
                }
                _ => return Ok(char::REPLACEMENT_CHARACTER),
            }
        }
        Ok(std::str::from_utf8(&bytes[..width])
            .ok()
            .and_then(|s| s.chars().next())
            .unwrap_or(char::REPLACEMENT_CHARACTER))
    }
}

impl<R: BufRead> Iterator for CharReader<R> {
    type Item = io::Result<char>;

    fn next(&mut self) -> Option<Self::Item> {
        let lead = match self.peek_byte() {
            Ok(Some(b)) => b,
            Ok(None) => return None,
            Err(e) => return Some(Err(e)),
        };
        self.inner.consume(1);
        Some(self.decode(lead))
    }
}

/// Length of the UTF-8 sequence introduced by `lead`, 0 if it cannot start one.
const fn utf8_width(lead: u8) -> usize {
    match lead {
        0x00..=0x7F => 1,
        0xC2..=0xDF => 2,
        0xE0..=0xEF => 3,
        0xF0..=0xF4 => 4,
        _ => 0,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::{Cursor, Read, Write};

    fn decode_all(bytes: &[u8]) -> String {
        CharReader::new(Cursor::new(bytes.to_vec()))
            .collect::<io::Result<String>>()
            .unwrap()
    }

    #[test]
    fn test_decodes_multibyte() {
        assert_eq!(decode_all("héllo wörld €𝄞".as_bytes()), "héllo wörld €𝄞");
    }

    #[test]
    fn test_invalid_bytes_become_replacement() {
        assert_eq!(decode_all(b"a\xFFb"), "a\u{FFFD}b");
        // Truncated sequence: the following ASCII byte is kept.
        assert_eq!(decode_all(b"\xE2\x82x"), "\u{FFFD}x");
        assert_eq!(decode_all(b"end\xC3"), "end\u{FFFD}");
    }

    struct FailingReader;

    impl Read for FailingReader {
        fn read(&mut self, _: &mut [u8]) -> io::Result<usize> {
            Err(io::Error::other("boom"))
        }
    }

    #[test]
    fn test_read_error_is_reported() {
        let mut reader = CharReader::new(BufReader::new(FailingReader));
        assert!(matches!(reader.next(), Some(Err(_))));
    }

    #[test]
    fn test_from_arg() {
        assert_eq!(InputSource::from_arg("-", "#1"), InputSource::stdin("#1"));
        assert_eq!(
            InputSource::from_arg("notes.txt", "#1"),
            InputSource::File(PathBuf::from("notes.txt"))
        );
        assert_eq!(InputSource::stdin("restrict").to_string(), "restrict");
    }

    #[test]
    fn test_open_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let source = InputSource::File(dir.path().join("absent.txt"));
        assert!(matches!(source.open(), Err(EngineError::Open { .. })));
    }

    #[test]
    fn test_open_file_reads_content() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, "one two").unwrap();
        let source = InputSource::File(file.path().to_path_buf());
        let text: String = CharReader::new(source.open().unwrap())
            .collect::<io::Result<String>>()
            .unwrap();
        assert_eq!(text, "one two");
    }
}
