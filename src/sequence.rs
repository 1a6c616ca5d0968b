//! Owned input sequences.
//!
//! Sequences are read whole into memory. Line-terminator bytes are dropped
//! wherever they appear, so a file holding one sequence per line, or a
//! sequence wrapped over several lines, reads as a single run of symbols.

use std::fs::File;
use std::io::{BufReader, Read};
use std::ops::Deref;
use std::path::{Path, PathBuf};

use crate::error::{LcsError, Result};

#[derive(Clone, Debug, Default, PartialEq, Eq, Hash)]
pub struct Sequence {
    symbols: Vec<u8>,
}

#[inline]
fn is_line_terminator(b: u8) -> bool {
    b == b'\n' || b == b'\r'
}

impl Sequence {
    pub fn from_bytes(bytes: &[u8]) -> Self {
        Self {
            symbols: bytes
                .iter()
                .copied()
                .filter(|&b| !is_line_terminator(b))
                .collect(),
        }
    }

    /// Read a whole stream. `origin` is only used to label I/O errors.
    pub fn from_reader<R: Read>(mut reader: R, origin: &Path) -> Result<Self> {
        let mut raw = Vec::new();
        reader.read_to_end(&mut raw).map_err(|source| LcsError::Io {
            path: origin.to_path_buf(),
            source,
        })?;
        raw.retain(|&b| !is_line_terminator(b));
        Ok(Self { symbols: raw })
    }

    pub fn from_path<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let file = File::open(path).map_err(|source| LcsError::Io {
            path: PathBuf::from(path),
            source,
        })?;
        Self::from_reader(BufReader::new(file), path)
    }

    pub fn as_bytes(&self) -> &[u8] {
        &self.symbols
    }
}

impl Deref for Sequence {
    type Target = [u8];

    fn deref(&self) -> &[u8] {
        &self.symbols
    }
}

impl AsRef<[u8]> for Sequence {
    fn as_ref(&self) -> &[u8] {
        &self.symbols
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    #[test]
    fn strips_line_terminators() {
        let seq = Sequence::from_bytes(b"ACG\nT\r\n");
        assert_eq!(seq.as_bytes(), b"ACGT");
        assert_eq!(seq.len(), 4);
    }

    #[test]
    fn reader_consumes_until_end_of_stream() {
        let seq = Sequence::from_reader(Cursor::new("BDCABA\n"), Path::new("mem")).unwrap();
        assert_eq!(&*seq, b"BDCABA");
    }

    #[test]
    fn empty_stream_is_empty_sequence() {
        let seq = Sequence::from_reader(Cursor::new("\n"), Path::new("mem")).unwrap();
        assert!(seq.is_empty());
    }

    #[test]
    fn missing_file_reports_path() {
        let err = Sequence::from_path("/definitely/not/here/fileA.in").unwrap_err();
        match err {
            LcsError::Io { path, .. } => assert!(path.ends_with("fileA.in")),
            other => panic!("unexpected error {other:?}"),
        }
    }
}
