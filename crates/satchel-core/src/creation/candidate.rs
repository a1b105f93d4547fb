//! Named input streams for archive construction.

use std::fs::File;
use std::io::Cursor;
use std::io::Read;
use std::io::Seek;
use std::path::Path;

use crate::Result;

/// One file offered for inclusion in a new archive.
///
/// `name` becomes the entry name verbatim. The reader is read at most twice:
/// once for the sniff prefix and once to copy the content.
#[derive(Debug)]
pub struct CandidateFile<R> {
    /// Entry name in the built archive.
    pub name: String,
    /// Content stream, rewound by the writer before each pass.
    pub reader: R,
    /// Size the caller reports for the content, checked against
    /// `max_file_size` before any byte is read.
    pub declared_size: u64,
}

impl<R: Read + Seek> CandidateFile<R> {
    /// Creates a candidate from an arbitrary seekable stream.
    pub fn new(name: impl Into<String>, reader: R, declared_size: u64) -> Self {
        Self {
            name: name.into(),
            reader,
            declared_size,
        }
    }
}

impl CandidateFile<Cursor<Vec<u8>>> {
    /// Creates a candidate from an in-memory buffer.
    ///
    /// # Examples
    ///
    /// ```
    /// use satchel_core::CandidateFile;
    ///
    /// let file = CandidateFile::from_bytes("a.txt", b"hello".to_vec());
    /// assert_eq!(file.name, "a.txt");
    /// assert_eq!(file.declared_size, 5);
    /// ```
    pub fn from_bytes(name: impl Into<String>, bytes: Vec<u8>) -> Self {
        let declared_size = bytes.len() as u64;
        Self::new(name, Cursor::new(bytes), declared_size)
    }
}

impl CandidateFile<File> {
    /// Opens a file from disk; the entry name is the path's final component.
    ///
    /// # Errors
    ///
    /// Returns `Io` if the file cannot be opened or its metadata read.
    pub fn open(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let file = File::open(path)?;
        let declared_size = file.metadata()?.len();
        let name = path.file_name().map_or_else(
            || path.to_string_lossy().into_owned(),
            |n| n.to_string_lossy().into_owned(),
        );
        Ok(Self::new(name, file, declared_size))
    }
}
