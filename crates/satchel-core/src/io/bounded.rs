//! Length-bounded view over a seekable reader.
//!
//! ZIP keeps its central directory at the end of the stream, so the reader
//! needs to know where the stream ends. `BoundedReader` makes a caller's
//! declared length authoritative: reads stop at it and `SeekFrom::End` is
//! resolved against it, whatever the inner reader's real length is.

use std::io::Error;
use std::io::ErrorKind;
use std::io::Read;
use std::io::Seek;
use std::io::SeekFrom;

/// Wrapper reader exposing exactly the first `len` bytes of `inner`.
///
/// If the inner stream is shorter than `len`, reads end early at the inner
/// end of stream; parsers see this as truncation.
///
/// # Examples
///
/// ```
/// use satchel_core::io::BoundedReader;
/// use std::io::Cursor;
/// use std::io::Read;
/// use std::io::Seek;
/// use std::io::SeekFrom;
///
/// let mut reader = BoundedReader::new(Cursor::new(b"hello world".to_vec()), 5)?;
/// let mut out = String::new();
/// reader.read_to_string(&mut out)?;
/// assert_eq!(out, "hello");
///
/// assert_eq!(reader.seek(SeekFrom::End(-2))?, 3);
/// # Ok::<(), std::io::Error>(())
/// ```
#[derive(Debug)]
pub struct BoundedReader<R> {
    inner: R,
    len: u64,
    pos: u64,
}

impl<R: Seek> BoundedReader<R> {
    /// Creates a bounded view starting at offset 0 of `inner`.
    ///
    /// # Errors
    ///
    /// Returns an error if `inner` cannot be rewound.
    pub fn new(mut inner: R, len: u64) -> std::io::Result<Self> {
        inner.seek(SeekFrom::Start(0))?;
        Ok(Self { inner, len, pos: 0 })
    }
}

impl<R: Read> Read for BoundedReader<R> {
    fn read(&mut self, buf: &mut [u8]) -> std::io::Result<usize> {
        let remaining = self.len.saturating_sub(self.pos);
        if remaining == 0 || buf.is_empty() {
            return Ok(0);
        }
        let max = usize::try_from(remaining).map_or(buf.len(), |r| r.min(buf.len()));
        let n = self.inner.read(&mut buf[..max])?;
        self.pos += n as u64;
        Ok(n)
    }
}

impl<R: Seek> Seek for BoundedReader<R> {
    fn seek(&mut self, target: SeekFrom) -> std::io::Result<u64> {
        let (base, offset) = match target {
            SeekFrom::Start(n) => (n, 0),
            SeekFrom::End(off) => (self.len, off),
            SeekFrom::Current(off) => (self.pos, off),
        };
        let new_pos = base.checked_add_signed(offset).ok_or_else(|| {
            Error::new(
                ErrorKind::InvalidInput,
                "invalid seek to a negative or overflowing position",
            )
        })?;
        self.inner.seek(SeekFrom::Start(new_pos))?;
        self.pos = new_pos;
        Ok(new_pos)
    }
}
