//! Sequential cursor reader over raw data-file bytes.

use crate::core::GmVersion;
use crate::io::StringRef;
use crate::util::{Error, Result};

/// Sequential little-endian reader over a byte buffer.
///
/// One `Reader` is one decode session: it carries the cursor and the
/// session-wide [`GmVersion`], so a count-only pre-scan and the full parse
/// that follows it observe the same version state, including any promotion
/// made along the way.
///
/// Two coordinate systems are exposed. `abs_position` is the offset into
/// the underlying buffer; `position` is relative to the current chunk base
/// (0 until [`set_chunk_base`] is called), matching how the container
/// format addresses data inside a chunk.
///
/// [`set_chunk_base`]: Reader::set_chunk_base
pub struct Reader<'a> {
    buf: &'a [u8],
    pos: usize,
    chunk_base: usize,
    version: GmVersion,
}

impl<'a> Reader<'a> {
    /// Create a reader over a buffer, starting from a known base version.
    pub fn new(buf: &'a [u8], version: GmVersion) -> Self {
        Self { buf, pos: 0, chunk_base: 0, version }
    }

    /// The session version state.
    #[inline]
    pub fn version(&self) -> &GmVersion {
        &self.version
    }

    /// Mutable access to the session version state.
    #[inline]
    pub fn version_mut(&mut self) -> &mut GmVersion {
        &mut self.version
    }

    /// Total buffer length in bytes.
    #[inline]
    pub fn len(&self) -> u64 {
        self.buf.len() as u64
    }

    /// True if the buffer is empty.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.buf.is_empty()
    }

    /// Bytes left between the cursor and the end of the buffer.
    #[inline]
    pub fn remaining(&self) -> u64 {
        (self.buf.len() - self.pos) as u64
    }

    /// Absolute cursor position in the buffer.
    #[inline]
    pub fn abs_position(&self) -> u64 {
        self.pos as u64
    }

    /// Move the cursor to an absolute position.
    pub fn set_abs_position(&mut self, pos: u64) -> Result<()> {
        if pos > self.buf.len() as u64 {
            return Err(Error::UnexpectedEof(pos));
        }
        self.pos = pos as usize;
        Ok(())
    }

    /// Cursor position relative to the current chunk base.
    #[inline]
    pub fn position(&self) -> u64 {
        (self.pos - self.chunk_base) as u64
    }

    /// Move the cursor to a position relative to the current chunk base.
    pub fn set_position(&mut self, pos: u64) -> Result<()> {
        self.set_abs_position(self.chunk_base as u64 + pos)
    }

    /// Set the chunk base that relative positions are measured from.
    pub fn set_chunk_base(&mut self, base: u64) -> Result<()> {
        if base > self.buf.len() as u64 {
            return Err(Error::UnexpectedEof(base));
        }
        self.chunk_base = base as usize;
        Ok(())
    }

    /// Advance the cursor by `count` bytes without reading them.
    pub fn skip(&mut self, count: u64) -> Result<()> {
        let end = self.pos as u64 + count;
        if end > self.buf.len() as u64 {
            return Err(Error::UnexpectedEof(end));
        }
        self.pos = end as usize;
        Ok(())
    }

    /// Take the next `count` bytes, advancing the cursor.
    pub fn read_bytes(&mut self, count: usize) -> Result<&'a [u8]> {
        let end = self.pos + count;
        if end > self.buf.len() {
            return Err(Error::UnexpectedEof(end as u64));
        }
        let bytes = &self.buf[self.pos..end];
        self.pos = end;
        Ok(bytes)
    }

    /// Read a little-endian u32.
    pub fn read_u32(&mut self) -> Result<u32> {
        let b = self.read_bytes(4)?;
        Ok(u32::from_le_bytes([b[0], b[1], b[2], b[3]]))
    }

    /// Read a little-endian f32.
    pub fn read_f32(&mut self) -> Result<f32> {
        let b = self.read_bytes(4)?;
        Ok(f32::from_le_bytes([b[0], b[1], b[2], b[3]]))
    }

    /// Read a 4-byte string table reference.
    pub fn read_string_ref(&mut self) -> Result<StringRef> {
        Ok(StringRef::new(self.read_u32()?))
    }

    /// Run `f`, then restore the cursor to where it was, whether or not
    /// `f` succeeded. Version state changes made inside are kept.
    pub fn look_ahead<T>(&mut self, f: impl FnOnce(&mut Self) -> Result<T>) -> Result<T> {
        let saved = self.pos;
        let result = f(self);
        self.pos = saved;
        result
    }

    /// Consume the reader, returning the final session version.
    pub fn into_version(self) -> GmVersion {
        self.version
    }
}
