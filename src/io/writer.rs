//! Output stream for building data-file bytes.

use byteorder::{LittleEndian, WriteBytesExt};

use crate::core::GmVersion;
use crate::io::StringRef;
use crate::util::Result;

/// Growable little-endian writer.
///
/// Carries the session [`GmVersion`] so codecs can choose the layout to
/// emit; the writer itself never changes the version.
pub struct Writer {
    buf: Vec<u8>,
    version: GmVersion,
}

impl Writer {
    /// Create a writer targeting the given format version.
    pub fn new(version: GmVersion) -> Self {
        Self { buf: Vec::new(), version }
    }

    /// Create a writer with a pre-allocated buffer.
    pub fn with_capacity(capacity: usize, version: GmVersion) -> Self {
        Self { buf: Vec::with_capacity(capacity), version }
    }

    /// The version being written.
    #[inline]
    pub fn version(&self) -> &GmVersion {
        &self.version
    }

    /// Current write position.
    #[inline]
    pub fn pos(&self) -> u64 {
        self.buf.len() as u64
    }

    /// Write raw bytes.
    pub fn write_bytes(&mut self, data: &[u8]) -> Result<()> {
        self.buf.extend_from_slice(data);
        Ok(())
    }

    /// Write a u32 value (little-endian).
    pub fn write_u32(&mut self, value: u32) -> Result<()> {
        self.buf.write_u32::<LittleEndian>(value)?;
        Ok(())
    }

    /// Write an f32 value (little-endian).
    pub fn write_f32(&mut self, value: f32) -> Result<()> {
        self.buf.write_f32::<LittleEndian>(value)?;
        Ok(())
    }

    /// Write a 4-byte string table reference.
    pub fn write_string_ref(&mut self, value: StringRef) -> Result<()> {
        self.write_u32(value.raw())
    }

    /// The bytes written so far.
    pub fn as_bytes(&self) -> &[u8] {
        &self.buf
    }

    /// Consume the writer, returning the finished buffer.
    pub fn into_bytes(self) -> Vec<u8> {
        self.buf
    }
}
