//! Byte sources for whole data files.

use std::fs::File;
use std::io::Read;
use std::path::Path;

use memmap2::Mmap;

use crate::util::{Error, Result};

/// Read-only bytes of a whole data file.
///
/// Prefers memory mapping; falls back to an owned buffer when mapping is
/// disabled or the file is empty.
pub struct Source {
    inner: SourceInner,
}

enum SourceInner {
    Mmap(Mmap),
    Owned(Vec<u8>),
}

impl Source {
    /// Open a file for reading with memory mapping.
    pub fn open(path: impl AsRef<Path>) -> Result<Self> {
        Self::open_opts(path, true)
    }

    /// Open a file with optional memory mapping.
    pub fn open_opts(path: impl AsRef<Path>, use_mmap: bool) -> Result<Self> {
        let path = path.as_ref();
        let mut file = File::open(path).map_err(|e| {
            if e.kind() == std::io::ErrorKind::NotFound {
                Error::FileNotFound(path.to_path_buf())
            } else {
                Error::Io(e)
            }
        })?;

        let size = file.metadata()?.len();

        let inner = if use_mmap && size > 0 {
            // Safety: file is opened read-only.
            let mmap = unsafe { Mmap::map(&file) }
                .map_err(|e| Error::MmapFailed(e.to_string()))?;
            SourceInner::Mmap(mmap)
        } else {
            let mut buf = Vec::with_capacity(size as usize);
            file.read_to_end(&mut buf)?;
            SourceInner::Owned(buf)
        };

        Ok(Self { inner })
    }

    /// Wrap an in-memory buffer.
    pub fn from_vec(buf: Vec<u8>) -> Self {
        Self { inner: SourceInner::Owned(buf) }
    }

    /// Total size in bytes.
    pub fn size(&self) -> u64 {
        self.as_bytes().len() as u64
    }

    /// The underlying bytes.
    pub fn as_bytes(&self) -> &[u8] {
        match &self.inner {
            SourceInner::Mmap(mmap) => mmap,
            SourceInner::Owned(buf) => buf,
        }
    }
}

impl std::ops::Deref for Source {
    type Target = [u8];

    fn deref(&self) -> &[u8] {
        self.as_bytes()
    }
}
