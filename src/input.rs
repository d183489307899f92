use std::{fs::File, ops::Deref, path::Path};

use log::{debug, trace};
use memmap2::Mmap;

use crate::Error;

/// A read-only, non-empty byte buffer holding the text to be counted.
///
/// File-backed buffers are memory mapped; the mapping is released when the
/// buffer is dropped, on every exit path.
#[derive(Debug)]
pub struct InputBuffer(Inner);

#[derive(Debug)]
enum Inner {
    Mapped(Mmap),
    Owned(Vec<u8>),
}

impl InputBuffer {
    /// Open and map the file at `path`.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be opened, its size cannot be
    /// read, it is empty, or it cannot be mapped.
    pub fn open(path: impl AsRef<Path>) -> Result<Self, Error> {
        let path = path.as_ref();

        let file = File::open(path).map_err(|source| Error::Open {
            path: path.to_path_buf(),
            source,
        })?;

        let len = file
            .metadata()
            .map_err(|source| Error::Metadata {
                path: path.to_path_buf(),
                source,
            })?
            .len();

        trace!("opened {} ({} bytes)", path.display(), len);

        // Mapping a zero-length file is an error on most platforms, and there
        // is nothing to count anyway.
        if len == 0 {
            return Err(Error::EmptyInput);
        }

        // SAFETY: the mapping is read-only and private to this process. As
        // with any file mapping, another process truncating or writing to the
        // file while it is mapped is not guarded against.
        let map = unsafe { Mmap::map(&file) }.map_err(|source| Error::Map {
            path: path.to_path_buf(),
            source,
        })?;

        debug!("mapped {} bytes from {}", map.len(), path.display());

        // The file handle is closed here; the mapping remains valid until it
        // is dropped.
        Ok(Self(Inner::Mapped(map)))
    }

    /// Wrap an in-memory buffer.
    ///
    /// # Errors
    ///
    /// Returns [`Error::EmptyInput`] if `bytes` is empty.
    pub fn from_bytes(bytes: impl Into<Vec<u8>>) -> Result<Self, Error> {
        let bytes = bytes.into();
        if bytes.is_empty() {
            return Err(Error::EmptyInput);
        }
        Ok(Self(Inner::Owned(bytes)))
    }
}

impl Deref for InputBuffer {
    type Target = [u8];

    fn deref(&self) -> &Self::Target {
        match &self.0 {
            Inner::Mapped(v) => &v[..],
            Inner::Owned(v) => &v[..],
        }
    }
}

impl AsRef<[u8]> for InputBuffer {
    fn as_ref(&self) -> &[u8] {
        self
    }
}
