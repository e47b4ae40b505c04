//! Memory-mapped dictionary files
//!
//! [`MappedDictionary`] owns the bytes that a [`DictionaryView`] borrows.
//! Files are mapped read-only; views handed out by [`MappedDictionary::view`]
//! cannot outlive the mapping.

use crate::error::Result;
use crate::view::DictionaryView;
use memmap2::{Mmap, MmapOptions};
use std::fs::File;
use std::path::{Path, PathBuf};
use tracing::{info, warn};

/// Storage backing a dictionary
#[derive(Debug)]
enum Backing {
    /// Read-only file mapping
    Mapped(Mmap),
    /// Owned in-memory bytes
    Owned(Vec<u8>),
}

/// Dictionary bytes owned for the lifetime of its views
#[derive(Debug)]
pub struct MappedDictionary {
    path: Option<PathBuf>,
    backing: Backing,
}

impl MappedDictionary {
    /// Map a dictionary file read-only
    ///
    /// # Errors
    ///
    /// Returns error if the file cannot be opened or mapped
    pub fn open(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let file = File::open(path)?;
        let len = file.metadata()?.len();

        // Zero-length files cannot be mapped on every platform
        let backing = if len == 0 {
            Backing::Owned(Vec::new())
        } else {
            // SAFETY: the mapping is read-only. Dictionary files are treated
            // as immutable while mapped; truncating one underneath a live
            // mapping is the caller's responsibility.
            #[allow(unsafe_code)]
            let mmap = unsafe { MmapOptions::new().map(&file)? };
            Backing::Mapped(mmap)
        };

        info!(path = %path.display(), len, "mapped dictionary file");

        let dictionary = Self {
            path: Some(path.to_path_buf()),
            backing,
        };
        let format = crate::format::detect_format_version(dictionary.as_bytes());
        if format == crate::FormatVersion::Unknown {
            warn!(path = %path.display(), "dictionary file has an unrecognized format");
        }
        Ok(dictionary)
    }

    /// Wrap bytes already in memory
    pub fn from_bytes(bytes: Vec<u8>) -> Self {
        Self {
            path: None,
            backing: Backing::Owned(bytes),
        }
    }

    /// Create a view over the owned bytes
    pub fn view(&self) -> Result<DictionaryView<'_>> {
        DictionaryView::new(self.as_bytes())
    }

    /// Raw dictionary bytes
    pub fn as_bytes(&self) -> &[u8] {
        match &self.backing {
            Backing::Mapped(mmap) => &mmap[..],
            Backing::Owned(bytes) => bytes.as_slice(),
        }
    }

    /// Length in bytes
    pub fn len(&self) -> usize {
        self.as_bytes().len()
    }

    /// Whether the dictionary is empty
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Path the dictionary was opened from, if any
    pub fn path(&self) -> Option<&Path> {
        self.path.as_deref()
    }

    /// Whether the bytes come from a file mapping
    pub const fn is_mapped(&self) -> bool {
        matches!(self.backing, Backing::Mapped(_))
    }
}

#[cfg(test)]
#[allow(clippy::expect_used, clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::FormatVersion;

    #[test]
    fn test_from_bytes_view() {
        let dictionary = MappedDictionary::from_bytes(vec![0x78, 0xB1, 0x01, 0x00, 0x00, 0x09]);
        let view = dictionary.view().expect("valid view");

        assert_eq!(view.format(), FormatVersion::V1);
        assert_eq!(view.root(), &[0x09]);
        assert!(std::ptr::eq(view.buffer(), dictionary.as_bytes()));
        assert!(!dictionary.is_mapped());
        assert_eq!(dictionary.path(), None);
    }

    #[test]
    fn test_open_missing_file() {
        let err = MappedDictionary::open("/nonexistent/dictionary.dict").unwrap_err();
        assert!(matches!(err, crate::DictError::Io(_)));
    }
}
