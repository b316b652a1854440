//! File entry representation.

use std::ffi::{OsStr, OsString};
use std::path::{Path, PathBuf};

/// A single file or directory entry as seen by a sort.
///
/// The raw file name is kept exactly as the filesystem returned it. Sorting
/// compares these bytes; only [`FileEntry::display_name`] normalizes.
///
/// # Examples
///
/// ```no_run
/// use finsort_core::FileEntry;
/// use std::fs;
///
/// let metadata = fs::metadata("Cargo.toml").unwrap();
/// let entry = FileEntry::new("Cargo.toml".into(), &metadata);
/// assert_eq!(entry.name(), "Cargo.toml");
/// assert!(!entry.is_dir());
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileEntry {
    path: PathBuf,
    name: OsString,
    is_dir: bool,
    is_hidden: bool,
    is_symlink: bool,
}

impl FileEntry {
    /// Creates a new `FileEntry` from a path and its metadata.
    ///
    /// Hidden files are detected by a leading `.` in the file name.
    pub fn new(path: PathBuf, metadata: &std::fs::Metadata) -> Self {
        let name = path.file_name().map(OsStr::to_os_string).unwrap_or_default();

        Self {
            is_hidden: starts_with_dot(&name),
            path,
            name,
            is_dir: metadata.is_dir(),
            is_symlink: metadata.is_symlink(),
        }
    }

    /// Creates a `FileEntry` from a bare name, for listings that do not come
    /// from the local filesystem. The path is the name itself.
    pub fn from_name(name: impl Into<OsString>, is_dir: bool) -> Self {
        let name = name.into();
        Self {
            path: PathBuf::from(&name),
            is_hidden: starts_with_dot(&name),
            name,
            is_dir,
            is_symlink: false,
        }
    }

    /// Returns the full path of this entry.
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Returns the raw file name (last component of the path).
    pub fn name(&self) -> &OsStr {
        &self.name
    }

    /// Returns the name for presentation: lossily decoded and composed to
    /// NFC, so decomposed names (as stored by macOS) render as one glyph
    /// per letter.
    pub fn display_name(&self) -> String {
        crate::nfc_string(&self.name.to_string_lossy())
    }

    /// Returns `true` if this entry is a directory.
    pub fn is_dir(&self) -> bool {
        self.is_dir
    }

    /// Returns `true` if the name starts with `.`.
    pub fn is_hidden(&self) -> bool {
        self.is_hidden
    }

    /// Returns `true` if this entry is a symbolic link.
    pub fn is_symlink(&self) -> bool {
        self.is_symlink
    }
}

fn starts_with_dot(name: &OsStr) -> bool {
    name.as_encoded_bytes().first() == Some(&b'.')
}
