//! Sorting for file entries.

use std::cmp::Ordering;
use std::ffi::OsStr;
use std::fmt;
use std::str::FromStr;

use icu_locid::Locale;

use crate::collate::{current_locale, FinderCollator};
use crate::error::CoreError;
use crate::fs::entry::FileEntry;

/// The strategy by which entry names are compared.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SortMode {
    /// Raw byte order of the names.
    Name,
    /// Locale-aware, numeric-aware, accent- and width-insensitive order,
    /// as a graphical file browser shows it.
    #[default]
    Finder,
}

impl SortMode {
    /// The identifier a driver uses to select this mode.
    pub fn as_str(self) -> &'static str {
        match self {
            SortMode::Name => "name",
            SortMode::Finder => "finder",
        }
    }
}

impl fmt::Display for SortMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for SortMode {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "name" => Ok(SortMode::Name),
            "finder" => Ok(SortMode::Finder),
            _ => Err(CoreError::UnknownSortMode(s.to_string())),
        }
    }
}

/// Sort order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SortDirection {
    /// A–Z, 1–10 first.
    #[default]
    Ascending,
    /// Z–A, 10–1 first.
    Descending,
}

impl SortDirection {
    /// Maps the legacy reversal flag onto a direction.
    pub fn from_reverse(reverse: bool) -> Self {
        if reverse {
            SortDirection::Descending
        } else {
            SortDirection::Ascending
        }
    }

    /// Returns `true` for [`SortDirection::Descending`].
    pub fn is_reversed(self) -> bool {
        self == SortDirection::Descending
    }
}

/// Everything a sort needs, fixed before the sort starts.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SortOptions {
    pub mode: SortMode,
    pub direction: SortDirection,
    /// Directories precede files regardless of direction.
    pub dirs_first: bool,
    /// Collation locale for [`SortMode::Finder`]; `None` uses the
    /// environment locale.
    pub locale: Option<Locale>,
}

impl Default for SortOptions {
    fn default() -> Self {
        Self {
            mode: SortMode::Finder,
            direction: SortDirection::Ascending,
            dirs_first: true,
            locale: None,
        }
    }
}

/// Sorts a list of file entries according to `options`.
///
/// Returns a **new** sorted `Vec<FileEntry>`; the input slice is never
/// mutated. Both modes order every pair of distinct names, so the result
/// does not depend on the stability of the sort.
pub fn sort_entries(entries: &[FileEntry], options: &SortOptions) -> Vec<FileEntry> {
    tracing::debug!("sorting {} entries by {}", entries.len(), options.mode);

    let mut sorted: Vec<FileEntry> = entries.to_vec();
    let reverse = options.direction.is_reversed();

    match options.mode {
        SortMode::Name => sorted.sort_by(|a, b| {
            compare_entries(a, b, options.dirs_first, |x, y| {
                let ord = x.as_encoded_bytes().cmp(y.as_encoded_bytes());
                if reverse {
                    ord.reverse()
                } else {
                    ord
                }
            })
        }),
        SortMode::Finder => {
            let locale = options.locale.clone().unwrap_or_else(current_locale);
            let collator = FinderCollator::new(&locale, reverse);
            sorted.sort_by(|a, b| {
                compare_entries(a, b, options.dirs_first, |x, y| {
                    collator.compare(Some(x), Some(y))
                })
            });
        }
    }

    sorted
}

fn compare_entries<F>(a: &FileEntry, b: &FileEntry, dirs_first: bool, by_name: F) -> Ordering
where
    F: Fn(&OsStr, &OsStr) -> Ordering,
{
    if dirs_first {
        let dir_cmp = b.is_dir().cmp(&a.is_dir());
        if dir_cmp != Ordering::Equal {
            return dir_cmp;
        }
    }

    by_name(a.name(), b.name())
}
