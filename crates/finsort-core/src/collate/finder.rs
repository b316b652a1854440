//! The Finder-style name comparator.

use std::cmp::Ordering;
use std::ffi::OsStr;

use icu_locid::Locale;

use super::engine::{IcuCollation, NameCollation};
use super::locale::current_locale;

/// Orders entry names the way a graphical file browser does.
///
/// A `FinderCollator` is built once when a sort starts and is immutable
/// afterwards, so the reversal flag cannot change under an in-flight sort.
/// Comparison never fails: when no engine is available, or a name is not
/// valid UTF-8, names are ordered by their raw bytes instead.
///
/// # Examples
///
/// ```
/// use finsort_core::collate::FinderCollator;
/// use std::cmp::Ordering;
///
/// let collator = FinderCollator::new(&"en".parse().unwrap(), false);
/// assert_eq!(collator.compare_str(Some("img2"), Some("img10")), Ordering::Less);
/// assert_eq!(collator.compare_str(None, Some("")), Ordering::Equal);
/// ```
#[derive(Debug)]
pub struct FinderCollator<C = IcuCollation> {
    engine: Option<C>,
    reverse: bool,
}

impl FinderCollator<IcuCollation> {
    /// Builds a collator for `locale`.
    ///
    /// If ICU cannot provide an engine for the locale the collator still
    /// works, comparing byte-wise.
    pub fn new(locale: &Locale, reverse: bool) -> Self {
        let engine = match IcuCollation::try_new(locale) {
            Ok(engine) => Some(engine),
            Err(e) => {
                tracing::debug!("{e}; comparing names byte-wise");
                None
            }
        };
        Self { engine, reverse }
    }

    /// Builds a collator for the locale of the process environment.
    pub fn from_env(reverse: bool) -> Self {
        Self::new(&current_locale(), reverse)
    }

    /// A collator without a linguistic engine. Every comparison takes the
    /// byte-order path.
    pub fn unavailable(reverse: bool) -> Self {
        Self {
            engine: None,
            reverse,
        }
    }
}

impl<C: NameCollation> FinderCollator<C> {
    /// Builds a collator around a caller-supplied engine.
    pub fn with_engine(engine: C, reverse: bool) -> Self {
        Self {
            engine: Some(engine),
            reverse,
        }
    }

    /// Returns `true` if results are negated.
    #[must_use]
    pub fn is_reversed(&self) -> bool {
        self.reverse
    }

    /// Returns `true` if a linguistic engine is in use.
    #[must_use]
    pub fn has_engine(&self) -> bool {
        self.engine.is_some()
    }

    /// Compares two entry names. An absent name is the empty name.
    pub fn compare(&self, a: Option<&OsStr>, b: Option<&OsStr>) -> Ordering {
        let a = a.unwrap_or_default();
        let b = b.unwrap_or_default();

        let ord = collate_or_bytes(self.engine.as_ref(), a, b);
        if self.reverse {
            ord.reverse()
        } else {
            ord
        }
    }

    /// [`compare`](Self::compare) for names already held as `str`.
    pub fn compare_str(&self, a: Option<&str>, b: Option<&str>) -> Ordering {
        self.compare(a.map(OsStr::new), b.map(OsStr::new))
    }
}

/// Compares two entry names using the current locale.
///
/// The collation engine is acquired for this call only and released before
/// returning. For sorting many names, build one [`FinderCollator`] instead.
pub fn compare_names(a: Option<&OsStr>, b: Option<&OsStr>, reverse: bool) -> Ordering {
    FinderCollator::from_env(reverse).compare(a, b)
}

/// Converts an ordering to `-1`, `0` or `1`.
#[must_use]
pub fn ordering_sign(ordering: Ordering) -> i32 {
    ordering as i32
}

fn collate_or_bytes<C: NameCollation>(engine: Option<&C>, a: &OsStr, b: &OsStr) -> Ordering {
    let raw_a = a.as_encoded_bytes();
    let raw_b = b.as_encoded_bytes();

    let Some(engine) = engine else {
        return raw_a.cmp(raw_b);
    };
    let (Some(text_a), Some(text_b)) = (a.to_str(), b.to_str()) else {
        tracing::trace!("non UTF-8 name; comparing byte-wise");
        return raw_a.cmp(raw_b);
    };

    // Linguistically equal names still get a total order from their
    // original bytes, not from any normalized form.
    match engine.collate(text_a, text_b) {
        Ordering::Equal => raw_a.cmp(raw_b),
        ord => ord,
    }
}
