//! Linguistic comparison engines.
//!
//! [`NameCollation`] is the seam between the Finder-style comparator and the
//! library that knows how a language orders its letters. [`IcuCollation`]
//! binds it to ICU4X with compiled CLDR data.

use std::cmp::Ordering;
use std::fmt;

use icu_collator::{CaseLevel, Collator, CollatorOptions, Numeric, Strength};
use icu_locid::Locale;
use icu_provider::DataLocale;

use crate::error::{CoreError, CoreResult};

/// Compares two strings with locale-aware, numeric-aware,
/// diacritic-insensitive and width-insensitive semantics.
///
/// Implementations may report `Equal` for strings that differ in bytes;
/// the caller is responsible for breaking such ties.
pub trait NameCollation {
    /// Returns the linguistic order of `a` relative to `b`.
    fn collate(&self, a: &str, b: &str) -> Ordering;
}

impl<C: NameCollation + ?Sized> NameCollation for &C {
    fn collate(&self, a: &str, b: &str) -> Ordering {
        (**self).collate(a, b)
    }
}

/// ICU4X collator configured the way a graphical file browser sorts names.
///
/// Primary strength drops accents and width variants. Case level keeps
/// upper/lower case distinct without reviving accent differences, and numeric
/// ordering compares digit runs by value.
pub struct IcuCollation {
    locale: Locale,
    collator: Collator,
}

impl IcuCollation {
    /// Builds a collator for `locale` from the compiled CLDR data.
    ///
    /// # Errors
    ///
    /// [`CoreError::Collation`] if ICU cannot provide collation data for the
    /// locale.
    pub fn try_new(locale: &Locale) -> CoreResult<Self> {
        let collator = Collator::try_new(&DataLocale::from(locale), finder_options())
            .map_err(|e| CoreError::Collation(format!("{e:?}")))?;

        Ok(Self {
            locale: locale.clone(),
            collator,
        })
    }

    /// The locale whose tailoring this collator applies.
    #[must_use]
    pub fn locale(&self) -> &Locale {
        &self.locale
    }
}

impl NameCollation for IcuCollation {
    fn collate(&self, a: &str, b: &str) -> Ordering {
        self.collator.compare(a, b)
    }
}

impl fmt::Debug for IcuCollation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("IcuCollation")
            .field("locale", &self.locale.to_string())
            .finish_non_exhaustive()
    }
}

fn finder_options() -> CollatorOptions {
    let mut options = CollatorOptions::new();
    options.strength = Some(Strength::Primary);
    options.case_level = Some(CaseLevel::On);
    options.numeric = Some(Numeric::On);
    options
}
