//! Finder-style name collation.
//!
//! [`FinderCollator`] orders names by locale-aware, numeric-aware,
//! accent-insensitive and width-insensitive collation, breaking linguistic
//! ties on raw bytes so every pair of distinct names has a fixed order.
//! [`compare_names`] is the one-shot form using the environment locale.

pub mod engine;
pub mod finder;
pub mod locale;

pub use engine::{IcuCollation, NameCollation};
pub use finder::{compare_names, ordering_sign, FinderCollator};
pub use locale::{current_locale, locale_from_vars, parse_posix_locale};
