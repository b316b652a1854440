//! finsort core library — Finder-style ordering of file listings.
//!
//! `finsort-core` orders directory entries the way a graphical file browser
//! shows them rather than by raw byte value. It does not read directories or
//! render output; a listing driver selects the `finder` strategy and hands
//! entries or names to it.
//!
//! # Modules
//!
//! - [`collate`] — The name comparator: [`FinderCollator`], [`compare_names`], locale resolution.
//! - [`fs`] — [`FileEntry`], the raw name plus directory flag a sort works on.
//! - [`nav`] — Sort strategies ([`SortMode`]) and [`sort_entries`].
//! - [`config`] — TOML-based sort preferences.
//! - [`error`] — Unified error type ([`CoreError`]) and result alias ([`CoreResult`]).

pub mod collate;
pub mod config;
pub mod error;
pub mod fs;
pub mod nav;

pub use collate::{
    compare_names, current_locale, ordering_sign, parse_posix_locale, FinderCollator,
    IcuCollation, NameCollation,
};
pub use config::settings::{Config, SortConfig};
pub use error::{CoreError, CoreResult};
pub use fs::entry::FileEntry;
pub use nav::sort::{sort_entries, SortDirection, SortMode, SortOptions};

/// Normalises a string to NFC (composed) form.
///
/// macOS stores filenames in NFD (decomposed), which causes accented letters
/// and Korean Hangul to appear as separate marks. This helper re-composes them.
pub fn nfc_string(s: &str) -> String {
    use unicode_normalization::UnicodeNormalization;
    s.nfc().collect()
}
