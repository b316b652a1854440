//! Ordering of entry listings.
//!
//! [`sort::SortMode`] names the available strategies and
//! [`sort::sort_entries`] applies one to a slice of entries.

pub mod sort;
