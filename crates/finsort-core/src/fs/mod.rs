//! File system abstractions for finsort.
//!
//! [`entry::FileEntry`] carries the raw name a sort compares alongside the
//! directory flag used for directories-first ordering.

pub mod entry;
