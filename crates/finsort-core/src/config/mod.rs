//! Configuration for finsort.
//!
//! Sort preferences are read from a TOML file; see [`settings::Config`].

pub mod settings;
