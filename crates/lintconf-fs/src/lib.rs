//! Configuration layer I/O for lintconf
//!
//! Reads TOML, JSON and YAML layers into [`ConfigDocument`]s and writes
//! resolved configurations back out atomically.
//!
//! [`ConfigDocument`]: lintconf_core::ConfigDocument

pub mod error;
pub mod format;
pub mod io;
pub mod store;

pub use error::{Error, Result};
pub use format::Format;
pub use store::DocumentStore;
