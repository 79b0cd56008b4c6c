//! Layered linter configuration resolution
//!
//! This crate merges an ordered sequence of configuration documents into a
//! single effective configuration:
//!
//! - **Value model**: [`ConfigDocument`] and the tagged [`ConfigValue`]
//! - **Resolution**: later layers override earlier ones, mappings merge key by
//!   key, everything else (sequences included) is replaced wholesale
//! - **Origin tracing**: which layer supplied each leaf of the result
//! - **Rule view**: read-only interpretation of the `rules` section
//!
//! Loading documents from disk lives in `lintconf-fs`; the linter that
//! consumes the effective configuration is external.
//!
//! # Example
//!
//! ```
//! use lintconf_core::{ConfigDocument, resolve};
//! use serde_json::json;
//!
//! let base = ConfigDocument::try_from(json!({ "extends": ["base"] })).unwrap();
//! let strict = ConfigDocument::try_from(json!({ "extends": ["base", "strict"] })).unwrap();
//!
//! let effective = resolve(&[base, strict]);
//! assert_eq!(effective.get("extends").unwrap().as_sequence().unwrap().len(), 2);
//! ```

pub mod error;
mod merge;
pub mod resolver;
pub mod rules;
pub mod trace;
pub mod value;

pub use error::{Error, Result, ValueError};
pub use resolver::{ConfigResolver, EffectiveConfig, Layer, resolve, resolve_values};
pub use rules::{RuleEntry, RuleError, Severity, rule_entries};
pub use trace::TracedConfig;
pub use value::{ConfigDocument, ConfigValue, KeyPath};
