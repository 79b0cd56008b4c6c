//! Command implementations for the lintconf CLI

pub mod explain;
pub mod resolve;
pub mod rules;

pub use explain::run_explain;
pub use resolve::run_resolve;
pub use rules::run_rules;
