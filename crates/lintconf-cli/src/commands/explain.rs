//! Explain command: where did this value come from

use std::path::PathBuf;

use colored::Colorize;
use lintconf_core::{ConfigValue, KeyPath};

use crate::commands::resolve::load_resolver;
use crate::error::{CliError, Result};

pub fn run_explain(files: &[PathBuf], key: &str) -> Result<()> {
    let path = KeyPath::parse(key);
    if path.is_root() {
        return Err(CliError::user("Key path must not be empty"));
    }

    let resolver = load_resolver(files)?;
    let traced = resolver.resolve_traced();

    let value = traced
        .config
        .get_path(&path)
        .ok_or_else(|| CliError::user(format!("Key '{}' is not set by any layer", path)))?;
    let origin = traced
        .origin_of(&path)
        .and_then(|index| resolver.layers().get(index))
        .map(|layer| layer.name.as_str())
        .unwrap_or("(unknown)");

    println!("{} = {}", path.to_string().bold(), render_value(value)?);
    match value {
        ConfigValue::Nested(doc) if !doc.is_empty() => {
            println!("  {} {}", "last changed by:".dimmed(), origin.cyan());
        }
        _ => println!("  {} {}", "set by:".dimmed(), origin.cyan()),
    }
    Ok(())
}

fn render_value(value: &ConfigValue) -> Result<String> {
    Ok(serde_json::to_string(value)?)
}
