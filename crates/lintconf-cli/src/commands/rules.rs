//! Rules command: list the effective rule table

use std::path::PathBuf;

use colored::Colorize;
use lintconf_core::{Severity, rule_entries};

use crate::commands::resolve::load_resolver;
use crate::error::Result;

pub fn run_rules(files: &[PathBuf], json: bool) -> Result<()> {
    let effective = load_resolver(files)?.resolve();
    let entries = rule_entries(&effective);

    let (valid, invalid): (Vec<_>, Vec<_>) = entries.into_iter().partition(|e| e.is_ok());
    let valid: Vec<_> = valid.into_iter().filter_map(|e| e.ok()).collect();
    let invalid: Vec<_> = invalid.into_iter().filter_map(|e| e.err()).collect();

    if json {
        let output = serde_json::json!({
            "rules": valid,
            "errors": invalid.iter().map(ToString::to_string).collect::<Vec<_>>(),
        });
        println!("{}", serde_json::to_string_pretty(&output)?);
        return Ok(());
    }

    if valid.is_empty() && invalid.is_empty() {
        println!("{}", "No rules configured.".dimmed());
        return Ok(());
    }

    let width = valid.iter().map(|e| e.name.len()).max().unwrap_or(0);
    for entry in &valid {
        let severity = match entry.severity {
            Severity::Off => entry.severity.as_str().dimmed(),
            Severity::Warn => entry.severity.as_str().yellow(),
            Severity::Error => entry.severity.as_str().red(),
        };
        if entry.options.is_empty() {
            println!("  {:<5}  {}", severity, entry.name);
        } else {
            println!(
                "  {:<5}  {:<width$}  {}",
                severity,
                entry.name,
                serde_json::to_string(&entry.options)?,
                width = width
            );
        }
    }

    for error in &invalid {
        eprintln!("{}: {}", "warning".yellow().bold(), error);
    }

    Ok(())
}
