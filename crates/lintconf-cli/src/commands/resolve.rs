//! Resolve command implementation

use std::path::{Path, PathBuf};

use colored::Colorize;
use lintconf_core::{ConfigResolver, EffectiveConfig};
use lintconf_fs::{DocumentStore, Format};

use crate::error::Result;

/// Load the given files as layers, in order
pub fn load_resolver(files: &[PathBuf]) -> Result<ConfigResolver> {
    let layers = DocumentStore::new().load_layers(files)?;
    tracing::debug!(layers = layers.len(), "Loaded configuration layers");
    Ok(layers.into_iter().collect())
}

/// Resolve the layers and print or write the effective configuration
pub fn run_resolve(files: &[PathBuf], format: Format, output: Option<&Path>) -> Result<()> {
    let effective = load_resolver(files)?.resolve();
    emit(&effective, format, output)
}

fn emit(effective: &EffectiveConfig, format: Format, output: Option<&Path>) -> Result<()> {
    match output {
        Some(path) => {
            DocumentStore::new().save(path, effective)?;
            eprintln!(
                "{} Wrote effective configuration to {}",
                "OK".green().bold(),
                path.display().to_string().cyan()
            );
        }
        None => print!("{}", format.render(effective)?),
    }
    Ok(())
}
