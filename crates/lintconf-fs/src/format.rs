//! Format detection, parsing and rendering

use std::fmt;
use std::path::Path;

use lintconf_core::ConfigDocument;
use serde_json::Value;

use crate::{Error, Result};

/// Serialization format of a configuration layer
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Format {
    Toml,
    Json,
    Yaml,
}

impl Format {
    /// Detect the format from a file extension
    ///
    /// - `.toml` -> TOML
    /// - `.json` -> JSON
    /// - `.yaml`, `.yml` -> YAML
    ///
    /// A path without an extension (such as `.eslintrc`) yields `fallback`.
    pub fn from_path(path: &Path, fallback: Format) -> Result<Self> {
        let Some(extension) = path.extension() else {
            return Ok(fallback);
        };
        let extension = extension.to_string_lossy();
        match extension.to_lowercase().as_str() {
            "toml" => Ok(Self::Toml),
            "json" => Ok(Self::Json),
            "yaml" | "yml" => Ok(Self::Yaml),
            _ => Err(Error::UnsupportedFormat {
                extension: extension.into_owned(),
            }),
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            Self::Toml => "TOML",
            Self::Json => "JSON",
            Self::Yaml => "YAML",
        }
    }

    /// Parse text into an untyped value
    ///
    /// Whitespace-only input is an empty mapping in every format. Errors carry
    /// the parser message only; callers attach the path.
    pub fn parse(self, content: &str) -> std::result::Result<Value, String> {
        if content.trim().is_empty() {
            return Ok(Value::Object(Default::default()));
        }
        match self {
            Self::Toml => {
                let table: toml::Table = toml::from_str(content).map_err(|e| e.to_string())?;
                toml_to_json(toml::Value::Table(table))
            }
            Self::Json => serde_json::from_str(content).map_err(|e| e.to_string()),
            Self::Yaml => serde_yaml::from_str(content).map_err(|e| e.to_string()),
        }
    }

    /// Render a document as text in this format
    pub fn render(self, document: &ConfigDocument) -> Result<String> {
        let rendered = match self {
            Self::Toml => toml::to_string_pretty(document).map_err(|e| e.to_string()),
            Self::Json => serde_json::to_string_pretty(document)
                .map(|mut s| {
                    s.push('\n');
                    s
                })
                .map_err(|e| e.to_string()),
            Self::Yaml => serde_yaml::to_string(document).map_err(|e| e.to_string()),
        };
        rendered.map_err(|message| Error::ConfigSerialize {
            format: self.name().into(),
            message,
        })
    }
}

/// Convert a parsed TOML value, keeping datetimes as their TOML text
fn toml_to_json(value: toml::Value) -> std::result::Result<Value, String> {
    Ok(match value {
        toml::Value::String(s) => Value::String(s),
        toml::Value::Integer(i) => Value::from(i),
        toml::Value::Float(f) => serde_json::Number::from_f64(f)
            .map(Value::Number)
            .ok_or_else(|| format!("unsupported non-finite float {f}"))?,
        toml::Value::Boolean(b) => Value::Bool(b),
        toml::Value::Datetime(dt) => Value::String(dt.to_string()),
        toml::Value::Array(items) => Value::Array(
            items
                .into_iter()
                .map(toml_to_json)
                .collect::<std::result::Result<_, String>>()?,
        ),
        toml::Value::Table(table) => Value::Object(
            table
                .into_iter()
                .map(|(key, item)| Ok((key, toml_to_json(item)?)))
                .collect::<std::result::Result<_, String>>()?,
        ),
    })
}

impl fmt::Display for Format {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
