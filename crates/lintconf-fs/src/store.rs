//! Format-agnostic configuration layer loading and saving

use std::path::Path;

use lintconf_core::{ConfigDocument, Layer};

use crate::format::Format;
use crate::{Error, Result, io};

/// Loads configuration layers from disk and writes resolved output back.
///
/// Format is detected from the file extension. Files without an extension
/// are read with the fallback format (YAML unless configured otherwise),
/// which also accepts JSON.
#[derive(Debug, Clone)]
pub struct DocumentStore {
    fallback: Format,
}

impl Default for DocumentStore {
    fn default() -> Self {
        Self {
            fallback: Format::Yaml,
        }
    }
}

impl DocumentStore {
    /// Create a new DocumentStore with YAML as the fallback format.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a DocumentStore that reads extension-less files as `fallback`.
    pub fn with_fallback_format(fallback: Format) -> Self {
        Self { fallback }
    }

    /// Format that would be used for `path`
    pub fn format_for(&self, path: &Path) -> Result<Format> {
        Format::from_path(path, self.fallback)
    }

    /// Load one configuration document.
    ///
    /// # Errors
    ///
    /// - [`Error::Io`] if the file cannot be read
    /// - [`Error::ConfigParse`] if the content is not valid for its format
    /// - [`Error::InvalidDocument`] if the top level is not a mapping or a
    ///   null appears anywhere in it
    pub fn load(&self, path: &Path) -> Result<ConfigDocument> {
        let format = self.format_for(path)?;
        let content = io::read_text(path)?;
        tracing::debug!(path = %path.display(), %format, "Loading configuration layer");

        let value = format.parse(&content).map_err(|message| Error::ConfigParse {
            path: path.to_path_buf(),
            format: format.name().into(),
            message,
        })?;

        ConfigDocument::try_from(value).map_err(|e| Error::InvalidDocument {
            path: path.to_path_buf(),
            reason: e.to_string(),
        })
    }

    /// Load layers in order, each named after its path.
    ///
    /// Stops at the first file that fails to load.
    pub fn load_layers<P: AsRef<Path>>(&self, paths: &[P]) -> Result<Vec<Layer>> {
        paths
            .iter()
            .map(|path| {
                let path = path.as_ref();
                let document = self.load(path)?;
                Ok(Layer::new(path.display().to_string(), document))
            })
            .collect()
    }

    /// Save a document in the format given by the path's extension.
    ///
    /// Uses atomic write to prevent corruption.
    pub fn save(&self, path: &Path, document: &ConfigDocument) -> Result<()> {
        let content = self.format_for(path)?.render(document)?;
        io::write_atomic(path, content.as_bytes())
    }
}
