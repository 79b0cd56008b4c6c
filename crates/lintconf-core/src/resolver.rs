//! Configuration resolution with hierarchical merge
//!
//! Layers are applied in order, later layers overriding earlier ones. The
//! resolver holds no global state; every call builds a fresh result from the
//! layers it is given.

use serde_json::Value;

use crate::trace::{self, TracedConfig};
use crate::value::ConfigDocument;
use crate::{Error, Result};

/// The fully merged configuration after applying all layers
pub type EffectiveConfig = ConfigDocument;

/// Resolve an ordered sequence of documents into one effective configuration
///
/// An empty sequence resolves to an empty document. Inputs are not modified.
///
/// # Example
///
/// ```
/// use lintconf_core::{ConfigDocument, resolve};
/// use serde_json::json;
///
/// let a = ConfigDocument::try_from(json!({ "maxLen": 80, "rules": { "indent": 2 } })).unwrap();
/// let b = ConfigDocument::try_from(json!({ "maxLen": 120, "rules": { "indent": 4, "quotes": "single" } })).unwrap();
///
/// let effective = resolve(&[a, b]);
/// assert_eq!(
///     effective,
///     ConfigDocument::try_from(json!({ "maxLen": 120, "rules": { "indent": 4, "quotes": "single" } })).unwrap()
/// );
/// ```
pub fn resolve<'a, I>(documents: I) -> EffectiveConfig
where
    I: IntoIterator<Item = &'a ConfigDocument>,
{
    let mut effective = ConfigDocument::new();
    for (position, document) in documents.into_iter().enumerate() {
        tracing::debug!(position, keys = document.len(), "Merging layer");
        effective.merge(document);
    }
    effective
}

/// Resolve untyped structured values, as parsed from any serde format
///
/// Every value is converted before merging begins, so a bad input aborts the
/// whole resolution and no partial result is produced.
///
/// # Errors
///
/// [`Error::InvalidDocument`] carrying the position of the first input that
/// is not a mapping or that contains a null.
pub fn resolve_values<I>(values: I) -> Result<EffectiveConfig>
where
    I: IntoIterator<Item = Value>,
{
    let documents = values
        .into_iter()
        .enumerate()
        .map(|(position, value)| {
            ConfigDocument::try_from(value)
                .map_err(|e| Error::invalid_document(position, e.to_string()))
        })
        .collect::<Result<Vec<_>>>()?;
    Ok(resolve(&documents))
}

/// A named configuration layer
///
/// The name is only used for reporting, typically the file it came from.
#[derive(Debug, Clone, PartialEq)]
pub struct Layer {
    pub name: String,
    pub document: ConfigDocument,
}

impl Layer {
    pub fn new(name: impl Into<String>, document: ConfigDocument) -> Self {
        Self {
            name: name.into(),
            document,
        }
    }
}

/// Resolves configuration by merging an explicit list of layers
///
/// ```
/// use lintconf_core::{ConfigDocument, ConfigResolver};
/// use serde_json::json;
///
/// let resolver = ConfigResolver::new()
///     .with_layer("base", ConfigDocument::try_from(json!({ "rules": { "semi": "error" } })).unwrap())
///     .with_layer("local", ConfigDocument::try_from(json!({ "rules": { "semi": "off" } })).unwrap());
///
/// let traced = resolver.resolve_traced();
/// let origin = traced.origin_of(&"rules.semi".parse().unwrap()).unwrap();
/// assert_eq!(resolver.layers()[origin].name, "local");
/// ```
#[derive(Debug, Clone, Default)]
pub struct ConfigResolver {
    layers: Vec<Layer>,
}

impl ConfigResolver {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a layer; it takes precedence over every layer added before it
    pub fn with_layer(mut self, name: impl Into<String>, document: ConfigDocument) -> Self {
        self.push_layer(Layer::new(name, document));
        self
    }

    pub fn push_layer(&mut self, layer: Layer) {
        self.layers.push(layer);
    }

    pub fn layers(&self) -> &[Layer] {
        &self.layers
    }

    /// Resolve all layers into the effective configuration
    pub fn resolve(&self) -> EffectiveConfig {
        resolve(self.layers.iter().map(|l| &l.document))
    }

    /// Resolve and record which layer supplied each leaf value
    pub fn resolve_traced(&self) -> TracedConfig {
        trace::resolve_traced(self.layers.iter().map(|l| &l.document))
    }
}

impl FromIterator<Layer> for ConfigResolver {
    fn from_iter<I: IntoIterator<Item = Layer>>(iter: I) -> Self {
        Self {
            layers: iter.into_iter().collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn resolve_returns_empty_config_for_no_layers() {
        let config = resolve(&[] as &[ConfigDocument]);
        assert!(config.is_empty());
        assert!(ConfigResolver::new().resolve().is_empty());
    }

    #[test]
    fn resolve_values_reports_position_of_first_bad_input() {
        let err = resolve_values(vec![json!({ "a": 1 }), json!({ "b": 2 }), json!("strict"), json!(7)])
            .unwrap_err();

        assert_eq!(err.position(), 2);
        assert!(err.to_string().contains("position 2"), "got: {err}");
        assert!(err.to_string().contains("string"), "got: {err}");
    }

    #[test]
    fn resolve_values_merges_valid_inputs() {
        let config = resolve_values(vec![
            json!({ "env": { "browser": true } }),
            json!({ "env": { "node": true } }),
        ])
        .unwrap();

        assert_eq!(
            config,
            ConfigDocument::try_from(json!({ "env": { "browser": true, "node": true } })).unwrap()
        );
    }

    #[test]
    fn resolver_matches_free_function() {
        let a = ConfigDocument::try_from(json!({ "x": 1, "y": { "z": 2 } })).unwrap();
        let b = ConfigDocument::try_from(json!({ "y": { "w": 3 } })).unwrap();

        let resolver: ConfigResolver = vec![Layer::new("a", a.clone()), Layer::new("b", b.clone())]
            .into_iter()
            .collect();

        assert_eq!(resolver.resolve(), resolve(&[a, b]));
        assert_eq!(resolver.layers().len(), 2);
    }
}
