//! Origin tracking for resolved configuration
//!
//! Performs the same merge as [`resolve`](crate::resolve) while recording,
//! for every leaf of the result, the index of the layer that last wrote it.

use std::collections::BTreeMap;

use crate::value::{ConfigDocument, ConfigValue, KeyPath};
use crate::EffectiveConfig;

/// An effective configuration together with the origin of each leaf
#[derive(Debug, Clone, Default, PartialEq)]
pub struct TracedConfig {
    pub config: EffectiveConfig,
    /// Leaf path to the index of the layer that supplied it
    pub origins: BTreeMap<KeyPath, usize>,
}

impl TracedConfig {
    /// Layer index responsible for the value at `path`
    ///
    /// For a leaf this is the layer that wrote it. For an interior mapping it
    /// is the latest layer that wrote anything underneath it. A path inside a
    /// sequence belongs to the layer that wrote the whole sequence.
    pub fn origin_of(&self, path: &KeyPath) -> Option<usize> {
        if let Some(layer) = self.origins.get(path) {
            return Some(*layer);
        }
        let below = self
            .origins
            .iter()
            .filter(|(leaf, _)| leaf.starts_with(path))
            .map(|(_, layer)| *layer)
            .max();
        if below.is_some() || self.config.get_path(path).is_none() {
            return below;
        }
        let mut ancestor = path.clone();
        while ancestor.pop().is_some() && !ancestor.is_root() {
            if let Some(layer) = self.origins.get(&ancestor) {
                return Some(*layer);
            }
        }
        None
    }

    /// Leaves of the effective configuration in document order, with origins
    pub fn leaves(&self) -> Vec<(KeyPath, &ConfigValue, usize)> {
        self.config
            .leaves()
            .into_iter()
            .filter_map(|(path, value)| {
                let layer = self.origins.get(&path).copied()?;
                Some((path, value, layer))
            })
            .collect()
    }
}

pub(crate) fn resolve_traced<'a, I>(documents: I) -> TracedConfig
where
    I: IntoIterator<Item = &'a ConfigDocument>,
{
    let mut traced = TracedConfig::default();
    for (layer, document) in documents.into_iter().enumerate() {
        tracing::debug!(layer, keys = document.len(), "Merging layer with origin tracking");
        merge_traced(
            &mut traced.config,
            document,
            &mut KeyPath::root(),
            layer,
            &mut traced.origins,
        );
    }
    traced
}

fn merge_traced(
    base: &mut ConfigDocument,
    overlay: &ConfigDocument,
    path: &mut KeyPath,
    layer: usize,
    origins: &mut BTreeMap<KeyPath, usize>,
) {
    for (key, overlay_value) in overlay {
        path.push(key.clone());
        match base.entry_mut(key) {
            Some(base_value) => match (base_value, overlay_value) {
                (ConfigValue::Nested(base_doc), ConfigValue::Nested(overlay_doc)) => {
                    if base_doc.is_empty() {
                        origins.remove(&*path);
                    }
                    merge_traced(base_doc, overlay_doc, path, layer, origins);
                    if base_doc.is_empty() {
                        origins.insert(path.clone(), layer);
                    }
                }
                (base_value, overlay_value) => {
                    origins.retain(|leaf, _| !leaf.starts_with(path));
                    *base_value = overlay_value.clone();
                    record_leaves(overlay_value, path, layer, origins);
                }
            },
            None => {
                base.insert(key.clone(), overlay_value.clone());
                record_leaves(overlay_value, path, layer, origins);
            }
        }
        path.pop();
    }
}

fn record_leaves(
    value: &ConfigValue,
    path: &mut KeyPath,
    layer: usize,
    origins: &mut BTreeMap<KeyPath, usize>,
) {
    match value {
        ConfigValue::Nested(doc) if !doc.is_empty() => {
            for (key, child) in doc {
                path.push(key.clone());
                record_leaves(child, path, layer, origins);
                path.pop();
            }
        }
        _ => {
            origins.insert(path.clone(), layer);
        }
    }
}
