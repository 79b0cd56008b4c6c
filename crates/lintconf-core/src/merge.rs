//! The single-step layer merge
//!
//! Nested documents merge key by key. Every other value, sequences included,
//! is replaced wholesale by the overlay.

use crate::value::{ConfigDocument, ConfigValue};

impl ConfigDocument {
    /// Merge `overlay` into this document, `overlay` taking precedence
    ///
    /// For every key in `overlay`:
    /// - both sides nested: merged recursively
    /// - otherwise: the overlay value replaces the existing one
    ///
    /// Keys new to this document are appended in overlay order.
    ///
    /// # Example
    ///
    /// ```
    /// use lintconf_core::ConfigDocument;
    /// use serde_json::json;
    ///
    /// let mut base = ConfigDocument::try_from(json!({ "extends": ["base"] })).unwrap();
    /// let overlay = ConfigDocument::try_from(json!({ "extends": ["base", "strict"] })).unwrap();
    /// base.merge(&overlay);
    ///
    /// assert_eq!(base.get("extends").unwrap().as_sequence().unwrap().len(), 2);
    /// ```
    pub fn merge(&mut self, overlay: &ConfigDocument) {
        for (key, overlay_value) in overlay {
            match self.entry_mut(key) {
                Some(base_value) => merge_value(base_value, overlay_value),
                None => {
                    self.insert(key.clone(), overlay_value.clone());
                }
            }
        }
    }
}

fn merge_value(base: &mut ConfigValue, overlay: &ConfigValue) {
    match (base, overlay) {
        (ConfigValue::Nested(base_doc), ConfigValue::Nested(overlay_doc)) => {
            base_doc.merge(overlay_doc);
        }
        (base, overlay) => {
            tracing::trace!(
                from = base.kind_name(),
                to = overlay.kind_name(),
                "replacing value"
            );
            *base = overlay.clone();
        }
    }
}
