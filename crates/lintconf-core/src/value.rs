//! Configuration value model
//!
//! A [`ConfigDocument`] is one layer of configuration: an insertion-ordered
//! mapping from option names to [`ConfigValue`]s. Values are a closed set of
//! variants so merge behavior can be matched exhaustively.

use std::fmt;

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use serde_json::{Number, Value};

use crate::error::ValueError;

/// A single configuration value
///
/// Serializes without a tag, so a document round-trips through JSON, YAML
/// and TOML as plain data.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ConfigValue {
    Boolean(bool),
    Number(Number),
    String(String),
    /// Ordered sequence, e.g. a `[severity, options]` rule tuple
    Sequence(Vec<ConfigValue>),
    Nested(ConfigDocument),
}

impl ConfigValue {
    /// Short lowercase name of the variant, used in diagnostics
    pub fn kind_name(&self) -> &'static str {
        match self {
            Self::Boolean(_) => "boolean",
            Self::Number(_) => "number",
            Self::String(_) => "string",
            Self::Sequence(_) => "sequence",
            Self::Nested(_) => "mapping",
        }
    }

    pub fn as_document(&self) -> Option<&ConfigDocument> {
        match self {
            Self::Nested(doc) => Some(doc),
            _ => None,
        }
    }

    pub fn as_sequence(&self) -> Option<&[ConfigValue]> {
        match self {
            Self::Sequence(items) => Some(items),
            _ => None,
        }
    }

    pub fn as_str(&self) -> Option<&str> {
        match self {
            Self::String(s) => Some(s),
            _ => None,
        }
    }

    pub fn as_bool(&self) -> Option<bool> {
        match self {
            Self::Boolean(b) => Some(*b),
            _ => None,
        }
    }

    pub fn as_i64(&self) -> Option<i64> {
        match self {
            Self::Number(n) => n.as_i64(),
            _ => None,
        }
    }

    /// Convert into an untyped JSON value for handing to external tools
    pub fn to_json(&self) -> Value {
        match self {
            Self::Boolean(b) => Value::Bool(*b),
            Self::Number(n) => Value::Number(n.clone()),
            Self::String(s) => Value::String(s.clone()),
            Self::Sequence(items) => Value::Array(items.iter().map(ConfigValue::to_json).collect()),
            Self::Nested(doc) => doc.to_json(),
        }
    }

    fn from_json_at(value: Value, path: &mut KeyPath) -> Result<Self, ValueError> {
        Ok(match value {
            Value::Null => return Err(ValueError::Null { path: path.clone() }),
            Value::Bool(b) => Self::Boolean(b),
            Value::Number(n) => Self::Number(n),
            Value::String(s) => Self::String(s),
            Value::Array(items) => {
                let mut out = Vec::with_capacity(items.len());
                for (index, item) in items.into_iter().enumerate() {
                    path.push(index.to_string());
                    out.push(Self::from_json_at(item, path)?);
                    path.pop();
                }
                Self::Sequence(out)
            }
            Value::Object(map) => {
                let mut doc = ConfigDocument::new();
                for (key, item) in map {
                    path.push(key.clone());
                    let converted = Self::from_json_at(item, path)?;
                    path.pop();
                    doc.insert(key, converted);
                }
                Self::Nested(doc)
            }
        })
    }
}

impl TryFrom<Value> for ConfigValue {
    type Error = ValueError;

    fn try_from(value: Value) -> Result<Self, Self::Error> {
        Self::from_json_at(value, &mut KeyPath::root())
    }
}

impl From<bool> for ConfigValue {
    fn from(value: bool) -> Self {
        Self::Boolean(value)
    }
}

impl From<i32> for ConfigValue {
    fn from(value: i32) -> Self {
        Self::Number(value.into())
    }
}

impl From<i64> for ConfigValue {
    fn from(value: i64) -> Self {
        Self::Number(value.into())
    }
}

impl From<u64> for ConfigValue {
    fn from(value: u64) -> Self {
        Self::Number(value.into())
    }
}

impl From<&str> for ConfigValue {
    fn from(value: &str) -> Self {
        Self::String(value.to_string())
    }
}

impl From<String> for ConfigValue {
    fn from(value: String) -> Self {
        Self::String(value)
    }
}

impl From<Vec<ConfigValue>> for ConfigValue {
    fn from(value: Vec<ConfigValue>) -> Self {
        Self::Sequence(value)
    }
}

impl From<ConfigDocument> for ConfigValue {
    fn from(value: ConfigDocument) -> Self {
        Self::Nested(value)
    }
}

/// One layer of configuration
///
/// Keys keep their insertion order. Equality ignores order: two documents are
/// equal when they hold the same keys with equal values.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ConfigDocument {
    entries: IndexMap<String, ConfigValue>,
}

impl ConfigDocument {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn contains_key(&self, key: &str) -> bool {
        self.entries.contains_key(key)
    }

    pub fn get(&self, key: &str) -> Option<&ConfigValue> {
        self.entries.get(key)
    }

    /// Look up a value by walking nested documents along `path`
    ///
    /// Inside a sequence a segment is read as an element index. The empty
    /// path has no value; use the document itself.
    pub fn get_path(&self, path: &KeyPath) -> Option<&ConfigValue> {
        let (first, rest) = path.segments().split_first()?;
        let mut current = self.entries.get(first)?;
        for segment in rest {
            current = match current {
                ConfigValue::Nested(doc) => doc.entries.get(segment)?,
                ConfigValue::Sequence(items) => items.get(segment.parse::<usize>().ok()?)?,
                _ => return None,
            };
        }
        Some(current)
    }

    /// Insert a value, returning the previous one for this key
    ///
    /// An existing key keeps its position.
    pub fn insert(&mut self, key: impl Into<String>, value: impl Into<ConfigValue>) -> Option<ConfigValue> {
        self.entries.insert(key.into(), value.into())
    }

    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.entries.keys().map(String::as_str)
    }

    pub fn iter(&self) -> indexmap::map::Iter<'_, String, ConfigValue> {
        self.entries.iter()
    }

    pub(crate) fn entry_mut(&mut self, key: &str) -> Option<&mut ConfigValue> {
        self.entries.get_mut(key)
    }

    /// All leaf paths in document order
    ///
    /// A leaf is any value that is not a mapping, or an empty mapping.
    pub fn leaves(&self) -> Vec<(KeyPath, &ConfigValue)> {
        let mut out = Vec::new();
        collect_leaves(self, &mut KeyPath::root(), &mut out);
        out
    }

    pub fn to_json(&self) -> Value {
        Value::Object(
            self.entries
                .iter()
                .map(|(k, v)| (k.clone(), v.to_json()))
                .collect(),
        )
    }
}

fn collect_leaves<'a>(doc: &'a ConfigDocument, path: &mut KeyPath, out: &mut Vec<(KeyPath, &'a ConfigValue)>) {
    for (key, value) in &doc.entries {
        path.push(key.clone());
        match value {
            ConfigValue::Nested(child) if !child.is_empty() => collect_leaves(child, path, out),
            _ => out.push((path.clone(), value)),
        }
        path.pop();
    }
}

impl TryFrom<Value> for ConfigDocument {
    type Error = ValueError;

    fn try_from(value: Value) -> Result<Self, Self::Error> {
        match value {
            Value::Object(_) => match ConfigValue::try_from(value)? {
                ConfigValue::Nested(doc) => Ok(doc),
                other => Err(ValueError::NotAMapping {
                    found: other.kind_name(),
                }),
            },
            other => Err(ValueError::NotAMapping {
                found: json_kind_name(&other),
            }),
        }
    }
}

fn json_kind_name(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "sequence",
        Value::Object(_) => "mapping",
    }
}

impl<K: Into<String>, V: Into<ConfigValue>> FromIterator<(K, V)> for ConfigDocument {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self {
            entries: iter.into_iter().map(|(k, v)| (k.into(), v.into())).collect(),
        }
    }
}

impl<'a> IntoIterator for &'a ConfigDocument {
    type Item = (&'a String, &'a ConfigValue);
    type IntoIter = indexmap::map::Iter<'a, String, ConfigValue>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.iter()
    }
}

/// Location of a value inside a document, from the root down
///
/// Displays dot-joined, e.g. `rules.max-len`. Sequence elements use their
/// index as the segment.
#[derive(Debug, Clone, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct KeyPath(Vec<String>);

impl KeyPath {
    pub fn root() -> Self {
        Self::default()
    }

    /// Parse a dot-separated path; empty segments are ignored
    ///
    /// There is no escaping, so a key containing `.` cannot be expressed.
    pub fn parse(dotted: &str) -> Self {
        Self(
            dotted
                .split('.')
                .filter(|s| !s.is_empty())
                .map(str::to_string)
                .collect(),
        )
    }

    pub fn segments(&self) -> &[String] {
        &self.0
    }

    pub fn is_root(&self) -> bool {
        self.0.is_empty()
    }

    pub fn push(&mut self, segment: impl Into<String>) {
        self.0.push(segment.into());
    }

    pub fn pop(&mut self) -> Option<String> {
        self.0.pop()
    }

    pub fn child(&self, segment: impl Into<String>) -> Self {
        let mut next = self.clone();
        next.push(segment);
        next
    }

    /// True when `self` is `prefix` or lies underneath it
    pub fn starts_with(&self, prefix: &KeyPath) -> bool {
        self.0.starts_with(&prefix.0)
    }
}

impl fmt::Display for KeyPath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.0.is_empty() {
            return f.write_str("<root>");
        }
        f.write_str(&self.0.join("."))
    }
}

impl std::str::FromStr for KeyPath {
    type Err = std::convert::Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(Self::parse(s))
    }
}

impl<S: Into<String>> FromIterator<S> for KeyPath {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        Self(iter.into_iter().map(Into::into).collect())
    }
}
