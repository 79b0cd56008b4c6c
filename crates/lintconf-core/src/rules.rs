//! Read-only view over the `rules` section of an effective configuration
//!
//! Rules are encoded the way ESLint-style configurations do it: a bare
//! severity, or a sequence whose first element is the severity and whose
//! remaining elements are rule options. Nothing here affects resolution.

use std::fmt;

use serde::Serialize;

use crate::value::{ConfigDocument, ConfigValue};

/// Key holding the rule table in a configuration document
pub const RULES_KEY: &str = "rules";

/// How a rule violation is reported
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    Off,
    Warn,
    Error,
}

impl Severity {
    /// Parse a severity given as `"off" | "warn" | "error"` (any case) or `0 | 1 | 2`
    pub fn from_value(value: &ConfigValue) -> Option<Self> {
        match value {
            ConfigValue::String(s) => match s.to_ascii_lowercase().as_str() {
                "off" => Some(Self::Off),
                "warn" => Some(Self::Warn),
                "error" => Some(Self::Error),
                _ => None,
            },
            ConfigValue::Number(n) => match n.as_u64()? {
                0 => Some(Self::Off),
                1 => Some(Self::Warn),
                2 => Some(Self::Error),
                _ => None,
            },
            ConfigValue::Boolean(_) | ConfigValue::Sequence(_) | ConfigValue::Nested(_) => None,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Off => "off",
            Self::Warn => "warn",
            Self::Error => "error",
        }
    }

    pub fn is_enabled(self) -> bool {
        self != Self::Off
    }
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A single rule as configured
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RuleEntry {
    pub name: String,
    pub severity: Severity,
    /// Options following the severity, in order
    pub options: Vec<ConfigValue>,
}

/// A rule whose value could not be interpreted
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("rule `{rule}`: {reason}")]
pub struct RuleError {
    pub rule: String,
    pub reason: String,
}

impl RuleError {
    fn new(rule: &str, reason: impl Into<String>) -> Self {
        Self {
            rule: rule.to_string(),
            reason: reason.into(),
        }
    }
}

/// Interpret one rule value
pub fn parse_rule(name: &str, value: &ConfigValue) -> Result<RuleEntry, RuleError> {
    let (severity_value, options) = match value {
        ConfigValue::Sequence(items) => match items.split_first() {
            Some((first, rest)) => (first, rest.to_vec()),
            None => return Err(RuleError::new(name, "empty rule setting")),
        },
        other => (other, Vec::new()),
    };

    let severity = Severity::from_value(severity_value).ok_or_else(|| {
        RuleError::new(
            name,
            format!("invalid severity {}", describe(severity_value)),
        )
    })?;

    Ok(RuleEntry {
        name: name.to_string(),
        severity,
        options,
    })
}

fn describe(value: &ConfigValue) -> String {
    match value {
        ConfigValue::String(s) => format!("\"{s}\""),
        ConfigValue::Number(n) => n.to_string(),
        other => format!("of type {}", other.kind_name()),
    }
}

/// Every rule in `config`, in key order
///
/// Malformed entries are returned as errors alongside the valid ones. A
/// missing or non-mapping `rules` key yields no entries.
pub fn rule_entries(config: &ConfigDocument) -> Vec<Result<RuleEntry, RuleError>> {
    let Some(rules) = config.get(RULES_KEY).and_then(ConfigValue::as_document) else {
        return Vec::new();
    };
    rules
        .iter()
        .map(|(name, value)| parse_rule(name, value))
        .collect()
}
