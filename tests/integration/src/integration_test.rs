//! End-to-end integration test over the fixture layers
//!
//! Exercises the complete flow: load layers from disk -> resolve -> trace
//! origins -> write the effective configuration back out.

use std::path::PathBuf;

use lintconf_core::{ConfigDocument, ConfigResolver, KeyPath, Severity, resolve_values, rule_entries};
use lintconf_fs::{DocumentStore, Format};
use pretty_assertions::assert_eq;
use tempfile::TempDir;

fn fixtures_dir() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("../../test-fixtures/layers")
}

/// Layers in precedence order, one per supported input format
fn fixture_layers() -> Vec<PathBuf> {
    ["base.json", "jsdoc.yaml", "project.toml", ".eslintrc"]
        .iter()
        .map(|name| fixtures_dir().join(name))
        .collect()
}

fn load_resolver() -> ConfigResolver {
    DocumentStore::new()
        .load_layers(&fixture_layers())
        .expect("fixture layers should load")
        .into_iter()
        .collect()
}

fn expected() -> ConfigDocument {
    DocumentStore::new()
        .load(&fixtures_dir().join("expected.json"))
        .expect("expected fixture should load")
}

#[test]
fn test_fixture_layers_resolve_to_expected() {
    let effective = load_resolver().resolve();
    assert_eq!(effective, expected());

    let keys: Vec<&str> = effective.keys().collect();
    assert_eq!(keys, vec!["env", "extends", "rules"]);
}

#[test]
fn test_fixture_origins() {
    let resolver = load_resolver();
    let traced = resolver.resolve_traced();

    let file_of = |dotted: &str| -> String {
        let index = traced
            .origin_of(&KeyPath::parse(dotted))
            .unwrap_or_else(|| panic!("no origin for {dotted}"));
        PathBuf::from(&resolver.layers()[index].name)
            .file_name()
            .unwrap()
            .to_string_lossy()
            .into_owned()
    };

    assert_eq!(file_of("env.browser"), "base.json");
    assert_eq!(file_of("env.node"), ".eslintrc");
    assert_eq!(file_of("extends"), "jsdoc.yaml");
    assert_eq!(file_of("rules.max-len"), "project.toml");
    assert_eq!(file_of("rules.indent"), "project.toml");
    assert_eq!(file_of("rules.jsdoc/require-file-overview"), ".eslintrc");
}

#[test]
fn test_fixture_rules() {
    let effective = load_resolver().resolve();

    let rules: Vec<(String, Severity)> = rule_entries(&effective)
        .into_iter()
        .map(|entry| entry.expect("fixture rules are well formed"))
        .map(|entry| (entry.name, entry.severity))
        .collect();

    assert_eq!(
        rules,
        vec![
            ("max-len".to_string(), Severity::Error),
            ("indent".to_string(), Severity::Error),
            ("jsdoc/require-file-overview".to_string(), Severity::Warn),
        ]
    );
}

#[test]
fn test_effective_config_survives_every_output_format() {
    let effective = load_resolver().resolve();
    let temp = TempDir::new().unwrap();
    let store = DocumentStore::new();

    for (name, format) in [
        ("effective.json", Format::Json),
        ("effective.yaml", Format::Yaml),
        ("effective.toml", Format::Toml),
    ] {
        let path = temp.path().join(name);
        store.save(&path, &effective).unwrap();

        let reloaded = store.load(&path).unwrap();
        assert_eq!(reloaded, effective, "{format} output should reload unchanged");
    }
}

#[test]
fn test_untyped_values_match_file_loading() {
    let values: Vec<serde_json::Value> = ["base.json", ".eslintrc"]
        .iter()
        .map(|name| {
            let text = std::fs::read_to_string(fixtures_dir().join(name)).unwrap();
            serde_json::from_str(&text).unwrap()
        })
        .collect();

    let from_values = resolve_values(values).unwrap();
    let from_files: ConfigResolver = DocumentStore::new()
        .load_layers(&[fixtures_dir().join("base.json"), fixtures_dir().join(".eslintrc")])
        .unwrap()
        .into_iter()
        .collect();

    assert_eq!(from_values, from_files.resolve());
}
