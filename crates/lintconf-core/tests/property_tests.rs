use lintconf_core::{ConfigDocument, ConfigResolver, ConfigValue, resolve};
use proptest::prelude::*;

/// Small key alphabet so generated layers overlap often
fn key() -> impl Strategy<Value = String> {
    "[a-d]{1,2}"
}

fn value() -> impl Strategy<Value = ConfigValue> {
    let leaf = prop_oneof![
        any::<bool>().prop_map(ConfigValue::from),
        any::<i64>().prop_map(ConfigValue::from),
        "[a-z]{0,6}".prop_map(ConfigValue::from),
    ];
    leaf.prop_recursive(3, 24, 4, |inner| {
        prop_oneof![
            prop::collection::vec(inner.clone(), 0..4).prop_map(ConfigValue::from),
            prop::collection::vec((key(), inner), 0..4)
                .prop_map(|entries| ConfigValue::from(entries.into_iter().collect::<ConfigDocument>())),
        ]
    })
}

fn document() -> impl Strategy<Value = ConfigDocument> {
    prop::collection::vec((key(), value()), 0..5).prop_map(|entries| entries.into_iter().collect())
}

fn top_level_keys(doc: &ConfigDocument) -> Vec<String> {
    doc.keys().map(str::to_string).collect()
}

proptest! {
    #[test]
    fn test_identity(d in document()) {
        prop_assert_eq!(resolve(&[d.clone()]), d);
    }

    #[test]
    fn test_idempotence(a in document(), b in document()) {
        let once = resolve(&[a, b]);
        let twice = resolve(&[once.clone()]);
        prop_assert_eq!(twice, once);
    }

    #[test]
    fn test_associativity(a in document(), b in document(), c in document()) {
        let flat = resolve(&[a.clone(), b.clone(), c.clone()]);
        let left = resolve(&[resolve(&[a, b]), c]);
        prop_assert_eq!(flat, left);
    }

    #[test]
    fn test_union_of_keys(a in document(), b in document()) {
        let merged = resolve(&[a.clone(), b.clone()]);
        for key in top_level_keys(&a).iter().chain(top_level_keys(&b).iter()) {
            prop_assert!(merged.contains_key(key));
        }
        prop_assert!(merged.len() <= a.len() + b.len());
    }

    #[test]
    fn test_last_write_wins_for_non_mappings(a in document(), b in document()) {
        let merged = resolve(&[a, b.clone()]);
        for (key, value) in &b {
            if !matches!(value, ConfigValue::Nested(_)) {
                prop_assert_eq!(merged.get(key), Some(value));
            }
        }
    }

    #[test]
    fn test_inputs_are_not_mutated(a in document(), b in document()) {
        let (a_before, b_before) = (a.clone(), b.clone());
        let _ = resolve(&[a.clone(), b.clone()]);
        prop_assert_eq!(a, a_before);
        prop_assert_eq!(b, b_before);
    }

    #[test]
    fn test_traced_config_matches_resolution(a in document(), b in document(), c in document()) {
        let resolver = ConfigResolver::new()
            .with_layer("a", a)
            .with_layer("b", b)
            .with_layer("c", c);
        let traced = resolver.resolve_traced();

        prop_assert_eq!(&traced.config, &resolver.resolve());

        let leaves = traced.config.leaves();
        prop_assert_eq!(leaves.len(), traced.origins.len());
        for (path, _) in leaves {
            let layer = traced.origins.get(&path).copied();
            prop_assert!(layer.is_some(), "leaf {} has no origin", path);
            prop_assert!(layer.unwrap_or(usize::MAX) < 3);
        }
    }
}
