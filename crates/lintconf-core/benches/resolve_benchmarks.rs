use criterion::{Criterion, black_box, criterion_group, criterion_main};
use lintconf_core::{ConfigDocument, ConfigResolver, ConfigValue, resolve};

/// A layer with `rules` rule entries, each a `[severity, { option: n }]` tuple
fn layer(seed: usize, rules: usize) -> ConfigDocument {
    let rule_table: ConfigDocument = (0..rules)
        .map(|i| {
            let options: ConfigDocument = [("code", (seed * 10 + i) as i64)].into_iter().collect();
            let tuple = ConfigValue::from(vec![ConfigValue::from("error"), options.into()]);
            (format!("rule-{i}"), tuple)
        })
        .collect();

    let mut doc = ConfigDocument::new();
    doc.insert("extends", vec![ConfigValue::from("base"), ConfigValue::from(format!("layer-{seed}"))]);
    doc.insert("rules", rule_table);
    doc
}

fn resolve_benchmark(c: &mut Criterion) {
    let layers: Vec<ConfigDocument> = (0..8).map(|seed| layer(seed, 200)).collect();

    c.bench_function("resolve (8 layers x 200 rules)", |b| {
        b.iter(|| resolve(black_box(&layers)))
    });
}

fn resolve_traced_benchmark(c: &mut Criterion) {
    let resolver: ConfigResolver = (0..8)
        .map(|seed| lintconf_core::Layer::new(format!("layer-{seed}"), layer(seed, 200)))
        .collect();

    c.bench_function("resolve_traced (8 layers x 200 rules)", |b| {
        b.iter(|| black_box(&resolver).resolve_traced())
    });
}

criterion_group!(benches, resolve_benchmark, resolve_traced_benchmark);
criterion_main!(benches);
