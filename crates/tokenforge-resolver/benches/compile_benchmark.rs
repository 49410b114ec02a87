//! Document compilation benchmarks.

use criterion::{black_box, criterion_group, criterion_main, Criterion};
use tokenforge_core::TokenValue;
use tokenforge_resolver::{compile_document, CollectionRules};

const SIMPLE_DOC: &str = r##"{
  "Primitive Tokens": {"Mode 1": {"Color": {"blue": {"500": "#1E40AF"}}}},
  "Component Tokens": {"BrandA": {"Button": {"Background": "{Color/blue/500}"}}}
}"##;

fn large_doc() -> String {
    let mut primitives = Vec::new();
    let mut overrides = Vec::new();
    for i in 0..500 {
        primitives.push(format!(r##""shade{i}": "#{i:06x}""##));
        overrides.push(format!(r#""Token{i}": "{{Color/shade{i}}}""#));
    }
    let colors = primitives.join(",");
    let brand = overrides.join(",");
    let mut doc = String::new();
    doc.push_str(r#"{"Primitives": {"Mode 1": {"Color": {"#);
    doc.push_str(&colors);
    doc.push_str(r#"}}}, "Brands": {"#);
    for (index, name) in ["A", "B", "C"].iter().enumerate() {
        if index > 0 {
            doc.push(',');
        }
        doc.push_str(&format!(r#""{name}": {{{brand}}}"#));
    }
    doc.push_str("}}");
    doc
}

fn compile_simple(c: &mut Criterion) {
    let document = TokenValue::from_json_str(SIMPLE_DOC).unwrap();
    let rules = CollectionRules::default();
    c.bench_function("compile_simple", |b| {
        b.iter(|| compile_document("simple", black_box(&document), &rules))
    });
}

fn compile_large(c: &mut Criterion) {
    let document = TokenValue::from_json_str(&large_doc()).unwrap();
    let rules = CollectionRules::default();
    c.bench_function("compile_large", |b| {
        b.iter(|| compile_document("large", black_box(&document), &rules))
    });
}

criterion_group!(benches, compile_simple, compile_large);
criterion_main!(benches);
