//! Criterion benchmarks for the resolution engine.
//!
//! Run with: `cargo bench`
//!
//! Sources are synthetic so results are reproducible across machines.

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use tree_sitter::Parser;

use lodashlint::analysis::{new_parser, visit_calls, Analyzer};
use lodashlint::methods::{profile_for, Version};
use lodashlint::{ResolutionContext, Settings};

// ─── Helpers ─────────────────────────────────────────────────────────

/// A module with `functions` functions, each mixing direct calls, chains and
/// unrelated member calls.
fn synthetic_source(functions: usize) -> String {
    let mut source = String::from("import _ from 'lodash';\n\n");
    for i in 0..functions {
        source.push_str(&format!(
            "export function handler{i}(items, opts) {{\n\
             \x20   const ids = _.map(items, item => item.id);\n\
             \x20   _.forEach(ids, id => console.log(id));\n\
             \x20   const grouped = _(items).filter(x => x.active).groupBy('kind').value();\n\
             \x20   const first = _.chain(items).sortBy('rank').head().value();\n\
             \x20   const names = items.map(x => x.name).join(', ');\n\
             \x20   return {{ ids, grouped, first, names, same: _.filter(items, x => x) }};\n\
             }}\n\n"
        ));
    }
    source
}

fn tsx_parser() -> Parser {
    new_parser(&tree_sitter_typescript::LANGUAGE_TSX.into()).unwrap()
}

// ─── Benchmarks ──────────────────────────────────────────────────────

fn bench_canonical_name(c: &mut Criterion) {
    let mut group = c.benchmark_group("canonical_name");
    let v3 = profile_for(Version::V3);
    let v4 = profile_for(Version::V4);

    group.bench_function("v3_alias", |b| b.iter(|| v3.canonical_name(black_box("collect"))));
    group.bench_function("v4_canonical", |b| b.iter(|| v4.canonical_name(black_box("map"))));
    group.bench_function("unknown", |b| b.iter(|| v4.canonical_name(black_box("notAMethod"))));
    group.finish();
}

fn bench_resolve(c: &mut Criterion) {
    let mut group = c.benchmark_group("resolve_tree");
    let ctx = ResolutionContext::new(profile_for(Version::V4), "_", true);
    let mut parser = tsx_parser();

    for functions in [10usize, 100, 1000] {
        let source = synthetic_source(functions);
        let tree = parser.parse(&source, None).unwrap();
        group.bench_with_input(BenchmarkId::from_parameter(functions), &functions, |b, _| {
            b.iter(|| {
                let mut resolved = 0usize;
                visit_calls(tree.root_node(), &mut |call| {
                    if ctx.resolve_call(call, &source).is_some() {
                        resolved += 1;
                    }
                });
                black_box(resolved)
            })
        });
    }
    group.finish();
}

fn bench_analyze_source(c: &mut Criterion) {
    let mut group = c.benchmark_group("analyze_source");
    let analyzer = Analyzer::from_settings(&Settings::default()).unwrap();
    let mut parser = tsx_parser();

    for functions in [10usize, 100] {
        let source = synthetic_source(functions);
        group.bench_with_input(BenchmarkId::from_parameter(functions), &source, |b, source| {
            b.iter(|| analyzer.analyze_source(&mut parser, black_box(source)).len())
        });
    }
    group.finish();
}

criterion_group!(benches, bench_canonical_name, bench_resolve, bench_analyze_source);
criterion_main!(benches);
