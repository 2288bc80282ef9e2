//! Benchmarks for resolution and rendering performance
//!
//! Diamond-shaped mappings are the worst case: every shared package is
//! re-expanded under each parent, so output grows with the number of
//! distinct paths rather than the number of packages.

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use dep_resolver::export::render;
use dep_resolver::graph::resolve;
use dep_resolver::parser::DependencyMapping;

/// Create a layered mapping where every package depends on every
/// package in the next layer.
fn create_layered_mapping(layers: usize, width: usize) -> DependencyMapping {
    let mut mapping = DependencyMapping::new();
    for layer in 0..layers {
        for i in 0..width {
            let deps = if layer + 1 < layers {
                (0..width).map(|j| format!("pkg-{}-{}", layer + 1, j)).collect()
            } else {
                Vec::new()
            };
            mapping.insert(format!("pkg-{}-{}", layer, i), deps);
        }
    }
    mapping
}

/// Create a single chain `pkg-0 -> pkg-1 -> ... -> pkg-(len-1)`.
fn create_chain_mapping(len: usize) -> DependencyMapping {
    let mut mapping = DependencyMapping::new();
    for i in 0..len {
        let deps = if i + 1 < len {
            vec![format!("pkg-{}", i + 1)]
        } else {
            Vec::new()
        };
        mapping.insert(format!("pkg-{}", i), deps);
    }
    mapping
}

/// Benchmark resolution of diamond-heavy mappings
fn bench_resolve_layered(c: &mut Criterion) {
    let mut group = c.benchmark_group("resolve_layered");

    for layers in [2, 3, 4, 5].iter() {
        let mapping = create_layered_mapping(*layers, 4);

        group.bench_with_input(BenchmarkId::new("layers_w4", layers), &mapping, |b, m| {
            b.iter(|| black_box(resolve(m).unwrap()));
        });
    }

    group.finish();
}

/// Benchmark resolution of long chains
fn bench_resolve_chain(c: &mut Criterion) {
    let mut group = c.benchmark_group("resolve_chain");

    for len in [10, 50, 100, 200].iter() {
        let mapping = create_chain_mapping(*len);

        group.bench_with_input(BenchmarkId::new("packages", len), &mapping, |b, m| {
            b.iter(|| black_box(resolve(m).unwrap()));
        });
    }

    group.finish();
}

/// Benchmark text rendering of an already resolved graph
fn bench_render(c: &mut Criterion) {
    let mut group = c.benchmark_group("render_text");

    for layers in [3, 4, 5].iter() {
        let graph = resolve(&create_layered_mapping(*layers, 4)).unwrap();

        group.bench_with_input(
            BenchmarkId::new("nodes", graph.node_count()),
            &graph,
            |b, g| {
                b.iter(|| {
                    let mut out = Vec::with_capacity(64 * 1024);
                    render(g, 4, &mut out).unwrap();
                    black_box(out)
                });
            },
        );
    }

    group.finish();
}

criterion_group!(
    benches,
    bench_resolve_layered,
    bench_resolve_chain,
    bench_render
);
criterion_main!(benches);
