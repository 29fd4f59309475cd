//! Benchmarks for building the dependency network and running the layout
//!
//! Datasets are synthetic: each application depends on a few runtimes drawn
//! from a shared pool, so package nodes are heavily deduplicated.

use compatscope::dataset::{Application, Status};
use compatscope::graph::{ForceLayout, NetworkGraph};
use compatscope::ui::tree::{tree_prefixes, TreeNode};
use compatscope::views::{apply_filters, Summary, StatusFilter};
use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};

/// Number of distinct package versions the applications draw from
const PACKAGE_POOL: usize = 40;

/// Create `count` applications with `deps` requirements each
fn create_applications(count: usize, deps: usize) -> Vec<Application> {
    (0..count)
        .map(|i| {
            let mut app = Application::new(format!("app-{}", i), format!("v{}.0", i % 7));
            for d in 0..deps {
                let slot = (i * 7 + d * 13) % PACKAGE_POOL;
                let status = Status::ALL[(i + d) % Status::ALL.len()];
                app = app.with_requirement(
                    format!("runtime-{}", slot % 8),
                    format!("{}.x", slot),
                    status,
                );
            }
            app
        })
        .collect()
}

/// Benchmark graph construction
fn bench_graph_build(c: &mut Criterion) {
    let mut group = c.benchmark_group("graph_build");

    for size in [100, 500, 1000, 5000].iter() {
        let apps = create_applications(*size, 4);

        group.bench_with_input(BenchmarkId::new("applications", size), &apps, |b, apps| {
            b.iter(|| black_box(NetworkGraph::from_applications(apps)));
        });
    }

    group.finish();
}

/// Benchmark the summary aggregators
fn bench_summary(c: &mut Criterion) {
    let mut group = c.benchmark_group("summary");

    for size in [1000, 5000].iter() {
        let apps = create_applications(*size, 4);

        group.bench_with_input(BenchmarkId::new("applications", size), &apps, |b, apps| {
            b.iter(|| black_box(Summary::from_applications(apps)));
        });
    }

    group.finish();
}

/// Benchmark one layout tick; repulsion is quadratic in node count
fn bench_layout_step(c: &mut Criterion) {
    let mut group = c.benchmark_group("layout_step");

    for size in [20, 100, 300].iter() {
        let graph = NetworkGraph::from_applications(&create_applications(*size, 3));
        let mut layout = ForceLayout::new(&graph);

        group.bench_with_input(BenchmarkId::new("applications", size), size, |b, _| {
            b.iter(|| layout.step());
        });
    }

    group.finish();
}

/// Benchmark search + status filtering followed by tree flattening,
/// the work done on every keystroke in the App → Base view
fn bench_filter_and_flatten(c: &mut Criterion) {
    let mut group = c.benchmark_group("filter_and_flatten");

    for size in [500, 2000].iter() {
        let apps = create_applications(*size, 4);

        group.bench_with_input(BenchmarkId::new("applications", size), &apps, |b, apps| {
            b.iter(|| {
                let filtered = apply_filters(apps, "app-1", StatusFilter::Only(Status::Deprecated));
                let tree = TreeNode::from_applications("Applications", &filtered);
                let flattened = tree.flatten();
                black_box(tree_prefixes(&flattened))
            });
        });
    }

    group.finish();
}

criterion_group!(
    benches,
    bench_graph_build,
    bench_summary,
    bench_layout_step,
    bench_filter_and_flatten
);
criterion_main!(benches);
