//! Criterion benchmarks for sitesweep critical paths
//!
//! Benchmarks the operations that scale with site size:
//! - Path: ancestor ascent on deep trees
//! - Keep: matcher construction and lookups
//! - Targets: output resolution and directory closure
//! - Obsolete: full obsolete-set computation over a real tree

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use sitesweep::clean::{Cleaner, KeepRules, TargetPaths};
use sitesweep::hooks::NoHooks;
use sitesweep::path::{parent_dirs, DestinationRoot};
use sitesweep::site::GeneratedItem;
use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

// =============================================================================
// Test Data Generators
// =============================================================================

/// Generate `count` page items spread over nested sections
fn make_items(count: usize) -> Vec<GeneratedItem> {
    (0..count)
        .map(|i| GeneratedItem::page(format!("/section{}/year{}/post{}/", i % 10, i % 7, i)))
        .collect()
}

/// Write a destination tree that holds the outputs of `items` plus `stale` extra pages
fn make_tree(root: &DestinationRoot, items: &[GeneratedItem], stale: usize) {
    use sitesweep::site::ResolveOutput;

    for item in items {
        let path = item.output_path(root);
        fs::create_dir_all(path.parent().expect("path should have a parent")).expect("should create directories");
        fs::write(&path, b"<html></html>").expect("should write file");
    }
    for i in 0..stale {
        let path = root.as_path().join(format!("old/{}/index.html", i));
        fs::create_dir_all(path.parent().expect("path should have a parent")).expect("should create directories");
        fs::write(&path, b"<html></html>").expect("should write file");
    }
    let git = root.as_path().join(".git/objects");
    fs::create_dir_all(&git).expect("should create directories");
    fs::write(git.join("pack"), b"x").expect("should write file");
}

// =============================================================================
// Path Benchmarks
// =============================================================================

fn bench_path(c: &mut Criterion) {
    let mut group = c.benchmark_group("path");

    for depth in [8, 64, 512].iter() {
        let mut path = PathBuf::from("/out");
        for i in 0..*depth {
            path.push(format!("d{}", i));
        }
        path.push("index.html");

        group.throughput(Throughput::Elements(*depth as u64));
        group.bench_with_input(BenchmarkId::new("parent_dirs", depth), &path, |b, path| {
            b.iter(|| parent_dirs(black_box(path), Path::new("/out")))
        });
    }

    group.finish();
}

// =============================================================================
// Keep Benchmarks
// =============================================================================

fn bench_keep(c: &mut Criterion) {
    let mut group = c.benchmark_group("keep");
    let root = DestinationRoot::new("/out").expect("should create destination root");
    let keep: Vec<String> = (0..32).map(|i| format!("vendor/lib{}", i)).collect();

    group.bench_function("resolve_32", |b| b.iter(|| KeepRules::resolve(&root, black_box(&keep))));

    let rules = KeepRules::resolve(&root, &keep).expect("keep paths should resolve");
    let kept = Path::new("/out/vendor/lib31/dist/app.js");
    let not_kept = Path::new("/out/blog/2024/post/index.html");
    group.bench_function("is_kept_hit", |b| b.iter(|| rules.is_kept(black_box(kept))));
    group.bench_function("is_kept_miss", |b| b.iter(|| rules.is_kept(black_box(not_kept))));

    group.finish();
}

// =============================================================================
// Target Benchmarks
// =============================================================================

fn bench_targets(c: &mut Criterion) {
    let mut group = c.benchmark_group("targets");
    let root = DestinationRoot::new("/out").expect("should create destination root");

    for count in [100, 1000, 10000].iter() {
        let items = make_items(*count);
        group.throughput(Throughput::Elements(*count as u64));
        group.bench_with_input(BenchmarkId::new("compute", count), &items, |b, items| {
            b.iter(|| TargetPaths::compute(&root, black_box(items)))
        });
    }

    group.finish();
}

// =============================================================================
// Obsolete-Set Benchmarks
// =============================================================================

fn bench_obsolete(c: &mut Criterion) {
    let mut group = c.benchmark_group("obsolete");
    group.sample_size(20);

    for count in [100, 1000].iter() {
        let temp = TempDir::new().expect("should create temp dir");
        let root = DestinationRoot::new(temp.path()).expect("should create destination root");
        let items = make_items(*count);
        make_tree(&root, &items, count / 10);

        let cleaner = Cleaner::new(temp.path(), &[".git"]).expect("should create cleaner");
        group.throughput(Throughput::Elements(*count as u64));
        group.bench_with_input(BenchmarkId::new("obsolete_paths", count), &items, |b, items| {
            b.iter(|| cleaner.obsolete_paths(black_box(items), &NoHooks).expect("should compute obsolete paths"))
        });
    }

    group.finish();
}

criterion_group!(benches, bench_path, bench_keep, bench_targets, bench_obsolete);
criterion_main!(benches);
