use criterion::{black_box, criterion_group, criterion_main, Criterion};
use hashcluster::clusters::cluster_entries;
use hashcluster::config::Layout;
use hashcluster::output::ClusterWriter;
use hashcluster::scanner::{read_entries, HashEntry};
use std::fs;
use tempfile::TempDir;

// Helper to create an input directory where every `dup_every`-th hash repeats
fn setup_input_dir(items: usize, dup_every: usize) -> TempDir {
    let temp_dir = TempDir::new().unwrap();
    let trun = temp_dir.path().join("trun");
    fs::create_dir(&trun).expect("Failed to create dir");

    for i in 0..items {
        let hash = if i % dup_every == 0 { 0 } else { i };
        fs::write(trun.join(format!("item_{i}")), format!("{hash:064x}\n"))
            .expect("Failed to write file");
    }
    temp_dir
}

// 1. Directory reading
fn bench_read_entries(c: &mut Criterion) {
    let temp_dir = setup_input_dir(1000, 10);
    let input = temp_dir.path().join("trun");

    c.bench_function("read_entries_1000_items", |b| {
        b.iter(|| black_box(read_entries(&input).unwrap()))
    });
}

// 2. In-memory clustering
fn bench_cluster_entries(c: &mut Criterion) {
    let entries: Vec<HashEntry> = (0..100_000)
        .map(|i| HashEntry::new(format!("item_{i}"), format!("{:064x}", i % 50_000)))
        .collect();

    c.bench_function("cluster_entries_100k", |b| {
        b.iter(|| black_box(cluster_entries(entries.clone())))
    });
}

// 3. Writing cluster files
fn bench_write_all(c: &mut Criterion) {
    let temp_dir = setup_input_dir(1000, 4);
    let layout = Layout {
        input_dir: temp_dir.path().join("trun"),
        unique_dir: temp_dir.path().join("hash_unique"),
        active_dir: temp_dir.path().join("active"),
    };
    let (clusters, _) = cluster_entries(read_entries(&layout.input_dir).unwrap());
    let writer = ClusterWriter::new(layout).with_create_dirs(true);

    c.bench_function("write_all_1000_items", |b| {
        b.iter(|| black_box(writer.write_all(&clusters).unwrap()))
    });
}

criterion_group!(
    benches,
    bench_read_entries,
    bench_cluster_entries,
    bench_write_all
);
criterion_main!(benches);
