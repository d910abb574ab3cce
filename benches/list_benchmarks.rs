//! Performance benchmarks for contact list operations.
//!
//! These benchmarks measure the cost of the linear dedup check under
//! growing list sizes, plus merge and sorted-rendering throughput.

use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion};
use phonebook::{Contact, ContactList};

/// Build a list of `n` distinct contacts numbered upwards from an offset.
fn populated_list(n: u32, offset: u32) -> ContactList {
    let mut list = ContactList::new();
    for i in 0..n {
        list.add(Contact::new(format!("Contact {}", i), 100_000_000 + offset + i).unwrap());
    }
    list
}

/// Benchmark appending into lists of various sizes (the dedup check is a
/// linear scan, so cost grows with the list).
fn bench_add(c: &mut Criterion) {
    let mut group = c.benchmark_group("add");
    for size in [10u32, 100, 1_000] {
        let base = populated_list(size, 0);
        group.bench_with_input(BenchmarkId::from_parameter(size), &size, |b, _| {
            b.iter(|| {
                let mut list = base.clone();
                list.add(Contact::new("Newcomer", 999_999_999).unwrap())
            });
        });
    }
    group.finish();
}

/// Benchmark merging two half-overlapping lists.
fn bench_merge_from(c: &mut Criterion) {
    let incoming = populated_list(500, 750);
    let base = populated_list(1_000, 0);

    c.bench_function("merge_from_500_into_1000", |b| {
        b.iter(|| {
            let mut list = base.clone();
            list.merge_from(&incoming)
        });
    });
}

/// Benchmark the sorted textual rendering.
fn bench_render(c: &mut Criterion) {
    let list = populated_list(1_000, 0);

    c.bench_function("render_sorted_1000", |b| {
        b.iter(|| list.to_string());
    });
}

criterion_group!(benches, bench_add, bench_merge_from, bench_render);
criterion_main!(benches);
