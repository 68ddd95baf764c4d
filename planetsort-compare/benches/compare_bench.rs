//! Sorting throughput for each ordering over a planet-like stream.

use criterion::{BenchmarkId, Criterion, Throughput, criterion_group, criterion_main};
use planetsort_compare::{
    EqualTypeId, ObjectEquivalence, ObjectOrder, OrderTypeIdReverseVersion, OrderTypeIdVersion,
};
use planetsort_types::{ItemType, ObjectHeader, ObjectId, Version};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use std::hint::black_box;

/// Seeded, shuffled stream: mostly nodes, a few versions per id, and a
/// band of placeholder ids per kind. Signs depend only on the magnitude,
/// so the reverse-version order stays total.
fn stream(len: usize) -> Vec<ObjectHeader> {
    let mut rng = StdRng::seed_from_u64(0x5EED);
    let max_magnitude = len as i64 / 2 + 1;
    (0..len)
        .map(|_| {
            let kind = match rng.gen_range(0..10) {
                0..=6 => ItemType::Node,
                7..=8 => ItemType::Way,
                _ => ItemType::Relation,
            };
            let magnitude = rng.gen_range(0..max_magnitude);
            let id = if magnitude % 50 == 7 { -magnitude } else { magnitude };
            let version = rng.gen_range(1..=5u32);
            ObjectHeader::new(kind, ObjectId::new(id), Version::new(version))
        })
        .collect()
}

fn bench_sort(c: &mut Criterion) {
    let mut group = c.benchmark_group("sort");
    for len in [1_000, 100_000] {
        let input = stream(len);
        group.throughput(Throughput::Elements(len as u64));

        group.bench_with_input(BenchmarkId::new("type_id_version", len), &input, |b, input| {
            b.iter(|| {
                let mut items = input.clone();
                items.sort_by(OrderTypeIdVersion.sorter());
                black_box(items)
            });
        });

        group.bench_with_input(
            BenchmarkId::new("type_id_reverse_version", len),
            &input,
            |b, input| {
                b.iter(|| {
                    let mut items = input.clone();
                    items.sort_by(OrderTypeIdReverseVersion.sorter());
                    black_box(items)
                });
            },
        );

        group.bench_with_input(BenchmarkId::new("latest_per_entity", len), &input, |b, input| {
            b.iter(|| {
                let mut items = input.clone();
                items.sort_by(OrderTypeIdReverseVersion.sorter());
                items.dedup_by(EqualTypeId.dedup_pred());
                black_box(items)
            });
        });
    }
    group.finish();
}

criterion_group!(benches, bench_sort);
criterion_main!(benches);
