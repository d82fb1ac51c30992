use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion};
use designer_broker::{Archive, Broker, ObjectId};
use std::hint::black_box;

fn bench_make_object(c: &mut Criterion) {
    let broker = Broker::with_builtins().unwrap();
    let mut group = c.benchmark_group("make_object");
    for type_name in ["Object", "Button", "textcontrol"] {
        group.bench_with_input(BenchmarkId::from_parameter(type_name), &type_name, |b, name| {
            b.iter(|| {
                if let Some(object) = broker.make_object(black_box(name), None) {
                    broker.unregister_object(&object);
                }
            });
        });
    }
    group.finish();
}

fn bench_find_object(c: &mut Criterion) {
    let mut group = c.benchmark_group("find_object");
    for &live in &[16usize, 1024, 16384] {
        let broker = Broker::with_builtins().unwrap();
        let held: Vec<_> = (0..live)
            .filter_map(|_| broker.make_object("View", None))
            .collect();
        let probe = ObjectId::new(live as u64 / 2);
        group.bench_with_input(BenchmarkId::from_parameter(live), &probe, |b, &id| {
            b.iter(|| broker.find_object(black_box(id)));
        });
        drop(held);
    }
    group.finish();
}

fn bench_restore_object(c: &mut Criterion) {
    let broker = Broker::with_builtins().unwrap();
    let window = broker.make_object("Window", None).unwrap();
    let archive: Archive = window.encode();
    c.bench_function("restore_object/window", |b| {
        b.iter(|| {
            if let Some(object) = broker.restore_object(black_box(&archive)) {
                broker.unregister_object(&object);
            }
        });
    });
}

criterion_group!(benches, bench_make_object, bench_find_object, bench_restore_object);
criterion_main!(benches);
