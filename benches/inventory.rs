use criterion::{BenchmarkId, Criterion, criterion_group, criterion_main};
use las_validate::{Bounds, Header, Inventory, Point, Validator, Vector};
use std::hint::black_box;

fn points(n: usize) -> Vec<Point> {
    (0..n)
        .map(|i| {
            let i = i as i32;
            Point {
                x: i % 1000 * 10,
                y: i / 1000 * 10,
                z: i % 7,
                intensity: (i % 256) as u16,
                return_number: 1,
                number_of_returns: 1,
                point_source_id: 1,
                gps_time: Some(f64::from(i)),
                ..Default::default()
            }
        })
        .collect()
}

fn header(n: usize) -> Header {
    Header {
        point_data_format: 1,
        point_data_record_length: 28,
        legacy_number_of_point_records: n as u32,
        legacy_number_of_points_by_return: [n as u32, 0, 0, 0, 0],
        bounds: Bounds {
            min: Vector { x: 0., y: 0., z: 0. },
            max: Vector {
                x: 10.,
                y: n as f64 / 100_000.,
                z: 0.01,
            },
        },
        ..Default::default()
    }
}

fn inventory(c: &mut Criterion) {
    let mut group = c.benchmark_group("inventory");
    for n in [1_000, 100_000] {
        let header = header(n);
        let points = points(n);
        let _ = group.bench_with_input(BenchmarkId::new("add", n), &points, |b, points| {
            b.iter(|| {
                let mut inventory = Inventory::new(&header);
                for point in points {
                    inventory.add(black_box(point));
                }
                inventory
            })
        });
    }
    group.finish();
}

fn check(c: &mut Criterion) {
    let header = header(100_000);
    let mut inventory = Inventory::new(&header);
    for point in &points(100_000) {
        inventory.add(point);
    }
    let validator = Validator::new();
    let _ = c.bench_function("check", |b| {
        b.iter(|| validator.check(black_box(&header), black_box(&inventory)))
    });
}

criterion_group!(benches, inventory, check);
criterion_main!(benches);
