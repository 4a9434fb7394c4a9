use criterion::{Criterion, criterion_group, criterion_main};
use geocoord::convert::utm::{project, unproject};
use geocoord::{LatLng, Utm};
use std::hint::black_box;

fn grid() -> Vec<LatLng> {
    let mut points = Vec::new();
    for latitude in (-79..84).step_by(7) {
        for longitude in (-179..180).step_by(11) {
            points.push(LatLng::new(f64::from(latitude), f64::from(longitude)).unwrap());
        }
    }
    points
}

fn forward_benchmark(c: &mut Criterion) {
    let points = grid();

    c.bench_function("utm_project", |b| {
        b.iter(|| {
            points
                .iter()
                .map(|lat_lng| project(black_box(lat_lng)).unwrap())
                .collect::<Vec<_>>()
        });
    });
}

fn inverse_benchmark(c: &mut Criterion) {
    let grid_points = grid()
        .iter()
        .map(|lat_lng| Utm::try_from(*lat_lng).unwrap())
        .collect::<Vec<_>>();

    c.bench_function("utm_unproject", |b| {
        b.iter(|| {
            grid_points
                .iter()
                .map(|utm| unproject(black_box(utm)).unwrap())
                .collect::<Vec<_>>()
        });
    });
}

criterion_group!(benches, forward_benchmark, inverse_benchmark);
criterion_main!(benches);
