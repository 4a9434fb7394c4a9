use criterion::{Criterion, criterion_group, criterion_main};
use geocoord::convert::geohash::{decode, encode};
use geocoord::{Coordinate, CoordinateFormat, GeoHash, LatLng};
use std::hint::black_box;

fn encode_benchmark(c: &mut Criterion) {
    let lat_lng = LatLng::new(52.516_253_403_348_74, 13.377_625_381_177_886).unwrap();

    c.bench_function("geohash_encode", |b| {
        b.iter(|| encode(black_box(&lat_lng)));
    });
}

fn decode_benchmark(c: &mut Criterion) {
    let hash = GeoHash::new("u33db2m3370m").unwrap();

    c.bench_function("geohash_decode", |b| {
        b.iter(|| decode(black_box(&hash)));
    });
}

fn format_benchmark(c: &mut Criterion) {
    let coordinate = Coordinate::geohash("u33db2m3370m").unwrap();

    c.bench_function("geohash_format_all", |b| {
        b.iter(|| {
            CoordinateFormat::ALL
                .iter()
                .map(|&target| black_box(&coordinate).format(target, None).unwrap())
                .collect::<Vec<_>>()
        });
    });
}

criterion_group!(benches, encode_benchmark, decode_benchmark, format_benchmark);
criterion_main!(benches);
