use criterion::{black_box, criterion_group, criterion_main, Criterion};

use sattrack::tle::{parse_tle, parse_tle_with, TleOptions};

const ISS_LINE1: &str = "1 25544U 98067A   08264.51782528 -.00002182  00000-0 -11606-4 0  2927";
const ISS_LINE2: &str = "2 25544  51.6416 247.4627 0006703 130.5360 325.0288 15.72125391563537";

fn bench_parse(c: &mut Criterion) {
    c.bench_function("parse_tle/iss_wgs72", |b| {
        b.iter(|| {
            let elements = parse_tle(black_box(ISS_LINE1), black_box(ISS_LINE2), "wgs72").unwrap();
            black_box(elements);
        })
    });
}

/// Same input with the modulo-10 checksum verified on both lines.
fn bench_parse_with_checksum(c: &mut Criterion) {
    let options = TleOptions::default().with_checksum(true);

    c.bench_function("parse_tle/iss_checksum", |b| {
        b.iter(|| {
            let elements =
                parse_tle_with(black_box(ISS_LINE1), black_box(ISS_LINE2), &options).unwrap();
            black_box(elements);
        })
    });
}

criterion_group!(benches, bench_parse, bench_parse_with_checksum);
criterion_main!(benches);
