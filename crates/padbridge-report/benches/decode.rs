use codspeed_criterion_compat::{black_box, criterion_group, criterion_main, Criterion};
use padbridge_report::{decode, NoiseFilter, RawReport, REPORT_LEN};

fn sample_report() -> RawReport {
    let mut raw = [0u8; REPORT_LEN];
    raw[2] = 0x12;
    raw[3] = 0x30;
    raw[4] = 40;
    raw[5] = 200;
    raw[6..14].copy_from_slice(&[0x80, 0x00, 0x7f, 0x10, 0x91, 0x00, 0x80, 0x42]);
    raw
}

pub fn bench_decode(c: &mut Criterion) {
    let raw = sample_report();
    let filter = NoiseFilter::default();

    c.bench_function("decode_report", |b| {
        b.iter(|| black_box(decode(black_box(&raw))));
    });

    c.bench_function("decode_and_filter_report", |b| {
        b.iter(|| black_box(filter.apply(&decode(black_box(&raw)))));
    });
}

criterion_group!(benches, bench_decode);
criterion_main!(benches);
