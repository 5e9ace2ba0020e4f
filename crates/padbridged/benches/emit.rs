use codspeed_criterion_compat::{black_box, criterion_group, criterion_main, Criterion};
use padbridge_report::{decode, LogicalReport, NoiseFilter, RawReport, REPORT_LEN};
use padbridge_uinput::InputEvent;
use padbridged::app::{Emitter, MAX_EVENTS_PER_CYCLE};

fn report(flags: u8, trigger: u8) -> LogicalReport {
    let mut raw: RawReport = [0; REPORT_LEN];
    raw[2] = flags;
    raw[3] = flags.rotate_left(4);
    raw[4] = trigger;
    raw[6..14].copy_from_slice(&[0x80, 0x00, 0x80, 0x00, 0x91, 0x00, 0x80, 0x42]);
    NoiseFilter::default().apply(&decode(&raw))
}

pub fn bench_emit(c: &mut Criterion) {
    let idle = report(0, 0);
    let busy = report(0x5a, 180);
    let mut sink: Vec<InputEvent> = Vec::with_capacity(MAX_EVENTS_PER_CYCLE);

    c.bench_function("emit_unchanged_report", |b| {
        let mut emitter = Emitter::new();
        let _ = emitter.emit(&idle, &mut sink);
        b.iter(|| {
            sink.clear();
            black_box(emitter.emit(black_box(&idle), &mut sink).ok());
        });
    });

    c.bench_function("emit_alternating_reports", |b| {
        let mut emitter = Emitter::new();
        let mut flip = false;
        b.iter(|| {
            sink.clear();
            flip = !flip;
            let report = if flip { &busy } else { &idle };
            black_box(emitter.emit(black_box(report), &mut sink).ok());
        });
    });

    c.bench_function("diff_full_change", |b| {
        let emitter = Emitter::new();
        b.iter(|| black_box(emitter.diff(black_box(&busy)).len()));
    });
}

criterion_group!(benches, bench_emit);
criterion_main!(benches);
