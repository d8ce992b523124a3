use criterion::{criterion_group, criterion_main, Criterion, Throughput};
use splice::{Pattern, DECODE_WINDOW, STEP_COUNT};
use std::hint::black_box;

/// Build a synthetic pattern that fills the whole decode window with track
/// records, the worst case for a single decode.
fn full_window_pattern() -> Vec<u8> {
    let mut data = Vec::with_capacity(DECODE_WINDOW);
    data.extend_from_slice(b"SPLICE\0");
    data.extend_from_slice(&[0u8; 6]);
    data.push(0x55);
    data.extend_from_slice(b"0.808-alpha");
    data.resize(46, 0);
    data.extend_from_slice(&120.0f32.to_le_bytes());

    let mut id = 0u32;
    while data.len() + 4 <= DECODE_WINDOW {
        data.extend_from_slice(&id.to_le_bytes());
        data.push(5);
        data.extend_from_slice(b"track");
        data.extend_from_slice(&[1u8; STEP_COUNT]);
        id += 1;
    }
    data.truncate(DECODE_WINDOW);
    data
}

fn bench_decode(c: &mut Criterion) {
    let data = full_window_pattern();

    let mut group = c.benchmark_group("decode");
    group.throughput(Throughput::Bytes(data.len() as u64));
    group.bench_function("from_mem_full_window", |b| {
        b.iter(|| {
            let pattern = Pattern::from_mem(black_box(&data)).unwrap();
            black_box(pattern)
        });
    });
    group.finish();
}

fn bench_render(c: &mut Criterion) {
    let data = full_window_pattern();
    let pattern = Pattern::from_mem(&data).unwrap();

    c.bench_function("render_report", |b| {
        b.iter(|| black_box(black_box(&pattern).to_string()));
    });
}

criterion_group!(benches, bench_decode, bench_render);
criterion_main!(benches);
