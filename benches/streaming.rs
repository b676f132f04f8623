use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use json_drip::{encode, template, LazyRegion, StreamOptions, Template};
use std::io::{self, Write};

/// Writer that discards everything, so the benchmarks measure encoding and
/// bookkeeping rather than buffer growth.
struct NullWriter;

impl Write for NullWriter {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

fn article(i: i64) -> Template {
    template!({
        "id": (i),
        "title": "a reasonably sized article title",
        "published": true,
        "score": 4.5
    })
}

fn envelope(rows: Vec<Template>) -> Template {
    template!({
        "embedded": { "articles": (lazy LazyRegion::from_values(rows)) },
        "total": 0
    })
}

fn benchmark_encode_skeleton(c: &mut Criterion) {
    c.bench_function("encode_skeleton", |b| {
        b.iter(|| {
            let doc = envelope(Vec::new());
            encode(black_box(doc), StreamOptions::new())
        })
    });
}

fn benchmark_stream_region(c: &mut Criterion) {
    let mut group = c.benchmark_group("stream_region");

    for size in [10i64, 100, 1000, 10000].iter() {
        group.bench_with_input(BenchmarkId::from_parameter(size), size, |b, &size| {
            b.iter(|| {
                let rows: Vec<Template> = (0..size).map(article).collect();
                let skeleton = encode(envelope(rows), StreamOptions::new()).unwrap();
                skeleton.stream(&mut NullWriter).unwrap();
            })
        });
    }

    group.finish();
}

fn benchmark_flush_thresholds(c: &mut Criterion) {
    let mut group = c.benchmark_group("flush_threshold");

    for threshold in [10usize, 100, 500].iter() {
        group.bench_with_input(
            BenchmarkId::from_parameter(threshold),
            threshold,
            |b, &threshold| {
                b.iter(|| {
                    let rows: Vec<Template> = (0..1000).map(article).collect();
                    let options = StreamOptions::new().with_flush_threshold(threshold);
                    let skeleton = encode(envelope(rows), options).unwrap();
                    skeleton.stream(&mut NullWriter).unwrap();
                })
            },
        );
    }

    group.finish();
}

criterion_group!(
    benches,
    benchmark_encode_skeleton,
    benchmark_stream_region,
    benchmark_flush_thresholds
);
criterion_main!(benches);
