use criterion::{Criterion, criterion_group, criterion_main};
use laureate_chart::api::{ChartConfig, LaureateChart, build_render_frame};
use laureate_chart::core::{LinearScale, RawRecord, ValidationPolicy};
use laureate_chart::render::{NullRenderer, SvgRenderer};
use laureate_chart::run_pipeline;
use std::hint::black_box;

const CATEGORIES: [&str; 6] = [
    "Physics",
    "Chemistry",
    "Medicine",
    "Economics",
    "Literature",
    "Peace",
];

fn generated_records(count: usize) -> Vec<RawRecord> {
    (0..count)
        .map(|i| {
            let year = 1901 + (i % 123) as i32;
            RawRecord::new(year, CATEGORIES[i % CATEGORIES.len()], "")
        })
        .collect()
}

fn bench_linear_scale_round_trip(c: &mut Criterion) {
    let scale = LinearScale::new(1901.0, 2023.0).expect("valid scale");
    let range = (0.0, 700.0);

    c.bench_function("linear_scale_round_trip", |b| {
        b.iter(|| {
            let px = scale
                .domain_to_range(black_box(1969.0), range)
                .expect("to pixel");
            let _ = scale.range_to_domain(px, range).expect("from pixel");
        })
    });
}

fn bench_pipeline_10k(c: &mut Criterion) {
    let records = generated_records(10_000);

    c.bench_function("pipeline_10k", |b| {
        b.iter(|| {
            let _ = run_pipeline(black_box(&records), ValidationPolicy::Abort)
                .expect("pipeline should succeed");
        })
    });
}

fn bench_render_frame_build(c: &mut Criterion) {
    let config = ChartConfig::default();
    let output = run_pipeline(&generated_records(1_000), ValidationPolicy::Abort)
        .expect("pipeline should succeed");

    c.bench_function("render_frame_build", |b| {
        b.iter(|| {
            let _ = build_render_frame(black_box(output.draw_request(&config.labels)), &config)
                .expect("frame should build");
        })
    });
}

fn bench_render_null_and_svg(c: &mut Criterion) {
    let records = generated_records(1_000);
    let mut null_chart =
        LaureateChart::new(NullRenderer::default(), ChartConfig::default()).expect("chart init");
    let mut svg_chart =
        LaureateChart::new(SvgRenderer::new(), ChartConfig::default()).expect("chart init");

    c.bench_function("render_records_null_1k", |b| {
        b.iter(|| {
            let _ = null_chart
                .render_records(black_box(&records))
                .expect("render should succeed");
        })
    });
    c.bench_function("render_records_svg_1k", |b| {
        b.iter(|| {
            let _ = svg_chart
                .render_records(black_box(&records))
                .expect("render should succeed");
        })
    });
}

criterion_group!(
    benches,
    bench_linear_scale_round_trip,
    bench_pipeline_10k,
    bench_render_frame_build,
    bench_render_null_and_svg
);
criterion_main!(benches);
