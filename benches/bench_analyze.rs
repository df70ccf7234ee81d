use std::time::Duration;

use criterion::{BenchmarkId, Criterion, Throughput, criterion_group, criterion_main};
use perfgate::{
    AnalysisConfig, ReportBuilder, analyze,
    bench_utils::{generate_results, perturb, to_map, to_ndjson},
    record::parse_str,
    render::render_markdown,
};

const BASE_SEED: u64 = 0xBA5E;
const CURRENT_SEED: u64 = 0xC0DE;
const MAX_CHANGE_PERCENT: f64 = 80.0;
const SAMPLE_SIZE: usize = 20;
const WARM_UP: Duration = Duration::from_millis(300);
const MEASURE: Duration = Duration::from_millis(500);

fn bench_scales() -> &'static [usize] {
    #[cfg(feature = "bench-ci")]
    {
        &[100, 1_000]
    }
    #[cfg(not(feature = "bench-ci"))]
    {
        &[1_000, 10_000, 50_000]
    }
}

fn bench_parse(c: &mut Criterion) {
    let mut group = c.benchmark_group("parse_records");
    group
        .sample_size(SAMPLE_SIZE)
        .warm_up_time(WARM_UP)
        .measurement_time(MEASURE);
    for &count in bench_scales() {
        let source = to_ndjson(&generate_results(count, BASE_SEED + count as u64));
        group.throughput(Throughput::Bytes(source.len() as u64));
        group.bench_with_input(BenchmarkId::from_parameter(count), &source, |b, source| {
            b.iter(|| parse_str(source))
        });
    }
    group.finish();
}

fn bench_analyze(c: &mut Criterion) {
    let mut group = c.benchmark_group("analyze_and_report");
    group
        .sample_size(SAMPLE_SIZE)
        .warm_up_time(WARM_UP)
        .measurement_time(MEASURE);
    let config = AnalysisConfig::default();
    for &count in bench_scales() {
        let baseline = generate_results(count, BASE_SEED + count as u64);
        let current = perturb(&baseline, MAX_CHANGE_PERCENT, CURRENT_SEED + count as u64);
        let (baseline, current) = (to_map(&baseline), to_map(&current));
        group.throughput(Throughput::Elements(count as u64));
        group.bench_with_input(
            BenchmarkId::from_parameter(count),
            &(current, baseline),
            |b, (current, baseline)| {
                b.iter(|| {
                    let regressions = analyze(current, baseline, &config);
                    let model = ReportBuilder::new(config).build(current, baseline, &regressions);
                    render_markdown(&model)
                })
            },
        );
    }
    group.finish();
}

criterion_group!(benches, bench_parse, bench_analyze);
criterion_main!(benches);
