use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use ssp_processing::{
    FilterChain, FilterEngine, FirFilter, IirCascade, IirDefinition, SectionSpec, SessionConfig,
};

fn bench_fir_push(c: &mut Criterion) {
    let chain = FilterChain::built_in();
    let mut group = c.benchmark_group("fir_push");
    for id in 0..3u8 {
        let def = chain.find(id).unwrap();
        group.bench_with_input(BenchmarkId::from_parameter(&def.name), def, |b, def| {
            let mut filter = FirFilter::new(def);
            let mut t = 0.0f64;
            b.iter(|| {
                t += 0.01;
                black_box(filter.push(black_box(t.sin())))
            });
        });
    }
    group.finish();
}

fn bench_iir_process(c: &mut Criterion) {
    let mut group = c.benchmark_group("iir_process");
    for poles in [2usize, 4, 6, 8] {
        let def = IirDefinition::new(
            1,
            "BENCH-LP",
            1.0,
            vec![SectionSpec::lowpass(poles, 0.25)],
        );
        let mut cascade = IirCascade::new(&def).unwrap();
        group.bench_with_input(BenchmarkId::from_parameter(poles), &poles, |b, _| {
            let mut t = 0.0f64;
            b.iter(|| {
                t += 0.01;
                black_box(cascade.process(black_box(t.sin())))
            });
        });
    }
    group.finish();
}

fn bench_section_design(c: &mut Criterion) {
    let mut group = c.benchmark_group("section_design");
    for poles in [2usize, 4, 8] {
        group.bench_with_input(BenchmarkId::from_parameter(poles), &poles, |b, &poles| {
            b.iter(|| {
                let spec = SectionSpec::lowpass(black_box(poles), black_box(0.25));
                black_box(spec.design())
            });
        });
    }
    group.finish();
}

fn bench_engine_ingest(c: &mut Criterion) {
    let config = SessionConfig::broadband_default();
    c.bench_function("engine_ingest_broadband", |b| {
        let mut engine = FilterEngine::from_config(&config).unwrap();
        let handle = engine.find_channel(&config.channels[0].channel).unwrap();
        let mut t = 0.0f64;
        b.iter(|| {
            t += 0.01;
            black_box(engine.ingest(handle, black_box(t.sin())))
        });
    });
}

criterion_group!(
    benches,
    bench_fir_push,
    bench_iir_process,
    bench_section_design,
    bench_engine_ingest
);
criterion_main!(benches);
