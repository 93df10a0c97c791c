use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion};
use sarf_analyzer::Analyzer;
use sarf_core::{parse_arabic, Dialect, EngineConfig, Word};

fn bench_analyze(c: &mut Criterion) {
    let forms: Vec<Word> = ["يعد", "يَكْتُبُ", "اِسْتَخْرَجَ", "بِيبِيعْ"]
        .iter()
        .filter_map(|text| parse_arabic(text).ok())
        .collect();
    let analyzer = Analyzer::new(EngineConfig::default());

    let mut group = c.benchmark_group("analyze");
    group.sample_size(10);

    for (label, dialect) in [("msa", Some(Dialect::Msa)), ("all", None)] {
        group.bench_function(BenchmarkId::new(label, forms.len()), |b| {
            b.iter(|| {
                for form in &forms {
                    analyzer.analyze(form, dialect);
                }
            })
        });
    }

    group.finish();
}

criterion_group!(benches, bench_analyze);
criterion_main!(benches);
