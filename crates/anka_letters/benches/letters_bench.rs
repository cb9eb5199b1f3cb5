use criterion::{Criterion, black_box, criterion_group, criterion_main};
use anka_letters::{BreakdownMode, BreakdownOptions, breakdown_name, detect_script};

fn breakdown_bench(c: &mut Criterion) {
    let mut group = c.benchmark_group("breakdown");
    group.bench_function("latin_all", |b| {
        b.iter(|| breakdown_name(black_box("Åse Marie Steinsland"), BreakdownOptions::default()))
    });
    group.bench_function("latin_vowel", |b| {
        b.iter(|| {
            breakdown_name(
                black_box("Åse Marie Steinsland"),
                BreakdownOptions::mode(BreakdownMode::Vowel),
            )
        })
    });
    group.bench_function("abjad", |b| {
        b.iter(|| breakdown_name(black_box("محمد رضا شجریان"), BreakdownOptions::default()))
    });
    group.finish();
}

fn script_bench(c: &mut Criterion) {
    c.bench_function("detect_script", |b| {
        b.iter(|| detect_script(black_box("Jean-Luc O’Brien")))
    });
}

criterion_group!(benches, breakdown_bench, script_bench);
criterion_main!(benches);
