use criterion::{Criterion, black_box, criterion_group, criterion_main};
use ut_core::{
    CREATION_ADAM_AC, CURRENT_YEAR, PROJECTION_DELTAS, compare_chronologies, project,
    years_since_mark, years_to_perception, years_to_scales,
};

fn bench_conversions(c: &mut Criterion) {
    let baseline = years_since_mark(CREATION_ADAM_AC, CURRENT_YEAR);

    c.bench_function("years_to_scales", |b| {
        b.iter(|| years_to_scales(black_box(baseline)))
    });
    c.bench_function("years_to_perception", |b| {
        b.iter(|| years_to_perception(black_box(baseline)))
    });
    c.bench_function("project", |b| {
        b.iter(|| project(black_box(baseline), &PROJECTION_DELTAS))
    });
    c.bench_function("compare_chronologies", |b| {
        b.iter(|| compare_chronologies(black_box(CURRENT_YEAR)))
    });
}

criterion_group!(benches, bench_conversions);
criterion_main!(benches);
