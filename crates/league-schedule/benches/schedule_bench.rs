use criterion::{black_box, criterion_group, criterion_main, Criterion};
use league_schedule::{double_round_robin, week_fixtures, ClubCount};

fn bench_calendar(c: &mut Criterion) {
    let count = ClubCount::new(20).unwrap();
    c.bench_function("double round robin 20 clubs", |b| {
        b.iter(|| black_box(double_round_robin(black_box(count))))
    });
    c.bench_function("week fixtures 20 leagues", |b| {
        b.iter(|| black_box(week_fixtures(count, 0..20, black_box(7)).unwrap()))
    });
}

criterion_group!(benches, bench_calendar);
criterion_main!(benches);
