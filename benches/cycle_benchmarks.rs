use chrono::NaiveDate;
use criterion::{black_box, criterion_group, criterion_main, Criterion};
use vitalrs::cycles::{compute_biorhythms_as_of, cycle_value};
use vitalrs::group::compute_group_as_of;
use vitalrs::models::{BirthProfile, CycleKind, TrackedPerson};

fn bench_cycle_value(c: &mut Criterion) {
    c.bench_function("cycle_value", |b| {
        b.iter(|| cycle_value(black_box(12345), black_box(CycleKind::Intellectual)))
    });
}

fn bench_window_computation(c: &mut Criterion) {
    let birth = NaiveDate::from_ymd_opt(1990, 5, 1).unwrap();
    let today = NaiveDate::from_ymd_opt(2024, 6, 15).unwrap();

    c.bench_function("compute_biorhythms_window", |b| {
        b.iter(|| compute_biorhythms_as_of(black_box(birth), None, black_box(today)))
    });
}

fn bench_group_computation(c: &mut Criterion) {
    let today = NaiveDate::from_ymd_opt(2024, 6, 15).unwrap();
    let mut people: Vec<TrackedPerson> = Vec::new();
    for (name, year) in [("Ana", 1990), ("Luis", 1985), ("Mar", 1978)] {
        let birth = NaiveDate::from_ymd_opt(year, 5, 1).unwrap();
        let person = TrackedPerson::new(BirthProfile::new(name, birth), &people);
        people.push(person);
    }

    c.bench_function("compute_group_window", |b| {
        b.iter(|| compute_group_as_of(black_box(&people), None, CycleKind::Physical, today))
    });
}

criterion_group!(
    benches,
    bench_cycle_value,
    bench_window_computation,
    bench_group_computation
);
criterion_main!(benches);
