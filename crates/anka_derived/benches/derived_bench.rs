use anka_calendar::{CalendarDate, CalendarSystem};
use anka_derived::{
    address_number, challenge_numbers, destiny_number, essence_cycle, personal_month_matrix,
    pinnacle_cycles,
};
use anka_letters::{BreakdownOptions, breakdown_name};
use criterion::{Criterion, black_box, criterion_group, criterion_main};

fn date_calculators_bench(c: &mut Criterion) {
    let gregorian = CalendarDate::gregorian(1987, 6, 14);
    let solar = CalendarDate::new(CalendarSystem::SolarHijri, 1369, 3, 27);

    c.bench_function("destiny_gregorian", |b| {
        b.iter(|| destiny_number(black_box(&gregorian)))
    });
    c.bench_function("destiny_solar_hijri", |b| {
        b.iter(|| destiny_number(black_box(&solar)))
    });
    c.bench_function("pinnacles_and_challenges", |b| {
        b.iter(|| {
            (
                pinnacle_cycles(black_box(&gregorian)),
                challenge_numbers(black_box(&gregorian)),
            )
        })
    });
    c.bench_function("personal_month_matrix_9x9", |b| {
        b.iter(|| personal_month_matrix(black_box(&gregorian), 2024, 9, 9))
    });
}

fn text_calculators_bench(c: &mut Criterion) {
    let name = breakdown_name("Mary Ann Smith", BreakdownOptions::default());

    c.bench_function("essence_cycle_13", |b| {
        b.iter(|| essence_cycle(black_box(&name), 2020, 13))
    });
    c.bench_function("address_letters", |b| {
        b.iter(|| address_number(black_box("Karl Johans gate")))
    });
}

criterion_group!(benches, date_calculators_bench, text_calculators_bench);
criterion_main!(benches);
