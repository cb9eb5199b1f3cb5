//! Golden values for the derived calculators, plus a concurrency check.

use std::thread;

use anka_calendar::{CalendarDate, CalendarSystem};
use anka_derived::*;
use anka_letters::{BreakdownMode, BreakdownOptions, breakdown_name};

fn name_numbers(name: &str) -> (u32, u32, u32) {
    let n = breakdown_name(name, BreakdownOptions::default()).number;
    let v = breakdown_name(name, BreakdownOptions::mode(BreakdownMode::Vowel)).number;
    let c = breakdown_name(name, BreakdownOptions::mode(BreakdownMode::Consonant)).number;
    (n, v, c)
}

#[test]
fn address_digit_mode_ignores_letters() {
    let a = address_number("221B Baker Street").unwrap();
    match a {
        AddressNumber::Digits { digits, total, number, .. } => {
            assert_eq!(digits, vec![2, 2, 1]);
            assert_eq!(total, 5);
            assert_eq!(number, 5);
        }
        other => panic!("expected digit mode, got {other:?}"),
    }
}

#[test]
fn address_json_is_tagged_by_mode() {
    let digits = serde_json::to_value(address_number("221B Baker Street").unwrap()).unwrap();
    assert_eq!(digits["mode"], "digits");
    assert_eq!(digits["digits"], serde_json::json!([2, 2, 1]));
    assert_eq!(digits["number"], 5);
    assert!(digits.get("tokens").is_none());

    let letters = serde_json::to_value(address_number("Baker Street").unwrap()).unwrap();
    assert_eq!(letters["mode"], "letters");
    assert_eq!(letters["tokens"][0]["label"], "B");
    assert!(letters.get("digits").is_none());
}

#[test]
fn maturity_commutes() {
    for a in [0, 1, 7, 9, 11, 22, 33] {
        for b in [0, 3, 8, 11, 33] {
            let ab = maturity_number(a, b);
            let ba = maturity_number(b, a);
            assert_eq!(ab.combined, ba.combined);
            assert_eq!(ab.number, ba.number);
        }
    }
}

#[test]
fn stage_counts_and_bands() {
    let dates = [
        CalendarDate::gregorian(1900, 1, 1),
        CalendarDate::gregorian(1987, 6, 14),
        CalendarDate::gregorian(2000, 2, 29),
        CalendarDate::new(CalendarSystem::SolarHijri, 1369, 3, 27),
        CalendarDate::new(CalendarSystem::Hijri, 1445, 9, 1),
    ];
    for d in &dates {
        let p = pinnacle_cycles(d).unwrap();
        let c = challenge_numbers(d).unwrap();
        let l = life_cycles(d).unwrap();
        assert_eq!(p.len(), 4);
        assert_eq!(c.len(), 4);
        assert_eq!(l.len(), 3);
        for stages in [&p, &c] {
            let bands: Vec<_> = stages.iter().map(|s| (s.start_age, s.end_age)).collect();
            assert_eq!(bands, PINNACLE_AGES.to_vec());
        }
        let bands: Vec<_> = l.iter().map(|s| (s.start_age, s.end_age)).collect();
        assert_eq!(bands, LIFE_CYCLE_AGES.to_vec());
    }
}

#[test]
fn every_age_in_exactly_one_stage() {
    let p = pinnacle_cycles(&CalendarDate::gregorian(1987, 6, 14)).unwrap();
    let l = life_cycles(&CalendarDate::gregorian(1987, 6, 14)).unwrap();
    for age in 0..=110 {
        assert_eq!(p.iter().filter(|s| s.contains_age(age)).count(), 1, "{age}");
        assert_eq!(l.iter().filter(|s| s.contains_age(age)).count(), 1, "{age}");
    }
}

#[test]
fn hijri_birth_destiny() {
    // 1445-09-01 AH = 2024-03-11
    let d = destiny_number(&CalendarDate::new(CalendarSystem::Hijri, 1445, 9, 1)).unwrap();
    assert_eq!(d.calendar_used.to_string(), "2024-03-11");
    assert_eq!(d.total, 2 + 0 + 2 + 4 + 3 + 1 + 1);
    assert_eq!(d.number, 4);
}

#[test]
fn transits_follow_name_numbers() {
    let (n, v, c) = name_numbers("Mary");
    let py = personal_year_number(&CalendarDate::gregorian(1987, 6, 14), 2024)
        .unwrap()
        .number;
    let t = transit_numbers(n, v, c, py);
    assert_eq!(t.physical.base, c);
    assert_eq!(t.mental.base, v);
    assert_eq!(t.spiritual.base, n);
    assert_eq!(t.spiritual.number, 4);
}

#[test]
fn series_agrees_with_single_years() {
    let birth = CalendarDate::gregorian(1975, 12, 31);
    let series = personal_year_series(&birth, 2020, DEFAULT_SERIES_YEARS).unwrap();
    assert_eq!(series.len(), DEFAULT_SERIES_YEARS);
    for entry in &series {
        let single = personal_year_number(&birth, entry.year).unwrap();
        assert_eq!(entry.personal_year, single);
    }
}

#[test]
fn matrix_rows_follow_series() {
    let birth = CalendarDate::gregorian(1975, 12, 31);
    let matrix = personal_month_matrix(&birth, 2020, 4, DEFAULT_MONTH_COLUMNS).unwrap();
    let series = personal_year_series(&birth, 2020, 4).unwrap();
    for (row, entry) in matrix.iter().zip(&series) {
        assert_eq!(row.year, entry.year);
        assert_eq!(row.personal_year, entry.personal_year.number);
        for pm in &row.months {
            assert_eq!(pm, &personal_month_number(row.personal_year, pm.month));
        }
    }
}

#[test]
fn essence_wraps_for_short_names() {
    // B 2, O 6
    let b = breakdown_name("Bo", BreakdownOptions::default());
    let e = essence_cycle(&b, 2020, 3);
    let totals: Vec<u64> = e.iter().map(|x| x.total).collect();
    assert_eq!(totals, vec![10, 14, 10]);
}

#[test]
fn concurrent_calls_match_sequential() {
    let births: Vec<CalendarDate> = (0..8)
        .map(|i| CalendarDate::gregorian(1950 + i * 7, 1 + i % 12, 1 + i * 3))
        .collect();
    let names = ["Ada", "Grace", "Åse", "علی", "Mary Ann", "Bjørn", "Lynn", "محمد"];

    let compute = |birth: CalendarDate, name: &str| {
        let destiny = destiny_number(&birth).unwrap().number;
        let pinnacles: Vec<u32> = pinnacle_cycles(&birth)
            .unwrap()
            .iter()
            .map(|s| s.number)
            .collect();
        let name_number = breakdown_name(name, BreakdownOptions::default()).number;
        let maturity = maturity_number(name_number, destiny).number;
        let address = address_number(name).map(|a| a.number());
        (destiny, pinnacles, maturity, address)
    };

    let sequential: Vec<_> = births
        .iter()
        .zip(names)
        .map(|(&b, n)| compute(b, n))
        .collect();

    let handles: Vec<_> = births
        .iter()
        .zip(names)
        .map(|(&b, n)| thread::spawn(move || compute(b, n)))
        .collect();
    let parallel: Vec<_> = handles.into_iter().map(|h| h.join().unwrap()).collect();

    assert_eq!(parallel, sequential);
}
