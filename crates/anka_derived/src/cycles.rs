//! Life-stage cycles: pinnacles, life cycles and challenges.
//!
//! All three start from the Gregorian month, day and year of birth, each
//! reduced to a core number. Pinnacles add pairs of cores, challenges take
//! their differences, life cycles use the cores directly.

use anka_calendar::{CalendarDate, GregorianDate};
use anka_math::{Reduction, reduce, reduce_signed, reduce_value};
use serde::Serialize;

use crate::error::DerivedError;

/// Age bands of the four pinnacle and challenge stages.
pub const PINNACLE_AGES: [(u32, Option<u32>); 4] =
    [(0, Some(35)), (36, Some(44)), (45, Some(53)), (54, None)];

/// Age bands of the three life cycles.
pub const LIFE_CYCLE_AGES: [(u32, Option<u32>); 3] = [(0, Some(27)), (28, Some(54)), (55, None)];

/// One stage of a cycle.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CycleStage {
    /// 1-based stage index.
    pub stage: u8,
    pub start_age: u32,
    /// Last age of the stage; `None` for the open-ended final stage.
    pub end_age: Option<u32>,
    pub number: u32,
    pub steps: Vec<u64>,
}

impl CycleStage {
    /// Whether `age` falls inside this stage.
    pub fn contains_age(&self, age: u32) -> bool {
        age >= self.start_age && self.end_age.is_none_or(|end| age <= end)
    }
}

/// Reduced month, day and year of a birth date.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct Cores {
    month: u32,
    day: u32,
    year: u32,
}

impl Cores {
    fn of(g: GregorianDate) -> Self {
        Self {
            month: reduce_value(u64::from(g.month)),
            day: reduce_value(u64::from(g.day)),
            year: reduce_signed(i64::from(g.year)).value,
        }
    }
}

fn stages(reductions: Vec<Reduction>, ages: &[(u32, Option<u32>)]) -> Vec<CycleStage> {
    reductions
        .into_iter()
        .zip(ages)
        .zip(1u8..)
        .map(|((r, &(start_age, end_age)), stage)| CycleStage {
            stage,
            start_age,
            end_age,
            number: r.value,
            steps: r.steps,
        })
        .collect()
}

fn sum(a: u32, b: u32) -> Reduction {
    reduce(u64::from(a) + u64::from(b))
}

fn difference(a: u32, b: u32) -> Reduction {
    reduce(u64::from(a.abs_diff(b)))
}

/// Four pinnacles.
pub fn pinnacle_cycles(birth: &CalendarDate) -> Result<Vec<CycleStage>, DerivedError> {
    let c = Cores::of(birth.to_gregorian()?);
    let first = sum(c.month, c.day);
    let second = sum(c.day, c.year);
    let third = sum(first.value, second.value);
    let fourth = sum(c.month, c.year);
    Ok(stages(vec![first, second, third, fourth], &PINNACLE_AGES))
}

/// Three life cycles: month, day and year of birth, each reduced.
pub fn life_cycles(birth: &CalendarDate) -> Result<Vec<CycleStage>, DerivedError> {
    let g = birth.to_gregorian()?;
    let reductions = vec![
        reduce(u64::from(g.month)),
        reduce(u64::from(g.day)),
        reduce_signed(i64::from(g.year)),
    ];
    Ok(stages(reductions, &LIFE_CYCLE_AGES))
}

/// Four challenges, in the pinnacle age bands.
pub fn challenge_numbers(birth: &CalendarDate) -> Result<Vec<CycleStage>, DerivedError> {
    let c = Cores::of(birth.to_gregorian()?);
    let first = difference(c.month, c.day);
    let second = difference(c.day, c.year);
    let third = difference(first.value, second.value);
    let fourth = difference(c.month, c.year);
    Ok(stages(vec![first, second, third, fourth], &PINNACLE_AGES))
}
