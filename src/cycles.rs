use crate::models::{ChartPoint, CycleKind, CycleValues};
use chrono::{Duration, Local, NaiveDate};
use serde::{Deserialize, Serialize};
use std::f64::consts::PI;

/// Days shown on each side of the reference date in the chart window
pub const CHART_HALF_WINDOW: i64 = 15;

/// Total number of points in a chart window
pub const CHART_WINDOW_LEN: usize = (CHART_HALF_WINDOW * 2 + 1) as usize;

/// Computed biorhythm data for one person around a reference date
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BiorhythmData {
    /// Values for the actual current calendar day, regardless of the
    /// reference date
    pub today: CycleValues,

    /// Values for the day immediately before the reference date
    pub yesterday: CycleValues,

    /// Values for the reference date itself, present only when an explicit
    /// reference was supplied that differs from the current calendar day
    pub selected: Option<CycleValues>,

    /// Chart window: reference - 15 days through reference + 15 days,
    /// strictly chronological
    pub chart: Vec<ChartPoint>,
}

/// Whole days elapsed from the birth date to the target date
///
/// Both dates are date-only, so the subtraction is exact whole-day
/// arithmetic with no time-of-day or DST drift. Negative offsets (birth
/// date in the future) are valid inputs.
pub fn days_from_birth(birth_date: NaiveDate, target: NaiveDate) -> i64 {
    (target - birth_date).num_days()
}

/// Value of one cycle at a given day offset: round(sin(2π·d/P) · 100)
///
/// Sine is odd, so negative offsets need no special casing.
pub fn cycle_value(day_offset: i64, kind: CycleKind) -> i32 {
    let period = kind.period() as f64;
    ((2.0 * PI * day_offset as f64 / period).sin() * 100.0).round() as i32
}

/// All three cycle values at a given day offset
pub fn values_at_offset(day_offset: i64) -> CycleValues {
    CycleValues {
        physical: cycle_value(day_offset, CycleKind::Physical),
        emotional: cycle_value(day_offset, CycleKind::Emotional),
        intellectual: cycle_value(day_offset, CycleKind::Intellectual),
    }
}

/// Compute biorhythms against the local calendar day
///
/// Convenience wrapper over [`compute_biorhythms_as_of`]; everything below
/// the clock lookup is pure.
pub fn compute_biorhythms(birth_date: NaiveDate, reference: Option<NaiveDate>) -> BiorhythmData {
    compute_biorhythms_as_of(birth_date, reference, Local::now().date_naive())
}

/// Compute biorhythms with an explicit "today"
///
/// `reference` centers the chart window and the yesterday/selected values;
/// it defaults to `today` when absent. `today` always drives the `today`
/// values and the `is_today` chart flag. Deterministic for fixed inputs.
pub fn compute_biorhythms_as_of(
    birth_date: NaiveDate,
    reference: Option<NaiveDate>,
    today: NaiveDate,
) -> BiorhythmData {
    let reference_date = reference.unwrap_or(today);

    let today_offset = days_from_birth(birth_date, today);
    let reference_offset = days_from_birth(birth_date, reference_date);

    let selected = match reference {
        Some(date) if date != today => Some(values_at_offset(reference_offset)),
        _ => None,
    };

    let mut chart = Vec::with_capacity(CHART_WINDOW_LEN);
    for offset in -CHART_HALF_WINDOW..=CHART_HALF_WINDOW {
        let date = reference_date + Duration::days(offset);
        let values = values_at_offset(reference_offset + offset);

        chart.push(ChartPoint {
            label: date.format("%b %d").to_string(),
            physical: values.physical,
            emotional: values.emotional,
            intellectual: values.intellectual,
            is_today: date == today,
            is_selected: reference.is_some() && date == reference_date,
            date,
        });
    }

    BiorhythmData {
        today: values_at_offset(today_offset),
        yesterday: values_at_offset(reference_offset - 1),
        selected,
        chart,
    }
}
