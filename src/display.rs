//! Terminal rendering of computed values

use crate::group::GroupBiorhythmData;
use crate::models::{ChartPoint, CycleKind};
use crate::state::BiorhythmState;
use tabled::{settings::Style, Table, Tabled};

#[derive(Tabled)]
struct CycleRow {
    #[tabled(rename = "Cycle")]
    cycle: &'static str,
    #[tabled(rename = "Value")]
    value: i32,
    #[tabled(rename = "State")]
    state: String,
    #[tabled(rename = "Trend")]
    trend: &'static str,
}

/// Cycle summary table: value, band wording and trend arrow per cycle
pub fn state_table(state: &BiorhythmState) -> String {
    let rows: Vec<CycleRow> = CycleKind::ALL
        .iter()
        .map(|kind| {
            let cycle_state = state.get(*kind);
            CycleRow {
                cycle: kind.label(),
                value: cycle_state.value,
                state: cycle_state.description.clone(),
                trend: cycle_state.trend.arrow(),
            }
        })
        .collect();

    Table::new(rows).with(Style::rounded()).to_string()
}

fn marker(is_today: bool, is_selected: bool) -> String {
    match (is_today, is_selected) {
        (true, true) => "today, selected".to_string(),
        (true, false) => "today".to_string(),
        (false, true) => "selected".to_string(),
        (false, false) => String::new(),
    }
}

#[derive(Tabled)]
struct ChartRow {
    #[tabled(rename = "Date")]
    date: String,
    #[tabled(rename = "Physical")]
    physical: i32,
    #[tabled(rename = "Emotional")]
    emotional: i32,
    #[tabled(rename = "Intellectual")]
    intellectual: i32,
    #[tabled(rename = "")]
    marker: String,
}

/// 31-day chart window as a table
pub fn chart_table(chart: &[ChartPoint]) -> String {
    let rows: Vec<ChartRow> = chart
        .iter()
        .map(|point| ChartRow {
            date: point.label.clone(),
            physical: point.physical,
            emotional: point.emotional,
            intellectual: point.intellectual,
            marker: marker(point.is_today, point.is_selected),
        })
        .collect();

    Table::new(rows).with(Style::sharp()).to_string()
}

#[derive(Tabled)]
struct GroupRow {
    #[tabled(rename = "Person")]
    person: String,
    #[tabled(rename = "Value")]
    value: i32,
    #[tabled(rename = "State")]
    state: String,
    #[tabled(rename = "Trend")]
    trend: &'static str,
}

/// Per-person comparison table for the selected cycle
pub fn group_table(group: &GroupBiorhythmData, comparison: CycleKind) -> String {
    let rows: Vec<GroupRow> = group
        .people
        .iter()
        .map(|entry| {
            let cycle_state = entry.state.get(comparison);
            GroupRow {
                person: entry.person.name().to_string(),
                value: cycle_state.value,
                state: cycle_state.description.clone(),
                trend: cycle_state.trend.arrow(),
            }
        })
        .collect();

    Table::new(rows).with(Style::rounded()).to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cycles::compute_biorhythms_as_of;
    use crate::group::compute_group_as_of;
    use crate::models::{BirthProfile, CycleValues, TrackedPerson};
    use crate::state::classify_state;
    use chrono::NaiveDate;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_state_table_contains_all_cycles() {
        let state = classify_state(
            &CycleValues {
                physical: 85,
                emotional: 0,
                intellectual: -75,
            },
            None,
        );
        let table = state_table(&state);

        assert!(table.contains("Physical"));
        assert!(table.contains("Emotional"));
        assert!(table.contains("Intellectual"));
        assert!(table.contains("Exceptional physical energy"));
        assert!(table.contains("You need mental rest"));
    }

    #[test]
    fn test_chart_table_marks_today() {
        let data = compute_biorhythms_as_of(date(1990, 5, 1), None, date(2024, 6, 15));
        let table = chart_table(&data.chart);

        assert_eq!(table.matches("today").count(), 1);
    }

    #[test]
    fn test_group_table_lists_people() {
        let ana = TrackedPerson::new(BirthProfile::new("Ana", date(1990, 5, 1)), &[]);
        let luis = TrackedPerson::new(BirthProfile::new("Luis", date(1985, 11, 3)), &[ana.clone()]);
        let group = compute_group_as_of(
            &[ana, luis],
            None,
            CycleKind::Emotional,
            date(2024, 6, 15),
        );

        let table = group_table(&group, CycleKind::Emotional);
        assert!(table.contains("Ana"));
        assert!(table.contains("Luis"));
    }
}
