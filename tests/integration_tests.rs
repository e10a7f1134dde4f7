use chrono::{Duration, NaiveDate};
use vitalrs::cycles::{compute_biorhythms_as_of, cycle_value, CHART_WINDOW_LEN};
use vitalrs::group::{compute_group_as_of, generate_group_recommendations, series_key};
use vitalrs::models::{BirthProfile, CycleKind, TrackedPerson};
use vitalrs::state::{classify_state, CycleBand, Trend};
use vitalrs::store::PeopleStore;

/// Integration tests that exercise the complete engine → classifier →
/// aggregator workflows

fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

fn tracked(name: &str, birth: NaiveDate, existing: &[TrackedPerson]) -> TrackedPerson {
    TrackedPerson::new(BirthProfile::new(name, birth), existing)
}

/// Birth day itself: every cycle at zero, moderate band, default-up trend
#[test]
fn test_birth_day_scenario() {
    let birth = date(2000, 1, 1);
    let data = compute_biorhythms_as_of(birth, None, birth);

    assert_eq!(data.today.physical, 0);
    assert_eq!(data.today.emotional, 0);
    assert_eq!(data.today.intellectual, 0);

    let state = classify_state(&data.today, None);
    for kind in CycleKind::ALL {
        assert_eq!(state.get(kind).band, CycleBand::Moderate);
        assert_eq!(state.get(kind).trend, Trend::Up);
    }
}

/// One full physical period after birth: physical returns to zero while
/// the other cycles sit mid-wave
#[test]
fn test_full_physical_period_scenario() {
    let birth = date(2000, 1, 1);
    let today = date(2000, 1, 24); // day 23
    let data = compute_biorhythms_as_of(birth, None, today);

    assert_eq!(data.today.physical, 0);
    assert_eq!(data.today.emotional, -90); // round(sin(2π·23/28)·100)
    assert_eq!(data.today.intellectual, -95); // round(sin(2π·23/33)·100)
}

#[test]
fn test_window_and_marker_invariants() {
    let birth = date(1990, 5, 1);
    let today = date(2024, 6, 15);

    // reference inside the window
    let data = compute_biorhythms_as_of(birth, Some(date(2024, 6, 10)), today);
    assert_eq!(data.chart.len(), CHART_WINDOW_LEN);
    assert_eq!(data.chart.iter().filter(|p| p.is_today).count(), 1);
    assert_eq!(data.chart.iter().filter(|p| p.is_selected).count(), 1);
    for pair in data.chart.windows(2) {
        assert_eq!(pair[1].date - pair[0].date, Duration::days(1));
    }

    // reference far away: today's marker disappears, selected stays
    let distant = compute_biorhythms_as_of(birth, Some(date(2025, 1, 1)), today);
    assert_eq!(distant.chart.iter().filter(|p| p.is_today).count(), 0);
    assert_eq!(distant.chart.iter().filter(|p| p.is_selected).count(), 1);
}

#[test]
fn test_selected_values_follow_reference_day_rule() {
    let birth = date(1990, 5, 1);
    let today = date(2024, 6, 15);

    let same_day = compute_biorhythms_as_of(birth, Some(today), today);
    assert!(same_day.selected.is_none());

    let other_day = compute_biorhythms_as_of(birth, Some(date(2024, 6, 20)), today);
    let selected = other_day.selected.unwrap();
    let offset = (date(2024, 6, 20) - birth).num_days();
    assert_eq!(selected.physical, cycle_value(offset, CycleKind::Physical));
}

/// Swapping which date is "reference" changes only the markers, never the
/// per-day values
#[test]
fn test_reference_swap_preserves_per_day_values() {
    let birth = date(1990, 5, 1);
    let first = date(2024, 6, 15);
    let second = date(2024, 6, 20);

    let a = compute_biorhythms_as_of(birth, Some(second), first);
    let b = compute_biorhythms_as_of(birth, Some(second), second);

    for (pa, pb) in a.chart.iter().zip(b.chart.iter()) {
        assert_eq!(pa.date, pb.date);
        assert_eq!(pa.physical, pb.physical);
        assert_eq!(pa.emotional, pb.emotional);
        assert_eq!(pa.intellectual, pb.intellectual);
    }
}

#[test]
fn test_group_workflow() {
    let ana = tracked("Ana", date(1990, 5, 1), &[]);
    let luis = tracked("Luis", date(1985, 11, 3), std::slice::from_ref(&ana));
    let people = vec![ana, luis];
    let today = date(2024, 6, 15);

    let group = compute_group_as_of(&people, Some(date(2024, 6, 20)), CycleKind::Emotional, today);

    assert_eq!(group.people.len(), 2);
    assert_eq!(group.combined_chart.len(), CHART_WINDOW_LEN);

    // the combined series carries one key per person, aligned to each
    // person's own window
    for (index, point) in group.combined_chart.iter().enumerate() {
        for entry in &group.people {
            let key = series_key(&entry.person.id, CycleKind::Emotional);
            assert_eq!(point.series[&key], entry.data.chart[index].emotional);
        }
    }

    let recommendations = generate_group_recommendations(&group.people, CycleKind::Emotional);
    assert!(!recommendations.is_empty());
    assert!(recommendations[0].contains("emotional"));
}

/// Roster persistence feeds the aggregator with plain values
#[test]
fn test_store_to_group_workflow() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("people.json");

    let mut store = PeopleStore::open(path.clone()).unwrap();
    store
        .add(BirthProfile::new("Ana", date(1990, 5, 1)))
        .unwrap();
    store
        .add(BirthProfile::new("Luis", date(1985, 11, 3)))
        .unwrap();
    store.set_active("Ana", true).unwrap();
    store.set_active("Luis", true).unwrap();
    store.save().unwrap();

    let reloaded = PeopleStore::open(path).unwrap();
    let active = reloaded.active_people();
    assert_eq!(active.len(), 2);

    let group = compute_group_as_of(&active, None, CycleKind::Physical, date(2024, 6, 15));
    assert_eq!(group.people.len(), 2);
    assert_eq!(group.combined_chart.len(), CHART_WINDOW_LEN);
}

/// A future birth date is a valid input end to end
#[test]
fn test_future_birth_date_workflow() {
    let birth = date(2100, 1, 1);
    let today = date(2024, 6, 15);

    let data = compute_biorhythms_as_of(birth, None, today);
    let state = classify_state(&data.today, Some(&data.yesterday));

    assert_eq!(data.chart.len(), CHART_WINDOW_LEN);
    for kind in CycleKind::ALL {
        assert!((-100..=100).contains(&state.get(kind).value));
    }
}
