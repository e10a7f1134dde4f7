use crate::cycles::{compute_biorhythms_as_of, BiorhythmData, CHART_WINDOW_LEN};
use crate::models::{CycleKind, TrackedPerson};
use crate::state::{classify_state, BiorhythmState, CycleBand};
use chrono::{Local, NaiveDate};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// One person's computed biorhythms plus classified state
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PersonBiorhythm {
    pub person: TrackedPerson,
    pub data: BiorhythmData,
    pub state: BiorhythmState,
}

/// One day of the combined comparison chart
///
/// Per-person values are keyed `{person_id}_{cycle}` and flattened into the
/// serialized point, so one ordered sequence drives a multi-line chart.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CombinedChartPoint {
    pub label: String,
    pub date: NaiveDate,
    pub is_today: bool,
    pub is_selected: bool,
    #[serde(flatten)]
    pub series: BTreeMap<String, i32>,
}

/// Aggregated biorhythm data for a group of people
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GroupBiorhythmData {
    pub people: Vec<PersonBiorhythm>,
    pub combined_chart: Vec<CombinedChartPoint>,
}

/// Series key for one person's line in the combined chart
pub fn series_key(person_id: &str, comparison: CycleKind) -> String {
    format!("{}_{}", person_id, comparison.key())
}

/// Compute group biorhythms against the local calendar day
pub fn compute_group(
    people: &[TrackedPerson],
    reference: Option<NaiveDate>,
    comparison: CycleKind,
) -> GroupBiorhythmData {
    compute_group_as_of(people, reference, comparison, Local::now().date_naive())
}

/// Compute per-person biorhythms and merge the chart windows
///
/// Every person shares the same reference window, so per-offset dates align
/// positionally across the merged series. Stateless and unbounded; roster
/// limits are the caller's policy.
pub fn compute_group_as_of(
    people: &[TrackedPerson],
    reference: Option<NaiveDate>,
    comparison: CycleKind,
    today: NaiveDate,
) -> GroupBiorhythmData {
    let people: Vec<PersonBiorhythm> = people
        .iter()
        .map(|person| {
            let data = compute_biorhythms_as_of(person.profile.birth_date, reference, today);
            let state = classify_state(&data.today, Some(&data.yesterday));
            PersonBiorhythm {
                person: person.clone(),
                data,
                state,
            }
        })
        .collect();

    let mut combined_chart = Vec::with_capacity(CHART_WINDOW_LEN);
    if let Some(first) = people.first() {
        for (index, template) in first.data.chart.iter().enumerate() {
            let mut series = BTreeMap::new();
            for entry in &people {
                let point = &entry.data.chart[index];
                series.insert(
                    series_key(&entry.person.id, comparison),
                    point.get(comparison),
                );
            }
            combined_chart.push(CombinedChartPoint {
                label: template.label.clone(),
                date: template.date,
                is_today: template.is_today,
                is_selected: template.is_selected,
                series,
            });
        }
    }

    GroupBiorhythmData {
        people,
        combined_chart,
    }
}

/// Threshold on the group mean above which a joint activity is suggested
const GROUP_HIGH_THRESHOLD: f64 = 30.0;

/// Threshold on the group mean below which individual recovery is suggested
const GROUP_LOW_THRESHOLD: f64 = -30.0;

fn comparison_noun(comparison: CycleKind) -> &'static str {
    match comparison {
        CycleKind::Physical => "physical energy",
        CycleKind::Emotional => "emotional balance",
        CycleKind::Intellectual => "mental focus",
    }
}

fn joint_activity(comparison: CycleKind) -> &'static str {
    match comparison {
        CycleKind::Physical => "a workout, hike or game together",
        CycleKind::Emotional => "a shared meal or a long conversation",
        CycleKind::Intellectual => "a planning or brainstorming session",
    }
}

fn solo_activity(comparison: CycleKind) -> &'static str {
    match comparison {
        CycleKind::Physical => "light individual movement and early rest",
        CycleKind::Emotional => "quiet time and individual self-care",
        CycleKind::Intellectual => "routine tasks and individual downtime",
    }
}

/// Build combined recommendation strings for the selected comparison cycle
///
/// Fixed rule table, one string per applicable rule, order stable: the
/// group-average rule fires first, then aligned peaks, then per-person
/// highs and lows in roster order. Names are wrapped in `**` markers for
/// emphasis by the rendering layer.
pub fn generate_group_recommendations(
    people: &[PersonBiorhythm],
    comparison: CycleKind,
) -> Vec<String> {
    if people.is_empty() {
        return Vec::new();
    }

    let noun = comparison_noun(comparison);
    let mut recommendations = Vec::new();

    let average = people
        .iter()
        .map(|p| p.state.get(comparison).value as f64)
        .sum::<f64>()
        / people.len() as f64;

    if average > GROUP_HIGH_THRESHOLD {
        recommendations.push(format!(
            "The group's {} is high today — a great day for {}.",
            noun,
            joint_activity(comparison)
        ));
    } else if average < GROUP_LOW_THRESHOLD {
        recommendations.push(format!(
            "The group's {} is low today — better to favor {}.",
            noun,
            solo_activity(comparison)
        ));
    } else {
        recommendations.push(format!(
            "The group's {} is balanced today — keep plans flexible and low-pressure.",
            noun
        ));
    }

    for (i, first) in people.iter().enumerate() {
        for second in &people[i + 1..] {
            let first_band = first.state.get(comparison).band;
            let second_band = second.state.get(comparison).band;
            if first_band == CycleBand::Exceptional && second_band == CycleBand::Exceptional {
                recommendations.push(format!(
                    "**{}** and **{}** are both at a {} peak — ideal for tackling something ambitious together.",
                    first.person.name(),
                    second.person.name(),
                    noun
                ));
            }
        }
    }

    for entry in people {
        match entry.state.get(comparison).band {
            CycleBand::Exceptional => recommendations.push(format!(
                "**{}** is at an exceptional {} high today.",
                entry.person.name(),
                noun
            )),
            CycleBand::NeedsRest => recommendations.push(format!(
                "**{}** needs rest — keep demands on their {} light.",
                entry.person.name(),
                noun
            )),
            _ => {}
        }
    }

    recommendations
}
