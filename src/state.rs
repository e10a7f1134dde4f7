use crate::models::{CycleKind, CycleValues};
use serde::{Deserialize, Serialize};

/// Descriptive band for a cycle value
///
/// Thresholds are fixed and identical across cycle kinds; only the wording
/// differs per kind.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CycleBand {
    Exceptional, // above 70
    Good,        // 31 to 70
    Moderate,    // -29 to 30
    Low,         // -69 to -30
    NeedsRest,   // -70 and below
}

impl CycleBand {
    /// Band for a numeric cycle value
    pub fn from_value(value: i32) -> Self {
        if value > 70 {
            CycleBand::Exceptional
        } else if value > 30 {
            CycleBand::Good
        } else if value > -30 {
            CycleBand::Moderate
        } else if value > -70 {
            CycleBand::Low
        } else {
            CycleBand::NeedsRest
        }
    }

    /// Per-kind wording for this band
    pub fn description(&self, kind: CycleKind) -> &'static str {
        match (kind, self) {
            (CycleKind::Physical, CycleBand::Exceptional) => "Exceptional physical energy",
            (CycleKind::Physical, CycleBand::Good) => "Good physical energy",
            (CycleKind::Physical, CycleBand::Moderate) => "Moderate physical energy",
            (CycleKind::Physical, CycleBand::Low) => "Low physical energy",
            (CycleKind::Physical, CycleBand::NeedsRest) => "You need physical rest",

            (CycleKind::Emotional, CycleBand::Exceptional) => "Excellent emotional state",
            (CycleKind::Emotional, CycleBand::Good) => "Good emotional state",
            (CycleKind::Emotional, CycleBand::Moderate) => "Stable emotional state",
            (CycleKind::Emotional, CycleBand::Low) => "Sensitive emotional state",
            (CycleKind::Emotional, CycleBand::NeedsRest) => "You need emotional care",

            (CycleKind::Intellectual, CycleBand::Exceptional) => "Exceptional mental capacity",
            (CycleKind::Intellectual, CycleBand::Good) => "Good mental capacity",
            (CycleKind::Intellectual, CycleBand::Moderate) => "Moderate mental capacity",
            (CycleKind::Intellectual, CycleBand::Low) => "Low mental capacity",
            (CycleKind::Intellectual, CycleBand::NeedsRest) => "You need mental rest",
        }
    }
}

/// Day-over-day direction of a cycle
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Trend {
    Up,
    Down,
}

impl Trend {
    /// Trend from today's value and an optional prior-day value
    ///
    /// Ties count as up, and a missing prior value defaults to up.
    pub fn from_values(today: i32, yesterday: Option<i32>) -> Self {
        match yesterday {
            Some(prior) if today < prior => Trend::Down,
            _ => Trend::Up,
        }
    }

    pub fn arrow(&self) -> &'static str {
        match self {
            Trend::Up => "↑",
            Trend::Down => "↓",
        }
    }
}

/// Classified state of a single cycle for one day
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CycleState {
    pub value: i32,
    pub band: CycleBand,
    pub trend: Trend,
    /// Band wording for this cycle kind
    pub description: String,
}

/// Classified state of all three cycles
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BiorhythmState {
    pub physical: CycleState,
    pub emotional: CycleState,
    pub intellectual: CycleState,
}

impl BiorhythmState {
    pub fn get(&self, kind: CycleKind) -> &CycleState {
        match kind {
            CycleKind::Physical => &self.physical,
            CycleKind::Emotional => &self.emotional,
            CycleKind::Intellectual => &self.intellectual,
        }
    }

    /// Mean of the three classified values
    pub fn mean_value(&self) -> f64 {
        (self.physical.value + self.emotional.value + self.intellectual.value) as f64 / 3.0
    }
}

fn classify_cycle(kind: CycleKind, today: i32, yesterday: Option<i32>) -> CycleState {
    let band = CycleBand::from_value(today);
    CycleState {
        value: today,
        band,
        trend: Trend::from_values(today, yesterday),
        description: band.description(kind).to_string(),
    }
}

/// Classify a day's cycle values, comparing against the prior day when
/// available
///
/// Total over the engine's output range; there is nothing to fail.
pub fn classify_state(today: &CycleValues, yesterday: Option<&CycleValues>) -> BiorhythmState {
    BiorhythmState {
        physical: classify_cycle(
            CycleKind::Physical,
            today.physical,
            yesterday.map(|v| v.physical),
        ),
        emotional: classify_cycle(
            CycleKind::Emotional,
            today.emotional,
            yesterday.map(|v| v.emotional),
        ),
        intellectual: classify_cycle(
            CycleKind::Intellectual,
            today.intellectual,
            yesterday.map(|v| v.intellectual),
        ),
    }
}
