use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// The three biorhythm cycles tracked by the system
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CycleKind {
    Physical,
    Emotional,
    Intellectual,
}

impl CycleKind {
    /// All cycles in display order
    pub const ALL: [CycleKind; 3] = [
        CycleKind::Physical,
        CycleKind::Emotional,
        CycleKind::Intellectual,
    ];

    /// Cycle period in days
    pub fn period(&self) -> u32 {
        match self {
            CycleKind::Physical => 23,
            CycleKind::Emotional => 28,
            CycleKind::Intellectual => 33,
        }
    }

    /// Lowercase identifier used in series keys and CLI arguments
    pub fn key(&self) -> &'static str {
        match self {
            CycleKind::Physical => "physical",
            CycleKind::Emotional => "emotional",
            CycleKind::Intellectual => "intellectual",
        }
    }

    /// Capitalized display name
    pub fn label(&self) -> &'static str {
        match self {
            CycleKind::Physical => "Physical",
            CycleKind::Emotional => "Emotional",
            CycleKind::Intellectual => "Intellectual",
        }
    }
}

impl std::str::FromStr for CycleKind {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "physical" => Ok(CycleKind::Physical),
            "emotional" => Ok(CycleKind::Emotional),
            "intellectual" => Ok(CycleKind::Intellectual),
            _ => Err(format!("Invalid cycle kind: {}", s)),
        }
    }
}

impl std::fmt::Display for CycleKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.key())
    }
}

/// A person's birth data as collected by onboarding
///
/// Only the birth date feeds the computation; birth time is kept for
/// completeness and heritage selects static recommendation text.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BirthProfile {
    /// Display name
    pub name: String,

    /// Calendar birth date (date-only, no time component)
    pub birth_date: NaiveDate,

    /// Optional birth time as entered, unused by the computation
    pub birth_time: Option<String>,

    /// Optional birth place
    pub birth_place: Option<String>,

    /// Optional heritage key for cultural recommendation lookup
    pub heritage: Option<String>,
}

impl BirthProfile {
    pub fn new(name: impl Into<String>, birth_date: NaiveDate) -> Self {
        BirthProfile {
            name: name.into(),
            birth_date,
            birth_time: None,
            birth_place: None,
            heritage: None,
        }
    }
}

/// Cycle values for a single calendar day, each in [-100, 100]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct CycleValues {
    pub physical: i32,
    pub emotional: i32,
    pub intellectual: i32,
}

impl CycleValues {
    pub fn get(&self, kind: CycleKind) -> i32 {
        match kind {
            CycleKind::Physical => self.physical,
            CycleKind::Emotional => self.emotional,
            CycleKind::Intellectual => self.intellectual,
        }
    }

    /// Mean of the three cycle values
    pub fn mean(&self) -> f64 {
        (self.physical + self.emotional + self.intellectual) as f64 / 3.0
    }
}

/// One day of the chart window
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChartPoint {
    /// Short display label, e.g. "Mar 05"
    pub label: String,

    pub physical: i32,
    pub emotional: i32,
    pub intellectual: i32,

    /// True when this point's date is the actual current calendar day
    pub is_today: bool,

    /// True when this point's date is an explicitly supplied reference date
    pub is_selected: bool,

    /// Full calendar date of the point
    pub date: NaiveDate,
}

impl ChartPoint {
    pub fn get(&self, kind: CycleKind) -> i32 {
        match kind {
            CycleKind::Physical => self.physical,
            CycleKind::Emotional => self.emotional,
            CycleKind::Intellectual => self.intellectual,
        }
    }
}

/// Maximum number of people the comparison roster may hold
///
/// Enforced by the people store and CLI; the aggregator itself is unbounded.
pub const MAX_TRACKED_PEOPLE: usize = 3;

/// Display colors assigned to tracked people, first-unused wins
pub const PERSON_COLORS: [&str; 6] = [
    "#fb7185", "#60a5fa", "#4ade80", "#fbbf24", "#c084fc", "#fb923c",
];

/// A person on the comparison roster
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TrackedPerson {
    /// Generated identifier, stable across sessions
    pub id: String,

    /// Birth data
    pub profile: BirthProfile,

    /// Display color from the fixed palette
    pub color: String,
}

impl TrackedPerson {
    /// Create a person with a fresh id and the first palette color not used
    /// by `existing`
    pub fn new(profile: BirthProfile, existing: &[TrackedPerson]) -> Self {
        TrackedPerson {
            id: Uuid::new_v4().to_string(),
            profile,
            color: next_unused_color(existing).to_string(),
        }
    }

    pub fn name(&self) -> &str {
        &self.profile.name
    }
}

/// First palette color not currently assigned, falling back to the first
/// entry when all are taken
pub fn next_unused_color(people: &[TrackedPerson]) -> &'static str {
    PERSON_COLORS
        .iter()
        .find(|color| !people.iter().any(|p| p.color == **color))
        .copied()
        .unwrap_or(PERSON_COLORS[0])
}

#[cfg(test)]
mod tests {
    use super::*;

    fn person_with_color(color: &str) -> TrackedPerson {
        TrackedPerson {
            id: Uuid::new_v4().to_string(),
            profile: BirthProfile::new("Test", NaiveDate::from_ymd_opt(1990, 1, 1).unwrap()),
            color: color.to_string(),
        }
    }

    #[test]
    fn test_cycle_periods() {
        assert_eq!(CycleKind::Physical.period(), 23);
        assert_eq!(CycleKind::Emotional.period(), 28);
        assert_eq!(CycleKind::Intellectual.period(), 33);
    }

    #[test]
    fn test_cycle_kind_parsing() {
        assert_eq!("physical".parse::<CycleKind>().unwrap(), CycleKind::Physical);
        assert_eq!("Emotional".parse::<CycleKind>().unwrap(), CycleKind::Emotional);
        assert!("spiritual".parse::<CycleKind>().is_err());
    }

    #[test]
    fn test_cycle_kind_serialization() {
        let json = serde_json::to_string(&CycleKind::Intellectual).unwrap();
        assert_eq!(json, "\"intellectual\"");

        let deserialized: CycleKind = serde_json::from_str(&json).unwrap();
        assert_eq!(deserialized, CycleKind::Intellectual);
    }

    #[test]
    fn test_cycle_values_accessors() {
        let values = CycleValues {
            physical: 90,
            emotional: -30,
            intellectual: 0,
        };

        assert_eq!(values.get(CycleKind::Physical), 90);
        assert_eq!(values.get(CycleKind::Emotional), -30);
        assert_eq!(values.get(CycleKind::Intellectual), 0);
        assert_eq!(values.mean(), 20.0);
    }

    #[test]
    fn test_next_unused_color_skips_taken() {
        let people = vec![
            person_with_color(PERSON_COLORS[0]),
            person_with_color(PERSON_COLORS[1]),
        ];
        assert_eq!(next_unused_color(&people), PERSON_COLORS[2]);
    }

    #[test]
    fn test_next_unused_color_falls_back_when_exhausted() {
        let people: Vec<TrackedPerson> =
            PERSON_COLORS.iter().map(|c| person_with_color(c)).collect();
        assert_eq!(next_unused_color(&people), PERSON_COLORS[0]);
    }

    #[test]
    fn test_tracked_person_gets_distinct_colors() {
        let date = NaiveDate::from_ymd_opt(1988, 7, 10).unwrap();
        let first = TrackedPerson::new(BirthProfile::new("Ana", date), &[]);
        let second = TrackedPerson::new(BirthProfile::new("Luis", date), &[first.clone()]);

        assert_eq!(first.color, PERSON_COLORS[0]);
        assert_eq!(second.color, PERSON_COLORS[1]);
        assert_ne!(first.id, second.id);
    }

    #[test]
    fn test_birth_profile_serialization() {
        let profile = BirthProfile {
            name: "Ana".to_string(),
            birth_date: NaiveDate::from_ymd_opt(1992, 3, 14).unwrap(),
            birth_time: Some("08:30".to_string()),
            birth_place: Some("Madrid".to_string()),
            heritage: Some("european".to_string()),
        };

        let json = serde_json::to_string(&profile).unwrap();
        let deserialized: BirthProfile = serde_json::from_str(&json).unwrap();
        assert_eq!(deserialized, profile);
    }
}
