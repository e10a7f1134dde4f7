use super::ExportError;
use crate::cycles::BiorhythmData;
use crate::group::GroupBiorhythmData;
use std::io::Write;

/// Write the full single-person result as pretty JSON
pub fn write_biorhythms<W: Write>(writer: W, data: &BiorhythmData) -> Result<(), ExportError> {
    serde_json::to_writer_pretty(writer, data)?;
    Ok(())
}

/// Write the full group result as pretty JSON
pub fn write_group<W: Write>(writer: W, data: &GroupBiorhythmData) -> Result<(), ExportError> {
    serde_json::to_writer_pretty(writer, data)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cycles::compute_biorhythms_as_of;
    use crate::group::{compute_group_as_of, series_key};
    use crate::models::{BirthProfile, CycleKind, TrackedPerson};
    use chrono::NaiveDate;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_biorhythm_json_round_trips() {
        let data = compute_biorhythms_as_of(date(1990, 5, 1), Some(date(2024, 6, 20)), date(2024, 6, 15));
        let mut buffer = Vec::new();
        write_biorhythms(&mut buffer, &data).unwrap();

        let parsed: BiorhythmData = serde_json::from_slice(&buffer).unwrap();
        assert_eq!(parsed, data);
    }

    #[test]
    fn test_group_json_flattens_series_keys() {
        let person = TrackedPerson::new(BirthProfile::new("Ana", date(1990, 5, 1)), &[]);
        let group = compute_group_as_of(
            std::slice::from_ref(&person),
            None,
            CycleKind::Emotional,
            date(2024, 6, 15),
        );

        let mut buffer = Vec::new();
        write_group(&mut buffer, &group).unwrap();

        let value: serde_json::Value = serde_json::from_slice(&buffer).unwrap();
        let key = series_key(&person.id, CycleKind::Emotional);
        assert!(value["combined_chart"][0].get(&key).is_some());
    }
}
