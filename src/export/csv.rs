use super::ExportError;
use crate::group::CombinedChartPoint;
use crate::models::ChartPoint;
use std::io::Write;

/// Write a single-person chart window as CSV
pub fn write_chart<W: Write>(writer: W, chart: &[ChartPoint]) -> Result<(), ExportError> {
    let mut csv_writer = csv::Writer::from_writer(writer);

    csv_writer.write_record([
        "date",
        "physical",
        "emotional",
        "intellectual",
        "is_today",
        "is_selected",
    ])?;

    for point in chart {
        csv_writer.write_record([
            point.date.to_string(),
            point.physical.to_string(),
            point.emotional.to_string(),
            point.intellectual.to_string(),
            point.is_today.to_string(),
            point.is_selected.to_string(),
        ])?;
    }

    csv_writer.flush()?;
    Ok(())
}

/// Write a combined comparison window as CSV
///
/// Series columns follow the key order of the first point, which is stable
/// across the window since all points share the same key set.
pub fn write_combined_chart<W: Write>(
    writer: W,
    chart: &[CombinedChartPoint],
) -> Result<(), ExportError> {
    let mut csv_writer = csv::Writer::from_writer(writer);

    let series_keys: Vec<String> = chart
        .first()
        .map(|point| point.series.keys().cloned().collect())
        .unwrap_or_default();

    let mut header = vec![
        "date".to_string(),
        "is_today".to_string(),
        "is_selected".to_string(),
    ];
    header.extend(series_keys.iter().cloned());
    csv_writer.write_record(&header)?;

    for point in chart {
        let mut record = vec![
            point.date.to_string(),
            point.is_today.to_string(),
            point.is_selected.to_string(),
        ];
        for key in &series_keys {
            record.push(point.series.get(key).copied().unwrap_or(0).to_string());
        }
        csv_writer.write_record(&record)?;
    }

    csv_writer.flush()?;
    Ok(())
}
