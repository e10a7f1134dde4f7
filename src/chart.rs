//! SVG chart rendering, enabled by the `charts` feature

use crate::cycles::BiorhythmData;
use crate::group::{series_key, GroupBiorhythmData};
use crate::models::CycleKind;
use anyhow::{anyhow, Context, Result};
use plotters::prelude::*;
use std::path::Path;

/// Series colors matching the dashboard palette
pub const PHYSICAL_COLOR: RGBColor = RGBColor(0xfb, 0x71, 0x85);
pub const EMOTIONAL_COLOR: RGBColor = RGBColor(0x60, 0xa5, 0xfa);
pub const INTELLECTUAL_COLOR: RGBColor = RGBColor(0x4a, 0xde, 0x80);

const TODAY_MARKER_COLOR: RGBColor = RGBColor(0xfb, 0xbf, 0x24);
const SELECTED_MARKER_COLOR: RGBColor = RGBColor(0x8b, 0x5c, 0xf6);

fn cycle_color(kind: CycleKind) -> RGBColor {
    match kind {
        CycleKind::Physical => PHYSICAL_COLOR,
        CycleKind::Emotional => EMOTIONAL_COLOR,
        CycleKind::Intellectual => INTELLECTUAL_COLOR,
    }
}

/// Parse a `#rrggbb` person color, falling back to gray on malformed input
fn parse_hex_color(hex: &str) -> RGBColor {
    let digits = hex.trim_start_matches('#');
    if digits.len() != 6 || !digits.chars().all(|c| c.is_ascii_hexdigit()) {
        return RGBColor(0x9c, 0xa3, 0xaf);
    }
    let channel = |range: std::ops::Range<usize>| u8::from_str_radix(&digits[range], 16);
    match (channel(0..2), channel(2..4), channel(4..6)) {
        (Ok(r), Ok(g), Ok(b)) => RGBColor(r, g, b),
        _ => RGBColor(0x9c, 0xa3, 0xaf),
    }
}

/// Vertical today/selected day markers for a window
fn day_markers(points: impl Iterator<Item = (bool, bool)>) -> Vec<(i32, RGBColor)> {
    let mut markers = Vec::new();
    for (x, (is_today, is_selected)) in points.enumerate() {
        if is_today {
            markers.push((x as i32, TODAY_MARKER_COLOR));
        } else if is_selected {
            markers.push((x as i32, SELECTED_MARKER_COLOR));
        }
    }
    markers
}

/// Render a single-person window as an SVG line chart
pub fn render_chart(
    data: &BiorhythmData,
    output: &Path,
    width: u32,
    height: u32,
) -> Result<()> {
    let root = SVGBackend::new(output, (width, height)).into_drawing_area();
    root.fill(&WHITE).context("Failed to fill chart background")?;

    let x_max = data.chart.len() as i32 - 1;
    let labels: Vec<String> = data.chart.iter().map(|p| p.label.clone()).collect();

    let mut chart = ChartBuilder::on(&root)
        .margin(16)
        .x_label_area_size(36)
        .y_label_area_size(44)
        .build_cartesian_2d(0..x_max, -100..100i32)
        .context("Failed to build chart axes")?;

    chart
        .configure_mesh()
        .x_labels(8)
        .x_label_formatter(&|x| {
            labels
                .get(*x as usize)
                .cloned()
                .unwrap_or_default()
        })
        .y_desc("Cycle value")
        .draw()
        .context("Failed to draw chart mesh")?;

    for kind in CycleKind::ALL {
        let color = cycle_color(kind);
        chart
            .draw_series(LineSeries::new(
                data.chart
                    .iter()
                    .enumerate()
                    .map(|(x, point)| (x as i32, point.get(kind))),
                color.stroke_width(2),
            ))
            .map_err(|e| anyhow!("Failed to draw {} series: {}", kind, e))?
            .label(kind.label())
            .legend(move |(x, y)| {
                PathElement::new([(x, y), (x + 16, y)], color.stroke_width(2))
            });
    }

    for (x, color) in day_markers(data.chart.iter().map(|p| (p.is_today, p.is_selected))) {
        chart
            .draw_series(LineSeries::new([(x, -100), (x, 100)], color.stroke_width(2)))
            .map_err(|e| anyhow!("Failed to draw day marker: {}", e))?;
    }

    chart
        .configure_series_labels()
        .position(SeriesLabelPosition::UpperRight)
        .border_style(BLACK.mix(0.3))
        .background_style(WHITE.mix(0.8))
        .draw()
        .context("Failed to draw chart legend")?;

    root.present().context("Failed to write chart file")?;
    Ok(())
}

/// Render the combined comparison window as an SVG line chart, one series
/// per person in their roster color
pub fn render_group_chart(
    group: &GroupBiorhythmData,
    comparison: CycleKind,
    output: &Path,
    width: u32,
    height: u32,
) -> Result<()> {
    let root = SVGBackend::new(output, (width, height)).into_drawing_area();
    root.fill(&WHITE).context("Failed to fill chart background")?;

    let x_max = group.combined_chart.len() as i32 - 1;
    let labels: Vec<String> = group
        .combined_chart
        .iter()
        .map(|p| p.label.clone())
        .collect();

    let mut chart = ChartBuilder::on(&root)
        .margin(16)
        .x_label_area_size(36)
        .y_label_area_size(44)
        .build_cartesian_2d(0..x_max.max(1), -100..100i32)
        .context("Failed to build chart axes")?;

    chart
        .configure_mesh()
        .x_labels(8)
        .x_label_formatter(&|x| {
            labels
                .get(*x as usize)
                .cloned()
                .unwrap_or_default()
        })
        .y_desc(format!("{} value", comparison.label()))
        .draw()
        .context("Failed to draw chart mesh")?;

    for entry in &group.people {
        let color = parse_hex_color(&entry.person.color);
        let key = series_key(&entry.person.id, comparison);
        chart
            .draw_series(LineSeries::new(
                group
                    .combined_chart
                    .iter()
                    .enumerate()
                    .map(|(x, point)| (x as i32, point.series.get(&key).copied().unwrap_or(0))),
                color.stroke_width(2),
            ))
            .map_err(|e| anyhow!("Failed to draw series for {}: {}", entry.person.name(), e))?
            .label(entry.person.name().to_string())
            .legend(move |(x, y)| {
                PathElement::new([(x, y), (x + 16, y)], color.stroke_width(2))
            });
    }

    for (x, color) in day_markers(
        group
            .combined_chart
            .iter()
            .map(|p| (p.is_today, p.is_selected)),
    ) {
        chart
            .draw_series(LineSeries::new([(x, -100), (x, 100)], color.stroke_width(2)))
            .map_err(|e| anyhow!("Failed to draw day marker: {}", e))?;
    }

    chart
        .configure_series_labels()
        .position(SeriesLabelPosition::UpperRight)
        .border_style(BLACK.mix(0.3))
        .background_style(WHITE.mix(0.8))
        .draw()
        .context("Failed to draw chart legend")?;

    root.present().context("Failed to write chart file")?;
    Ok(())
}
