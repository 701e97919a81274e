use eframe::egui::Color32;

use crate::data::model::{epoch_secs, Dataset, Record};

// ---------------------------------------------------------------------------
// SeriesSpec / ChartSpec – what to draw, independent of the plot widget
// ---------------------------------------------------------------------------

/// Which vertical scale a series belongs to. The secondary axis shares the
/// time axis but carries its own unit (diameter, not pressure).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AxisSide {
    Primary,
    Secondary,
}

/// How a series is drawn.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum SeriesKind {
    Line { width: f32 },
    Markers { radius: f32 },
}

/// One named, styled series. Points are `[epoch_secs, value]` pairs in
/// record order.
#[derive(Debug, Clone, PartialEq)]
pub struct SeriesSpec {
    pub name: &'static str,
    pub points: Vec<[f64; 2]>,
    pub axis: AxisSide,
    pub kind: SeriesKind,
    pub color: Color32,
}

/// The whole chart: title, axis labels, and the ordered series list.
#[derive(Debug, Clone, PartialEq)]
pub struct ChartSpec {
    pub title: String,
    pub primary_axis_label: &'static str,
    pub secondary_axis_label: &'static str,
    pub series: Vec<SeriesSpec>,
}

pub const AQ_PRESSURE_COLOR: Color32 = Color32::BLUE;
pub const OIL_PRESSURE_COLOR: Color32 = Color32::RED;

// ---------------------------------------------------------------------------
// Chart assembly
// ---------------------------------------------------------------------------

/// Assemble the ordered series list for an already-filtered dataset.
///
/// The sizing trace goes in first so the pressure lines draw on top of it.
/// An empty dataset produces the same series with empty point lists; the
/// renderer shows an empty plot rather than an error.
pub fn build_chart(data: &Dataset, include_sizing: bool, file_name: &str) -> ChartSpec {
    let points_of = |value: fn(&Record) -> f64| -> Vec<[f64; 2]> {
        data.records
            .iter()
            .map(|r| [epoch_secs(r.timestamp), value(r)])
            .collect()
    };

    let mut series = Vec::with_capacity(3);

    if include_sizing {
        series.push(SeriesSpec {
            name: "Sizing",
            points: points_of(|r| r.droplet_dia),
            axis: AxisSide::Secondary,
            kind: SeriesKind::Markers { radius: 3.0 },
            // lightgreen at half opacity
            color: Color32::from_rgba_unmultiplied(144, 238, 144, 128),
        });
    }

    series.push(SeriesSpec {
        name: "AQ Pressure",
        points: points_of(|r| r.aq_press),
        axis: AxisSide::Primary,
        kind: SeriesKind::Line { width: 1.5 },
        color: AQ_PRESSURE_COLOR,
    });
    series.push(SeriesSpec {
        name: "Oil Pressure",
        points: points_of(|r| r.oil_press),
        axis: AxisSide::Primary,
        kind: SeriesKind::Line { width: 1.5 },
        color: OIL_PRESSURE_COLOR,
    });

    ChartSpec {
        title: format!("Pressure and Sizing Over Time ({file_name})"),
        primary_axis_label: "Pressure",
        secondary_axis_label: "Sizing",
        series,
    }
}
