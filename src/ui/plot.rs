use std::ops::RangeInclusive;

use eframe::egui::Ui;
use egui_plot::{AxisHints, GridMark, HPlacement, Legend, Line, Plot, PlotPoints, Points};

use crate::chart::{build_chart, AxisSide, ChartSpec, SeriesKind};
use crate::data::filter::filter_by_range;
use crate::data::model::format_timestamp;
use crate::state::AppState;

// ---------------------------------------------------------------------------
// Time-series plot (central panel)
// ---------------------------------------------------------------------------

/// Render the filtered dataset in the central panel.
pub fn timeseries_plot(ui: &mut Ui, state: &AppState) {
    let Some(dataset) = &state.dataset else {
        ui.centered_and_justified(|ui: &mut Ui| {
            ui.heading("Open a measurement CSV to view data  (File → Open…)");
        });
        return;
    };
    let Some(range) = state.selected_range() else {
        return;
    };

    let filtered = filter_by_range(dataset, &range);
    let chart = build_chart(&filtered, state.show_sizing, &state.file_name);

    ui.heading(&chart.title);

    let axis_map = secondary_axis_map(&chart);

    let mut plot = Plot::new("timeseries_plot")
        .legend(Legend::default())
        .x_axis_label("Datetime")
        .x_axis_formatter(|mark: GridMark, _range: &RangeInclusive<f64>| {
            format_timestamp(mark.value)
        })
        .allow_boxed_zoom(true)
        .allow_drag(true)
        .allow_scroll(true)
        .allow_zoom(true);

    plot = match axis_map {
        Some(map) => plot.custom_y_axes(vec![
            AxisHints::new_y().label(chart.primary_axis_label),
            AxisHints::new_y()
                .label(chart.secondary_axis_label)
                .placement(HPlacement::Right)
                .formatter(move |mark: GridMark, _range: &RangeInclusive<f64>| {
                    format!("{:.1}", map.to_secondary(mark.value))
                }),
        ]),
        None => plot.y_axis_label(chart.primary_axis_label),
    };

    plot.show(ui, |plot_ui| {
        for spec in &chart.series {
            // Secondary-axis values are rescaled into the primary range so
            // both units share one plot; the right axis labels map back.
            let points: PlotPoints = match (spec.axis, axis_map) {
                (AxisSide::Secondary, Some(map)) => spec
                    .points
                    .iter()
                    .map(|p| [p[0], map.to_primary(p[1])])
                    .collect(),
                _ => spec.points.iter().copied().collect(),
            };

            match spec.kind {
                SeriesKind::Line { width } => {
                    let line = Line::new(points)
                        .name(spec.name)
                        .color(spec.color)
                        .width(width);
                    plot_ui.line(line);
                }
                SeriesKind::Markers { radius } => {
                    let markers = Points::new(points)
                        .name(spec.name)
                        .color(spec.color)
                        .radius(radius);
                    plot_ui.points(markers);
                }
            }
        }
    });
}

// ---------------------------------------------------------------------------
// Secondary-axis emulation
// ---------------------------------------------------------------------------

/// Linear map between the sizing scale and the pressure scale.
#[derive(Debug, Clone, Copy)]
struct AxisMap {
    p_min: f64,
    p_span: f64,
    s_min: f64,
    s_span: f64,
}

impl AxisMap {
    fn to_primary(self, v: f64) -> f64 {
        self.p_min + (v - self.s_min) / self.s_span * self.p_span
    }

    fn to_secondary(self, v: f64) -> f64 {
        self.s_min + (v - self.p_min) / self.p_span * self.s_span
    }
}

/// `None` when nothing is plotted on the secondary axis, in which case the
/// plot keeps a single plain y-axis.
fn secondary_axis_map(chart: &ChartSpec) -> Option<AxisMap> {
    let secondary = value_bounds(chart, AxisSide::Secondary)?;
    // With no pressure points in the window, the sizing scale maps onto
    // itself.
    let primary = value_bounds(chart, AxisSide::Primary).unwrap_or(secondary);

    Some(AxisMap {
        p_min: primary.0,
        p_span: span(primary),
        s_min: secondary.0,
        s_span: span(secondary),
    })
}

fn value_bounds(chart: &ChartSpec, axis: AxisSide) -> Option<(f64, f64)> {
    let mut bounds: Option<(f64, f64)> = None;
    for series in chart.series.iter().filter(|s| s.axis == axis) {
        for point in &series.points {
            let (lo, hi) = bounds.get_or_insert((point[1], point[1]));
            *lo = lo.min(point[1]);
            *hi = hi.max(point[1]);
        }
    }
    bounds
}

/// Guard against a zero-width scale (a single flat series).
fn span((lo, hi): (f64, f64)) -> f64 {
    if (hi - lo).abs() < f64::EPSILON {
        1.0
    } else {
        hi - lo
    }
}
