use std::sync::Arc;

use eframe::egui::{Color32, Ui};
use egui_plot::{Bar, BarChart, Legend, Line, MarkerShape, Plot, PlotPoints, Points};

use crate::state::AppState;

/// Hover search radius on the map, in degrees.
const HOVER_RADIUS_DEG: f64 = 2.0;

// ---------------------------------------------------------------------------
// Sighting map (central panel)
// ---------------------------------------------------------------------------

/// Render the visible sightings as a scatter map, one series per shape.
pub fn sighting_map(ui: &mut Ui, state: &AppState) {
    if state.dataset.is_none() {
        ui.centered_and_justified(|ui: &mut Ui| {
            ui.heading("Open a sighting file to begin  (File → Open…)");
        });
        return;
    }

    // Group points per shape so each gets one legend entry and colour.
    let mut series: Vec<(String, Vec<[f64; 2]>)> = Vec::new();
    for p in state.map_points.iter() {
        match series.iter_mut().find(|(shape, _)| shape == &p.shape) {
            Some((_, pts)) => pts.push([p.longitude, p.latitude]),
            None => series.push((p.shape.clone(), vec![[p.longitude, p.latitude]])),
        }
    }

    let colors = state.shape_colors.clone();
    let hover_points = Arc::clone(&state.map_points);

    Plot::new("sighting_map")
        .legend(Legend::default())
        .x_axis_label("Longitude")
        .y_axis_label("Latitude")
        .data_aspect(1.0)
        .allow_boxed_zoom(true)
        .allow_drag(true)
        .allow_scroll(true)
        .allow_zoom(true)
        .label_formatter(move |name, value| {
            // Show the nearest sighting's prepared hover text when close
            // enough, otherwise just the cursor position.
            let nearest = hover_points
                .iter()
                .map(|p| {
                    let dx = p.longitude - value.x;
                    let dy = p.latitude - value.y;
                    (dx * dx + dy * dy, p)
                })
                .min_by(|a, b| a.0.total_cmp(&b.0))
                .filter(|(d2, _)| *d2 <= HOVER_RADIUS_DEG * HOVER_RADIUS_DEG);
            match nearest {
                Some((_, p)) => p.label.clone(),
                None if name.is_empty() => format!("{:.2}, {:.2}", value.x, value.y),
                None => format!("{name}\n{:.2}, {:.2}", value.x, value.y),
            }
        })
        .show(ui, |plot_ui| {
            for (shape, pts) in series {
                let color = colors
                    .as_ref()
                    .map(|c| c.color_for(&shape))
                    .unwrap_or(Color32::LIGHT_GREEN);

                let points = Points::new(PlotPoints::from(pts))
                    .name(shape)
                    .color(color)
                    .shape(MarkerShape::Circle)
                    .radius(2.0);

                plot_ui.points(points);
            }
        });
}

// ---------------------------------------------------------------------------
// Top-shapes bar chart
// ---------------------------------------------------------------------------

/// Render the ranked shape counts, most frequent on the left.
pub fn shape_bar_chart(ui: &mut Ui, state: &AppState) {
    ui.strong("Top shapes");

    let bars: Vec<Bar> = state
        .shape_counts
        .iter()
        .enumerate()
        .map(|(rank, (shape, count))| {
            let color = state
                .shape_colors
                .as_ref()
                .map(|c| c.color_for(shape))
                .unwrap_or(Color32::LIGHT_BLUE);
            Bar::new(rank as f64, *count as f64)
                .name(shape)
                .width(0.7)
                .fill(color)
        })
        .collect();

    Plot::new("top_shapes")
        .show_axes([false, true])
        .allow_drag(false)
        .allow_scroll(false)
        .allow_zoom(false)
        .show(ui, |plot_ui| {
            plot_ui.bar_chart(BarChart::new(bars));
        });
}

// ---------------------------------------------------------------------------
// Sightings-per-year line chart
// ---------------------------------------------------------------------------

/// Render the yearly counts as a time series.
pub fn yearly_line_chart(ui: &mut Ui, state: &AppState) {
    ui.strong("Sightings per year");

    let points: PlotPoints = state
        .year_counts
        .iter()
        .map(|&(year, count)| [year as f64, count as f64])
        .collect();

    Plot::new("sightings_per_year")
        .x_axis_label("Year")
        .y_axis_label("Sightings")
        .allow_drag(false)
        .allow_scroll(false)
        .show(ui, |plot_ui| {
            plot_ui.line(
                Line::new(points)
                    .name("sightings")
                    .color(Color32::LIGHT_GREEN)
                    .width(1.5),
            );
        });
}
