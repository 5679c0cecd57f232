use eframe::egui::{self, Color32, RichText, ScrollArea, Ui};

use crate::state::AppState;

// ---------------------------------------------------------------------------
// Left side panel – filter widgets
// ---------------------------------------------------------------------------

/// Render the left filter panel: year range and shape selection.
pub fn side_panel(ui: &mut Ui, state: &mut AppState) {
    ui.heading("Filters");
    ui.separator();

    let Some(dataset) = &state.dataset else {
        ui.label("No dataset loaded.");
        return;
    };
    let Some((min_year, max_year)) = dataset.year_bounds() else {
        ui.label("Dataset has no valid sightings.");
        return;
    };

    // Clone what we need so we can mutate state below.
    let shapes = dataset.shapes.clone();

    ScrollArea::vertical()
        .auto_shrink([false, false])
        .show(ui, |ui: &mut Ui| {
            // ---- Year range ----
            ui.strong("Years");
            let (mut from, mut to) = state.criteria.year_range;
            let mut changed = false;
            changed |= ui
                .add(egui::Slider::new(&mut from, min_year..=max_year).text("from"))
                .changed();
            changed |= ui
                .add(egui::Slider::new(&mut to, min_year..=max_year).text("to"))
                .changed();
            if changed {
                state.set_year_range(from, to);
            }
            ui.separator();

            // ---- Shape selection ----
            let n_selected = state.criteria.shapes.len();
            let n_total = shapes.len();
            ui.strong(format!("Shapes  ({n_selected}/{n_total})"));

            ui.horizontal(|ui: &mut Ui| {
                if ui.small_button("All").clicked() {
                    state.select_all_shapes();
                }
                if ui.small_button("None").clicked() {
                    state.select_no_shapes();
                }
            });

            for shape in &shapes {
                let is_selected = state.criteria.shapes.contains(shape);

                // Swatch the label with the shape's map colour.
                let mut text = RichText::new(shape);
                if let Some(colors) = &state.shape_colors {
                    text = text.color(colors.color_for(shape));
                }

                let mut checked = is_selected;
                if ui.checkbox(&mut checked, text).changed() {
                    state.toggle_shape(shape);
                }
            }
        });
}

// ---------------------------------------------------------------------------
// Top bar
// ---------------------------------------------------------------------------

/// Render the top menu / toolbar with the match count.
pub fn top_bar(ui: &mut Ui, state: &mut AppState) {
    egui::menu::bar(ui, |ui: &mut Ui| {
        ui.menu_button("File", |ui: &mut Ui| {
            if ui.button("Open…").clicked() {
                open_file_dialog(state);
                ui.close_menu();
            }
        });

        ui.separator();

        if let Some(ds) = &state.dataset {
            ui.label(format!(
                "{} of {} sightings match",
                state.visible_indices.len(),
                ds.len()
            ));
        }

        if let Some(msg) = &state.status_message {
            ui.separator();
            ui.label(RichText::new(msg).color(Color32::RED));
        }
    });
}

// ---------------------------------------------------------------------------
// File dialog
// ---------------------------------------------------------------------------

pub fn open_file_dialog(state: &mut AppState) {
    let file = rfd::FileDialog::new()
        .set_title("Open sighting data")
        .add_filter("Supported files", &["csv", "json", "parquet", "pq"])
        .add_filter("CSV", &["csv"])
        .add_filter("JSON", &["json"])
        .add_filter("Parquet", &["parquet", "pq"])
        .pick_file();

    if let Some(path) = file {
        state.load_path(&path);
    }
}
