use eframe::egui;

use crate::state::AppState;
use crate::ui::{panels, plot};

// ---------------------------------------------------------------------------
// eframe App implementation
// ---------------------------------------------------------------------------

pub struct SkywatchApp {
    pub state: AppState,
}

impl Default for SkywatchApp {
    fn default() -> Self {
        Self {
            state: AppState::default(),
        }
    }
}

impl eframe::App for SkywatchApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        // ---- Top panel: menu bar + match count ----
        egui::TopBottomPanel::top("top_bar").show(ctx, |ui| {
            panels::top_bar(ui, &mut self.state);
        });

        // ---- Left side panel: filters ----
        egui::SidePanel::left("filter_panel")
            .default_width(220.0)
            .resizable(true)
            .show(ctx, |ui| {
                panels::side_panel(ui, &mut self.state);
            });

        // ---- Bottom panel: shape ranking + yearly trend ----
        egui::TopBottomPanel::bottom("charts_panel")
            .default_height(240.0)
            .resizable(true)
            .show(ctx, |ui| {
                ui.columns(2, |cols| {
                    plot::shape_bar_chart(&mut cols[0], &self.state);
                    plot::yearly_line_chart(&mut cols[1], &self.state);
                });
            });

        // ---- Central panel: map ----
        egui::CentralPanel::default().show(ctx, |ui| {
            plot::sighting_map(ui, &self.state);
        });
    }
}
