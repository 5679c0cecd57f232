mod app;
mod color;
mod data;
mod state;
mod ui;

use std::path::PathBuf;

use app::SkywatchApp;
use eframe::egui;

fn main() -> eframe::Result {
    env_logger::init();

    let mut app = SkywatchApp::default();
    if let Some(path) = startup_file() {
        app.state.load_path(&path);
    }

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([1200.0, 800.0])
            .with_min_inner_size([600.0, 400.0]),
        ..Default::default()
    };

    eframe::run_native(
        "Skywatch – UFO Sighting Dashboard",
        options,
        Box::new(move |_cc| Ok(Box::new(app))),
    )
}

/// Dataset to load at startup: the first CLI argument if given, otherwise a
/// NUFORC export sitting in the working directory.
fn startup_file() -> Option<PathBuf> {
    if let Some(arg) = std::env::args().nth(1) {
        return Some(PathBuf::from(arg));
    }
    let default = PathBuf::from("ufo_sighting_data.csv");
    default.exists().then_some(default)
}
