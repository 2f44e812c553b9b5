//! Wordhunt desktop application using egui/eframe.
//!
//! This is the main entry point for the desktop Wordhunt application.

use wordhunt_app::{WordhuntApp, version};

fn main() -> eframe::Result<()> {
    const APP_ID: &str = "io.github.wordhunt";

    better_panic::install();
    env_logger::init();

    log::info!("starting Wordhunt {}", version::build_version());

    let options = eframe::NativeOptions {
        viewport: eframe::egui::ViewportBuilder::default()
            .with_app_id(APP_ID)
            .with_resizable(true)
            .with_inner_size((900.0, 640.0))
            .with_min_inner_size((480.0, 360.0)),
        ..Default::default()
    };
    eframe::run_native(
        "Wordhunt",
        options,
        Box::new(|cc| Ok(Box::new(WordhuntApp::new(cc)))),
    )
}
