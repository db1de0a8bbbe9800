use eframe::egui;
use log::{error, info};

mod app;
mod ui;

use app::GradeLinkApp;

fn main() -> Result<(), eframe::Error> {
    env_logger::init();
    info!("Starting GradeLink dashboard");

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([1100.0, 780.0])
            .with_min_inner_size([800.0, 600.0])
            .with_title("GradeLink")
            .with_resizable(true),
        ..Default::default()
    };

    eframe::run_native(
        "GradeLink",
        options,
        Box::new(|cc| match GradeLinkApp::new(&cc.egui_ctx) {
            Ok(app) => {
                info!("Dashboard initialized");
                Ok(Box::new(app))
            }
            Err(e) => {
                error!("Failed to initialize dashboard: {}", e);
                Err(format!("Failed to initialize dashboard: {}", e).into())
            }
        }),
    )
}
