#![deny(missing_docs)]
#![deny(warnings)]

//! Entry point for the churn dashboard window.
#![cfg_attr(
    all(not(debug_assertions), target_os = "windows"),
    windows_subsystem = "windows"
)]
use churnboard::config::{self, DashboardSettings};
use churnboard::egui_app::ui::{DashboardApp, MIN_VIEWPORT_SIZE};
use churnboard::logging;
use eframe::egui;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    if let Err(err) = logging::init() {
        eprintln!("Logging disabled: {err}");
    }

    let settings = config::load_or_default().unwrap_or_else(|err| {
        tracing::warn!("Falling back to default settings: {err}");
        DashboardSettings::default()
    });
    let app = DashboardApp::new(&settings);

    let viewport = egui::ViewportBuilder::default()
        .with_title("Churn Prediction & Retention")
        .with_app_id("churnboard")
        .with_inner_size([1440.0, 900.0])
        .with_min_inner_size(MIN_VIEWPORT_SIZE);
    let native_options = eframe::NativeOptions {
        viewport,
        ..Default::default()
    };

    eframe::run_native(
        "churnboard",
        native_options,
        Box::new(move |_cc| Ok(Box::new(app))),
    )?;
    tracing::info!("Dashboard closed");
    Ok(())
}
