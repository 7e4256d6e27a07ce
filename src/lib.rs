//! Library exports for the binary and the integration tests.
/// Application folder resolution.
pub mod app_dirs;
/// Read-only launch settings.
pub mod config;
/// Static churn metrics and display rules.
pub mod dashboard;
/// Tab controller, view model and egui renderer.
pub mod egui_app;
/// Tracing subscriber setup.
pub mod logging;
