//! egui renderer for the dashboard.

mod at_risk_tab;
mod charts;
mod cohorts_tab;
mod hotkeys;
mod model_tab;
mod overview_tab;
pub mod style;
mod widgets;

use std::time::{Duration, Instant};

use crate::config::DashboardSettings;
use crate::dashboard::dataset::{MODEL_STATUS, RETENTION_IMPROVEMENT};
use crate::dashboard::{Dataset, Tone};
use crate::egui_app::controller::{TabCommand, TabController};
use crate::egui_app::state::Tab;
use crate::egui_app::view_model::DashboardView;
use eframe::egui::{self, Frame, Margin, RichText, Stroke, Ui};
use rand::{SeedableRng, rngs::StdRng};

/// Smallest window that keeps the four-card rows readable.
pub const MIN_VIEWPORT_SIZE: egui::Vec2 = egui::vec2(960.0, 640.0);

/// The dashboard window.
pub struct DashboardApp {
    controller: TabController,
    view: DashboardView,
    fade_duration: Duration,
    visuals_set: bool,
}

impl DashboardApp {
    /// Build the dataset and mount the controller.
    pub fn new(settings: &DashboardSettings) -> Self {
        let points = settings.scatter.points;
        let dataset = match settings.scatter.seed {
            Some(seed) => Dataset::load(&mut StdRng::seed_from_u64(seed), points),
            None => Dataset::load(&mut rand::rng(), points),
        };
        tracing::info!(
            scatter_points = points,
            seeded = settings.scatter.seed.is_some(),
            "Dataset ready"
        );
        let controller = TabController::mount(
            dataset,
            Instant::now(),
            settings.animation.fade_in_delay(),
        );
        let view = controller.current_view();
        Self {
            controller,
            view,
            fade_duration: settings.animation.fade_duration(),
            visuals_set: false,
        }
    }

    fn apply_visuals(&mut self, ctx: &egui::Context) {
        if self.visuals_set {
            return;
        }
        let mut visuals = egui::Visuals::dark();
        style::apply_visuals(&mut visuals);
        ctx.set_visuals(visuals);
        self.visuals_set = true;
    }

    fn apply_command(&mut self, command: TabCommand) {
        self.controller.apply(command);
        self.refresh_view();
    }

    fn refresh_view(&mut self) {
        if self.view.tab() != self.controller.active_tab() {
            self.view = self.controller.current_view();
        }
    }

    fn render_header(&mut self, ui: &mut Ui) {
        let palette = style::palette();
        let success = style::tone_color(Tone::Success);
        ui.horizontal(|ui| {
            ui.vertical(|ui| {
                ui.horizontal(|ui| {
                    let (rect, _) =
                        ui.allocate_exact_size(egui::vec2(8.0, 8.0), egui::Sense::hover());
                    ui.painter().circle_filled(rect.center(), 4.0, success);
                    ui.label(
                        RichText::new(MODEL_STATUS.to_uppercase())
                            .size(11.0)
                            .monospace()
                            .extra_letter_spacing(2.0)
                            .color(palette.dim),
                    );
                });
                ui.label(
                    RichText::new("Churn Prediction & Retention")
                        .size(24.0)
                        .strong()
                        .color(palette.text),
                );
            });
            ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                ui.vertical(|ui| {
                    ui.label(
                        RichText::new("RETENTION IMPROVEMENT")
                            .size(11.0)
                            .monospace()
                            .color(palette.dim),
                    );
                    ui.label(
                        RichText::new(RETENTION_IMPROVEMENT)
                            .size(22.0)
                            .strong()
                            .color(success),
                    );
                });
            });
        });
    }

    fn render_tab_strip(&mut self, ui: &mut Ui) {
        let palette = style::palette();
        let accent = style::tone_color(Tone::Accent);
        let active = self.controller.active_tab();
        let mut clicked = None;
        ui.horizontal(|ui| {
            for tab in Tab::ALL {
                let selected = tab == active;
                let color = if selected { accent } else { palette.muted };
                let response = ui.add(
                    egui::Button::new(
                        RichText::new(tab.title())
                            .size(12.0)
                            .monospace()
                            .extra_letter_spacing(1.0)
                            .color(color),
                    )
                    .frame(false)
                    .min_size(egui::vec2(0.0, 40.0)),
                );
                if selected {
                    let rect = response.rect;
                    ui.painter().line_segment(
                        [rect.left_bottom(), rect.right_bottom()],
                        Stroke::new(2.0, accent),
                    );
                }
                if response.clicked() {
                    clicked = Some(tab);
                }
                ui.add_space(20.0);
            }
        });
        if let Some(tab) = clicked {
            self.apply_command(TabCommand::Select(tab));
        }
    }

    fn render_body(&mut self, ui: &mut Ui) {
        egui::ScrollArea::vertical()
            .auto_shrink([false, false])
            .show(ui, |ui| match &self.view {
                DashboardView::Overview(view) => overview_tab::render(ui, view),
                DashboardView::AtRisk(view) => at_risk_tab::render(ui, view),
                DashboardView::Model(view) => model_tab::render(ui, view),
                DashboardView::Cohorts(view) => cohorts_tab::render(ui, view),
            });
    }

    /// Draw one frame: tick the fade-in, apply hotkeys, then lay out panels.
    fn show(&mut self, ctx: &egui::Context) {
        self.apply_visuals(ctx);
        if let Some(remaining) = self.controller.tick(Instant::now()) {
            ctx.request_repaint_after(remaining);
        }
        if let Some(command) = hotkeys::poll(ctx) {
            self.apply_command(command);
        }

        let opacity = ctx.animate_bool_with_time(
            egui::Id::new("entrance_fade"),
            self.controller.animated_in(),
            self.fade_duration.as_secs_f32(),
        );
        let palette = style::palette();

        egui::TopBottomPanel::top("header")
            .frame(
                Frame::new()
                    .fill(palette.card)
                    .inner_margin(Margin::symmetric(36, 20))
                    .stroke(Stroke::new(1.0, palette.border)),
            )
            .show(ctx, |ui| {
                ui.set_opacity(opacity);
                self.render_header(ui);
            });
        egui::TopBottomPanel::top("tabs")
            .frame(
                Frame::new()
                    .fill(palette.bg)
                    .inner_margin(Margin::symmetric(36, 0))
                    .stroke(Stroke::new(1.0, palette.border)),
            )
            .show(ctx, |ui| {
                ui.set_opacity(opacity);
                self.render_tab_strip(ui);
            });
        egui::CentralPanel::default()
            .frame(
                Frame::new()
                    .fill(palette.bg)
                    .inner_margin(Margin::symmetric(36, 28)),
            )
            .show(ctx, |ui| {
                ui.set_opacity(opacity);
                self.render_body(ui);
            });
    }
}

impl eframe::App for DashboardApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        self.show(ctx);
    }
}

impl Drop for DashboardApp {
    fn drop(&mut self) {
        self.controller.cancel_pending();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::ScatterSettings;

    fn settings(points: usize) -> DashboardSettings {
        DashboardSettings {
            scatter: ScatterSettings {
                points,
                seed: Some(42),
            },
            ..DashboardSettings::default()
        }
    }

    fn key_press(key: egui::Key) -> egui::RawInput {
        egui::RawInput {
            events: vec![egui::Event::Key {
                key,
                physical_key: None,
                pressed: true,
                repeat: false,
                modifiers: egui::Modifiers::default(),
            }],
            ..Default::default()
        }
    }

    fn run_frame(ctx: &egui::Context, app: &mut DashboardApp, input: egui::RawInput) {
        let _ = ctx.run(input, |ctx| app.show(ctx));
    }

    #[test]
    fn every_tab_renders_headless() {
        let ctx = egui::Context::default();
        let mut app = DashboardApp::new(&settings(80));
        for tab in Tab::ALL {
            app.apply_command(TabCommand::Select(tab));
            assert_eq!(app.view.tab(), tab);
            run_frame(&ctx, &mut app, egui::RawInput::default());
            run_frame(&ctx, &mut app, egui::RawInput::default());
        }
    }

    #[test]
    fn empty_scatter_renders_an_empty_chart() {
        let ctx = egui::Context::default();
        let mut app = DashboardApp::new(&settings(0));
        let DashboardView::Overview(view) = &app.view else {
            panic!("expected overview on mount");
        };
        assert!(view.scatter.is_empty());
        run_frame(&ctx, &mut app, egui::RawInput::default());
    }

    #[test]
    fn digit_key_switches_tab_and_recomposes_view() {
        let ctx = egui::Context::default();
        let mut app = DashboardApp::new(&settings(10));
        run_frame(&ctx, &mut app, key_press(egui::Key::Num3));
        assert_eq!(app.controller.active_tab(), Tab::Model);
        assert!(matches!(app.view, DashboardView::Model(_)));

        run_frame(&ctx, &mut app, key_press(egui::Key::ArrowRight));
        assert_eq!(app.controller.active_tab(), Tab::Cohorts);
        assert!(matches!(app.view, DashboardView::Cohorts(_)));
    }

    #[test]
    fn visuals_are_applied_once() {
        let ctx = egui::Context::default();
        let mut app = DashboardApp::new(&settings(10));
        run_frame(&ctx, &mut app, egui::RawInput::default());
        assert!(app.visuals_set);
        assert_eq!(ctx.style().visuals.panel_fill, style::palette().bg);
    }
}
