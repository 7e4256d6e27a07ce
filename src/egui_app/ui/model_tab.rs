use super::{style, widgets};
use crate::dashboard::Tone;
use crate::egui_app::view_model::{ConfusionCell, FeatureBar, ModelView};
use eframe::egui::{self, CornerRadius, Frame, Margin, RichText, Stroke, Ui};

pub(super) fn render(ui: &mut Ui, view: &ModelView) {
    widgets::stat_card_row(ui, &view.cards);

    ui.columns(2, |columns| {
        let [left, right] = columns else {
            return;
        };
        widgets::panel_frame().show(left, |ui| {
            widgets::section_header(
                ui,
                "Feature Importance",
                Some("Top predictors of churn in Logistic Regression"),
            );
            for feature in &view.features {
                feature_row(ui, feature);
                ui.add_space(14.0);
            }
        });
        widgets::panel_frame().show(right, |ui| {
            widgets::section_header(ui, "Confusion Matrix", None);
            ui.vertical_centered(|ui| {
                for row in &view.confusion {
                    ui.horizontal(|ui| {
                        for cell in row {
                            confusion_cell(ui, cell);
                        }
                    });
                    ui.add_space(8.0);
                }
            });
            ui.add_space(12.0);
            verdict_banner(ui, view.verdict);
        });
    });
}

fn feature_row(ui: &mut Ui, feature: &FeatureBar) {
    let accent = style::tone_color(Tone::Accent);
    ui.horizontal(|ui| {
        ui.label(RichText::new(feature.feature).size(13.0));
        ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
            ui.label(
                RichText::new(&feature.percent)
                    .size(12.0)
                    .monospace()
                    .color(accent),
            );
        });
    });
    let width = ui.available_width();
    widgets::gauge(ui, feature.importance, width, accent);
}

fn confusion_cell(ui: &mut Ui, cell: &ConfusionCell) {
    let color = style::tone_color(cell.tone);
    Frame::new()
        .fill(style::with_alpha(color, 0x18))
        .stroke(Stroke::new(1.0, style::with_alpha(color, 0x44)))
        .corner_radius(CornerRadius::same(8))
        .inner_margin(Margin::symmetric(32, 24))
        .show(ui, |ui| {
            ui.set_min_width(140.0);
            ui.vertical_centered(|ui| {
                ui.label(RichText::new(&cell.count).size(28.0).strong().color(color));
                ui.label(
                    RichText::new(cell.label)
                        .size(widgets::MONO_SMALL)
                        .monospace()
                        .color(style::palette().muted),
                );
            });
        });
}

fn verdict_banner(ui: &mut Ui, verdict: &str) {
    let success = style::tone_color(Tone::Success);
    Frame::new()
        .fill(style::with_alpha(success, 0x11))
        .stroke(Stroke::new(1.0, style::with_alpha(success, 0x33)))
        .corner_radius(CornerRadius::same(8))
        .inner_margin(Margin::symmetric(16, 12))
        .show(ui, |ui| {
            ui.label(RichText::new(verdict).size(12.0).monospace().color(success));
        });
}
