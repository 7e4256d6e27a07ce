use super::{style, widgets};
use crate::dashboard::Tone;
use crate::egui_app::view_model::{AtRiskRow, AtRiskView};
use eframe::egui::{self, CornerRadius, Frame, Margin, RichText, Stroke, Ui};

const COLUMNS: [&str; 7] = [
    "Customer ID",
    "Company",
    "Churn Score",
    "Days Inactive",
    "ARR",
    "Risk Level",
    "AI Action",
];

pub(super) fn render(ui: &mut Ui, view: &AtRiskView) {
    widgets::stat_card_row(ui, &view.cards);

    widgets::panel_frame().show(ui, |ui| {
        ui.horizontal(|ui| {
            ui.vertical(|ui| {
                widgets::section_header(
                    ui,
                    "At-Risk Customer Queue",
                    Some("Sorted by churn probability · AI-recommended actions"),
                );
            });
            ui.with_layout(egui::Layout::right_to_left(egui::Align::Min), |ui| {
                live_chip(ui, &view.queue_badge);
            });
        });
        queue_table(ui, &view.rows);
    });
}

fn live_chip(ui: &mut Ui, text: &str) {
    let accent = style::tone_color(Tone::Accent);
    Frame::new()
        .stroke(Stroke::new(1.0, style::with_alpha(accent, 0x44)))
        .corner_radius(CornerRadius::same(4))
        .inner_margin(Margin::symmetric(10, 4))
        .show(ui, |ui| {
            ui.label(
                RichText::new(text)
                    .size(widgets::MONO_SMALL)
                    .monospace()
                    .color(accent),
            );
        });
}

fn queue_table(ui: &mut Ui, rows: &[AtRiskRow]) {
    let palette = style::palette();
    egui::Grid::new("at_risk_queue")
        .num_columns(COLUMNS.len())
        .spacing([28.0, 14.0])
        .min_col_width(48.0)
        .show(ui, |ui| {
            for heading in COLUMNS {
                ui.label(
                    RichText::new(heading.to_uppercase())
                        .size(widgets::MONO_SMALL)
                        .monospace()
                        .extra_letter_spacing(1.0)
                        .color(palette.muted),
                );
            }
            ui.end_row();

            for row in rows {
                let score_color = style::tone_color(row.score_tone);
                ui.label(
                    RichText::new(row.id)
                        .size(12.0)
                        .monospace()
                        .color(palette.muted),
                );
                ui.label(RichText::new(row.name).size(14.0).strong());
                ui.horizontal(|ui| {
                    widgets::gauge(ui, f64::from(row.score) / 100.0, 48.0, score_color);
                    ui.label(
                        RichText::new(row.score.to_string())
                            .size(13.0)
                            .monospace()
                            .strong()
                            .color(score_color),
                    );
                });
                ui.label(
                    RichText::new(&row.days_label)
                        .size(13.0)
                        .monospace()
                        .color(palette.dim),
                );
                ui.label(RichText::new(row.revenue).size(13.0).monospace());
                widgets::risk_badge(ui, row.score);
                action_chip(ui, row.action);
                ui.end_row();
            }
        });
    if rows.is_empty() {
        ui.label(RichText::new("No accounts in the queue").color(palette.muted));
    }
}

fn action_chip(ui: &mut Ui, action: &str) {
    let accent = style::tone_color(Tone::Accent);
    Frame::new()
        .fill(style::with_alpha(accent, 0x11))
        .corner_radius(CornerRadius::same(4))
        .inner_margin(Margin::symmetric(8, 3))
        .show(ui, |ui| {
            ui.label(
                RichText::new(format!("✦ {action}"))
                    .size(12.0)
                    .monospace()
                    .color(accent),
            );
        });
}
