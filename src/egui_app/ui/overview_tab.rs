use super::{charts, style, widgets};
use crate::egui_app::view_model::OverviewView;
use eframe::egui::Ui;

pub(super) fn render(ui: &mut Ui, view: &OverviewView) {
    widgets::stat_card_row(ui, &view.cards);

    ui.columns(2, |columns| {
        let [left, right] = columns else {
            return;
        };
        widgets::panel_frame().show(left, |ui| {
            widgets::section_header(
                ui,
                "Retention Rate Trend",
                Some("Actual vs Logistic Regression prediction"),
            );
            ui.horizontal(|ui| {
                charts::legend_swatch(ui, view.trend.actual.tone, &view.trend.actual.name);
                charts::legend_swatch(ui, view.trend.predicted.tone, &view.trend.predicted.name);
            });
            charts::trend_chart(ui, &view.trend);
        });
        widgets::panel_frame().show(right, |ui| {
            widgets::section_header(ui, "Churn by Segment", None);
            charts::segment_chart(ui, &view.segments);
        });
    });
    ui.add_space(20.0);

    widgets::panel_frame().show(ui, |ui| {
        widgets::section_header(
            ui,
            "Engagement vs Tenure · Churn Probability Map",
            Some("Bubble size = revenue · Color = churn risk"),
        );
        if view.scatter.is_empty() {
            ui.label(
                eframe::egui::RichText::new("No sampled accounts")
                    .color(style::palette().muted),
            );
            return;
        }
        charts::scatter_chart(ui, &view.scatter);
    });
}
