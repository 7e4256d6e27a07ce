use super::{charts, style, widgets};
use crate::egui_app::view_model::{CohortCell, CohortsView};
use eframe::egui::{self, Color32, CornerRadius, Frame, Margin, RichText, Stroke, Ui};

pub(super) fn render(ui: &mut Ui, view: &CohortsView) {
    widgets::panel_frame().show(ui, |ui| {
        widgets::section_header(
            ui,
            "Cohort Retention Analysis",
            Some("Monthly retention % by cohort acquisition month"),
        );
        egui::ScrollArea::horizontal()
            .id_salt("cohort_grid_scroll")
            .show(ui, |ui| retention_grid(ui, view));
    });
    ui.add_space(20.0);

    widgets::panel_frame().show(ui, |ui| {
        widgets::section_header(ui, "Retention Curve by Cohort", None);
        charts::cohort_chart(ui, view);
    });
}

fn retention_grid(ui: &mut Ui, view: &CohortsView) {
    let palette = style::palette();
    egui::Grid::new("cohort_retention_grid")
        .num_columns(view.offsets.len() + 1)
        .spacing([16.0, 12.0])
        .min_col_width(64.0)
        .show(ui, |ui| {
            ui.label(
                RichText::new("Cohort")
                    .size(widgets::MONO_SMALL)
                    .monospace()
                    .color(palette.muted),
            );
            for offset in view.offsets {
                ui.vertical_centered(|ui| {
                    ui.label(
                        RichText::new(offset)
                            .size(widgets::MONO_SMALL)
                            .monospace()
                            .color(palette.muted),
                    );
                });
            }
            ui.end_row();

            for row in &view.rows {
                ui.label(
                    RichText::new(row.month)
                        .size(13.0)
                        .monospace()
                        .color(palette.dim),
                );
                for (offset, cell) in row.cells.iter().enumerate() {
                    match cell {
                        Some(cell) => retention_cell(ui, cell, offset == 0),
                        None => {
                            ui.label("");
                        }
                    }
                }
                ui.end_row();
            }
        });
}

fn retention_cell(ui: &mut Ui, cell: &CohortCell, first: bool) {
    let palette = style::palette();
    let base = style::tone_color(cell.tone);
    let text_color = if cell.emphasized {
        palette.text
    } else {
        palette.dim
    };
    let fill = Color32::from_hex(&cell.background)
        .unwrap_or_else(|_| style::with_alpha(base, cell.alpha));
    Frame::new()
        .fill(fill)
        .stroke(Stroke::new(1.0, style::with_alpha(base, 0x44)))
        .corner_radius(CornerRadius::same(6))
        .inner_margin(Margin::symmetric(10, 6))
        .show(ui, |ui| {
            let mut text = RichText::new(format!("{}%", cell.value))
                .size(13.0)
                .monospace()
                .color(text_color);
            if first {
                text = text.strong();
            }
            ui.vertical_centered(|ui| {
                ui.label(text);
            });
        });
}
