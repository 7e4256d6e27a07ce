//! Stateless display units shared by the tabs.

use super::style;
use crate::dashboard::rules;
use crate::egui_app::view_model::{StatCardView, TooltipContent, TooltipLine};
use eframe::egui::{self, Color32, CornerRadius, Frame, Margin, RichText, Stroke, Ui};

pub(super) const MONO_SMALL: f32 = 11.0;

/// Card container used by every chart and table block.
pub(super) fn panel_frame() -> Frame {
    let palette = style::palette();
    Frame::new()
        .fill(palette.card)
        .stroke(Stroke::new(1.0, palette.border))
        .corner_radius(CornerRadius::same(10))
        .inner_margin(Margin::same(24))
}

/// Uppercase block heading with an optional caption below.
pub(super) fn section_header(ui: &mut Ui, title: &str, caption: Option<&str>) {
    let palette = style::palette();
    ui.label(
        RichText::new(title.to_uppercase())
            .size(13.0)
            .monospace()
            .extra_letter_spacing(1.0)
            .color(palette.dim),
    );
    if let Some(caption) = caption {
        ui.label(RichText::new(caption).size(MONO_SMALL).color(palette.muted));
    }
    ui.add_space(12.0);
}

pub(super) fn stat_card(ui: &mut Ui, card: &StatCardView) {
    let palette = style::palette();
    let accent = style::tone_color(card.tone);
    let response = Frame::new()
        .fill(palette.card)
        .stroke(Stroke::new(1.0, palette.border))
        .corner_radius(CornerRadius::same(8))
        .inner_margin(Margin::symmetric(24, 20))
        .show(ui, |ui| {
            ui.set_width(ui.available_width());
            ui.label(
                RichText::new(card.label.to_uppercase())
                    .size(12.0)
                    .monospace()
                    .extra_letter_spacing(2.0)
                    .color(palette.dim),
            );
            ui.add_space(8.0);
            ui.label(
                RichText::new(card.value)
                    .size(36.0)
                    .strong()
                    .color(palette.text),
            );
            if let Some(sub) = card.sub {
                ui.add_space(6.0);
                ui.label(RichText::new(sub).size(13.0).monospace().color(accent));
            }
        })
        .response;
    let rect = response.rect;
    let bar = egui::Rect::from_min_max(rect.left_top(), egui::pos2(rect.left() + 3.0, rect.bottom()));
    ui.painter().rect_filled(bar, 0.0, accent);
}

pub(super) fn risk_badge(ui: &mut Ui, score: u8) {
    let tier = rules::risk_tier(score);
    let color = style::tone_color(tier.tone());
    Frame::new()
        .fill(style::tone_alpha(tier.tone(), 0x22))
        .stroke(Stroke::new(1.0, style::tone_alpha(tier.tone(), 0x55)))
        .corner_radius(CornerRadius::same(4))
        .inner_margin(Margin::symmetric(8, 2))
        .show(ui, |ui| {
            ui.label(
                RichText::new(tier.label())
                    .size(MONO_SMALL)
                    .monospace()
                    .extra_letter_spacing(1.0)
                    .color(color),
            );
        });
}

/// Thin horizontal bar filled to `fraction` of `width`.
pub(super) fn gauge(ui: &mut Ui, fraction: f64, width: f32, fill: Color32) {
    let (rect, _) = ui.allocate_exact_size(egui::vec2(width, 6.0), egui::Sense::hover());
    let painter = ui.painter();
    painter.rect_filled(rect, 3.0, style::palette().border);
    let filled = (fraction.clamp(0.0, 1.0) as f32) * rect.width();
    if filled > 0.0 {
        let bar = egui::Rect::from_min_size(rect.min, egui::vec2(filled, rect.height()));
        painter.rect_filled(bar, 3.0, fill);
    }
}

pub(super) fn tooltip(ui: &mut Ui, content: &TooltipContent) {
    ui.label(
        RichText::new(&content.label)
            .size(12.0)
            .color(style::palette().dim),
    );
    ui.add_space(4.0);
    tooltip_lines(ui, &content.lines);
}

pub(super) fn tooltip_lines(ui: &mut Ui, lines: &[TooltipLine]) {
    let palette = style::palette();
    for line in lines {
        let color = line.tone.map(style::tone_color).unwrap_or(palette.text);
        ui.label(RichText::new(&line.text).size(13.0).monospace().color(color));
    }
}

/// Row of equally wide stat cards; nothing is drawn for an empty slice.
pub(super) fn stat_card_row(ui: &mut Ui, cards: &[StatCardView]) {
    if cards.is_empty() {
        return;
    }
    ui.columns(cards.len(), |columns| {
        for (column, card) in columns.iter_mut().zip(cards) {
            stat_card(column, card);
        }
    });
    ui.add_space(28.0);
}
