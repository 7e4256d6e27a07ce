use crate::dashboard::Tone;
use eframe::egui::{
    Color32, Stroke, Visuals,
    epaint::{CornerRadius, Shadow},
    style::WidgetVisuals,
};

#[derive(Clone, Copy)]
pub struct Palette {
    pub bg: Color32,
    pub card: Color32,
    pub border: Color32,
    pub text: Color32,
    pub dim: Color32,
    pub muted: Color32,
}

pub fn palette() -> Palette {
    Palette {
        bg: Color32::from_rgb(0x0a, 0x0f, 0x1e),
        card: Color32::from_rgb(0x0f, 0x16, 0x29),
        border: Color32::from_rgb(0x1e, 0x2d, 0x4a),
        text: Color32::from_rgb(0xe2, 0xe8, 0xf0),
        dim: Color32::from_rgb(0x94, 0xa3, 0xb8),
        muted: Color32::from_rgb(0x64, 0x74, 0x8b),
    }
}

pub fn tone_color(tone: Tone) -> Color32 {
    let [r, g, b] = tone.rgb();
    Color32::from_rgb(r, g, b)
}

/// Same color with a `#rrggbbaa`-style alpha byte.
pub fn with_alpha(color: Color32, alpha: u8) -> Color32 {
    Color32::from_rgba_unmultiplied(color.r(), color.g(), color.b(), alpha)
}

pub fn tone_alpha(tone: Tone, alpha: u8) -> Color32 {
    with_alpha(tone_color(tone), alpha)
}

const COHORT_EXTRA: [Color32; 3] = [
    Color32::from_rgb(0xa7, 0x8b, 0xfa),
    Color32::from_rgb(0xfb, 0x71, 0x85),
    Color32::from_rgb(0x34, 0xd3, 0x99),
];

/// Line color of the `index`-th cohort curve.
pub fn cohort_series_color(index: usize) -> Color32 {
    match index % 6 {
        0 => tone_color(Tone::Accent),
        1 => tone_color(Tone::Success),
        2 => tone_color(Tone::Warning),
        extra => COHORT_EXTRA[extra - 3],
    }
}

pub fn grid_stroke() -> Stroke {
    Stroke::new(1.0, palette().border)
}

pub fn apply_visuals(visuals: &mut Visuals) {
    let palette = palette();
    visuals.window_fill = palette.card;
    visuals.panel_fill = palette.bg;
    visuals.override_text_color = Some(palette.text);
    visuals.extreme_bg_color = palette.bg;
    visuals.faint_bg_color = palette.card;
    visuals.selection.bg_fill = with_alpha(palette.border, 0x88);
    visuals.selection.stroke = Stroke::new(1.0, tone_color(Tone::Accent));
    visuals.widgets.noninteractive.bg_fill = palette.card;
    visuals.widgets.noninteractive.bg_stroke = grid_stroke();
    visuals.widgets.noninteractive.fg_stroke = Stroke::new(1.0, palette.text);
    set_flat(&mut visuals.widgets.inactive, palette);
    set_flat(&mut visuals.widgets.hovered, palette);
    set_flat(&mut visuals.widgets.active, palette);
    visuals.widgets.hovered.fg_stroke = Stroke::new(1.0, palette.text);
    visuals.window_corner_radius = CornerRadius::same(8);
    visuals.window_stroke = grid_stroke();
    visuals.popup_shadow = Shadow::NONE;
}

fn set_flat(vis: &mut WidgetVisuals, palette: Palette) {
    vis.bg_fill = palette.card;
    vis.weak_bg_fill = palette.card;
    vis.bg_stroke = Stroke::NONE;
    vis.fg_stroke = Stroke::new(1.0, palette.muted);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dashboard::rules;

    #[test]
    fn tone_colors_match_their_hex() {
        for tone in [Tone::Danger, Tone::Warning, Tone::Success, Tone::Accent] {
            let color = tone_color(tone);
            let hex = format!("#{:02x}{:02x}{:02x}", color.r(), color.g(), color.b());
            assert_eq!(hex, tone.hex());
        }
    }

    #[test]
    fn cohort_colors_cycle_through_six() {
        assert_eq!(cohort_series_color(0), tone_color(Tone::Accent));
        assert_eq!(cohort_series_color(3), Color32::from_rgb(0xa7, 0x8b, 0xfa));
        assert_eq!(cohort_series_color(6), cohort_series_color(0));
    }

    #[test]
    fn cohort_cell_hex_parses_to_the_tone_with_its_alpha() {
        let value = 72.0;
        let parsed = Color32::from_hex(&rules::cohort_cell_hex(value)).unwrap();
        let expected = with_alpha(
            tone_color(rules::cohort_cell_tone(value)),
            rules::cohort_cell_alpha(value),
        );
        assert_eq!(parsed, expected);
    }

    #[test]
    fn alpha_is_kept_unmultiplied() {
        let color = tone_alpha(Tone::Success, 0x33);
        assert_eq!(color.a(), 0x33);
    }
}
