//! Chart adapters over `egui_plot`.
//!
//! Each function takes already shaped series from the view model, draws them,
//! and shows the matching tooltip for whatever sits under the pointer.

use super::style;
use super::widgets;
use crate::dashboard::Tone;
use crate::egui_app::view_model::{CohortsView, ScatterBubble, SegmentBar, TrendChart};
use eframe::egui::{self, Ui};
use egui_plot::{
    Bar, BarChart, GridInput, GridMark, Line, LineStyle, Plot, PlotPoint, PlotPoints, Points,
    uniform_grid_spacer,
};
use std::ops::RangeInclusive;

/// Non-interactive plot shell shared by every chart.
fn base_plot(id: &str, height: f32) -> Plot<'static> {
    Plot::new(id)
        .height(height)
        .allow_zoom(false)
        .allow_drag(false)
        .allow_scroll(false)
        .allow_boxed_zoom(false)
        .allow_double_click_reset(false)
        .show_x(false)
        .show_y(false)
        .show_background(false)
}

fn category_spacer(_input: GridInput) -> [f64; 3] {
    [1.0, 1.0, 1.0]
}

/// Axis formatter printing `labels[i]` at integer mark `i` and nothing between.
fn category_formatter(
    labels: Vec<String>,
) -> impl Fn(GridMark, &RangeInclusive<f64>) -> String + 'static {
    move |mark, _range| category_at(&labels, mark.value).unwrap_or_default()
}

fn category_at(labels: &[String], value: f64) -> Option<String> {
    let rounded = value.round();
    if (value - rounded).abs() > 1e-6 || rounded < 0.0 {
        return None;
    }
    labels.get(rounded as usize).cloned()
}

/// Category index closest to a plot coordinate, if inside `0..len`.
fn nearest_category(value: f64, len: usize) -> Option<usize> {
    let rounded = value.round();
    (rounded >= 0.0 && (rounded as usize) < len).then_some(rounded as usize)
}

fn percent_axis(mark: GridMark, _range: &RangeInclusive<f64>) -> String {
    format!("{}%", mark.value)
}

/// Retention trend: actual area with dots, dashed predicted area.
pub(super) fn trend_chart(ui: &mut Ui, chart: &TrendChart) {
    let labels = chart.months.iter().map(|m| m.to_string()).collect::<Vec<_>>();
    let actual_color = style::tone_color(chart.actual.tone);
    let predicted_color = style::tone_color(chart.predicted.tone);
    let plot = base_plot("retention_trend", 220.0)
        .include_y(70.0)
        .include_y(90.0)
        .x_grid_spacer(uniform_grid_spacer(category_spacer))
        .x_axis_formatter(category_formatter(labels));
    let response = plot.show(ui, |plot_ui| {
        let actual = chart.actual.points();
        plot_ui.line(
            Line::new(chart.actual.name.clone(), PlotPoints::from(actual.clone()))
                .color(actual_color)
                .width(2.0)
                .fill(70.0),
        );
        plot_ui.points(
            Points::new(chart.actual.name.clone(), PlotPoints::from(actual))
                .color(actual_color)
                .radius(3.0)
                .filled(true),
        );
        plot_ui.line(
            Line::new(
                chart.predicted.name.clone(),
                PlotPoints::from(chart.predicted.points()),
            )
            .color(predicted_color)
            .width(2.0)
            .style(LineStyle::Dashed { length: 5.0 })
            .fill(70.0),
        );
        plot_ui.pointer_coordinate()
    });
    if !response.response.hovered() {
        return;
    }
    let content = response
        .inner
        .and_then(|point| nearest_category(point.x, chart.months.len()))
        .and_then(|index| chart.tooltip(index));
    if let Some(content) = content {
        response
            .response
            .on_hover_ui_at_pointer(|ui| widgets::tooltip(ui, &content));
    }
}

/// Horizontal churn-rate bars, one per segment, toned by rule.
pub(super) fn segment_chart(ui: &mut Ui, segments: &[SegmentBar]) {
    let labels = segments
        .iter()
        .map(|bar| bar.segment.to_string())
        .collect::<Vec<_>>();
    let bars = segments
        .iter()
        .enumerate()
        .map(|(index, bar)| {
            Bar::new(index as f64, bar.churn_rate)
                .name(bar.segment)
                .fill(style::tone_color(bar.tone))
                .width(0.6)
        })
        .collect::<Vec<_>>();
    let plot = base_plot("churn_by_segment", 220.0)
        .include_x(0.0)
        .x_axis_formatter(percent_axis)
        .y_grid_spacer(uniform_grid_spacer(category_spacer))
        .y_axis_formatter(category_formatter(labels));
    let response = plot.show(ui, |plot_ui| {
        plot_ui.bar_chart(BarChart::new(SegmentBar::SERIES_NAME, bars).horizontal());
        plot_ui.pointer_coordinate()
    });
    if !response.response.hovered() {
        return;
    }
    let content = response
        .inner
        .and_then(|point| nearest_category(point.y, segments.len()))
        .and_then(|index| segments[index].tooltip());
    if let Some(content) = content {
        response
            .response
            .on_hover_ui_at_pointer(|ui| widgets::tooltip(ui, &content));
    }
}

/// Engagement vs tenure bubbles, radius and tone from the rules.
pub(super) fn scatter_chart(ui: &mut Ui, bubbles: &[ScatterBubble]) {
    let plot = base_plot("churn_probability_map", 240.0)
        .include_x(0.0)
        .include_x(100.0)
        .include_y(0.0)
        .include_y(36.0)
        .x_axis_label("Engagement Score")
        .y_axis_label("Tenure (months)");
    let response = plot.show(ui, |plot_ui| {
        for bubble in bubbles {
            let color = style::tone_color(bubble.tone);
            let center = [bubble.engagement, bubble.tenure];
            plot_ui.points(
                Points::new("Churn Probability", PlotPoints::from(center))
                    .radius(bubble.radius as f32)
                    .color(style::with_alpha(color, 0x88))
                    .filled(true),
            );
            plot_ui.points(
                Points::new("Churn Probability", PlotPoints::from(center))
                    .radius(bubble.radius as f32)
                    .color(color)
                    .filled(false),
            );
        }
    });
    let Some(pointer) = response.response.hover_pos() else {
        return;
    };
    let hovered = bubbles
        .iter()
        .map(|bubble| {
            let center = response
                .transform
                .position_from_point(&PlotPoint::new(bubble.engagement, bubble.tenure));
            (bubble, center.distance(pointer))
        })
        .filter(|(bubble, distance)| *distance <= bubble.radius as f32 + 4.0)
        .min_by(|a, b| a.1.total_cmp(&b.1))
        .map(|(bubble, _)| bubble);
    if let Some(bubble) = hovered {
        let lines = bubble.tooltip_lines();
        response
            .response
            .on_hover_ui_at_pointer(|ui| widgets::tooltip_lines(ui, &lines));
    }
}

/// One retention curve per cohort over the M+n offsets.
pub(super) fn cohort_chart(ui: &mut Ui, view: &CohortsView) {
    let labels = view.offsets.iter().map(|o| o.to_string()).collect::<Vec<_>>();
    let plot = base_plot("cohort_curves", 260.0)
        .include_y(60.0)
        .include_y(100.0)
        .include_x(0.0)
        .include_x((view.offsets.len() - 1) as f64)
        .x_grid_spacer(uniform_grid_spacer(category_spacer))
        .x_axis_formatter(category_formatter(labels))
        .y_axis_formatter(percent_axis);
    let response = plot.show(ui, |plot_ui| {
        for (index, curve) in view.curves.iter().enumerate() {
            let color = style::cohort_series_color(index);
            let points = curve
                .points
                .iter()
                .map(|point| [point.offset as f64, point.value])
                .collect::<Vec<_>>();
            plot_ui.line(
                Line::new(curve.cohort, PlotPoints::from(points.clone()))
                    .color(color)
                    .width(2.0),
            );
            plot_ui.points(
                Points::new(curve.cohort, PlotPoints::from(points))
                    .color(color)
                    .radius(3.0)
                    .filled(true),
            );
        }
        plot_ui.pointer_coordinate()
    });
    if !response.response.hovered() {
        return;
    }
    let content = response
        .inner
        .and_then(|point| nearest_category(point.x, view.offsets.len()))
        .and_then(|index| view.tooltip(index));
    if let Some(content) = content {
        response
            .response
            .on_hover_ui_at_pointer(|ui| widgets::tooltip(ui, &content));
    }
}

/// Accent used for the chart legend swatches in headers.
pub(super) fn legend_swatch(ui: &mut Ui, tone: Tone, label: &str) {
    let color = style::tone_color(tone);
    ui.horizontal(|ui| {
        let (rect, _) = ui.allocate_exact_size(egui::vec2(10.0, 10.0), egui::Sense::hover());
        ui.painter().circle_filled(rect.center(), 4.0, color);
        ui.label(
            egui::RichText::new(label)
                .size(widgets::MONO_SMALL)
                .monospace()
                .color(style::palette().muted),
        );
    });
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn category_labels_only_on_integer_marks() {
        let labels = vec!["Jul".to_string(), "Aug".to_string()];
        assert_eq!(category_at(&labels, 1.0).as_deref(), Some("Aug"));
        assert_eq!(category_at(&labels, 0.5), None);
        assert_eq!(category_at(&labels, 2.0), None);
        assert_eq!(category_at(&labels, -1.0), None);
    }

    #[test]
    fn nearest_category_rounds_and_bounds() {
        assert_eq!(nearest_category(0.4, 3), Some(0));
        assert_eq!(nearest_category(1.6, 3), Some(2));
        assert_eq!(nearest_category(2.6, 3), None);
        assert_eq!(nearest_category(-0.6, 3), None);
    }
}
