mod support;

use std::time::{Duration, Instant};

use churnboard::dashboard::{RiskTier, Tone};
use churnboard::egui_app::controller::{TabCommand, TabController};
use churnboard::egui_app::state::Tab;
use churnboard::egui_app::view_model::DashboardView;
use support::seeded_dataset;

fn mounted() -> (TabController, Instant) {
    let start = Instant::now();
    let controller = TabController::mount(seeded_dataset(80), start, Duration::from_millis(100));
    (controller, start)
}

fn labels_for(controller: &mut TabController, tab: Tab) -> Vec<&'static str> {
    controller.select_tab(tab);
    let view = controller.current_view();
    assert_eq!(view.tab(), tab);
    view.card_labels()
}

#[test]
fn each_tab_exposes_only_its_own_kpis() {
    let (mut controller, _) = mounted();
    assert_eq!(controller.active_tab(), Tab::Overview);

    assert_eq!(
        labels_for(&mut controller, Tab::Overview),
        [
            "Total Customers",
            "Churn Rate",
            "At-Risk Accounts",
            "Retention Rate"
        ]
    );
    assert_eq!(
        labels_for(&mut controller, Tab::AtRisk),
        ["Critical Risk", "High Risk", "Revenue at Risk"]
    );
    assert_eq!(
        labels_for(&mut controller, Tab::Model),
        ["Model Accuracy", "Precision", "Recall", "F1 Score"]
    );
    assert!(labels_for(&mut controller, Tab::Cohorts).is_empty());
}

#[test]
fn views_are_distinct_per_tab() {
    let (mut controller, _) = mounted();
    let views = Tab::ALL
        .iter()
        .map(|tab| {
            controller.select_tab(*tab);
            controller.current_view()
        })
        .collect::<Vec<_>>();
    for (i, a) in views.iter().enumerate() {
        for b in &views[i + 1..] {
            assert_ne!(a, b);
        }
    }
}

#[test]
fn entrance_flag_flips_once_after_delay() {
    let (mut controller, start) = mounted();
    assert!(!controller.animated_in());

    controller.tick(start + Duration::from_millis(99));
    assert!(!controller.animated_in());

    assert_eq!(controller.tick(start + Duration::from_millis(150)), None);
    assert!(controller.animated_in());
    for ms in [200, 400, 1_000] {
        controller.tick(start + Duration::from_millis(ms));
        assert!(controller.animated_in());
    }
}

#[test]
fn at_risk_rows_follow_shared_rules() {
    let (mut controller, _) = mounted();
    controller.apply(TabCommand::Select(Tab::AtRisk));
    let DashboardView::AtRisk(view) = controller.current_view() else {
        panic!("expected at-risk view");
    };
    assert_eq!(view.queue_badge, "LIVE · 1,842 total");
    let tiers = view.rows.iter().map(|row| row.tier).collect::<Vec<_>>();
    assert_eq!(
        tiers,
        [
            RiskTier::Critical,
            RiskTier::Critical,
            RiskTier::High,
            RiskTier::High,
            RiskTier::Medium
        ]
    );
    assert_eq!(view.rows[0].days_label, "14d");
    assert_eq!(view.rows[2].score_tone, Tone::Warning);
}

#[test]
fn overview_shapes_segments_trend_and_scatter() {
    let (controller, _) = mounted();
    let DashboardView::Overview(view) = controller.current_view() else {
        panic!("expected overview");
    };
    let tones = view.segments.iter().map(|bar| bar.tone).collect::<Vec<_>>();
    assert_eq!(
        tones,
        [Tone::Success, Tone::Success, Tone::Warning, Tone::Danger]
    );
    assert_eq!(view.trend.actual.points().len(), 7);
    assert_eq!(view.scatter.len(), 80);
    assert!(view
        .scatter
        .iter()
        .all(|bubble| bubble.radius >= 10.0 / 3.0 - 1e-9));
}

#[test]
fn cohort_curves_shorten_for_young_cohorts() {
    let (mut controller, _) = mounted();
    controller.select_tab(Tab::Cohorts);
    let DashboardView::Cohorts(view) = controller.current_view() else {
        panic!("expected cohorts view");
    };
    let lengths = view
        .curves
        .iter()
        .map(|curve| curve.points.len())
        .collect::<Vec<_>>();
    assert_eq!(lengths, [6, 6, 6, 5, 4, 3]);
    assert!(view
        .curves
        .iter()
        .flat_map(|curve| &curve.points)
        .all(|point| point.value > 0.0));

    let june = view.rows.last().unwrap();
    assert_eq!(june.month, "Jun");
    assert_eq!(june.cells.iter().filter(|cell| cell.is_none()).count(), 3);
    let first = june.cells[0].as_ref().unwrap();
    assert_eq!((first.tone, first.alpha, first.emphasized), (Tone::Success, 60, true));
    assert_eq!(first.background, "#22c55e3c");

    let offset_five = view.tooltip(5).unwrap();
    assert_eq!(offset_five.label, "M+5");
    assert_eq!(offset_five.lines.len(), 3);
    assert_eq!(offset_five.lines[0].text, "Jan: 65.0");
}

#[test]
fn model_view_formats_matrix_and_features() {
    let (mut controller, _) = mounted();
    controller.select_tab(Tab::Model);
    let DashboardView::Model(view) = controller.current_view() else {
        panic!("expected model view");
    };
    assert_eq!(view.confusion[0][0].count, "3,842");
    assert_eq!(view.confusion[0][0].label, "True Positive");
    assert_eq!(view.confusion[1][1].count, "1,204");
    assert_eq!(view.confusion[1][0].tone, Tone::Warning);
    let percents = view
        .features
        .iter()
        .map(|feature| feature.percent.as_str())
        .collect::<Vec<_>>();
    assert_eq!(percents, ["31%", "24%", "19%", "13%", "8%", "5%"]);
}
