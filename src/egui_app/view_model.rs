//! Shapes dataset rows into the view structs each tab renders.
//!
//! Everything here is a pure function of the [`Dataset`]; colors come only
//! from [`crate::dashboard::rules`].

use crate::dashboard::dataset::{
    AT_RISK_KPIS, AT_RISK_TOTAL, COHORT_OFFSETS, CohortRecord, Kpi, MODEL_KPIS, MODEL_VERDICT,
    OVERVIEW_KPIS, ScatterPoint, TrendPoint,
};
use crate::dashboard::rules::{self, RiskTier, Tone};
use crate::dashboard::Dataset;
use crate::egui_app::state::Tab;

/// Column captions of the cohort grid and x categories of the retention curve.
pub const COHORT_OFFSET_LABELS: [&str; COHORT_OFFSETS] =
    ["M+0", "M+1", "M+2", "M+3", "M+4", "M+5"];

#[derive(Clone, Debug, PartialEq)]
pub struct StatCardView {
    pub label: &'static str,
    pub value: &'static str,
    pub sub: Option<&'static str>,
    pub tone: Tone,
}

impl From<&Kpi> for StatCardView {
    fn from(kpi: &Kpi) -> Self {
        Self {
            label: kpi.label,
            value: kpi.value,
            sub: kpi.sub,
            tone: kpi.tone,
        }
    }
}

fn cards(kpis: &[Kpi]) -> Vec<StatCardView> {
    kpis.iter().map(StatCardView::from).collect()
}

/// A value shown in a tooltip line.
#[derive(Clone, Debug, PartialEq)]
pub enum TooltipValue {
    Number(f64),
    Text(String),
}

impl From<f64> for TooltipValue {
    fn from(value: f64) -> Self {
        TooltipValue::Number(value)
    }
}

impl From<&str> for TooltipValue {
    fn from(value: &str) -> Self {
        TooltipValue::Text(value.to_string())
    }
}

/// One series entry handed over by a chart when the pointer hovers it.
#[derive(Clone, Debug, PartialEq)]
pub struct TooltipEntry {
    pub name: String,
    pub value: TooltipValue,
    pub tone: Option<Tone>,
}

impl TooltipEntry {
    pub fn new(name: impl Into<String>, value: impl Into<TooltipValue>) -> Self {
        Self {
            name: name.into(),
            value: value.into(),
            tone: None,
        }
    }

    pub fn with_tone(mut self, tone: Tone) -> Self {
        self.tone = Some(tone);
        self
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct TooltipLine {
    pub text: String,
    pub tone: Option<Tone>,
}

/// Formatted tooltip: a heading plus one line per series.
#[derive(Clone, Debug, PartialEq)]
pub struct TooltipContent {
    pub label: String,
    pub lines: Vec<TooltipLine>,
}

impl TooltipContent {
    /// `None` while the chart reports no hover or nothing under the pointer.
    pub fn build(active: bool, payload: &[TooltipEntry], label: &str) -> Option<Self> {
        if !active || payload.is_empty() {
            return None;
        }
        let lines = payload
            .iter()
            .map(|entry| TooltipLine {
                text: format_tooltip_line(entry),
                tone: entry.tone,
            })
            .collect();
        Some(Self {
            label: label.to_string(),
            lines,
        })
    }
}

/// `"{name}: {value}{suffix}"`, numbers to one decimal, text unchanged.
pub fn format_tooltip_line(entry: &TooltipEntry) -> String {
    let value = match &entry.value {
        TooltipValue::Number(number) => rules::to_fixed(*number, 1),
        TooltipValue::Text(text) => text.clone(),
    };
    format!(
        "{}: {}{}",
        entry.name,
        value,
        rules::tooltip_unit_suffix(&entry.name)
    )
}

/// A named line over category indices; `None` breaks the line.
#[derive(Clone, Debug, PartialEq)]
pub struct CategorySeries {
    pub name: String,
    pub tone: Tone,
    pub values: Vec<Option<f64>>,
}

impl CategorySeries {
    /// `[x, y]` pairs for the known values, x being the category index.
    pub fn points(&self) -> Vec<[f64; 2]> {
        self.values
            .iter()
            .enumerate()
            .filter_map(|(idx, value)| value.map(|v| [idx as f64, v]))
            .collect()
    }

    pub fn value_at(&self, index: usize) -> Option<f64> {
        self.values.get(index).copied().flatten()
    }
}

/// Actual vs predicted retention by month.
#[derive(Clone, Debug, PartialEq)]
pub struct TrendChart {
    pub months: Vec<&'static str>,
    pub actual: CategorySeries,
    pub predicted: CategorySeries,
}

impl TrendChart {
    pub const ACTUAL_NAME: &'static str = "Actual Rate";
    pub const PREDICTED_NAME: &'static str = "Predicted";

    pub fn from_points(points: &[TrendPoint]) -> Self {
        Self {
            months: points.iter().map(|p| p.month).collect(),
            actual: CategorySeries {
                name: Self::ACTUAL_NAME.to_string(),
                tone: Tone::Success,
                values: points.iter().map(|p| p.actual).collect(),
            },
            predicted: CategorySeries {
                name: Self::PREDICTED_NAME.to_string(),
                tone: Tone::Accent,
                values: points.iter().map(|p| Some(p.predicted)).collect(),
            },
        }
    }

    /// Tooltip for the month at `index`, one line per series with a value.
    pub fn tooltip(&self, index: usize) -> Option<TooltipContent> {
        let label = self.months.get(index)?;
        let payload = [&self.actual, &self.predicted]
            .into_iter()
            .filter_map(|series| {
                series
                    .value_at(index)
                    .map(|value| TooltipEntry::new(series.name.clone(), value))
            })
            .collect::<Vec<_>>();
        TooltipContent::build(true, &payload, label)
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct SegmentBar {
    pub segment: &'static str,
    pub churn_rate: f64,
    pub tone: Tone,
}

impl SegmentBar {
    pub const SERIES_NAME: &'static str = "Churn Rate";

    pub fn tooltip(&self) -> Option<TooltipContent> {
        let entry = TooltipEntry::new(Self::SERIES_NAME, self.churn_rate).with_tone(self.tone);
        TooltipContent::build(true, &[entry], self.segment)
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct ScatterBubble {
    pub engagement: f64,
    pub tenure: f64,
    pub churn_prob: f64,
    pub radius: f64,
    pub tone: Tone,
}

impl From<&ScatterPoint> for ScatterBubble {
    fn from(point: &ScatterPoint) -> Self {
        Self {
            engagement: point.engagement,
            tenure: point.tenure,
            churn_prob: point.churn_prob,
            radius: rules::bubble_radius(point.size),
            tone: rules::scatter_tone(point.churn_prob),
        }
    }
}

impl ScatterBubble {
    /// Lines shown when hovering a bubble.
    pub fn tooltip_lines(&self) -> Vec<TooltipLine> {
        vec![
            TooltipLine {
                text: format!("Engagement: {}", rules::to_fixed(self.engagement, 1)),
                tone: None,
            },
            TooltipLine {
                text: format!("Tenure: {}mo", rules::to_fixed(self.tenure, 0)),
                tone: None,
            },
            TooltipLine {
                text: format!("Churn Prob: {}%", rules::to_fixed(self.churn_prob * 100.0, 0)),
                tone: Some(self.tone),
            },
        ]
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct OverviewView {
    pub cards: Vec<StatCardView>,
    pub trend: TrendChart,
    pub segments: Vec<SegmentBar>,
    pub scatter: Vec<ScatterBubble>,
}

#[derive(Clone, Debug, PartialEq)]
pub struct AtRiskRow {
    pub id: &'static str,
    pub name: &'static str,
    pub score: u8,
    pub score_tone: Tone,
    pub days_label: String,
    pub revenue: &'static str,
    pub tier: RiskTier,
    pub action: &'static str,
}

#[derive(Clone, Debug, PartialEq)]
pub struct AtRiskView {
    pub cards: Vec<StatCardView>,
    pub queue_badge: String,
    pub rows: Vec<AtRiskRow>,
}

#[derive(Clone, Debug, PartialEq)]
pub struct FeatureBar {
    pub feature: &'static str,
    pub importance: f64,
    pub percent: String,
}

#[derive(Clone, Debug, PartialEq)]
pub struct ConfusionCell {
    pub label: &'static str,
    pub count: String,
    pub tone: Tone,
}

#[derive(Clone, Debug, PartialEq)]
pub struct ModelView {
    pub cards: Vec<StatCardView>,
    pub features: Vec<FeatureBar>,
    /// Row-major 2x2: TP, FP / FN, TN.
    pub confusion: [[ConfusionCell; 2]; 2],
    pub verdict: &'static str,
}

#[derive(Clone, Debug, PartialEq)]
pub struct CohortCell {
    pub value: f64,
    pub tone: Tone,
    pub alpha: u8,
    /// `#rrggbbaa` cell background.
    pub background: String,
    pub emphasized: bool,
}

impl CohortCell {
    pub fn new(value: f64) -> Self {
        Self {
            value,
            tone: rules::cohort_cell_tone(value),
            alpha: rules::cohort_cell_alpha(value),
            background: rules::cohort_cell_hex(value),
            emphasized: rules::cohort_text_emphasis(value),
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct CohortRow {
    pub month: &'static str,
    /// One slot per offset; `None` renders as an empty cell.
    pub cells: Vec<Option<CohortCell>>,
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct CohortPoint {
    pub offset_label: &'static str,
    pub offset: usize,
    pub value: f64,
}

/// Retention curve of one cohort.
#[derive(Clone, Debug, PartialEq)]
pub struct CohortCurve {
    pub cohort: &'static str,
    pub points: Vec<CohortPoint>,
}

/// Reshape a wide cohort row into its curve, dropping offsets without data.
///
/// Young cohorts end early instead of falling to zero.
pub fn cohort_curve(record: &CohortRecord) -> CohortCurve {
    let points = record
        .retention
        .iter()
        .zip(COHORT_OFFSET_LABELS)
        .enumerate()
        .filter_map(|(offset, (value, offset_label))| {
            value.map(|value| CohortPoint {
                offset_label,
                offset,
                value,
            })
        })
        .collect();
    CohortCurve {
        cohort: record.month,
        points,
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct CohortsView {
    pub offsets: [&'static str; COHORT_OFFSETS],
    pub rows: Vec<CohortRow>,
    pub curves: Vec<CohortCurve>,
}

impl CohortsView {
    /// Tooltip for the offset at `index`, one line per cohort that reached it.
    pub fn tooltip(&self, index: usize) -> Option<TooltipContent> {
        let label = self.offsets.get(index)?;
        let payload = self
            .curves
            .iter()
            .filter_map(|curve| {
                curve
                    .points
                    .iter()
                    .find(|point| point.offset == index)
                    .map(|point| TooltipEntry::new(curve.cohort, point.value))
            })
            .collect::<Vec<_>>();
        TooltipContent::build(true, &payload, label)
    }
}

/// The composed content of one tab.
#[derive(Clone, Debug, PartialEq)]
pub enum DashboardView {
    Overview(OverviewView),
    AtRisk(AtRiskView),
    Model(ModelView),
    Cohorts(CohortsView),
}

impl DashboardView {
    pub fn compose(tab: Tab, data: &Dataset) -> Self {
        match tab {
            Tab::Overview => DashboardView::Overview(overview(data)),
            Tab::AtRisk => DashboardView::AtRisk(at_risk(data)),
            Tab::Model => DashboardView::Model(model(data)),
            Tab::Cohorts => DashboardView::Cohorts(cohorts(data)),
        }
    }

    pub fn tab(&self) -> Tab {
        match self {
            DashboardView::Overview(_) => Tab::Overview,
            DashboardView::AtRisk(_) => Tab::AtRisk,
            DashboardView::Model(_) => Tab::Model,
            DashboardView::Cohorts(_) => Tab::Cohorts,
        }
    }

    pub fn cards(&self) -> &[StatCardView] {
        match self {
            DashboardView::Overview(view) => &view.cards,
            DashboardView::AtRisk(view) => &view.cards,
            DashboardView::Model(view) => &view.cards,
            DashboardView::Cohorts(_) => &[],
        }
    }

    pub fn card_labels(&self) -> Vec<&'static str> {
        self.cards().iter().map(|card| card.label).collect()
    }
}

fn overview(data: &Dataset) -> OverviewView {
    OverviewView {
        cards: cards(OVERVIEW_KPIS),
        trend: TrendChart::from_points(data.retention_trend),
        segments: data
            .segments
            .iter()
            .map(|segment| SegmentBar {
                segment: segment.segment,
                churn_rate: segment.churn_rate,
                tone: rules::segment_tone(segment.churn_rate),
            })
            .collect(),
        scatter: data.scatter.iter().map(ScatterBubble::from).collect(),
    }
}

fn at_risk(data: &Dataset) -> AtRiskView {
    AtRiskView {
        cards: cards(AT_RISK_KPIS),
        queue_badge: format!("LIVE · {} total", rules::format_thousands(AT_RISK_TOTAL)),
        rows: data
            .at_risk
            .iter()
            .map(|customer| AtRiskRow {
                id: customer.id,
                name: customer.name,
                score: customer.score,
                score_tone: rules::score_bar_tone(customer.score),
                days_label: format!("{}d", customer.days_inactive),
                revenue: customer.revenue,
                tier: rules::risk_tier(customer.score),
                action: customer.action,
            })
            .collect(),
    }
}

fn model(data: &Dataset) -> ModelView {
    let matrix = data.confusion;
    let cell = |label, count, tone| ConfusionCell {
        label,
        count: rules::format_thousands(count),
        tone,
    };
    ModelView {
        cards: cards(MODEL_KPIS),
        features: data
            .features
            .iter()
            .map(|weight| FeatureBar {
                feature: weight.feature,
                importance: weight.importance,
                percent: rules::percent_label(weight.importance),
            })
            .collect(),
        confusion: [
            [
                cell("True Positive", matrix.true_positive, Tone::Success),
                cell("False Positive", matrix.false_positive, Tone::Danger),
            ],
            [
                cell("False Negative", matrix.false_negative, Tone::Warning),
                cell("True Negative", matrix.true_negative, Tone::Success),
            ],
        ],
        verdict: MODEL_VERDICT,
    }
}

fn cohorts(data: &Dataset) -> CohortsView {
    CohortsView {
        offsets: COHORT_OFFSET_LABELS,
        rows: data
            .cohorts
            .iter()
            .map(|record| CohortRow {
                month: record.month,
                cells: record
                    .retention
                    .iter()
                    .map(|value| value.map(CohortCell::new))
                    .collect(),
            })
            .collect(),
        curves: data.cohorts.iter().map(cohort_curve).collect(),
    }
}
