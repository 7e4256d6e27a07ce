//! Static churn metrics embedded in the binary.

use rand::Rng;

use super::rules::Tone;

/// Churn and retention for one customer segment.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SegmentRecord {
    pub segment: &'static str,
    pub churn_rate: f64,
    pub retained: f64,
    pub customers: u32,
}

/// Number of monthly offsets tracked per cohort (M+0 through M+5).
pub const COHORT_OFFSETS: usize = 6;

/// Retention of one acquisition cohort by month offset.
///
/// Trailing `None` entries are months the cohort has not reached yet.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct CohortRecord {
    pub month: &'static str,
    pub retention: [Option<f64>; COHORT_OFFSETS],
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct TrendPoint {
    pub month: &'static str,
    /// `None` for months that are only forecast.
    pub actual: Option<f64>,
    pub predicted: f64,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct AtRiskCustomer {
    pub id: &'static str,
    pub name: &'static str,
    /// Churn score in `0..=100`.
    pub score: u8,
    pub days_inactive: u32,
    pub revenue: &'static str,
    pub action: &'static str,
}

/// Model weight of one input signal. Display-only, never renormalized.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct FeatureWeight {
    pub feature: &'static str,
    pub importance: f64,
}

/// One bubble of the engagement/tenure map.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ScatterPoint {
    /// `0..100`
    pub engagement: f64,
    /// Months, `0..36`
    pub tenure: f64,
    /// `0..1`
    pub churn_prob: f64,
    /// `100..500`
    pub size: f64,
}

/// A headline number shown as a stat card.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Kpi {
    pub label: &'static str,
    pub value: &'static str,
    pub sub: Option<&'static str>,
    pub tone: Tone,
}

/// Validation-set outcomes of the churn classifier.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ConfusionMatrix {
    pub true_positive: u64,
    pub false_positive: u64,
    pub false_negative: u64,
    pub true_negative: u64,
}

pub const SEGMENTS: &[SegmentRecord] = &[
    SegmentRecord {
        segment: "Enterprise",
        churn_rate: 4.2,
        retained: 95.8,
        customers: 1240,
    },
    SegmentRecord {
        segment: "Mid-Market",
        churn_rate: 11.7,
        retained: 88.3,
        customers: 3420,
    },
    SegmentRecord {
        segment: "SMB",
        churn_rate: 23.4,
        retained: 76.6,
        customers: 8910,
    },
    SegmentRecord {
        segment: "Freemium",
        churn_rate: 38.1,
        retained: 61.9,
        customers: 14200,
    },
];

pub const COHORTS: &[CohortRecord] = &[
    CohortRecord {
        month: "Jan",
        retention: [
            Some(100.0),
            Some(88.0),
            Some(79.0),
            Some(72.0),
            Some(68.0),
            Some(65.0),
        ],
    },
    CohortRecord {
        month: "Feb",
        retention: [
            Some(100.0),
            Some(91.0),
            Some(83.0),
            Some(76.0),
            Some(72.0),
            Some(69.0),
        ],
    },
    CohortRecord {
        month: "Mar",
        retention: [
            Some(100.0),
            Some(89.0),
            Some(81.0),
            Some(77.0),
            Some(74.0),
            Some(71.0),
        ],
    },
    CohortRecord {
        month: "Apr",
        retention: [
            Some(100.0),
            Some(93.0),
            Some(86.0),
            Some(80.0),
            Some(77.0),
            None,
        ],
    },
    CohortRecord {
        month: "May",
        retention: [Some(100.0), Some(90.0), Some(84.0), Some(79.0), None, None],
    },
    CohortRecord {
        month: "Jun",
        retention: [Some(100.0), Some(92.0), Some(87.0), None, None, None],
    },
];

pub const RETENTION_TREND: &[TrendPoint] = &[
    TrendPoint {
        month: "Jul",
        actual: Some(74.2),
        predicted: 74.2,
    },
    TrendPoint {
        month: "Aug",
        actual: Some(75.8),
        predicted: 75.5,
    },
    TrendPoint {
        month: "Sep",
        actual: Some(74.1),
        predicted: 76.1,
    },
    TrendPoint {
        month: "Oct",
        actual: Some(77.3),
        predicted: 77.0,
    },
    TrendPoint {
        month: "Nov",
        actual: Some(79.4),
        predicted: 78.8,
    },
    TrendPoint {
        month: "Dec",
        actual: Some(81.6),
        predicted: 80.9,
    },
    TrendPoint {
        month: "Jan",
        actual: Some(82.9),
        predicted: 82.4,
    },
    TrendPoint {
        month: "Feb",
        actual: None,
        predicted: 83.8,
    },
    TrendPoint {
        month: "Mar",
        actual: None,
        predicted: 85.1,
    },
];

pub const AT_RISK_CUSTOMERS: &[AtRiskCustomer] = &[
    AtRiskCustomer {
        id: "C-4821",
        name: "TechFlow Inc",
        score: 91,
        days_inactive: 14,
        revenue: "$8,400",
        action: "Immediate Call",
    },
    AtRiskCustomer {
        id: "C-3904",
        name: "Nexus Digital",
        score: 87,
        days_inactive: 21,
        revenue: "$5,200",
        action: "Discount Offer",
    },
    AtRiskCustomer {
        id: "C-5512",
        name: "Bluewave Co",
        score: 82,
        days_inactive: 8,
        revenue: "$12,100",
        action: "Success Check-in",
    },
    AtRiskCustomer {
        id: "C-2287",
        name: "Orbit Labs",
        score: 79,
        days_inactive: 30,
        revenue: "$3,800",
        action: "Re-engagement",
    },
    AtRiskCustomer {
        id: "C-6643",
        name: "Surge Media",
        score: 74,
        days_inactive: 45,
        revenue: "$6,900",
        action: "Feature Demo",
    },
];

pub const FEATURE_IMPORTANCE: &[FeatureWeight] = &[
    FeatureWeight {
        feature: "Days Since Login",
        importance: 0.31,
    },
    FeatureWeight {
        feature: "Support Tickets",
        importance: 0.24,
    },
    FeatureWeight {
        feature: "Feature Adoption",
        importance: 0.19,
    },
    FeatureWeight {
        feature: "Contract Age",
        importance: 0.13,
    },
    FeatureWeight {
        feature: "NPS Score",
        importance: 0.08,
    },
    FeatureWeight {
        feature: "Payment Delays",
        importance: 0.05,
    },
];

pub const CONFUSION_MATRIX: ConfusionMatrix = ConfusionMatrix {
    true_positive: 3842,
    false_positive: 412,
    false_negative: 289,
    true_negative: 1204,
};

pub const OVERVIEW_KPIS: &[Kpi] = &[
    Kpi {
        label: "Total Customers",
        value: "27,770",
        sub: Some("↑ 4.2% MoM"),
        tone: Tone::Accent,
    },
    Kpi {
        label: "Churn Rate",
        value: "18.3%",
        sub: Some("↓ 3.1% vs last quarter"),
        tone: Tone::Warning,
    },
    Kpi {
        label: "At-Risk Accounts",
        value: "1,842",
        sub: Some("→ 412 critical"),
        tone: Tone::Danger,
    },
    Kpi {
        label: "Retention Rate",
        value: "81.7%",
        sub: Some("↑ 12% since intervention"),
        tone: Tone::Success,
    },
];

pub const AT_RISK_KPIS: &[Kpi] = &[
    Kpi {
        label: "Critical Risk",
        value: "412",
        sub: Some("Score ≥ 85 · Action required"),
        tone: Tone::Danger,
    },
    Kpi {
        label: "High Risk",
        value: "930",
        sub: Some("Score 70–84 · Monitor closely"),
        tone: Tone::Warning,
    },
    Kpi {
        label: "Revenue at Risk",
        value: "$2.1M",
        sub: Some("If no intervention"),
        tone: Tone::Danger,
    },
];

pub const MODEL_KPIS: &[Kpi] = &[
    Kpi {
        label: "Model Accuracy",
        value: "85%",
        sub: Some("Logistic Regression"),
        tone: Tone::Success,
    },
    Kpi {
        label: "Precision",
        value: "82%",
        sub: Some("True positive rate"),
        tone: Tone::Accent,
    },
    Kpi {
        label: "Recall",
        value: "79%",
        sub: Some("Sensitivity"),
        tone: Tone::Accent,
    },
    Kpi {
        label: "F1 Score",
        value: "0.804",
        sub: Some("Harmonic mean"),
        tone: Tone::Success,
    },
];

/// Total size of the at-risk queue, of which the table shows the top rows.
pub const AT_RISK_TOTAL: u64 = 1842;
pub const MODEL_STATUS: &str = "Model Active · 85% Accuracy";
pub const RETENTION_IMPROVEMENT: &str = "+12%";
pub const MODEL_VERDICT: &str = "MODEL VERDICT · Logistic Regression outperformed Random Forest (81%) and SVM (79%) on validation set";

/// Everything the views read, built once at startup.
#[derive(Clone, Debug)]
pub struct Dataset {
    pub segments: &'static [SegmentRecord],
    pub cohorts: &'static [CohortRecord],
    pub retention_trend: &'static [TrendPoint],
    pub at_risk: &'static [AtRiskCustomer],
    pub features: &'static [FeatureWeight],
    pub confusion: ConfusionMatrix,
    pub scatter: Vec<ScatterPoint>,
}

impl Dataset {
    /// Embedded tables plus a freshly sampled scatter of `scatter_points` bubbles.
    pub fn load<R: Rng + ?Sized>(rng: &mut R, scatter_points: usize) -> Self {
        Self {
            segments: SEGMENTS,
            cohorts: COHORTS,
            retention_trend: RETENTION_TREND,
            at_risk: AT_RISK_CUSTOMERS,
            features: FEATURE_IMPORTANCE,
            confusion: CONFUSION_MATRIX,
            scatter: generate_scatter(rng, scatter_points),
        }
    }
}

/// Uniformly sample the engagement/tenure map.
pub fn generate_scatter<R: Rng + ?Sized>(rng: &mut R, count: usize) -> Vec<ScatterPoint> {
    (0..count)
        .map(|_| ScatterPoint {
            engagement: rng.random::<f64>() * 100.0,
            tenure: rng.random::<f64>() * 36.0,
            churn_prob: rng.random::<f64>(),
            size: rng.random::<f64>() * 400.0 + 100.0,
        })
        .collect()
}
