//! Display derivation rules shared by every tab.
//!
//! Each function maps a data value to a display attribute. Views and charts
//! must go through these instead of comparing thresholds themselves so that
//! the same score or rate always gets the same color everywhere.

/// Semantic color class of a value.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Tone {
    Danger,
    Warning,
    Success,
    Accent,
}

impl Tone {
    /// `#rrggbb` form of the tone.
    pub const fn hex(self) -> &'static str {
        match self {
            Tone::Danger => "#ef4444",
            Tone::Warning => "#f97316",
            Tone::Success => "#22c55e",
            Tone::Accent => "#06b6d4",
        }
    }

    pub const fn rgb(self) -> [u8; 3] {
        match self {
            Tone::Danger => [0xef, 0x44, 0x44],
            Tone::Warning => [0xf9, 0x73, 0x16],
            Tone::Success => [0x22, 0xc5, 0x5e],
            Tone::Accent => [0x06, 0xb6, 0xd4],
        }
    }
}

/// Risk bucket of an at-risk account.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum RiskTier {
    Critical,
    High,
    Medium,
}

impl RiskTier {
    pub const fn label(self) -> &'static str {
        match self {
            RiskTier::Critical => "CRITICAL",
            RiskTier::High => "HIGH",
            RiskTier::Medium => "MEDIUM",
        }
    }

    pub const fn tone(self) -> Tone {
        match self {
            RiskTier::Critical => Tone::Danger,
            RiskTier::High => Tone::Warning,
            RiskTier::Medium => Tone::Accent,
        }
    }
}

/// Bucket a churn score; both bounds are inclusive.
pub fn risk_tier(score: u8) -> RiskTier {
    if score >= 85 {
        RiskTier::Critical
    } else if score >= 75 {
        RiskTier::High
    } else {
        RiskTier::Medium
    }
}

/// Color of the churn-score gauge in the at-risk queue.
pub fn score_bar_tone(score: u8) -> Tone {
    if score >= 85 {
        Tone::Danger
    } else {
        Tone::Warning
    }
}

/// Bar color for a segment's churn rate; thresholds are strict.
pub fn segment_tone(churn_rate: f64) -> Tone {
    if churn_rate > 30.0 {
        Tone::Danger
    } else if churn_rate > 15.0 {
        Tone::Warning
    } else {
        Tone::Success
    }
}

pub fn cohort_cell_tone(value: f64) -> Tone {
    if value >= 85.0 {
        Tone::Success
    } else if value >= 75.0 {
        Tone::Accent
    } else if value >= 65.0 {
        Tone::Warning
    } else {
        Tone::Danger
    }
}

/// Background alpha of a cohort cell: `value / 100` scaled into `0..=60`.
pub fn cohort_cell_alpha(value: f64) -> u8 {
    ((value / 100.0).clamp(0.0, 1.0) * 60.0).round() as u8
}

/// Two-digit lowercase hex suffix appended to a `#rrggbb` color.
pub fn hex_alpha_suffix(alpha: u8) -> String {
    format!("{alpha:02x}")
}

/// `#rrggbbaa` background of a cohort cell.
pub fn cohort_cell_hex(value: f64) -> String {
    format!(
        "{}{}",
        cohort_cell_tone(value).hex(),
        hex_alpha_suffix(cohort_cell_alpha(value))
    )
}

/// Cohort cells at or above 75% use primary text; the rest are dimmed.
pub fn cohort_text_emphasis(value: f64) -> bool {
    value >= 75.0
}

pub fn scatter_tone(churn_prob: f64) -> Tone {
    if churn_prob > 0.6 {
        Tone::Danger
    } else if churn_prob > 0.3 {
        Tone::Warning
    } else {
        Tone::Success
    }
}

/// Bubble radius for a scatter point of the given size.
pub fn bubble_radius(size: f64) -> f64 {
    size.max(0.0).sqrt() / 3.0
}

/// `"%"` for rate or retention series, empty otherwise.
pub fn tooltip_unit_suffix(series_name: &str) -> &'static str {
    let lower = series_name.to_lowercase();
    if lower.contains("rate") || lower.contains("retention") {
        "%"
    } else {
        ""
    }
}

/// Fraction rendered as a whole-number percentage, e.g. `0.31` -> `"31%"`.
pub fn percent_label(fraction: f64) -> String {
    format!("{}%", to_fixed(fraction * 100.0, 0))
}

/// Fractional digits needed to print any finite `f64` exactly.
const EXACT_FRACTION_DIGITS: usize = 1074;

/// Fixed-point text with `digits` decimals where exact halves round away
/// from zero, e.g. `to_fixed(81.25, 1)` is `"81.3"`.
///
/// Works on the exact decimal expansion of `value`, so `1.005` (stored just
/// below the half) still gives `"1.00"`.
pub fn to_fixed(value: f64, digits: usize) -> String {
    if !value.is_finite() {
        return value.to_string();
    }
    let exact = format!("{:.*}", EXACT_FRACTION_DIGITS.max(digits), value.abs());
    let (whole, fraction) = exact.split_once('.').unwrap_or((exact.as_str(), ""));
    let mut kept: Vec<u8> = whole
        .bytes()
        .chain(fraction.bytes().chain(std::iter::repeat(b'0')).take(digits))
        .collect();
    if fraction.as_bytes().get(digits).is_some_and(|next| *next >= b'5') {
        round_up_decimal(&mut kept);
    }

    let split = kept.len() - digits;
    let mut out = String::with_capacity(kept.len() + 2);
    if value < 0.0 {
        out.push('-');
    }
    out.extend(kept[..split].iter().map(|digit| char::from(*digit)));
    if digits > 0 {
        out.push('.');
        out.extend(kept[split..].iter().map(|digit| char::from(*digit)));
    }
    out
}

/// Add one unit in the last place to a string of ASCII digits.
fn round_up_decimal(digits: &mut Vec<u8>) {
    for digit in digits.iter_mut().rev() {
        if *digit == b'9' {
            *digit = b'0';
        } else {
            *digit += 1;
            return;
        }
    }
    digits.insert(0, b'1');
}

/// Integer with en-US thousands separators.
pub fn format_thousands(value: u64) -> String {
    let digits = value.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (idx, ch) in digits.chars().enumerate() {
        if idx > 0 && (digits.len() - idx) % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn risk_tier_bounds_are_inclusive() {
        assert_eq!(risk_tier(85), RiskTier::Critical);
        assert_eq!(risk_tier(84), RiskTier::High);
        assert_eq!(risk_tier(75), RiskTier::High);
        assert_eq!(risk_tier(74), RiskTier::Medium);
        assert_eq!(risk_tier(0), RiskTier::Medium);
        assert_eq!(risk_tier(100), RiskTier::Critical);
    }

    #[test]
    fn every_score_maps_to_one_tier_with_matching_label_and_tone() {
        for score in 0..=100u8 {
            let tier = risk_tier(score);
            let expected = match score {
                85..=100 => ("CRITICAL", Tone::Danger),
                75..=84 => ("HIGH", Tone::Warning),
                _ => ("MEDIUM", Tone::Accent),
            };
            assert_eq!((tier.label(), tier.tone()), expected, "score {score}");
        }
    }

    #[test]
    fn segment_thresholds_are_strict() {
        assert_eq!(segment_tone(30.0), Tone::Warning);
        assert_eq!(segment_tone(30.1), Tone::Danger);
        assert_eq!(segment_tone(15.0), Tone::Success);
        assert_eq!(segment_tone(15.1), Tone::Warning);
    }

    #[test]
    fn cohort_cells_use_inclusive_lower_bounds() {
        assert_eq!(cohort_cell_tone(85.0), Tone::Success);
        assert_eq!(cohort_cell_tone(84.9), Tone::Accent);
        assert_eq!(cohort_cell_tone(75.0), Tone::Accent);
        assert_eq!(cohort_cell_tone(65.0), Tone::Warning);
        assert_eq!(cohort_cell_tone(64.9), Tone::Danger);
    }

    #[test]
    fn cohort_cell_alpha_scales_into_sixty() {
        assert_eq!(cohort_cell_alpha(100.0), 60);
        assert_eq!(cohort_cell_alpha(85.0), 51);
        assert_eq!(cohort_cell_alpha(65.0), 39);
        assert_eq!(cohort_cell_alpha(0.0), 0);
        assert_eq!(cohort_cell_hex(100.0), "#22c55e3c");
        assert_eq!(cohort_cell_hex(72.0), "#f973162b");
        assert_eq!(hex_alpha_suffix(5), "05");
    }

    #[test]
    fn scatter_tone_and_radius() {
        assert_eq!(scatter_tone(0.61), Tone::Danger);
        assert_eq!(scatter_tone(0.6), Tone::Warning);
        assert_eq!(scatter_tone(0.3), Tone::Success);
        assert!((bubble_radius(144.0) - 4.0).abs() < 1e-12);
        assert!((bubble_radius(225.0) - 5.0).abs() < 1e-12);
    }

    #[test]
    fn unit_suffix_matches_rate_or_retention_case_insensitively() {
        assert_eq!(tooltip_unit_suffix("Actual Rate"), "%");
        assert_eq!(tooltip_unit_suffix("RETENTION"), "%");
        assert_eq!(tooltip_unit_suffix("Churn Rate"), "%");
        assert_eq!(tooltip_unit_suffix("Predicted"), "");
        assert_eq!(tooltip_unit_suffix("Jan"), "");
    }

    #[test]
    fn score_gauge_switches_at_critical() {
        assert_eq!(score_bar_tone(85), Tone::Danger);
        assert_eq!(score_bar_tone(74), Tone::Warning);
    }

    #[test]
    fn number_formatting() {
        assert_eq!(format_thousands(0), "0");
        assert_eq!(format_thousands(412), "412");
        assert_eq!(format_thousands(3842), "3,842");
        assert_eq!(format_thousands(1_234_567), "1,234,567");
        assert_eq!(percent_label(0.31), "31%");
        assert_eq!(percent_label(0.05), "5%");
        assert_eq!(percent_label(0.125), "13%");
    }

    #[test]
    fn to_fixed_rounds_exact_halves_up() {
        assert_eq!(to_fixed(81.25, 1), "81.3");
        assert_eq!(to_fixed(12.5, 0), "13");
        assert_eq!(to_fixed(2.5, 0), "3");
        assert_eq!(to_fixed(0.125 * 100.0, 0), "13");
    }

    #[test]
    fn to_fixed_follows_the_stored_value_below_a_half() {
        assert_eq!(to_fixed(1.005, 2), "1.00");
        assert_eq!(to_fixed(42.26, 1), "42.3");
        assert_eq!(to_fixed(81.666, 1), "81.7");
    }

    #[test]
    fn to_fixed_carries_and_pads() {
        assert_eq!(to_fixed(99.96, 1), "100.0");
        assert_eq!(to_fixed(9.5, 0), "10");
        assert_eq!(to_fixed(7.0, 1), "7.0");
        assert_eq!(to_fixed(0.0, 2), "0.00");
        assert_eq!(to_fixed(-2.5, 0), "-3");
        assert_eq!(to_fixed(24.0, 0), "24");
    }
}
