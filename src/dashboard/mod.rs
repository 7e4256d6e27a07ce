//! Churn metrics and the rules that turn them into display attributes.

pub mod dataset;
pub mod rules;

pub use dataset::Dataset;
pub use rules::{RiskTier, Tone};
