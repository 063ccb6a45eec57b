use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use strum_macros::{Display, EnumIter, EnumString, IntoStaticStr};

/// How counts become probabilities. Chosen once per learning run and applied
/// to every estimate: class and attribute marginals, attribute-given-class
/// conditionals, the pairwise joints behind mutual information and the
/// two-parent CPT cells.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Default,
    Serialize,
    Deserialize,
    JsonSchema,
    Display,
    EnumIter,
    EnumString,
    IntoStaticStr,
)]
#[serde(rename_all = "kebab-case")]
#[strum(serialize_all = "kebab-case", ascii_case_insensitive)]
pub enum Smoothing {
    /// Maximum likelihood: `count / total`.
    #[default]
    None,
    /// Add-one: `(count + 1) / (total + cardinality)`, where cardinality is
    /// the number of outcomes of the quantity being estimated.
    Laplace,
}

impl Smoothing {
    /// Returns `None` when the denominator is zero.
    #[inline]
    pub fn estimate(self, count: usize, total: usize, cardinality: usize) -> Option<f64> {
        let (numerator, denominator) = match self {
            Smoothing::None => (count, total),
            Smoothing::Laplace => (count + 1, total + cardinality),
        };
        if denominator == 0 {
            return None;
        }
        Some(numerator as f64 / denominator as f64)
    }
}
