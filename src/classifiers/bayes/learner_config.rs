use crate::classifiers::bayes::{Smoothing, StructureChoice};
use crate::core::error::BayesError;
use serde::{Deserialize, Serialize};
use std::fmt::{Display, Formatter};
use std::str::FromStr;

/// Structure and smoothing for one learning run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct LearnerConfig {
    pub structure: StructureChoice,
    #[serde(default)]
    pub smoothing: Smoothing,
}

impl LearnerConfig {
    pub fn new(structure: StructureChoice, smoothing: Smoothing) -> Self {
        Self {
            structure,
            smoothing,
        }
    }

    /// The short code accepted by [`FromStr`]: `n`, `nl`, `t` or `tl`.
    pub fn code(&self) -> &'static str {
        match (self.structure, self.smoothing) {
            (StructureChoice::Naive, Smoothing::None) => "n",
            (StructureChoice::Naive, Smoothing::Laplace) => "nl",
            (StructureChoice::Tan, Smoothing::None) => "t",
            (StructureChoice::Tan, Smoothing::Laplace) => "tl",
        }
    }
}

impl Display for LearnerConfig {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self.smoothing {
            Smoothing::None => write!(f, "{}", self.structure),
            Smoothing::Laplace => write!(f, "{}-laplace", self.structure),
        }
    }
}

/// Accepts the short codes `n`, `nl`, `t`, `tl` and the long names `naive`,
/// `naive-laplace`, `tan`, `tan-laplace`, ignoring ASCII case.
impl FromStr for LearnerConfig {
    type Err = BayesError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let lower = s.trim().to_ascii_lowercase();
        let (structure, smoothing) = match lower.as_str() {
            "n" => (StructureChoice::Naive, Smoothing::None),
            "nl" => (StructureChoice::Naive, Smoothing::Laplace),
            "t" => (StructureChoice::Tan, Smoothing::None),
            "tl" => (StructureChoice::Tan, Smoothing::Laplace),
            other => {
                let (name, smoothing) = match other.strip_suffix("-laplace") {
                    Some(name) => (name, Smoothing::Laplace),
                    None => (other, Smoothing::None),
                };
                let structure = StructureChoice::from_str(name)
                    .map_err(|_| BayesError::UnknownVariant(s.to_string()))?;
                (structure, smoothing)
            }
        };
        Ok(LearnerConfig::new(structure, smoothing))
    }
}
