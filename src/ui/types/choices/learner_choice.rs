use crate::classifiers::bayes::{LearnerConfig, Smoothing, StructureChoice};
use crate::core::error::Result;
use schemars::{JsonSchema, Schema, schema_for};
use serde::{Deserialize, Serialize};
use std::path::Path;
use strum_macros::{Display, EnumDiscriminants, EnumIter, EnumMessage, EnumString, IntoStaticStr};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct LearnerParams {
    #[serde(default)]
    pub smoothing: Smoothing,
}

/// A learner as written in a JSON config file:
/// `{"type": "tan", "params": {"smoothing": "laplace"}}`.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, JsonSchema, EnumDiscriminants,
)]
#[serde(tag = "type", content = "params", rename_all = "kebab-case")]
#[strum_discriminants(name(LearnerKind))]
#[strum_discriminants(derive(EnumIter, EnumString, Display, IntoStaticStr, EnumMessage))]
#[strum_discriminants(strum(serialize_all = "kebab-case"))]
pub enum LearnerChoice {
    #[strum_discriminants(strum(
        message = "Naive Bayes Classifier",
        detailed_message = "Every attribute depends on the class only."
    ))]
    NaiveBayes(LearnerParams),
    #[strum_discriminants(strum(
        message = "Tree-Augmented Naive Bayes",
        detailed_message = "Each attribute also depends on its parent in a maximum spanning tree."
    ))]
    Tan(LearnerParams),
}

impl LearnerChoice {
    pub fn kind(&self) -> LearnerKind {
        LearnerKind::from(self)
    }

    pub fn params(&self) -> LearnerParams {
        match self {
            LearnerChoice::NaiveBayes(p) | LearnerChoice::Tan(p) => *p,
        }
    }

    /// JSON Schema of the config file format.
    pub fn schema() -> Schema {
        schema_for!(LearnerChoice)
    }

    pub fn from_json_str(text: &str) -> Result<Self> {
        Ok(serde_json::from_str(text)?)
    }

    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        Self::from_json_str(&std::fs::read_to_string(path)?)
    }
}

impl From<LearnerChoice> for LearnerConfig {
    fn from(choice: LearnerChoice) -> Self {
        let structure = match choice.kind() {
            LearnerKind::NaiveBayes => StructureChoice::Naive,
            LearnerKind::Tan => StructureChoice::Tan,
        };
        LearnerConfig::new(structure, choice.params().smoothing)
    }
}

impl From<LearnerConfig> for LearnerChoice {
    fn from(config: LearnerConfig) -> Self {
        let params = LearnerParams {
            smoothing: config.smoothing,
        };
        match config.structure {
            StructureChoice::Naive => LearnerChoice::NaiveBayes(params),
            StructureChoice::Tan => LearnerChoice::Tan(params),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::error::BayesError;
    use std::io::Write;
    use std::str::FromStr;
    use strum::{EnumMessage, IntoEnumIterator};
    use tempfile::NamedTempFile;

    #[test]
    fn tagged_json_resolves_to_config() {
        let choice =
            LearnerChoice::from_json_str(r#"{"type":"tan","params":{"smoothing":"laplace"}}"#)
                .unwrap();
        assert_eq!(choice.kind(), LearnerKind::Tan);
        assert_eq!(LearnerConfig::from(choice).code(), "tl");

        let choice = LearnerChoice::from_json_str(r#"{"type":"naive-bayes","params":{}}"#).unwrap();
        assert_eq!(LearnerConfig::from(choice).code(), "n");
    }

    #[test]
    fn unknown_type_is_a_json_error() {
        assert!(matches!(
            LearnerChoice::from_json_str(r#"{"type":"svm","params":{}}"#),
            Err(BayesError::Json(_))
        ));
    }

    #[test]
    fn config_round_trips_through_choice() {
        for code in ["n", "nl", "t", "tl"] {
            let config: LearnerConfig = code.parse().unwrap();
            assert_eq!(LearnerConfig::from(LearnerChoice::from(config)), config);
        }
    }

    #[test]
    fn kinds_are_kebab_case_and_described() {
        let names: Vec<String> = LearnerKind::iter().map(|k| k.to_string()).collect();
        assert_eq!(names, vec!["naive-bayes", "tan"]);
        assert_eq!(LearnerKind::from_str("tan").unwrap(), LearnerKind::Tan);
        assert!(LearnerKind::Tan.get_message().is_some());
    }

    #[test]
    fn schema_lists_both_learners() {
        let schema = serde_json::to_string(&LearnerChoice::schema()).unwrap();
        assert!(schema.contains("naive-bayes"));
        assert!(schema.contains("tan"));
        assert!(schema.contains("laplace"));
    }

    #[test]
    fn reads_from_file() {
        let mut f = NamedTempFile::new().unwrap();
        f.write_all(br#"{"type":"naive-bayes","params":{"smoothing":"laplace"}}"#)
            .unwrap();
        let choice = LearnerChoice::from_file(f.path()).unwrap();
        assert_eq!(LearnerConfig::from(choice).code(), "nl");
    }
}
