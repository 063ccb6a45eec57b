use thiserror::Error;

/// Every failure the learner, the classifier and the ARFF reader can report.
///
/// None of these are recoverable at the point of detection; the caller is
/// expected to abort the run and report the message.
#[derive(Debug, Error)]
pub enum BayesError {
    #[error("unknown learner variant '{0}' (expected n, nl, t, tl or a long name)")]
    UnknownVariant(String),

    #[error("value '{value}' not found for attribute '{attribute}'")]
    UnknownValue { attribute: String, value: String },

    #[error("attribute '{0}' not found")]
    UnknownAttribute(String),

    #[error("zero denominator while estimating {quantity}")]
    ZeroDenominator { quantity: String },

    #[error("schema mismatch: {0}")]
    SchemaMismatch(String),

    #[error("prediction already recorded for this example")]
    PredictionAlreadySet,

    #[error("parse error on line {line}: {message}")]
    Parse { line: usize, message: String },

    #[error(transparent)]
    Io(#[from] std::io::Error),

    #[error(transparent)]
    Json(#[from] serde_json::Error),
}

impl BayesError {
    pub fn zero_denominator<S: Into<String>>(quantity: S) -> Self {
        BayesError::ZeroDenominator {
            quantity: quantity.into(),
        }
    }

    pub fn parse<S: Into<String>>(line: usize, message: S) -> Self {
        BayesError::Parse {
            line,
            message: message.into(),
        }
    }
}

pub type Result<T> = std::result::Result<T, BayesError>;
