use crate::core::error::{BayesError, Result};
use serde::Serialize;

/// Outcome of classifying one example.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Prediction {
    pub class_index: usize,
    /// Winning score divided by the sum of all class scores.
    pub posterior: f64,
}

/// One row: a value index per non-class attribute (catalog order) and the
/// class value index. Test rows also carry a write-once [`Prediction`].
#[derive(Debug, Clone, PartialEq)]
pub struct Example {
    values: Vec<usize>,
    class_value: usize,
    prediction: Option<Prediction>,
}

impl Example {
    pub fn new(values: Vec<usize>, class_value: usize) -> Example {
        Example {
            values,
            class_value,
            prediction: None,
        }
    }

    pub fn values(&self) -> &[usize] {
        &self.values
    }

    pub fn value_at_index(&self, index: usize) -> Option<usize> {
        self.values.get(index).copied()
    }

    pub fn number_of_values(&self) -> usize {
        self.values.len()
    }

    pub fn class_value(&self) -> usize {
        self.class_value
    }

    pub fn prediction(&self) -> Option<Prediction> {
        self.prediction
    }

    pub fn record_prediction(&mut self, prediction: Prediction) -> Result<()> {
        if self.prediction.is_some() {
            return Err(BayesError::PredictionAlreadySet);
        }
        self.prediction = Some(prediction);
        Ok(())
    }

    pub fn is_correctly_predicted(&self) -> Option<bool> {
        self.prediction.map(|p| p.class_index == self.class_value)
    }
}
