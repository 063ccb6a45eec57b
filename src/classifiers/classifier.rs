use crate::core::error::{BayesError, Result};
use crate::core::instance_header::InstanceHeader;
use crate::core::instances::{Example, Prediction};
use crate::utils::math::argmax;

/// Picks the winning class from unnormalized scores. The scores are not a
/// calibrated joint distribution, so the posterior is a relative confidence
/// rather than a true Bayesian one.
pub fn prediction_from_scores(scores: &[f64]) -> Result<Prediction> {
    let class_index =
        argmax(scores).ok_or_else(|| BayesError::zero_denominator("class posterior"))?;
    let total: f64 = scores.iter().sum();
    if total <= 0.0 || !total.is_finite() {
        return Err(BayesError::zero_denominator("class posterior"));
    }
    Ok(Prediction {
        class_index,
        posterior: scores[class_index] / total,
    })
}

pub trait Classifier {
    fn header(&self) -> &InstanceHeader;

    /// One unnormalized score per class value, in class-value order.
    fn class_scores(&self, example: &Example) -> Result<Vec<f64>>;

    /// Arg-max class (first wins on ties) and its score divided by the sum
    /// of all scores.
    fn predict(&self, example: &Example) -> Result<Prediction> {
        prediction_from_scores(&self.class_scores(example)?)
    }

    /// Predicts and writes the result onto the example.
    fn classify_in_place(&self, example: &mut Example) -> Result<Prediction> {
        let prediction = self.predict(example)?;
        example.record_prediction(prediction)?;
        Ok(prediction)
    }
}
