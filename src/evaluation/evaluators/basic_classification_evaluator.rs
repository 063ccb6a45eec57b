use crate::core::instances::Example;
use crate::evaluation::{Estimator, Measurement, PerformanceEvaluator};
use crate::utils::math::argmax;

/// Batch classifier evaluator over a test set.
///
/// Tracks accuracy, the marginals of actual and predicted classes for
/// Cohen's kappa, and per-class precision and recall. Per-class metrics are
/// named after the class values (`precision[yes]`, `recall[no]`).
pub struct BasicClassificationEvaluator<E: Estimator + Default> {
    class_names: Vec<String>,
    correct: E,
    actual: Vec<E>,
    predicted: Vec<E>,
    precision: Vec<E>,
    recall: Vec<E>,
    seen: usize,
}

impl<E: Estimator + Default> BasicClassificationEvaluator<E> {
    pub fn new(class_names: Vec<String>) -> Self {
        let k = class_names.len();
        let make_vec = || (0..k).map(|_| E::default()).collect::<Vec<_>>();
        Self {
            class_names,
            correct: E::default(),
            actual: make_vec(),
            predicted: make_vec(),
            precision: make_vec(),
            recall: make_vec(),
            seen: 0,
        }
    }

    pub fn number_of_classes(&self) -> usize {
        self.class_names.len()
    }

    /// Examples that contributed to the metrics.
    pub fn seen(&self) -> usize {
        self.seen
    }

    fn kappa(&self) -> f64 {
        let p_o = self.correct.estimation();
        let p_e: f64 = self
            .actual
            .iter()
            .zip(&self.predicted)
            .map(|(a, p)| (a.estimation(), p.estimation()))
            .filter(|(a, p)| a.is_finite() && p.is_finite())
            .map(|(a, p)| a * p)
            .sum();
        let denom = 1.0 - p_e;
        if denom.abs() > f64::EPSILON {
            (p_o - p_e) / denom
        } else {
            f64::NAN
        }
    }
}

impl<E: Estimator + Default> PerformanceEvaluator for BasicClassificationEvaluator<E> {
    fn reset(&mut self) {
        *self = Self::new(std::mem::take(&mut self.class_names));
    }

    fn add_result(&mut self, example: &Example, class_scores: &[f64]) {
        let y = example.class_value();
        let k = self.number_of_classes();
        if y >= k || class_scores.len() != k {
            return;
        }
        let Some(yhat) = argmax(class_scores) else {
            return;
        };
        let hit = if yhat == y { 1.0 } else { 0.0 };

        self.seen += 1;
        self.correct.add(hit);
        for (c, est) in self.actual.iter_mut().enumerate() {
            est.add(if c == y { 1.0 } else { 0.0 });
        }
        for (c, est) in self.predicted.iter_mut().enumerate() {
            est.add(if c == yhat { 1.0 } else { 0.0 });
        }
        self.precision[yhat].add(hit);
        self.recall[y].add(hit);
    }

    fn performance(&self) -> Vec<Measurement> {
        let mut m = vec![Measurement::new("accuracy", self.correct.estimation())];
        if self.seen == 0 {
            m.push(Measurement::new("kappa", 0.0));
            return m;
        }
        m.push(Measurement::new("kappa", self.kappa()));
        for (c, name) in self.class_names.iter().enumerate() {
            m.push(Measurement::new(
                format!("precision[{name}]"),
                self.precision[c].estimation(),
            ));
            m.push(Measurement::new(
                format!("recall[{name}]"),
                self.recall[c].estimation(),
            ));
        }
        m
    }
}
