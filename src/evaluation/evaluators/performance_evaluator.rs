use crate::core::instances::Example;
use crate::evaluation::Measurement;
use std::collections::HashMap;

/// Accumulates classification outcomes and summarizes them as
/// [`Measurement`]s.
pub trait PerformanceEvaluator {
    fn reset(&mut self);

    /// Feeds one labelled example together with the classifier's class
    /// scores (one per class value). Scores need not be normalized.
    fn add_result(&mut self, example: &Example, class_scores: &[f64]);

    fn performance(&self) -> Vec<Measurement>;
}

pub trait PerformanceEvaluatorExt {
    /// `(name, value)` for each requested metric, in request order.
    fn metrics<'a, I>(&self, names: I) -> Vec<(String, Option<f64>)>
    where
        I: IntoIterator<Item = &'a str>;

    fn metric(&self, name: &str) -> Option<f64> {
        self.metrics([name]).into_iter().next().and_then(|(_, v)| v)
    }
}

impl<T: PerformanceEvaluator + ?Sized> PerformanceEvaluatorExt for T {
    fn metrics<'a, I>(&self, names: I) -> Vec<(String, Option<f64>)>
    where
        I: IntoIterator<Item = &'a str>,
    {
        let map: HashMap<_, _> = self
            .performance()
            .into_iter()
            .map(|m| (m.name, m.value))
            .collect();
        names
            .into_iter()
            .map(|n| (n.to_string(), map.get(n).copied()))
            .collect()
    }
}
