use crate::classifiers::bayes::{ProbabilityEstimates, Smoothing};
use crate::core::instance_header::InstanceHeader;
use crate::core::value_index::ValueIndex;

/// Conditional probability table indexed `[value][parent value][class value]`.
///
/// The class attribute's table has both trailing dimensions of size one; an
/// attribute whose only parent is the class has a parent dimension of one.
/// A cell is `None` when its parent context never occurs in training and no
/// smoothing is applied; reading it at inference time is a zero denominator.
#[derive(Debug, Clone, PartialEq)]
pub struct ConditionalProbabilityTable {
    values: usize,
    parent_values: usize,
    class_values: usize,
    probabilities: Vec<Option<f64>>,
}

impl ConditionalProbabilityTable {
    fn zeros(values: usize, parent_values: usize, class_values: usize) -> Self {
        ConditionalProbabilityTable {
            values,
            parent_values,
            class_values,
            probabilities: vec![None; values * parent_values * class_values],
        }
    }

    #[inline]
    fn offset(&self, value: usize, parent_value: usize, class_value: usize) -> usize {
        (value * self.parent_values + parent_value) * self.class_values + class_value
    }

    fn set(&mut self, value: usize, parent_value: usize, class_value: usize, p: Option<f64>) {
        let i = self.offset(value, parent_value, class_value);
        self.probabilities[i] = p;
    }

    /// The class marginals.
    pub fn for_class(estimates: &ProbabilityEstimates) -> Self {
        let marginal = estimates.class_marginal();
        let mut cpt = Self::zeros(marginal.len(), 1, 1);
        for (v, &p) in marginal.iter().enumerate() {
            cpt.set(v, 0, 0, Some(p));
        }
        cpt
    }

    /// An attribute whose only parent is the class: `P(value | class)`.
    pub fn given_class(estimates: &ProbabilityEstimates, attribute: usize) -> Self {
        let est = estimates.attribute(attribute);
        let classes = estimates.class_marginal().len();
        let mut cpt = Self::zeros(est.number_of_values(), 1, classes);
        for v in 0..est.number_of_values() {
            for (c, &p) in est.given_class(v).iter().enumerate() {
                cpt.set(v, 0, c, Some(p));
            }
        }
        cpt
    }

    /// An attribute with a tree parent and the class, counted from scratch
    /// for every (value, parent value, class value) cell. Unseen parent
    /// contexts stay undefined without smoothing.
    pub fn given_tree_parent_and_class(
        header: &InstanceHeader,
        index: &ValueIndex<'_>,
        smoothing: Smoothing,
        attribute: usize,
        tree_parent: usize,
    ) -> Self {
        let values = header.attributes()[attribute].number_of_values();
        let parent_values = header.attributes()[tree_parent].number_of_values();
        let classes = header.number_of_classes();
        let mut cpt = Self::zeros(values, parent_values, classes);

        for c in 0..classes {
            for p in 0..parent_values {
                let given = index.joint_class_count(c, &[(tree_parent, p)]);
                for v in 0..values {
                    let matching = index.joint_class_count(c, &[(tree_parent, p), (attribute, v)]);
                    cpt.set(v, p, c, smoothing.estimate(matching, given, values));
                }
            }
        }
        cpt
    }

    /// `None` for a cell whose parent context was never observed.
    #[inline]
    pub fn probability(
        &self,
        value: usize,
        parent_value: usize,
        class_value: usize,
    ) -> Option<f64> {
        self.probabilities[self.offset(value, parent_value, class_value)]
    }

    /// Cells left undefined by an unseen parent context.
    pub fn undefined_cells(&self) -> usize {
        self.probabilities.iter().filter(|p| p.is_none()).count()
    }

    /// `(values, parent values, class values)`.
    pub fn dimensions(&self) -> (usize, usize, usize) {
        (self.values, self.parent_values, self.class_values)
    }

    pub fn as_slice(&self) -> &[Option<f64>] {
        &self.probabilities
    }

    /// Sum over the attribute's own values for one parent context, `None`
    /// when that context is undefined.
    pub fn column_sum(&self, parent_value: usize, class_value: usize) -> Option<f64> {
        (0..self.values)
            .map(|v| self.probability(v, parent_value, class_value))
            .sum()
    }
}
