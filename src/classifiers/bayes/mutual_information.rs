use crate::classifiers::bayes::ProbabilityEstimates;
use crate::core::error::{BayesError, Result};
use crate::core::instance_header::InstanceHeader;
use crate::core::value_index::ValueIndex;
use crate::utils::math::log2_or_zero;

/// Weight given to an attribute paired with itself, below any real CMI.
pub const SELF_PAIR_WEIGHT: f64 = -1.0;

/// Pairwise conditional mutual information `CMI(X; Y | class)` between every
/// two non-class attributes.
#[derive(Debug, Clone, PartialEq)]
pub struct MutualInformationMatrix {
    weights: Vec<Vec<f64>>,
}

impl MutualInformationMatrix {
    pub fn compute(
        header: &InstanceHeader,
        index: &ValueIndex<'_>,
        estimates: &ProbabilityEstimates,
    ) -> Result<MutualInformationMatrix> {
        let n = header.number_of_attributes();
        let mut weights = vec![vec![0.0; n]; n];
        for (i, row) in weights.iter_mut().enumerate() {
            for (j, cell) in row.iter_mut().enumerate() {
                *cell = conditional_mutual_information(header, index, estimates, i, j)?;
            }
        }
        Ok(MutualInformationMatrix { weights })
    }

    /// Wraps precomputed weights; rows must be square.
    pub fn from_weights(weights: Vec<Vec<f64>>) -> MutualInformationMatrix {
        debug_assert!(weights.iter().all(|r| r.len() == weights.len()));
        MutualInformationMatrix { weights }
    }

    pub fn len(&self) -> usize {
        self.weights.len()
    }

    pub fn is_empty(&self) -> bool {
        self.weights.is_empty()
    }

    pub fn get(&self, i: usize, j: usize) -> f64 {
        self.weights[i][j]
    }

    pub fn rows(&self) -> &[Vec<f64>] {
        &self.weights
    }

    /// Largest `|w[i][j] - w[j][i]|` over all pairs.
    pub fn asymmetry(&self) -> f64 {
        let n = self.len();
        let mut worst: f64 = 0.0;
        for i in 0..n {
            for j in (i + 1)..n {
                worst = worst.max((self.weights[i][j] - self.weights[j][i]).abs());
            }
        }
        worst
    }
}

/// `Σ_{x,y,c} P(x,y|c)·P(c)·log2(P(x,y|c) / (P(x|c)·P(y|c)))`.
///
/// The joint is counted from the training rows labelled `c`; the single-value
/// conditionals and `P(c)` come from `estimates`. Both use the same
/// smoothing policy, with `|X|·|Y|` as the joint's cardinality.
pub fn conditional_mutual_information(
    header: &InstanceHeader,
    index: &ValueIndex<'_>,
    estimates: &ProbabilityEstimates,
    first: usize,
    second: usize,
) -> Result<f64> {
    if first == second {
        return Ok(SELF_PAIR_WEIGHT);
    }

    let smoothing = estimates.smoothing();
    let x_values = header.attributes()[first].number_of_values();
    let y_values = header.attributes()[second].number_of_values();
    let joint_cardinality = x_values * y_values;

    let mut cmi = 0.0;
    for x in 0..x_values {
        for y in 0..y_values {
            for c in 0..header.number_of_classes() {
                let matches = index.joint_class_count(c, &[(first, x), (second, y)]);
                let p_xy_given_c = smoothing
                    .estimate(matches, index.class_count(c), joint_cardinality)
                    .ok_or_else(|| {
                        BayesError::zero_denominator(format!(
                            "P({}, {} | class #{c})",
                            header.attributes()[first].name(),
                            header.attributes()[second].name()
                        ))
                    })?;
                if p_xy_given_c == 0.0 {
                    continue;
                }
                let independent = estimates.value_given_class(first, x, c)
                    * estimates.value_given_class(second, y, c);
                cmi += p_xy_given_c
                    * estimates.class_probability(c)
                    * log2_or_zero(p_xy_given_c / independent);
            }
        }
    }
    Ok(cmi)
}
