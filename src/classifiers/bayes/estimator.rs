use crate::classifiers::bayes::Smoothing;
use crate::core::error::{BayesError, Result};
use crate::core::instance_header::InstanceHeader;
use crate::core::value_index::ValueIndex;
use tracing::debug;

/// Learned probabilities of one non-class attribute.
#[derive(Debug, Clone, PartialEq)]
pub struct AttributeEstimates {
    /// `P(value)`, one entry per value.
    marginal: Vec<f64>,
    /// `P(value | class)`, indexed `[value][class]`.
    given_class: Vec<Vec<f64>>,
}

impl AttributeEstimates {
    pub fn marginal(&self) -> &[f64] {
        &self.marginal
    }

    pub fn given_class(&self, value: usize) -> &[f64] {
        &self.given_class[value]
    }

    pub fn number_of_values(&self) -> usize {
        self.marginal.len()
    }
}

/// Marginal and class-conditional probabilities for the class and every
/// attribute value, estimated from training counts under one [`Smoothing`]
/// policy.
#[derive(Debug, Clone, PartialEq)]
pub struct ProbabilityEstimates {
    smoothing: Smoothing,
    class_marginal: Vec<f64>,
    attributes: Vec<AttributeEstimates>,
}

impl ProbabilityEstimates {
    pub fn estimate(
        header: &InstanceHeader,
        index: &ValueIndex<'_>,
        smoothing: Smoothing,
    ) -> Result<ProbabilityEstimates> {
        let total = index.total();
        let classes = header.number_of_classes();
        let class_attribute = header.class_attribute();

        let class_marginal = (0..classes)
            .map(|c| {
                smoothing
                    .estimate(index.class_count(c), total, classes)
                    .ok_or_else(|| {
                        BayesError::zero_denominator(format!(
                            "P({} = {})",
                            class_attribute.name(),
                            class_attribute.value_name(c).unwrap_or_default()
                        ))
                    })
            })
            .collect::<Result<Vec<_>>>()?;

        let mut attributes = Vec::with_capacity(header.number_of_attributes());
        for (a, attribute) in header.attributes().iter().enumerate() {
            let cardinality = attribute.number_of_values();
            let mut marginal = Vec::with_capacity(cardinality);
            let mut given_class = Vec::with_capacity(cardinality);

            for (v, value_name) in attribute.enumerate_values() {
                let p = smoothing
                    .estimate(index.value_count(a, v), total, cardinality)
                    .ok_or_else(|| {
                        BayesError::zero_denominator(format!(
                            "P({} = {value_name})",
                            attribute.name()
                        ))
                    })?;
                marginal.push(p);

                let conditionals = (0..classes)
                    .map(|c| {
                        smoothing
                            .estimate(
                                index.value_class_count(a, v, c),
                                index.class_count(c),
                                cardinality,
                            )
                            .ok_or_else(|| {
                                BayesError::zero_denominator(format!(
                                    "P({} = {value_name} | {} = {})",
                                    attribute.name(),
                                    class_attribute.name(),
                                    class_attribute.value_name(c).unwrap_or_default()
                                ))
                            })
                    })
                    .collect::<Result<Vec<_>>>()?;
                given_class.push(conditionals);
            }

            attributes.push(AttributeEstimates {
                marginal,
                given_class,
            });
        }

        debug!(
            attributes = attributes.len(),
            classes,
            examples = total,
            %smoothing,
            "estimated marginal and class-conditional probabilities"
        );

        Ok(ProbabilityEstimates {
            smoothing,
            class_marginal,
            attributes,
        })
    }

    pub fn smoothing(&self) -> Smoothing {
        self.smoothing
    }

    pub fn class_marginal(&self) -> &[f64] {
        &self.class_marginal
    }

    pub fn class_probability(&self, class_value: usize) -> f64 {
        self.class_marginal[class_value]
    }

    pub fn attribute(&self, attribute: usize) -> &AttributeEstimates {
        &self.attributes[attribute]
    }

    pub fn value_probability(&self, attribute: usize, value: usize) -> f64 {
        self.attributes[attribute].marginal[value]
    }

    pub fn value_given_class(&self, attribute: usize, value: usize, class_value: usize) -> f64 {
        self.attributes[attribute].given_class[value][class_value]
    }

    pub fn number_of_attributes(&self) -> usize {
        self.attributes.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::instances::{Example, Instances};
    use crate::testing::approx_eq;
    use crate::testing::dummies::{
        header_ab_binary, parity_training_set, weather_header, weather_training_set,
    };

    const EPS: f64 = 1e-9;

    #[test]
    fn laplace_class_prior_on_parity_rows() {
        let data = parity_training_set();
        let index = ValueIndex::build(&data);
        let est = ProbabilityEstimates::estimate(data.header(), &index, Smoothing::Laplace)
            .unwrap();
        assert!(approx_eq(est.class_probability(0), 0.5, EPS));
        assert!(approx_eq(est.class_probability(1), 0.5, EPS));
        // (1 + 1) / (2 + 2)
        assert!(approx_eq(est.value_given_class(0, 0, 0), 0.5, EPS));
        // (2 + 1) / (4 + 2)
        assert!(approx_eq(est.value_probability(1, 1), 0.5, EPS));
    }

    #[test]
    fn maximum_likelihood_on_weather() {
        let data = weather_training_set();
        let index = ValueIndex::build(&data);
        let est = ProbabilityEstimates::estimate(data.header(), &index, Smoothing::None)
            .unwrap();
        assert!(approx_eq(est.class_probability(0), 9.0 / 14.0, EPS));
        assert!(approx_eq(est.value_probability(0, 0), 5.0 / 14.0, EPS));
        // sunny | yes = 2/9, sunny | no = 3/5
        assert!(approx_eq(est.value_given_class(0, 0, 0), 2.0 / 9.0, EPS));
        assert!(approx_eq(est.value_given_class(0, 0, 1), 3.0 / 5.0, EPS));
        // overcast never appears with "no"
        assert_eq!(est.value_given_class(0, 1, 1), 0.0);
    }

    #[test]
    fn distributions_sum_to_one_under_both_policies() {
        let data = weather_training_set();
        let index = ValueIndex::build(&data);
        for smoothing in [Smoothing::None, Smoothing::Laplace] {
            let est = ProbabilityEstimates::estimate(data.header(), &index, smoothing).unwrap();
            let total: f64 = est.class_marginal().iter().sum();
            assert!(approx_eq(total, 1.0, EPS));
            for a in 0..est.number_of_attributes() {
                let attr = est.attribute(a);
                let total: f64 = attr.marginal().iter().sum();
                assert!(approx_eq(total, 1.0, EPS), "{smoothing} marginal of {a}");
                for c in 0..2 {
                    let total: f64 = (0..attr.number_of_values())
                        .map(|v| attr.given_class(v)[c])
                        .sum();
                    assert!(approx_eq(total, 1.0, EPS), "{smoothing} P(.|{c}) of {a}");
                }
            }
        }
    }

    #[test]
    fn absent_class_is_a_zero_denominator_without_smoothing() {
        let h = header_ab_binary();
        let data = Instances::with_examples(
            h,
            vec![Example::new(vec![0, 0], 0), Example::new(vec![1, 1], 0)],
        )
        .unwrap();
        let index = ValueIndex::build(&data);
        let err = ProbabilityEstimates::estimate(data.header(), &index, Smoothing::None)
            .unwrap_err();
        assert!(matches!(err, BayesError::ZeroDenominator { .. }));

        let est = ProbabilityEstimates::estimate(data.header(), &index, Smoothing::Laplace)
            .unwrap();
        assert!(approx_eq(est.value_given_class(0, 0, 1), 0.5, EPS));
    }

    #[test]
    fn empty_training_set_fails_without_smoothing() {
        let data = Instances::new(weather_header());
        let index = ValueIndex::build(&data);
        assert!(ProbabilityEstimates::estimate(data.header(), &index, Smoothing::None).is_err());
        let est = ProbabilityEstimates::estimate(data.header(), &index, Smoothing::Laplace)
            .unwrap();
        assert!(approx_eq(est.class_probability(1), 0.5, EPS));
    }
}
