use super::*;
use crate::core::instance_header::InstanceHeader;
use crate::core::value_index::ValueIndex;
use crate::testing::approx_eq;
use crate::testing::dummies::nominal;
use proptest::prelude::*;
use std::sync::Arc;

const EPS: f64 = 1e-9;

fn names(prefix: &str, n: usize) -> Vec<String> {
    (0..n).map(|i| format!("{prefix}{i}")).collect()
}

fn build(cardinalities: Vec<usize>, classes: usize, rows: Vec<(Vec<usize>, usize)>) -> Instances {
    let attributes = cardinalities
        .iter()
        .enumerate()
        .map(|(i, &k)| {
            let values = names("v", k);
            let refs: Vec<&str> = values.iter().map(String::as_str).collect();
            nominal(&format!("x{i}"), i, &refs)
        })
        .collect();
    let class_values = names("c", classes);
    let refs: Vec<&str> = class_values.iter().map(String::as_str).collect();
    let class_attribute = nominal("class", cardinalities.len(), &refs);
    let header = Arc::new(InstanceHeader::new("random".into(), attributes, class_attribute));
    let examples = rows
        .into_iter()
        .map(|(values, class_value)| Example::new(values, class_value))
        .collect();
    Instances::with_examples(header, examples).unwrap()
}

fn dataset() -> impl Strategy<Value = Instances> {
    (prop::collection::vec(2usize..4, 1..5), 2usize..4)
        .prop_flat_map(|(cardinalities, classes)| {
            let row = (
                cardinalities.iter().map(|&k| 0..k).collect::<Vec<_>>(),
                0..classes,
            );
            (
                Just(cardinalities),
                Just(classes),
                prop::collection::vec(row, 0..30),
            )
        })
        .prop_map(|(cardinalities, classes, rows)| build(cardinalities, classes, rows))
}

proptest! {
    #[test]
    fn laplace_estimates_are_normalized(data in dataset()) {
        let index = ValueIndex::build(&data);
        let est = ProbabilityEstimates::estimate(data.header(), &index, Smoothing::Laplace)
            .unwrap();
        let classes = data.header().number_of_classes();

        prop_assert!(approx_eq(est.class_marginal().iter().sum::<f64>(), 1.0, EPS));
        for a in 0..est.number_of_attributes() {
            let attr = est.attribute(a);
            prop_assert!(approx_eq(attr.marginal().iter().sum::<f64>(), 1.0, EPS));
            for c in 0..classes {
                let total: f64 = (0..attr.number_of_values()).map(|v| attr.given_class(v)[c]).sum();
                prop_assert!(approx_eq(total, 1.0, EPS));
            }
            for v in 0..attr.number_of_values() {
                prop_assert!((0.0..=1.0).contains(&attr.marginal()[v]));
            }
        }
    }

    #[test]
    fn mutual_information_is_symmetric(data in dataset()) {
        let index = ValueIndex::build(&data);
        let est = ProbabilityEstimates::estimate(data.header(), &index, Smoothing::Laplace)
            .unwrap();
        let m = MutualInformationMatrix::compute(data.header(), &index, &est).unwrap();
        for i in 0..m.len() {
            prop_assert_eq!(m.get(i, i), SELF_PAIR_WEIGHT);
            for j in 0..m.len() {
                prop_assert!((m.get(i, j) - m.get(j, i)).abs() < 1e-9);
            }
        }
    }

    #[test]
    fn tan_tree_spans_every_attribute(data in dataset()) {
        let n = data.header().number_of_attributes();
        let net = learn(&data, StructureChoice::Tan, Smoothing::Laplace).unwrap();
        let s = net.structure();
        let tree = s.tree().unwrap();
        prop_assert_eq!(tree.edges().len(), n - 1);
        prop_assert_eq!(tree.nodes().len(), n);
        prop_assert_eq!(structure_edges(&net).len(), n - 1);

        // walking up from any node reaches the root without revisiting
        for start in 0..n {
            let mut seen = vec![false; n];
            let mut at = start;
            while let Some(p) = s.tree_parent(at) {
                prop_assert!(!seen[at]);
                seen[at] = true;
                at = p;
            }
            prop_assert_eq!(at, 0);
        }

        prop_assert_eq!(s.parents_of(0).parent_count(), 1);
        for a in 1..n {
            prop_assert_eq!(s.parents_of(a).parent_count(), 2);
            let cpt = net.cpt(a);
            let (_, parents, classes) = cpt.dimensions();
            for p in 0..parents {
                for c in 0..classes {
                    let sum = cpt.column_sum(p, c);
                    prop_assert!(sum.is_some_and(|sum| approx_eq(sum, 1.0, EPS)));
                }
            }
        }
    }

    #[test]
    fn predictions_are_deterministic_probabilities(data in dataset()) {
        for structure in [StructureChoice::Naive, StructureChoice::Tan] {
            let first = learn(&data, structure, Smoothing::Laplace).unwrap();
            let second = learn(&data, structure, Smoothing::Laplace).unwrap();
            for e in data.iter() {
                let (class_index, posterior) = classify(&first, e).unwrap();
                prop_assert!((0.0..=1.0).contains(&posterior));
                prop_assert!(class_index < data.header().number_of_classes());
                prop_assert_eq!(classify(&second, e).unwrap(), (class_index, posterior));
            }
        }
    }
}
