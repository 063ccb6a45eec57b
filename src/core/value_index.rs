use crate::core::instances::{Example, Instances};

/// Example ids grouped by (attribute, value) and by class value.
///
/// Built once from a loaded example set; every count the learner needs is
/// answered from here, so examples never point back at their values.
/// Id lists are ascending because examples are scanned in order.
#[derive(Debug)]
pub struct ValueIndex<'a> {
    examples: &'a [Example],
    by_value: Vec<Vec<Vec<usize>>>,
    by_class: Vec<Vec<usize>>,
}

impl<'a> ValueIndex<'a> {
    pub fn build(instances: &'a Instances) -> ValueIndex<'a> {
        let header = instances.header();
        let mut by_value: Vec<Vec<Vec<usize>>> = header
            .attributes()
            .iter()
            .map(|a| vec![Vec::new(); a.number_of_values()])
            .collect();
        let mut by_class = vec![Vec::new(); header.number_of_classes()];

        for (id, example) in instances.iter().enumerate() {
            for (attribute, &value) in example.values().iter().enumerate() {
                by_value[attribute][value].push(id);
            }
            by_class[example.class_value()].push(id);
        }

        ValueIndex {
            examples: instances.examples(),
            by_value,
            by_class,
        }
    }

    pub fn total(&self) -> usize {
        self.examples.len()
    }

    pub fn examples_with_value(&self, attribute: usize, value: usize) -> &[usize] {
        &self.by_value[attribute][value]
    }

    pub fn examples_with_class(&self, class_value: usize) -> &[usize] {
        &self.by_class[class_value]
    }

    pub fn class_count(&self, class_value: usize) -> usize {
        self.by_class[class_value].len()
    }

    pub fn value_count(&self, attribute: usize, value: usize) -> usize {
        self.by_value[attribute][value].len()
    }

    /// Examples holding `value` on `attribute` and labelled `class_value`.
    pub fn value_class_count(&self, attribute: usize, value: usize, class_value: usize) -> usize {
        sorted_intersection_len(
            &self.by_value[attribute][value],
            &self.by_class[class_value],
        )
    }

    /// Examples labelled `class_value` that hold every listed
    /// `(attribute, value)` pair.
    pub fn joint_class_count(&self, class_value: usize, pairs: &[(usize, usize)]) -> usize {
        self.by_class[class_value]
            .iter()
            .filter(|&&id| {
                let e = &self.examples[id];
                pairs
                    .iter()
                    .all(|&(attribute, value)| e.value_at_index(attribute) == Some(value))
            })
            .count()
    }
}

fn sorted_intersection_len(a: &[usize], b: &[usize]) -> usize {
    let (mut i, mut j, mut n) = (0, 0, 0);
    while i < a.len() && j < b.len() {
        match a[i].cmp(&b[j]) {
            std::cmp::Ordering::Less => i += 1,
            std::cmp::Ordering::Greater => j += 1,
            std::cmp::Ordering::Equal => {
                n += 1;
                i += 1;
                j += 1;
            }
        }
    }
    n
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::dummies::{parity_training_set, weather_training_set};

    #[test]
    fn groups_ids_by_value_and_class() {
        let data = parity_training_set();
        let index = ValueIndex::build(&data);
        assert_eq!(index.total(), 4);
        assert_eq!(index.examples_with_value(0, 0), &[0, 1]);
        assert_eq!(index.examples_with_value(1, 0), &[0, 2]);
        assert_eq!(index.examples_with_class(0), &[0, 3]);
        assert_eq!(index.class_count(1), 2);
    }

    #[test]
    fn counts_match_a_linear_scan() {
        let data = weather_training_set();
        let index = ValueIndex::build(&data);
        let header = data.header();
        for a in 0..header.number_of_attributes() {
            for v in 0..header.attributes()[a].number_of_values() {
                for c in 0..header.number_of_classes() {
                    let expected = data
                        .iter()
                        .filter(|e| e.values()[a] == v && e.class_value() == c)
                        .count();
                    assert_eq!(index.value_class_count(a, v, c), expected);
                    assert_eq!(index.joint_class_count(c, &[(a, v)]), expected);
                }
            }
        }
    }

    #[test]
    fn joint_count_over_two_attributes() {
        let data = weather_training_set();
        let index = ValueIndex::build(&data);
        // sunny and high humidity: every such day is a "no"
        assert_eq!(index.joint_class_count(1, &[(0, 0), (2, 0)]), 3);
        assert_eq!(index.joint_class_count(0, &[(0, 0), (2, 0)]), 0);
    }

    #[test]
    fn intersection_of_sorted_lists() {
        assert_eq!(sorted_intersection_len(&[1, 3, 5, 7], &[2, 3, 7, 9]), 2);
        assert_eq!(sorted_intersection_len(&[], &[1]), 0);
    }
}
