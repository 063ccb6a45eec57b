use crate::core::error::{BayesError, Result};
use crate::core::instance_header::InstanceHeader;
use crate::core::instances::Example;
use std::sync::Arc;

/// An ordered example set bound to one catalog. Every example is checked
/// against the header when it is added.
#[derive(Debug, Clone)]
pub struct Instances {
    header: Arc<InstanceHeader>,
    examples: Vec<Example>,
}

impl Instances {
    pub fn new(header: Arc<InstanceHeader>) -> Instances {
        Instances {
            header,
            examples: Vec::new(),
        }
    }

    pub fn with_examples(header: Arc<InstanceHeader>, examples: Vec<Example>) -> Result<Instances> {
        let mut instances = Instances::new(header);
        for e in examples {
            instances.push(e)?;
        }
        Ok(instances)
    }

    pub fn push(&mut self, example: Example) -> Result<()> {
        self.validate(&example)?;
        self.examples.push(example);
        Ok(())
    }

    fn validate(&self, example: &Example) -> Result<()> {
        if example.number_of_values() != self.header.number_of_attributes() {
            return Err(BayesError::SchemaMismatch(format!(
                "example has {} values but the catalog has {} attributes",
                example.number_of_values(),
                self.header.number_of_attributes()
            )));
        }
        for (attribute, &v) in self.header.attributes().iter().zip(example.values()) {
            if v >= attribute.number_of_values() {
                return Err(BayesError::SchemaMismatch(format!(
                    "value index {v} out of range for attribute '{}'",
                    attribute.name()
                )));
            }
        }
        if example.class_value() >= self.header.number_of_classes() {
            return Err(BayesError::SchemaMismatch(format!(
                "class value index {} out of range",
                example.class_value()
            )));
        }
        Ok(())
    }

    pub fn header(&self) -> &InstanceHeader {
        &self.header
    }

    pub fn shared_header(&self) -> Arc<InstanceHeader> {
        Arc::clone(&self.header)
    }

    pub fn len(&self) -> usize {
        self.examples.len()
    }

    pub fn is_empty(&self) -> bool {
        self.examples.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<&Example> {
        self.examples.get(index)
    }

    pub fn examples(&self) -> &[Example] {
        &self.examples
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Example> {
        self.examples.iter()
    }

    pub fn iter_mut(&mut self) -> std::slice::IterMut<'_, Example> {
        self.examples.iter_mut()
    }
}

impl<'a> IntoIterator for &'a Instances {
    type Item = &'a Example;
    type IntoIter = std::slice::Iter<'a, Example>;

    fn into_iter(self) -> Self::IntoIter {
        self.examples.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::dummies::header_ab_binary;

    #[test]
    fn accepts_valid_rows() {
        let h = header_ab_binary();
        let set = Instances::with_examples(
            Arc::clone(&h),
            vec![Example::new(vec![0, 1], 0), Example::new(vec![1, 1], 1)],
        )
        .unwrap();
        assert_eq!(set.len(), 2);
        assert_eq!(set.get(1).unwrap().class_value(), 1);
    }

    #[test]
    fn rejects_bad_arity_and_ranges() {
        let h = header_ab_binary();
        let mut set = Instances::new(h);
        assert!(matches!(
            set.push(Example::new(vec![0], 0)),
            Err(BayesError::SchemaMismatch(_))
        ));
        assert!(matches!(
            set.push(Example::new(vec![0, 2], 0)),
            Err(BayesError::SchemaMismatch(_))
        ));
        assert!(matches!(
            set.push(Example::new(vec![0, 0], 5)),
            Err(BayesError::SchemaMismatch(_))
        ));
        assert!(set.is_empty());
    }
}
