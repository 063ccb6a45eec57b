use crate::core::attributes::{AttributeRef, NominalAttribute};
use crate::core::error::{BayesError, Result};
use crate::core::instances::Example;

/// The attribute catalog: non-class attributes in declaration order plus the
/// class attribute. Read-only once built.
#[derive(Debug, Clone)]
pub struct InstanceHeader {
    pub relation_name: String,
    pub attributes: Vec<AttributeRef>,
    pub class_attribute: AttributeRef,
}

impl InstanceHeader {
    pub fn new(
        relation_name: String,
        attributes: Vec<AttributeRef>,
        class_attribute: AttributeRef,
    ) -> InstanceHeader {
        InstanceHeader {
            relation_name,
            attributes,
            class_attribute,
        }
    }

    pub fn relation_name(&self) -> &str {
        &self.relation_name
    }

    pub fn attributes(&self) -> &[AttributeRef] {
        &self.attributes
    }

    pub fn class_attribute(&self) -> &NominalAttribute {
        &self.class_attribute
    }

    pub fn number_of_attributes(&self) -> usize {
        self.attributes.len()
    }

    pub fn number_of_classes(&self) -> usize {
        self.class_attribute.number_of_values()
    }

    /// The class sits right after the last non-class attribute.
    pub fn class_index(&self) -> usize {
        self.attributes.len()
    }

    pub fn index_of_attribute(&self, name: &str) -> Result<usize> {
        self.attributes
            .iter()
            .position(|a| a.name() == name)
            .ok_or_else(|| BayesError::UnknownAttribute(name.to_string()))
    }

    pub fn class_value_name(&self, index: usize) -> Option<&str> {
        self.class_attribute.value_name(index)
    }

    /// Two headers are compatible when attribute names and value lists agree
    /// position by position, class included.
    pub fn ensure_compatible(&self, other: &InstanceHeader) -> Result<()> {
        if self.attributes.len() != other.attributes.len() {
            return Err(BayesError::SchemaMismatch(format!(
                "expected {} attributes, found {}",
                self.attributes.len(),
                other.attributes.len()
            )));
        }
        for (mine, theirs) in self.attributes.iter().zip(&other.attributes) {
            if !mine.same_domain(theirs) {
                return Err(BayesError::SchemaMismatch(format!(
                    "attribute '{}' does not match '{}'",
                    mine.name(),
                    theirs.name()
                )));
            }
        }
        if !self.class_attribute.same_domain(&other.class_attribute) {
            return Err(BayesError::SchemaMismatch(format!(
                "class attribute '{}' does not match '{}'",
                self.class_attribute.name(),
                other.class_attribute.name()
            )));
        }
        Ok(())
    }

    /// Resolves value names (one per non-class attribute, in order) and a
    /// class value name into an [`Example`].
    pub fn example_from_labels<S: AsRef<str>>(
        &self,
        labels: &[S],
        class_label: &str,
    ) -> Result<Example> {
        if labels.len() != self.attributes.len() {
            return Err(BayesError::SchemaMismatch(format!(
                "expected {} attribute values, found {}",
                self.attributes.len(),
                labels.len()
            )));
        }
        let values = self
            .attributes
            .iter()
            .zip(labels)
            .map(|(a, l)| a.index_of_value(l.as_ref()))
            .collect::<Result<Vec<_>>>()?;
        let class_value = self.class_attribute.index_of_value(class_label)?;
        Ok(Example::new(values, class_value))
    }
}
