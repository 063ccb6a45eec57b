use crate::core::error::{BayesError, Result};
use std::collections::HashMap;
use std::sync::Arc;

pub type AttributeRef = Arc<NominalAttribute>;

/// A discrete attribute: a name, its position in the catalog and the
/// ordered list of values it may take.
#[derive(Debug, Clone, PartialEq)]
pub struct NominalAttribute {
    name: String,
    index: usize,
    values: Vec<String>,
    label_to_index: HashMap<String, usize>,
}

impl NominalAttribute {
    /// Builds an attribute, rejecting duplicate value names.
    pub fn new<N: Into<String>>(name: N, index: usize, values: Vec<String>) -> Result<Self> {
        let name = name.into();
        let mut label_to_index = HashMap::with_capacity(values.len());
        for (i, v) in values.iter().enumerate() {
            if label_to_index.insert(v.clone(), i).is_some() {
                return Err(BayesError::SchemaMismatch(format!(
                    "attribute '{name}' declares value '{v}' twice"
                )));
            }
        }
        Ok(NominalAttribute {
            name,
            index,
            values,
            label_to_index,
        })
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn index(&self) -> usize {
        self.index
    }

    pub fn values(&self) -> &[String] {
        &self.values
    }

    pub fn number_of_values(&self) -> usize {
        self.values.len()
    }

    pub fn value_name(&self, index: usize) -> Option<&str> {
        self.values.get(index).map(String::as_str)
    }

    pub fn index_of_value(&self, v: &str) -> Result<usize> {
        self.label_to_index
            .get(v)
            .copied()
            .ok_or_else(|| BayesError::UnknownValue {
                attribute: self.name.clone(),
                value: v.to_string(),
            })
    }

    pub fn enumerate_values(&self) -> impl Iterator<Item = (usize, &String)> {
        self.values.iter().enumerate()
    }

    /// Same name and same ordered values; the ordinal index is ignored.
    pub fn same_domain(&self, other: &NominalAttribute) -> bool {
        self.name == other.name && self.values == other.values
    }
}
