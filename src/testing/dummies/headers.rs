use crate::core::attributes::{AttributeRef, NominalAttribute};
use crate::core::instance_header::InstanceHeader;
use std::sync::Arc;

pub fn nominal(name: &str, index: usize, values: &[&str]) -> AttributeRef {
    let values = values.iter().map(|v| v.to_string()).collect();
    Arc::new(NominalAttribute::new(name, index, values).expect("distinct test values"))
}

/// A ∈ {a1, a2}, B ∈ {b1, b2}, class ∈ {yes, no}.
pub fn header_ab_binary() -> Arc<InstanceHeader> {
    let a = nominal("A", 0, &["a1", "a2"]);
    let b = nominal("B", 1, &["b1", "b2"]);
    let class_attribute = nominal("class", 2, &["yes", "no"]);
    Arc::new(InstanceHeader::new("ab".into(), vec![a, b], class_attribute))
}
