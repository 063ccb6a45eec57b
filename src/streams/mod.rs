pub mod arff;

pub use arff::{ArffDocument, load_instances, load_instances_for};
