pub mod attributes;
pub mod error;
pub mod instance_header;
pub mod instances;
pub mod value_index;

pub use error::{BayesError, Result};
