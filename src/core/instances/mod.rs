mod example;
mod instances;

pub use example::{Example, Prediction};
pub use instances::Instances;
