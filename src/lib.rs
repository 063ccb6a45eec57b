pub mod classifiers;
pub mod core;
pub mod evaluation;
pub mod streams;
pub mod tasks;
pub mod ui;
pub mod utils;

#[cfg(any(test, feature = "test-support"))]
pub mod testing;

pub use classifiers::bayes::{classify, learn, structure_edges};
pub use core::error::{BayesError, Result};
