pub mod bayes;
pub mod classifier;

pub use bayes::BayesNet;
pub use classifier::{Classifier, prediction_from_scores};
