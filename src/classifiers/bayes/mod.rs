mod bayes_net;
mod cpt;
mod estimator;
mod learner_config;
mod mutual_information;
mod smoothing;
mod spanning_tree;
mod structure;

pub use bayes_net::BayesNet;
pub use cpt::ConditionalProbabilityTable;
pub use estimator::{AttributeEstimates, ProbabilityEstimates};
pub use learner_config::LearnerConfig;
pub use mutual_information::{
    MutualInformationMatrix, SELF_PAIR_WEIGHT, conditional_mutual_information,
};
pub use smoothing::Smoothing;
pub use spanning_tree::{MaxSpanningTree, TreeEdge};
pub use structure::{NetworkStructure, ParentSet, StructureChoice};

use crate::classifiers::Classifier;
use crate::core::error::Result;
use crate::core::instances::{Example, Instances};

/// Learns a network of the given shape from `training`.
pub fn learn(
    training: &Instances,
    structure: StructureChoice,
    smoothing: Smoothing,
) -> Result<BayesNet> {
    BayesNet::learn(training, LearnerConfig::new(structure, smoothing))
}

/// Predicted class index and normalized score of the winner.
pub fn classify(model: &BayesNet, example: &Example) -> Result<(usize, f64)> {
    let p = model.predict(example)?;
    Ok((p.class_index, p.posterior))
}

/// `(parent, child)` attribute names of the learned tree.
pub fn structure_edges(model: &BayesNet) -> Vec<(String, String)> {
    model.structure_edges()
}

#[cfg(test)]
mod properties;
