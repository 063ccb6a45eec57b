use crate::classifiers::Classifier;
use crate::classifiers::bayes::{
    ConditionalProbabilityTable, LearnerConfig, MaxSpanningTree, MutualInformationMatrix,
    NetworkStructure, ParentSet, ProbabilityEstimates, StructureChoice,
};
use crate::core::error::{BayesError, Result};
use crate::core::instance_header::InstanceHeader;
use crate::core::instances::{Example, Instances};
use crate::core::value_index::ValueIndex;
use std::sync::Arc;
use tracing::{debug, info};

/// A learned Naive Bayes or TAN network: structure, probability estimates and
/// one conditional probability table per attribute. Immutable once learned;
/// retraining means learning a new one.
#[derive(Debug, Clone)]
pub struct BayesNet {
    header: Arc<InstanceHeader>,
    config: LearnerConfig,
    estimates: ProbabilityEstimates,
    mutual_information: Option<MutualInformationMatrix>,
    structure: NetworkStructure,
    class_cpt: ConditionalProbabilityTable,
    attribute_cpts: Vec<ConditionalProbabilityTable>,
}

impl BayesNet {
    pub fn learn(training: &Instances, config: LearnerConfig) -> Result<BayesNet> {
        let header = training.shared_header();
        let n = header.number_of_attributes();
        let index = ValueIndex::build(training);
        let estimates = ProbabilityEstimates::estimate(&header, &index, config.smoothing)?;

        let (structure, mutual_information) = match config.structure {
            StructureChoice::Naive => (NetworkStructure::naive(n), None),
            StructureChoice::Tan => {
                let weights = MutualInformationMatrix::compute(&header, &index, &estimates)?;
                let tree = MaxSpanningTree::build(&weights);
                debug!(
                    edges = tree.edges().len(),
                    total_weight = tree.total_weight(),
                    "built maximum spanning tree"
                );
                (NetworkStructure::tan(n, tree), Some(weights))
            }
        };

        let class_cpt = ConditionalProbabilityTable::for_class(&estimates);
        let attribute_cpts = (0..n)
            .map(|a| match structure.parents_of(a) {
                ParentSet::ClassOnly => ConditionalProbabilityTable::given_class(&estimates, a),
                ParentSet::ClassAndTree { tree_parent } => {
                    ConditionalProbabilityTable::given_tree_parent_and_class(
                        &header,
                        &index,
                        config.smoothing,
                        a,
                        tree_parent,
                    )
                }
            })
            .collect::<Vec<_>>();
        let undefined: usize = attribute_cpts.iter().map(|t| t.undefined_cells()).sum();
        if undefined > 0 {
            debug!(undefined, "CPT cells with an unseen parent context");
        }

        info!(
            relation = header.relation_name(),
            learner = %config,
            attributes = n,
            examples = training.len(),
            "learned network"
        );

        Ok(BayesNet {
            header,
            config,
            estimates,
            mutual_information,
            structure,
            class_cpt,
            attribute_cpts,
        })
    }

    pub fn config(&self) -> LearnerConfig {
        self.config
    }

    pub fn estimates(&self) -> &ProbabilityEstimates {
        &self.estimates
    }

    /// Only present for TAN networks.
    pub fn mutual_information(&self) -> Option<&MutualInformationMatrix> {
        self.mutual_information.as_ref()
    }

    pub fn structure(&self) -> &NetworkStructure {
        &self.structure
    }

    pub fn class_cpt(&self) -> &ConditionalProbabilityTable {
        &self.class_cpt
    }

    pub fn cpt(&self, attribute: usize) -> &ConditionalProbabilityTable {
        &self.attribute_cpts[attribute]
    }

    /// `(parent, child)` attribute names of the tree edges, in the order they
    /// were added. Empty for Naive Bayes.
    pub fn structure_edges(&self) -> Vec<(String, String)> {
        let attributes = self.header.attributes();
        self.structure
            .edges()
            .iter()
            .map(|e| {
                (
                    attributes[e.parent].name().to_string(),
                    attributes[e.child].name().to_string(),
                )
            })
            .collect()
    }

    /// Parent names of one attribute: tree parent first, then the class.
    pub fn parent_names(&self, attribute: usize) -> Vec<&str> {
        let mut names = Vec::with_capacity(2);
        if let Some(p) = self.structure.tree_parent(attribute) {
            names.push(self.header.attributes()[p].name());
        }
        names.push(self.header.class_attribute().name());
        names
    }

    /// Names the CPT cell an example needed but training never defined.
    fn undefined_cell(
        &self,
        cell: Option<(usize, usize, Option<(usize, usize)>)>,
        class_value: usize,
    ) -> BayesError {
        let attributes = self.header.attributes();
        let class = format!(
            "{} = {}",
            self.header.class_attribute().name(),
            self.header.class_value_name(class_value).unwrap_or_default()
        );
        let quantity = match cell {
            None => format!("P({class})"),
            Some((a, v, parent)) => {
                let own = &attributes[a];
                let given = match parent {
                    Some((p, pv)) => format!(
                        "{} = {}, {class}",
                        attributes[p].name(),
                        attributes[p].value_name(pv).unwrap_or_default()
                    ),
                    None => class,
                };
                format!(
                    "P({} = {} | {given})",
                    own.name(),
                    own.value_name(v).unwrap_or_default()
                )
            }
        };
        BayesError::zero_denominator(quantity)
    }

    fn check_example(&self, example: &Example) -> Result<()> {
        if example.number_of_values() != self.header.number_of_attributes() {
            return Err(BayesError::SchemaMismatch(format!(
                "example has {} values but the model has {} attributes",
                example.number_of_values(),
                self.header.number_of_attributes()
            )));
        }
        for (a, &v) in example.values().iter().enumerate() {
            let attribute = &self.header.attributes()[a];
            if v >= attribute.number_of_values() {
                return Err(BayesError::SchemaMismatch(format!(
                    "value index {v} out of range for attribute '{}'",
                    attribute.name()
                )));
            }
        }
        Ok(())
    }
}

impl Classifier for BayesNet {
    fn header(&self) -> &InstanceHeader {
        &self.header
    }

    fn class_scores(&self, example: &Example) -> Result<Vec<f64>> {
        self.check_example(example)?;
        let classes = self.header.number_of_classes();
        let mut scores = Vec::with_capacity(classes);
        for c in 0..classes {
            let mut score = self
                .class_cpt
                .probability(c, 0, 0)
                .ok_or_else(|| self.undefined_cell(None, c))?;
            for (a, &v) in example.values().iter().enumerate() {
                let parent = match self.structure.parents_of(a) {
                    ParentSet::ClassOnly => None,
                    ParentSet::ClassAndTree { tree_parent } => {
                        Some((tree_parent, example.values()[tree_parent]))
                    }
                };
                let parent_value = parent.map_or(0, |(_, pv)| pv);
                score *= self.attribute_cpts[a]
                    .probability(v, parent_value, c)
                    .ok_or_else(|| self.undefined_cell(Some((a, v, parent)), c))?;
            }
            scores.push(score);
        }
        Ok(scores)
    }
}
