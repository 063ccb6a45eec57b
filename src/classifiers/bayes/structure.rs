use crate::classifiers::bayes::{MaxSpanningTree, TreeEdge};
use serde::{Deserialize, Serialize};
use strum_macros::{Display, EnumIter, EnumString, IntoStaticStr};

/// Which network shape to learn.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Default,
    Serialize,
    Deserialize,
    Display,
    EnumIter,
    EnumString,
    IntoStaticStr,
)]
#[serde(rename_all = "kebab-case")]
#[strum(serialize_all = "kebab-case", ascii_case_insensitive)]
pub enum StructureChoice {
    /// Every attribute depends on the class only.
    #[default]
    Naive,
    /// Tree-augmented: attributes may also depend on one other attribute.
    Tan,
}

/// Parents of one non-class attribute. The class is always a parent.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "kebab-case")]
pub enum ParentSet {
    ClassOnly,
    ClassAndTree { tree_parent: usize },
}

impl ParentSet {
    pub fn tree_parent(self) -> Option<usize> {
        match self {
            ParentSet::ClassOnly => None,
            ParentSet::ClassAndTree { tree_parent } => Some(tree_parent),
        }
    }

    /// Number of parents counting the class.
    pub fn parent_count(self) -> usize {
        match self {
            ParentSet::ClassOnly => 1,
            ParentSet::ClassAndTree { .. } => 2,
        }
    }
}

/// The finished parent/child links of a network. Assigned in one step by
/// [`NetworkStructure::naive`] or [`NetworkStructure::tan`] and never changed.
#[derive(Debug, Clone, PartialEq)]
pub struct NetworkStructure {
    choice: StructureChoice,
    parents: Vec<ParentSet>,
    children: Vec<Vec<usize>>,
    tree: Option<MaxSpanningTree>,
}

impl NetworkStructure {
    pub fn naive(number_of_attributes: usize) -> NetworkStructure {
        NetworkStructure {
            choice: StructureChoice::Naive,
            parents: vec![ParentSet::ClassOnly; number_of_attributes],
            children: vec![Vec::new(); number_of_attributes],
            tree: None,
        }
    }

    /// Tree edges become parent links; the root keeps the class as its only
    /// parent.
    pub fn tan(number_of_attributes: usize, tree: MaxSpanningTree) -> NetworkStructure {
        let mut parents = vec![ParentSet::ClassOnly; number_of_attributes];
        let mut children = vec![Vec::new(); number_of_attributes];
        for edge in tree.edges() {
            parents[edge.child] = ParentSet::ClassAndTree {
                tree_parent: edge.parent,
            };
            children[edge.parent].push(edge.child);
        }
        NetworkStructure {
            choice: StructureChoice::Tan,
            parents,
            children,
            tree: Some(tree),
        }
    }

    pub fn choice(&self) -> StructureChoice {
        self.choice
    }

    pub fn parents_of(&self, attribute: usize) -> ParentSet {
        self.parents[attribute]
    }

    pub fn tree_parent(&self, attribute: usize) -> Option<usize> {
        self.parents[attribute].tree_parent()
    }

    pub fn children_of(&self, attribute: usize) -> &[usize] {
        &self.children[attribute]
    }

    pub fn tree(&self) -> Option<&MaxSpanningTree> {
        self.tree.as_ref()
    }

    /// Tree edges in the order they were chosen; empty for naive networks.
    pub fn edges(&self) -> &[TreeEdge] {
        self.tree.as_ref().map(|t| t.edges()).unwrap_or_default()
    }

    pub fn number_of_attributes(&self) -> usize {
        self.parents.len()
    }
}
