use crate::classifiers::bayes::MutualInformationMatrix;
use serde::Serialize;
use tracing::debug;

/// A directed tree edge between two attribute indices.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct TreeEdge {
    pub parent: usize,
    pub child: usize,
    pub weight: f64,
}

/// Maximum-weight spanning tree over the attributes, rooted at attribute 0.
///
/// Grown greedily (Prim): at every step the heaviest edge from a node already
/// in the tree to a node still outside it is added. Tree nodes are scanned in
/// the order they joined, outside nodes in catalog order, and only a strictly
/// heavier edge replaces the current best, so ties go to the earliest pair.
#[derive(Debug, Clone, PartialEq)]
pub struct MaxSpanningTree {
    nodes: Vec<usize>,
    edges: Vec<TreeEdge>,
}

impl MaxSpanningTree {
    pub fn build(weights: &MutualInformationMatrix) -> MaxSpanningTree {
        let n = weights.len();
        if n == 0 {
            return MaxSpanningTree {
                nodes: Vec::new(),
                edges: Vec::new(),
            };
        }

        let mut nodes = Vec::with_capacity(n);
        let mut edges = Vec::with_capacity(n - 1);
        nodes.push(0);
        let mut remaining: Vec<usize> = (1..n).collect();

        while !remaining.is_empty() {
            let mut best: Option<(usize, usize, f64)> = None;
            for &tree_node in &nodes {
                for (slot, &candidate) in remaining.iter().enumerate() {
                    let w = weights.get(tree_node, candidate);
                    if best.is_none_or(|(_, _, best_w)| w > best_w) {
                        best = Some((tree_node, slot, w));
                    }
                }
            }

            let Some((parent, slot, weight)) = best else {
                break;
            };
            let child = remaining.remove(slot);
            debug!(parent, child, weight, "spanning tree edge");
            edges.push(TreeEdge {
                parent,
                child,
                weight,
            });
            nodes.push(child);
        }

        MaxSpanningTree { nodes, edges }
    }

    pub fn root(&self) -> Option<usize> {
        self.nodes.first().copied()
    }

    /// Attributes in the order they joined the tree.
    pub fn nodes(&self) -> &[usize] {
        &self.nodes
    }

    pub fn edges(&self) -> &[TreeEdge] {
        &self.edges
    }

    pub fn parent_of(&self, child: usize) -> Option<usize> {
        self.edges.iter().find(|e| e.child == child).map(|e| e.parent)
    }

    pub fn children_of(&self, parent: usize) -> impl Iterator<Item = usize> + '_ {
        self.edges
            .iter()
            .filter(move |e| e.parent == parent)
            .map(|e| e.child)
    }

    pub fn total_weight(&self) -> f64 {
        self.edges.iter().map(|e| e.weight).sum()
    }
}
