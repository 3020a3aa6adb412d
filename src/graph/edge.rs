use crate::graph::graph::Weight;
use crate::graph::node::NodeId;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct EdgeId(pub usize);

impl EdgeId {
    pub fn index(self) -> usize {
        self.0
    }
}

/// Undirected edge. `a` carries the lexicographically smaller label.
#[derive(Debug, Clone, PartialEq)]
pub struct Edge {
    id: EdgeId,
    a: NodeId,
    b: NodeId,
    /// weight > 0
    weight: Weight,
}

impl Edge {
    pub fn new(id: EdgeId, a: NodeId, b: NodeId, weight: Weight) -> Self {
        Self { id, a, b, weight }
    }

    pub fn id(&self) -> EdgeId {
        self.id
    }

    pub fn endpoints(&self) -> (NodeId, NodeId) {
        (self.a, self.b)
    }

    pub fn weight(&self) -> Weight {
        self.weight
    }

    /// The endpoint opposite to `from`.
    pub fn other(&self, from: NodeId) -> NodeId {
        if from == self.a { self.b } else { self.a }
    }

    pub(crate) fn with_weight(&self, weight: Weight) -> Self {
        Self { weight, ..self.clone() }
    }
}
