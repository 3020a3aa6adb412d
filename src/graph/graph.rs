use crate::error::{GraphError, Result};
use crate::graph::edge::{Edge, EdgeId};
use crate::graph::node::{Node, NodeId};
use std::collections::HashMap;

pub type Weight = u64;

/// Upper bound for any edge weight. Keeps every simple path sum far below
/// `Distance::INFINITY`.
pub const MAX_WEIGHT: Weight = u32::MAX as Weight;

/// Immutable undirected graph.
///
/// Every edge is stored once in canonical orientation and referenced from the
/// adjacency lists of both endpoints, so `weight(u, v) == weight(v, u)` holds
/// for any graph that could be constructed. Edges are kept sorted by their
/// canonical label pair, which gives callers a stable iteration order that does
/// not depend on how the graph was written down.
#[derive(Debug, Clone, PartialEq)]
pub struct Graph {
    nodes: Vec<Node>,
    edges: Vec<Edge>,
    adj: Vec<Vec<EdgeId>>,
    index: HashMap<String, NodeId>,
}

impl Graph {
    /// Builds a graph from a `node -> {neighbor: weight}` table.
    ///
    /// Every entry must be mirrored by a reverse entry with the same weight.
    pub fn from_table(table: &[(&str, &[(&str, Weight)])]) -> Result<Self> {
        let rows: HashMap<&str, &[(&str, Weight)]> = table.iter().copied().collect();

        let mut edges = Vec::new();
        for (node, neighbors) in table {
            for &(neighbor, weight) in neighbors.iter() {
                let reverse = rows
                    .get(neighbor)
                    .ok_or_else(|| GraphError::NodeNotFound(neighbor.to_string()))?;
                let mirrored = reverse.iter().any(|&(n, w)| n == *node && w == weight);
                if !mirrored {
                    return Err(GraphError::AsymmetricEdge {
                        from: node.to_string(),
                        to: neighbor.to_string(),
                    });
                }
                edges.push((*node, neighbor, weight));
            }
        }

        let labels = table.iter().map(|(node, _)| *node).collect::<Vec<_>>();
        Self::from_edges(&labels, &edges)
    }

    /// Builds a graph from node labels and undirected `(u, v, weight)` triples.
    ///
    /// A pair listed twice (in either orientation) must repeat the same weight.
    pub fn from_edges(labels: &[&str], edges: &[(&str, &str, Weight)]) -> Result<Self> {
        let mut nodes = Vec::with_capacity(labels.len());
        let mut index = HashMap::with_capacity(labels.len());
        for (i, label) in labels.iter().enumerate() {
            if index.insert(label.to_string(), NodeId(i)).is_some() {
                return Err(GraphError::DuplicateNode(label.to_string()));
            }
            nodes.push(Node::new(NodeId(i), *label));
        }

        let lookup = |label: &str| {
            index
                .get(label)
                .copied()
                .ok_or_else(|| GraphError::NodeNotFound(label.to_string()))
        };

        let mut canonical: HashMap<(NodeId, NodeId), Weight> = HashMap::new();
        for &(u, v, weight) in edges {
            let (u_id, v_id) = (lookup(u)?, lookup(v)?);
            if u_id == v_id {
                return Err(GraphError::SelfLoop(u.to_string()));
            }
            if weight == 0 {
                return Err(GraphError::ZeroWeight(u.to_string(), v.to_string()));
            }
            if weight > MAX_WEIGHT {
                return Err(GraphError::WeightTooLarge(u.to_string(), v.to_string()));
            }
            let key = if u <= v { (u_id, v_id) } else { (v_id, u_id) };
            match canonical.insert(key, weight) {
                Some(prev) if prev != weight => {
                    return Err(GraphError::AsymmetricEdge {
                        from: u.to_string(),
                        to: v.to_string(),
                    });
                }
                _ => {}
            }
        }

        let mut pairs = canonical.into_iter().collect::<Vec<_>>();
        pairs.sort_by(|((a1, b1), _), ((a2, b2), _)| {
            let l = |id: &NodeId| nodes[id.index()].label();
            (l(a1), l(b1)).cmp(&(l(a2), l(b2)))
        });

        let edges = pairs
            .into_iter()
            .enumerate()
            .map(|(i, ((a, b), weight))| Edge::new(EdgeId(i), a, b, weight))
            .collect::<Vec<_>>();

        Ok(Self::assemble(nodes, edges, index))
    }

    fn assemble(nodes: Vec<Node>, edges: Vec<Edge>, index: HashMap<String, NodeId>) -> Self {
        let mut adj: Vec<Vec<EdgeId>> = vec![Vec::new(); nodes.len()];
        edges.iter().for_each(|e| {
            let (a, b) = e.endpoints();
            adj[a.index()].push(e.id());
            adj[b.index()].push(e.id());
        });
        Self {
            nodes,
            edges,
            adj,
            index,
        }
    }

    /// Same topology, new per-edge weights given in `edges()` order.
    pub fn with_weights(&self, weights: &[Weight]) -> Result<Self> {
        if weights.len() != self.edges.len() {
            return Err(GraphError::WeightCountMismatch {
                expected: self.edges.len(),
                actual: weights.len(),
            });
        }
        let edges = self
            .edges
            .iter()
            .zip(weights)
            .map(|(e, &w)| {
                let (a, b) = self.edge_labels(e);
                if w == 0 {
                    Err(GraphError::ZeroWeight(a.to_string(), b.to_string()))
                } else if w > MAX_WEIGHT {
                    Err(GraphError::WeightTooLarge(a.to_string(), b.to_string()))
                } else {
                    Ok(e.with_weight(w))
                }
            })
            .collect::<Result<Vec<_>>>()?;
        Ok(Self::assemble(self.nodes.clone(), edges, self.index.clone()))
    }

    pub fn nodes(&self) -> &[Node] {
        &self.nodes
    }

    pub fn edges(&self) -> &[Edge] {
        &self.edges
    }

    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }

    pub fn edge_count(&self) -> usize {
        self.edges.len()
    }

    pub fn edge_by_id(&self, id: EdgeId) -> &Edge {
        &self.edges[id.index()]
    }

    pub fn outgoing(&self, id: NodeId) -> &[EdgeId] {
        &self.adj[id.index()]
    }

    pub fn contains(&self, label: &str) -> bool {
        self.index.contains_key(label)
    }

    pub fn node_id(&self, label: &str) -> Result<NodeId> {
        self.index
            .get(label)
            .copied()
            .ok_or_else(|| GraphError::NodeNotFound(label.to_string()))
    }

    pub fn label(&self, id: NodeId) -> &str {
        self.nodes[id.index()].label()
    }

    /// Canonical label pair of an edge, smaller label first.
    pub fn edge_labels(&self, edge: &Edge) -> (&str, &str) {
        let (a, b) = edge.endpoints();
        (self.label(a), self.label(b))
    }

    pub fn neighbor_ids(&self, id: NodeId) -> impl Iterator<Item = (NodeId, Weight)> + '_ {
        self.adj[id.index()].iter().map(move |e_id| {
            let edge = self.edge_by_id(*e_id);
            (edge.other(id), edge.weight())
        })
    }

    pub fn neighbors(&self, label: &str) -> Result<Vec<(&str, Weight)>> {
        let id = self.node_id(label)?;
        Ok(self
            .neighbor_ids(id)
            .map(|(n, w)| (self.label(n), w))
            .collect())
    }

    pub fn weight(&self, from: &str, to: &str) -> Result<Weight> {
        let from_id = self.node_id(from)?;
        let to_id = self.node_id(to)?;
        self.neighbor_ids(from_id)
            .find(|(n, _)| *n == to_id)
            .map(|(_, w)| w)
            .ok_or_else(|| GraphError::EdgeNotFound(from.to_string(), to.to_string()))
    }
}
