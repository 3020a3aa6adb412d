use crate::error::Result;
use crate::graph::graph::Graph;
use crate::graph::node::NodeId;
use crate::pathfinding::distance::Distance;
use serde::Serialize;
use std::cmp::Reverse;
use std::collections::BinaryHeap;
use tracing::debug;

/// Distances and predecessors from a single source, indexed by `NodeId`.
#[derive(Debug, Clone, PartialEq)]
pub struct ShortestPathTree {
    source: NodeId,
    distances: Vec<Distance>,
    predecessors: Vec<Option<NodeId>>,
}

impl ShortestPathTree {
    pub fn source(&self) -> NodeId {
        self.source
    }

    pub fn distances(&self) -> &[Distance] {
        &self.distances
    }

    pub fn predecessors(&self) -> &[Option<NodeId>] {
        &self.predecessors
    }

    pub fn distance(&self, id: NodeId) -> Distance {
        self.distances[id.index()]
    }

    pub fn predecessor(&self, id: NodeId) -> Option<NodeId> {
        self.predecessors[id.index()]
    }

    pub fn path_to(&self, target: NodeId) -> Vec<NodeId> {
        reconstruct_path(&self.predecessors, self.source, target)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PathResult {
    pub distance: Distance,
    /// Empty when the target is unreachable.
    pub path: Vec<String>,
}

impl PathResult {
    pub fn is_reachable(&self) -> bool {
        !self.path.is_empty()
    }
}

/// Dijkstra from `source` over non-negative weights.
///
/// Stale heap entries are skipped through the visited check after each pop,
/// so a node may sit in the heap several times but is settled exactly once.
pub fn compute_distances(graph: &Graph, source: &str) -> Result<ShortestPathTree> {
    let source = graph.node_id(source)?;
    let n = graph.node_count();

    let mut distances = vec![Distance::INFINITY; n];
    let mut predecessors = vec![None; n];
    let mut visited = vec![false; n];
    distances[source.index()] = Distance::ZERO;

    let mut heap = BinaryHeap::new();
    heap.push(Reverse((Distance::ZERO, source)));

    while let Some(Reverse((current_distance, current))) = heap.pop() {
        if visited[current.index()] {
            continue;
        }
        visited[current.index()] = true;

        for (neighbor, weight) in graph.neighbor_ids(current) {
            let tentative = current_distance.add(weight);
            if tentative < distances[neighbor.index()] {
                distances[neighbor.index()] = tentative;
                predecessors[neighbor.index()] = Some(current);
                heap.push(Reverse((tentative, neighbor)));
            }
        }
    }

    debug!(
        source = graph.label(source),
        settled = visited.iter().filter(|v| **v).count(),
        nodes = n,
        "computed shortest-path tree"
    );

    Ok(ShortestPathTree {
        source,
        distances,
        predecessors,
    })
}

/// Walks predecessor links back from `target`.
///
/// Returns an empty path when the chain never reaches `source`, which covers
/// unreachable targets and broken or cyclic chains.
pub fn reconstruct_path(
    predecessors: &[Option<NodeId>],
    source: NodeId,
    target: NodeId,
) -> Vec<NodeId> {
    let mut path = vec![target];
    let mut current = target;

    while current != source {
        match predecessors.get(current.index()).copied().flatten() {
            Some(prev) if path.len() < predecessors.len() => {
                path.push(prev);
                current = prev;
            }
            _ => return Vec::new(),
        }
    }

    path.reverse();
    path
}

pub fn shortest_path(graph: &Graph, source: &str, target: &str) -> Result<PathResult> {
    let target = graph.node_id(target)?;
    let tree = compute_distances(graph, source)?;
    let path = tree
        .path_to(target)
        .into_iter()
        .map(|id| graph.label(id).to_string())
        .collect();

    Ok(PathResult {
        distance: tree.distance(target),
        path,
    })
}
