use crate::graph::graph::{Graph, Weight};
use std::sync::LazyLock;

/// Ten San Francisco landmarks (A-J) and the travel time in minutes between
/// directly connected ones.
pub const LANDMARK_TABLE: &[(&str, &[(&str, Weight)])] = &[
    ("A", &[("B", 16), ("C", 16), ("D", 10)]),
    ("B", &[("A", 16), ("C", 5), ("E", 16), ("I", 17)]),
    ("C", &[("A", 16), ("B", 5), ("F", 9), ("H", 10), ("I", 16)]),
    ("D", &[("A", 10), ("E", 12), ("H", 18), ("I", 7)]),
    ("E", &[("B", 16), ("D", 12), ("I", 12)]),
    ("F", &[("C", 9), ("G", 8), ("I", 22)]),
    ("G", &[("F", 8), ("H", 7), ("I", 16)]),
    ("H", &[("C", 10), ("D", 18), ("G", 7), ("I", 14)]),
    (
        "I",
        &[
            ("B", 17),
            ("C", 16),
            ("D", 7),
            ("E", 12),
            ("F", 22),
            ("G", 16),
            ("H", 14),
            ("J", 3),
        ],
    ),
    ("J", &[("I", 3)]),
];

static BASE_GRAPH: LazyLock<Graph> = LazyLock::new(|| {
    Graph::from_table(LANDMARK_TABLE).expect("landmark table is symmetric with positive weights")
});

/// The fixed baseline graph. Built once and shared read-only.
pub fn base_graph() -> &'static Graph {
    &BASE_GRAPH
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_base_graph_shape() {
        let graph = base_graph();
        assert_eq!(10, graph.node_count());
        assert_eq!(19, graph.edge_count());
        let labels = graph.nodes().iter().map(|n| n.label()).collect::<Vec<_>>();
        assert_eq!(
            vec!["A", "B", "C", "D", "E", "F", "G", "H", "I", "J"],
            labels
        );
    }

    #[test]
    fn test_base_graph_matches_table() {
        let graph = base_graph();
        for (node, neighbors) in LANDMARK_TABLE {
            for (neighbor, weight) in neighbors.iter() {
                assert_eq!(*weight, graph.weight(node, neighbor).unwrap());
            }
            assert_eq!(neighbors.len(), graph.neighbors(node).unwrap().len());
        }
    }
}
