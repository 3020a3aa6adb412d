use std::fmt;

#[derive(Debug, Clone, PartialEq)]
pub enum GraphError {
    /// Node label is not part of the graph
    NodeNotFound(String),

    /// No edge joins the two nodes
    EdgeNotFound(String, String),

    DuplicateNode(String),

    SelfLoop(String),

    /// Base weights must be positive
    ZeroWeight(String, String),

    /// Weights above `MAX_WEIGHT` could sum into the unreachable sentinel
    WeightTooLarge(String, String),

    /// `from -> to` exists but the reverse entry is missing or differs
    AsymmetricEdge { from: String, to: String },

    WeightCountMismatch { expected: usize, actual: usize },

    InvalidTrafficParams(String),
}

impl fmt::Display for GraphError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GraphError::NodeNotFound(n) => write!(f, "Node not found: {}", n),
            GraphError::EdgeNotFound(a, b) => write!(f, "Edge not found: {}-{}", a, b),
            GraphError::DuplicateNode(n) => write!(f, "Duplicate node: {}", n),
            GraphError::SelfLoop(n) => write!(f, "Self-loop on node: {}", n),
            GraphError::ZeroWeight(a, b) => write!(f, "Edge {}-{} has zero weight", a, b),
            GraphError::WeightTooLarge(a, b) => {
                write!(f, "Edge {}-{} exceeds the maximum weight", a, b)
            }
            GraphError::AsymmetricEdge { from, to } => {
                write!(f, "Edge {}-{} has no matching reverse entry", from, to)
            }
            GraphError::WeightCountMismatch { expected, actual } => {
                write!(f, "Expected {} edge weights, got {}", expected, actual)
            }
            GraphError::InvalidTrafficParams(e) => write!(f, "Invalid traffic parameters: {}", e),
        }
    }
}

impl std::error::Error for GraphError {}

pub type Result<T> = std::result::Result<T, GraphError>;
