pub mod edge;
pub mod graph;
pub mod landmarks;
pub mod node;
