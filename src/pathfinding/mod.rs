pub mod dijkstra;
pub mod distance;
