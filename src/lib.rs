pub mod cli;
pub mod error;
pub mod graph;
pub mod pathfinding;
pub mod report;
pub mod scenario;
pub mod simulation;

pub use error::{GraphError, Result};
pub use graph::graph::{Graph, MAX_WEIGHT, Weight};
pub use graph::landmarks::base_graph;
pub use pathfinding::dijkstra::{PathResult, compute_distances, reconstruct_path, shortest_path};
pub use pathfinding::distance::Distance;
pub use scenario::rush_hour::{run_scenario, run_scenario_on, run_scenario_with};
pub use scenario::scenario::ScenarioResult;
pub use simulation::modifiers::TrafficParams;
pub use simulation::traffic::{EdgeEvent, perturb};
