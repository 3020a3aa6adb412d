use crate::pathfinding::dijkstra::PathResult;
use crate::simulation::traffic::EdgeEvent;
use serde::Serialize;

/// Outcome of one run: the baseline and rush-hour routes side by side.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ScenarioResult {
    pub source: String,
    pub target: String,
    pub seed: u64,
    pub base: PathResult,
    pub rush_hour: PathResult,
    pub edge_events: Vec<EdgeEvent>,
}

impl ScenarioResult {
    /// Extra travel time caused by rush hour, when both routes exist.
    pub fn delay(&self) -> Option<i128> {
        let base = self.base.distance.value()?;
        let rush = self.rush_hour.distance.value()?;
        Some(i128::from(rush) - i128::from(base))
    }

    pub fn incident_count(&self) -> usize {
        self.edge_events
            .iter()
            .filter(|e| e.high_impact_event)
            .count()
    }
}
