use crate::error::Result;
use crate::graph::graph::Graph;
use crate::graph::landmarks::base_graph;
use crate::pathfinding::dijkstra::shortest_path;
use crate::scenario::scenario::ScenarioResult;
use crate::simulation::modifiers::TrafficParams;
use crate::simulation::traffic::perturb;
use tracing::info;

/// Baseline vs rush hour on the landmark graph with default traffic.
pub fn run_scenario(source: &str, target: &str, seed: u64) -> Result<ScenarioResult> {
    run_scenario_with(source, target, seed, &TrafficParams::default())
}

pub fn run_scenario_with(
    source: &str,
    target: &str,
    seed: u64,
    params: &TrafficParams,
) -> Result<ScenarioResult> {
    run_scenario_on(base_graph(), source, target, seed, params)
}

pub fn run_scenario_on(
    graph: &Graph,
    source: &str,
    target: &str,
    seed: u64,
    params: &TrafficParams,
) -> Result<ScenarioResult> {
    graph.node_id(source)?;
    graph.node_id(target)?;

    let base = shortest_path(graph, source, target)?;
    let (rush_graph, edge_events) = perturb(graph, seed, params)?;
    let rush_hour = shortest_path(&rush_graph, source, target)?;

    let result = ScenarioResult {
        source: source.to_string(),
        target: target.to_string(),
        seed,
        base,
        rush_hour,
        edge_events,
    };

    info!(
        source,
        target,
        seed,
        base = %result.base.distance,
        rush_hour = %result.rush_hour.distance,
        delay = ?result.delay(),
        incidents = result.incident_count(),
        "scenario finished"
    );

    Ok(result)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::GraphError;
    use crate::pathfinding::distance::Distance;

    fn path_weight(graph: &Graph, path: &[String]) -> u64 {
        path.windows(2)
            .map(|w| graph.weight(&w[0], &w[1]).unwrap())
            .sum()
    }

    #[test]
    fn test_default_scenario_baseline() {
        let result = run_scenario("A", "J", 42).unwrap();
        assert_eq!("A", result.source);
        assert_eq!("J", result.target);
        assert_eq!(42, result.seed);
        assert_eq!(Distance::new(20), result.base.distance);
        assert_eq!(vec!["A", "D", "I", "J"], result.base.path);
        assert_eq!(base_graph().edge_count(), result.edge_events.len());
    }

    #[test]
    fn test_rush_hour_route_is_consistent() {
        let result = run_scenario("A", "J", 42).unwrap();
        let (rush_graph, events) = perturb(base_graph(), 42, &TrafficParams::default()).unwrap();
        assert_eq!(events, result.edge_events);

        let distance = result.rush_hour.distance.value().unwrap();
        assert_eq!(distance, path_weight(&rush_graph, &result.rush_hour.path));
        assert_eq!("A", result.rush_hour.path.first().unwrap());
        assert_eq!("J", result.rush_hour.path.last().unwrap());
        // every edge costs at least its base weight under the default clamp
        assert!(result.rush_hour.distance >= result.base.distance);
        assert!(result.delay().unwrap() >= 0);
    }

    #[test]
    fn test_scenario_repeatable() {
        assert_eq!(
            run_scenario("B", "G", 7).unwrap(),
            run_scenario("B", "G", 7).unwrap()
        );
    }

    #[test]
    fn test_unknown_endpoints_not_found() {
        assert_eq!(
            GraphError::NodeNotFound("X".into()),
            run_scenario("X", "J", 42).unwrap_err()
        );
        assert_eq!(
            GraphError::NodeNotFound("Y".into()),
            run_scenario("A", "Y", 42).unwrap_err()
        );
    }

    #[test]
    fn test_disconnected_graph_scenario() {
        let graph =
            Graph::from_edges(&["a", "b", "c"], &[("a", "b", 4)]).unwrap();
        let result =
            run_scenario_on(&graph, "a", "c", 1, &TrafficParams::default()).unwrap();
        assert_eq!(Distance::INFINITY, result.base.distance);
        assert!(result.base.path.is_empty());
        assert_eq!(Distance::INFINITY, result.rush_hour.distance);
        assert!(result.rush_hour.path.is_empty());
        assert_eq!(None, result.delay());
        assert_eq!(1, result.edge_events.len());
    }
}
