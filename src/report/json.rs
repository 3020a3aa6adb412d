use crate::scenario::scenario::ScenarioResult;

pub fn render_json(result: &ScenarioResult) -> serde_json::Result<String> {
    serde_json::to_string_pretty(result)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::scenario::rush_hour::run_scenario;
    use serde_json::Value;

    #[test]
    fn test_json_exposes_every_field() {
        let result = run_scenario("A", "J", 42).unwrap();
        let value: Value = serde_json::from_str(&render_json(&result).unwrap()).unwrap();

        assert_eq!("A", value["source"]);
        assert_eq!("J", value["target"]);
        assert_eq!(42, value["seed"]);
        assert_eq!(20, value["base"]["distance"]);
        assert_eq!(serde_json::json!(["A", "D", "I", "J"]), value["base"]["path"]);
        assert!(value["rush_hour"]["distance"].is_u64());

        let events = value["edge_events"].as_array().unwrap();
        assert_eq!(result.edge_events.len(), events.len());
        for (event, json) in result.edge_events.iter().zip(events) {
            assert_eq!(
                serde_json::json!([event.edge.0, event.edge.1]),
                json["edge"]
            );
            assert_eq!(event.base_weight, json["base_weight"].as_u64().unwrap());
            assert_eq!(event.final_weight, json["final_weight"].as_u64().unwrap());
            assert_eq!(
                event.high_impact_event,
                json["high_impact_event"].as_bool().unwrap()
            );
            // full precision survives the round trip
            assert_eq!(event.traffic_factor, json["traffic_factor"].as_f64().unwrap());
            assert_eq!(event.impact_factor, json["impact_factor"].as_f64().unwrap());
        }
    }

    #[test]
    fn test_unreachable_distance_is_null() {
        use crate::graph::graph::Graph;
        use crate::scenario::rush_hour::run_scenario_on;
        use crate::simulation::modifiers::TrafficParams;

        let graph = Graph::from_edges(&["a", "b"], &[]).unwrap();
        let result = run_scenario_on(&graph, "a", "b", 0, &TrafficParams::default()).unwrap();
        let value: Value = serde_json::from_str(&render_json(&result).unwrap()).unwrap();
        assert!(value["base"]["distance"].is_null());
        assert_eq!(serde_json::json!([]), value["base"]["path"]);
        assert_eq!(serde_json::json!([]), value["edge_events"]);
    }
}
