use crate::error::Result;
use crate::graph::graph::{Graph, MAX_WEIGHT, Weight};
use crate::simulation::modifiers::{TrafficModifier, TrafficParams, TrafficSample};
use rand::{SeedableRng, rngs::StdRng};
use serde::Serialize;
use tracing::debug;

/// Record of how one undirected edge was perturbed.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct EdgeEvent {
    /// canonical orientation, smaller label first
    pub edge: (String, String),
    pub base_weight: Weight,
    pub traffic_factor: f64,
    pub high_impact_event: bool,
    pub impact_factor: f64,
    /// final_weight >= 1
    pub final_weight: Weight,
}

/// Rounds half to even, then clamps into `[1, MAX_WEIGHT]`.
pub fn final_weight(provisional: f64) -> Weight {
    provisional
        .round_ties_even()
        .max(1.0)
        .min(MAX_WEIGHT as f64) as Weight
}

/// Builds the rush-hour copy of `graph`.
///
/// Edges are visited once each in canonical order with a generator seeded
/// from `seed` alone, so the same graph and seed always give the same weights
/// and the same event log. `graph` itself is left untouched.
pub fn perturb(
    graph: &Graph,
    seed: u64,
    params: &TrafficParams,
) -> Result<(Graph, Vec<EdgeEvent>)> {
    let modifier = TrafficModifier::new(params)?;
    let mut rng = StdRng::seed_from_u64(seed);

    let mut weights = Vec::with_capacity(graph.edge_count());
    let mut events = Vec::with_capacity(graph.edge_count());

    for edge in graph.edges() {
        let base_weight = edge.weight();
        let sample: TrafficSample = modifier.sample(&mut rng);
        let weight = final_weight(sample.apply(base_weight as f64));
        let (a, b) = graph.edge_labels(edge);

        debug!(
            from = a,
            to = b,
            base_weight,
            traffic_factor = sample.traffic_factor,
            high_impact = sample.high_impact_event,
            final_weight = weight,
            "perturbed edge"
        );

        weights.push(weight);
        events.push(EdgeEvent {
            edge: (a.to_string(), b.to_string()),
            base_weight,
            traffic_factor: sample.traffic_factor,
            high_impact_event: sample.high_impact_event,
            impact_factor: sample.impact_factor,
            final_weight: weight,
        });
    }

    let rush_hour = graph.with_weights(&weights)?;
    Ok((rush_hour, events))
}
