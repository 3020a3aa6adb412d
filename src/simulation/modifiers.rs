use crate::error::{GraphError, Result};
use rand::Rng;
use rand_distr::{Distribution, Normal};
use serde::Serialize;

/// Knobs of the rush-hour model.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct TrafficParams {
    /// mean of the normal traffic multiplier
    pub mean: f64,
    /// std_dev >= 0.0
    pub std_dev: f64,
    /// lower clamp for the traffic multiplier
    pub min_factor: f64,
    /// chance of an incident per edge, [0.0, 1.0]
    pub high_impact_probability: f64,
    pub impact_min: f64,
    /// impact_max >= impact_min
    pub impact_max: f64,
}

impl Default for TrafficParams {
    fn default() -> Self {
        Self {
            mean: 2.0,
            std_dev: 0.5,
            min_factor: 1.0,
            high_impact_probability: 0.2,
            impact_min: 0.5,
            impact_max: 2.0,
        }
    }
}

impl TrafficParams {
    pub fn validate(&self) -> Result<()> {
        let fields = [
            ("mean", self.mean),
            ("std_dev", self.std_dev),
            ("min_factor", self.min_factor),
            ("high_impact_probability", self.high_impact_probability),
            ("impact_min", self.impact_min),
            ("impact_max", self.impact_max),
        ];
        if let Some((name, _)) = fields.iter().find(|(_, v)| !v.is_finite()) {
            return Err(GraphError::InvalidTrafficParams(format!(
                "{} must be finite",
                name
            )));
        }
        if self.std_dev < 0.0 {
            return Err(GraphError::InvalidTrafficParams(
                "std_dev must be >= 0".into(),
            ));
        }
        if !(0.0..=1.0).contains(&self.high_impact_probability) {
            return Err(GraphError::InvalidTrafficParams(
                "high_impact_probability must be within [0, 1]".into(),
            ));
        }
        if self.impact_min > self.impact_max {
            return Err(GraphError::InvalidTrafficParams(
                "impact_min must not exceed impact_max".into(),
            ));
        }
        if !(self.impact_max - self.impact_min).is_finite() {
            return Err(GraphError::InvalidTrafficParams(
                "impact range is too wide".into(),
            ));
        }
        Ok(())
    }
}

/// Multipliers drawn for one edge.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TrafficSample {
    pub traffic_factor: f64,
    pub high_impact_event: bool,
    /// 0.0 unless `high_impact_event`
    pub impact_factor: f64,
}

impl TrafficSample {
    pub fn apply(&self, base_weight: f64) -> f64 {
        base_weight * self.traffic_factor + base_weight * self.impact_factor
    }
}

pub struct TrafficModifier {
    congestion: Normal<f64>,
    min_factor: f64,
    high_impact_probability: f64,
    impact_min: f64,
    impact_max: f64,
}

impl TrafficModifier {
    pub fn new(params: &TrafficParams) -> Result<Self> {
        params.validate()?;
        let congestion = Normal::new(params.mean, params.std_dev)
            .map_err(|e| GraphError::InvalidTrafficParams(e.to_string()))?;
        Ok(Self {
            congestion,
            min_factor: params.min_factor,
            high_impact_probability: params.high_impact_probability,
            impact_min: params.impact_min,
            impact_max: params.impact_max,
        })
    }

    /// Draws in a fixed order: congestion, incident roll, then the impact
    /// multiplier only when an incident happened.
    pub fn sample<R: Rng>(&self, rng: &mut R) -> TrafficSample {
        let traffic_factor = self.congestion.sample(rng).max(self.min_factor);
        let high_impact_event = rng.gen_range(0.0..1.0) < self.high_impact_probability;
        let impact_factor = if high_impact_event {
            rng.gen_range(self.impact_min..=self.impact_max)
        } else {
            0.0
        };
        TrafficSample {
            traffic_factor,
            high_impact_event,
            impact_factor,
        }
    }
}
