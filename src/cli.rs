use crate::simulation::modifiers::TrafficParams;
use clap::{Parser, ValueEnum};

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    Text,
    Json,
}

#[derive(Debug, Parser)]
#[command(name = "rushgraph")]
#[command(about = "Run shortest-path simulation for San Francisco landmarks.", long_about = None)]
pub struct Cli {
    /// Start node
    #[arg(long, default_value = "A")]
    pub source: String,

    /// Target node
    #[arg(long, default_value = "J")]
    pub target: String,

    /// Random seed for rush-hour scenario
    #[arg(long, default_value_t = 42)]
    pub seed: u64,

    #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
    pub output: OutputFormat,

    /// Include per-edge rush-hour simulation details in text output
    #[arg(long, default_value_t = false)]
    pub show_edge_events: bool,

    /// Mean of the traffic multiplier
    #[arg(long, default_value_t = TrafficParams::default().mean)]
    pub mean: f64,

    /// Standard deviation of the traffic multiplier
    #[arg(long, default_value_t = TrafficParams::default().std_dev)]
    pub std_dev: f64,

    /// Lower bound for the traffic multiplier
    #[arg(long, default_value_t = TrafficParams::default().min_factor)]
    pub min_factor: f64,

    /// Chance of a high-impact incident on each edge
    #[arg(long, default_value_t = TrafficParams::default().high_impact_probability)]
    pub high_impact_prob: f64,

    #[arg(long, default_value_t = TrafficParams::default().impact_min)]
    pub impact_min: f64,

    #[arg(long, default_value_t = TrafficParams::default().impact_max)]
    pub impact_max: f64,

    /// Log filter used when RUST_LOG is unset (logs go to stderr)
    #[arg(long, default_value = "warn")]
    pub log_level: String,
}

impl Cli {
    pub fn traffic_params(&self) -> TrafficParams {
        TrafficParams {
            mean: self.mean,
            std_dev: self.std_dev,
            min_factor: self.min_factor,
            high_impact_probability: self.high_impact_prob,
            impact_min: self.impact_min,
            impact_max: self.impact_max,
        }
    }
}
