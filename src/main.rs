use anyhow::{Context, Result};
use clap::Parser;
use rushgraph::cli::{Cli, OutputFormat};
use rushgraph::report::json::render_json;
use rushgraph::report::text::render_text;
use rushgraph::run_scenario_with;
use tracing_subscriber::EnvFilter;

fn init_logging(level: &str) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(&cli.log_level);

    let result = run_scenario_with(&cli.source, &cli.target, cli.seed, &cli.traffic_params())
        .with_context(|| format!("failed to simulate {} -> {}", cli.source, cli.target))?;

    match cli.output {
        OutputFormat::Json => {
            println!("{}", render_json(&result).context("failed to serialize result")?)
        }
        OutputFormat::Text => print!("{}", render_text(&result, cli.show_edge_events)),
    }
    Ok(())
}
