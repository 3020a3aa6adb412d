use crate::pathfinding::dijkstra::PathResult;
use crate::scenario::scenario::ScenarioResult;
use crate::simulation::traffic::EdgeEvent;
use std::fmt;

/// Human-readable view of a scenario run.
pub struct TextReport<'a> {
    result: &'a ScenarioResult,
    show_edge_events: bool,
}

impl<'a> TextReport<'a> {
    pub fn new(result: &'a ScenarioResult, show_edge_events: bool) -> Self {
        Self {
            result,
            show_edge_events,
        }
    }
}

impl fmt::Display for TextReport<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let r = self.result;
        writeln!(f, "San Francisco Shortest Path Simulation")?;
        writeln!(f, "Source: {}  Target: {}  Seed: {}", r.source, r.target, r.seed)?;

        writeln!(f, "\nScenario 1 (Base):")?;
        write_path(f, &r.base)?;

        writeln!(f, "\nScenario 2 (Rush Hour):")?;
        write_path(f, &r.rush_hour)?;

        if self.show_edge_events {
            writeln!(f, "\nRush-hour edge events:")?;
            for event in &r.edge_events {
                write_event(f, event)?;
            }
        }
        Ok(())
    }
}

pub fn render_text(result: &ScenarioResult, show_edge_events: bool) -> String {
    TextReport::new(result, show_edge_events).to_string()
}

fn write_path(f: &mut fmt::Formatter<'_>, path: &PathResult) -> fmt::Result {
    if path.path.is_empty() {
        writeln!(f, "  Path: (no path)")?;
    } else {
        writeln!(f, "  Path: {}", path.path.join(" -> "))?;
    }
    if path.distance.is_finite() {
        writeln!(f, "  Travel time: {} minutes", path.distance)
    } else {
        writeln!(f, "  Travel time: {}", path.distance)
    }
}

fn write_event(f: &mut fmt::Formatter<'_>, e: &EdgeEvent) -> fmt::Result {
    writeln!(
        f,
        "  {}-{} | base={} | traffic={:.2} | high_impact={} | impact={:.2} | final={}",
        e.edge.0,
        e.edge.1,
        e.base_weight,
        e.traffic_factor,
        e.high_impact_event,
        e.impact_factor,
        e.final_weight
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::pathfinding::distance::Distance;

    fn sample() -> ScenarioResult {
        ScenarioResult {
            source: "A".into(),
            target: "J".into(),
            seed: 42,
            base: PathResult {
                distance: Distance::new(20),
                path: vec!["A".into(), "D".into(), "I".into(), "J".into()],
            },
            rush_hour: PathResult {
                distance: Distance::INFINITY,
                path: vec![],
            },
            edge_events: vec![EdgeEvent {
                edge: ("A".into(), "B".into()),
                base_weight: 16,
                traffic_factor: 2.104,
                high_impact_event: true,
                impact_factor: 0.5,
                final_weight: 42,
            }],
        }
    }

    #[test]
    fn test_text_layout() {
        let text = render_text(&sample(), false);
        let expected = "San Francisco Shortest Path Simulation\n\
                        Source: A  Target: J  Seed: 42\n\
                        \n\
                        Scenario 1 (Base):\n  Path: A -> D -> I -> J\n  Travel time: 20 minutes\n\
                        \n\
                        Scenario 2 (Rush Hour):\n  Path: (no path)\n  Travel time: unreachable\n";
        assert_eq!(expected, text);
    }

    #[test]
    fn test_edge_events_section() {
        let text = render_text(&sample(), true);
        assert!(text.contains("Rush-hour edge events:"));
        assert!(text.ends_with(
            "  A-B | base=16 | traffic=2.10 | high_impact=true | impact=0.50 | final=42\n"
        ));
        assert!(!render_text(&sample(), false).contains("edge events"));
    }

    #[test]
    fn test_report_displays_like_render() {
        let result = sample();
        assert_eq!(
            render_text(&result, true),
            format!("{}", TextReport::new(&result, true))
        );
    }
}
