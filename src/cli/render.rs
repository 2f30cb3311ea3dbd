//! Text rendering of query results for the command-line interface

use butterfly_path::{Graph, NodeId, PathOutcome, Result};

/// Render a query outcome the way the planner prints it
pub fn render_outcome(
    graph: &Graph,
    src: NodeId,
    dest: NodeId,
    outcome: &PathOutcome,
    unit: &str,
) -> Result<String> {
    let from = graph.name(src)?;
    let to = graph.name(dest)?;

    let route = match outcome {
        PathOutcome::Found(route) => route,
        PathOutcome::Unreachable => {
            return Ok(format!("\n\nNo path exists from {from} to {to}.\n\n"));
        }
    };

    let stops = route
        .nodes
        .iter()
        .map(|&id| graph.name(id))
        .collect::<Result<Vec<_>>>()?;

    Ok(format!(
        "\n\nA shortest path from {from} to {to}:\n\n{}\n\nThis path takes approximately {} {unit} to navigate.\n\n",
        stops.join("\nto\n"),
        route.cost
    ))
}

#[cfg(test)]
mod tests {
    use super::*;
    use butterfly_path::Route;

    fn graph() -> Graph {
        Graph::with_names(["Home", "Park", "Office"])
    }

    #[test]
    fn test_render_found() {
        let outcome = PathOutcome::Found(Route {
            nodes: vec![0, 1, 2],
            cost: 17,
            settled: 3,
        });
        let text = render_outcome(&graph(), 0, 2, &outcome, "minutes").unwrap();
        assert_eq!(
            text,
            "\n\nA shortest path from Home to Office:\n\nHome\nto\nPark\nto\nOffice\n\nThis path takes approximately 17 minutes to navigate.\n\n"
        );
    }

    #[test]
    fn test_render_trivial() {
        let outcome = PathOutcome::Found(Route {
            nodes: vec![1],
            cost: 0,
            settled: 1,
        });
        let text = render_outcome(&graph(), 1, 1, &outcome, "km").unwrap();
        assert!(text.contains("\n\nPark\n\n"));
        assert!(text.contains("approximately 0 km"));
    }

    #[test]
    fn test_render_unreachable() {
        let text = render_outcome(&graph(), 2, 0, &PathOutcome::Unreachable, "minutes").unwrap();
        assert_eq!(text, "\n\nNo path exists from Office to Home.\n\n");
    }

    #[test]
    fn test_render_rejects_bad_id() {
        assert!(render_outcome(&graph(), 0, 9, &PathOutcome::Unreachable, "minutes").is_err());
    }
}
