//! Location menu and input handling for the interactive planner
//!
//! Choices can be given as a menu number or a location name. Misspelled
//! names get a fuzzy "did you mean" suggestion.

use std::io::{BufRead, Write};

use anyhow::{anyhow, Result};
use butterfly_path::{Graph, NodeId, ShortestPathEngine};
use log::warn;
use strsim::{jaro_winkler, normalized_levenshtein};

use crate::cli::render::render_outcome;

/// Minimum combined similarity for a name suggestion
const SUGGESTION_THRESHOLD: f64 = 0.65;

/// Settings for the interactive planner
#[derive(Debug, Clone)]
pub struct MenuConfig {
    /// Used when the starting location input is invalid
    pub default_source: NodeId,

    /// Used when the destination input is invalid; `None` means the last node
    pub default_destination: Option<NodeId>,

    /// Unit printed after the path cost
    pub unit: String,
}

impl Default for MenuConfig {
    fn default() -> Self {
        Self {
            default_source: 0,
            default_destination: None,
            unit: "minutes".to_string(),
        }
    }
}

impl MenuConfig {
    fn destination_for(&self, graph: &Graph) -> NodeId {
        self.default_destination
            .unwrap_or_else(|| graph.node_count().saturating_sub(1))
    }
}

/// A parsed menu choice
#[derive(Debug, Clone, PartialEq)]
pub enum Choice {
    Quit,
    Location(NodeId),
    Invalid { suggestion: Option<String> },
}

/// Numbered list of every location
pub fn render_menu(graph: &Graph) -> String {
    let mut menu = String::from("Menu\n");
    for (id, node) in graph.nodes() {
        menu.push_str(&format!("#{id}: {}\n", node.name));
    }
    menu
}

/// Interpret one line of user input
pub fn parse_choice(input: &str, graph: &Graph) -> Choice {
    let input = input.trim();
    if input == "-1" {
        return Choice::Quit;
    }
    if let Ok(id) = input.parse::<NodeId>() {
        return match graph.check(id) {
            Ok(()) => Choice::Location(id),
            Err(_) => Choice::Invalid { suggestion: None },
        };
    }
    if let Some(id) = graph.find(input) {
        return Choice::Location(id);
    }
    Choice::Invalid {
        suggestion: suggest_location(input, graph),
    }
}

/// Resolve a location strictly, for non-interactive use
pub fn resolve_location(input: &str, graph: &Graph) -> Result<NodeId> {
    match parse_choice(input, graph) {
        Choice::Location(id) => Ok(id),
        Choice::Invalid {
            suggestion: Some(name),
        } => Err(anyhow!("Unknown location '{input}'. Did you mean '{name}'?")),
        _ => Err(anyhow!(
            "Unknown location '{input}' (expected a name or a number from 0 to {})",
            graph.node_count().saturating_sub(1)
        )),
    }
}

/// Closest location name by Jaro-Winkler (70%) plus normalized Levenshtein (30%)
pub fn suggest_location(input: &str, graph: &Graph) -> Option<String> {
    let input = input.trim().to_lowercase();
    if input.is_empty() {
        return None;
    }

    let mut best: Option<(&str, f64)> = None;
    for (_, node) in graph.nodes() {
        let candidate = node.name.to_lowercase();
        let score =
            jaro_winkler(&input, &candidate) * 0.7 + normalized_levenshtein(&input, &candidate) * 0.3;
        if score >= SUGGESTION_THRESHOLD && best.is_none_or(|(_, s)| score > s) {
            best = Some((node.name.as_str(), score));
        }
    }
    best.map(|(name, _)| name.to_string())
}

/// Run the menu loop until the user quits or input ends
pub fn run_interactive<R: BufRead, W: Write>(
    engine: &ShortestPathEngine,
    config: &MenuConfig,
    input: &mut R,
    output: &mut W,
) -> Result<()> {
    let graph = engine.graph();
    if graph.is_empty() {
        return Err(anyhow!("graph has no locations"));
    }
    let default_destination = config.destination_for(graph);
    graph.check(config.default_source)?;
    graph.check(default_destination)?;

    loop {
        writeln!(output, "{}", render_menu(graph))?;

        let src = match prompt(
            input,
            output,
            graph,
            "Choose a starting location(-1 to quit): ",
            config.default_source,
        )? {
            Some(id) => id,
            None => break,
        };
        writeln!(output, "Starting at {}.", graph.name(src)?)?;

        let dest = match prompt(
            input,
            output,
            graph,
            "Now, choose a destination(-1 to quit): ",
            default_destination,
        )? {
            Some(id) => id,
            None => break,
        };

        let outcome = engine.shortest_path(src, dest)?;
        write!(output, "{}", render_outcome(graph, src, dest, &outcome, &config.unit)?)?;
    }

    output.flush()?;
    Ok(())
}

/// Ask for one location. `None` means quit or end of input.
fn prompt<R: BufRead, W: Write>(
    input: &mut R,
    output: &mut W,
    graph: &Graph,
    question: &str,
    default: NodeId,
) -> Result<Option<NodeId>> {
    write!(output, "{question}")?;
    output.flush()?;

    let mut line = String::new();
    if input.read_line(&mut line)? == 0 {
        return Ok(None);
    }

    match parse_choice(&line, graph) {
        Choice::Quit => Ok(None),
        Choice::Location(id) => Ok(Some(id)),
        Choice::Invalid { suggestion } => {
            warn!("Invalid location input {:?}", line.trim());
            if let Some(name) = suggestion {
                writeln!(output, "Did you mean '{name}'?")?;
            }
            writeln!(output, "Not a valid input. option {default} chosen by default.")?;
            writeln!(output)?;
            Ok(Some(default))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use butterfly_path::GraphDefinition;
    use std::io::Cursor;

    fn reference() -> ShortestPathEngine {
        butterfly_path::engine(&GraphDefinition::reference()).unwrap()
    }

    fn session(script: &str) -> String {
        let engine = reference();
        let mut input = Cursor::new(script.as_bytes().to_vec());
        let mut output = Vec::new();
        run_interactive(&engine, &MenuConfig::default(), &mut input, &mut output).unwrap();
        String::from_utf8(output).unwrap()
    }

    #[test]
    fn test_render_menu() {
        let graph = GraphDefinition::reference().build().unwrap();
        let menu = render_menu(&graph);
        assert!(menu.starts_with("Menu\n#0: Empire State Building\n"));
        assert!(menu.contains("#6: Grand Army Plaza\n"));
    }

    #[test]
    fn test_parse_choice_numbers() {
        let graph = GraphDefinition::reference().build().unwrap();
        assert_eq!(parse_choice("-1\n", &graph), Choice::Quit);
        assert_eq!(parse_choice(" 3 ", &graph), Choice::Location(3));
        assert_eq!(parse_choice("7", &graph), Choice::Invalid { suggestion: None });
        assert_eq!(parse_choice("-2", &graph), Choice::Invalid { suggestion: None });
    }

    #[test]
    fn test_parse_choice_names() {
        let graph = GraphDefinition::reference().build().unwrap();
        assert_eq!(parse_choice("penn station", &graph), Choice::Location(1));
        assert_eq!(
            parse_choice("Pen Staton", &graph),
            Choice::Invalid {
                suggestion: Some("Penn Station".to_string())
            }
        );
        assert_eq!(parse_choice("", &graph), Choice::Invalid { suggestion: None });
    }

    #[test]
    fn test_resolve_location() {
        let graph = GraphDefinition::reference().build().unwrap();
        assert_eq!(resolve_location("Wall Street Station", &graph).unwrap(), 4);
        assert_eq!(resolve_location("5", &graph).unwrap(), 5);
        let err = resolve_location("42", &graph).unwrap_err();
        assert!(err.to_string().contains("0 to 6"));
    }

    #[test]
    fn test_session_single_query() {
        let out = session("0\n6\n-1\n");
        assert!(out.contains("Starting at Empire State Building."));
        assert!(out.contains("A shortest path from Empire State Building to Grand Army Plaza:"));
        assert!(out.contains("This path takes approximately 39 minutes to navigate."));
        // menu shown again before quitting
        assert_eq!(out.matches("Menu\n").count(), 2);
    }

    #[test]
    fn test_session_defaults_invalid_input() {
        let out = session("99\nnowhere\n");
        assert!(out.contains("Not a valid input. option 0 chosen by default."));
        assert!(out.contains("Not a valid input. option 6 chosen by default."));
        assert!(out.contains("A shortest path from Empire State Building to Grand Army Plaza:"));
    }

    #[test]
    fn test_session_quit_on_destination() {
        let out = session("2\n-1\n");
        assert!(out.contains("Starting at Rector Street Station."));
        assert!(!out.contains("A shortest path"));
    }

    #[test]
    fn test_session_ends_on_eof() {
        let out = session("");
        assert!(out.contains("Choose a starting location(-1 to quit): "));
        assert!(!out.contains("Starting at"));
    }
}
