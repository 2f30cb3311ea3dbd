//! # Butterfly-path CLI
//!
//! Command-line interface for the butterfly-path library.
//! Plans shortest routes between named locations, interactively or one-shot.

use std::io::{self, Write};
use std::path::PathBuf;

use anyhow::{Context, Result};
use butterfly_path::{GraphDefinition, ShortestPathEngine};
use clap::Parser;
use log::{debug, error};

mod cli;

use cli::{render_menu, render_outcome, resolve_location, run_interactive, MenuConfig};

/// Command-line interface for butterfly-path
#[derive(Parser)]
#[command(name = "butterfly-path")]
#[command(about = "Shortest-path route planner between named locations")]
#[command(long_about = "Finds a shortest path between two locations of a weighted directed graph:
  butterfly-path                                  # Interactive menu over the built-in map
  butterfly-path --from 0 --to 6                  # Single query by menu number
  butterfly-path --from \"Penn Station\" --to 3     # Locations may be given by name
  butterfly-path --graph subway.json --list       # Show the locations of a custom graph

Graph files are JSON:
  {\"locations\": [\"A\", \"B\"], \"edges\": [{\"from\": 0, \"weight\": 5, \"to\": 1}]}")]
#[command(version = env!("BUTTERFLY_VERSION"))]
struct Cli {
    /// JSON graph definition; the built-in Manhattan map is used when omitted
    #[arg(short, long)]
    graph: Option<PathBuf>,

    /// Starting location (number or name) for a single query
    #[arg(long, requires = "to")]
    from: Option<String>,

    /// Destination (number or name) for a single query
    #[arg(long, requires = "from")]
    to: Option<String>,

    /// Print the location menu and exit
    #[arg(long)]
    list: bool,

    /// Unit printed after the path cost
    #[arg(long, default_value = "minutes")]
    unit: String,

    /// Enable verbose logging
    #[arg(short, long)]
    verbose: bool,
}

fn main() {
    if let Err(e) = run() {
        error!("❌ Error: {e:#}");
        std::process::exit(1);
    }
}

fn run() -> Result<()> {
    let cli = Cli::parse();

    // Initialize logging to stderr
    let mut logger = env_logger::Builder::from_default_env();
    logger.target(env_logger::Target::Stderr);
    if cli.verbose {
        logger.filter_level(log::LevelFilter::Debug);
    }
    logger.init();

    debug!("Butterfly-path v{} starting", env!("BUTTERFLY_VERSION"));

    let engine = load(&cli)?;
    let config = MenuConfig {
        unit: cli.unit.clone(),
        ..Default::default()
    };

    let stdout = io::stdout();
    let mut out = stdout.lock();

    if cli.list {
        write!(out, "{}", render_menu(engine.graph()))?;
        return Ok(());
    }

    if let (Some(from), Some(to)) = (&cli.from, &cli.to) {
        let graph = engine.graph();
        let src = resolve_location(from, graph).context("Invalid --from")?;
        let dest = resolve_location(to, graph).context("Invalid --to")?;
        let outcome = engine.shortest_path(src, dest)?;
        write!(out, "{}", render_outcome(graph, src, dest, &outcome, &config.unit)?)?;
        return Ok(());
    }

    let stdin = io::stdin();
    run_interactive(&engine, &config, &mut stdin.lock(), &mut out)
}

/// Build the engine from `--graph` or the built-in map
fn load(cli: &Cli) -> Result<ShortestPathEngine> {
    let definition = match &cli.graph {
        Some(path) => GraphDefinition::from_json_file(path)
            .with_context(|| format!("Failed to load graph definition {}", path.display()))?,
        None => GraphDefinition::reference(),
    };
    let engine = butterfly_path::engine(&definition).context("Failed to build graph")?;
    debug!(
        "Graph ready: {} locations, {} edges",
        engine.node_count(),
        engine.graph().edge_count()
    );
    Ok(engine)
}
