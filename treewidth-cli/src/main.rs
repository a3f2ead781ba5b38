use std::fs;
use std::path::PathBuf;
use std::process::ExitCode;

use serde::Deserialize;
use structopt::StructOpt;
use treewidth::{decompose, Config, Graph, Hints, NeverCancel, Outcome};

/// Reads a plain-text edge list and prints its minimum-width tree
/// decomposition. This binary exists only to exercise the `treewidth`
/// library end to end; ingestion formats and output wiring are
/// deliberately minimal.
#[derive(Debug, StructOpt)]
#[structopt(name = "treewidth-cli")]
struct Opts {
    /// Path to a graph file: first line is `n`, every following
    /// non-empty line is `u v` (0-indexed vertex ids).
    graph_path: PathBuf,

    /// Optional TOML file of search knobs; see [`FileConfig`]. Flags below
    /// override whatever it sets.
    #[structopt(long)]
    config: Option<PathBuf>,

    /// Skip trial widths below this value.
    #[structopt(long)]
    lower_bound: Option<usize>,

    /// Give up once the trial width would reach this value.
    #[structopt(long)]
    upper_bound: Option<usize>,
}

/// On-disk counterpart of [`Hints`] and the glue-expansion guard in
/// [`Config`]. Parsed, never written; the core has no wire format of its
/// own, so this shape is entirely this binary's choice.
#[derive(Debug, Default, Deserialize)]
struct FileConfig {
    lower_bound: Option<usize>,
    upper_bound: Option<usize>,
    max_glue_iterations_per_pop: Option<usize>,
}

fn main() -> ExitCode {
    pretty_logger::init().expect("failed to initialise logger");

    let opts = Opts::from_args();

    let file_config = match &opts.config {
        Some(path) => match read_config(path) {
            Ok(config) => config,
            Err(message) => {
                eprintln!("error reading {}: {}", path.display(), message);
                return ExitCode::FAILURE;
            }
        },
        None => FileConfig::default(),
    };

    let graph = match read_graph(&opts.graph_path) {
        Ok(graph) => graph,
        Err(message) => {
            eprintln!("error reading {}: {}", opts.graph_path.display(), message);
            return ExitCode::FAILURE;
        }
    };

    let hints = Hints {
        lower_bound: opts.lower_bound.or(file_config.lower_bound),
        upper_bound: opts.upper_bound.or(file_config.upper_bound),
    };
    let config = match file_config.max_glue_iterations_per_pop {
        Some(cap) => Config {
            max_glue_iterations_per_pop: Some(cap),
        },
        None => Config::default(),
    };

    match decompose(&graph, hints, &config, &NeverCancel) {
        Ok(Outcome::Success(decomposition)) => {
            println!(
                "width {}, {} bags",
                decomposition.width,
                decomposition.bag_count()
            );
            for (i, bag) in decomposition.bags.iter().enumerate() {
                println!("  bag {}: {{{}}}", i, bag.vertices.join(", "));
            }
            for (a, b) in &decomposition.edges {
                println!("  edge {} -- {}", a, b);
            }
            ExitCode::SUCCESS
        }
        Ok(Outcome::Interrupted) => {
            eprintln!("search interrupted");
            ExitCode::FAILURE
        }
        Ok(Outcome::BoundExhausted) => {
            eprintln!("no decomposition found below the given upper bound");
            ExitCode::FAILURE
        }
        Err(e) => {
            eprintln!("invalid input: {}", e);
            ExitCode::FAILURE
        }
    }
}

fn read_config(path: &PathBuf) -> Result<FileConfig, String> {
    let text = fs::read_to_string(path).map_err(|e| e.to_string())?;
    toml::from_str(&text).map_err(|e| e.to_string())
}

fn read_graph(path: &PathBuf) -> Result<Graph, String> {
    let text = fs::read_to_string(path).map_err(|e| e.to_string())?;
    let mut lines = text.lines().filter(|line| !line.trim().is_empty());

    let n: usize = lines
        .next()
        .ok_or("file is empty, expected a vertex count on the first line")?
        .trim()
        .parse()
        .map_err(|_| "first line must be the vertex count")?;

    let mut edges = Vec::new();
    for line in lines {
        let mut parts = line.split_whitespace();
        let u: usize = parts
            .next()
            .ok_or("expected two vertex ids per edge line")?
            .parse()
            .map_err(|_| "vertex ids must be integers")?;
        let v: usize = parts
            .next()
            .ok_or("expected two vertex ids per edge line")?
            .parse()
            .map_err(|_| "vertex ids must be integers")?;
        edges.push((u, v));
    }

    Graph::new(n, edges).map_err(|e| e.to_string())
}
