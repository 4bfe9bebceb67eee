use std::error::Error;
use std::path::PathBuf;

use clap::Parser;
use colref_graph::read_graph;
use colref_refine::serde_io::{report_to_json, write_report};
use colref_refine::{RefineConfig, Refiner};

mod logging;

#[derive(Parser, Debug)]
#[command(
    name = "colref",
    version,
    about = "Order graph vertices by iterated neighbourhood-signature refinement"
)]
struct Cli {
    /// Edge-list file with a `p` problem line followed by `tail head` pairs.
    graph: PathBuf,
    /// Increase diagnostic output (-v for rounds, -vv for full state dumps).
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
    /// YAML file with refinement settings.
    #[arg(long)]
    config: Option<PathBuf>,
    /// Stop after this many propagation rounds even if the order is still changing.
    ///
    /// Some graphs never reach a stable order; without a cap such inputs run
    /// until memory is exhausted.
    #[arg(long)]
    max_rounds: Option<usize>,
    /// Worker threads for the propagation step.
    #[arg(long)]
    threads: Option<usize>,
    /// Print the full JSON report instead of the bare order.
    #[arg(long)]
    json: bool,
    /// Also write the JSON report to this path.
    #[arg(long)]
    out: Option<PathBuf>,
}

fn main() -> Result<(), Box<dyn Error>> {
    let cli = Cli::parse();
    logging::init(cli.verbose);

    let mut config = match &cli.config {
        Some(path) => RefineConfig::load(path)?,
        None => RefineConfig::default(),
    };
    if let Some(max_rounds) = cli.max_rounds {
        config.max_rounds = Some(max_rounds);
    }
    if let Some(threads) = cli.threads {
        config.threads = threads;
    }

    let refiner = Refiner::new(config)?;
    let graph = read_graph(&cli.graph)?;
    let report = refiner.run(graph);

    if let Some(out) = &cli.out {
        write_report(out, &report)?;
    }
    if cli.json {
        println!("{}", report_to_json(&report)?);
    } else {
        let order: Vec<String> = report.order.iter().map(ToString::to_string).collect();
        println!("{}", order.join(" "));
    }
    Ok(())
}
