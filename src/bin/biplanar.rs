use std::path::{Path, PathBuf};

use clap::{Args, Parser, Subcommand, ValueEnum};
use color_eyre::eyre::{bail, eyre};

use biplanar::generators;
use biplanar::io::{load_edge_list, load_partition, EdgeList};
use biplanar::ordering::DifficultyScore;
use biplanar::planarity::DmpOracle;
use biplanar::solver::{check_edges, SearchConfig, Strategy, Verdict};

#[derive(Debug, Parser)]
#[command(author, version, about)]
struct Cli {
    #[command(subcommand)]
    command: Command,

    /// Log level (off, error, warn, info, debug, trace).
    #[arg(long, value_name = "LEVEL", default_value = "info", global = true)]
    log_level: simplelog::LevelFilter,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Decide whether a graph is biplanar.
    Check(CheckArgs),

    /// Validate a partition file against a graph.
    Verify {
        /// Edge list of the graph.
        #[arg(value_name = "GRAPH")]
        graph: PathBuf,

        /// Partition file (two edge lists separated by a blank line).
        #[arg(value_name = "PARTITION")]
        partition: PathBuf,
    },
}

#[derive(Debug, Args)]
struct CheckArgs {
    /// Edge list file.
    #[arg(value_name = "FILE", required_unless_present_any = ["complete", "strong_product_path"])]
    file: Option<PathBuf>,

    /// Use the complete graph on N vertices.
    #[arg(long, value_name = "N", conflicts_with = "file")]
    complete: Option<usize>,

    /// Use the strong product of a path on A vertices...
    #[arg(long, value_name = "A", requires = "strong_product_complete", conflicts_with_all = ["file", "complete"])]
    strong_product_path: Option<usize>,

    /// ...and a complete graph on B vertices.
    #[arg(long, value_name = "B", requires = "strong_product_path")]
    strong_product_complete: Option<usize>,

    #[arg(long, value_enum, default_value_t = StrategyArg::Sat)]
    strategy: StrategyArg,

    /// How endpoint degrees are combined when ordering edges.
    #[arg(long, value_enum, default_value_t = ScoreArg::Sum)]
    score: ScoreArg,

    /// Disable memoization in the backtracking search.
    #[arg(long)]
    no_memo: bool,

    /// Query the planarity oracle on one side at a time.
    #[arg(long)]
    sequential_oracle: bool,

    /// Write the partition here instead of printing it.
    #[arg(short, long, value_name = "FILE")]
    output: Option<PathBuf>,
}

#[derive(Debug, Copy, Clone, ValueEnum)]
enum StrategyArg {
    Backtracking,
    Sat,
}

#[derive(Debug, Copy, Clone, ValueEnum)]
enum ScoreArg {
    Sum,
    Max,
}

impl CheckArgs {
    fn graph(&self) -> color_eyre::Result<EdgeList> {
        if let Some(path) = &self.file {
            return Ok(load_edge_list(path)?);
        }
        if let Some(n) = self.complete {
            return Ok(EdgeList {
                n,
                edges: generators::complete(n),
            });
        }
        match (self.strong_product_path, self.strong_product_complete) {
            (Some(a), Some(b)) => Ok(EdgeList {
                n: a * b,
                edges: generators::strong_product(&generators::path(a), a, &generators::complete(b), b),
            }),
            _ => Err(eyre!("no graph given")),
        }
    }

    fn config(&self) -> SearchConfig {
        let strategy = match self.strategy {
            StrategyArg::Backtracking => Strategy::Backtracking,
            StrategyArg::Sat => Strategy::SatCegar,
        };
        let score = match self.score {
            ScoreArg::Sum => DifficultyScore::Sum,
            ScoreArg::Max => DifficultyScore::Max,
        };
        SearchConfig::default()
            .with_strategy(strategy)
            .with_score(score)
            .with_memo(!self.no_memo)
            .with_parallel_oracle(!self.sequential_oracle)
    }
}

fn check(args: &CheckArgs) -> color_eyre::Result<()> {
    let graph = args.graph()?;
    let config = args.config();
    println!("Graph: {} vertices, {} edges", graph.n, graph.edges.len());
    println!("Strategy: {}", config.strategy);

    let (verdict, stats) = check_edges(&graph.edges, graph.n, &config, &DmpOracle)?;
    println!("Result: {}", verdict);
    if let Verdict::Biplanar(partition) = &verdict {
        match &args.output {
            Some(path) => {
                partition.save(path)?;
                println!("Partition written to {}", path.display());
            }
            None => {
                println!("\nFirst side ({} edges):", partition.first().len());
                for e in partition.first() {
                    println!("{}", e);
                }
                println!("\nSecond side ({} edges):", partition.second().len());
                for e in partition.second() {
                    println!("{}", e);
                }
                println!();
            }
        }
    }
    println!("{}", stats);
    Ok(())
}

fn verify(graph: &Path, partition: &Path) -> color_eyre::Result<()> {
    let graph = load_edge_list(graph)?;
    let partition = load_partition(partition)?;
    match partition.validate(&graph.edges, graph.n, &DmpOracle) {
        Ok(()) => {
            println!(
                "Valid biplanar partition: {} + {} edges",
                partition.first().len(),
                partition.second().len()
            );
            Ok(())
        }
        Err(defect) => bail!("invalid partition: {}", defect),
    }
}

fn main() -> color_eyre::Result<()> {
    color_eyre::install()?;

    let cli = Cli::parse();

    simplelog::TermLogger::init(
        cli.log_level,
        simplelog::Config::default(),
        simplelog::TerminalMode::Mixed,
        simplelog::ColorChoice::Auto,
    )?;

    let time_total = std::time::Instant::now();

    match &cli.command {
        Command::Check(args) => check(args)?,
        Command::Verify { graph, partition } => verify(graph, partition)?,
    }

    let time_total = time_total.elapsed();
    println!("Done in {:.3} s", time_total.as_secs_f64());

    Ok(())
}
