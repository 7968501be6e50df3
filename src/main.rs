use std::path::PathBuf;
use std::time::Instant;
use MapCut::Evaluate;
use MapCut::imbalance::{PartitionBalance, PartitionWeights};
use MapCut::io::{read_matrix_market_as_graph, read_metis_graph, read_partition,
                 write_communication_graph_to_file, write_report_to_file};
use MapCut::metrics::{Error, HierarchicalMetrics};
use MapCut::report::Report;
use MapCut::topology::Topology;
use clap::Parser;
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// Path of the graph file
    graph: PathBuf,

    /// Path of the partition file, one location id per vertex
    partition: PathBuf,

    /// Colon separated fan-out per hierarchy level, innermost first (e.g. 4:8:6)
    hierarchy: String,

    /// Colon separated distance per hierarchy level (e.g. 1:10:100)
    distances: String,

    /// Allowed imbalance
    epsilon: f64,

    /// Filename where the JSON report is written
    output: PathBuf,

    /// Lines of the partition file starting with this character are skipped
    #[arg(long, default_value_t = 'c')]
    partition_comment: char,

    /// Read the graph as a Matrix Market file
    #[arg(short, long)]
    matrix_market: bool,

    /// Also write the communication graph of the hierarchy to this file
    #[arg(long)]
    comm_graph: Option<PathBuf>,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "MapCut=info".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let args = Args::parse();
    let comment = u8::try_from(args.partition_comment)
        .map_err(|_| "partition comment marker must be an ASCII character")?;

    let start = Instant::now();
    let topology = Topology::from_colon_lists(&args.hierarchy, &args.distances)?;
    let graph = if args.matrix_market {
        read_matrix_market_as_graph(&args.graph)?
    } else {
        read_metis_graph(&args.graph)?
    };
    let partition = read_partition(&args.partition, comment)?;
    let io_time = start.elapsed();

    if graph.len() != partition.len() {
        return Err(Error::InputLenMismatch { expected: graph.len(), actual: partition.len() }.into());
    }
    let num_parts = topology.num_locations();

    let start = Instant::now();
    let stats = HierarchicalMetrics { topology: &topology }.evaluate(&partition, &graph)?;
    let partition_weights = PartitionWeights { num_parts }.evaluate(&partition, &graph)?;
    let partition_balance = PartitionBalance { num_parts }.evaluate(&partition, &graph)?;
    let processing_time = start.elapsed();

    let report = Report::new(&graph, stats, partition_weights, partition_balance, args.epsilon)
        .with_timings(io_time.as_secs_f64(), processing_time.as_secs_f64());
    write_report_to_file(&report, &args.output)?;
    if let Some(comm_graph) = &args.comm_graph {
        write_communication_graph_to_file(&topology, comm_graph)?;
    }

    info!(output = %args.output.display(), "wrote report");
    println!("Edge cut {:?}", report.stats.edge_cut);
    println!("Communication cost {:?}", report.stats.comm_cost);
    println!("Max balance {:?}", report.summary.max_balance);
    println!("Execution time {:?}", processing_time);
    Ok(())
}
