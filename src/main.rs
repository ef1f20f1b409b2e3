use clap::Parser;
use likesim::{analyze, DataPaths, DatasetLoader, EngineConfig};
use likesim_similarity::DEFAULT_PARALLEL_THRESHOLD;
use std::path::PathBuf;
use tracing::{info, Level};
use tracing_subscriber::FmtSubscriber;

/// Find the most similar users and companies in a job reaction log
#[derive(Parser, Debug)]
#[command(name = "likesim")]
#[command(about = "Most similar users and companies by shared likes", long_about = None)]
struct Args {
    /// Directory holding reactions.csv and jobs.csv
    #[arg(short, long, default_value = likesim_storage::DEFAULT_DATA_DIR)]
    data_dir: PathBuf,

    /// Reactions file, overrides the one in the data directory
    #[arg(long)]
    reactions: Option<PathBuf>,

    /// Jobs file, overrides the one in the data directory
    #[arg(long)]
    jobs: Option<PathBuf>,

    /// Score entity pairs on all cores
    #[arg(long)]
    parallel: bool,

    /// Minimum entity count before the parallel scan kicks in
    #[arg(long, default_value_t = DEFAULT_PARALLEL_THRESHOLD)]
    parallel_threshold: usize,

    /// Log level
    #[arg(long, default_value = "info")]
    log_level: String,
}

fn main() -> anyhow::Result<()> {
    let args = Args::parse();

    let log_level = match args.log_level.as_str() {
        "trace" => Level::TRACE,
        "debug" => Level::DEBUG,
        "info" => Level::INFO,
        "warn" => Level::WARN,
        "error" => Level::ERROR,
        _ => Level::INFO,
    };

    let subscriber = FmtSubscriber::builder()
        .with_max_level(log_level)
        .with_writer(std::io::stderr)
        .finish();
    tracing::subscriber::set_global_default(subscriber)?;

    info!("Starting likesim v{}", env!("CARGO_PKG_VERSION"));

    let mut paths = DataPaths::in_dir(&args.data_dir);
    if let Some(reactions) = args.reactions {
        paths.reactions = reactions;
    }
    if let Some(jobs) = args.jobs {
        paths.jobs = jobs;
    }
    info!("Reactions file: {:?}", paths.reactions);
    info!("Jobs file: {:?}", paths.jobs);

    let dataset = DatasetLoader::new(paths).load()?;

    let config = EngineConfig {
        parallel: args.parallel,
        parallel_threshold: args.parallel_threshold,
    };
    let report = analyze(&dataset.reactions, &dataset.jobs, config);

    for line in report.lines() {
        println!("{}", line);
    }

    info!("Done");
    Ok(())
}
