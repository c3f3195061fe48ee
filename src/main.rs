use std::path::PathBuf;

use anyhow::{Context, ensure};
use clap::Parser;
use indicatif::{ProgressBar, ProgressStyle};
use tracing_subscriber::EnvFilter;

use rust_book_normalize::{BatchConfig, Report, Resources, run_batch};

#[derive(Parser)]
#[command(name = "book-normalize")]
#[command(about = "Normalize a list of Gutenberg books and print a Markdown report")]
struct Args {
    /// Batch configuration file (booklist.json)
    config: PathBuf,

    /// Log filter used when RUST_LOG is not set
    #[arg(long, default_value = "info")]
    log_level: String,

    /// Books processed in parallel (overrides the config file)
    #[arg(short, long)]
    jobs: Option<usize>,

    /// No progress bar
    #[arg(short, long)]
    quiet: bool,
}

fn main() -> anyhow::Result<()> {
    let args = Args::parse();

    let filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(&args.log_level))
        .context("invalid --log-level")?;
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();

    let mut config = BatchConfig::from_file(&args.config)
        .with_context(|| format!("cannot load {}", args.config.display()))?;
    if let Some(jobs) = args.jobs {
        ensure!(jobs > 0, "--jobs must be at least 1");
        config.jobs = jobs;
    }

    let res = Resources::load(&config.resources).context("cannot load linguistic resources")?;

    let pb = if args.quiet {
        ProgressBar::hidden()
    } else {
        let pb = ProgressBar::new(config.booklist.len() as u64);
        pb.set_style(
            ProgressStyle::default_bar()
                .template("{spinner} [{elapsed_precise}] {bar:40} {pos}/{len} {msg}")
                .context("invalid progress template")?,
        );
        pb
    };

    let reports = run_batch(&res, &config, |report| {
        pb.set_message(report.name.clone());
        pb.inc(1);
    })?;
    pb.finish_and_clear();

    print!("{}", Report::new(&reports, config.top_n, config.longest_k));
    Ok(())
}
