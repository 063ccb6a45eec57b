//! tanbayes: learn a Naive Bayes or TAN network from an ARFF training file
//! and classify an ARFF test file with it.
//!
//! Usage:
//!   tanbayes <TRAIN> <TEST> <TYPE>            # TYPE is n, nl, t or tl
//!   tanbayes <TRAIN> <TEST> <TYPE> -o json    # whole report as JSON
//!   tanbayes <TRAIN> <TEST> tl --config learner.json

use anyhow::{Context, Result};
use clap::Parser;
use std::path::PathBuf;
use std::process;
use tanbayes::classifiers::bayes::LearnerConfig;
use tanbayes::streams::{load_instances, load_instances_for};
use tanbayes::tasks::TrainTestTask;
use tanbayes::ui::report::render;
use tanbayes::ui::types::choices::{LearnerChoice, OutputFormat};
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "tanbayes")]
#[command(version)]
#[command(about = "Naive Bayes and Tree-Augmented Naive Bayes over nominal ARFF data")]
struct Cli {
    /// Training set (ARFF, nominal attributes only)
    #[arg(value_name = "TRAIN")]
    train: PathBuf,

    /// Test set, read against the training set's attributes
    #[arg(value_name = "TEST")]
    test: PathBuf,

    /// Learner: n, nl, t, tl, naive, naive-laplace, tan or tan-laplace
    #[arg(value_name = "TYPE")]
    learner: String,

    /// JSON learner description that overrides TYPE
    #[arg(short, long, value_name = "FILE")]
    config: Option<PathBuf>,

    /// Output format
    #[arg(short, long, value_enum, default_value_t = OutputFormat::Summary)]
    output: OutputFormat,
}

fn init_tracing() {
    let filter = EnvFilter::try_from_env("TANBAYES_LOG").unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

fn run(cli: &Cli) -> Result<String> {
    let config: LearnerConfig = match &cli.config {
        Some(path) => LearnerChoice::from_file(path)
            .with_context(|| format!("reading learner config '{}'", path.display()))?
            .into(),
        None => cli.learner.parse()?,
    };

    let training = load_instances(&cli.train)
        .with_context(|| format!("reading training set '{}'", cli.train.display()))?;
    let test = load_instances_for(&cli.test, &training.shared_header())
        .with_context(|| format!("reading test set '{}'", cli.test.display()))?;

    let mut task = TrainTestTask::new(training, test, config)?;
    let report = task.run()?;
    Ok(render(&report, cli.output)?)
}

fn main() {
    init_tracing();
    let cli = Cli::parse();
    match run(&cli) {
        Ok(text) => print!("{text}"),
        Err(e) => {
            eprintln!("Error: {e:#}");
            process::exit(1);
        }
    }
}
