//! Trains a net on a built-in, linearly separable toy set and reports its accuracy.
//!
//! Usage: rpdeepnet-toy --layers 2,4,1 --iterations 2000 --verbose

use anyhow::{Context, Result};
use clap::Parser;
use ndarray::Array2;
use rpdeepnet::config::TrainConfig;
use rpdeepnet::feedforward::NeuralNet;
use std::path::PathBuf;
use tracing::info;

#[derive(Parser, Debug)]
#[command(name = "rpdeepnet-toy", about = "Train a deep binary classifier on a toy set")]
struct Args {
    /// Layer sizes, input first; the input layer must have 2 neurons
    #[arg(long, value_delimiter = ',', default_value = "2,4,1")]
    layers: Vec<usize>,

    /// JSON training config; flags given on the command line override it
    #[arg(long)]
    config: Option<PathBuf>,

    #[arg(long)]
    learning_rate: Option<f64>,

    #[arg(long)]
    iterations: Option<usize>,

    #[arg(long)]
    seed: Option<u64>,

    /// Log the cost every 100 iterations
    #[arg(short, long)]
    verbose: bool,
}

/// Points of a 6x6 grid over [0, 1]^2, labelled 1 above the line `x0 + x1 = 1`.
fn toy_set() -> (Array2<f64>, Array2<f64>) {
    const SIDE: usize = 6;
    let m = SIDE * SIDE;
    let coord = |k: usize| k as f64 / (SIDE - 1) as f64;

    let x = Array2::from_shape_fn((2, m), |(feature, j)| {
        if feature == 0 {
            coord(j / SIDE)
        } else {
            coord(j % SIDE)
        }
    });
    let y = Array2::from_shape_fn((1, m), |(_, j)| {
        if coord(j / SIDE) + coord(j % SIDE) > 1.0 {
            1.0
        } else {
            0.0
        }
    });
    (x, y)
}

fn main() -> Result<()> {
    rpdeepnet::logging::try_init();

    let args = Args::parse();

    let mut config = match &args.config {
        Some(path) => TrainConfig::from_json_file(path)
            .with_context(|| format!("loading {}", path.display()))?,
        None => TrainConfig::default(),
    };
    if let Some(learning_rate) = args.learning_rate {
        config = config.with_learning_rate(learning_rate);
    }
    if let Some(iterations) = args.iterations {
        config = config.with_iterations(iterations);
    }
    if let Some(seed) = args.seed {
        config = config.with_seed(seed);
    }
    if args.verbose {
        config = config.with_print_cost(true);
    }

    let (x, y) = toy_set();
    let mut net = NeuralNet::new(&args.layers, config)?;
    info!(layers = ?args.layers, examples = x.ncols(), "training");

    let report = net.train(&x, &y)?;
    let accuracy = net.accuracy(&x, &y)?;

    info!(
        final_cost = report.final_cost,
        samples = net.costs().len(),
        "done"
    );
    println!("Training accuracy: {:.2}%", accuracy * 100.0);
    Ok(())
}
