use clap::{Parser, ValueEnum};
use log::info;
use rasterops::image::io::{load_rgba, save_rgba, write_json_file};
use rasterops::{time_execution, Error, Operation, WeightMatrix};
use serde::Serialize;
use std::path::PathBuf;

/// Weight matrix applied when `convolve` is selected.
const CONVOLVE_WEIGHTS: WeightMatrix = [
    [1.0, 2.0, -1.0],
    [2.0, 0.25, -2.0],
    [1.0, -2.0, -1.0],
];

#[derive(Parser, Debug)]
#[command(
    name = "rasterops",
    about = "Apply a parallel raster transform to a PNG image"
)]
struct Args {
    /// Transform to apply.
    #[arg(value_enum)]
    operation: OperationKind,
    /// Input PNG path.
    input: PathBuf,
    /// Output PNG path.
    output: PathBuf,
    /// Worker threads for the kernel invocation.
    #[arg(long, default_value_t = 1)]
    threads: usize,
    /// Rectification ceiling (rectify only).
    #[arg(long, default_value_t = 127)]
    ceiling: u8,
    /// Second input PNG (symmetric-difference only).
    #[arg(long)]
    second: Option<PathBuf>,
    /// Write a JSON timing summary to this path.
    #[arg(long)]
    timing_json: Option<PathBuf>,
}

#[derive(Clone, Copy, Debug, ValueEnum)]
enum OperationKind {
    Rectify,
    MaxPool,
    Convolve,
    SymmetricDifference,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct TimingSummary {
    operation: &'static str,
    input_width: usize,
    input_height: usize,
    output_width: usize,
    output_height: usize,
    threads: usize,
    elapsed_us: u128,
}

fn main() {
    env_logger::init();
    if let Err(err) = run() {
        eprintln!("Error: {err}");
        std::process::exit(1);
    }
}

fn run() -> Result<(), Error> {
    let args = Args::parse();
    let operation = match args.operation {
        OperationKind::Rectify => Operation::Rectify {
            ceiling: args.ceiling,
        },
        OperationKind::MaxPool => Operation::MaxPool,
        OperationKind::Convolve => Operation::Convolve {
            weights: CONVOLVE_WEIGHTS,
        },
        OperationKind::SymmetricDifference => Operation::SymmetricDifference,
    };

    info!("loading {}", args.input.display());
    let input = load_rgba(&args.input)?;
    let second = args.second.as_deref().map(load_rgba).transpose()?;

    let (result, elapsed) = time_execution(|| operation.apply(&input, second.as_ref(), args.threads));
    let output = result?;
    println!(
        "{} completed in {} microseconds",
        operation.name(),
        elapsed.as_micros()
    );

    if let Some(path) = &args.timing_json {
        write_json_file(
            path,
            &TimingSummary {
                operation: operation.name(),
                input_width: input.w,
                input_height: input.h,
                output_width: output.w,
                output_height: output.h,
                threads: args.threads,
                elapsed_us: elapsed.as_micros(),
            },
        )?;
    }

    info!("saving {}", args.output.display());
    save_rgba(&args.output, &output)?;
    Ok(())
}
