//! csv-schema: infer column types of a CSV file from the command line

mod commands;
mod error;
mod output;

use std::path::PathBuf;

use anyhow::Context;
use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use crate::commands::{InferArgs, handle_infer};
use crate::output::OutputFormat;

#[derive(Parser)]
#[command(name = "csv-schema", version, about = "Infer column types of CSV data")]
struct Cli {
    /// Log level when RUST_LOG is not set
    #[arg(long, global = true, default_value = "warn")]
    log_level: String,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Infer a schema from a CSV file or stdin
    Infer {
        /// Input file path, or '-' for stdin
        input: String,

        /// Treat the input as gzip-compressed (automatic for .gz files)
        #[arg(long)]
        gzip: bool,

        /// Field delimiter
        #[arg(long, default_value_t = ',')]
        delimiter: char,

        /// Additional missing-value token (repeatable)
        #[arg(long = "null-value")]
        null_values: Vec<String>,

        /// Token read as boolean true (repeatable, default "true")
        #[arg(long = "true-value")]
        true_values: Vec<String>,

        /// Token read as boolean false (repeatable, default "false")
        #[arg(long = "false-value")]
        false_values: Vec<String>,

        /// Maximum number of data rows to analyse (0 = all)
        #[arg(long, default_value_t = 0)]
        sample_size: usize,

        /// Output format: wire, detailed or yaml
        #[arg(long, default_value = "wire")]
        format: String,

        /// Output file path (stdout if not provided)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(&cli.log_level))
        .context("invalid log level")?;
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();

    match cli.command {
        Command::Infer {
            input,
            gzip,
            delimiter,
            null_values,
            true_values,
            false_values,
            sample_size,
            format,
            output,
        } => {
            let args = InferArgs {
                input,
                gzip,
                delimiter,
                null_values,
                true_values,
                false_values,
                sample_size,
                format: format.parse::<OutputFormat>()?,
                output,
            };
            handle_infer(&args).context("infer failed")?;
        }
    }

    Ok(())
}
