//! t6conv CLI - Converts minute and daily price files into Zorro `.t6` files.

use anyhow::Result;
use clap::{CommandFactory, Parser, Subcommand};
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

mod commands;
mod display;

use display::InspectFormat;
use t6conv_lib::{RecordLayout, Resolution};

#[derive(Parser)]
#[command(name = "t6conv")]
#[command(about = "Converts price text files into Zorro .t6 binary files", long_about = None)]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Verbosity level (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    /// Quiet mode (suppress progress output)
    #[arg(short, long, global = true)]
    quiet: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Convert every .txt/.csv file below a directory
    Convert {
        /// Input directory, searched recursively
        #[arg(long = "in", value_name = "DIR")]
        input: PathBuf,

        /// Output directory. Created if missing.
        #[arg(long = "out", value_name = "DIR")]
        output: PathBuf,

        /// Inputs are daily bars (one header row, one output file per input)
        #[arg(long)]
        daily: bool,

        /// Input resolution (minute, daily). Same as --daily when set to daily.
        #[arg(short, long, conflicts_with = "daily")]
        resolution: Option<Resolution>,

        /// Skip files that fail to parse instead of cancelling the batch
        #[arg(long)]
        keep_going: bool,

        /// Output record layout (packed = 28 bytes, zorro = 32 bytes)
        #[arg(short, long, default_value = "packed")]
        layout: RecordLayout,
    },

    /// Print the records of a .t6 file
    Inspect {
        /// The .t6 file to decode
        file: PathBuf,

        /// Record layout the file was written with (packed, zorro)
        #[arg(short, long, default_value = "packed")]
        layout: RecordLayout,

        /// Print at most this many records (newest first)
        #[arg(short = 'n', long)]
        limit: Option<usize>,

        /// Output format
        #[arg(short, long, value_enum, default_value = "csv")]
        format: InspectFormat,

        /// Omit the CSV header row
        #[arg(long)]
        no_header: bool,
    },
}

/// Installs the global tracing subscriber. `RUST_LOG` wins over the flags.
fn init_tracing(verbose: u8, quiet: bool) {
    let level = match (quiet, verbose) {
        (true, _) => "error",
        (false, 0) => "warn",
        (false, 1) => "info",
        (false, 2) => "debug",
        (false, _) => "trace",
    };

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level)))
        .with_writer(std::io::stderr)
        .init();
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose, cli.quiet);

    // Show help if no command provided
    let Some(command) = cli.command else {
        Cli::command().print_help()?;
        return Ok(());
    };

    match command {
        Commands::Convert {
            input,
            output,
            daily,
            resolution,
            keep_going,
            layout,
        } => {
            let resolution = resolution.unwrap_or(Resolution::from_daily_flag(daily));
            commands::convert::convert(input, output, resolution, keep_going, layout, cli.quiet)
                .await
        }
        Commands::Inspect {
            file,
            layout,
            limit,
            format,
            no_header,
        } => commands::inspect::inspect(&file, layout, limit, format, !no_header),
    }
}
