mod exports;

use std::process::ExitCode;

use clap::Parser;
use tracing::{error, info};

use crate::exports::{Exports, RANDOM_STRING};

#[derive(Debug, Parser)]
#[command(about = "Generate random alphanumeric strings through the host export table")]
struct Args {
    /// Number of characters per string
    #[arg(short, long, default_value_t = 16, allow_negative_numbers = true)]
    length: i64,

    /// How many strings to print
    #[arg(short, long, default_value_t = 1)]
    count: usize,

    /// Export to call
    #[arg(short, long, default_value = RANDOM_STRING)]
    export: String,

    #[arg(short, long)]
    verbose: bool,
}

fn main() -> ExitCode {
    let args = Args::parse();

    tracing_subscriber::fmt()
        .with_max_level(if args.verbose {
            tracing::Level::DEBUG
        } else {
            tracing::Level::INFO
        })
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();

    let mut exports = Exports::new();
    exports::register(&mut exports);
    info!(exports = ?exports.names().collect::<Vec<_>>(), "Exports registered");

    for _ in 0..args.count {
        match exports.call(&args.export, args.length) {
            Ok(s) => println!("{s}"),
            Err(e) => {
                error!("{}", e);
                return ExitCode::FAILURE;
            }
        }
    }

    ExitCode::SUCCESS
}
