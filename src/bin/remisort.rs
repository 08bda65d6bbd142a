//! Remisort Binary
//!
//! Generates a deck, optionally prints it, sorts it four ways, and reports
//! each algorithm's running time.
//!
//! Options: --size, --show, --hide, --shuffle, --color, -v

use clap::Parser;
use remisort::cli::Args;

fn main() -> anyhow::Result<()> {
    let args = Args::parse();
    remisort::log(args.level());
    remisort::cli::run(&args)
}
