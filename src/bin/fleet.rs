//! Fleet CLI Binary
//!
//! Interactive console for managing a keyed vehicle collection.

use clap::Parser;
use fleet::tooling::cli::{run, Cli};
use std::process;

fn main() {
    let cli = Cli::parse();

    if let Err(e) = run(&cli) {
        eprintln!("Error: {}", e);
        process::exit(1);
    }
}
