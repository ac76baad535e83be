//! ruigo CLI binary.

use std::io::Write;
use std::process;

use clap::Parser;
use env_logger::Builder;
use log::LevelFilter;

use ruigo::cli::args::*;
use ruigo::cli::commands::*;

fn main() {
    let args = RuigoArgs::parse();

    let log_level = match args.verbosity() {
        0 => LevelFilter::Error, // -q
        1 => LevelFilter::Warn,
        2 => LevelFilter::Info, // -v
        _ => LevelFilter::Debug, // -vv and up: per-segment decisions
    };

    Builder::new()
        .filter_level(log_level)
        .format(|buf, record| writeln!(buf, "[{}] {}", record.level(), record.args()))
        .init();

    // The store is already closed when an error reaches this point.
    if let Err(e) = execute_command(args) {
        eprintln!("Error: {e}");
        process::exit(1);
    }
}
