use anyhow::Context;
use clap::Parser;
use fle_processor::cli::{args::Args, commands};
use std::process;

fn main() {
    let args = Args::parse();
    let input = args.command.input().display().to_string();

    let result = commands::run(args).with_context(|| format!("Failed to process {}", input));

    match result {
        Ok(_stats) => {
            // Success - output has already been reported by the command
            process::exit(0);
        }
        Err(error) => {
            eprintln!("Error: {:#}", error);
            process::exit(1);
        }
    }
}
