//! Luapack - CI bundling driver for Lua source trees
//!
//! Resolves a source and an output directory from action inputs (or the
//! hardcoded development paths), clears the output directory, and writes one
//! self-contained artifact per eligible Lua source file by delegating to an
//! external bundler executable.

use clap::Parser;

mod bundler;
mod cli;
mod commands;
mod config;
mod driver;
mod error;

use cli::{Cli, Commands};

fn main() {
    let cli = Cli::parse();

    let result = match cli.command {
        Commands::Bundle(args) => commands::bundle::run(args),
        Commands::Version => commands::version::run(),
        Commands::Completions(args) => commands::completions::run(args),
    };

    if let Err(e) = result {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}
