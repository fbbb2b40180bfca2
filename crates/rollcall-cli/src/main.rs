//! Rollcall CLI: the `rollcall` command.

mod cli;
mod commands;
mod sample;

use clap::Parser;
use cli::{Cli, Commands};

fn main() {
    let cli = Cli::parse();

    match cli.command {
        Commands::Demo { json } => commands::demo::run(json),

        Commands::Roster { json } => commands::roster::run(json),

        Commands::Shell => {
            if let Err(e) = commands::shell::run() {
                eprintln!("error: shell session failed: {e}");
                std::process::exit(1);
            }
        }
    }
}
