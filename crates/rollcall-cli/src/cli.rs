use clap::{Parser, Subcommand};

#[derive(Parser)]
#[command(
    name = "rollcall",
    about = "Rollcall: course enrollment, prerequisites, and waitlists",
    version
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Replay the scripted enrollment walkthrough over the sample campus
    Demo {
        /// Output as JSON
        #[arg(long)]
        json: bool,
    },

    /// Print the seeded student and course rosters
    Roster {
        /// Output as JSON
        #[arg(long)]
        json: bool,
    },

    /// Start an interactive enrollment session over the sample campus
    Shell,
}
