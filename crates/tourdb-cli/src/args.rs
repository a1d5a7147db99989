use clap::{Parser, Subcommand};

/// CLI arguments for tourdb-cli
#[derive(Debug, Parser)]
#[command(
    name = "tourdb",
    version,
    about = "CLI for querying and inspecting the tourdb-core tourism database"
)]
pub struct CliArgs {
    /// Path to the input CSV file (default: the dataset bundled with tourdb-core)
    #[arg(short = 'i', long = "input", global = true)]
    pub input: Option<String>,

    /// Optional comma-separated list of state names to filter on (e.g. "Goa,Assam")
    #[arg(short = 'f', long = "filter", global = true)]
    pub filter: Option<String>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Show a summary of the database contents
    Stats,

    /// List all states, optionally restricted to a travel month
    States {
        /// Keep only states with a place recommended for this month
        #[arg(short = 'm', long = "month")]
        month: Option<String>,
    },

    /// List all places within a state (exact state name)
    Places {
        /// State name, e.g. "Goa"
        state: String,
    },

    /// Show the full detail record for a place
    Show {
        /// Place name, e.g. "Palolem"
        name: String,
    },

    /// Print the responsible-tourism tips applying to a place
    Tips {
        /// Place name
        name: String,
    },

    /// List the distinct travel months in the dataset
    Months,

    /// Print map markers for a state as JSON
    #[cfg(feature = "json")]
    Map {
        /// State name
        state: String,
    },

    /// Search for places containing a substring (case-insensitive)
    Search {
        /// Substring to search
        query: String,
    },
}
