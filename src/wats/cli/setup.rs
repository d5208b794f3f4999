use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "wats", bin_name = "wats", version)]
#[command(about = "Wildlife Animal Tracking System", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Tracking database file (overrides WATS_DB and the configured path)
    #[arg(long, global = true, value_name = "PATH")]
    pub db: Option<PathBuf>,

    /// Verbose output (debug logging on stderr)
    #[arg(short, long, global = true)]
    pub verbose: bool,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Create a tracking database (and remember it when PATH is given)
    Init {
        /// Where to create the database file
        path: Option<PathBuf>,
    },

    /// List all animal records
    #[command(alias = "ls")]
    List {
        /// Print records as JSON
        #[arg(long)]
        json: bool,
    },

    /// Show one animal record
    #[command(alias = "view")]
    Show {
        /// Tag ID of the animal
        id: i32,
    },

    /// Add an animal record
    #[command(alias = "new")]
    Add {
        /// Tag ID (unique whole number)
        #[arg(long)]
        id: String,

        /// Species (e.g. Lion)
        #[arg(long)]
        species: String,

        /// Name given to the animal
        #[arg(long)]
        name: String,

        /// Age in years
        #[arg(long)]
        age: String,

        /// Male, Female or Unknown
        #[arg(long)]
        gender: String,

        /// Weight in kilograms
        #[arg(long)]
        weight: String,

        /// Healthy, Injured, Sick or Recovering
        #[arg(long = "health")]
        health_status: String,
    },

    /// Update an animal record; omitted fields keep their current value
    #[command(alias = "edit")]
    Update {
        /// Tag ID of the animal
        id: i32,

        #[arg(long)]
        species: Option<String>,

        #[arg(long)]
        name: Option<String>,

        #[arg(long)]
        age: Option<String>,

        #[arg(long)]
        gender: Option<String>,

        #[arg(long)]
        weight: Option<String>,

        #[arg(long = "health")]
        health_status: Option<String>,
    },

    /// Delete an animal record
    #[command(alias = "rm")]
    Delete {
        /// Tag ID of the animal
        id: i32,

        /// Skip the confirmation prompt
        #[arg(short, long)]
        yes: bool,
    },

    /// Average weight of one species
    #[command(alias = "avg")]
    Average {
        /// Species name (exact, case-sensitive)
        species: String,
    },

    /// Get or set configuration
    Config {
        /// Configuration key (db)
        key: Option<String>,

        /// Value to set (if omitted, prints current value)
        value: Option<String>,
    },
}
