//! CLI argument definitions.

use std::path::PathBuf;

use clap::{Parser, Subcommand};

#[derive(Parser, Debug)]
#[command(
    name = "postroute",
    version,
    about = "Resolve postcodes and Ireland cities to collection routes and dates"
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,

    /// Schedule store location.
    #[arg(long = "db", value_name = "PATH", env = "POSTROUTE_DB", global = true)]
    pub db: Option<PathBuf>,

    /// Use bundled collection dates only; never open the schedule store.
    #[arg(long = "no-db", global = true)]
    pub no_db: bool,

    /// Debug logging (RUST_LOG takes precedence).
    #[arg(short = 'v', long = "verbose", global = true)]
    pub verbose: bool,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Look up the collection route for a UK postcode.
    Lookup {
        #[arg(value_name = "POSTCODE")]
        postcode: String,

        /// Print the lookup result as JSON.
        #[arg(long)]
        json: bool,
    },

    /// Look up the collection route for an Ireland city.
    Ireland {
        #[arg(value_name = "CITY")]
        city: String,

        #[arg(long)]
        json: bool,
    },

    /// Read input line by line from stdin and show the lookup for each.
    Watch {
        /// Treat input as Ireland city names instead of UK postcodes.
        #[arg(long)]
        ireland: bool,
    },

    /// List every route with its prefixes, collection date and areas.
    Routes {
        #[arg(long)]
        json: bool,
    },

    /// Manage stored collection dates.
    #[command(subcommand)]
    Schedule(ScheduleCommand),

    /// Show schedule store statistics.
    Stats,
}

#[derive(Subcommand, Debug)]
pub enum ScheduleCommand {
    /// List stored collection dates.
    List,

    /// Store a collection date for a route.
    Set {
        #[arg(value_name = "ROUTE")]
        route: String,

        /// Free text, e.g. "6th of September".
        #[arg(value_name = "DATE")]
        date: String,
    },

    /// Remove a stored date; the route falls back to its default.
    Clear {
        #[arg(value_name = "ROUTE")]
        route: String,
    },
}
