use clap::{Parser, Subcommand};

use crate::constants::{DEFAULT_DATA_PATH, DEFAULT_SERVINGS, MAX_SERVINGS, MIN_SERVINGS};

/// Nutrition Calc — look up a dish and see its nutrients for 1 to 5 servings.
#[derive(Parser, Debug)]
#[command(name = "nutrition_calc")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Command>,

    /// Path to the dishes CSV file.
    #[arg(short, long, env = "NUTRITION_DATA", default_value = DEFAULT_DATA_PATH, global = true)]
    pub file: String,

    /// Increase log verbosity (-v info, -vv debug).
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,
}

#[derive(Subcommand, Debug, Default)]
pub enum Command {
    /// Pick dishes and serving counts interactively.
    #[default]
    Interactive,

    /// Look up one dish and show its table, summary and chart.
    Lookup {
        /// Exact dish name (case-insensitive). Defaults to the first dish in the list.
        #[arg(short, long)]
        dish: Option<String>,

        /// Part of a dish name; takes precedence over --dish when non-empty.
        #[arg(short, long)]
        search: Option<String>,

        /// Number of servings.
        #[arg(
            short = 'n',
            long,
            default_value_t = DEFAULT_SERVINGS,
            value_parser = clap::value_parser!(u8).range(MIN_SERVINGS as i64..=MAX_SERVINGS as i64)
        )]
        servings: u8,

        /// Print the result as JSON.
        #[arg(long)]
        json: bool,
    },

    /// List the available dish names.
    List,
}
