use clap::Parser;

use dish_nutrition_rs::cli::{Cli, Command};
use dish_nutrition_rs::constants::MAX_SUGGESTIONS;
use dish_nutrition_rs::error::{NutritionError, Result};
use dish_nutrition_rs::interface::{
    collect_lookup_inputs, display_dish_names, display_no_match, display_report, prompt_yes_no,
};
use dish_nutrition_rs::logging;
use dish_nutrition_rs::lookup::{load_cached, lookup, suggest, Lookup};
use dish_nutrition_rs::models::{Dataset, Query, ServingCount};

fn main() {
    if let Err(e) = run() {
        eprintln!("Error: {}", e);
        if let NutritionError::DatasetNotFound { path, .. } = &e {
            eprintln!(
                "Make sure the dishes CSV exists at {} or pass --file.",
                path.display()
            );
        }
        std::process::exit(1);
    }
}

fn run() -> Result<()> {
    let cli = Cli::parse();
    logging::init(cli.verbose);

    let command = cli.command.unwrap_or_default();

    match command {
        Command::Interactive => cmd_interactive(&cli.file),
        Command::Lookup {
            dish,
            search,
            servings,
            json,
        } => cmd_lookup(&cli.file, dish, search, servings, json),
        Command::List => cmd_list(&cli.file),
    }
}

/// Show the result of one lookup, or the no-match hint.
fn show(dataset: &Dataset, query: &Query, servings: ServingCount) -> Result<()> {
    match lookup(dataset, query, servings)? {
        Lookup::Found(report) => display_report(&report),
        Lookup::NoMatch { query } => {
            let suggestions = suggest(dataset, &query, MAX_SUGGESTIONS);
            display_no_match(&query, &suggestions);
        }
    }
    Ok(())
}

/// Look up a single dish.
fn cmd_lookup(
    file_path: &str,
    dish: Option<String>,
    search: Option<String>,
    servings: u8,
    json: bool,
) -> Result<()> {
    let dataset = load_cached(file_path)?;
    let servings = ServingCount::new(servings)?;

    // Without --dish, the first listed name is selected
    let selected_name = match dish {
        Some(name) => name,
        None => dataset.dish_names().into_iter().next().unwrap_or_default(),
    };
    let query = Query {
        selected_name,
        free_text: search.unwrap_or_default(),
    };

    if json {
        let result = lookup(&dataset, &query, servings)?;
        println!("{}", serde_json::to_string_pretty(&result)?);
        return Ok(());
    }

    show(&dataset, &query, servings)
}

/// List dish names.
fn cmd_list(file_path: &str) -> Result<()> {
    let dataset = load_cached(file_path)?;
    display_dish_names(&dataset.dish_names());
    Ok(())
}

/// Repeat lookups until the user stops.
fn cmd_interactive(file_path: &str) -> Result<()> {
    let dataset = load_cached(file_path)?;
    let names = dataset.dish_names();

    println!("Loaded {} dishes", dataset.len());
    println!("Tip: search by keyword like 'biryani', 'paneer' or 'rice'.");
    println!();

    loop {
        let (query, servings) = collect_lookup_inputs(&names)?;
        // A bad row only ends this interaction
        if let Err(e) = show(&dataset, &query, servings) {
            eprintln!("Error: {}", e);
        }

        if !prompt_yes_no("Look up another dish?", true)? {
            break;
        }
    }

    Ok(())
}
