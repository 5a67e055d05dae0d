use dialoguer::{Confirm, Input, Select};

use crate::constants::{DEFAULT_SERVINGS, MAX_SERVINGS, MIN_SERVINGS};
use crate::error::{NutritionError, Result};
use crate::models::{Query, ServingCount};

/// Prompt for the number of servings.
pub fn prompt_servings() -> Result<ServingCount> {
    let options: Vec<String> = (MIN_SERVINGS..=MAX_SERVINGS)
        .map(|n| n.to_string())
        .collect();

    let selection = Select::new()
        .with_prompt("Number of servings")
        .items(&options)
        .default(usize::from(DEFAULT_SERVINGS - MIN_SERVINGS))
        .interact()?;

    let count = u8::try_from(selection)
        .map_err(|_| NutritionError::InvalidInput("Invalid serving selection".to_string()))?;
    ServingCount::new(MIN_SERVINGS + count)
}

/// Prompt for free text; empty means "use the list instead".
pub fn prompt_search() -> Result<String> {
    let input: String = Input::new()
        .with_prompt("Type part of a dish name (or press Enter to pick from the list)")
        .allow_empty(true)
        .interact_text()?;
    Ok(input)
}

/// Prompt for a dish from the sorted name list.
pub fn prompt_dish(names: &[String]) -> Result<String> {
    if names.is_empty() {
        return Err(NutritionError::InvalidInput(
            "Dataset has no dishes to choose from".to_string(),
        ));
    }

    let selection = Select::new()
        .with_prompt("Select from list")
        .items(names)
        .default(0)
        .max_length(10)
        .interact()?;

    Ok(names[selection].clone())
}

/// Prompt for yes/no confirmation.
pub fn prompt_yes_no(prompt: &str, default: bool) -> Result<bool> {
    Ok(Confirm::new()
        .with_prompt(prompt)
        .default(default)
        .interact()?)
}

/// Collect one interaction's inputs: servings and a dish query.
pub fn collect_lookup_inputs(names: &[String]) -> Result<(Query, ServingCount)> {
    let servings = prompt_servings()?;
    let free_text = prompt_search()?;

    let query = if free_text.trim().is_empty() {
        Query::selected(&prompt_dish(names)?)
    } else {
        Query::search(&free_text)
    };

    Ok((query, servings))
}
