use strsim::jaro_winkler;
use tracing::debug;

use crate::constants::SUGGESTION_THRESHOLD;
use crate::models::{Dataset, DishRecord, Query, QueryMode};

/// Filter the dataset down to the rows matching `query`, in dataset order.
///
/// Search mode matches the lowercased text as a substring of each name; exact
/// mode compares whole names. Both ignore case. An empty result is a normal
/// outcome.
pub fn resolve<'a>(dataset: &'a Dataset, query: &Query) -> Vec<&'a DishRecord> {
    let matches: Vec<&DishRecord> = match query.mode() {
        QueryMode::Search(text) => {
            let needle = text.to_lowercase();
            dataset
                .indexed()
                .filter(|(_, name)| name.contains(needle.as_str()))
                .map(|(record, _)| record)
                .collect()
        }
        QueryMode::Exact(name) => {
            let wanted = name.to_lowercase();
            dataset
                .indexed()
                .filter(|(_, name)| *name == wanted)
                .map(|(record, _)| record)
                .collect()
        }
    };

    debug!(mode = ?query.mode(), matches = matches.len(), "resolved query");
    matches
}

/// The record shown in the summary: always the first match.
pub fn active<'a>(matches: &[&'a DishRecord]) -> Option<&'a DishRecord> {
    matches.first().copied()
}

/// Distinct dish names similar to `input`, best first.
pub fn suggest(dataset: &Dataset, input: &str, limit: usize) -> Vec<String> {
    let input = input.trim().to_lowercase();
    if input.is_empty() {
        return Vec::new();
    }

    let mut candidates: Vec<(String, f64)> = dataset
        .dish_names()
        .into_iter()
        .map(|name| {
            let score = jaro_winkler(&name.to_lowercase(), &input);
            (name, score)
        })
        .filter(|(_, score)| *score > SUGGESTION_THRESHOLD)
        .collect();

    candidates.sort_by(|a, b| b.1.partial_cmp(&a.1).unwrap_or(std::cmp::Ordering::Equal));
    candidates.into_iter().take(limit).map(|(name, _)| name).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_dataset() -> Dataset {
        Dataset::new(vec![
            DishRecord::new("Chicken Biryani", 290.0, 14.5, 32.0, 11.2),
            DishRecord::new("Paneer Tikka", 265.0, 17.0, 6.5, 18.8),
            DishRecord::new("Veg Biryani", 240.0, 5.8, 38.0, 7.5),
            DishRecord::new("Paneer Tikka", 300.0, 18.0, 7.0, 20.0),
        ])
    }

    fn names(records: &[&DishRecord]) -> Vec<String> {
        records.iter().map(|r| r.name.clone()).collect()
    }

    #[test]
    fn test_exact_match_ignores_case() {
        let ds = sample_dataset();
        let lower = resolve(&ds, &Query::selected("Paneer Tikka"));
        let upper = resolve(&ds, &Query::selected("PANEER TIKKA"));
        assert_eq!(lower, upper);
        assert_eq!(lower.len(), 2);
    }

    #[test]
    fn test_search_keeps_dataset_order() {
        let ds = sample_dataset();
        let found = resolve(&ds, &Query::search("biryani"));
        assert_eq!(names(&found), vec!["Chicken Biryani", "Veg Biryani"]);
    }

    #[test]
    fn test_exact_match_is_not_substring() {
        let ds = sample_dataset();
        assert!(resolve(&ds, &Query::selected("Biryani")).is_empty());
    }

    #[test]
    fn test_duplicate_names_first_is_active() {
        let ds = sample_dataset();
        let found = resolve(&ds, &Query::selected("paneer tikka"));
        assert_eq!(active(&found).unwrap().calories.value(), Some(265.0));
    }

    #[test]
    fn test_no_match() {
        let ds = sample_dataset();
        let found = resolve(&ds, &Query::selected("Nonexistent Dish"));
        assert!(found.is_empty());
        assert!(active(&found).is_none());
    }

    #[test]
    fn test_suggest_close_names() {
        let ds = sample_dataset();
        let suggestions = suggest(&ds, "paner tika", 3);
        assert_eq!(suggestions.first().map(String::as_str), Some("Paneer Tikka"));
        // Duplicate rows produce one suggestion
        assert_eq!(suggestions.iter().filter(|s| *s == "Paneer Tikka").count(), 1);
    }

    #[test]
    fn test_suggest_blank_input() {
        assert!(suggest(&sample_dataset(), "  ", 3).is_empty());
    }
}
