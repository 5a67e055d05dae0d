use serde::Serialize;

use crate::constants::{DEFAULT_SERVINGS, MAX_SERVINGS, MIN_SERVINGS};
use crate::error::{NutritionError, Result};

/// A dish lookup request.
///
/// Free text wins over the selected name whenever it is non-empty after trimming.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Query {
    pub selected_name: String,
    pub free_text: String,
}

/// The active half of a [`Query`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum QueryMode<'a> {
    /// Case-insensitive substring search (trimmed text).
    Search(&'a str),
    /// Case-insensitive exact name match.
    Exact(&'a str),
}

impl Query {
    pub fn selected(name: &str) -> Self {
        Self {
            selected_name: name.to_string(),
            free_text: String::new(),
        }
    }

    pub fn search(text: &str) -> Self {
        Self {
            selected_name: String::new(),
            free_text: text.to_string(),
        }
    }

    pub fn mode(&self) -> QueryMode<'_> {
        let text = self.free_text.trim();
        if text.is_empty() {
            QueryMode::Exact(&self.selected_name)
        } else {
            QueryMode::Search(text)
        }
    }

    /// The text the user actually asked for, for messages.
    pub fn describe(&self) -> &str {
        match self.mode() {
            QueryMode::Search(text) | QueryMode::Exact(text) => text,
        }
    }
}

/// Number of servings, always within `MIN_SERVINGS..=MAX_SERVINGS`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize)]
#[serde(transparent)]
pub struct ServingCount(u8);

impl ServingCount {
    pub fn new(count: u8) -> Result<Self> {
        if (MIN_SERVINGS..=MAX_SERVINGS).contains(&count) {
            Ok(Self(count))
        } else {
            Err(NutritionError::InvalidInput(format!(
                "serving count must be between {} and {}, got {}",
                MIN_SERVINGS, MAX_SERVINGS, count
            )))
        }
    }

    #[inline]
    pub fn get(self) -> u8 {
        self.0
    }
}

impl Default for ServingCount {
    fn default() -> Self {
        Self(DEFAULT_SERVINGS)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_free_text_takes_precedence() {
        let query = Query {
            selected_name: "Idli".to_string(),
            free_text: "  biryani ".to_string(),
        };
        assert_eq!(query.mode(), QueryMode::Search("biryani"));
    }

    #[test]
    fn test_blank_free_text_falls_back_to_selection() {
        let query = Query {
            selected_name: "Idli".to_string(),
            free_text: "   ".to_string(),
        };
        assert_eq!(query.mode(), QueryMode::Exact("Idli"));
        assert_eq!(query.describe(), "Idli");
    }

    #[test]
    fn test_serving_count_bounds() {
        assert!(ServingCount::new(0).is_err());
        assert!(ServingCount::new(6).is_err());
        assert_eq!(ServingCount::new(1).unwrap().get(), 1);
        assert_eq!(ServingCount::new(5).unwrap().get(), 5);
        assert_eq!(ServingCount::default().get(), DEFAULT_SERVINGS);
    }
}
