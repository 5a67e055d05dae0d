use std::path::PathBuf;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum NutritionError {
    #[error("Dataset not found: {}", path.display())]
    DatasetNotFound {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Malformed {column} value for {dish}: '{value}'")]
    MalformedValue {
        dish: String,
        column: &'static str,
        value: String,
    },

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Prompt error: {0}")]
    Prompt(#[from] dialoguer::Error),

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    #[error("Invalid input: {0}")]
    InvalidInput(String),
}

pub type Result<T> = std::result::Result<T, NutritionError>;
