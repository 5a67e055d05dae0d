pub mod cli;
pub mod constants;
pub mod error;
pub mod interface;
pub mod logging;
pub mod lookup;
pub mod models;

pub use error::{NutritionError, Result};
pub use lookup::{load_cached, load_dataset, lookup, resolve, scale, Lookup, NutritionReport};
pub use models::{Amount, Dataset, DishRecord, Nutrient, Query, ServingCount};
