pub mod dataset;
pub mod dish;
pub mod query;

pub use dataset::Dataset;
pub use dish::{Amount, DishRecord, Nutrient};
pub use query::{Query, QueryMode, ServingCount};
