pub mod loader;
pub mod pipeline;
pub mod resolver;
pub mod scaler;

pub use loader::{load_cached, load_dataset, DatasetCache};
pub use pipeline::{lookup, ChartPoint, Lookup, NutritionReport};
pub use resolver::{active, resolve, suggest};
pub use scaler::{scale, ScaledNutrients};
