use serde::Serialize;

use crate::error::Result;
use crate::models::{DishRecord, Nutrient};

/// Per-serving and total nutrient values, ordered as [`Nutrient::ALL`].
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct ScaledNutrients {
    pub per_serving: [f64; 4],
    pub total: [f64; 4],
}

impl ScaledNutrients {
    pub fn per_serving_of(&self, nutrient: Nutrient) -> f64 {
        self.per_serving[nutrient.index()]
    }

    pub fn total_of(&self, nutrient: Nutrient) -> f64 {
        self.total[nutrient.index()]
    }
}

/// Multiply a record's values by `servings`.
///
/// No rounding and no clamping: range checks belong to whoever built the
/// serving count. Fails if any of the record's cells is not a number.
pub fn scale(record: &DishRecord, servings: u32) -> Result<ScaledNutrients> {
    let per_serving = record.nutrients()?;
    let factor = f64::from(servings);
    Ok(ScaledNutrients {
        per_serving,
        total: per_serving.map(|value| value * factor),
    })
}
