use serde::Serialize;

use crate::error::Result;
use crate::lookup::resolver::{active, resolve};
use crate::lookup::scaler::{scale, ScaledNutrients};
use crate::models::{Dataset, DishRecord, Nutrient, Query, ServingCount};

/// Outcome of one lookup interaction.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum Lookup {
    /// Nothing matched; no scaling was done.
    NoMatch { query: String },
    Found(NutritionReport),
}

/// One bar of a nutrient chart.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct ChartPoint {
    pub nutrient: &'static str,
    pub amount: f64,
}

/// Everything the presentation layer needs for a successful lookup.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct NutritionReport {
    /// Full matched table, dataset order.
    pub matches: Vec<DishRecord>,
    /// Name of the summarized (first) match.
    pub dish: String,
    pub servings: ServingCount,
    pub nutrients: ScaledNutrients,
    pub breakdown: Vec<ChartPoint>,
}

impl NutritionReport {
    fn new(matches: Vec<DishRecord>, active: &DishRecord, servings: ServingCount) -> Result<Self> {
        let nutrients = scale(active, u32::from(servings.get()))?;
        let breakdown = chart_points(&nutrients.total);
        Ok(Self {
            matches,
            dish: active.name.clone(),
            servings,
            nutrients,
            breakdown,
        })
    }

    /// Nutrient label to total amount, in nutrient order.
    pub fn breakdown(&self) -> &[ChartPoint] {
        &self.breakdown
    }

    /// Same series for a single serving.
    pub fn per_serving_breakdown(&self) -> Vec<ChartPoint> {
        chart_points(&self.nutrients.per_serving)
    }
}

fn chart_points(values: &[f64; 4]) -> Vec<ChartPoint> {
    Nutrient::ALL
        .iter()
        .map(|n| ChartPoint {
            nutrient: n.label(),
            amount: values[n.index()],
        })
        .collect()
}

/// Resolve `query`, then scale the first match by `servings`.
///
/// Only the active record's cells are converted, so a malformed row fails
/// the lookups that select it and no others.
pub fn lookup(dataset: &Dataset, query: &Query, servings: ServingCount) -> Result<Lookup> {
    let matches = resolve(dataset, query);
    match active(&matches) {
        None => Ok(Lookup::NoMatch {
            query: query.describe().to_string(),
        }),
        Some(record) => {
            let table = matches.iter().map(|r| (*r).clone()).collect();
            NutritionReport::new(table, record, servings).map(Lookup::Found)
        }
    }
}
