use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::{NutritionError, Result};

/// One of the four tracked nutrients, in display order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Nutrient {
    Calories,
    Protein,
    Carbs,
    Fat,
}

impl Nutrient {
    pub const ALL: [Nutrient; 4] = [
        Nutrient::Calories,
        Nutrient::Protein,
        Nutrient::Carbs,
        Nutrient::Fat,
    ];

    /// Column header in the dataset file.
    pub fn column(self) -> &'static str {
        match self {
            Nutrient::Calories => "Calories",
            Nutrient::Protein => "Protein_g",
            Nutrient::Carbs => "Carbs_g",
            Nutrient::Fat => "Fat_g",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Nutrient::Calories => "Calories",
            Nutrient::Protein => "Protein",
            Nutrient::Carbs => "Carbs",
            Nutrient::Fat => "Fat",
        }
    }

    pub fn unit(self) -> &'static str {
        match self {
            Nutrient::Calories => "kcal",
            _ => "g",
        }
    }

    /// Position in a `[f64; 4]` nutrient array.
    #[inline]
    pub fn index(self) -> usize {
        self as usize
    }
}

/// A nutrient cell as read from the dataset.
///
/// Cells that do not parse as numbers are kept verbatim so the rest of the
/// table stays usable; they only fail when a lookup needs their value.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum Amount {
    Value(f64),
    Malformed(String),
}

impl Amount {
    pub fn parse(raw: &str) -> Self {
        let raw = raw.trim();
        raw.parse::<f64>()
            .map(Amount::Value)
            .unwrap_or_else(|_| Amount::Malformed(raw.to_string()))
    }

    pub fn value(&self) -> Option<f64> {
        match self {
            Amount::Value(v) => Some(*v),
            Amount::Malformed(_) => None,
        }
    }
}

impl fmt::Display for Amount {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Amount::Value(v) => write!(f, "{:.1}", v),
            Amount::Malformed(raw) => f.write_str(raw),
        }
    }
}

/// One CSV row before its nutrient cells are interpreted.
#[derive(Debug, Deserialize)]
struct DishRow {
    #[serde(rename = "Dish")]
    name: String,

    #[serde(rename = "Calories")]
    calories: String,

    #[serde(rename = "Protein_g")]
    protein_g: String,

    #[serde(rename = "Carbs_g")]
    carbs_g: String,

    #[serde(rename = "Fat_g")]
    fat_g: String,
}

/// A dish row with per-serving nutritional values.
///
/// Records are read-only once loaded. Names are not guaranteed unique.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(from = "DishRow")]
pub struct DishRecord {
    #[serde(rename = "Dish")]
    pub name: String,

    #[serde(rename = "Calories")]
    pub calories: Amount,

    #[serde(rename = "Protein_g")]
    pub protein_g: Amount,

    #[serde(rename = "Carbs_g")]
    pub carbs_g: Amount,

    #[serde(rename = "Fat_g")]
    pub fat_g: Amount,
}

impl From<DishRow> for DishRecord {
    fn from(row: DishRow) -> Self {
        Self {
            name: row.name,
            calories: Amount::parse(&row.calories),
            protein_g: Amount::parse(&row.protein_g),
            carbs_g: Amount::parse(&row.carbs_g),
            fat_g: Amount::parse(&row.fat_g),
        }
    }
}

impl DishRecord {
    pub fn new(name: &str, calories: f64, protein_g: f64, carbs_g: f64, fat_g: f64) -> Self {
        Self {
            name: name.to_string(),
            calories: Amount::Value(calories),
            protein_g: Amount::Value(protein_g),
            carbs_g: Amount::Value(carbs_g),
            fat_g: Amount::Value(fat_g),
        }
    }

    pub fn amount(&self, nutrient: Nutrient) -> &Amount {
        match nutrient {
            Nutrient::Calories => &self.calories,
            Nutrient::Protein => &self.protein_g,
            Nutrient::Carbs => &self.carbs_g,
            Nutrient::Fat => &self.fat_g,
        }
    }

    /// Per-serving values ordered as [`Nutrient::ALL`].
    ///
    /// Fails on the first cell that is not a number.
    pub fn nutrients(&self) -> Result<[f64; 4]> {
        let mut values = [0.0; 4];
        for nutrient in Nutrient::ALL {
            let amount = self.amount(nutrient);
            values[nutrient.index()] =
                amount
                    .value()
                    .ok_or_else(|| NutritionError::MalformedValue {
                        dish: self.name.clone(),
                        column: nutrient.column(),
                        value: amount.to_string(),
                    })?;
        }
        Ok(values)
    }

    /// Canonical key for lookups (lowercase name).
    pub fn key(&self) -> String {
        self.name.to_lowercase()
    }
}
