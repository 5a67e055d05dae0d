use std::collections::BTreeSet;

use crate::models::DishRecord;

/// In-memory dish table with a lowercase name index.
///
/// `records` and `lower_names` are only ever built together, so index `i`
/// in one always refers to row `i` in the other.
#[derive(Debug, Clone, Default)]
pub struct Dataset {
    records: Vec<DishRecord>,
    lower_names: Vec<String>,
}

impl Dataset {
    pub fn new(records: Vec<DishRecord>) -> Self {
        let lower_names = records.iter().map(DishRecord::key).collect();
        Self {
            records,
            lower_names,
        }
    }

    pub fn records(&self) -> &[DishRecord] {
        &self.records
    }

    /// Rows paired with their lowercase names, in file order.
    pub fn indexed(&self) -> impl Iterator<Item = (&DishRecord, &str)> {
        self.records
            .iter()
            .zip(self.lower_names.iter().map(String::as_str))
    }

    /// Sorted distinct dish names, for the selection list.
    pub fn dish_names(&self) -> Vec<String> {
        self.records
            .iter()
            .map(|r| r.name.clone())
            .collect::<BTreeSet<_>>()
            .into_iter()
            .collect()
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_dataset() -> Dataset {
        Dataset::new(vec![
            DishRecord::new("Veg Biryani", 240.0, 5.8, 38.0, 7.5),
            DishRecord::new("Idli", 58.0, 2.0, 12.0, 0.4),
            DishRecord::new("Veg Biryani", 250.0, 6.0, 40.0, 8.0),
        ])
    }

    #[test]
    fn test_index_matches_records() {
        let ds = sample_dataset();
        let indexed: Vec<_> = ds.indexed().collect();
        assert_eq!(indexed.len(), ds.len());
        assert_eq!(indexed[0].1, "veg biryani");
        assert_eq!(indexed[1].1, "idli");
    }

    #[test]
    fn test_dish_names_sorted_distinct() {
        let ds = sample_dataset();
        assert_eq!(ds.dish_names(), vec!["Idli", "Veg Biryani"]);
    }

    #[test]
    fn test_empty() {
        let ds = Dataset::default();
        assert!(ds.is_empty());
        assert!(ds.dish_names().is_empty());
    }
}
