use std::collections::HashMap;
use std::fs;
use std::path::{Path, PathBuf};
use std::sync::Arc;

use once_cell::sync::{Lazy, OnceCell};
use parking_lot::Mutex;
use tracing::{debug, info};

use crate::error::{NutritionError, Result};
use crate::models::{Dataset, DishRecord};

/// Load the dish table from a CSV file.
///
/// Rows keep file order; duplicate names are kept as-is. Any path that cannot
/// be read as a file (missing, a directory, no permission) is `DatasetNotFound`.
/// Nutrient cells are not checked here; see [`DishRecord::nutrients`].
pub fn load_dataset<P: AsRef<Path>>(path: P) -> Result<Dataset> {
    let path = path.as_ref();
    let bytes = fs::read(path).map_err(|source| NutritionError::DatasetNotFound {
        path: path.to_path_buf(),
        source,
    })?;

    let mut reader = csv::ReaderBuilder::new()
        .trim(csv::Trim::All)
        .from_reader(bytes.as_slice());
    let records = reader
        .deserialize::<DishRecord>()
        .collect::<std::result::Result<Vec<_>, _>>()?;

    info!(path = %path.display(), dishes = records.len(), "loaded dish dataset");
    Ok(Dataset::new(records))
}

/// Process-lifetime cache of loaded datasets, keyed by source path.
///
/// Each path gets its own init cell, so one slow load never blocks lookups of
/// another path. A failed load drops its cell; the next call retries.
#[derive(Default)]
pub struct DatasetCache {
    cells: Mutex<HashMap<PathBuf, Arc<OnceCell<Arc<Dataset>>>>>,
}

impl DatasetCache {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get_or_load<P: AsRef<Path>>(&self, path: P) -> Result<Arc<Dataset>> {
        let path = path.as_ref();
        let cell = {
            let mut cells = self.cells.lock();
            Arc::clone(cells.entry(path.to_path_buf()).or_default())
        };

        if let Some(dataset) = cell.get() {
            debug!(path = %path.display(), "dataset cache hit");
            return Ok(Arc::clone(dataset));
        }

        let loaded = cell.get_or_try_init(|| {
            debug!(path = %path.display(), "dataset cache miss");
            load_dataset(path).map(Arc::new)
        });

        match loaded {
            Ok(dataset) => Ok(Arc::clone(dataset)),
            Err(e) => {
                self.evict_empty(path, &cell);
                Err(e)
            }
        }
    }

    /// Remove `path`'s cell if it is still `cell` and was never filled.
    fn evict_empty(&self, path: &Path, cell: &Arc<OnceCell<Arc<Dataset>>>) {
        let mut cells = self.cells.lock();
        let stale = cells
            .get(path)
            .is_some_and(|current| Arc::ptr_eq(current, cell) && current.get().is_none());
        if stale {
            cells.remove(path);
        }
    }

    /// Number of paths with a successfully loaded dataset.
    pub fn len(&self) -> usize {
        self.cells.lock().values().filter(|c| c.get().is_some()).count()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

static DATASET_CACHE: Lazy<DatasetCache> = Lazy::new(DatasetCache::new);

/// Load through the process-wide cache.
pub fn load_cached<P: AsRef<Path>>(path: P) -> Result<Arc<Dataset>> {
    DATASET_CACHE.get_or_load(path)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Amount;
    use std::io::Write;
    use tempfile::NamedTempFile;

    fn write_csv(content: &str) -> NamedTempFile {
        let mut file = NamedTempFile::new().unwrap();
        file.write_all(content.as_bytes()).unwrap();
        file
    }

    #[test]
    fn test_load_keeps_order_and_duplicates() {
        let file = write_csv(
            "Dish,Calories,Protein_g,Carbs_g,Fat_g\n\
             Veg Biryani,240,5.8,38,7.5\n\
             Idli,58,2,12,0.4\n\
             Veg Biryani,250,6,40,8\n",
        );

        let ds = load_dataset(file.path()).unwrap();
        assert_eq!(ds.len(), 3);
        assert_eq!(ds.records()[0].name, "Veg Biryani");
        assert_eq!(ds.records()[1].name, "Idli");
        assert_eq!(ds.records()[2].calories, Amount::Value(250.0));
    }

    #[test]
    fn test_load_ignores_extra_columns() {
        let file = write_csv(
            "Dish,Cuisine,Calories,Protein_g,Carbs_g,Fat_g\n\
             Poha,Marathi,180,3.8,32,4.5\n",
        );

        let ds = load_dataset(file.path()).unwrap();
        assert_eq!(ds.len(), 1);
        assert_eq!(ds.records()[0].fat_g, Amount::Value(4.5));
    }

    #[test]
    fn test_missing_file_is_dataset_not_found() {
        let err = load_dataset("/nonexistent/path").unwrap_err();
        assert!(matches!(err, NutritionError::DatasetNotFound { .. }));
    }

    #[test]
    fn test_directory_is_dataset_not_found() {
        let dir = tempfile::tempdir().unwrap();
        let err = load_dataset(dir.path()).unwrap_err();
        assert!(matches!(err, NutritionError::DatasetNotFound { .. }));
    }

    #[test]
    fn test_malformed_number_keeps_other_rows() {
        let file = write_csv(
            "Dish,Calories,Protein_g,Carbs_g,Fat_g\n\
             Idli,58,2,12,0.4\n\
             Upma,lots,5,29,6\n",
        );

        let ds = load_dataset(file.path()).unwrap();
        assert_eq!(ds.len(), 2);
        assert!(ds.records()[0].nutrients().is_ok());
        assert_eq!(ds.records()[1].calories, Amount::Malformed("lots".to_string()));
        assert!(ds.records()[1].nutrients().is_err());
    }

    #[test]
    fn test_missing_column_is_csv_error() {
        let file = write_csv("Dish,Calories,Protein_g,Carbs_g\nIdli,58,2,12\n");
        let err = load_dataset(file.path()).unwrap_err();
        assert!(matches!(err, NutritionError::Csv(_)));
    }

    #[test]
    fn test_cache_returns_same_dataset() {
        let file = write_csv("Dish,Calories,Protein_g,Carbs_g,Fat_g\nIdli,58,2,12,0.4\n");
        let cache = DatasetCache::new();

        let first = cache.get_or_load(file.path()).unwrap();
        let second = cache.get_or_load(file.path()).unwrap();
        assert!(Arc::ptr_eq(&first, &second));
        assert_eq!(cache.len(), 1);
    }

    #[test]
    fn test_failed_paths_leave_no_entries() {
        let dir = tempfile::tempdir().unwrap();
        let cache = DatasetCache::new();

        for i in 0..3 {
            let path = dir.path().join(format!("missing-{}.csv", i));
            assert!(cache.get_or_load(&path).is_err());
        }
        assert!(cache.get_or_load(dir.path()).is_err());
        assert!(cache.cells.lock().is_empty());
    }

    #[test]
    fn test_cache_does_not_keep_failures() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("dishes.csv");
        let cache = DatasetCache::new();

        assert!(cache.get_or_load(&path).is_err());
        assert!(cache.is_empty());
        assert!(cache.cells.lock().is_empty());

        std::fs::write(&path, "Dish,Calories,Protein_g,Carbs_g,Fat_g\nUpma,190,5,29,6\n").unwrap();
        let ds = cache.get_or_load(&path).unwrap();
        assert_eq!(ds.records()[0].name, "Upma");
    }
}
