/// Default dataset location, relative to the working directory.
pub const DEFAULT_DATA_PATH: &str = "data/dishes.csv";

/// Serving count bounds (inclusive).
pub const MIN_SERVINGS: u8 = 1;
pub const MAX_SERVINGS: u8 = 5;

/// Serving count used when none is given.
pub const DEFAULT_SERVINGS: u8 = 1;

// ─────────────────────────────────────────────────────────────────────────────
// No-match suggestions
// ─────────────────────────────────────────────────────────────────────────────

/// Minimum Jaro-Winkler similarity for a dish name to be suggested.
pub const SUGGESTION_THRESHOLD: f64 = 0.7;

/// Maximum number of suggested names shown after a miss.
pub const MAX_SUGGESTIONS: usize = 5;

// ─────────────────────────────────────────────────────────────────────────────
// Display
// ─────────────────────────────────────────────────────────────────────────────

/// Width in characters of the longest bar in the nutrient chart.
pub const CHART_WIDTH: usize = 40;
