use crate::constants::CHART_WIDTH;
use crate::lookup::{ChartPoint, NutritionReport};
use crate::models::{DishRecord, Nutrient};

/// Format a nutrient amount to one decimal place.
pub fn format_amount(value: f64) -> String {
    format!("{:.1}", value)
}

/// Display the matched rows (per serving).
pub fn display_match_table(matches: &[DishRecord]) {
    println!();
    println!("=== Nutritional Table (per serving) ===");
    println!();

    let name_width = matches
        .iter()
        .map(|r| r.name.len())
        .max()
        .unwrap_or(4)
        .max("Dish".len());

    let header: Vec<String> = Nutrient::ALL
        .iter()
        .map(|n| format!("{:>10}", n.column()))
        .collect();
    println!("{:<width$} {}", "Dish", header.join(" "), width = name_width);

    for record in matches {
        let cells: Vec<String> = Nutrient::ALL
            .iter()
            .map(|n| format!("{:>10}", record.amount(*n).to_string()))
            .collect();
        println!("{:<width$} {}", record.name, cells.join(" "), width = name_width);
    }
}

/// Display totals and per-serving values for the active dish.
pub fn display_summary(report: &NutritionReport) {
    println!();
    println!(
        "=== Nutrient Summary for {} serving(s) of {} ===",
        report.servings.get(),
        report.dish
    );
    println!();

    for nutrient in Nutrient::ALL {
        println!(
            "  {:<9} {:>8} {:<4} ({} / serving)",
            format!("{}:", nutrient.label()),
            format_amount(report.nutrients.total_of(nutrient)),
            nutrient.unit(),
            format_amount(report.nutrients.per_serving_of(nutrient)),
        );
    }
}

/// Render a horizontal bar chart as lines of text.
///
/// Bars are scaled so the largest amount spans `CHART_WIDTH` characters.
pub fn bar_chart_lines(points: &[ChartPoint]) -> Vec<String> {
    let max = points.iter().map(|p| p.amount).fold(0.0_f64, f64::max);
    let label_width = points.iter().map(|p| p.nutrient.len()).max().unwrap_or(0);

    points
        .iter()
        .map(|point| {
            let bar_len = if max > 0.0 {
                ((point.amount / max) * CHART_WIDTH as f64).round() as usize
            } else {
                0
            };
            format!(
                "  {:<width$} | {} {}",
                point.nutrient,
                "#".repeat(bar_len),
                format_amount(point.amount),
                width = label_width
            )
        })
        .collect()
}

pub fn display_bar_chart(title: &str, points: &[ChartPoint]) {
    println!();
    println!("=== {} ===", title);
    println!();
    for line in bar_chart_lines(points) {
        println!("{}", line);
    }
}

/// Display a full lookup result: table, summary, then chart.
pub fn display_report(report: &NutritionReport) {
    display_match_table(&report.matches);
    display_summary(report);
    display_bar_chart(
        &format!(
            "Nutrients for {} serving(s) of {}",
            report.servings.get(),
            report.dish
        ),
        report.breakdown(),
    );
    if report.servings.get() > 1 {
        display_bar_chart(
            &format!("Nutrients for 1 serving of {}", report.dish),
            &report.per_serving_breakdown(),
        );
    }
    println!();
}

/// Display the no-match warning with any close names.
pub fn display_no_match(query: &str, suggestions: &[String]) {
    println!();
    println!("No matching dish found for '{}'. Try a different name.", query);
    if !suggestions.is_empty() {
        println!("Did you mean: {}?", suggestions.join(", "));
    }
    println!();
}

pub fn display_dish_names(names: &[String]) {
    if names.is_empty() {
        println!("Dishes: (none)");
        return;
    }

    println!();
    println!("=== Dishes ({} items) ===", names.len());
    println!();
    for name in names {
        println!("  {}", name);
    }
    println!();
}
