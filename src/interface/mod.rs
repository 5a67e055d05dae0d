pub mod prompts;
pub mod render;

pub use prompts::{
    collect_lookup_inputs, prompt_dish, prompt_search, prompt_servings, prompt_yes_no,
};
pub use render::{
    bar_chart_lines, display_bar_chart, display_dish_names, display_match_table,
    display_no_match, display_report, display_summary, format_amount,
};
