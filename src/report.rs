//! Plain-text rendering of results.

use crate::compare::Comparison;
use crate::result::KnapsackResult;
use std::fmt::Write;

const WIDE: usize = 80;
const NARROW: usize = 60;

/// Renders a single result block.
///
/// With `detailed`, the selected item ids are listed in selection order.
pub fn render_result(result: &KnapsackResult, detailed: bool) -> String {
    let mut out = String::new();
    let rule = "=".repeat(NARROW);
    let _ = writeln!(out, "{rule}");
    let _ = writeln!(out, "{}", result.name());
    let _ = writeln!(out, "{rule}");
    let _ = writeln!(out, "Total Value: {:.2}", result.total_value);
    let _ = writeln!(out, "Total Weight: {:.2}", result.total_weight);
    let _ = writeln!(out, "Execution Time: {:.3} ms", result.elapsed_ms());
    if detailed {
        let ids: Vec<String> = result.selected_items.iter().map(|id| id.to_string()).collect();
        let _ = writeln!(out, "Selected Items: [{}]", ids.join(", "));
    }
    out
}

/// Renders the summary table of a comparison, in execution order.
pub fn render_summary(comparison: &Comparison) -> String {
    let mut out = String::new();
    let rule = "=".repeat(WIDE + 14);
    let _ = writeln!(out, "{rule}");
    let _ = writeln!(out, "SUMMARY - ALL RESULTS");
    let _ = writeln!(out, "{rule}");
    let _ = writeln!(
        out,
        "{:<42} {:>12} {:>12} {:>12} {:>12}",
        "Algorithm", "Value", "Weight", "Time (ms)", "Optimality (%)"
    );
    let _ = writeln!(out, "{}", "-".repeat(WIDE + 14));
    for (result, pct) in comparison
        .results
        .iter()
        .zip(comparison.optimality_ratios())
    {
        let _ = writeln!(
            out,
            "{:<42} {:>12.2} {:>12.2} {:>12.3} {:>12.2}",
            result.name(),
            result.total_value,
            result.total_weight,
            result.elapsed_ms(),
            pct
        );
    }
    let _ = writeln!(
        out,
        "Reference (fractional optimum): {:.2}",
        comparison.reference_value
    );
    out
}
