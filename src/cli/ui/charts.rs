//! Text renderings of the ledger charts.

use pfm_config::Config;
use pfm_core::{BarChart, PieChart};

const BAR_WIDTH: usize = 30;
pub const EMPTY_PIE_MESSAGE: &str = "No expense data available";

/// One row per category: label, a bar proportional to its share, the
/// percentage, and the amount.
pub fn render_pie_chart(chart: &PieChart, config: &Config) -> String {
    if chart.is_empty() {
        return EMPTY_PIE_MESSAGE.to_string();
    }
    let label_width = label_width(chart.slices.iter().map(|slice| slice.label.as_str()));
    chart
        .slices
        .iter()
        .map(|slice| {
            format!(
                "{:<label_width$} {:<BAR_WIDTH$} {:>5.1}%  {}",
                slice.label,
                bar(slice.share),
                slice.share * 100.0,
                config.format_amount(slice.value),
            )
        })
        .collect::<Vec<_>>()
        .join("\n")
}

/// Bars are scaled against the largest value in the series.
pub fn render_bar_chart(chart: &BarChart, config: &Config) -> String {
    let max = chart.max_value();
    let label_width = label_width(chart.bars.iter().map(|bar| bar.label.as_str()));
    let mut lines = vec![format!("{} ({})", chart.series_label, config.currency_symbol)];
    lines.extend(chart.bars.iter().map(|entry| {
        let ratio = if max > 0.0 { entry.value / max } else { 0.0 };
        format!(
            "{:<label_width$} {:<BAR_WIDTH$} {}",
            entry.label,
            bar(ratio),
            config.format_amount(entry.value),
        )
    }));
    lines.join("\n")
}

fn bar(ratio: f64) -> String {
    let cells = (ratio.clamp(0.0, 1.0) * BAR_WIDTH as f64).round() as usize;
    "█".repeat(cells)
}

fn label_width<'a>(labels: impl Iterator<Item = &'a str>) -> usize {
    labels.map(|label| label.chars().count()).max().unwrap_or(0)
}
