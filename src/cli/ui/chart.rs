use colored::Colorize;

use crate::config::Config;
use crate::core::services::ChartSlice;

const BAR_WIDTH: usize = 30;

/// Horizontal bars scaled to the largest slice.
pub fn render_bar_chart(slices: &[ChartSlice], config: &Config) -> String {
    let max = slices.iter().map(|s| s.total).fold(0.0_f64, f64::max);
    render_rows(slices, |slice| {
        let filled = if max > 0.0 {
            ((slice.total / max) * BAR_WIDTH as f64).round() as usize
        } else {
            0
        };
        (filled, config.format_amount(slice.total))
    })
}

/// Share of the grand total per slice.
pub fn render_pie_chart(slices: &[ChartSlice], config: &Config) -> String {
    let sum: f64 = slices.iter().map(|s| s.total).sum();
    render_rows(slices, |slice| {
        let share = if sum > 0.0 { slice.total / sum } else { 0.0 };
        let filled = (share * BAR_WIDTH as f64).round() as usize;
        (
            filled,
            format!("{:>5.1}%  {}", share * 100.0, config.format_amount(slice.total)),
        )
    })
}

fn render_rows<F>(slices: &[ChartSlice], measure: F) -> String
where
    F: Fn(&ChartSlice) -> (usize, String),
{
    let label_width = slices
        .iter()
        .map(|s| s.category.as_str().chars().count())
        .max()
        .unwrap_or(0);

    slices
        .iter()
        .map(|slice| {
            let (filled, value) = measure(slice);
            let bar = "█".repeat(filled.min(BAR_WIDTH));
            let (r, g, b) = hex_to_rgb(slice.color);
            format!(
                "{:<label_width$}  {:<bar_width$}  {}  {}",
                slice.category.as_str(),
                bar.truecolor(r, g, b),
                value,
                slice.color,
                bar_width = BAR_WIDTH,
            )
        })
        .collect::<Vec<_>>()
        .join("\n")
}

/// Parses `#RRGGBB`; malformed input renders as white.
fn hex_to_rgb(hex: &str) -> (u8, u8, u8) {
    let digits = hex.trim_start_matches('#');
    let channel = |range: std::ops::Range<usize>| {
        digits
            .get(range)
            .and_then(|part| u8::from_str_radix(part, 16).ok())
            .unwrap_or(255)
    };
    (channel(0..2), channel(2..4), channel(4..6))
}
