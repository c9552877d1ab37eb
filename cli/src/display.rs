use crate::colors::ColorScheme;
use charsep_core::{PixelMatrix, Separation};
use std::path::Path;

pub fn display_analysis_info(image_path: &Path, pixels: &PixelMatrix, colors: &ColorScheme) {
    println!(
        "🔍 Analyzing {} ({}x{} pixels)",
        colors.heading(&image_path.display().to_string()),
        colors.number(&pixels.width().to_string()),
        colors.number(&pixels.height().to_string()),
    );
}

pub fn display_separation(separation: &Separation, colors: &ColorScheme) {
    display_index_line("Whitespace rows", &separation.rows, colors);
    display_index_line("Whitespace columns", &separation.cols, colors);
}

fn display_index_line(label: &str, indices: &[usize], colors: &ColorScheme) {
    if indices.is_empty() {
        println!("{} ({}): none", colors.heading(label), colors.number("0"));
    } else {
        println!(
            "{} ({}): {}",
            colors.heading(label),
            colors.number(&indices.len().to_string()),
            colors.indices(&format_runs(indices)),
        );
    }
}

pub fn display_statistics(analysis_time: f64, colors: &ColorScheme) {
    println!(
        "\n{}",
        colors.stats(&format!("⏱️  Analyzed in {:.1}ms", analysis_time * 1000.0))
    );
}

/// Collapses ascending indices into a compact run listing,
/// e.g. `[0, 1, 2, 7, 9, 10]` becomes `"0-2, 7, 9-10"`.
pub fn format_runs(indices: &[usize]) -> String {
    let mut runs: Vec<String> = Vec::new();
    let mut iter = indices.iter().copied().peekable();

    while let Some(start) = iter.next() {
        let mut end = start;
        while let Some(&next) = iter.peek() {
            if next != end + 1 {
                break;
            }
            end = next;
            iter.next();
        }

        if start == end {
            runs.push(start.to_string());
        } else {
            runs.push(format!("{start}-{end}"));
        }
    }

    runs.join(", ")
}
