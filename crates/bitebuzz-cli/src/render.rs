//! Plain-text rendering of listings.

use bitebuzz::FoodItem;
use chrono::DateTime;

const HEADERS: [&str; 6] = ["ID", "Name", "Description", "Category", "Added By", "Timestamp"];

/// Format Unix milliseconds as UTC `YYYY-MM-DD HH:MM:SS`.
pub fn format_timestamp(millis: i64) -> String {
    DateTime::from_timestamp_millis(millis)
        .map(|dt| dt.format("%Y-%m-%d %H:%M:%S").to_string())
        .unwrap_or_else(|| millis.to_string())
}

/// Render items as a left-aligned table with a header row.
pub fn table(items: &[FoodItem]) -> String {
    let rows: Vec<[String; 6]> = items
        .iter()
        .map(|item| {
            [
                item.id.to_string(),
                item.name.clone(),
                // Keep one item per line
                item.description.replace('\n', " "),
                item.category.clone(),
                item.added_by.clone(),
                format_timestamp(item.timestamp),
            ]
        })
        .collect();

    let mut widths = HEADERS.map(|h| h.chars().count());
    for row in &rows {
        for (width, cell) in widths.iter_mut().zip(row) {
            *width = (*width).max(cell.chars().count());
        }
    }

    let mut out = String::new();
    push_row(&mut out, &HEADERS.map(String::from), &widths);
    let rule: Vec<String> = widths.iter().map(|w| "-".repeat(*w)).collect();
    push_row(&mut out, &rule, &widths);
    for row in &rows {
        push_row(&mut out, row, &widths);
    }
    out
}

fn push_row(out: &mut String, cells: &[String], widths: &[usize]) {
    let line: Vec<String> = cells
        .iter()
        .zip(widths)
        .map(|(cell, width)| format!("{:<width$}", cell, width = *width))
        .collect();
    out.push_str(line.join("  ").trim_end());
    out.push('\n');
}
