//! Plain-text table rendering for query results
//!
//! Produces a box-drawn table sized by display width, so CJK and accented
//! names line up. NULL renders as an empty cell.

use crate::db::types::QueryResults;
use unicode_truncate::UnicodeTruncateStr;
use unicode_width::UnicodeWidthStr;

/// Table layout options
#[derive(Debug, Clone, Copy)]
pub struct TableStyle {
    /// Cells wider than this are cut and end in `...`
    pub max_cell_width: usize,
    /// Append a `(N rows)` footer
    pub show_row_count: bool,
}

impl Default for TableStyle {
    fn default() -> Self {
        Self {
            max_cell_width: 40,
            show_row_count: true,
        }
    }
}

/// Render `results` as a bordered table
pub fn render_table(results: &QueryResults, style: TableStyle) -> String {
    if results.columns.is_empty() {
        return "(no columns)".to_string();
    }

    let header: Vec<String> = results
        .columns
        .iter()
        .map(|c| fit(&c.name, style.max_cell_width))
        .collect();
    let body: Vec<Vec<String>> = results
        .rows
        .iter()
        .map(|row| {
            row.values
                .iter()
                .map(|v| fit(&v.to_display(), style.max_cell_width))
                .collect()
        })
        .collect();

    let mut widths: Vec<usize> = header.iter().map(|h| h.width()).collect();
    for row in &body {
        for (i, cell) in row.iter().enumerate() {
            if let Some(w) = widths.get_mut(i) {
                *w = (*w).max(cell.width());
            }
        }
    }

    let right_align: Vec<bool> = results
        .columns
        .iter()
        .map(|c| c.data_type.is_numeric())
        .collect();

    let mut out = String::new();
    out.push_str(&border(&widths, '┌', '┬', '┐'));
    out.push_str(&line(&header, &widths, &vec![false; widths.len()]));
    out.push_str(&border(&widths, '├', '┼', '┤'));
    for row in &body {
        out.push_str(&line(row, &widths, &right_align));
    }
    out.push_str(&border(&widths, '└', '┴', '┘'));

    if style.show_row_count {
        let n = results.rows.len();
        out.push_str(&format!("({} {})\n", n, if n == 1 { "row" } else { "rows" }));
    }
    out
}

/// Cut `text` to `max` display columns, marking the cut with `...`
fn fit(text: &str, max: usize) -> String {
    // Tabs and newlines would break the grid
    let text: String = text
        .chars()
        .map(|c| if c.is_control() { ' ' } else { c })
        .collect();
    if text.width() <= max {
        return text;
    }
    let (kept, _) = text.unicode_truncate(max.saturating_sub(3));
    format!("{}...", kept)
}

fn border(widths: &[usize], left: char, mid: char, right: char) -> String {
    let segments: Vec<String> = widths.iter().map(|w| "─".repeat(w + 2)).collect();
    format!("{}{}{}\n", left, segments.join(&mid.to_string()), right)
}

fn line(cells: &[String], widths: &[usize], right_align: &[bool]) -> String {
    let mut out = String::from("│");
    for (i, width) in widths.iter().enumerate() {
        let cell = cells.get(i).map(String::as_str).unwrap_or("");
        let pad = " ".repeat(width.saturating_sub(cell.width()));
        if right_align.get(i).copied().unwrap_or(false) {
            out.push_str(&format!(" {}{} │", pad, cell));
        } else {
            out.push_str(&format!(" {}{} │", cell, pad));
        }
    }
    out.push('\n');
    out
}
