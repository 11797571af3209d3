//! Label-aligned list layout: one `label: value` line per field, cards split by dividers.

use crate::error::RenderError;
use crate::render::check_row_width;
use std::io::Write;

/// Render `rows` as vertical cards.
///
/// Every label is padded to the widest header so values start on the same column.
/// The divider spans the longest formatted line seen across all rows, so the whole
/// output is formatted before the first byte is written.
pub fn render_list(
    headers: &[&str],
    rows: &[Vec<String>],
    out: &mut dyn Write,
) -> Result<(), RenderError> {
    let max_label = headers.iter().map(|h| display_width(h)).max().unwrap_or(0);
    // "<label>:" is the shortest line a card can hold.
    let mut max_line = max_label + 1;
    let mut cards = Vec::with_capacity(rows.len());

    for row in rows {
        check_row_width(headers, row)?;
        let mut lines = Vec::with_capacity(headers.len());
        for (label, value) in headers.iter().zip(row) {
            let padding = " ".repeat(max_label - display_width(label));
            let line = format!("{}: {}{}", label, padding, value);
            for part in line.split('\n') {
                max_line = max_line.max(display_width(part));
            }
            lines.push(line);
        }
        cards.push(lines.join("\n"));
    }

    let divider = "-".repeat(max_line);
    let mut rendered = String::new();
    rendered.push_str(&divider);
    rendered.push('\n');
    for card in cards {
        rendered.push_str(&card);
        rendered.push('\n');
        rendered.push_str(&divider);
        rendered.push('\n');
    }
    out.write_all(rendered.as_bytes())?;
    Ok(())
}

fn display_width(s: &str) -> usize {
    s.chars().count()
}
