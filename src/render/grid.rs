//! Bordered grid layout backed by comfy-table.

use crate::error::RenderError;
use crate::render::check_row_width;
use comfy_table::presets::UTF8_FULL;
use comfy_table::Table;
use std::io::Write;

/// Render `rows` as a bordered grid with a separator under every block.
///
/// Adjacent rows that agree on every column listed in `merge` are folded into a
/// single block: merged columns are printed once, the remaining columns stack the
/// rows' values line by line. An empty `merge` keeps one block per row.
pub fn render_grid(
    headers: &[&str],
    rows: &[Vec<String>],
    merge: &[usize],
    out: &mut dyn Write,
) -> Result<(), RenderError> {
    for row in rows {
        check_row_width(headers, row)?;
    }

    let mut table = Table::new();
    table.load_preset(UTF8_FULL);
    table.set_header(headers.to_vec());
    for block in fold_blocks(rows, merge) {
        table.add_row(block);
    }
    writeln!(out, "{}", table)?;
    Ok(())
}

fn fold_blocks(rows: &[Vec<String>], merge: &[usize]) -> Vec<Vec<String>> {
    let mut groups: Vec<Vec<&Vec<String>>> = Vec::new();
    for row in rows {
        match groups.last_mut() {
            Some(group) if !merge.is_empty() && same_key(group[0], row, merge) => group.push(row),
            _ => groups.push(vec![row]),
        }
    }

    groups
        .into_iter()
        .map(|group| {
            let width = group[0].len();
            (0..width)
                .map(|col| {
                    if merge.contains(&col) {
                        group[0][col].clone()
                    } else {
                        group
                            .iter()
                            .map(|row| row[col].as_str())
                            .collect::<Vec<_>>()
                            .join("\n")
                    }
                })
                .collect()
        })
        .collect()
}

fn same_key(a: &[String], b: &[String], merge: &[usize]) -> bool {
    merge
        .iter()
        .filter(|&&col| col < a.len())
        .all(|&col| a[col] == b[col])
}
