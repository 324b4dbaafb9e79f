//! Table layout.
//!
//! Cells are rendered into scratch buffers first so each column can be padded
//! to the display width of its widest cell.

use unicode_width::UnicodeWidthStr;

use crate::convert::{walk, Context};
use crate::node::{Node, NodeRef};
use crate::rules::commonmark::boundary;
use crate::utilities::is_blank;
use crate::Result;

pub fn table(node: NodeRef<'_>, out: &mut String, cx: &Context<'_>) -> Result<()> {
    boundary(&node, out, cx);

    let mut rows = Vec::new();
    for row in table_rows(&node) {
        let mut cells = Vec::new();
        for cell in row.element_children().filter(|c| c.is_tag("td") || c.is_tag("th")) {
            cells.push(fold_cell(cell, cx)?);
        }
        rows.push(cells);
    }

    out.push_str(&layout(&rows));
    out.push('\n');
    Ok(())
}

/// `<tr>` elements in document order, looking through one level of
/// `thead`/`tbody`/`tfoot`
fn table_rows(table: &Node) -> Vec<&Node> {
    let mut rows = Vec::new();
    for child in table.element_children() {
        match child.tag_name() {
            "thead" | "tbody" | "tfoot" => {
                rows.extend(child.element_children().filter(|c| c.is_tag("tr")));
            }
            "tr" => rows.push(child),
            _ => {}
        }
    }
    rows
}

/// Render a cell and fold its output onto a single line
fn fold_cell(cell: &Node, cx: &Context<'_>) -> Result<String> {
    let mut buf = String::new();
    walk(cell, &mut buf, 0, cx)?;

    // A nested table's separator row would widen every enclosing level
    let lines: Vec<&str> = buf
        .split('\n')
        .filter(|line| !is_blank(line))
        .map(str::trim)
        .filter(|line| !is_separator(line))
        .collect();
    Ok(lines.join(" "))
}

/// `|---|--|` rows written by [`layout`]
fn is_separator(line: &str) -> bool {
    line.contains('-') && line.chars().all(|c| c == '|' || c == '-')
}

/// Lay out rows as a pipe table. The first row is the header.
pub(crate) fn layout(rows: &[Vec<String>]) -> String {
    let columns = rows.iter().map(Vec::len).max().unwrap_or(0);

    let mut widths = vec![0; columns];
    for row in rows {
        for (width, cell) in widths.iter_mut().zip(row) {
            *width = (*width).max(cell.width());
        }
    }

    let mut out = String::new();
    for (i, row) in rows.iter().enumerate() {
        for (column, width) in widths.iter().enumerate() {
            out.push('|');
            let cell = row.get(column).map(String::as_str).unwrap_or("");
            out.push_str(cell);
            out.push_str(&" ".repeat(width - cell.width()));
        }
        out.push_str("|\n");

        if i == 0 {
            for width in &widths {
                out.push('|');
                out.push_str(&"-".repeat(*width));
            }
            out.push_str("|\n");
        }
    }
    out
}
