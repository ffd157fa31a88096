//! Text and HTML rendering of result regions. The HTML matches the table
//! layout of the web front-end.

use crate::{CellView, RegionContent, TableView};

/// Renders a region as an HTML fragment. Text content is escaped, so
/// server-provided titles and error strings cannot inject markup.
pub fn to_html(content: &RegionContent) -> String {
    match content {
        RegionContent::Empty => String::new(),
        RegionContent::Text(text) => escape_text(text),
        RegionContent::Table(table) => table_html(table),
    }
}

/// Renders a region as plain text: one line per table row, cells separated
/// by ` | `, links shown as `title <href>`.
pub fn to_text(content: &RegionContent) -> String {
    match content {
        RegionContent::Empty => String::new(),
        RegionContent::Text(text) => text.clone(),
        RegionContent::Table(table) => {
            let mut lines = Vec::with_capacity(table.rows.len() + 1);
            lines.push(table.headers.join(" | "));
            for row in &table.rows {
                let cells: Vec<String> = row
                    .iter()
                    .map(|cell| match cell {
                        CellView::Text(text) => text.clone(),
                        CellView::Link { text, href } => format!("{text} <{href}>"),
                    })
                    .collect();
                lines.push(cells.join(" | "));
            }
            lines.join("\n")
        }
    }
}

fn table_html(table: &TableView) -> String {
    let mut out = String::from("<table border='1'><tr>");
    for header in &table.headers {
        out.push_str("<th>");
        out.push_str(&escape_text(header));
        out.push_str("</th>");
    }
    out.push_str("</tr>");
    for row in &table.rows {
        out.push_str("<tr>");
        for cell in row {
            out.push_str("<td>");
            out.push_str(&cell_html(cell));
            out.push_str("</td>");
        }
        out.push_str("</tr>");
    }
    out.push_str("</table>");
    out
}

fn cell_html(cell: &CellView) -> String {
    match cell {
        CellView::Text(text) => escape_text(text),
        CellView::Link { text, href } => format!(
            "<a href=\"{}\" target=\"_blank\">{}</a>",
            escape_attr(href),
            escape_text(text)
        ),
    }
}

fn escape_text(raw: &str) -> String {
    let mut out = String::with_capacity(raw.len());
    for ch in raw.chars() {
        match ch {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            _ => out.push(ch),
        }
    }
    out
}

fn escape_attr(raw: &str) -> String {
    escape_text(raw)
        .replace('"', "&quot;")
        .replace('\'', "&#39;")
}
