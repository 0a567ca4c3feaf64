use crate::types::DirectoryRow;
use scraper::{ElementRef, Html, Selector};
use tracing::debug;

/// Extracts table rows from a wiki page body.
///
/// Every `<tr>` becomes one row holding the whitespace-trimmed text of its `<td>` cells in
/// document order. Header cells (`<th>`) are not included, so header-only rows come back empty.
pub fn rows_from_html(html: &str) -> Vec<DirectoryRow> {
    let document = Html::parse_document(html);
    let (Ok(row_sel), Ok(cell_sel)) = (Selector::parse("tr"), Selector::parse("td")) else {
        return Vec::new();
    };

    let rows: Vec<DirectoryRow> = document
        .select(&row_sel)
        .map(|row| {
            row.select(&cell_sel)
                .filter(|cell| is_direct_cell(row, cell))
                .map(|cell| cell_text(&cell))
                .collect()
        })
        .collect();

    debug!("rows_from_html: extracted rows={} html_len={}", rows.len(), html.len());
    rows
}

// A cell of a table nested inside this row belongs to the inner row, not this one.
fn is_direct_cell(row: ElementRef, cell: &ElementRef) -> bool {
    cell.parent()
        .and_then(ElementRef::wrap)
        .map(|parent| parent.id() == row.id())
        .unwrap_or(false)
}

fn cell_text(cell: &ElementRef) -> String {
    cell.text().collect::<String>().trim().to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_extracts_cells_in_order() {
        let html = r#"
            <table><tbody>
              <tr><th>Name</th><th>Slack</th><th>Lead</th></tr>
              <tr><td>Alice Smith</td><td>alice</td><td></td></tr>
              <tr><td> Bob <strong>Jones</strong> </td><td><p>bob</p></td><td>Alice Smith</td></tr>
            </tbody></table>
        "#;

        let rows = rows_from_html(html);

        assert_eq!(rows.len(), 3);
        assert!(rows[0].is_empty());
        assert_eq!(rows[1], vec!["Alice Smith", "alice", ""]);
        assert_eq!(rows[2], vec!["Bob Jones", "bob", "Alice Smith"]);
    }

    #[test]
    fn test_nested_tables_do_not_leak_cells() {
        let html = r#"
            <table>
              <tr><td>Outer</td><td>outer</td><td><table><tr><td>inner</td></tr></table></td></tr>
            </table>
        "#;

        let rows = rows_from_html(html);

        assert_eq!(rows.len(), 2);
        assert_eq!(rows[0].len(), 3);
        assert_eq!(rows[0][0], "Outer");
        assert_eq!(rows[1], vec!["inner"]);
    }

    #[test]
    fn test_no_table_yields_no_rows() {
        assert!(rows_from_html("<p>nothing here</p>").is_empty());
    }
}
