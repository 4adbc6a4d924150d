use crate::domain::model::LaunchRow;
use crate::utils::error::{EtlError, Result};
use scraper::{ElementRef, Html, Selector};

/// The launch table is the 4th table inside the article body.
const TABLE_ORDINAL: usize = 3;
/// The launch table carries seven columns; only the first (date) and the
/// last (result) survive the projection.
const EXPECTED_COLUMNS: usize = 7;
/// Leading header/noise rows above the launch data.
const HEADER_ROWS: usize = 2;

/// Pulls the launch rows out of the article HTML.
///
/// Looks up `div#mw-content-text`, takes its first child div, selects the
/// table at the hard-coded ordinal, flattens it into a rectangular grid and
/// projects each data row down to `{date, result}`. Any deviation from the
/// expected layout is fatal.
pub fn extract_launch_rows(html: &str) -> Result<Vec<LaunchRow>> {
    let document = Html::parse_document(html);

    let body_selector = Selector::parse("div#mw-content-text > div")
        .expect("Invalid CSS selector for article body");
    let body =
        document
            .select(&body_selector)
            .next()
            .ok_or_else(|| EtlError::PageStructureError {
                message: "article body div#mw-content-text > div not found".to_string(),
            })?;

    let table_selector = Selector::parse("table").expect("Invalid CSS selector for tables");
    let table =
        body.select(&table_selector)
            .nth(TABLE_ORDINAL)
            .ok_or_else(|| EtlError::PageStructureError {
                message: format!(
                    "expected at least {} tables in the article body",
                    TABLE_ORDINAL + 1
                ),
            })?;

    let grid = grid_rows(table);

    let width = grid.iter().map(|row| row.len()).max().unwrap_or(0);
    if width != EXPECTED_COLUMNS {
        return Err(EtlError::PageStructureError {
            message: format!(
                "launch table has {} columns, expected {}",
                width, EXPECTED_COLUMNS
            ),
        });
    }

    let mut rows = Vec::new();
    for mut cells in grid.into_iter().skip(HEADER_ROWS) {
        cells.resize(width, String::new());
        rows.push(LaunchRow {
            date: cells[0].clone(),
            result: cells[EXPECTED_COLUMNS - 1].clone(),
        });
    }

    Ok(rows)
}

/// Flattens a table into rows of cell text, duplicating `rowspan`/`colspan`
/// cells into every row and column they cover.
///
/// The launch table leans on rowspans: one launch's date cell spans all of
/// its payload rows, so continuation rows must repeat the date text for the
/// downstream same-date deduplication to see it.
fn grid_rows(table: ElementRef<'_>) -> Vec<Vec<String>> {
    let row_selector = Selector::parse("tr").expect("Invalid CSS selector for table rows");
    let cell_selector = Selector::parse("th, td").expect("Invalid CSS selector for table cells");

    // carry[col] = (rows still covered below the current one, cell text)
    let mut carry: Vec<(usize, String)> = Vec::new();
    let mut grid = Vec::new();

    for row_element in table.select(&row_selector) {
        let mut cells = row_element.select(&cell_selector).peekable();
        let mut row = Vec::new();
        let mut col = 0;

        while col < carry.len() || cells.peek().is_some() {
            if let Some((covered, text)) = carry.get_mut(col) {
                if *covered > 0 {
                    *covered -= 1;
                    row.push(text.clone());
                    col += 1;
                    continue;
                }
            }

            match cells.next() {
                Some(cell) => {
                    let text = cell_text(&cell);
                    let rowspan = span(&cell, "rowspan");
                    let colspan = span(&cell, "colspan");
                    for _ in 0..colspan {
                        if col >= carry.len() {
                            carry.resize(col + 1, (0, String::new()));
                        }
                        carry[col] = (rowspan - 1, text.clone());
                        row.push(text.clone());
                        col += 1;
                    }
                }
                None => {
                    // short row with no spanning cell covering this column
                    row.push(String::new());
                    col += 1;
                }
            }
        }

        grid.push(row);
    }

    grid
}

fn span(cell: &ElementRef<'_>, attr: &str) -> usize {
    cell.value()
        .attr(attr)
        .and_then(|v| v.trim().parse::<usize>().ok())
        .filter(|&n| n > 0)
        .unwrap_or(1)
}

/// Concatenated text of the cell with whitespace collapsed.
fn cell_text(cell: &ElementRef<'_>) -> String {
    cell.text()
        .collect::<String>()
        .split_whitespace()
        .collect::<Vec<_>>()
        .join(" ")
}
