use super::diagnostics::Diagnostics;
use crate::constants::DIRECTORY_ROW_CELLS;
use crate::types::{DirectoryEntry, DirectoryRow};
use tracing::debug;

/// Turns raw directory rows into entries.
///
/// Cells are trimmed. Rows without a handle are dropped silently, rows with some but
/// fewer than three cells are skipped with a diagnostic, and cell-less rows (header
/// rows made only of `<th>`) are ignored.
pub fn parse_directory_rows(rows: &[DirectoryRow], diagnostics: &mut Diagnostics) -> Vec<DirectoryEntry> {
    let mut entries = Vec::with_capacity(rows.len());

    for (index, row) in rows.iter().enumerate() {
        if row.is_empty() {
            continue;
        }
        if row.len() < DIRECTORY_ROW_CELLS {
            diagnostics.malformed_row(format!(
                "Directory row {} has {} cells, expected at least {}",
                index + 1,
                row.len(),
                DIRECTORY_ROW_CELLS
            ));
            continue;
        }

        let handle = row[1].trim();
        if handle.is_empty() {
            continue;
        }

        entries.push(DirectoryEntry {
            real_name: row[0].trim().to_string(),
            handle: handle.to_string(),
            lead_real_name: row[2].trim().to_string(),
            resolved_lead_handle: None,
        });
    }

    debug!("Parsed {} directory entries from {} rows", entries.len(), rows.len());
    entries
}
