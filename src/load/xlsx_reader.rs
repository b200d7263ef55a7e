// src/load/xlsx_reader.rs
use calamine::{open_workbook_auto, Data, Reader};
use std::{fs::File, path::Path};
use tracing::{debug, warn};

use super::{utils::is_blank_row, RawTable};
use crate::error::LoadError;

/// Read the first worksheet of a workbook; its first row holds the headers.
pub fn read_workbook(path: &Path) -> Result<RawTable, LoadError> {
    // Probe the file ourselves so an unreadable path is reported as such,
    // not as a parse failure from the workbook reader.
    File::open(path).map_err(|source| LoadError::File {
        path: path.to_path_buf(),
        source,
    })?;

    let mut workbook = open_workbook_auto(path).map_err(|source| LoadError::Workbook {
        path: path.to_path_buf(),
        source,
    })?;

    let sheet_names = workbook.sheet_names();
    if sheet_names.len() > 1 {
        warn!(sheets = ?sheet_names, "workbook has several sheets; reading the first");
    }

    let range = workbook
        .worksheet_range_at(0)
        .ok_or_else(|| LoadError::EmptyWorkbook(path.to_path_buf()))?
        .map_err(|source| LoadError::Workbook {
            path: path.to_path_buf(),
            source,
        })?;

    let mut cells = range.rows().map(|r| r.iter().map(cell_text).collect::<Vec<_>>());
    let headers = cells.next().unwrap_or_default();
    let rows: Vec<Vec<String>> = cells.filter(|r| !is_blank_row(r)).collect();

    debug!(rows = rows.len(), columns = headers.len(), "worksheet parsed");
    Ok(RawTable { headers, rows })
}

/// Render a cell as the text the CSV path would have seen.
pub fn cell_text(cell: &Data) -> String {
    match cell {
        Data::Empty => String::new(),
        Data::String(s) => s.clone(),
        Data::Int(i) => i.to_string(),
        Data::Float(f) if f.fract() == 0.0 && f.is_finite() => format!("{}", *f as i64),
        other => other.to_string(),
    }
}
