// src/load/csv_reader.rs
use csv::ReaderBuilder;
use std::{fs::File, io::Read, path::Path};
use tracing::debug;

use super::{utils::is_blank_row, RawTable};
use crate::error::LoadError;

/// Read a headed CSV file into a `RawTable`.
pub fn read_csv(path: &Path) -> Result<RawTable, LoadError> {
    let file = File::open(path).map_err(|source| LoadError::File {
        path: path.to_path_buf(),
        source,
    })?;
    read_csv_from(file, path)
}

/// Same as `read_csv` over any reader; `path` is only used in errors.
pub fn read_csv_from<R: Read>(reader: R, path: &Path) -> Result<RawTable, LoadError> {
    let csv_err = |source| LoadError::Csv {
        path: path.to_path_buf(),
        source,
    };

    let mut rdr = ReaderBuilder::new()
        .has_headers(true)
        .flexible(true) // tolerate ragged rows; short rows are padded later
        .from_reader(reader);

    let headers: Vec<String> = rdr
        .headers()
        .map_err(csv_err)?
        .iter()
        .map(str::to_string)
        .collect();

    let mut rows = Vec::new();
    for result in rdr.records() {
        let record = result.map_err(csv_err)?;
        let row: Vec<String> = record.iter().map(str::to_string).collect();
        if is_blank_row(&row) {
            continue;
        }
        rows.push(row);
    }

    debug!(rows = rows.len(), columns = headers.len(), "csv parsed");
    Ok(RawTable { headers, rows })
}
