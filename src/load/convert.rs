// src/load/convert.rs
use std::path::Path;

use super::{
    utils::{clean_str, parse_whole_number},
    RawTable,
};
use crate::{
    error::LoadError,
    table::{RegistrationRecord, RegistrationTable, BREED, MONTH, REQUIRED_COLUMNS, TOTAL, YEAR},
};

/// Positions of the required columns within a file's header row.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ColumnIndex {
    pub year: usize,
    pub month: usize,
    pub breed: usize,
    pub total: usize,
}

impl ColumnIndex {
    /// Locate every required column, reporting all missing ones at once.
    /// Extra columns are ignored; on duplicate names the first one wins.
    pub fn locate(headers: &[String], path: &Path) -> Result<Self, LoadError> {
        let cleaned: Vec<String> = headers.iter().map(|h| clean_str(h)).collect();
        let find = |name: &str| cleaned.iter().position(|h| h == name);

        let missing: Vec<String> = REQUIRED_COLUMNS
            .iter()
            .filter(|c| find(c).is_none())
            .map(|c| c.to_string())
            .collect();

        match (find(YEAR), find(MONTH), find(BREED), find(TOTAL)) {
            (Some(year), Some(month), Some(breed), Some(total)) => Ok(Self {
                year,
                month,
                breed,
                total,
            }),
            _ => Err(LoadError::MissingColumns {
                path: path.to_path_buf(),
                missing,
            }),
        }
    }
}

/// Convert string cells into the typed registration table.
pub fn convert_to_table(raw: &RawTable, path: &Path) -> Result<RegistrationTable, LoadError> {
    let idx = ColumnIndex::locate(&raw.headers, path)?;

    let mut records = Vec::with_capacity(raw.rows.len());
    for (i, row) in raw.rows.iter().enumerate() {
        let cell = |pos: usize| row.get(pos).map(String::as_str).unwrap_or("");
        let row_no = i + 1;

        let whole = |pos: usize, column: &'static str| {
            parse_whole_number(cell(pos)).ok_or_else(|| LoadError::InvalidCell {
                path: path.to_path_buf(),
                row: row_no,
                column,
                value: cell(pos).to_string(),
            })
        };

        // Text cells keep their content as written; only padding is removed.
        let text = |pos: usize, column: &'static str| {
            let value = cell(pos).trim();
            if value.is_empty() {
                Err(LoadError::InvalidCell {
                    path: path.to_path_buf(),
                    row: row_no,
                    column,
                    value: cell(pos).to_string(),
                })
            } else {
                Ok(value.to_string())
            }
        };

        records.push(RegistrationRecord {
            year: whole(idx.year, YEAR)?,
            month: text(idx.month, MONTH)?,
            breed: text(idx.breed, BREED)?,
            total: whole(idx.total, TOTAL)?,
        });
    }

    Ok(RegistrationTable::from_records(records)?)
}
