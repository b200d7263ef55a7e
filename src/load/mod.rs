// src/load/mod.rs
pub mod convert;
pub mod csv_reader;
pub mod utils;
pub mod xlsx_reader;

use std::path::Path;
use tracing::info;

use crate::{error::LoadError, table::RegistrationTable};

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RawTable {
    /// Column names exactly as the file states them.
    pub headers: Vec<String>,
    /// Non-blank data rows, one String per cell. Rows may be shorter than `headers`.
    pub rows: Vec<Vec<String>>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SourceKind {
    Workbook,
    Csv,
}

impl SourceKind {
    /// Pick a reader from the file extension (case-insensitive).
    pub fn from_path(path: &Path) -> Option<Self> {
        let ext = path.extension()?.to_str()?.to_ascii_lowercase();
        match ext.as_str() {
            "xlsx" | "xlsm" | "xls" | "ods" => Some(SourceKind::Workbook),
            "csv" => Some(SourceKind::Csv),
            _ => None,
        }
    }
}

/// Load the registration spreadsheet at `path` into memory.
///
/// Fails with `LoadError::File` if the file can't be opened, and with one of
/// the format variants if it opens but doesn't hold Year/Month/Breed/Total.
#[tracing::instrument(level = "info", skip(path), fields(path = %path.as_ref().display()))]
pub fn load_registrations<P: AsRef<Path>>(path: P) -> Result<RegistrationTable, LoadError> {
    let path = path.as_ref();
    let kind = SourceKind::from_path(path)
        .ok_or_else(|| LoadError::UnsupportedFormat(path.to_path_buf()))?;

    let raw = match kind {
        SourceKind::Workbook => xlsx_reader::read_workbook(path)?,
        SourceKind::Csv => csv_reader::read_csv(path)?,
    };
    let table = convert::convert_to_table(&raw, path)?;

    info!(
        rows = table.len(),
        breeds = table.distinct_breeds().len(),
        "loaded registrations"
    );
    Ok(table)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::table::RegistrationRecord;
    use anyhow::Result;
    use std::io::Write;
    use tempfile::{Builder, NamedTempFile};
    use tracing_subscriber::{EnvFilter, FmtSubscriber};

    fn init_test_logging() {
        let subscriber = FmtSubscriber::builder()
            .with_env_filter(
                EnvFilter::try_from_default_env()
                    .unwrap_or_else(|_| EnvFilter::new("info,calgary_dogs::load=debug")),
            )
            .with_test_writer()
            .finish();
        let _ = tracing::subscriber::set_global_default(subscriber);
    }

    fn csv_file(content: &str) -> Result<NamedTempFile> {
        let mut tmp = Builder::new().suffix(".csv").tempfile()?;
        tmp.write_all(content.as_bytes())?;
        Ok(tmp)
    }

    #[test]
    fn source_kind_from_extension() {
        assert_eq!(
            SourceKind::from_path(Path::new("CalgaryDogBreeds.xlsx")),
            Some(SourceKind::Workbook)
        );
        assert_eq!(
            SourceKind::from_path(Path::new("dogs.CSV")),
            Some(SourceKind::Csv)
        );
        assert_eq!(SourceKind::from_path(Path::new("dogs.txt")), None);
        assert_eq!(SourceKind::from_path(Path::new("dogs")), None);
    }

    #[test]
    fn loads_csv_end_to_end() -> Result<()> {
        init_test_logging();
        let tmp = csv_file(
            "Year,Month,Breed,Total,Rank\n\
             2021,JAN,Boxer,10,2\n\
             2021,FEB,Boxer,5,3\n\
             2021,JAN,Poodle,20,1\n",
        )?;

        let table = load_registrations(tmp.path())?;

        assert_eq!(table.len(), 3);
        assert_eq!(
            table.records().nth(2),
            Some(RegistrationRecord::new(2021, "JAN", "Poodle", 20))
        );
        Ok(())
    }

    #[test]
    fn loads_workbook_with_numeric_cells() -> Result<()> {
        init_test_logging();
        let tmp = Builder::new().suffix(".xlsx").tempfile()?;

        let mut workbook = rust_xlsxwriter::Workbook::new();
        {
            let sheet = workbook.add_worksheet();
            for (col, name) in ["Year", "Month", "Breed", "Total", "Rank"].iter().enumerate() {
                sheet.write_string(0, col as u16, *name)?;
            }
            let rows = [
                (2021, "JAN", "Boxer", 10, 2),
                (2021, "FEB", "Boxer", 5, 3),
                (2021, "JAN", "Poodle", 20, 1),
            ];
            for (i, (year, month, breed, total, rank)) in rows.iter().enumerate() {
                let r = i as u32 + 1;
                sheet.write_number(r, 0, *year as f64)?;
                sheet.write_string(r, 1, *month)?;
                sheet.write_string(r, 2, *breed)?;
                sheet.write_number(r, 3, *total as f64)?;
                sheet.write_number(r, 4, *rank as f64)?;
            }
        }
        workbook.save(tmp.path())?;

        let table = load_registrations(tmp.path())?;

        assert_eq!(
            table.records().collect::<Vec<_>>(),
            vec![
                RegistrationRecord::new(2021, "JAN", "Boxer", 10),
                RegistrationRecord::new(2021, "FEB", "Boxer", 5),
                RegistrationRecord::new(2021, "JAN", "Poodle", 20),
            ]
        );
        Ok(())
    }

    #[test]
    fn missing_path_is_file_error() {
        init_test_logging();
        let err = load_registrations("no/such/dir/CalgaryDogBreeds.xlsx").unwrap_err();
        assert!(err.is_file_error());

        let err = load_registrations("no/such/dir/dogs.csv").unwrap_err();
        assert!(err.is_file_error());
    }

    #[test]
    fn missing_columns_is_format_error() -> Result<()> {
        init_test_logging();
        let tmp = csv_file("Year,Month,Dog,Count\n2021,JAN,Boxer,10\n")?;

        let err = load_registrations(tmp.path()).unwrap_err();
        assert!(!err.is_file_error());
        match err {
            LoadError::MissingColumns { missing, .. } => {
                assert_eq!(missing, vec!["Breed", "Total"])
            }
            other => panic!("expected MissingColumns, got {other:?}"),
        }
        Ok(())
    }

    #[test]
    fn unknown_extension_is_rejected_before_reading() {
        let err = load_registrations("dogs.json").unwrap_err();
        assert!(matches!(err, LoadError::UnsupportedFormat(_)));
    }

    #[test]
    fn header_only_file_loads_empty_table() -> Result<()> {
        let tmp = csv_file("Year,Month,Breed,Total\n")?;
        let table = load_registrations(tmp.path())?;
        assert!(table.is_empty());
        Ok(())
    }
}
