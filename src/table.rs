// src/table.rs

use arrow::{
    array::{ArrayRef, AsArray, Int64Array, Int64Builder, StringArray, StringBuilder},
    datatypes::{DataType, Field, Int64Type, Schema, SchemaRef},
    error::ArrowError,
    record_batch::RecordBatch,
};
use std::{collections::HashSet, sync::Arc};

pub const YEAR: &str = "Year";
pub const MONTH: &str = "Month";
pub const BREED: &str = "Breed";
pub const TOTAL: &str = "Total";

/// Columns every input file must provide, in the order they are stored.
pub const REQUIRED_COLUMNS: [&str; 4] = [YEAR, MONTH, BREED, TOTAL];

/// One row of the source spreadsheet.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RegistrationRecord {
    pub year: i64,
    pub month: String,
    pub breed: String,
    pub total: i64,
}

impl RegistrationRecord {
    pub fn new(year: i64, month: impl Into<String>, breed: impl Into<String>, total: i64) -> Self {
        Self {
            year,
            month: month.into(),
            breed: breed.into(),
            total,
        }
    }
}

/// Fixed Arrow schema: Year Int64, Month Utf8, Breed Utf8, Total Int64.
pub fn registration_schema() -> SchemaRef {
    Arc::new(Schema::new(vec![
        Field::new(YEAR, DataType::Int64, false),
        Field::new(MONTH, DataType::Utf8, false),
        Field::new(BREED, DataType::Utf8, false),
        Field::new(TOTAL, DataType::Int64, false),
    ]))
}

/// Read-only table of registration counts.
///
/// The batch always carries `registration_schema()`, so the typed accessors
/// below can downcast without checking.
#[derive(Debug, Clone)]
pub struct RegistrationTable {
    batch: RecordBatch,
}

impl RegistrationTable {
    pub fn from_records<I>(records: I) -> Result<Self, ArrowError>
    where
        I: IntoIterator<Item = RegistrationRecord>,
    {
        let mut years = Int64Builder::new();
        let mut months = StringBuilder::new();
        let mut breeds = StringBuilder::new();
        let mut totals = Int64Builder::new();

        for rec in records {
            years.append_value(rec.year);
            months.append_value(&rec.month);
            breeds.append_value(&rec.breed);
            totals.append_value(rec.total);
        }

        let cols: Vec<ArrayRef> = vec![
            Arc::new(years.finish()),
            Arc::new(months.finish()),
            Arc::new(breeds.finish()),
            Arc::new(totals.finish()),
        ];
        let batch = RecordBatch::try_new(registration_schema(), cols)?;
        Ok(Self { batch })
    }

    /// Wrap a batch produced by filtering this table's batch.
    pub(crate) fn from_filtered(batch: RecordBatch) -> Self {
        debug_assert_eq!(batch.schema(), registration_schema());
        Self { batch }
    }

    pub fn batch(&self) -> &RecordBatch {
        &self.batch
    }

    pub fn len(&self) -> usize {
        self.batch.num_rows()
    }

    pub fn is_empty(&self) -> bool {
        self.batch.num_rows() == 0
    }

    pub fn years(&self) -> &Int64Array {
        self.batch.column(0).as_primitive::<Int64Type>()
    }

    pub fn months(&self) -> &StringArray {
        self.batch.column(1).as_string::<i32>()
    }

    pub fn breeds(&self) -> &StringArray {
        self.batch.column(2).as_string::<i32>()
    }

    pub fn totals(&self) -> &Int64Array {
        self.batch.column(3).as_primitive::<Int64Type>()
    }

    /// Distinct breed names in order of first appearance.
    pub fn distinct_breeds(&self) -> Vec<&str> {
        let mut seen = HashSet::new();
        self.breeds()
            .iter()
            .flatten()
            .filter(|b| seen.insert(*b))
            .collect()
    }

    /// Rows as owned records, in table order.
    pub fn records(&self) -> impl Iterator<Item = RegistrationRecord> + '_ {
        (0..self.len()).map(move |i| RegistrationRecord {
            year: self.years().value(i),
            month: self.months().value(i).to_string(),
            breed: self.breeds().value(i).to_string(),
            total: self.totals().value(i),
        })
    }
}
