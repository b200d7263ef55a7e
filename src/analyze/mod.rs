// src/analyze/mod.rs
pub mod report;

pub use report::{write_report, BreedReport, YearShare};

use arrow::{
    array::{BooleanArray, Int64Array, StringArray},
    compute::{self, filter_record_batch, kernels::cmp::eq},
    error::ArrowError,
};
use std::collections::HashSet;
use tracing::debug;

use crate::table::RegistrationTable;

/// Compute every statistic printed for `breed`.
///
/// `breed` should already be canonical (see `BreedCatalog::resolve`); a name
/// with no rows is not an error and simply yields an empty report.
/// Years in `tracked_years` whose overall total is zero get no share entry.
pub fn analyze_breed(
    table: &RegistrationTable,
    breed: &str,
    tracked_years: &[i64],
) -> Result<BreedReport, ArrowError> {
    let breed_mask = eq(table.breeds(), &StringArray::new_scalar(breed))?;
    let breed_rows = select(table, &breed_mask)?;
    debug!(breed, rows = breed_rows.len(), "selected breed rows");

    let mut seen = HashSet::new();
    let years: Vec<i64> = breed_rows
        .years()
        .values()
        .iter()
        .copied()
        .filter(|y| seen.insert(*y))
        .collect();

    let total_registrations = total(&breed_rows);

    let mut yearly_shares = Vec::with_capacity(tracked_years.len());
    for &year in tracked_years {
        let all = total(&select(table, &year_mask(table, &[year])?)?);
        let mine = total(&select(&breed_rows, &year_mask(&breed_rows, &[year])?)?);
        if let Some(percentage) = share(mine, all) {
            yearly_shares.push(YearShare { year, percentage });
        } else {
            debug!(year, "no registrations that year; share skipped");
        }
    }

    let all = total(&select(table, &year_mask(table, tracked_years)?)?);
    let mine = total(&select(&breed_rows, &year_mask(&breed_rows, tracked_years)?)?);
    let three_year_share = share(mine, all);

    let popular_months = match compute::max(breed_rows.totals()) {
        Some(peak) => {
            let at_peak = eq(breed_rows.totals(), &Int64Array::new_scalar(peak))?;
            select(&breed_rows, &at_peak)?
                .months()
                .iter()
                .flatten()
                .map(str::to_string)
                .collect()
        }
        None => Vec::new(),
    };

    Ok(BreedReport {
        breed: breed.to_string(),
        years,
        total_registrations,
        yearly_shares,
        three_year_share,
        popular_months,
    })
}

fn select(table: &RegistrationTable, mask: &BooleanArray) -> Result<RegistrationTable, ArrowError> {
    let batch = filter_record_batch(table.batch(), mask)?;
    Ok(RegistrationTable::from_filtered(batch))
}

/// Rows whose Year is any of `years`.
fn year_mask(table: &RegistrationTable, years: &[i64]) -> Result<BooleanArray, ArrowError> {
    let mut mask = BooleanArray::from(vec![false; table.len()]);
    for &year in years {
        let hit = eq(table.years(), &Int64Array::new_scalar(year))?;
        mask = compute::or(&mask, &hit)?;
    }
    Ok(mask)
}

fn total(table: &RegistrationTable) -> i64 {
    compute::sum(table.totals()).unwrap_or(0)
}

/// Percentage of `part` in `whole`; `None` when `whole` is not positive.
fn share(part: i64, whole: i64) -> Option<f64> {
    (whole > 0).then(|| part as f64 / whole as f64 * 100.0)
}
