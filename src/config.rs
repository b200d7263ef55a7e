// src/config.rs

use std::path::PathBuf;

/// Spreadsheet read at startup, relative to the working directory.
pub const DEFAULT_DATA_PATH: &str = "CalgaryDogBreeds.xlsx";

pub const BANNER: &str = "ENSF 692 Dogs of Calgary";

/// Years reported individually and in the combined three-year share.
/// Fixed on purpose; not derived from whatever years the data contains.
pub const TRACKED_YEARS: [i64; 3] = [2021, 2022, 2023];

/// Everything a run needs that isn't in the data file itself.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    pub data_path: PathBuf,
    pub banner: &'static str,
    pub tracked_years: [i64; 3],
}

impl Default for Config {
    fn default() -> Self {
        Self {
            data_path: PathBuf::from(DEFAULT_DATA_PATH),
            banner: BANNER,
            tracked_years: TRACKED_YEARS,
        }
    }
}
