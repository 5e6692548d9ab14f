//! CSV dataset loading.
//!
//! Both tables are CSV exports of the source spreadsheets, read once at
//! startup. Schema validation happens here so a missing column aborts
//! startup instead of surfacing at first use.

use std::path::Path;

use polars::prelude::{CsvReadOptions, DataFrame, SerReader};
use tracing::info;

use gea_model::columns::{EXPECTED_STATISTICS_COLUMNS, EXPECTED_WAGE_COLUMNS};

use crate::error::LoadError;
use crate::normalize::normalize_columns;

/// Reads a CSV file with a header row into a `DataFrame`.
pub fn read_csv(path: &Path) -> Result<DataFrame, LoadError> {
    if !path.exists() {
        return Err(LoadError::MissingFile {
            path: path.to_path_buf(),
        });
    }
    let df = CsvReadOptions::default()
        .with_has_header(true)
        .try_into_reader_with_file_path(Some(path.to_path_buf()))
        .map_err(|source| LoadError::Csv {
            path: path.to_path_buf(),
            source,
        })?
        .finish()
        .map_err(|source| LoadError::Csv {
            path: path.to_path_buf(),
            source,
        })?;
    if df.height() == 0 {
        return Err(LoadError::Empty {
            path: path.to_path_buf(),
        });
    }
    Ok(df)
}

/// Loads the country/year statistics table: read, normalize column
/// labels, validate the expected schema.
pub fn load_statistics(path: &Path) -> Result<DataFrame, LoadError> {
    let df = normalize_columns(read_csv(path)?);
    ensure_columns(&df, EXPECTED_STATISTICS_COLUMNS, path)?;
    info!(rows = df.height(), path = %path.display(), "loaded statistics table");
    Ok(df)
}

/// Loads the country/year/gender wage table.
pub fn load_wages(path: &Path) -> Result<DataFrame, LoadError> {
    let df = read_csv(path)?;
    ensure_columns(&df, EXPECTED_WAGE_COLUMNS, path)?;
    info!(rows = df.height(), path = %path.display(), "loaded wage table");
    Ok(df)
}

fn ensure_columns(df: &DataFrame, expected: &[&str], path: &Path) -> Result<(), LoadError> {
    for column in expected {
        let present = df.get_column_names().iter().any(|n| n.as_str() == *column);
        if !present {
            return Err(LoadError::MissingColumn {
                path: path.to_path_buf(),
                column: (*column).to_string(),
            });
        }
    }
    Ok(())
}
