//! Read-only wrappers around the loaded tables.
//!
//! Tables are loaded once at startup and shared by reference with every
//! pipeline invocation; no write path exists after load.

use std::collections::BTreeMap;
use std::path::Path;

use polars::prelude::{AnyValue, Column, DataFrame};
use tracing::info;

use gea_ingest::{LoadError, any_to_i64, any_to_string, load_curiosities, load_statistics, load_wages};
use gea_model::columns;

use crate::error::{PipelineError, Result};

/// The country/year statistics table with normalized column labels.
#[derive(Debug, Clone)]
pub struct StatisticsTable {
    data: DataFrame,
}

impl StatisticsTable {
    pub fn new(data: DataFrame) -> Self {
        Self { data }
    }

    pub fn load(path: &Path) -> std::result::Result<Self, LoadError> {
        Ok(Self::new(load_statistics(path)?))
    }

    pub fn data(&self) -> &DataFrame {
        &self.data
    }

    pub fn height(&self) -> usize {
        self.data.height()
    }

    pub(crate) fn column(&self, name: &str) -> Result<&Column> {
        self.data
            .column(name)
            .map_err(|_| PipelineError::MissingColumn(name.to_string()))
    }

    /// Minimum and maximum year present, the slider bounds.
    pub fn year_range(&self) -> Result<(i32, i32)> {
        let years = self.column(columns::YEAR)?;
        let mut range: Option<(i32, i32)> = None;
        for idx in 0..self.data.height() {
            let Some(year) = any_to_i64(years.get(idx).unwrap_or(AnyValue::Null)) else {
                continue;
            };
            let year = year as i32;
            range = Some(match range {
                Some((min, max)) => (min.min(year), max.max(year)),
                None => (year, year),
            });
        }
        range.ok_or_else(|| PipelineError::MissingColumn(columns::YEAR.to_string()))
    }

    /// Unique country names in table order, the dropdown options.
    pub fn countries(&self) -> Result<Vec<String>> {
        let names = self.column(columns::COUNTRY_NAME)?;
        let mut out: Vec<String> = Vec::new();
        for idx in 0..self.data.height() {
            let name = any_to_string(names.get(idx).unwrap_or(AnyValue::Null));
            if !name.is_empty() && !out.iter().any(|existing| existing == &name) {
                out.push(name);
            }
        }
        Ok(out)
    }
}

/// The country/year/gender wage table. Missing combinations are absent
/// rows, not nulls.
#[derive(Debug, Clone)]
pub struct WageTable {
    data: DataFrame,
}

impl WageTable {
    pub fn new(data: DataFrame) -> Self {
        Self { data }
    }

    pub fn load(path: &Path) -> std::result::Result<Self, LoadError> {
        Ok(Self::new(load_wages(path)?))
    }

    pub fn data(&self) -> &DataFrame {
        &self.data
    }

    pub fn height(&self) -> usize {
        self.data.height()
    }

    pub(crate) fn column(&self, name: &str) -> Result<&Column> {
        self.data
            .column(name)
            .map_err(|_| PipelineError::MissingColumn(name.to_string()))
    }
}

/// Everything the dashboard loads at startup.
#[derive(Debug, Clone)]
pub struct DashboardData {
    pub statistics: StatisticsTable,
    pub wages: WageTable,
    pub curiosities: BTreeMap<String, String>,
}

impl DashboardData {
    /// Fixed relative asset paths.
    pub const STATISTICS_FILE: &'static str = "Data_Gender_Statistics.csv";
    pub const WAGES_FILE: &'static str = "Data_Gender_Wages.csv";
    pub const CURIOSITIES_FILE: &'static str = "countries_curiosities.json";

    /// Loads all three assets from the assets directory.
    pub fn load(assets_dir: &Path) -> std::result::Result<Self, LoadError> {
        let statistics = StatisticsTable::load(&assets_dir.join(Self::STATISTICS_FILE))?;
        let wages = WageTable::load(&assets_dir.join(Self::WAGES_FILE))?;
        let curiosities = load_curiosities(&assets_dir.join(Self::CURIOSITIES_FILE))?;
        info!(
            statistics_rows = statistics.height(),
            wage_rows = wages.height(),
            curiosities = curiosities.len(),
            "dashboard data ready"
        );
        Ok(Self {
            statistics,
            wages,
            curiosities,
        })
    }

    /// Curiosity text for a country; callers render the sentinel when
    /// the country has no entry.
    pub fn curiosity(&self, country: &str) -> Option<&str> {
        self.curiosities.get(country).map(String::as_str)
    }
}
