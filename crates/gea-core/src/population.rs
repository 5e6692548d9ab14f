//! Choropleth data: total population per country for a reference year.

use polars::prelude::AnyValue;

use gea_ingest::{any_to_f64, any_to_i64, any_to_string};
use gea_model::columns;

use crate::error::Result;
use crate::tables::StatisticsTable;

/// Year the enterprise page is pinned to.
pub const ENTERPRISE_REFERENCE_YEAR: i32 = 2020;

#[derive(Debug, Clone, PartialEq)]
pub struct PopulationEntry {
    pub country: String,
    pub population: f64,
}

/// (country, total population) pairs for one year, in table order.
/// Countries with a null population are left off the map.
pub fn population_by_country(table: &StatisticsTable, year: i32) -> Result<Vec<PopulationEntry>> {
    let names = table.column(columns::COUNTRY_NAME)?;
    let years = table.column(columns::YEAR)?;
    let populations = table.column(columns::TOTAL_POPULATION)?;

    let mut out = Vec::new();
    for idx in 0..table.height() {
        let row_year = any_to_i64(years.get(idx).unwrap_or(AnyValue::Null));
        if row_year != Some(i64::from(year)) {
            continue;
        }
        let Some(population) = any_to_f64(populations.get(idx).unwrap_or(AnyValue::Null)) else {
            continue;
        };
        let country = any_to_string(names.get(idx).unwrap_or(AnyValue::Null));
        if country.is_empty() {
            continue;
        }
        out.push(PopulationEntry {
            country,
            population,
        });
    }
    Ok(out)
}
