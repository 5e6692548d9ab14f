//! Point-lookup pipeline: the single row matching a (country, year) key.

use polars::prelude::AnyValue;
use tracing::debug;

use gea_ingest::{any_to_f64, any_to_i64, any_to_string};
use gea_model::columns;

use crate::error::{PipelineError, Result};
use crate::tables::StatisticsTable;

/// Every statistic of one (country, year) row. Null cells stay `None`;
/// the formatting helpers turn them into the sentinel at display time.
#[derive(Debug, Clone, PartialEq)]
pub struct StatSnapshot {
    pub country: String,
    pub year: i32,
    pub female_employment: Option<f64>,
    pub male_employment: Option<f64>,
    pub management_share: Option<f64>,
    pub parliament_share: Option<f64>,
    pub law_index: Option<f64>,
    pub law_mandates_equal_pay: Option<bool>,
    pub total_population: Option<f64>,
    pub business_owners: Option<f64>,
    pub directors: Option<f64>,
    pub sole_proprietors: Option<f64>,
}

/// Filters the statistics table to the first row matching (country,
/// year). Zero matches is `NoData`; (country, year) uniqueness is
/// trusted, not enforced.
pub fn snapshot(table: &StatisticsTable, country: &str, year: i32) -> Result<StatSnapshot> {
    let idx = find_row(table, country, year)?.ok_or_else(|| PipelineError::NoData {
        country: country.to_string(),
        year,
    })?;

    let f64_at = |name: &str| -> Result<Option<f64>> {
        Ok(any_to_f64(
            table.column(name)?.get(idx).unwrap_or(AnyValue::Null),
        ))
    };

    let law_flag = f64_at(columns::LAW_EQUAL_PAY)?.map(|v| v == 1.0);
    let snapshot = StatSnapshot {
        country: country.to_string(),
        year,
        female_employment: f64_at(columns::FEMALE_EMPLOYMENT)?,
        male_employment: f64_at(columns::MALE_EMPLOYMENT)?,
        management_share: f64_at(columns::MANAGEMENT_SHARE)?,
        parliament_share: f64_at(columns::PARLIAMENT_SHARE)?,
        law_index: f64_at(columns::LAW_INDEX)?,
        law_mandates_equal_pay: law_flag,
        total_population: f64_at(columns::TOTAL_POPULATION)?,
        business_owners: f64_at(columns::BUSINESS_OWNERS)?,
        directors: f64_at(columns::DIRECTORS)?,
        sole_proprietors: f64_at(columns::SOLE_PROPRIETORS)?,
    };
    debug!(country, year, "point lookup");
    Ok(snapshot)
}

/// Mean of the non-null law index scores across all countries for one
/// year, rounded to two decimals. The gauge uses it as delta reference
/// and threshold. `None` when no country has a score that year.
pub fn law_index_average(table: &StatisticsTable, year: i32) -> Result<Option<f64>> {
    let years = table.column(columns::YEAR)?;
    let scores = table.column(columns::LAW_INDEX)?;
    let mut sum = 0.0;
    let mut count = 0usize;
    for idx in 0..table.height() {
        let row_year = any_to_i64(years.get(idx).unwrap_or(AnyValue::Null));
        if row_year != Some(i64::from(year)) {
            continue;
        }
        if let Some(score) = any_to_f64(scores.get(idx).unwrap_or(AnyValue::Null)) {
            sum += score;
            count += 1;
        }
    }
    if count == 0 {
        return Ok(None);
    }
    let mean = sum / count as f64;
    Ok(Some((mean * 100.0).round() / 100.0))
}

fn find_row(table: &StatisticsTable, country: &str, year: i32) -> Result<Option<usize>> {
    let names = table.column(columns::COUNTRY_NAME)?;
    let years = table.column(columns::YEAR)?;
    for idx in 0..table.height() {
        let row_year = any_to_i64(years.get(idx).unwrap_or(AnyValue::Null));
        if row_year != Some(i64::from(year)) {
            continue;
        }
        let name = any_to_string(names.get(idx).unwrap_or(AnyValue::Null));
        if name == country {
            return Ok(Some(idx));
        }
    }
    Ok(None)
}
