//! Ranking pipeline: per-country growth of the female employment ratio
//! between two reference years.

use std::collections::BTreeMap;

use polars::prelude::AnyValue;
use tracing::debug;

use gea_ingest::{any_to_f64, any_to_i64, any_to_string};
use gea_model::RankingMode;
use gea_model::columns;

use crate::error::Result;
use crate::tables::StatisticsTable;

/// Baseline year of the growth comparison.
pub const GROWTH_START_YEAR: i32 = 2000;
/// Final year of the growth comparison.
pub const GROWTH_END_YEAR: i32 = 2020;

/// How many countries each ranking mode shows.
const RANKED_COUNT: usize = 15;

#[derive(Debug, Clone, PartialEq)]
pub struct GrowthEntry {
    pub country_code: String,
    pub country_name: String,
    /// Female employment ratio at the baseline year.
    pub start: f64,
    /// Female employment ratio at the final year.
    pub end: f64,
    /// Percentage change between the two, `(end - start) / start * 100`.
    pub growth: f64,
}

/// Ranks countries by growth of the female employment-to-population
/// ratio between the two reference years, descending.
///
/// Countries missing either endpoint, or with a baseline of zero or
/// less, are excluded rather than producing an undefined ratio. Equal
/// growth values keep first-seen table order (the sort is stable), and
/// `Last15` returns the tail of the same descending order.
pub fn employment_growth(table: &StatisticsTable, mode: RankingMode) -> Result<Vec<GrowthEntry>> {
    let codes = table.column(columns::COUNTRY_CODE)?;
    let names = table.column(columns::COUNTRY_NAME)?;
    let years = table.column(columns::YEAR)?;
    let values = table.column(columns::FEMALE_EMPLOYMENT)?;

    struct Endpoints {
        name: String,
        start: Option<f64>,
        end: Option<f64>,
    }

    let mut order: Vec<String> = Vec::new();
    let mut by_code: BTreeMap<String, Endpoints> = BTreeMap::new();
    for idx in 0..table.height() {
        let Some(year) = any_to_i64(years.get(idx).unwrap_or(AnyValue::Null)) else {
            continue;
        };
        let year = year as i32;
        if year != GROWTH_START_YEAR && year != GROWTH_END_YEAR {
            continue;
        }
        let code = any_to_string(codes.get(idx).unwrap_or(AnyValue::Null));
        if code.is_empty() {
            continue;
        }
        let value = any_to_f64(values.get(idx).unwrap_or(AnyValue::Null));
        let entry = by_code.entry(code.clone()).or_insert_with(|| {
            order.push(code);
            Endpoints {
                name: any_to_string(names.get(idx).unwrap_or(AnyValue::Null)),
                start: None,
                end: None,
            }
        });
        // First occurrence per (country, year) wins, matching lookups.
        if year == GROWTH_START_YEAR && entry.start.is_none() {
            entry.start = value;
        }
        if year == GROWTH_END_YEAR && entry.end.is_none() {
            entry.end = value;
        }
    }

    let mut entries: Vec<GrowthEntry> = Vec::new();
    for code in &order {
        let Some(endpoints) = by_code.get(code) else {
            continue;
        };
        let (Some(start), Some(end)) = (endpoints.start, endpoints.end) else {
            continue;
        };
        if start <= 0.0 {
            continue;
        }
        entries.push(GrowthEntry {
            country_code: code.clone(),
            country_name: endpoints.name.clone(),
            start,
            end,
            growth: (end - start) / start * 100.0,
        });
    }

    entries.sort_by(|a, b| {
        b.growth
            .partial_cmp(&a.growth)
            .unwrap_or(std::cmp::Ordering::Equal)
    });

    match mode {
        RankingMode::Top15 => entries.truncate(RANKED_COUNT),
        RankingMode::Last15 => {
            if entries.len() > RANKED_COUNT {
                entries = entries.split_off(entries.len() - RANKED_COUNT);
            }
        }
    }
    debug!(countries = entries.len(), mode = %mode, "ranked employment growth");
    Ok(entries)
}
