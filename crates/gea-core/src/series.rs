//! Multi-series time pipeline: education shares per (country × gender)
//! over the fixed year range.

use std::collections::BTreeMap;

use polars::prelude::AnyValue;
use tracing::debug;

use gea_ingest::{any_to_f64, any_to_i64, any_to_string};
use gea_model::columns::{self, education_column};
use gea_model::{EducationLevel, Gender, Selection};

use crate::error::Result;
use crate::tables::StatisticsTable;

/// First year of every time series.
pub const SERIES_START_YEAR: i32 = 2000;
/// Last year of every time series, inclusive.
pub const SERIES_END_YEAR: i32 = 2020;

/// One education time series. A `None` value is a gap in the line, not
/// an error. `secondary` marks the comparison country; the dashed line
/// styling it triggers is a builder decision.
#[derive(Debug, Clone, PartialEq)]
pub struct EducationSeries {
    pub country: String,
    pub gender: Gender,
    pub level: EducationLevel,
    pub secondary: bool,
    pub points: Vec<(i32, Option<f64>)>,
}

/// Produces one series per (selected country × selected gender) for the
/// selected education level. An unset secondary country contributes no
/// series.
pub fn education_series(
    table: &StatisticsTable,
    selection: &Selection,
) -> Result<Vec<EducationSeries>> {
    let mut out = Vec::new();
    for (country, secondary) in selection.selected_countries() {
        let rows = rows_by_year(table, country)?;
        for &gender in &selection.genders {
            let column = table.column(&education_column(selection.education, gender))?;
            let points = (SERIES_START_YEAR..=SERIES_END_YEAR)
                .map(|year| {
                    let value = rows
                        .get(&year)
                        .and_then(|&idx| any_to_f64(column.get(idx).unwrap_or(AnyValue::Null)));
                    (year, value)
                })
                .collect();
            out.push(EducationSeries {
                country: country.to_string(),
                gender,
                level: selection.education,
                secondary,
                points,
            });
        }
    }
    debug!(series = out.len(), level = %selection.education, "built education series");
    Ok(out)
}

/// First matching row index per year for one country.
fn rows_by_year(table: &StatisticsTable, country: &str) -> Result<BTreeMap<i32, usize>> {
    let names = table.column(columns::COUNTRY_NAME)?;
    let years = table.column(columns::YEAR)?;
    let mut rows = BTreeMap::new();
    for idx in 0..table.height() {
        let name = any_to_string(names.get(idx).unwrap_or(AnyValue::Null));
        if name != country {
            continue;
        }
        let Some(year) = any_to_i64(years.get(idx).unwrap_or(AnyValue::Null)) else {
            continue;
        };
        rows.entry(year as i32).or_insert(idx);
    }
    Ok(rows)
}
