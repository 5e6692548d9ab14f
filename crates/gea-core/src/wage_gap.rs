//! Wage-gap pipeline: per-gender wage points plus one connector per
//! year where both genders have a value.

use polars::prelude::AnyValue;
use tracing::debug;

use gea_ingest::{any_to_f64, any_to_i64, any_to_string};
use gea_model::Gender;
use gea_model::columns;

use crate::error::Result;
use crate::series::{SERIES_END_YEAR, SERIES_START_YEAR};
use crate::tables::WageTable;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct WagePoint {
    pub year: i32,
    pub wage: f64,
}

/// All non-null wage points of one gender, ordered by year.
#[derive(Debug, Clone, PartialEq)]
pub struct GenderWageSeries {
    pub gender: Gender,
    pub points: Vec<WagePoint>,
}

/// Vertical segment connecting both genders' wages in one year.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GapConnector {
    pub year: i32,
    pub female_wage: f64,
    pub male_wage: f64,
    /// `male_wage - female_wage`.
    pub gap: f64,
}

#[derive(Debug, Clone, PartialEq)]
pub struct WageGapSeries {
    pub country: String,
    /// Female first, then Male; a gender with no data in range still
    /// gets an (empty) series so trace colors stay stable.
    pub genders: Vec<GenderWageSeries>,
    pub connectors: Vec<GapConnector>,
}

/// Restricts the wage table to one country and the fixed year range.
/// Years where either gender's wage is missing produce no connector;
/// nothing is imputed.
pub fn wage_gap(table: &WageTable, country: &str) -> Result<WageGapSeries> {
    let countries = table.column(columns::WAGE_COUNTRY)?;
    let years = table.column(columns::YEAR)?;
    let genders = table.column(columns::WAGE_GENDER)?;
    let wages = table.column(columns::WAGE_VALUE)?;

    // (year, gender) -> wage, first occurrence wins.
    let mut female: Vec<WagePoint> = Vec::new();
    let mut male: Vec<WagePoint> = Vec::new();
    for idx in 0..table.height() {
        if any_to_string(countries.get(idx).unwrap_or(AnyValue::Null)) != country {
            continue;
        }
        let Some(year) = any_to_i64(years.get(idx).unwrap_or(AnyValue::Null)) else {
            continue;
        };
        let year = year as i32;
        if !(SERIES_START_YEAR..=SERIES_END_YEAR).contains(&year) {
            continue;
        }
        let Some(wage) = any_to_f64(wages.get(idx).unwrap_or(AnyValue::Null)) else {
            continue;
        };
        let gender = any_to_string(genders.get(idx).unwrap_or(AnyValue::Null));
        let bucket = match gender.parse::<Gender>() {
            Ok(Gender::Female) => &mut female,
            Ok(Gender::Male) => &mut male,
            Err(_) => continue,
        };
        if !bucket.iter().any(|point| point.year == year) {
            bucket.push(WagePoint { year, wage });
        }
    }
    female.sort_by_key(|point| point.year);
    male.sort_by_key(|point| point.year);

    let mut connectors = Vec::new();
    for point in &female {
        let Some(counterpart) = male.iter().find(|m| m.year == point.year) else {
            continue;
        };
        connectors.push(GapConnector {
            year: point.year,
            female_wage: point.wage,
            male_wage: counterpart.wage,
            gap: counterpart.wage - point.wage,
        });
    }

    debug!(
        country,
        female_points = female.len(),
        male_points = male.len(),
        connectors = connectors.len(),
        "built wage-gap series"
    );
    Ok(WageGapSeries {
        country: country.to_string(),
        genders: vec![
            GenderWageSeries {
                gender: Gender::Female,
                points: female,
            },
            GenderWageSeries {
                gender: Gender::Male,
                points: male,
            },
        ],
        connectors,
    })
}
