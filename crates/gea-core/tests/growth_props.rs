//! Property tests for the ranking pipeline.

use polars::df;
use proptest::prelude::*;

use gea_core::{StatisticsTable, employment_growth};
use gea_model::{RankingMode, columns};

fn table_from_endpoints(endpoints: &[(f64, f64)]) -> StatisticsTable {
    let mut names = Vec::new();
    let mut codes = Vec::new();
    let mut years = Vec::new();
    let mut values = Vec::new();
    for (i, (start, end)) in endpoints.iter().enumerate() {
        for (year, value) in [(2000i32, *start), (2020, *end)] {
            names.push(format!("Country {i}"));
            codes.push(format!("C{i:03}"));
            years.push(year);
            values.push(value);
        }
    }
    let data = df!(
        columns::COUNTRY_NAME => names,
        columns::COUNTRY_CODE => codes,
        columns::YEAR => years,
        columns::FEMALE_EMPLOYMENT => values,
    )
    .expect("build table");
    StatisticsTable::new(data)
}

proptest! {
    #[test]
    fn ranking_is_descending_and_bounded(
        endpoints in prop::collection::vec((1.0f64..100.0, 0.0f64..200.0), 0..40)
    ) {
        let table = table_from_endpoints(&endpoints);
        for mode in [RankingMode::Top15, RankingMode::Last15] {
            let ranked = employment_growth(&table, mode).expect("rank");
            prop_assert!(ranked.len() <= 15);
            prop_assert!(ranked.len() <= endpoints.len());
            prop_assert!(ranked.windows(2).all(|w| w[0].growth >= w[1].growth));
            for entry in &ranked {
                prop_assert!(entry.start > 0.0);
                prop_assert!(entry.growth.is_finite());
            }
        }
    }

    #[test]
    fn both_modes_agree_when_fifteen_or_fewer(
        endpoints in prop::collection::vec((1.0f64..100.0, 0.0f64..200.0), 0..15)
    ) {
        let table = table_from_endpoints(&endpoints);
        let top = employment_growth(&table, RankingMode::Top15).expect("rank");
        let last = employment_growth(&table, RankingMode::Last15).expect("rank");
        prop_assert_eq!(top, last);
    }
}
