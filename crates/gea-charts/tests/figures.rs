//! Figure-level serialization behavior.

use gea_charts::{
    growth_bar_chart, law_index_gauge, participation_badge, wage_gap_chart,
};
use gea_core::{GapConnector, GenderWageSeries, GrowthEntry, StatSnapshot, WagePoint, WageGapSeries};
use gea_model::Gender;

fn snapshot() -> StatSnapshot {
    StatSnapshot {
        country: "Portugal".to_string(),
        year: 2020,
        female_employment: Some(50.0),
        male_employment: Some(25.0),
        management_share: Some(36.2),
        parliament_share: Some(40.0),
        law_index: Some(97.5),
        law_mandates_equal_pay: Some(true),
        total_population: Some(10_300_000.0),
        business_owners: Some(30.1),
        directors: Some(25.4),
        sole_proprietors: Some(40.2),
    }
}

fn wage_series() -> WageGapSeries {
    WageGapSeries {
        country: "Portugal".to_string(),
        genders: vec![
            GenderWageSeries {
                gender: Gender::Female,
                points: vec![WagePoint { year: 2010, wage: 20.0 }],
            },
            GenderWageSeries {
                gender: Gender::Male,
                points: vec![WagePoint { year: 2010, wage: 25.0 }],
            },
        ],
        connectors: vec![GapConnector {
            year: 2010,
            female_wage: 20.0,
            male_wage: 25.0,
            gap: 5.0,
        }],
    }
}

#[test]
fn identical_inputs_produce_byte_identical_specifications() {
    let first = wage_gap_chart(&wage_series()).to_json().unwrap();
    let second = wage_gap_chart(&wage_series()).to_json().unwrap();
    assert_eq!(first, second);

    let gauge_a = law_index_gauge(Some(&snapshot()), Some(85.0)).to_json().unwrap();
    let gauge_b = law_index_gauge(Some(&snapshot()), Some(85.0)).to_json().unwrap();
    assert_eq!(gauge_a, gauge_b);
}

#[test]
fn growth_chart_serializes_entries_in_ranking_order() {
    let entries = vec![
        GrowthEntry {
            country_code: "PRT".to_string(),
            country_name: "Portugal".to_string(),
            start: 50.0,
            end: 100.0,
            growth: 100.0,
        },
        GrowthEntry {
            country_code: "ESP".to_string(),
            country_name: "Spain".to_string(),
            start: 100.0,
            end: 50.0,
            growth: -50.0,
        },
    ];
    let json = growth_bar_chart(&entries).to_json().unwrap();
    let prt = json.find("PRT").unwrap();
    let esp = json.find("ESP").unwrap();
    assert!(prt < esp);
}

#[test]
fn participation_badge_specification() {
    let badge = participation_badge(Some(&snapshot()));
    insta::assert_json_snapshot!(badge, @r###"
    {
      "female_label": "50.0%",
      "male_label": "25.0%",
      "female_fill": 0.5,
      "male_fill": 0.25
    }
    "###);
}
