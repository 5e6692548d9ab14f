//! Reloading the same assets and rerunning the same pipelines must
//! yield byte-identical chart specifications.

use std::fs;
use std::path::Path;

use gea_charts::{
    country_table, curiosity_panel, education_chart, growth_bar_chart, law_index_gauge,
    wage_gap_chart,
};
use gea_core::{
    DashboardData, ENTERPRISE_REFERENCE_YEAR, education_series, employment_growth,
    law_index_average, snapshot, wage_gap,
};
use gea_model::{RankingMode, Selection};

/// Asset files use the display column labels directly; the normalizer
/// passes them through unchanged.
fn write_assets(dir: &Path) {
    let statistics = "\
Country Name,Country Code,Year,Female Employment to population ratio (%),Male Employment to population ratio (%),Female % in senior and middle management,Proportion of seats held by women in national parliaments (%),Women Business and the Law Index Score (scale 1-100),Law mandates wages equality,Total Population,Female Business Owners (%),Female directors (%),Female Sole Proprietors (%),Basic Education (% of female),Basic Education (% of male),Intermediate Education (% of female),Intermediate Education (% of male),Advanced Education (% of female),Advanced Education (% of male)
Portugal,PRT,2000,50.0,70.0,33.3,20.0,90.0,1,10500000,28.0,22.0,38.0,55.0,60.0,40.0,45.0,30.0,27.0
Portugal,PRT,2020,61.4,68.0,36.2,40.0,97.5,1,10300000,30.1,25.4,40.2,50.0,58.0,42.0,47.0,45.5,41.0
Spain,ESP,2000,40.0,72.0,30.0,25.0,80.0,0,40000000,26.0,20.0,35.0,52.0,57.0,38.0,44.0,28.0,26.0
Spain,ESP,2020,50.0,66.5,,44.0,85.0,0,47350000,27.5,21.3,36.4,48.0,55.0,41.0,46.0,,39.0
";
    let wages = "\
Country,Year,Gender,Wage
Portugal,2010,Female,20.0
Portugal,2010,Male,25.0
Portugal,2011,Female,21.0
Spain,2010,Female,19.0
Spain,2010,Male,24.5
";
    let curiosities = r#"{"Portugal": "Cork-oak country.", "Spain": "Four official languages."}"#;

    fs::write(dir.join(DashboardData::STATISTICS_FILE), statistics).unwrap();
    fs::write(dir.join(DashboardData::WAGES_FILE), wages).unwrap();
    fs::write(dir.join(DashboardData::CURIOSITIES_FILE), curiosities).unwrap();
}

fn render_all(data: &DashboardData, selection: &Selection) -> Vec<String> {
    let overview = snapshot(&data.statistics, &selection.country, selection.year).ok();
    let average = law_index_average(&data.statistics, selection.year).unwrap();
    let ranked = employment_growth(&data.statistics, selection.ranking).unwrap();
    let education = education_series(&data.statistics, selection).unwrap();
    let wages = wage_gap(&data.wages, &selection.country).unwrap();
    let hovered = selection.hovered_or_default();
    let hovered_snapshot =
        snapshot(&data.statistics, hovered, ENTERPRISE_REFERENCE_YEAR).ok();

    vec![
        law_index_gauge(overview.as_ref(), average).to_json().unwrap(),
        growth_bar_chart(&ranked).to_json().unwrap(),
        education_chart(&education).to_json().unwrap(),
        wage_gap_chart(&wages).to_json().unwrap(),
        country_table(hovered, ENTERPRISE_REFERENCE_YEAR, hovered_snapshot.as_ref())
            .to_json()
            .unwrap(),
        serde_json::to_string_pretty(&curiosity_panel(hovered, data.curiosity(hovered)))
            .unwrap(),
    ]
}

#[test]
fn reload_and_rerun_is_byte_identical() {
    let dir = tempfile::tempdir().expect("create temp dir");
    write_assets(dir.path());

    let selection = Selection::new(2020)
        .with_secondary_country("Spain")
        .with_ranking(RankingMode::Top15);

    let first_load = DashboardData::load(dir.path()).expect("first load");
    let second_load = DashboardData::load(dir.path()).expect("second load");

    let first = render_all(&first_load, &selection);
    let second = render_all(&second_load, &selection);
    assert_eq!(first, second);

    // Same tables, same selection, rerun on the same load: identical too.
    let rerun = render_all(&first_load, &selection);
    assert_eq!(first, rerun);
}
