//! Loader tests against real files on disk.

use std::io::Write;

use gea_ingest::{LoadError, load_curiosities, load_statistics, load_wages};

/// Statistics source header with the long World Bank labels, quoted
/// where they contain commas.
fn statistics_header() -> String {
    let labels = [
        "Country Name",
        "Country Code",
        "Year",
        "Employment to population ratio, 15+, female (%) (national estimate)",
        "Employment to population ratio, 15+, male (%) (national estimate)",
        "Female share of employment in senior and middle management (%)",
        "Proportion of seats held by women in national parliaments (%)",
        "Women Business and the Law Index Score (scale 1-100)",
        "Law mandates equal remuneration for females and males for work of equal value (1=yes; 0=no)",
        "Population, total",
        "Share of female business owners (% of total business owners)",
        "Share of female directors (% of total directors)",
        "Share of female sole proprietors  (% of sole proprietors)",
        "Labor force with basic education, female (% of female working-age population with basic education)",
        "Labor force with basic education, male (% of male working-age population with basic education)",
        "Labor force with intermediate education, female (% of female working-age population with intermediate education)",
        "Labor force with intermediate education, male (% of male working-age population with intermediate education)",
        "Labor force with advanced education, female (% of female working-age population with advanced education)",
        "Labor force with advanced education, male (% of male working-age population with advanced education)",
    ];
    labels
        .iter()
        .map(|label| {
            if label.contains(',') {
                format!("\"{label}\"")
            } else {
                (*label).to_string()
            }
        })
        .collect::<Vec<_>>()
        .join(",")
}

fn write_temp(suffix: &str, contents: &[u8]) -> tempfile::NamedTempFile {
    let mut file = tempfile::Builder::new()
        .suffix(suffix)
        .tempfile()
        .expect("create temp file");
    file.write_all(contents).expect("write temp file");
    file
}

#[test]
fn statistics_loader_normalizes_and_validates() {
    let body =
        "Portugal,PRT,2020,61.4,68.0,36.2,40.0,97.5,1,10300000,30.1,25.4,40.2,20.0,22.0,35.0,37.0,45.5,41.0";
    let file = write_temp(".csv", format!("{}\n{body}\n", statistics_header()).as_bytes());

    let df = load_statistics(file.path()).expect("load statistics");
    assert_eq!(df.height(), 1);
    let names: Vec<String> = df
        .get_column_names()
        .iter()
        .map(|n| n.to_string())
        .collect();
    assert!(names.contains(&"Female Employment to population ratio (%)".to_string()));
    assert!(names.contains(&"Total Population".to_string()));
}

#[test]
fn missing_expected_column_fails_at_load_time() {
    let file = write_temp(".csv", b"Country Name,Year\nPortugal,2020\n");
    let error = load_statistics(file.path()).expect_err("schema check must fail");
    assert!(matches!(error, LoadError::MissingColumn { .. }));
}

#[test]
fn missing_file_is_reported_as_such() {
    let error = load_wages(std::path::Path::new("does/not/exist.csv"))
        .expect_err("missing file must fail");
    assert!(matches!(error, LoadError::MissingFile { .. }));
}

#[test]
fn wage_loader_accepts_sparse_rows() {
    let file = write_temp(
        ".csv",
        b"Country,Year,Gender,Wage\n\
          Portugal,2010,Female,20.0\n\
          Portugal,2010,Male,25.0\n\
          Portugal,2011,Female,21.0\n",
    );
    let df = load_wages(file.path()).expect("load wages");
    assert_eq!(df.height(), 3);
}

#[test]
fn curiosities_loader_reads_a_json_object() {
    let file = write_temp(
        ".json",
        br#"{"Portugal": "Cork-oak country.", "Spain": "Four official languages."}"#,
    );

    let map = load_curiosities(file.path()).expect("load curiosities");
    assert_eq!(map.len(), 2);
    assert_eq!(map["Portugal"], "Cork-oak country.");
}

#[test]
fn malformed_curiosities_fail_with_json_error() {
    let file = write_temp(".json", b"[1, 2, 3]");
    let error = load_curiosities(file.path()).expect_err("array is not a lookup");
    assert!(matches!(error, LoadError::Json { .. }));
}
