//! Column vocabulary for the loaded tables.
//!
//! The source spreadsheets carry long World Bank indicator labels; the
//! rename map shortens them to the display labels every downstream
//! consumer uses. Unmapped columns keep their source names.

use crate::enums::{EducationLevel, Gender};

// Statistics table, shared identifier columns.
pub const COUNTRY_NAME: &str = "Country Name";
pub const COUNTRY_CODE: &str = "Country Code";
pub const YEAR: &str = "Year";

// Statistics table, display labels after normalization.
pub const FEMALE_EMPLOYMENT: &str = "Female Employment to population ratio (%)";
pub const MALE_EMPLOYMENT: &str = "Male Employment to population ratio (%)";
pub const MANAGEMENT_SHARE: &str = "Female % in senior and middle management";
pub const PARLIAMENT_SHARE: &str = "Proportion of seats held by women in national parliaments (%)";
pub const LAW_INDEX: &str = "Women Business and the Law Index Score (scale 1-100)";
pub const LAW_EQUAL_PAY: &str = "Law mandates wages equality";
pub const WORKING_AGE_POPULATION: &str = "Total Population(15-64 years old)";
pub const TOTAL_POPULATION: &str = "Total Population";
pub const BUSINESS_OWNERS: &str = "Female Business Owners (%)";
pub const DIRECTORS: &str = "Female directors (%)";
pub const SOLE_PROPRIETORS: &str = "Female Sole Proprietors (%)";

// Wage table columns (used as-is).
pub const WAGE_COUNTRY: &str = "Country";
pub const WAGE_GENDER: &str = "Gender";
pub const WAGE_VALUE: &str = "Wage";

/// Source label → display label pairs applied by the column normalizer.
pub const RENAME_MAP: &[(&str, &str)] = &[
    (
        "Employment to population ratio, 15+, female (%) (national estimate)",
        FEMALE_EMPLOYMENT,
    ),
    (
        "Employment to population ratio, 15+, male (%) (national estimate)",
        MALE_EMPLOYMENT,
    ),
    (
        "Female share of employment in senior and middle management (%)",
        MANAGEMENT_SHARE,
    ),
    (
        "Labor force with advanced education, female (% of female working-age population with advanced education)",
        "Advanced Education (% of female)",
    ),
    (
        "Labor force with basic education, female (% of female working-age population with basic education)",
        "Basic Education (% of female)",
    ),
    (
        "Labor force with intermediate education, female (% of female working-age population with intermediate education)",
        "Intermediate Education (% of female)",
    ),
    (
        "Labor force with advanced education, male (% of male working-age population with advanced education)",
        "Advanced Education (% of male)",
    ),
    (
        "Labor force with basic education, male (% of male working-age population with basic education)",
        "Basic Education (% of male)",
    ),
    (
        "Labor force with intermediate education, male (% of male working-age population with intermediate education)",
        "Intermediate Education (% of male)",
    ),
    (
        "Law mandates equal remuneration for females and males for work of equal value (1=yes; 0=no)",
        LAW_EQUAL_PAY,
    ),
    ("Population ages 15-64, total", WORKING_AGE_POPULATION),
    ("Population, total", TOTAL_POPULATION),
    (
        "Share of female business owners (% of total business owners)",
        BUSINESS_OWNERS,
    ),
    ("Share of female directors (% of total directors)", DIRECTORS),
    (
        "Share of female sole proprietors  (% of sole proprietors)",
        SOLE_PROPRIETORS,
    ),
];

/// Columns the statistics table must expose after normalization.
/// Checked once at load time so a schema drift fails at startup instead
/// of at first use.
pub const EXPECTED_STATISTICS_COLUMNS: &[&str] = &[
    COUNTRY_NAME,
    COUNTRY_CODE,
    YEAR,
    FEMALE_EMPLOYMENT,
    MALE_EMPLOYMENT,
    MANAGEMENT_SHARE,
    PARLIAMENT_SHARE,
    LAW_INDEX,
    LAW_EQUAL_PAY,
    TOTAL_POPULATION,
    BUSINESS_OWNERS,
    DIRECTORS,
    SOLE_PROPRIETORS,
    "Basic Education (% of female)",
    "Basic Education (% of male)",
    "Intermediate Education (% of female)",
    "Intermediate Education (% of male)",
    "Advanced Education (% of female)",
    "Advanced Education (% of male)",
];

/// Columns the wage table must expose.
pub const EXPECTED_WAGE_COLUMNS: &[&str] = &[WAGE_COUNTRY, YEAR, WAGE_GENDER, WAGE_VALUE];

/// Display label of an education share column for a level/gender pair,
/// e.g. "Advanced Education (% of female)".
pub fn education_column(level: EducationLevel, gender: Gender) -> String {
    format!("{} Education (% of {})", level.as_str(), gender.column_token())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn education_column_matches_display_labels() {
        assert_eq!(
            education_column(EducationLevel::Advanced, Gender::Female),
            "Advanced Education (% of female)"
        );
        assert_eq!(
            education_column(EducationLevel::Basic, Gender::Male),
            "Basic Education (% of male)"
        );
    }

    #[test]
    fn every_education_display_label_is_a_rename_target() {
        for level in [
            EducationLevel::Basic,
            EducationLevel::Intermediate,
            EducationLevel::Advanced,
        ] {
            for gender in Gender::all() {
                let label = education_column(level, gender);
                assert!(
                    RENAME_MAP.iter().any(|(_, display)| *display == label),
                    "missing rename target: {label}"
                );
            }
        }
    }
}
