//! The user's current dashboard selection.
//!
//! Owned by the hosting layer and rebuilt on every input event; the
//! pipelines only ever read it. Nothing here is persisted.

use crate::enums::{EducationLevel, Gender, RankingMode};

/// Country shown when nothing has been picked or hovered yet.
pub const DEFAULT_COUNTRY: &str = "Portugal";

#[derive(Debug, Clone, PartialEq)]
pub struct Selection {
    /// Primary country (required dropdown).
    pub country: String,
    /// Optional comparison country for the education chart.
    pub secondary_country: Option<String>,
    /// Year picked on the slider, bounded by the data's year range.
    pub year: i32,
    /// Education level for the multi-series chart.
    pub education: EducationLevel,
    /// Genders toggled on the checklist; order is emission order.
    pub genders: Vec<Gender>,
    /// Top 15 / Last 15 toggle for the growth ranking.
    pub ranking: RankingMode,
    /// Country currently hovered on the choropleth map, if any.
    pub hovered_country: Option<String>,
}

impl Selection {
    /// Control defaults: Portugal, Advanced education, {Female}, Top 15.
    pub fn new(year: i32) -> Self {
        Self {
            country: DEFAULT_COUNTRY.to_string(),
            secondary_country: None,
            year,
            education: EducationLevel::Advanced,
            genders: vec![Gender::Female],
            ranking: RankingMode::Top15,
            hovered_country: None,
        }
    }

    pub fn with_country(mut self, country: impl Into<String>) -> Self {
        self.country = country.into();
        self
    }

    pub fn with_secondary_country(mut self, country: impl Into<String>) -> Self {
        self.secondary_country = Some(country.into());
        self
    }

    pub fn with_year(mut self, year: i32) -> Self {
        self.year = year;
        self
    }

    pub fn with_education(mut self, education: EducationLevel) -> Self {
        self.education = education;
        self
    }

    pub fn with_genders(mut self, genders: Vec<Gender>) -> Self {
        self.genders = genders;
        self
    }

    pub fn with_ranking(mut self, ranking: RankingMode) -> Self {
        self.ranking = ranking;
        self
    }

    pub fn with_hovered_country(mut self, country: impl Into<String>) -> Self {
        self.hovered_country = Some(country.into());
        self
    }

    /// The country driving the map-side panels: the hovered one, or the
    /// default when the pointer is off the map.
    pub fn hovered_or_default(&self) -> &str {
        self.hovered_country.as_deref().unwrap_or(DEFAULT_COUNTRY)
    }

    /// Primary country followed by the secondary one when set, tagging
    /// each with whether it is the secondary (comparison) country.
    pub fn selected_countries(&self) -> Vec<(&str, bool)> {
        let mut countries = vec![(self.country.as_str(), false)];
        if let Some(secondary) = self.secondary_country.as_deref() {
            countries.push((secondary, true));
        }
        countries
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_the_dashboard_controls() {
        let selection = Selection::new(2020);
        assert_eq!(selection.country, "Portugal");
        assert_eq!(selection.education, EducationLevel::Advanced);
        assert_eq!(selection.genders, vec![Gender::Female]);
        assert_eq!(selection.ranking, RankingMode::Top15);
        assert_eq!(selection.hovered_or_default(), "Portugal");
    }

    #[test]
    fn secondary_country_is_listed_after_primary() {
        let selection = Selection::new(2020)
            .with_country("Spain")
            .with_secondary_country("France");
        assert_eq!(
            selection.selected_countries(),
            vec![("Spain", false), ("France", true)]
        );
    }
}
