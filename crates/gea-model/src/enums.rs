//! Type-safe enumerations for user-facing selection values.
//!
//! The dashboard's controls hand these over as strings; parsing is
//! case-insensitive and accepts the short forms used by the CLI flags.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Gender dimension of the statistics and wage tables.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Gender {
    Female,
    Male,
}

impl Gender {
    /// Canonical label as it appears in the wage table's `Gender` column.
    pub fn as_str(&self) -> &'static str {
        match self {
            Gender::Female => "Female",
            Gender::Male => "Male",
        }
    }

    /// Lowercase token used inside education column labels
    /// (e.g. "Advanced Education (% of female)").
    pub fn column_token(&self) -> &'static str {
        match self {
            Gender::Female => "female",
            Gender::Male => "male",
        }
    }

    /// Both genders in emission order (Female first, then Male).
    pub fn all() -> [Gender; 2] {
        [Gender::Female, Gender::Male]
    }
}

impl fmt::Display for Gender {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for Gender {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "female" | "f" | "women" => Ok(Gender::Female),
            "male" | "m" | "men" => Ok(Gender::Male),
            other => Err(format!("unknown gender: {other}")),
        }
    }
}

/// Education level used by the labor-force education series.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum EducationLevel {
    Basic,
    Intermediate,
    Advanced,
}

impl EducationLevel {
    /// Label as it appears in the education column names.
    pub fn as_str(&self) -> &'static str {
        match self {
            EducationLevel::Basic => "Basic",
            EducationLevel::Intermediate => "Intermediate",
            EducationLevel::Advanced => "Advanced",
        }
    }
}

impl fmt::Display for EducationLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for EducationLevel {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "basic" => Ok(EducationLevel::Basic),
            "intermediate" => Ok(EducationLevel::Intermediate),
            "advanced" => Ok(EducationLevel::Advanced),
            other => Err(format!("unknown education level: {other}")),
        }
    }
}

/// Which end of the growth ranking is displayed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum RankingMode {
    /// The 15 countries with the highest growth.
    Top15,
    /// The 15 countries with the lowest growth.
    Last15,
}

impl RankingMode {
    pub fn as_str(&self) -> &'static str {
        match self {
            RankingMode::Top15 => "Top 15",
            RankingMode::Last15 => "Last 15",
        }
    }
}

impl fmt::Display for RankingMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for RankingMode {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().replace([' ', '-', '_'], "").as_str() {
            "top" | "top15" => Ok(RankingMode::Top15),
            "last" | "last15" | "bottom" | "bottom15" => Ok(RankingMode::Last15),
            other => Err(format!("unknown ranking mode: {other}")),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_gender_case_insensitively() {
        assert_eq!("FEMALE".parse::<Gender>().unwrap(), Gender::Female);
        assert_eq!("m".parse::<Gender>().unwrap(), Gender::Male);
        assert!("other".parse::<Gender>().is_err());
    }

    #[test]
    fn parses_ranking_mode_variants() {
        assert_eq!("top".parse::<RankingMode>().unwrap(), RankingMode::Top15);
        assert_eq!("Top 15".parse::<RankingMode>().unwrap(), RankingMode::Top15);
        assert_eq!("last-15".parse::<RankingMode>().unwrap(), RankingMode::Last15);
    }

    #[test]
    fn education_labels_round_trip() {
        for level in [
            EducationLevel::Basic,
            EducationLevel::Intermediate,
            EducationLevel::Advanced,
        ] {
            assert_eq!(level.as_str().parse::<EducationLevel>().unwrap(), level);
        }
    }
}
