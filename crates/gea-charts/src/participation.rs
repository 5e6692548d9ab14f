//! Labor-force participation badge: the two percent labels plus fill
//! fractions for the figure silhouettes the host layer renders.

use serde::Serialize;

use gea_core::{StatSnapshot, percent_label};

#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct ParticipationBadge {
    pub female_label: String,
    pub male_label: String,
    /// Fraction of the silhouette to fill, 0..=1.
    pub female_fill: f64,
    pub male_fill: f64,
}

/// `None` (no matching row) renders the sentinel with an empty fill.
pub fn participation_badge(snapshot: Option<&StatSnapshot>) -> ParticipationBadge {
    let female = snapshot.and_then(|s| s.female_employment);
    let male = snapshot.and_then(|s| s.male_employment);
    ParticipationBadge {
        female_label: percent_label(female),
        male_label: percent_label(male),
        female_fill: fill_fraction(female),
        male_fill: fill_fraction(male),
    }
}

fn fill_fraction(percent: Option<f64>) -> f64 {
    (percent.unwrap_or(0.0) / 100.0).clamp(0.0, 1.0)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_snapshot_yields_sentinel_and_empty_fill() {
        let badge = participation_badge(None);
        assert_eq!(badge.female_label, "NAD");
        assert_eq!(badge.female_fill, 0.0);
        assert_eq!(badge.male_fill, 0.0);
    }

    #[test]
    fn fill_is_clamped_to_the_unit_interval() {
        assert_eq!(fill_fraction(Some(120.0)), 1.0);
        assert_eq!(fill_fraction(Some(-5.0)), 0.0);
        assert_eq!(fill_fraction(Some(50.0)), 0.5);
    }
}
