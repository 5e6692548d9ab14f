//! Sentinel-aware display formatting.
//!
//! Every point-lookup value goes through one of these helpers, so a
//! missing row and a null cell produce the same placeholder everywhere.

/// Placeholder shown for missing or undefined data.
pub const SENTINEL: &str = "NAD";

/// Percentage with one decimal, e.g. "61.4%".
pub fn percent_label(value: Option<f64>) -> String {
    match value {
        Some(v) => format!("{v:.1}%"),
        None => SENTINEL.to_string(),
    }
}

/// Plain value with two decimals, e.g. "25.40".
pub fn decimal_label(value: Option<f64>) -> String {
    match value {
        Some(v) => format!("{v:.2}"),
        None => SENTINEL.to_string(),
    }
}

/// Population rendered in millions with two decimals, e.g. "10.30".
pub fn millions_label(value: Option<f64>) -> String {
    decimal_label(value.map(|v| v / 1_000_000.0))
}

/// Growth percentage with two decimals, used for bar text labels.
pub fn growth_label(value: f64) -> String {
    format!("{value:.2}")
}

/// 1/0 law flag rendered as Yes/No.
pub fn yes_no_label(value: Option<bool>) -> String {
    match value {
        Some(true) => "Yes".to_string(),
        Some(false) => "No".to_string(),
        None => SENTINEL.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn labels_round_to_contracted_precision() {
        assert_eq!(percent_label(Some(61.44)), "61.4%");
        assert_eq!(percent_label(Some(61.45)), "61.5%");
        assert_eq!(decimal_label(Some(25.4)), "25.40");
        assert_eq!(millions_label(Some(10_300_000.0)), "10.30");
        assert_eq!(growth_label(12.3456), "12.35");
    }

    #[test]
    fn absence_collapses_to_the_sentinel() {
        assert_eq!(percent_label(None), SENTINEL);
        assert_eq!(decimal_label(None), SENTINEL);
        assert_eq!(millions_label(None), SENTINEL);
        assert_eq!(yes_no_label(None), SENTINEL);
    }

    #[test]
    fn law_flag_renders_yes_no() {
        assert_eq!(yes_no_label(Some(true)), "Yes");
        assert_eq!(yes_no_label(Some(false)), "No");
    }
}
