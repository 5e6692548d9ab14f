//! Growth ranking bar chart.

use gea_core::{GrowthEntry, growth_label};

use crate::figure::{Axis, BarTrace, Figure, Layout, Trace};
use crate::theme;

/// Horizontal bars, highest growth at the top, values as outside text.
pub fn growth_bar_chart(entries: &[GrowthEntry]) -> Figure {
    let trace = BarTrace {
        x: entries.iter().map(|e| e.growth).collect(),
        y: entries.iter().map(|e| e.country_code.clone()).collect(),
        customdata: entries.iter().map(|e| e.country_name.clone()).collect(),
        orientation: "h".to_string(),
        text: entries.iter().map(|e| growth_label(e.growth)).collect(),
        textposition: "outside".to_string(),
        textfont_size: 10.5,
        marker_color: theme::MINT_GREEN.to_string(),
        marker_line_width: 0.9,
        hoverinfo: "skip".to_string(),
    };

    let xaxis = Axis {
        title: Some(
            "Percentage Growth in female employment to population ratio (%)".to_string(),
        ),
        showgrid: Some(false),
        showline: Some(false),
        showticklabels: Some(true),
        zeroline: Some(false),
        ..Axis::new()
    };
    let yaxis = Axis {
        title: Some("Country".to_string()),
        showgrid: Some(false),
        showline: Some(false),
        showticklabels: Some(true),
        // Highest-ranked entry at the top of the chart.
        autorange: Some("reversed".to_string()),
        ..Axis::new()
    };

    Figure {
        traces: vec![Trace::Bar(trace)],
        layout: Layout::panel(700, 500)
            .with_margin(0, 0, 0, 0)
            .with_xaxis(xaxis)
            .with_yaxis(yaxis),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn entry(code: &str, growth: f64) -> GrowthEntry {
        GrowthEntry {
            country_code: code.to_string(),
            country_name: format!("Country {code}"),
            start: 10.0,
            end: 10.0 + growth / 10.0,
            growth,
        }
    }

    #[test]
    fn bars_keep_ranking_order_and_two_decimal_labels() {
        let figure = growth_bar_chart(&[entry("PRT", 100.0), entry("ESP", -50.0)]);
        let Trace::Bar(trace) = &figure.traces[0] else {
            panic!("expected bar trace");
        };
        assert_eq!(trace.y, vec!["PRT".to_string(), "ESP".to_string()]);
        assert_eq!(trace.text, vec!["100.00".to_string(), "-50.00".to_string()]);
        assert_eq!(
            figure.layout.yaxis.as_ref().unwrap().autorange.as_deref(),
            Some("reversed")
        );
    }
}
