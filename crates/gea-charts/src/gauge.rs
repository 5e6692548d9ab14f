//! Women Business and the Law index gauge.

use gea_core::{SENTINEL, StatSnapshot};

use crate::figure::{Figure, Gauge, IndicatorTrace, Layout, Threshold, Trace};
use crate::theme;

/// Gauge over a 0-100 axis with the delta and threshold pinned to the
/// all-country average for the selected year.
pub fn law_index_gauge(snapshot: Option<&StatSnapshot>, average: Option<f64>) -> Figure {
    let value = snapshot.and_then(|s| s.law_index);
    let display = match value {
        Some(v) => format!("{v:.1}"),
        None => SENTINEL.to_string(),
    };
    let trace = IndicatorTrace {
        mode: "gauge+number+delta".to_string(),
        value,
        display,
        delta_reference: average,
        gauge: Gauge {
            axis_range: [0.0, 100.0],
            tick_color: theme::PAYNES_GRAY.to_string(),
            bar_color: theme::MINT_GREEN.to_string(),
            background_color: theme::SEASALT.to_string(),
            border_color: theme::PAYNES_GRAY.to_string(),
            border_width: 2,
            threshold: average.map(|value| Threshold {
                value,
                color: theme::PAYNES_GRAY.to_string(),
                width: 10,
                thickness: 0.5,
            }),
        },
    };

    Figure {
        traces: vec![Trace::Indicator(trace)],
        layout: Layout {
            autosize: true,
            width: None,
            ..Layout::panel(0, 155)
        }
        .with_margin(30, 35, 25, 20),
    }
}
