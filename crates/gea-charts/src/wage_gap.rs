//! Gender pay-gap chart: wage markers per gender with one connector
//! segment per year where both wages exist.

use gea_core::WageGapSeries;

use crate::figure::{Figure, Layout, Legend, Line, Marker, ScatterTrace, Trace};
use crate::theme;

pub fn wage_gap_chart(series: &WageGapSeries) -> Figure {
    let mut traces = Vec::new();
    for (idx, gender_series) in series.genders.iter().enumerate() {
        let color = theme::WAGE_SERIES_COLORS[idx % theme::WAGE_SERIES_COLORS.len()];
        traces.push(Trace::Scatter(ScatterTrace {
            name: Some(gender_series.gender.to_string()),
            x: gender_series.points.iter().map(|p| p.year).collect(),
            y: gender_series.points.iter().map(|p| Some(p.wage)).collect(),
            mode: "markers".to_string(),
            line: None,
            marker: Some(Marker {
                color: color.to_string(),
                size: 12,
            }),
            showlegend: true,
            hovertemplate: None,
            hoverinfo: Some("skip".to_string()),
        }));
    }

    for connector in &series.connectors {
        traces.push(Trace::Scatter(ScatterTrace {
            name: None,
            x: vec![connector.year, connector.year],
            y: vec![Some(connector.female_wage), Some(connector.male_wage)],
            mode: "lines".to_string(),
            line: Some(Line {
                color: theme::PAYNES_GRAY.to_string(),
                width: 2.0,
                dash: None,
            }),
            marker: None,
            showlegend: false,
            hovertemplate: Some(format!(
                "<b>Year:</b> {}<br><b>Women's Wage:</b> {:.2}<br>\
                 <b>Men's Wage:</b> {:.2}<br><b>Wage Gap Diff:</b> {:.2}<extra></extra>",
                connector.year, connector.female_wage, connector.male_wage, connector.gap
            )),
            hoverinfo: None,
        }));
    }

    let mut layout = Layout::panel(700, 500)
        .with_margin(0, 0, 0, 0)
        .with_legend(Legend {
            x: 0.03,
            y: 0.99,
            xanchor: "left".to_string(),
            yanchor: "top".to_string(),
            font_size: 15,
        });
    layout.hovermode = Some("x".to_string());

    Figure { traces, layout }
}
