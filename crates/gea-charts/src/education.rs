//! Education-level time-series chart, one line per (country × gender).

use gea_core::EducationSeries;

use crate::figure::{Axis, Figure, Layout, Legend, Line, ScatterTrace, Trace};
use crate::theme;

pub fn education_chart(series: &[EducationSeries]) -> Figure {
    let traces = series
        .iter()
        .map(|s| {
            Trace::Scatter(ScatterTrace {
                name: Some(format!(
                    "{} Education (% of {}) - {}",
                    s.level.as_str(),
                    s.gender.column_token(),
                    s.country
                )),
                x: s.points.iter().map(|(year, _)| *year).collect(),
                y: s.points.iter().map(|(_, value)| *value).collect(),
                mode: "lines".to_string(),
                line: Some(Line {
                    color: theme::gender_color(s.gender).to_string(),
                    width: 2.0,
                    // The comparison country is drawn dashed.
                    dash: s.secondary.then(|| "dash".to_string()),
                }),
                marker: None,
                showlegend: true,
                hovertemplate: None,
                hoverinfo: None,
            })
        })
        .collect();

    Figure {
        traces,
        layout: Layout::panel(900, 500)
            .with_margin(0, 0, 0, 0)
            .with_xaxis(Axis::titled("Year").with_range(1998.5, 2021.5))
            .with_yaxis(Axis::titled("% of Female/ Male"))
            .with_legend(Legend {
                x: 0.5,
                y: 1.2,
                xanchor: "center".to_string(),
                yanchor: "top".to_string(),
                font_size: 15,
            }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use gea_model::{EducationLevel, Gender};

    fn series(country: &str, gender: Gender, secondary: bool) -> EducationSeries {
        EducationSeries {
            country: country.to_string(),
            gender,
            level: EducationLevel::Advanced,
            secondary,
            points: vec![(2000, Some(30.0)), (2001, None), (2002, Some(32.0))],
        }
    }

    #[test]
    fn gaps_survive_into_the_trace() {
        let figure = education_chart(&[series("Portugal", Gender::Female, false)]);
        let Trace::Scatter(trace) = &figure.traces[0] else {
            panic!("expected scatter trace");
        };
        assert_eq!(trace.y, vec![Some(30.0), None, Some(32.0)]);
        assert_eq!(trace.line.as_ref().unwrap().dash, None);
        assert_eq!(
            trace.name.as_deref(),
            Some("Advanced Education (% of female) - Portugal")
        );
    }

    #[test]
    fn secondary_country_lines_are_dashed() {
        let figure = education_chart(&[
            series("Portugal", Gender::Female, false),
            series("Spain", Gender::Male, true),
        ]);
        let Trace::Scatter(secondary) = &figure.traces[1] else {
            panic!("expected scatter trace");
        };
        assert_eq!(secondary.line.as_ref().unwrap().dash.as_deref(), Some("dash"));
        assert_eq!(secondary.line.as_ref().unwrap().color, theme::APRICOT);
    }
}
