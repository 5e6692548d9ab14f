//! Population choropleth of Europe.

use gea_core::PopulationEntry;

use crate::figure::{ChoroplethTrace, ColorBar, Figure, Layout, Trace};
use crate::theme;

/// Fixed color range so the scale stays comparable across years.
const POPULATION_RANGE: [f64; 2] = [0.0, 90_000_000.0];

pub fn population_map(entries: &[PopulationEntry]) -> Figure {
    let trace = ChoroplethTrace {
        locations: entries.iter().map(|e| e.country.clone()).collect(),
        z: entries.iter().map(|e| e.population).collect(),
        zmin: POPULATION_RANGE[0],
        zmax: POPULATION_RANGE[1],
        colorscale: vec![
            theme::MAP_SCALE_LOW.to_string(),
            theme::MAP_SCALE_HIGH.to_string(),
        ],
        scope: "europe".to_string(),
        locationmode: "country names".to_string(),
        hoverinfo: "location".to_string(),
        colorbar: ColorBar {
            title: "Total Population".to_string(),
            len: 0.7,
            title_font_size: 15,
            tick_font_size: 15,
        },
    };

    let mut layout = Layout::panel(835, 658).with_margin(0, 0, 0, 0);
    layout.autosize = true;
    layout.plot_bgcolor = Some(theme::SEASALT.to_string());

    Figure {
        traces: vec![Trace::Choropleth(trace)],
        layout,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn locations_and_values_stay_aligned() {
        let entries = vec![
            PopulationEntry {
                country: "Portugal".to_string(),
                population: 10_300_000.0,
            },
            PopulationEntry {
                country: "France".to_string(),
                population: 67_390_000.0,
            },
        ];
        let figure = population_map(&entries);
        let Trace::Choropleth(trace) = &figure.traces[0] else {
            panic!("expected choropleth trace");
        };
        assert_eq!(trace.locations, vec!["Portugal", "France"]);
        assert_eq!(trace.z, vec![10_300_000.0, 67_390_000.0]);
        assert_eq!(trace.zmax, 90_000_000.0);
    }
}
