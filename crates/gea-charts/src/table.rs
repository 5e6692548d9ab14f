//! Country feature table and curiosity text panel beside the map.

use serde::Serialize;

use gea_core::{SENTINEL, StatSnapshot, decimal_label, millions_label, yes_no_label};

use crate::figure::{Figure, Layout, TableCells, TableHeader, TableTrace, Trace};
use crate::theme;

/// Feature rows shown for the hovered country. Null fields render the
/// sentinel; builders never see raw nulls beyond the `Option`s here.
pub fn country_table(country: &str, year: i32, snapshot: Option<&StatSnapshot>) -> Figure {
    let labels = vec![
        "Total Population (M)".to_string(),
        "Female Business Owners (%)".to_string(),
        "Female directors (%)".to_string(),
        "Female Sole Proprietors (%)".to_string(),
        "Law mandates wages equality".to_string(),
    ];
    let values = vec![
        millions_label(snapshot.and_then(|s| s.total_population)),
        decimal_label(snapshot.and_then(|s| s.business_owners)),
        decimal_label(snapshot.and_then(|s| s.directors)),
        decimal_label(snapshot.and_then(|s| s.sole_proprietors)),
        yes_no_label(snapshot.and_then(|s| s.law_mandates_equal_pay)),
    ];

    let trace = TableTrace {
        columnwidth: vec![100, 40],
        header: TableHeader {
            values: vec![format!("<b>{country}</b>"), format!("<b>{year}</b>")],
            fill_color: theme::MINT_GREEN.to_string(),
            line_color: theme::SEASALT.to_string(),
            font_color: theme::PAYNES_GRAY.to_string(),
            font_size: 15,
        },
        cells: TableCells {
            labels,
            values,
            fill_color: theme::PANEL_GRAY.to_string(),
            line_color: theme::PANEL_GRAY.to_string(),
            font_color: theme::PAYNES_GRAY.to_string(),
            font_size: 15,
            align: "left".to_string(),
            height: 24,
        },
    };

    let mut layout = Layout::panel(0, 154).with_margin(0, 0, 0, 0);
    layout.width = None;
    layout.autosize = true;
    layout.plot_bgcolor = None;

    Figure {
        traces: vec![Trace::Table(trace)],
        layout,
    }
}

/// Free-text curiosity shown above the table. A country without an
/// entry gets the sentinel rather than failing the interaction.
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct CuriosityPanel {
    pub country: String,
    pub text: String,
}

pub fn curiosity_panel(country: &str, text: Option<&str>) -> CuriosityPanel {
    CuriosityPanel {
        country: country.to_string(),
        text: text.unwrap_or(SENTINEL).to_string(),
    }
}
