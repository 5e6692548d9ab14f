//! Leadership donuts: women in management and in parliament.

use gea_core::{StatSnapshot, percent_label};

use crate::figure::{Annotation, Figure, Layout, PieTrace, Trace};
use crate::theme;

/// Women in senior and middle management.
pub fn management_donut(snapshot: Option<&StatSnapshot>) -> Figure {
    share_donut(snapshot.and_then(|s| s.management_share))
}

/// Women in national parliaments.
pub fn parliament_donut(snapshot: Option<&StatSnapshot>) -> Figure {
    share_donut(snapshot.and_then(|s| s.parliament_share))
}

/// Donut with the share and its complement, the percent label in the
/// hole. A missing share renders an empty ring with the sentinel.
fn share_donut(share: Option<f64>) -> Figure {
    let filled = share.unwrap_or(0.0);
    let trace = PieTrace {
        values: vec![filled, 100.0 - filled],
        hole: 0.6,
        showlegend: false,
        textinfo: "none".to_string(),
        sort: false,
        colors: vec![theme::MINT_GREEN.to_string(), theme::PAYNES_GRAY.to_string()],
    };

    let mut layout = Layout::panel(180, 180).with_margin(0, 0, 0, 0);
    layout.plot_bgcolor = None;
    layout.annotations = vec![Annotation {
        text: percent_label(share),
        x: 0.5,
        y: 0.5,
        showarrow: false,
        font_size: 22,
        font_color: theme::PAYNES_GRAY.to_string(),
    }];

    Figure {
        traces: vec![Trace::Pie(trace)],
        layout,
    }
}
