//! The declarative figure model consumed by the rendering layer.
//!
//! Builders assemble these structs; nothing here computes. Field order
//! is serialization order, so identical inputs always produce
//! byte-identical JSON.

use serde::Serialize;

use crate::theme;

#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct Figure {
    pub traces: Vec<Trace>,
    pub layout: Layout,
}

impl Figure {
    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(self)
    }
}

#[derive(Debug, Clone, Serialize, PartialEq)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum Trace {
    Scatter(ScatterTrace),
    Bar(BarTrace),
    Pie(PieTrace),
    Indicator(IndicatorTrace),
    Choropleth(ChoroplethTrace),
    Table(TableTrace),
}

/// Line or marker series over years. A `None` y value is a gap.
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct ScatterTrace {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    pub x: Vec<i32>,
    pub y: Vec<Option<f64>>,
    pub mode: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub line: Option<Line>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub marker: Option<Marker>,
    pub showlegend: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub hovertemplate: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub hoverinfo: Option<String>,
}

#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct Line {
    pub color: String,
    pub width: f64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub dash: Option<String>,
}

#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct Marker {
    pub color: String,
    pub size: u32,
}

/// Horizontal bar series with outside text labels.
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct BarTrace {
    pub x: Vec<f64>,
    pub y: Vec<String>,
    pub customdata: Vec<String>,
    pub orientation: String,
    pub text: Vec<String>,
    pub textposition: String,
    pub textfont_size: f64,
    pub marker_color: String,
    pub marker_line_width: f64,
    pub hoverinfo: String,
}

/// Donut slice pair: the share and its complement.
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct PieTrace {
    pub values: Vec<f64>,
    pub hole: f64,
    pub showlegend: bool,
    pub textinfo: String,
    pub sort: bool,
    pub colors: Vec<String>,
}

/// Gauge with an optional delta against a reference value.
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct IndicatorTrace {
    pub mode: String,
    /// The measured value; `None` renders the sentinel `display` text.
    pub value: Option<f64>,
    pub display: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub delta_reference: Option<f64>,
    pub gauge: Gauge,
}

#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct Gauge {
    pub axis_range: [f64; 2],
    pub tick_color: String,
    pub bar_color: String,
    pub background_color: String,
    pub border_color: String,
    pub border_width: u32,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub threshold: Option<Threshold>,
}

#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct Threshold {
    pub value: f64,
    pub color: String,
    pub width: u32,
    pub thickness: f64,
}

#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct ChoroplethTrace {
    pub locations: Vec<String>,
    pub z: Vec<f64>,
    pub zmin: f64,
    pub zmax: f64,
    pub colorscale: Vec<String>,
    pub scope: String,
    pub locationmode: String,
    pub hoverinfo: String,
    pub colorbar: ColorBar,
}

#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct ColorBar {
    pub title: String,
    pub len: f64,
    pub title_font_size: u32,
    pub tick_font_size: u32,
}

/// Two-column feature table with a country/year header.
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct TableTrace {
    pub columnwidth: Vec<u32>,
    pub header: TableHeader,
    pub cells: TableCells,
}

#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct TableHeader {
    pub values: Vec<String>,
    pub fill_color: String,
    pub line_color: String,
    pub font_color: String,
    pub font_size: u32,
}

#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct TableCells {
    pub labels: Vec<String>,
    pub values: Vec<String>,
    pub fill_color: String,
    pub line_color: String,
    pub font_color: String,
    pub font_size: u32,
    pub align: String,
    pub height: u32,
}

#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct Layout {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub width: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub height: Option<u32>,
    pub autosize: bool,
    pub paper_bgcolor: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub plot_bgcolor: Option<String>,
    pub font: Font,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub margin: Option<Margin>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub xaxis: Option<Axis>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub yaxis: Option<Axis>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub legend: Option<Legend>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub annotations: Vec<Annotation>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub hovermode: Option<String>,
}

impl Layout {
    /// Fixed-size chart panel with the dashboard paper, font, and text
    /// color.
    pub fn panel(width: u32, height: u32) -> Self {
        Self {
            width: Some(width),
            height: Some(height),
            autosize: false,
            paper_bgcolor: theme::SEASALT.to_string(),
            plot_bgcolor: Some(theme::SEASALT.to_string()),
            font: Font::base(),
            margin: None,
            xaxis: None,
            yaxis: None,
            legend: None,
            annotations: Vec::new(),
            hovermode: None,
        }
    }

    pub fn with_margin(mut self, l: u32, r: u32, t: u32, b: u32) -> Self {
        self.margin = Some(Margin { l, r, t, b });
        self
    }

    pub fn with_xaxis(mut self, axis: Axis) -> Self {
        self.xaxis = Some(axis);
        self
    }

    pub fn with_yaxis(mut self, axis: Axis) -> Self {
        self.yaxis = Some(axis);
        self
    }

    pub fn with_legend(mut self, legend: Legend) -> Self {
        self.legend = Some(legend);
        self
    }
}

#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct Font {
    pub family: String,
    pub color: String,
    pub size: u32,
}

impl Font {
    pub fn base() -> Self {
        Self {
            family: theme::FONT_FAMILY.to_string(),
            color: theme::PAYNES_GRAY.to_string(),
            size: theme::BASE_FONT_SIZE,
        }
    }
}

#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct Margin {
    pub l: u32,
    pub r: u32,
    pub t: u32,
    pub b: u32,
}

#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct Axis {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub range: Option<[f64; 2]>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub showgrid: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub showline: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub showticklabels: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub zeroline: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub autorange: Option<String>,
}

impl Axis {
    pub fn new() -> Self {
        Self {
            title: None,
            range: None,
            showgrid: None,
            showline: None,
            showticklabels: None,
            zeroline: None,
            autorange: None,
        }
    }

    pub fn titled(title: impl Into<String>) -> Self {
        Self {
            title: Some(title.into()),
            ..Self::new()
        }
    }

    pub fn with_range(mut self, min: f64, max: f64) -> Self {
        self.range = Some([min, max]);
        self
    }
}

impl Default for Axis {
    fn default() -> Self {
        Self::new()
    }
}

#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct Legend {
    pub x: f64,
    pub y: f64,
    pub xanchor: String,
    pub yanchor: String,
    pub font_size: u32,
}

#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct Annotation {
    pub text: String,
    pub x: f64,
    pub y: f64,
    pub showarrow: bool,
    pub font_size: u32,
    pub font_color: String,
}
