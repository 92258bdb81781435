//! Figure Specification Types
//!
//! Minimal Plotly figure model: a figure is a list of traces plus a layout.
//! Only the fields the dashboard uses are modeled; everything serializes to
//! the JSON shape `Plotly.newPlot(data, layout)` expects.

use serde::Serialize;

/// A renderable chart: traces plus layout
#[derive(Debug, Clone, Serialize)]
pub struct Figure {
    pub data: Vec<Trace>,
    pub layout: Layout,
}

/// One data series within a figure
#[derive(Debug, Clone, Serialize)]
pub struct Trace {
    #[serde(rename = "type")]
    pub kind: &'static str,

    pub x: Vec<String>,
    pub y: Vec<f64>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub mode: Option<Mode>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub opacity: Option<f64>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub marker: Option<Marker>,
}

impl Trace {
    /// A scatter trace (lines and/or markers)
    pub fn scatter(name: &str, x: Vec<String>, y: Vec<f64>) -> Self {
        Self {
            kind: "scatter",
            x,
            y,
            mode: None,
            name: Some(name.to_string()),
            opacity: None,
            marker: None,
        }
    }

    /// A bar trace
    pub fn bar(x: Vec<String>, y: Vec<f64>) -> Self {
        Self {
            kind: "bar",
            x,
            y,
            mode: None,
            name: None,
            opacity: None,
            marker: None,
        }
    }

    pub fn mode(mut self, mode: Mode) -> Self {
        self.mode = Some(mode);
        self
    }

    pub fn opacity(mut self, opacity: f64) -> Self {
        self.opacity = Some(opacity);
        self
    }

    pub fn marker(mut self, marker: Marker) -> Self {
        self.marker = Some(marker);
        self
    }
}

/// Scatter drawing mode
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum Mode {
    #[serde(rename = "lines")]
    Lines,
    #[serde(rename = "lines+markers")]
    LinesMarkers,
}

/// Per-bar coloring on a named colorscale
#[derive(Debug, Clone, Serialize)]
pub struct Marker {
    /// One color value per bar; here the bar's own y value
    pub color: Vec<f64>,
    pub colorscale: &'static str,
    /// Lower anchor of the colorscale
    pub cmin: f64,
    /// Upper anchor of the colorscale
    pub cmax: f64,
}

/// Figure layout shared by both dashboard charts
#[derive(Debug, Clone, Serialize)]
pub struct Layout {
    pub title: Title,
    pub margin: Margin,
    pub template: &'static str,
    pub xaxis: Axis,
    pub yaxis: Axis,
    pub showlegend: bool,
}

/// Chart title, anchored to the left edge of the plotting area
#[derive(Debug, Clone, Serialize)]
pub struct Title {
    pub text: String,
    pub xref: &'static str,
    pub x: f64,
}

impl Title {
    pub fn paper_left(text: &str) -> Self {
        Self {
            text: text.to_string(),
            xref: "paper",
            x: 0.0,
        }
    }
}

#[derive(Debug, Clone, Copy, Serialize)]
pub struct Margin {
    pub l: u32,
    pub r: u32,
    pub b: u32,
    pub t: u32,
}

impl Margin {
    /// The 50px margin both dashboard charts use
    pub fn uniform(px: u32) -> Self {
        Self {
            l: px,
            r: px,
            b: px,
            t: px,
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct Axis {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<AxisTitle>,
    pub tickfont: Font,
}

impl Axis {
    pub fn titled(text: &str, title_size: u32, tick_size: u32) -> Self {
        Self {
            title: Some(AxisTitle {
                text: text.to_string(),
                font: Font { size: title_size },
            }),
            tickfont: Font { size: tick_size },
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct AxisTitle {
    pub text: String,
    pub font: Font,
}

#[derive(Debug, Clone, Copy, Serialize)]
pub struct Font {
    pub size: u32,
}
