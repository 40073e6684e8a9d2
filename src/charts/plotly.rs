//! Plotly-shaped chart specification types
//!
//! Serialized as the `{data, layout, config}` payload the external charting
//! library consumes. This crate never renders pixels; the serialized spec is
//! the hand-off boundary.

use serde::Serialize;

/// Complete specification for one chart container
#[derive(Debug, Clone, Serialize)]
pub struct ChartSpec {
    pub data: Vec<Trace>,
    pub layout: Layout,
    pub config: RenderConfig,
}

/// One visual series
#[derive(Debug, Clone, Serialize)]
#[serde(untagged)]
pub enum Trace {
    Scatter(ScatterTrace),
    Bar(BarTrace),
}

/// Scatter series, 2D ("scatter") or 3D ("scatter3d")
#[derive(Debug, Clone, Serialize)]
pub struct ScatterTrace {
    #[serde(rename = "type")]
    pub trace_type: &'static str,
    pub name: String,
    pub mode: &'static str,
    pub x: Vec<f64>,
    pub y: Vec<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub z: Option<Vec<f64>>,
    /// Composed hover popup per point, index-aligned with coordinates
    pub text: Vec<String>,
    /// Record labels, index-aligned with coordinates
    pub customdata: Vec<String>,
    pub hoverinfo: &'static str,
    pub marker: Marker,
}

/// Bar series for the language distribution chart
#[derive(Debug, Clone, Serialize)]
pub struct BarTrace {
    #[serde(rename = "type")]
    pub trace_type: &'static str,
    pub name: String,
    pub x: Vec<String>,
    pub y: Vec<u64>,
    pub marker: Marker,
}

/// Marker styling
#[derive(Debug, Clone, Serialize)]
pub struct Marker {
    pub color: MarkerColor,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub size: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub opacity: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub line: Option<MarkerLine>,
}

/// Single color for a whole series, or one color per point (bar charts)
#[derive(Debug, Clone, Serialize)]
#[serde(untagged)]
pub enum MarkerColor {
    Single(String),
    PerPoint(Vec<String>),
}

/// Marker border
#[derive(Debug, Clone, Serialize)]
pub struct MarkerLine {
    pub color: String,
    pub width: f64,
}

/// Chart layout
#[derive(Debug, Clone, Serialize)]
pub struct Layout {
    pub title: Title,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub xaxis: Option<Axis>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub yaxis: Option<Axis>,
    /// 3D axes live under `scene`
    #[serde(skip_serializing_if = "Option::is_none")]
    pub scene: Option<Scene>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub annotations: Option<Vec<Annotation>>,
    pub showlegend: bool,
    pub hovermode: &'static str,
}

impl Layout {
    /// Minimal layout with a title and no axes
    pub fn titled(text: impl Into<String>) -> Self {
        Layout {
            title: Title { text: text.into() },
            xaxis: None,
            yaxis: None,
            scene: None,
            annotations: None,
            showlegend: true,
            hovermode: "closest",
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct Title {
    pub text: String,
}

#[derive(Debug, Clone, Serialize)]
pub struct Axis {
    pub title: Title,
}

impl Axis {
    pub fn titled(text: impl Into<String>) -> Self {
        Axis {
            title: Title { text: text.into() },
        }
    }
}

/// 3D axis block
#[derive(Debug, Clone, Serialize)]
pub struct Scene {
    pub xaxis: Axis,
    pub yaxis: Axis,
    pub zaxis: Axis,
}

/// Free-floating layout text, used by the error presentation
#[derive(Debug, Clone, Serialize)]
pub struct Annotation {
    pub text: String,
    pub showarrow: bool,
    pub xref: &'static str,
    pub yref: &'static str,
    pub x: f64,
    pub y: f64,
}

impl Annotation {
    /// Centered paper-anchored annotation
    pub fn centered(text: impl Into<String>) -> Self {
        Annotation {
            text: text.into(),
            showarrow: false,
            xref: "paper",
            yref: "paper",
            x: 0.5,
            y: 0.5,
        }
    }
}

/// Renderer configuration passed through untouched
#[derive(Debug, Clone, Serialize)]
pub struct RenderConfig {
    pub responsive: bool,
    pub displaylogo: bool,
}

impl Default for RenderConfig {
    fn default() -> Self {
        RenderConfig {
            responsive: true,
            displaylogo: false,
        }
    }
}
