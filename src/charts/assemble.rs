//! Chart assembly
//!
//! Combines ordered traces with layout and config into a renderable chart
//! specification, and owns the parallel "data unavailable" presentation used
//! when a load fails. Chart specifications are rebuilt from scratch on every
//! load; nothing is updated incrementally.

use super::plotly::{
    Annotation, Axis, BarTrace, ChartSpec, Layout, Marker, MarkerColor, MarkerLine, RenderConfig,
    Scene, ScatterTrace, Trace,
};
use super::traces::{ChartKind, TraceGroup};
use crate::dataset::model::LanguageCount;

/// Assemble one PCA scatter chart from ordered traces
///
/// Axis titles embed the per-axis variance fraction as a percentage with one
/// decimal place, sourced from the input metadata and never recomputed.
pub fn assemble_scatter(
    ordered: Vec<TraceGroup>,
    kind: ChartKind,
    title: &str,
    variance_explained: &[f64],
) -> ChartSpec {
    let data = ordered.into_iter().map(scatter_trace).collect();

    let mut layout = Layout::titled(title);
    match kind {
        ChartKind::Scatter2d => {
            layout.xaxis = Some(Axis::titled(axis_title(0, variance_explained)));
            layout.yaxis = Some(Axis::titled(axis_title(1, variance_explained)));
        }
        ChartKind::Scatter3d => {
            layout.scene = Some(Scene {
                xaxis: Axis::titled(axis_title(0, variance_explained)),
                yaxis: Axis::titled(axis_title(1, variance_explained)),
                zaxis: Axis::titled(axis_title(2, variance_explained)),
            });
        }
    }

    ChartSpec {
        data,
        layout,
        config: RenderConfig::default(),
    }
}

/// Assemble the language distribution bar chart
///
/// Exactly one series: categories are languages, values are per-language
/// vector counts, colors come straight from the input data. Bypasses the
/// trace builder and legend orderer entirely.
pub fn assemble_distribution(title: &str, entries: &[LanguageCount]) -> ChartSpec {
    let trace = BarTrace {
        trace_type: "bar",
        name: title.to_string(),
        x: entries.iter().map(|e| e.language.clone()).collect(),
        y: entries.iter().map(|e| e.count).collect(),
        marker: Marker {
            color: MarkerColor::PerPoint(entries.iter().map(|e| e.color.clone()).collect()),
            size: None,
            opacity: None,
            line: None,
        },
    };

    let mut layout = Layout::titled(title);
    layout.showlegend = false;

    ChartSpec {
        data: vec![Trace::Bar(trace)],
        layout,
        config: RenderConfig::default(),
    }
}

/// Failed-load presentation carried to every chart container
#[derive(Debug, Clone)]
pub struct ErrorPresentation {
    /// The attempted source identifier (URL or file path)
    pub source: String,
    pub message: String,
}

/// Fixed "data unavailable" specification for one container
pub fn unavailable(presentation: &ErrorPresentation) -> ChartSpec {
    let text = format!(
        "Data unavailable<br>Source: {}<br>{}",
        presentation.source, presentation.message
    );

    let mut layout = Layout::titled("Data unavailable");
    layout.showlegend = false;
    layout.annotations = Some(vec![Annotation::centered(text)]);

    ChartSpec {
        data: Vec::new(),
        layout,
        config: RenderConfig::default(),
    }
}

fn scatter_trace(group: TraceGroup) -> Trace {
    let style = group.kind.marker_style();
    let marker = Marker {
        color: MarkerColor::Single(group.color),
        size: Some(style.size),
        opacity: Some(style.opacity),
        line: style.border.map(|(width, color)| MarkerLine {
            color: color.to_string(),
            width,
        }),
    };

    Trace::Scatter(ScatterTrace {
        trace_type: match group.kind {
            ChartKind::Scatter2d => "scatter",
            ChartKind::Scatter3d => "scatter3d",
        },
        name: group.key.to_string(),
        mode: "markers",
        x: group.x,
        y: group.y,
        z: group.z,
        text: group.hover,
        customdata: group.labels,
        hoverinfo: "text",
        marker,
    })
}

/// Axis title with the variance percentage to one decimal place
fn axis_title(axis_index: usize, variance_explained: &[f64]) -> String {
    let fraction = variance_explained.get(axis_index).copied().unwrap_or(0.0);
    format!(
        "PC{} ({:.1}% variance)",
        axis_index + 1,
        fraction * 100.0
    )
}
