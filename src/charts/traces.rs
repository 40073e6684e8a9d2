//! Trace building
//!
//! Groups validated point records into one trace per legend key, preserving
//! input order within each trace. Coordinates, labels, and composed popup
//! strings stay index-aligned; 3D traces additionally collect `z`.

use super::legend::LegendKey;
use super::popup;
use crate::dataset::PointRecord;
use std::collections::HashMap;

/// Which scatter chart a trace belongs to
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ChartKind {
    Scatter2d,
    Scatter3d,
}

/// Fixed marker styling per chart kind; color comes from the data
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MarkerStyle {
    pub size: f64,
    pub opacity: f64,
    /// Border width and color, 2D markers only
    pub border: Option<(f64, &'static str)>,
}

impl ChartKind {
    pub fn marker_style(&self) -> MarkerStyle {
        match self {
            ChartKind::Scatter2d => MarkerStyle {
                size: 7.0,
                opacity: 0.75,
                border: Some((0.5, "#333333")),
            },
            ChartKind::Scatter3d => MarkerStyle {
                size: 4.0,
                opacity: 0.8,
                border: None,
            },
        }
    }
}

/// One named group of records sharing a legend key
///
/// Invariant: `x`, `y`, `labels`, and `hover` have equal lengths, and so does
/// `z` when present.
#[derive(Debug, Clone)]
pub struct TraceGroup {
    pub key: LegendKey,
    pub kind: ChartKind,
    /// Marker color, taken from the first record seen for this key
    pub color: String,
    pub x: Vec<f64>,
    pub y: Vec<f64>,
    pub z: Option<Vec<f64>>,
    pub labels: Vec<String>,
    pub hover: Vec<String>,
}

impl TraceGroup {
    pub fn new(key: LegendKey, color: String, kind: ChartKind) -> Self {
        TraceGroup {
            key,
            kind,
            color,
            x: Vec::new(),
            y: Vec::new(),
            z: match kind {
                ChartKind::Scatter2d => None,
                ChartKind::Scatter3d => Some(Vec::new()),
            },
            labels: Vec::new(),
            hover: Vec::new(),
        }
    }

    fn push(&mut self, point: &PointRecord) {
        self.x.push(point.x);
        self.y.push(point.y);
        if let (Some(z_values), Some(z)) = (self.z.as_mut(), point.z) {
            z_values.push(z);
        }
        self.labels.push(point.label.clone());
        self.hover.push(popup::compose(point));
    }

    pub fn len(&self) -> usize {
        self.x.len()
    }

    pub fn is_empty(&self) -> bool {
        self.x.is_empty()
    }
}

/// Group points into one trace per legend key
///
/// No side effects beyond the returned map; display order is imposed
/// afterwards by `legend::order_traces`.
pub fn build_traces(points: &[PointRecord], kind: ChartKind) -> HashMap<LegendKey, TraceGroup> {
    let mut traces: HashMap<LegendKey, TraceGroup> = HashMap::new();

    for point in points {
        let key = LegendKey::new(point.language, point.granularity);
        traces
            .entry(key)
            .or_insert_with(|| TraceGroup::new(key, point.color.clone(), kind))
            .push(point);
    }

    traces
}
