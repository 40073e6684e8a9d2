//! Chart transformation core
//!
//! Turns a validated snapshot into ordered, renderable chart specifications:
//! - `text.rs`: CJK-aware hover-text truncation and line breaking
//! - `popup.rs`: hover popup composition per record shape
//! - `traces.rs`: grouping into one trace per legend key
//! - `legend.rs`: fixed deterministic display order
//! - `assemble.rs`: specification assembly and the error presentation
//! - `plotly.rs`: the serialized specification types

pub mod assemble;
pub mod legend;
pub mod plotly;
pub mod popup;
pub mod text;
pub mod traces;

pub use assemble::ErrorPresentation;
pub use legend::{LegendKey, LEGEND_ORDER};
pub use plotly::ChartSpec;
pub use traces::ChartKind;
