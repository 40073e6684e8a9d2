//! Raw serde model of the input document
//!
//! Mirrors the JSON produced by the external vectorization pipeline, one
//! document per load. Popup fields are all optional at this layer; which of
//! them are required depends on the record granularity and is enforced during
//! validation (see `snapshot`).

use serde::Deserialize;
use std::collections::BTreeMap;

/// Top-level input document
#[derive(Debug, Clone, Deserialize)]
pub struct ProjectionDocument {
    pub metadata: CorpusMetadata,
    pub corpus_statistics: CorpusStatistics,
    pub charts: ChartsSection,
}

/// Corpus metadata, read once per load
#[derive(Debug, Clone, Deserialize)]
pub struct CorpusMetadata {
    /// Embedding model name
    pub model: String,
    /// Vector dimensionality
    pub dimensions: u32,
    /// Optimization task the vectors were generated for
    pub task: String,
    /// Human-readable generation timestamp
    pub generated_readable: String,
}

/// Display-only corpus counters, immutable per load
#[derive(Debug, Clone, Deserialize)]
pub struct CorpusStatistics {
    pub total_documents: u64,
    pub total_vectors: u64,
    /// Per-language document counts, keyed by language code ("eng", ...)
    pub languages: BTreeMap<String, u64>,
    /// Per-granularity vector counts
    pub granularity: GranularityCounts,
    pub coverage_percent: f64,
}

/// Vector counts per granularity level
#[derive(Debug, Clone, Deserialize)]
pub struct GranularityCounts {
    pub document: u64,
    pub section: u64,
    pub paragraph: u64,
}

/// The three chart payloads of the document
#[derive(Debug, Clone, Deserialize)]
pub struct ChartsSection {
    pub pca_2d: RawScatterChart,
    pub pca_3d: RawScatterChart,
    pub language_distribution: RawDistributionChart,
}

/// One PCA scatter chart (2D or 3D) as produced upstream
#[derive(Debug, Clone, Deserialize)]
pub struct RawScatterChart {
    pub title: String,
    /// Fraction of total variance captured per projection axis
    pub variance_explained: Vec<f64>,
    pub data: Vec<RawPoint>,
}

/// Language distribution bar chart payload
#[derive(Debug, Clone, Deserialize)]
pub struct RawDistributionChart {
    pub title: String,
    pub data: Vec<LanguageCount>,
}

/// One bar of the language distribution chart
#[derive(Debug, Clone, Deserialize)]
pub struct LanguageCount {
    pub language: String,
    pub count: u64,
    pub color: String,
}

/// One projected coordinate with its display metadata
#[derive(Debug, Clone, Deserialize)]
pub struct RawPoint {
    pub x: f64,
    pub y: f64,
    /// Present only for records belonging to the 3D chart
    pub z: Option<f64>,
    /// Language code or display name ("eng", "ENG", ...)
    pub language: String,
    /// Granularity variant ("Document", "Section (L0)", ...)
    #[serde(rename = "type")]
    pub kind: String,
    pub label: String,
    pub color: String,
    pub popup: RawPopup,
}

/// Type-tagged popup payload as produced upstream
#[derive(Debug, Clone, Deserialize)]
pub struct RawPopup {
    #[serde(rename = "type")]
    pub kind: String,
    pub corpus_item: Option<String>,
    pub document_title: Option<String>,
    pub section_id: Option<String>,
    pub paragraph_id: Option<String>,
    pub section_title: Option<String>,
    pub excerpt: Option<String>,
}
