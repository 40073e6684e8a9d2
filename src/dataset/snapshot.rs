//! Validated, immutable snapshot of one loaded dataset
//!
//! A raw `ProjectionDocument` becomes a `Snapshot` exactly once, at load
//! time. Every downstream transformation works on the snapshot and never
//! mutates it; a new load produces a new snapshot that fully replaces the
//! previous one.
//!
//! Validation rules:
//! - A missing required popup field is a `MalformedInput` error naming the
//!   field (fatal for the load).
//! - An unknown language, granularity, or popup type drops the record with a
//!   data-integrity warning on stderr, never silently and never fatally.
//! - A 3D record without `z` is a `MalformedInput` error; a stray `z` on a
//!   2D record is ignored.

use super::error::{Result, ViewerError};
use super::model::{
    CorpusMetadata, CorpusStatistics, LanguageCount, ProjectionDocument, RawPoint, RawPopup,
    RawScatterChart,
};

/// Corpus language, closed vocabulary from the upstream pipeline
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Language {
    Eng,
    Esp,
    Zho,
}

impl Language {
    /// All corpus languages, in statistics display order
    pub const ALL: [Language; 3] = [Language::Eng, Language::Esp, Language::Zho];

    /// Parse an upstream language string ("eng", "ENG", ...)
    pub fn parse(value: &str) -> Option<Self> {
        match value.trim().to_lowercase().as_str() {
            "eng" => Some(Self::Eng),
            "esp" => Some(Self::Esp),
            "zho" => Some(Self::Zho),
            _ => None,
        }
    }

    /// Lowercase language code used in statistics maps
    pub fn code(&self) -> &'static str {
        match self {
            Self::Eng => "eng",
            Self::Esp => "esp",
            Self::Zho => "zho",
        }
    }

    /// Uppercase display form used in legend keys
    pub fn display(&self) -> &'static str {
        match self {
            Self::Eng => "ENG",
            Self::Esp => "ESP",
            Self::Zho => "ZHO",
        }
    }
}

/// Record granularity variant, closed vocabulary matching the legend
///
/// Sections come in two density variants (L0/L1) which are separate legend
/// entries upstream, so they are separate variants here.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Granularity {
    Document,
    SectionL0,
    SectionL1,
    Paragraph,
}

impl Granularity {
    /// Parse an upstream type string ("Document", "Section (L0)", ...)
    pub fn parse(value: &str) -> Option<Self> {
        match value.trim().to_lowercase().as_str() {
            "document" => Some(Self::Document),
            "section (l0)" => Some(Self::SectionL0),
            "section (l1)" => Some(Self::SectionL1),
            "paragraph" => Some(Self::Paragraph),
            _ => None,
        }
    }

    /// Display form used in legend keys
    pub fn display(&self) -> &'static str {
        match self {
            Self::Document => "Document",
            Self::SectionL0 => "Section (L0)",
            Self::SectionL1 => "Section (L1)",
            Self::Paragraph => "Paragraph",
        }
    }

    /// Whether this granularity carries a section-shaped popup
    fn is_section(&self) -> bool {
        matches!(self, Self::SectionL0 | Self::SectionL1)
    }
}

/// Validated popup payload, closed over the three record shapes
#[derive(Debug, Clone, PartialEq)]
pub enum Popup {
    Document {
        corpus_item: String,
        title: String,
    },
    Section {
        corpus_item: String,
        title: String,
        section_id: String,
        section_title: String,
        excerpt: String,
    },
    Paragraph {
        corpus_item: String,
        title: String,
        paragraph_id: String,
        section_title: String,
        excerpt: String,
    },
}

/// One validated projected coordinate with its metadata
#[derive(Debug, Clone)]
pub struct PointRecord {
    pub x: f64,
    pub y: f64,
    /// Present iff the record belongs to the 3D chart
    pub z: Option<f64>,
    pub language: Language,
    pub granularity: Granularity,
    pub label: String,
    pub color: String,
    pub popup: Popup,
}

/// Coordinate arity of one scatter chart
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Dimensionality {
    Two,
    Three,
}

/// One validated PCA scatter chart
#[derive(Debug, Clone)]
pub struct ProjectedChart {
    pub title: String,
    pub variance_explained: Vec<f64>,
    pub points: Vec<PointRecord>,
}

/// Validated distribution chart (single series, no grouping needed)
#[derive(Debug, Clone)]
pub struct DistributionChart {
    pub title: String,
    pub entries: Vec<LanguageCount>,
}

/// Immutable snapshot of the most recently loaded dataset
#[derive(Debug, Clone)]
pub struct Snapshot {
    pub metadata: CorpusMetadata,
    pub statistics: CorpusStatistics,
    pub pca_2d: ProjectedChart,
    pub pca_3d: ProjectedChart,
    pub language_distribution: DistributionChart,
}

impl Snapshot {
    /// Validate a raw document into a snapshot
    pub fn from_document(doc: ProjectionDocument) -> Result<Self> {
        let pca_2d = validate_chart(doc.charts.pca_2d, Dimensionality::Two, "pca_2d")?;
        let pca_3d = validate_chart(doc.charts.pca_3d, Dimensionality::Three, "pca_3d")?;

        Ok(Snapshot {
            metadata: doc.metadata,
            statistics: doc.corpus_statistics,
            pca_2d,
            pca_3d,
            language_distribution: DistributionChart {
                title: doc.charts.language_distribution.title,
                entries: doc.charts.language_distribution.data,
            },
        })
    }

    /// Parse and validate an input document from its JSON text
    pub fn from_json(text: &str) -> Result<Self> {
        let doc: ProjectionDocument = serde_json::from_str(text)?;
        Self::from_document(doc)
    }
}

/// Validate one scatter chart, dropping unknown-vocabulary records with a warning
fn validate_chart(
    raw: RawScatterChart,
    dim: Dimensionality,
    chart_name: &str,
) -> Result<ProjectedChart> {
    let total = raw.data.len();
    let mut points = Vec::with_capacity(total);

    for (index, raw_point) in raw.data.into_iter().enumerate() {
        if let Some(point) = validate_point(raw_point, dim, chart_name, index)? {
            points.push(point);
        }
    }

    let dropped = total - points.len();
    if dropped > 0 {
        eprintln!(
            "⚠ {}: dropped {} of {} records with unknown vocabulary",
            chart_name, dropped, total
        );
    }

    Ok(ProjectedChart {
        title: raw.title,
        variance_explained: raw.variance_explained,
        points,
    })
}

/// Validate one record; `Ok(None)` means dropped with a warning
fn validate_point(
    raw: RawPoint,
    dim: Dimensionality,
    chart_name: &str,
    index: usize,
) -> Result<Option<PointRecord>> {
    let language = match Language::parse(&raw.language) {
        Some(lang) => lang,
        None => {
            eprintln!(
                "⚠ {}[{}]: unknown language '{}', record dropped",
                chart_name, index, raw.language
            );
            return Ok(None);
        }
    };

    let granularity = match Granularity::parse(&raw.kind) {
        Some(granularity) => granularity,
        None => {
            eprintln!(
                "⚠ {}[{}]: unknown record type '{}', record dropped",
                chart_name, index, raw.kind
            );
            return Ok(None);
        }
    };

    let popup = match validate_popup(raw.popup)? {
        Some(popup) => popup,
        None => {
            eprintln!("⚠ {}[{}]: unknown popup type, record dropped", chart_name, index);
            return Ok(None);
        }
    };

    // Popup shape must agree with the record granularity
    let agrees = match (&popup, granularity) {
        (Popup::Document { .. }, Granularity::Document) => true,
        (Popup::Section { .. }, g) if g.is_section() => true,
        (Popup::Paragraph { .. }, Granularity::Paragraph) => true,
        _ => false,
    };
    if !agrees {
        eprintln!(
            "⚠ {}[{}]: popup shape does not match record type '{}', record dropped",
            chart_name,
            index,
            granularity.display()
        );
        return Ok(None);
    }

    let z = match dim {
        Dimensionality::Three => match raw.z {
            Some(z) => Some(z),
            None => return Err(ViewerError::MalformedInput { field: "z".into() }),
        },
        // Stray z on a 2D record is ignored
        Dimensionality::Two => None,
    };

    Ok(Some(PointRecord {
        x: raw.x,
        y: raw.y,
        z,
        language,
        granularity,
        label: raw.label,
        color: raw.color,
        popup,
    }))
}

/// Validate a popup payload; `Ok(None)` means the type tag is unknown
fn validate_popup(raw: RawPopup) -> Result<Option<Popup>> {
    let popup = match raw.kind.trim().to_lowercase().as_str() {
        "document" => Popup::Document {
            corpus_item: require("popup.corpus_item", raw.corpus_item)?,
            title: require("popup.document_title", raw.document_title)?,
        },
        "section" => Popup::Section {
            corpus_item: require("popup.corpus_item", raw.corpus_item)?,
            title: require("popup.document_title", raw.document_title)?,
            section_id: require("popup.section_id", raw.section_id)?,
            section_title: require("popup.section_title", raw.section_title)?,
            excerpt: require("popup.excerpt", raw.excerpt)?,
        },
        "paragraph" => Popup::Paragraph {
            corpus_item: require("popup.corpus_item", raw.corpus_item)?,
            title: require("popup.document_title", raw.document_title)?,
            paragraph_id: require("popup.paragraph_id", raw.paragraph_id)?,
            section_title: require("popup.section_title", raw.section_title)?,
            excerpt: require("popup.excerpt", raw.excerpt)?,
        },
        _ => return Ok(None),
    };
    Ok(Some(popup))
}

/// Require a popup field, naming it in the error when absent
fn require(field: &'static str, value: Option<String>) -> Result<String> {
    value.ok_or_else(|| ViewerError::MalformedInput {
        field: field.to_string(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn raw_point(language: &str, kind: &str, popup_kind: &str) -> RawPoint {
        RawPoint {
            x: 0.1,
            y: 0.2,
            z: None,
            language: language.to_string(),
            kind: kind.to_string(),
            label: "doc-001".to_string(),
            color: "#1f77b4".to_string(),
            popup: RawPopup {
                kind: popup_kind.to_string(),
                corpus_item: Some("gai-eng-001".to_string()),
                document_title: Some("A title".to_string()),
                section_id: Some("s1".to_string()),
                paragraph_id: Some("p1".to_string()),
                section_title: Some("A section".to_string()),
                excerpt: Some("Some text".to_string()),
            },
        }
    }

    #[test]
    fn test_language_parse() {
        assert_eq!(Language::parse("eng"), Some(Language::Eng));
        assert_eq!(Language::parse("ESP"), Some(Language::Esp));
        assert_eq!(Language::parse("zho"), Some(Language::Zho));
        assert_eq!(Language::parse("fra"), None);
    }

    #[test]
    fn test_granularity_parse() {
        assert_eq!(Granularity::parse("Document"), Some(Granularity::Document));
        assert_eq!(
            Granularity::parse("Section (L0)"),
            Some(Granularity::SectionL0)
        );
        assert_eq!(
            Granularity::parse("section (l1)"),
            Some(Granularity::SectionL1)
        );
        assert_eq!(Granularity::parse("Paragraph"), Some(Granularity::Paragraph));
        assert_eq!(Granularity::parse("Chapter"), None);
    }

    #[test]
    fn test_valid_point() {
        let point = validate_point(
            raw_point("eng", "Document", "document"),
            Dimensionality::Two,
            "pca_2d",
            0,
        )
        .unwrap()
        .expect("record should validate");

        assert_eq!(point.language, Language::Eng);
        assert_eq!(point.granularity, Granularity::Document);
        assert!(point.z.is_none());
        assert!(matches!(point.popup, Popup::Document { .. }));
    }

    #[test]
    fn test_unknown_language_dropped() {
        let result = validate_point(
            raw_point("fra", "Document", "document"),
            Dimensionality::Two,
            "pca_2d",
            0,
        )
        .unwrap();
        assert!(result.is_none());
    }

    #[test]
    fn test_unknown_popup_type_dropped() {
        let result = validate_point(
            raw_point("eng", "Document", "chapter"),
            Dimensionality::Two,
            "pca_2d",
            0,
        )
        .unwrap();
        assert!(result.is_none());
    }

    #[test]
    fn test_popup_shape_mismatch_dropped() {
        // Document record carrying a paragraph popup
        let result = validate_point(
            raw_point("eng", "Document", "paragraph"),
            Dimensionality::Two,
            "pca_2d",
            0,
        )
        .unwrap();
        assert!(result.is_none());
    }

    #[test]
    fn test_missing_popup_field_is_malformed_input() {
        let mut raw = raw_point("eng", "Section (L0)", "section");
        raw.popup.section_id = None;

        let err = validate_point(raw, Dimensionality::Two, "pca_2d", 0).unwrap_err();
        match err {
            ViewerError::MalformedInput { field } => assert_eq!(field, "popup.section_id"),
            other => panic!("expected MalformedInput, got {:?}", other),
        }
    }

    #[test]
    fn test_missing_z_on_3d_record() {
        let err = validate_point(
            raw_point("eng", "Document", "document"),
            Dimensionality::Three,
            "pca_3d",
            0,
        )
        .unwrap_err();
        match err {
            ViewerError::MalformedInput { field } => assert_eq!(field, "z"),
            other => panic!("expected MalformedInput, got {:?}", other),
        }
    }

    #[test]
    fn test_stray_z_on_2d_record_ignored() {
        let mut raw = raw_point("eng", "Document", "document");
        raw.z = Some(0.5);

        let point = validate_point(raw, Dimensionality::Two, "pca_2d", 0)
            .unwrap()
            .unwrap();
        assert!(point.z.is_none());
    }

    #[test]
    fn test_snapshot_from_json() {
        let doc = json!({
            "metadata": {
                "model": "multilingual-e5-large",
                "dimensions": 1024,
                "task": "semantic similarity",
                "generated_readable": "2025-06-01 12:00:00"
            },
            "corpus_statistics": {
                "total_documents": 2,
                "total_vectors": 5,
                "languages": {"eng": 1, "esp": 1},
                "granularity": {"document": 2, "section": 2, "paragraph": 1},
                "coverage_percent": 100.0
            },
            "charts": {
                "pca_2d": {
                    "title": "PCA 2D",
                    "variance_explained": [0.61, 0.21],
                    "data": [{
                        "x": 0.1, "y": 0.2,
                        "language": "eng", "type": "Document",
                        "label": "doc-001", "color": "#1f77b4",
                        "popup": {
                            "type": "document",
                            "corpus_item": "gai-eng-001",
                            "document_title": "A title"
                        }
                    }]
                },
                "pca_3d": {
                    "title": "PCA 3D",
                    "variance_explained": [0.51, 0.22, 0.11],
                    "data": [{
                        "x": 0.3, "y": -0.4, "z": 0.5,
                        "language": "esp", "type": "Paragraph",
                        "label": "doc-002", "color": "#ff7f0e",
                        "popup": {
                            "type": "paragraph",
                            "corpus_item": "gai-esp-002",
                            "document_title": "Otro título",
                            "paragraph_id": "p3",
                            "section_title": "Sección",
                            "excerpt": "Texto de ejemplo"
                        }
                    }]
                },
                "language_distribution": {
                    "title": "Vectors per language",
                    "data": [
                        {"language": "eng", "count": 3, "color": "#1f77b4"},
                        {"language": "esp", "count": 2, "color": "#ff7f0e"}
                    ]
                }
            }
        });

        let snapshot = Snapshot::from_json(&doc.to_string()).unwrap();
        assert_eq!(snapshot.metadata.model, "multilingual-e5-large");
        assert_eq!(snapshot.pca_2d.points.len(), 1);
        assert_eq!(snapshot.pca_3d.points.len(), 1);
        assert_eq!(snapshot.pca_3d.points[0].z, Some(0.5));
        assert_eq!(snapshot.language_distribution.entries.len(), 2);
    }
}
