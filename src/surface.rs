//! Display surface
//!
//! The page exposes a fixed set of named output slots for corpus metadata and
//! statistics counters. The pipeline writes every slot on each successful
//! load; slot identifiers are the contract with the surrounding page.

use crate::dataset::Language;

/// Named output slot on the surrounding page
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Slot {
    ModelName,
    Dimensions,
    Task,
    GeneratedAt,
    TotalDocuments,
    TotalVectors,
    Coverage,
    /// Per-language document counter
    LanguageDocuments(Language),
    DocumentVectors,
    SectionVectors,
    ParagraphVectors,
}

impl Slot {
    /// Stable slot identifier used by the surrounding page
    pub fn id(&self) -> String {
        match self {
            Slot::ModelName => "model-name".to_string(),
            Slot::Dimensions => "vector-dimensions".to_string(),
            Slot::Task => "optimization-task".to_string(),
            Slot::GeneratedAt => "generated-at".to_string(),
            Slot::TotalDocuments => "total-documents".to_string(),
            Slot::TotalVectors => "total-vectors".to_string(),
            Slot::Coverage => "coverage-percent".to_string(),
            Slot::LanguageDocuments(lang) => format!("{}-documents", lang.code()),
            Slot::DocumentVectors => "document-vectors".to_string(),
            Slot::SectionVectors => "section-vectors".to_string(),
            Slot::ParagraphVectors => "paragraph-vectors".to_string(),
        }
    }
}

/// Receives the display-only counters and metadata labels
pub trait DisplaySurface {
    fn set_slot(&mut self, slot: Slot, value: String);
}

/// Prints slot writes to stdout, one line per slot
#[derive(Debug, Default)]
pub struct ConsoleSurface;

impl DisplaySurface for ConsoleSurface {
    fn set_slot(&mut self, slot: Slot, value: String) {
        println!("  {}: {}", slot.id(), value);
    }
}
