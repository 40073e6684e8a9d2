//! Legend keys and the fixed display order
//!
//! Traces are grouped and ordered by `(language, granularity)`. The display
//! order is a fixed priority sequence: documents per language, then the two
//! section density variants per language, then paragraphs per language.
//! Ordering never depends on input order or map iteration order.

use super::traces::TraceGroup;
use crate::dataset::{Granularity, Language};
use std::collections::HashMap;
use std::fmt;

/// Trace group key, displayed as `"<LANG> <variant>"` (e.g. "ENG Section (L0)")
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct LegendKey {
    pub language: Language,
    pub granularity: Granularity,
}

impl LegendKey {
    pub const fn new(language: Language, granularity: Granularity) -> Self {
        LegendKey {
            language,
            granularity,
        }
    }
}

impl fmt::Display for LegendKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.language.display(), self.granularity.display())
    }
}

/// Fixed legend display order
pub const LEGEND_ORDER: [LegendKey; 12] = [
    LegendKey::new(Language::Eng, Granularity::Document),
    LegendKey::new(Language::Esp, Granularity::Document),
    LegendKey::new(Language::Zho, Granularity::Document),
    LegendKey::new(Language::Eng, Granularity::SectionL0),
    LegendKey::new(Language::Eng, Granularity::SectionL1),
    LegendKey::new(Language::Esp, Granularity::SectionL0),
    LegendKey::new(Language::Esp, Granularity::SectionL1),
    LegendKey::new(Language::Zho, Granularity::SectionL0),
    LegendKey::new(Language::Zho, Granularity::SectionL1),
    LegendKey::new(Language::Eng, Granularity::Paragraph),
    LegendKey::new(Language::Esp, Granularity::Paragraph),
    LegendKey::new(Language::Zho, Granularity::Paragraph),
];

/// Order a trace map by the fixed legend sequence
///
/// Keys in the sequence but absent from the map are skipped; no placeholder
/// is emitted.
pub fn order_traces(mut traces: HashMap<LegendKey, TraceGroup>) -> Vec<TraceGroup> {
    LEGEND_ORDER
        .iter()
        .filter_map(|key| traces.remove(key))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::charts::traces::ChartKind;

    fn trace_for(key: LegendKey) -> TraceGroup {
        TraceGroup::new(key, "#333333".to_string(), ChartKind::Scatter2d)
    }

    #[test]
    fn test_legend_key_display() {
        let key = LegendKey::new(Language::Eng, Granularity::SectionL0);
        assert_eq!(key.to_string(), "ENG Section (L0)");
    }

    #[test]
    fn test_order_is_subsequence_of_vocabulary() {
        // Insert in scrambled order; output must follow LEGEND_ORDER
        let keys = [
            LegendKey::new(Language::Zho, Granularity::Paragraph),
            LegendKey::new(Language::Eng, Granularity::Document),
            LegendKey::new(Language::Esp, Granularity::SectionL1),
        ];

        let mut map = HashMap::new();
        for key in keys {
            map.insert(key, trace_for(key));
        }

        let ordered = order_traces(map);
        let got: Vec<LegendKey> = ordered.iter().map(|t| t.key).collect();
        assert_eq!(
            got,
            vec![
                LegendKey::new(Language::Eng, Granularity::Document),
                LegendKey::new(Language::Esp, Granularity::SectionL1),
                LegendKey::new(Language::Zho, Granularity::Paragraph),
            ]
        );
    }

    #[test]
    fn test_absent_keys_skipped_without_placeholder() {
        let key = LegendKey::new(Language::Esp, Granularity::Paragraph);
        let mut map = HashMap::new();
        map.insert(key, trace_for(key));

        let ordered = order_traces(map);
        assert_eq!(ordered.len(), 1);
        assert_eq!(ordered[0].key, key);
    }

    #[test]
    fn test_full_vocabulary_round_trip() {
        let mut map = HashMap::new();
        for key in LEGEND_ORDER {
            map.insert(key, trace_for(key));
        }

        let ordered = order_traces(map);
        let got: Vec<LegendKey> = ordered.iter().map(|t| t.key).collect();
        assert_eq!(got, LEGEND_ORDER.to_vec());
    }
}
