//! Hover popup composition
//!
//! Builds the structured hover text for one point record. Pure function of
//! the record; every free-text field passes through the hover-text formatter
//! before composition, and coordinates render to exactly 3 decimal places.

use super::text::format_hover_text;
use crate::dataset::{PointRecord, Popup};

/// Compose the hover popup string for one record
pub fn compose(point: &PointRecord) -> String {
    let mut lines: Vec<String> = Vec::with_capacity(9);

    match &point.popup {
        Popup::Document { corpus_item, title } => {
            lines.push("<b>Document</b>".to_string());
            lines.push(format!("Corpus item: {}", corpus_item));
            lines.push(format!("Title: {}", format_hover_text(title)));
        }
        Popup::Section {
            corpus_item,
            title,
            section_id,
            section_title,
            excerpt,
        } => {
            lines.push("<b>Section</b>".to_string());
            lines.push(format!("Corpus item: {}", corpus_item));
            lines.push(format!("Title: {}", format_hover_text(title)));
            lines.push(format!("Section: {}", section_id));
            lines.push(format!("Section title: {}", format_hover_text(section_title)));
            lines.push(format!("Excerpt: {}", format_hover_text(excerpt)));
        }
        Popup::Paragraph {
            corpus_item,
            title,
            paragraph_id,
            section_title,
            excerpt,
        } => {
            lines.push("<b>Paragraph</b>".to_string());
            lines.push(format!("Corpus item: {}", corpus_item));
            lines.push(format!("Title: {}", format_hover_text(title)));
            lines.push(format!("Paragraph: {}", paragraph_id));
            lines.push(format!("Section title: {}", format_hover_text(section_title)));
            lines.push(format!("Excerpt: {}", format_hover_text(excerpt)));
        }
    }

    lines.push(format!("X: {:.3}", point.x));
    lines.push(format!("Y: {:.3}", point.y));
    if let Some(z) = point.z {
        lines.push(format!("Z: {:.3}", z));
    }

    lines.join("<br>")
}
