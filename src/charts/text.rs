//! Hover-text formatting
//!
//! Dense-script text (anything containing CJK Unified Ideographs) is
//! truncated to 40 characters and then broken into 15-character lines;
//! Latin-script text is truncated to 80 characters with no line breaking.
//! This is the only place truncation or line breaking happens.

/// Truncation limit for dense-script text
const DENSE_LIMIT: usize = 40;

/// Truncation limit for Latin-script text
const LATIN_LIMIT: usize = 80;

/// Target line length for dense-script line breaking
const LINE_TARGET: usize = 15;

/// Single-character ellipsis appended when truncation occurred
const ELLIPSIS: char = '…';

/// Line-break marker understood by the hover renderer
const LINE_BREAK: &str = "<br>";

/// Format one free-text hover field
///
/// Empty input is returned unchanged.
pub fn format_hover_text(text: &str) -> String {
    if text.is_empty() {
        return String::new();
    }

    if text.chars().any(is_cjk) {
        let truncated = truncate_chars(text, DENSE_LIMIT);
        break_dense_lines(&truncated)
    } else {
        truncate_chars(text, LATIN_LIMIT)
    }
}

/// Character is in the CJK Unified Ideographs block
fn is_cjk(c: char) -> bool {
    ('\u{4E00}'..='\u{9FFF}').contains(&c)
}

/// Keep the first `limit` characters, appending an ellipsis if anything was cut
fn truncate_chars(text: &str, limit: usize) -> String {
    let mut chars = text.chars();
    let head: String = chars.by_ref().take(limit).collect();
    if chars.next().is_some() {
        let mut out = head;
        out.push(ELLIPSIS);
        out
    } else {
        head
    }
}

/// Insert a line break every `LINE_TARGET` characters
///
/// The break is deferred while the current and next character are both Latin
/// letters, so an embedded Latin word inside dense-script text is never split.
/// No break is ever inserted after the final character.
fn break_dense_lines(text: &str) -> String {
    let chars: Vec<char> = text.chars().collect();
    let mut out = String::with_capacity(text.len() + LINE_BREAK.len() * 4);
    let mut since_break = 0usize;

    for (i, &c) in chars.iter().enumerate() {
        out.push(c);
        since_break += 1;

        if since_break >= LINE_TARGET {
            match chars.get(i + 1) {
                None => {}
                Some(&next) if c.is_ascii_alphabetic() && next.is_ascii_alphabetic() => {}
                Some(_) => {
                    out.push_str(LINE_BREAK);
                    since_break = 0;
                }
            }
        }
    }

    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_unchanged() {
        assert_eq!(format_hover_text(""), "");
    }

    #[test]
    fn test_short_latin_unchanged() {
        assert_eq!(format_hover_text("A short title"), "A short title");
    }

    #[test]
    fn test_latin_truncated_to_80_plus_ellipsis() {
        let input = "a".repeat(100);
        let out = format_hover_text(&input);
        assert_eq!(out.chars().count(), 81);
        assert!(out.ends_with('…'));
        assert!(!out.contains("<br>"));
    }

    #[test]
    fn test_latin_at_limit_not_truncated() {
        let input = "b".repeat(80);
        assert_eq!(format_hover_text(&input), input);
    }

    #[test]
    fn test_dense_truncated_to_40_plus_ellipsis() {
        let input = "漢".repeat(60);
        let out = format_hover_text(&input);
        let content: String = out.replace("<br>", "");
        assert_eq!(content.chars().count(), 41);
        assert!(content.ends_with('…'));
    }

    #[test]
    fn test_dense_45_chars_breaks_exactly_twice() {
        let input = "漢".repeat(45);
        let out = format_hover_text(&input);
        assert_eq!(out.matches("<br>").count(), 2);

        // 15 chars per full line, remainder on the last
        let lines: Vec<&str> = out.split("<br>").collect();
        assert_eq!(lines[0].chars().count(), 15);
        assert_eq!(lines[1].chars().count(), 15);
        assert_eq!(lines[2].chars().count(), 11); // 10 chars + ellipsis
    }

    #[test]
    fn test_no_break_after_final_character() {
        let input = "漢".repeat(15);
        let out = format_hover_text(&input);
        assert!(!out.contains("<br>"));
    }

    #[test]
    fn test_break_never_splits_adjacent_latin_letters() {
        // Latin word straddling the 15-character boundary
        let input = format!("{}{}{}", "漢".repeat(13), "GPT", "漢".repeat(20));
        let out = format_hover_text(&input);
        for window in ["GP", "PT"] {
            let split = format!(
                "{}{}{}",
                &window[..1],
                "<br>",
                &window[1..]
            );
            assert!(!out.contains(&split), "split Latin pair: {}", split);
        }
        assert!(out.contains("GPT"));
    }

    #[test]
    fn test_deferred_break_resumes_after_latin_run() {
        let input = format!("{}{}{}", "漢".repeat(14), "ai", "漢".repeat(10));
        let out = format_hover_text(&input);
        // Break deferred past the Latin pair, inserted after it
        assert!(out.contains("ai<br>"));
    }
}
