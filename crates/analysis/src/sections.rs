//! Section targeting for patent text
//!
//! Pulls the sections that matter for contradiction analysis (abstract,
//! summary, the background's problem statement, and the opening of the
//! detailed description) and caps their size so the prompt stays well
//! within token limits.

use regex_lite::Regex;

/// Limit each section to avoid token overflow
const MAX_SECTION_CHARS: usize = 3000;

/// Overall cap on the targeted content
const MAX_TOTAL_CHARS: usize = 8000;

/// When no sections are recognized, send a truncated slice of the raw text
const FALLBACK_CHARS: usize = 4000;

fn section_regex(pattern: &str) -> Regex {
    Regex::new(pattern).expect("valid section pattern")
}

/// Truncate on a character boundary
fn truncate_chars(text: &str, max_chars: usize) -> &str {
    match text.char_indices().nth(max_chars) {
        Some((index, _)) => &text[..index],
        None => text,
    }
}

fn capture_section(text: &str, pattern: &str) -> Option<String> {
    section_regex(pattern)
        .captures(text)
        .and_then(|caps| caps.get(1))
        .map(|m| m.as_str().trim().to_string())
        .filter(|s| !s.is_empty())
}

/// Extract the most important sections of a patent for TRIZ analysis.
///
/// Sections are labeled and joined in priority order; unrecognized layouts
/// fall back to the head of the raw text.
pub fn target_sections(text: &str) -> String {
    let mut sections = Vec::new();

    // Abstract (always include)
    if let Some(abstract_text) = capture_section(
        text,
        r"(?is)\babstract\s*:?\s*(.+?)\n\s*(?:background|summary|claims)\b",
    ) {
        sections.push(format!(
            "ABSTRACT:\n{}",
            truncate_chars(&abstract_text, MAX_SECTION_CHARS)
        ));
    }

    // Summary / Summary of Invention (high priority)
    if let Some(summary) = capture_section(
        text,
        r"(?is)\bsummary(?: of (?:the )?invention)?\s*:?\s*(.+?)(?:\n\s*(?:claims|detailed description|conclusion)\b|$)",
    ) {
        sections.push(format!(
            "SUMMARY:\n{}",
            truncate_chars(&summary, MAX_SECTION_CHARS)
        ));
    }

    // Background, preferring its problem statement
    if let Some(background) = capture_section(
        text,
        r"(?is)\bbackground(?: of (?:the )?invention)?\s*:?\s*(.+?)(?:\n\s*(?:summary|detailed description)\b|$)",
    ) {
        let problem = section_regex(r"(?i)\b(?:problem|challenge|limitation|drawback|issue)\b[^\n]*")
            .find(&background)
            .map(|m| m.as_str().trim().to_string());

        match problem {
            Some(problem) => sections.push(format!(
                "PROBLEM STATEMENT:\n{}",
                truncate_chars(&problem, MAX_SECTION_CHARS)
            )),
            None => sections.push(format!(
                "BACKGROUND:\n{}",
                truncate_chars(&background, MAX_SECTION_CHARS)
            )),
        }
    }

    // First paragraph of the detailed description, which usually carries
    // the key implementation
    if let Some(detailed) = capture_section(
        text,
        r"(?is)\bdetailed description(?: of (?:the )?invention)?\s*:?\s*(.+?)(?:\n\s*(?:claims|conclusion)\b|$)",
    ) {
        if let Some(first_paragraph) = detailed.split("\n\n").next() {
            let first_paragraph = first_paragraph.trim();
            if !first_paragraph.is_empty() {
                sections.push(format!(
                    "KEY IMPLEMENTATION:\n{}",
                    truncate_chars(first_paragraph, MAX_SECTION_CHARS)
                ));
            }
        }
    }

    if sections.is_empty() {
        return truncate_chars(text, FALLBACK_CHARS).trim().to_string();
    }

    let joined = sections.join("\n\n");
    truncate_chars(&joined, MAX_TOTAL_CHARS).trim().to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    const SAMPLE: &str = "Abstract: A smart medical device for monitoring patient vital signs with improved accuracy and reduced power consumption.\n\n\
        Background: Patient monitoring devices require continuous operation for extended periods, leading to high power consumption and reduced battery life. Current solutions often sacrifice monitoring accuracy for power efficiency.\n\n\
        Summary of Invention: The invention provides a smart medical device that implements dynamic power management based on patient condition.\n\n\
        Detailed Description: The device comprises a sensor array, a microcontroller, and a wireless communication module.\n\nFurther embodiments follow.";

    #[test]
    fn test_targets_all_sections() {
        let targeted = target_sections(SAMPLE);
        assert!(targeted.contains("ABSTRACT:"));
        assert!(targeted.contains("SUMMARY:"));
        assert!(targeted.contains("KEY IMPLEMENTATION:"));
        assert!(targeted.contains("sensor array"));
    }

    #[test]
    fn test_background_without_keyword_kept_whole() {
        let targeted = target_sections(SAMPLE);
        assert!(targeted.contains("BACKGROUND:"));
        assert!(targeted.contains("sacrifice monitoring accuracy"));
    }

    #[test]
    fn test_background_prefers_problem_statement() {
        let text = "Abstract: A tool.\n\n\
            Background: Many designs exist. The key challenge is balancing dexterity against diameter.\nMore history follows.\n\n\
            Summary: A better tool.";
        let targeted = target_sections(text);
        assert!(targeted.contains("PROBLEM STATEMENT:"));
        assert!(targeted.contains("challenge is balancing dexterity"));
        // Only the statement line is kept, not the section's history
        assert!(!targeted.contains("More history follows"));
    }

    #[test]
    fn test_fallback_on_unstructured_text() {
        let text = "An entirely freeform description of an invention \
                    with no recognizable section headers at all.";
        let targeted = target_sections(text);
        assert_eq!(targeted, text);
    }

    #[test]
    fn test_fallback_truncates() {
        let text = "x".repeat(10_000);
        let targeted = target_sections(&text);
        assert_eq!(targeted.len(), FALLBACK_CHARS);
    }

    #[test]
    fn test_section_cap() {
        let long_abstract = format!(
            "Abstract: {}\nClaims: none",
            "very long abstract text ".repeat(500)
        );
        let targeted = target_sections(&long_abstract);
        assert!(targeted.len() <= MAX_SECTION_CHARS + "ABSTRACT:\n".len());
    }

    #[test]
    fn test_truncate_chars_respects_boundaries() {
        let text = "héllo wörld";
        // Does not panic on multi-byte boundaries
        assert_eq!(truncate_chars(text, 2), "hé");
        assert_eq!(truncate_chars(text, 100), text);
    }
}
