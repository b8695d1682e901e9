//! Prompt templating for TRIZ extraction
//!
//! One fixed prompt: the model is asked for contradictions and suggested
//! principles as a strict JSON array so the reply can be parsed directly.

/// The extraction prompt. `{patent_text}` is replaced with the targeted
/// patent sections.
pub const TRIZ_PROMPT_TEMPLATE: &str = r#"You are a seasoned expert in TRIZ analysis. Analyze the following patent text to identify contradictions where improving one parameter results in the deterioration of another, and then suggest appropriate TRIZ inventive principles for each contradiction. There may be multiple contradictions and each may have several suggested principles. Return the answer strictly in JSON format with the following schema:

[
  {
    "contradiction": {
         "improving_parameter": "text",
         "worsening_parameter": "text"
    },
    "suggested_principles": ["Principle1", "Principle2", ...]
  },
  ...
]

Patent text:
{patent_text}
"#;

/// Build the extraction prompt for the given patent text
pub fn build_prompt(patent_text: &str) -> String {
    TRIZ_PROMPT_TEMPLATE.replace("{patent_text}", patent_text)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_prompt_substitution() {
        let prompt = build_prompt("ABSTRACT:\nA device.");
        assert!(prompt.contains("ABSTRACT:\nA device."));
        assert!(!prompt.contains("{patent_text}"));
    }

    #[test]
    fn test_prompt_keeps_schema() {
        let prompt = build_prompt("text");
        assert!(prompt.contains("improving_parameter"));
        assert!(prompt.contains("worsening_parameter"));
        assert!(prompt.contains("suggested_principles"));
    }
}
