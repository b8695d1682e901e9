//! Parsing of LLM extraction replies
//!
//! The model is asked for strict JSON, but replies arrive wrapped in
//! markdown fences or prose often enough that the parser strips those
//! before deserializing. A reply that still fails to parse yields `None`;
//! the caller falls back to an empty extraction rather than failing the
//! request.

use serde::Deserialize;

/// One contradiction as the model reports it
#[derive(Debug, Clone, Deserialize, PartialEq, Eq)]
pub struct RawContradiction {
    pub contradiction: RawContradictionPair,

    #[serde(default)]
    pub suggested_principles: Vec<String>,
}

#[derive(Debug, Clone, Deserialize, PartialEq, Eq)]
pub struct RawContradictionPair {
    pub improving_parameter: String,
    pub worsening_parameter: String,
}

/// Strip a single markdown code fence, with or without a language tag
fn strip_fences(reply: &str) -> &str {
    let trimmed = reply.trim();
    let Some(rest) = trimmed.strip_prefix("```") else {
        return trimmed;
    };
    // Drop the fence line ("```json" or bare "```")
    let rest = rest.split_once('\n').map(|(_, body)| body).unwrap_or(rest);
    rest.strip_suffix("```").unwrap_or(rest).trim()
}

/// Parse the model reply into raw contradictions.
///
/// Returns `None` when no JSON array can be recovered from the reply.
pub fn parse_reply(reply: &str) -> Option<Vec<RawContradiction>> {
    let body = strip_fences(reply);

    if let Ok(parsed) = serde_json::from_str(body) {
        return Some(parsed);
    }

    // The array may be embedded in surrounding prose
    let start = body.find('[')?;
    let end = body.rfind(']')?;
    if end <= start {
        return None;
    }

    serde_json::from_str(&body[start..=end]).ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    const VALID: &str = r#"[
      {
        "contradiction": {
          "improving_parameter": "Speed",
          "worsening_parameter": "Force"
        },
        "suggested_principles": ["Dynamics", "Parameter changes"]
      }
    ]"#;

    #[test]
    fn test_parse_valid_reply() {
        let parsed = parse_reply(VALID).unwrap();
        assert_eq!(parsed.len(), 1);
        assert_eq!(parsed[0].contradiction.improving_parameter, "Speed");
        assert_eq!(parsed[0].suggested_principles.len(), 2);
    }

    #[test]
    fn test_parse_fenced_reply() {
        let fenced = format!("```json\n{}\n```", VALID);
        let parsed = parse_reply(&fenced).unwrap();
        assert_eq!(parsed.len(), 1);
    }

    #[test]
    fn test_parse_reply_with_prose() {
        let chatty = format!("Here is the analysis you asked for:\n{}\nLet me know!", VALID);
        let parsed = parse_reply(&chatty).unwrap();
        assert_eq!(parsed.len(), 1);
    }

    #[test]
    fn test_parse_empty_array() {
        let parsed = parse_reply("[]").unwrap();
        assert!(parsed.is_empty());
    }

    #[test]
    fn test_parse_garbage_is_none() {
        assert!(parse_reply("I could not find any contradictions.").is_none());
        assert!(parse_reply("").is_none());
        assert!(parse_reply("[{\"contradiction\": }]").is_none());
    }

    #[test]
    fn test_missing_principles_defaults_empty() {
        let reply = r#"[{"contradiction": {"improving_parameter": "a", "worsening_parameter": "b"}}]"#;
        let parsed = parse_reply(reply).unwrap();
        assert!(parsed[0].suggested_principles.is_empty());
    }
}
