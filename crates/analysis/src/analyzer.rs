//! The analyzer service
//!
//! Orchestrates the pipeline from stored patent text to a stored analysis
//! record: target sections, build the prompt, call the model, parse and
//! resolve the reply.

use crate::{parse, prompt, resolve, sections};
use chrono::Utc;
use std::sync::Arc;
use std::time::Instant;
use trizhub_common::errors::{AppError, Result};
use trizhub_common::llm::ChatModel;
use trizhub_common::metrics;
use trizhub_common::models::{AnalysisStatus, ExtractedData, Patent, PatentAnalysis};
use trizhub_common::triz::TrizReference;
use uuid::Uuid;

/// Runs TRIZ contradiction analysis against a chat model
pub struct Analyzer {
    chat: Arc<dyn ChatModel>,
}

impl Analyzer {
    /// Create an analyzer over the given chat model
    pub fn new(chat: Arc<dyn ChatModel>) -> Self {
        Self { chat }
    }

    /// Analyze one patent and produce a `new`-status analysis record.
    ///
    /// The patent must carry stored text. An unparseable model reply is
    /// not an error: the analysis is stored with an empty extraction.
    pub async fn analyze(&self, patent: &Patent, reference: &TrizReference) -> Result<PatentAnalysis> {
        let start = Instant::now();

        let raw_text = patent
            .raw_text
            .as_deref()
            .filter(|text| !text.trim().is_empty())
            .ok_or_else(|| AppError::Validation {
                message: "Patent text not found".to_string(),
                field: Some("raw_text".to_string()),
            })?;

        let targeted = sections::target_sections(raw_text);
        let extraction_prompt = prompt::build_prompt(&targeted);

        let llm_start = Instant::now();
        let reply = self.chat.complete(&extraction_prompt).await;
        metrics::record_llm_call(
            llm_start.elapsed().as_secs_f64(),
            self.chat.model_name(),
            reply.is_ok(),
        );
        let reply = reply?;

        let (contradictions, outcome) = match parse::parse_reply(&reply) {
            Some(raw) => (resolve::resolve_contradictions(raw, reference), "parsed"),
            None => {
                tracing::warn!(
                    patent_id = %patent.id,
                    model = self.chat.model_name(),
                    reply_len = reply.len(),
                    "Could not parse LLM reply, storing empty extraction"
                );
                metrics::record_llm_parse_failure(self.chat.model_name());
                (Vec::new(), "parse_failed")
            }
        };

        let analysis = PatentAnalysis {
            id: Uuid::new_v4(),
            patent_id: patent.id,
            analysis_date: Utc::now(),
            extracted_data: ExtractedData {
                triz_contradictions: contradictions,
                key_problems: Vec::new(),
                innovative_solutions: Vec::new(),
            },
            feedback_date: None,
            user_feedback: None,
            status: AnalysisStatus::New,
        };

        let duration = start.elapsed().as_secs_f64();
        metrics::record_analysis(
            duration,
            analysis.extracted_data.triz_contradictions.len(),
            outcome,
        );

        tracing::info!(
            patent_id = %patent.id,
            analysis_id = %analysis.id,
            contradictions = analysis.extracted_data.triz_contradictions.len(),
            latency_ms = (duration * 1000.0) as u64,
            "Patent analyzed"
        );

        Ok(analysis)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use trizhub_common::llm::MockChat;
    use trizhub_common::models::PatentStatus;

    fn patent_with_text(text: Option<&str>) -> Patent {
        Patent {
            id: Uuid::new_v4(),
            patent_number: "US10999999B2".into(),
            title: "Test Patent".into(),
            abstract_text: String::new(),
            filing_date: None,
            publication_date: None,
            upload_date: Utc::now(),
            inventors: vec![],
            assignee: String::new(),
            pdf_file: None,
            pdf_file_name: None,
            raw_text: text.map(Into::into),
            is_prior_art: false,
            is_competitor: false,
            status: PatentStatus::Pending,
        }
    }

    #[tokio::test]
    async fn test_analyze_with_mock_model() {
        let analyzer = Analyzer::new(Arc::new(MockChat::new()));
        let reference = TrizReference::builtin();
        let patent = patent_with_text(Some("Abstract: A device.\nClaims: none"));

        let analysis = analyzer.analyze(&patent, &reference).await.unwrap();

        assert_eq!(analysis.patent_id, patent.id);
        assert_eq!(analysis.status, AnalysisStatus::New);
        let contradictions = &analysis.extracted_data.triz_contradictions;
        assert_eq!(contradictions.len(), 1);
        // The mock's labels resolve against the reference data
        assert_eq!(contradictions[0].improving.id, Some(9));
        assert_eq!(contradictions[0].principles[0].id, Some(15));
    }

    #[tokio::test]
    async fn test_analyze_requires_text() {
        let analyzer = Analyzer::new(Arc::new(MockChat::new()));
        let reference = TrizReference::builtin();

        for patent in [patent_with_text(None), patent_with_text(Some("   "))] {
            let err = analyzer.analyze(&patent, &reference).await.unwrap_err();
            assert!(matches!(err, AppError::Validation { .. }));
        }
    }

    #[tokio::test]
    async fn test_unparseable_reply_yields_empty_extraction() {
        let chat = MockChat::with_reply("Sorry, I cannot help with that.");
        let analyzer = Analyzer::new(Arc::new(chat));
        let reference = TrizReference::builtin();
        let patent = patent_with_text(Some("Abstract: A device.\nClaims: none"));

        let analysis = analyzer.analyze(&patent, &reference).await.unwrap();
        assert!(analysis.extracted_data.triz_contradictions.is_empty());
        assert_eq!(analysis.status, AnalysisStatus::New);
    }
}
