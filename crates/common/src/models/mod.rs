//! Domain models for TrizHub
//!
//! Plain records for patents, analyses, and citations. These are the
//! in-memory system of record; there is no ORM layer behind them.

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use uuid::Uuid;

/// Lifecycle status of a patent record
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PatentStatus {
    Pending,
    Analyzed,
    Reviewed,
}

impl std::str::FromStr for PatentStatus {
    type Err = crate::errors::AppError;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s {
            "pending" => Ok(PatentStatus::Pending),
            "analyzed" => Ok(PatentStatus::Analyzed),
            "reviewed" => Ok(PatentStatus::Reviewed),
            other => Err(crate::errors::AppError::InvalidFormat {
                message: format!("unknown patent status: {}", other),
            }),
        }
    }
}

/// Review status of an analysis
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AnalysisStatus {
    New,
    Pending,
    Approved,
}

/// A patent record
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Patent {
    pub id: Uuid,

    pub patent_number: String,

    pub title: String,

    #[serde(rename = "abstract")]
    pub abstract_text: String,

    pub filing_date: Option<NaiveDate>,

    pub publication_date: Option<NaiveDate>,

    pub upload_date: DateTime<Utc>,

    pub inventors: Vec<String>,

    pub assignee: String,

    /// URL of the stored patent document
    pub pdf_file: Option<String>,

    /// Original filename of the uploaded document
    pub pdf_file_name: Option<String>,

    /// Extracted plain text, the input to TRIZ analysis
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub raw_text: Option<String>,

    pub is_prior_art: bool,

    pub is_competitor: bool,

    pub status: PatentStatus,
}

impl fmt::Display for Patent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} - {}", self.patent_number, self.title)
    }
}

/// A parameter reference as produced by extraction: the raw label plus the
/// resolved engineering-parameter id when one matched
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ParameterRef {
    pub label: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<u8>,
}

impl ParameterRef {
    pub fn unresolved(label: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            id: None,
        }
    }

    pub fn resolved(label: impl Into<String>, id: u8) -> Self {
        Self {
            label: label.into(),
            id: Some(id),
        }
    }
}

/// A principle reference: raw label plus resolved principle id
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PrincipleRef {
    pub label: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<u8>,
}

/// One extracted contradiction: an improving parameter traded against a
/// worsening one, with the principles the LLM suggested and, when both
/// parameters resolved, the classical matrix's suggestions for the pair
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Contradiction {
    pub improving: ParameterRef,

    pub worsening: ParameterRef,

    pub principles: Vec<PrincipleRef>,

    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub matrix_principles: Vec<u8>,
}

/// The structured payload of an analysis
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ExtractedData {
    #[serde(default)]
    pub triz_contradictions: Vec<Contradiction>,

    #[serde(default)]
    pub key_problems: Vec<String>,

    #[serde(default)]
    pub innovative_solutions: Vec<String>,
}

/// Reviewer feedback on an analysis
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UserFeedback {
    /// Accuracy rating, 0.0 - 5.0
    pub accuracy: f32,

    /// Completeness rating, 0.0 - 5.0
    pub completeness: f32,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub suggestions: Option<String>,
}

/// A TRIZ analysis of one patent
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PatentAnalysis {
    pub id: Uuid,

    pub patent_id: Uuid,

    pub analysis_date: DateTime<Utc>,

    pub extracted_data: ExtractedData,

    pub feedback_date: Option<DateTime<Utc>>,

    pub user_feedback: Option<UserFeedback>,

    pub status: AnalysisStatus,
}

/// A citation made by one patent to another
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Citation {
    pub id: Uuid,

    pub citing_patent_id: Uuid,

    pub cited_patent_number: String,

    /// Set when the cited patent is also in the store
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub cited_patent_id: Option<Uuid>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub citation_context: Option<String>,

    pub citation_date: Option<NaiveDate>,
}

/// Partial update applied to a patent record
#[derive(Debug, Clone, Default, Deserialize)]
pub struct PatentUpdate {
    pub patent_number: Option<String>,
    pub title: Option<String>,
    #[serde(rename = "abstract")]
    pub abstract_text: Option<String>,
    pub filing_date: Option<NaiveDate>,
    pub publication_date: Option<NaiveDate>,
    pub inventors: Option<Vec<String>>,
    pub assignee: Option<String>,
    pub pdf_file: Option<String>,
    pub pdf_file_name: Option<String>,
    pub raw_text: Option<String>,
    pub is_prior_art: Option<bool>,
    pub is_competitor: Option<bool>,
    pub status: Option<PatentStatus>,
}

/// Partial update applied to an analysis record
#[derive(Debug, Clone, Default, Deserialize)]
pub struct AnalysisUpdate {
    pub status: Option<AnalysisStatus>,
    pub extracted_data: Option<ExtractedData>,
    pub user_feedback: Option<UserFeedback>,
}
