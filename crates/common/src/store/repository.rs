//! Repository pattern for store access
//!
//! Provides a clean interface for all data access operations
//! with proper error handling, mirroring the service functions the
//! REST handlers delegate to.

use crate::errors::{AppError, Result};
use crate::models::{
    AnalysisStatus, AnalysisUpdate, Citation, Patent, PatentAnalysis, PatentStatus, PatentUpdate,
};
use crate::store::Store;
use chrono::Utc;
use serde::Serialize;
use std::str::FromStr;
use std::sync::Arc;
use uuid::Uuid;

/// Sort order for patent listings
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SortOrder {
    #[default]
    Newest,
    Oldest,
    /// Keep store order; the ranking is whatever produced the list
    Relevance,
}

impl FromStr for SortOrder {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "newest" => Ok(SortOrder::Newest),
            "oldest" => Ok(SortOrder::Oldest),
            "relevance" => Ok(SortOrder::Relevance),
            other => Err(AppError::InvalidFormat {
                message: format!("unknown sort order: {}", other),
            }),
        }
    }
}

/// Filter and sort options for patent listings
#[derive(Debug, Clone, Default)]
pub struct PatentQuery {
    /// Case-insensitive term matched against title, abstract, inventors,
    /// and assignee
    pub search: Option<String>,

    /// Keep only patents in one of these statuses (empty keeps all)
    pub statuses: Vec<PatentStatus>,

    pub sort: SortOrder,
}

/// Record counts, reported by the readiness probe
#[derive(Debug, Clone, Copy, Serialize)]
pub struct StoreStats {
    pub patents: usize,
    pub analyses: usize,
    pub citations: usize,
}

/// Repository for data access operations
#[derive(Clone)]
pub struct Repository {
    store: Arc<Store>,
}

impl Repository {
    /// Create a new repository over the given store
    pub fn new(store: Arc<Store>) -> Self {
        Self { store }
    }

    /// The TRIZ reference data
    pub fn reference(&self) -> &crate::triz::TrizReference {
        self.store.reference()
    }

    // ========================================================================
    // Health Check
    // ========================================================================

    /// Check store accessibility and report record counts
    pub async fn stats(&self) -> StoreStats {
        let inner = self.store.inner.read().await;
        StoreStats {
            patents: inner.patents.len(),
            analyses: inner.analyses.len(),
            citations: inner.citations.len(),
        }
    }

    // ========================================================================
    // Patent Operations
    // ========================================================================

    /// List patents with filtering and sorting
    pub async fn list_patents(&self, query: &PatentQuery) -> Result<Vec<Patent>> {
        let inner = self.store.inner.read().await;

        let mut patents: Vec<Patent> = inner
            .patents
            .iter()
            .filter(|patent| {
                if let Some(ref term) = query.search {
                    let term = term.to_lowercase();
                    let matches = patent.title.to_lowercase().contains(&term)
                        || patent.abstract_text.to_lowercase().contains(&term)
                        || patent.assignee.to_lowercase().contains(&term)
                        || patent
                            .inventors
                            .iter()
                            .any(|inv| inv.to_lowercase().contains(&term));
                    if !matches {
                        return false;
                    }
                }
                query.statuses.is_empty() || query.statuses.contains(&patent.status)
            })
            .cloned()
            .collect();

        match query.sort {
            SortOrder::Newest => patents.sort_by(|a, b| b.upload_date.cmp(&a.upload_date)),
            SortOrder::Oldest => patents.sort_by(|a, b| a.upload_date.cmp(&b.upload_date)),
            SortOrder::Relevance => {}
        }

        Ok(patents)
    }

    /// Find patent by ID
    pub async fn find_patent_by_id(&self, id: Uuid) -> Result<Option<Patent>> {
        let inner = self.store.inner.read().await;
        Ok(inner.patents.iter().find(|p| p.id == id).cloned())
    }

    /// Find patent by its uploaded filename (legacy analyze addressing)
    pub async fn find_patent_by_filename(&self, filename: &str) -> Result<Option<Patent>> {
        let inner = self.store.inner.read().await;
        Ok(inner
            .patents
            .iter()
            .find(|p| p.pdf_file_name.as_deref() == Some(filename))
            .cloned())
    }

    /// Create a new patent. Patent numbers must be unique.
    pub async fn create_patent(&self, patent: Patent) -> Result<Patent> {
        let mut inner = self.store.inner.write().await;

        if inner
            .patents
            .iter()
            .any(|p| p.patent_number == patent.patent_number)
        {
            return Err(AppError::DuplicatePatent {
                patent_number: patent.patent_number,
            });
        }

        inner.patents.push(patent.clone());
        Ok(patent)
    }

    /// Apply a partial update to a patent
    pub async fn update_patent(&self, id: Uuid, update: PatentUpdate) -> Result<Patent> {
        let mut inner = self.store.inner.write().await;

        let patent = inner
            .patents
            .iter_mut()
            .find(|p| p.id == id)
            .ok_or_else(|| AppError::PatentNotFound { id: id.to_string() })?;

        if let Some(patent_number) = update.patent_number {
            patent.patent_number = patent_number;
        }
        if let Some(title) = update.title {
            patent.title = title;
        }
        if let Some(abstract_text) = update.abstract_text {
            patent.abstract_text = abstract_text;
        }
        if let Some(filing_date) = update.filing_date {
            patent.filing_date = Some(filing_date);
        }
        if let Some(publication_date) = update.publication_date {
            patent.publication_date = Some(publication_date);
        }
        if let Some(inventors) = update.inventors {
            patent.inventors = inventors;
        }
        if let Some(assignee) = update.assignee {
            patent.assignee = assignee;
        }
        if let Some(pdf_file) = update.pdf_file {
            patent.pdf_file = Some(pdf_file);
        }
        if let Some(pdf_file_name) = update.pdf_file_name {
            patent.pdf_file_name = Some(pdf_file_name);
        }
        if let Some(raw_text) = update.raw_text {
            patent.raw_text = Some(raw_text);
        }
        if let Some(is_prior_art) = update.is_prior_art {
            patent.is_prior_art = is_prior_art;
        }
        if let Some(is_competitor) = update.is_competitor {
            patent.is_competitor = is_competitor;
        }
        if let Some(status) = update.status {
            patent.status = status;
        }

        Ok(patent.clone())
    }

    /// Mark a patent as analyzed
    pub async fn mark_patent_analyzed(&self, id: Uuid) -> Result<()> {
        let mut inner = self.store.inner.write().await;

        let patent = inner
            .patents
            .iter_mut()
            .find(|p| p.id == id)
            .ok_or_else(|| AppError::PatentNotFound { id: id.to_string() })?;

        patent.status = PatentStatus::Analyzed;
        Ok(())
    }

    /// Delete a patent and its analyses and citations
    pub async fn delete_patent(&self, id: Uuid) -> Result<bool> {
        let mut inner = self.store.inner.write().await;

        let before = inner.patents.len();
        inner.patents.retain(|p| p.id != id);
        let deleted = inner.patents.len() < before;

        if deleted {
            inner.analyses.retain(|a| a.patent_id != id);
            inner.citations.retain(|c| c.citing_patent_id != id);
        }

        Ok(deleted)
    }

    // ========================================================================
    // Analysis Operations
    // ========================================================================

    /// List all analyses
    pub async fn list_analyses(&self) -> Result<Vec<PatentAnalysis>> {
        let inner = self.store.inner.read().await;
        Ok(inner.analyses.clone())
    }

    /// List analyses for a patent
    pub async fn analyses_for_patent(&self, patent_id: Uuid) -> Result<Vec<PatentAnalysis>> {
        let inner = self.store.inner.read().await;
        Ok(inner
            .analyses
            .iter()
            .filter(|a| a.patent_id == patent_id)
            .cloned()
            .collect())
    }

    /// Find analysis by ID
    pub async fn find_analysis_by_id(&self, id: Uuid) -> Result<Option<PatentAnalysis>> {
        let inner = self.store.inner.read().await;
        Ok(inner.analyses.iter().find(|a| a.id == id).cloned())
    }

    /// Store a new analysis
    pub async fn create_analysis(&self, analysis: PatentAnalysis) -> Result<PatentAnalysis> {
        let mut inner = self.store.inner.write().await;
        inner.analyses.push(analysis.clone());
        Ok(analysis)
    }

    /// Apply a partial update to an analysis. Providing feedback stamps
    /// the feedback date.
    pub async fn update_analysis(&self, id: Uuid, update: AnalysisUpdate) -> Result<PatentAnalysis> {
        let mut inner = self.store.inner.write().await;

        let analysis = inner
            .analyses
            .iter_mut()
            .find(|a| a.id == id)
            .ok_or_else(|| AppError::AnalysisNotFound { id: id.to_string() })?;

        if let Some(status) = update.status {
            analysis.status = status;
        }
        if let Some(extracted_data) = update.extracted_data {
            analysis.extracted_data = extracted_data;
        }
        if let Some(user_feedback) = update.user_feedback {
            analysis.user_feedback = Some(user_feedback);
            analysis.feedback_date = Some(Utc::now());
        }

        Ok(analysis.clone())
    }

    /// Approve an analysis
    pub async fn approve_analysis(&self, id: Uuid) -> Result<PatentAnalysis> {
        let mut inner = self.store.inner.write().await;

        let analysis = inner
            .analyses
            .iter_mut()
            .find(|a| a.id == id)
            .ok_or_else(|| AppError::AnalysisNotFound { id: id.to_string() })?;

        analysis.status = AnalysisStatus::Approved;
        Ok(analysis.clone())
    }

    /// Delete an analysis
    pub async fn delete_analysis(&self, id: Uuid) -> Result<bool> {
        let mut inner = self.store.inner.write().await;
        let before = inner.analyses.len();
        inner.analyses.retain(|a| a.id != id);
        Ok(inner.analyses.len() < before)
    }

    // ========================================================================
    // Citation Operations
    // ========================================================================

    /// List citations made by a patent
    pub async fn citations_for_patent(&self, patent_id: Uuid) -> Result<Vec<Citation>> {
        let inner = self.store.inner.read().await;
        Ok(inner
            .citations
            .iter()
            .filter(|c| c.citing_patent_id == patent_id)
            .cloned()
            .collect())
    }
}
