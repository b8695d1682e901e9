//! Analysis handlers: CRUD plus the analyze-patent action

use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};
use serde::Deserialize;
use uuid::Uuid;

use crate::AppState;
use trizhub_common::{
    errors::{AppError, Result},
    models::{AnalysisUpdate, PatentAnalysis},
};

/// Request to analyze a patent.
///
/// Patents are addressed by id; `patentFile` is the legacy addressing by
/// uploaded filename.
#[derive(Debug, Deserialize)]
pub struct AnalyzePatentRequest {
    pub patent_id: Option<Uuid>,

    #[serde(rename = "patentFile")]
    pub patent_file: Option<String>,
}

/// Run TRIZ analysis for a patent and store the result
pub async fn analyze_patent(
    State(state): State<AppState>,
    Json(request): Json<AnalyzePatentRequest>,
) -> Result<(StatusCode, Json<PatentAnalysis>)> {
    let patent = match (request.patent_id, request.patent_file.as_deref()) {
        (Some(id), _) => {
            state
                .repo
                .find_patent_by_id(id)
                .await?
                .ok_or_else(|| AppError::PatentNotFound { id: id.to_string() })?
        }
        (None, Some(filename)) => state
            .repo
            .find_patent_by_filename(filename)
            .await?
            .ok_or_else(|| AppError::PatentNotFound {
                id: filename.to_string(),
            })?,
        (None, None) => {
            return Err(AppError::MissingField {
                field: "patent_id".to_string(),
            })
        }
    };

    let analysis = state
        .analyzer
        .analyze(&patent, state.repo.reference())
        .await?;
    let analysis = state.repo.create_analysis(analysis).await?;
    state.repo.mark_patent_analyzed(patent.id).await?;

    Ok((StatusCode::CREATED, Json(analysis)))
}

/// List all analyses
pub async fn list_analyses(State(state): State<AppState>) -> Result<Json<Vec<PatentAnalysis>>> {
    let analyses = state.repo.list_analyses().await?;
    Ok(Json(analyses))
}

/// List analyses for one patent
pub async fn analyses_for_patent(
    State(state): State<AppState>,
    Path(patent_id): Path<Uuid>,
) -> Result<Json<Vec<PatentAnalysis>>> {
    // Verify the patent exists so an unknown id is a 404, not an empty list
    state
        .repo
        .find_patent_by_id(patent_id)
        .await?
        .ok_or_else(|| AppError::PatentNotFound {
            id: patent_id.to_string(),
        })?;

    let analyses = state.repo.analyses_for_patent(patent_id).await?;
    Ok(Json(analyses))
}

/// Get an analysis by ID
pub async fn get_analysis(
    State(state): State<AppState>,
    Path(analysis_id): Path<Uuid>,
) -> Result<Json<PatentAnalysis>> {
    let analysis = state
        .repo
        .find_analysis_by_id(analysis_id)
        .await?
        .ok_or_else(|| AppError::AnalysisNotFound {
            id: analysis_id.to_string(),
        })?;

    Ok(Json(analysis))
}

/// Update an analysis: status, extraction payload, or reviewer feedback
pub async fn update_analysis(
    State(state): State<AppState>,
    Path(analysis_id): Path<Uuid>,
    Json(update): Json<AnalysisUpdate>,
) -> Result<Json<PatentAnalysis>> {
    let analysis = state.repo.update_analysis(analysis_id, update).await?;

    tracing::info!(analysis_id = %analysis_id, "Analysis updated");

    Ok(Json(analysis))
}

/// Delete an analysis
pub async fn delete_analysis(
    State(state): State<AppState>,
    Path(analysis_id): Path<Uuid>,
) -> Result<StatusCode> {
    if !state.repo.delete_analysis(analysis_id).await? {
        return Err(AppError::AnalysisNotFound {
            id: analysis_id.to_string(),
        });
    }

    tracing::info!(analysis_id = %analysis_id, "Analysis deleted");

    Ok(StatusCode::NO_CONTENT)
}

/// Approve an analysis
pub async fn approve_analysis(
    State(state): State<AppState>,
    Path(analysis_id): Path<Uuid>,
) -> Result<Json<PatentAnalysis>> {
    let analysis = state.repo.approve_analysis(analysis_id).await?;

    tracing::info!(analysis_id = %analysis_id, "Analysis approved");

    Ok(Json(analysis))
}
