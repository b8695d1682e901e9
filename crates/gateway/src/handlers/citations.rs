//! Citation handlers

use axum::{
    extract::{Path, State},
    Json,
};
use serde::Serialize;
use uuid::Uuid;

use crate::AppState;
use trizhub_common::{
    errors::{AppError, Result},
    models::Citation,
};

/// Citations made by one patent
#[derive(Serialize)]
pub struct CitationListResponse {
    pub patent_id: Uuid,
    pub citations: Vec<Citation>,
    pub count: usize,
}

/// List citations for a patent
pub async fn citations_for_patent(
    State(state): State<AppState>,
    Path(patent_id): Path<Uuid>,
) -> Result<Json<CitationListResponse>> {
    state
        .repo
        .find_patent_by_id(patent_id)
        .await?
        .ok_or_else(|| AppError::PatentNotFound {
            id: patent_id.to_string(),
        })?;

    let citations = state.repo.citations_for_patent(patent_id).await?;
    let count = citations.len();

    Ok(Json(CitationListResponse {
        patent_id,
        citations,
        count,
    }))
}
