//! TRIZ reference data handlers

use axum::{
    extract::{Query, State},
    Json,
};
use serde::{Deserialize, Serialize};

use crate::AppState;
use trizhub_common::{
    errors::{AppError, Result},
    triz::{MatrixCell, Parameter, Principle},
};

/// Get all 40 inventive principles, ordered by id
pub async fn principles(State(state): State<AppState>) -> Json<Vec<Principle>> {
    Json(state.repo.reference().principles().to_vec())
}

/// Get all 39 engineering parameters, ordered by id
pub async fn parameters(State(state): State<AppState>) -> Json<Vec<Parameter>> {
    Json(state.repo.reference().parameters().to_vec())
}

/// Get all populated contradiction-matrix cells
pub async fn matrix(State(state): State<AppState>) -> Json<Vec<MatrixCell>> {
    Json(state.repo.reference().matrix_cells())
}

/// Query parameters for the matrix lookup
#[derive(Debug, Deserialize)]
pub struct MatrixLookupParams {
    pub improving: Option<u8>,
    pub worsening: Option<u8>,
}

/// Principles suggested for one parameter pair
#[derive(Serialize)]
pub struct MatrixLookupResponse {
    pub improving: Parameter,
    pub worsening: Parameter,
    pub principles: Vec<Principle>,
}

/// Look up the matrix cell for an (improving, worsening) pair
pub async fn matrix_lookup(
    State(state): State<AppState>,
    Query(params): Query<MatrixLookupParams>,
) -> Result<Json<MatrixLookupResponse>> {
    let improving = params.improving.ok_or_else(|| AppError::MissingField {
        field: "improving".to_string(),
    })?;
    let worsening = params.worsening.ok_or_else(|| AppError::MissingField {
        field: "worsening".to_string(),
    })?;

    let reference = state.repo.reference();

    let cell_miss = || AppError::MatrixCellNotFound {
        improving,
        worsening,
    };

    let improving_param = *reference.parameter(improving).ok_or_else(cell_miss)?;
    let worsening_param = *reference.parameter(worsening).ok_or_else(cell_miss)?;

    let principle_ids = reference
        .lookup(improving, worsening)
        .ok_or_else(cell_miss)?;

    let principles = principle_ids
        .iter()
        .filter_map(|&id| reference.principle(id).copied())
        .collect();

    Ok(Json(MatrixLookupResponse {
        improving: improving_param,
        worsening: worsening_param,
        principles,
    }))
}
