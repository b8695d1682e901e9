//! Patent management handlers

use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    response::Redirect,
    Json,
};
use chrono::{NaiveDate, Utc};
use serde::{Deserialize, Deserializer, Serialize};
use uuid::Uuid;
use validator::Validate;

use crate::AppState;
use trizhub_common::{
    errors::{AppError, Result},
    metrics,
    models::{Patent, PatentStatus, PatentUpdate},
    store::{PatentQuery, SortOrder},
};

/// Query parameters for the patent listing
#[derive(Debug, Default, Deserialize)]
pub struct ListPatentsParams {
    /// Term matched against title, abstract, inventors, and assignee
    pub search: Option<String>,

    /// Comma-separated status filter, e.g. `pending,analyzed`
    pub status: Option<String>,

    /// `newest` (default), `oldest`, or `relevance`
    pub sort: Option<String>,
}

/// Response for the patent listing
#[derive(Serialize)]
pub struct ListPatentsResponse {
    pub patents: Vec<Patent>,
    pub count: usize,
}

/// Request to create a new patent.
///
/// The document itself is direct URL storage: the client supplies the
/// stored file's URL, or raw text for records without a document.
#[derive(Debug, Deserialize, Validate)]
pub struct CreatePatentRequest {
    #[validate(length(min = 1, max = 50))]
    pub patent_number: String,

    #[validate(length(min = 1, max = 500))]
    pub title: String,

    #[serde(default, rename = "abstract")]
    pub abstract_text: Option<String>,

    pub filing_date: Option<NaiveDate>,

    pub publication_date: Option<NaiveDate>,

    /// Accepts a JSON list or a comma-separated string
    #[serde(default, deserialize_with = "deserialize_inventors")]
    pub inventors: Vec<String>,

    #[serde(default)]
    #[validate(length(max = 500))]
    pub assignee: Option<String>,

    /// URL to the patent document in storage
    pub pdf_file: Option<String>,

    /// Original filename of the uploaded document
    pub pdf_file_name: Option<String>,

    /// Extracted plain text, analyzable without a stored document
    pub raw_text: Option<String>,

    #[serde(default)]
    pub is_prior_art: bool,

    #[serde(default)]
    pub is_competitor: bool,
}

/// Inventors arrive either as a list or as one comma-separated string
fn deserialize_inventors<'de, D>(deserializer: D) -> std::result::Result<Vec<String>, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Raw {
        List(Vec<String>),
        Csv(String),
    }

    let inventors = match Option::<Raw>::deserialize(deserializer)? {
        Some(Raw::List(list)) => list,
        Some(Raw::Csv(csv)) => csv.split(',').map(str::to_string).collect(),
        None => Vec::new(),
    };

    Ok(inventors
        .into_iter()
        .map(|name| name.trim().to_string())
        .filter(|name| !name.is_empty())
        .collect())
}

fn parse_query(params: ListPatentsParams) -> Result<PatentQuery> {
    let statuses = match params.status.as_deref() {
        Some(list) => list
            .split(',')
            .map(str::trim)
            .filter(|s| !s.is_empty())
            .map(str::parse::<PatentStatus>)
            .collect::<Result<Vec<_>>>()?,
        None => Vec::new(),
    };

    let sort = match params.sort.as_deref() {
        Some(sort) => sort.parse::<SortOrder>()?,
        None => SortOrder::Newest,
    };

    Ok(PatentQuery {
        search: params.search.filter(|s| !s.trim().is_empty()),
        statuses,
        sort,
    })
}

/// List patents with optional filtering and sorting
pub async fn list_patents(
    State(state): State<AppState>,
    Query(params): Query<ListPatentsParams>,
) -> Result<Json<ListPatentsResponse>> {
    let query = parse_query(params)?;
    let patents = state.repo.list_patents(&query).await?;
    let count = patents.len();

    Ok(Json(ListPatentsResponse { patents, count }))
}

/// Create a new patent record
pub async fn create_patent(
    State(state): State<AppState>,
    Json(request): Json<CreatePatentRequest>,
) -> Result<(StatusCode, Json<Patent>)> {
    request.validate().map_err(|e| AppError::Validation {
        message: e.to_string(),
        field: None,
    })?;

    if request.pdf_file.is_none() && request.raw_text.is_none() {
        return Err(AppError::Validation {
            message: "No file or file URL provided".to_string(),
            field: Some("pdf_file".to_string()),
        });
    }

    let patent = Patent {
        id: Uuid::new_v4(),
        patent_number: request.patent_number,
        title: request.title,
        abstract_text: request.abstract_text.unwrap_or_default(),
        filing_date: request.filing_date,
        publication_date: request.publication_date,
        upload_date: Utc::now(),
        inventors: request.inventors,
        assignee: request.assignee.unwrap_or_default(),
        pdf_file: request.pdf_file,
        pdf_file_name: request.pdf_file_name,
        raw_text: request.raw_text,
        is_prior_art: request.is_prior_art,
        is_competitor: request.is_competitor,
        status: PatentStatus::Pending,
    };

    let patent = state.repo.create_patent(patent).await?;
    metrics::record_patent_created();

    tracing::info!(
        patent_id = %patent.id,
        patent_number = %patent.patent_number,
        title = %patent.title,
        "Patent created"
    );

    Ok((StatusCode::CREATED, Json(patent)))
}

/// Get a patent by ID
pub async fn get_patent(
    State(state): State<AppState>,
    Path(patent_id): Path<Uuid>,
) -> Result<Json<Patent>> {
    let patent = state
        .repo
        .find_patent_by_id(patent_id)
        .await?
        .ok_or_else(|| AppError::PatentNotFound {
            id: patent_id.to_string(),
        })?;

    Ok(Json(patent))
}

/// Update a patent's metadata
pub async fn update_patent(
    State(state): State<AppState>,
    Path(patent_id): Path<Uuid>,
    Json(update): Json<PatentUpdate>,
) -> Result<Json<Patent>> {
    let patent = state.repo.update_patent(patent_id, update).await?;

    tracing::info!(patent_id = %patent_id, "Patent updated");

    Ok(Json(patent))
}

/// Delete a patent
pub async fn delete_patent(
    State(state): State<AppState>,
    Path(patent_id): Path<Uuid>,
) -> Result<StatusCode> {
    if !state.repo.delete_patent(patent_id).await? {
        return Err(AppError::PatentNotFound {
            id: patent_id.to_string(),
        });
    }

    tracing::info!(patent_id = %patent_id, "Patent deleted");

    Ok(StatusCode::NO_CONTENT)
}

/// Redirect to the stored patent document
pub async fn get_patent_file(
    State(state): State<AppState>,
    Path(patent_id): Path<Uuid>,
) -> Result<Redirect> {
    let patent = state
        .repo
        .find_patent_by_id(patent_id)
        .await?
        .ok_or_else(|| AppError::PatentNotFound {
            id: patent_id.to_string(),
        })?;

    let url = patent.pdf_file.ok_or_else(|| AppError::NotFound {
        resource_type: "patent file".to_string(),
        id: patent_id.to_string(),
    })?;

    Ok(Redirect::temporary(&url))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_query_statuses() {
        let query = parse_query(ListPatentsParams {
            status: Some("pending, analyzed".into()),
            ..Default::default()
        })
        .unwrap();
        assert_eq!(
            query.statuses,
            vec![PatentStatus::Pending, PatentStatus::Analyzed]
        );

        let err = parse_query(ListPatentsParams {
            status: Some("bogus".into()),
            ..Default::default()
        });
        assert!(err.is_err());
    }

    #[test]
    fn test_parse_query_blank_search_dropped() {
        let query = parse_query(ListPatentsParams {
            search: Some("   ".into()),
            ..Default::default()
        })
        .unwrap();
        assert!(query.search.is_none());
    }

    #[test]
    fn test_inventors_accept_both_shapes() {
        let from_list: CreatePatentRequest = serde_json::from_value(serde_json::json!({
            "patent_number": "US1B2",
            "title": "T",
            "inventors": ["Ada Lovelace", "  Grace Hopper "],
            "raw_text": "text"
        }))
        .unwrap();
        assert_eq!(from_list.inventors, vec!["Ada Lovelace", "Grace Hopper"]);

        let from_csv: CreatePatentRequest = serde_json::from_value(serde_json::json!({
            "patent_number": "US1B2",
            "title": "T",
            "inventors": "Ada Lovelace, Grace Hopper,",
            "raw_text": "text"
        }))
        .unwrap();
        assert_eq!(from_csv.inventors, vec!["Ada Lovelace", "Grace Hopper"]);
    }
}
