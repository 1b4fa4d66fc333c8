//! Axum route handlers for the Ranking API.

use axum::{
    extract::{Multipart, State},
    Json,
};
use bytes::Bytes;
use serde::Deserialize;
use tracing::info;

use crate::errors::AppError;
use crate::extraction::pdf::extract_documents;
use crate::models::document::Document;
use crate::models::ranking::RankingResponse;
use crate::ranking::orchestrator::rank_candidates;
use crate::state::AppState;

// ────────────────────────────────────────────────────────────────────────────
// Request types
// ────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Deserialize)]
pub struct RankRequest {
    #[serde(default)]
    pub job_description: String,
    pub candidates: Vec<Document>,
}

const JOB_DESCRIPTION_FIELD: &str = "job_description";
const RESUMES_FIELD: &str = "resumes";

// ────────────────────────────────────────────────────────────────────────────
// Handlers
// ────────────────────────────────────────────────────────────────────────────

/// POST /api/v1/rankings
///
/// Ranks already-extracted candidate texts against a job description.
/// Empty texts are accepted and score 0.
pub async fn handle_rank(
    State(state): State<AppState>,
    Json(request): Json<RankRequest>,
) -> Result<Json<RankingResponse>, AppError> {
    check_candidate_limit(request.candidates.len(), state.config.max_candidates)?;

    let response = run_ranking(&state, request.job_description, request.candidates).await?;
    Ok(Json(response))
}

/// POST /api/v1/rankings/upload
///
/// Multipart form: one `job_description` text field and any number of `resumes` PDF files.
/// Each file is converted to text, then ranked like `/api/v1/rankings`.
pub async fn handle_rank_upload(
    State(state): State<AppState>,
    mut multipart: Multipart,
) -> Result<Json<RankingResponse>, AppError> {
    let mut job_description = String::new();
    let mut files: Vec<(String, Bytes)> = Vec::new();

    while let Some(field) = multipart
        .next_field()
        .await
        .map_err(|e| AppError::Validation(format!("Malformed multipart body: {e}")))?
    {
        let field_name = field.name().map(str::to_string);
        match field_name.as_deref() {
            Some(JOB_DESCRIPTION_FIELD) => {
                job_description = field
                    .text()
                    .await
                    .map_err(|e| AppError::Validation(format!("Unreadable job_description: {e}")))?;
            }
            Some(RESUMES_FIELD) => {
                let name = field
                    .file_name()
                    .map(str::to_string)
                    .unwrap_or_else(|| format!("resume-{}.pdf", files.len() + 1));
                let bytes = field
                    .bytes()
                    .await
                    .map_err(|e| AppError::Validation(format!("Unreadable file '{name}': {e}")))?;
                files.push((name, bytes));
            }
            _ => {} // unknown fields are ignored
        }
    }

    check_candidate_limit(files.len(), state.config.max_candidates)?;

    let candidates = tokio::task::spawn_blocking(move || extract_documents(files))
        .await
        .map_err(|e| AppError::Internal(anyhow::anyhow!("spawn_blocking failed in PDF extraction: {e}")))??;

    let response = run_ranking(&state, job_description, candidates).await?;
    Ok(Json(response))
}

// ────────────────────────────────────────────────────────────────────────────
// Helpers
// ────────────────────────────────────────────────────────────────────────────

fn check_candidate_limit(count: usize, max: usize) -> Result<(), AppError> {
    if count > max {
        return Err(AppError::Validation(format!(
            "Too many candidates: {count} (maximum {max})"
        )));
    }
    Ok(())
}

/// Runs the CPU-bound ranking off the async executor and wraps it in a response.
async fn run_ranking(
    state: &AppState,
    job_description: String,
    candidates: Vec<Document>,
) -> Result<RankingResponse, AppError> {
    let catalog = state.catalog.clone();
    let query = job_description.clone();

    let results = tokio::task::spawn_blocking(move || rank_candidates(&query, &candidates, &catalog))
        .await
        .map_err(|e| AppError::Internal(anyhow::anyhow!("spawn_blocking failed in ranking: {e}")))?;

    let response = RankingResponse::new(job_description, results);
    info!(
        "Ranking {} complete: {} candidates, top score {:.3}",
        response.ranking_id,
        response.results.len(),
        response.results.first().map(|r| r.score).unwrap_or(0.0)
    );
    Ok(response)
}
