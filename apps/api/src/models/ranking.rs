use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::ranking::classifier::{MatchLabel, MatchTier};
use crate::ranking::skill_gap::Recommendation;

/// Ranking outcome for one candidate. Lives for a single request.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MatchResult {
    pub name: String,
    /// Cosine similarity to the query, 0.0 – 1.0. Sort key.
    pub score: f64,
    /// `round(score * 100)`. Display only.
    pub percent: u8,
    pub label: MatchLabel,
    pub color_class: MatchTier,
    pub present: Vec<String>,
    pub missing: Vec<String>,
    pub recommendations: Vec<Recommendation>,
}

/// Full response for one ranking request.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RankingResponse {
    pub ranking_id: Uuid,
    pub generated_at: DateTime<Utc>,
    pub job_description: String,
    pub top_candidate: Option<String>,
    pub results: Vec<MatchResult>,
}

impl RankingResponse {
    pub fn new(job_description: String, results: Vec<MatchResult>) -> Self {
        Self {
            ranking_id: Uuid::new_v4(),
            generated_at: Utc::now(),
            top_candidate: results.first().map(|r| r.name.clone()),
            job_description,
            results,
        }
    }
}
