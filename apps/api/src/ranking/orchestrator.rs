//! Ranking Orchestrator — composes relevance scoring, classification and skill-gap analysis
//! into one ordered result list per request.
//!
//! Pure and synchronous. Callers on the async runtime run it via `spawn_blocking`.

use std::cmp::Ordering;

use tracing::debug;

use crate::models::document::Document;
use crate::models::ranking::MatchResult;
use crate::ranking::catalog::SkillCatalog;
use crate::ranking::classifier::classify;
use crate::ranking::keywords::extract_skills;
use crate::ranking::relevance::rank;
use crate::ranking::skill_gap::{analyze, build_recommendations};

/// Ranks `candidates` against `query`, highest score first.
///
/// Ties keep their input order. Sorting uses the raw score, so two candidates can show the
/// same `percent` in a fixed order. Empty text never fails; it scores 0 with empty skill sets.
pub fn rank_candidates(
    query: &str,
    candidates: &[Document],
    catalog: &SkillCatalog,
) -> Vec<MatchResult> {
    if candidates.is_empty() {
        return Vec::new();
    }

    debug!(
        "Ranking {} candidates against {} vocabulary skills",
        candidates.len(),
        catalog.vocabulary.len()
    );

    let texts: Vec<&str> = candidates.iter().map(|c| c.text.as_str()).collect();
    let scores = rank(query, &texts);
    let query_skills = extract_skills(query, &catalog.vocabulary);

    let mut results: Vec<MatchResult> = candidates
        .iter()
        .zip(scores)
        .map(|(candidate, score)| {
            let candidate_skills = extract_skills(&candidate.text, &catalog.vocabulary);
            let gap = analyze(&query_skills, &candidate_skills);
            let recommendations = build_recommendations(&gap.missing, &catalog.providers);
            let percent = to_percent(score);
            let (label, color_class) = classify(i64::from(percent));

            MatchResult {
                name: candidate.name.clone(),
                score,
                percent,
                label,
                color_class,
                present: gap.present,
                missing: gap.missing,
                recommendations,
            }
        })
        .collect();

    // Stable sort, descending by raw score.
    results.sort_by(|a, b| b.score.partial_cmp(&a.score).unwrap_or(Ordering::Equal));
    results
}

fn to_percent(score: f64) -> u8 {
    (score * 100.0).round().clamp(0.0, 100.0) as u8
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ranking::classifier::{MatchLabel, MatchTier};

    const JOB: &str = "Looking for a Python developer with AWS and Docker experience";

    fn doc(name: &str, text: &str) -> Document {
        Document::new(name, text)
    }

    #[test]
    fn test_python_aws_docker_scenario() {
        let catalog = SkillCatalog::default();
        let candidates = vec![
            doc("A", "Experienced Python and Docker engineer"),
            doc("B", "Java backend developer"),
        ];

        let results = rank_candidates(JOB, &candidates, &catalog);

        assert_eq!(results.len(), 2);
        assert_eq!(results[0].name, "A");
        assert_eq!(results[1].name, "B");
        assert!(results[0].score > results[1].score);

        assert!(results[0].missing.contains(&"aws".to_string()));
        assert_eq!(results[0].present, vec!["docker", "python"]);

        let b_missing = &results[1].missing;
        for skill in ["python", "aws", "docker"] {
            assert!(b_missing.contains(&skill.to_string()), "B should miss {skill}");
        }
        assert!(results[1].present.is_empty());
    }

    #[test]
    fn test_degenerate_empty_texts() {
        let catalog = SkillCatalog::default();
        let results = rank_candidates("", &[doc("A", "")], &catalog);

        assert_eq!(results.len(), 1);
        let r = &results[0];
        assert_eq!(r.score, 0.0);
        assert_eq!(r.percent, 0);
        assert_eq!(r.label, MatchLabel::Low);
        assert_eq!(r.color_class, MatchTier::Low);
        assert!(r.present.is_empty());
        assert!(r.missing.is_empty());
        assert!(r.recommendations.is_empty());
    }

    #[test]
    fn test_empty_candidates_returns_empty() {
        let results = rank_candidates("anything", &[], &SkillCatalog::default());
        assert!(results.is_empty());
    }

    #[test]
    fn test_sorted_descending_and_stable_on_ties() {
        let catalog = SkillCatalog::default();
        let candidates = vec![
            doc("first-empty", ""),
            doc("match", "Python developer with AWS and Docker"),
            doc("second-empty", ""),
            doc("unrelated", "gardening roses tulips"),
        ];

        let results = rank_candidates(JOB, &candidates, &catalog);
        let names: Vec<&str> = results.iter().map(|r| r.name.as_str()).collect();

        assert_eq!(names[0], "match");
        assert_eq!(names[1..], ["first-empty", "second-empty", "unrelated"]);
        assert!(results.windows(2).all(|w| w[0].score >= w[1].score));
    }

    #[test]
    fn test_present_and_missing_partition_query_skills() {
        let catalog = SkillCatalog::default();
        let query = "Senior engineer: Rust, Kubernetes, Terraform, PostgreSQL, Kafka";
        let candidates = vec![
            doc("x", "Rust and Kafka on Kubernetes"),
            doc("y", "PostgreSQL DBA"),
        ];
        let query_skills = extract_skills(query, &catalog.vocabulary);

        for r in rank_candidates(query, &candidates, &catalog) {
            let union: std::collections::BTreeSet<String> =
                r.present.iter().chain(&r.missing).cloned().collect();
            assert_eq!(union, query_skills);
            assert!(r.present.iter().all(|s| !r.missing.contains(s)));
            assert_eq!(r.recommendations.len(), r.missing.len());
        }
    }

    #[test]
    fn test_percent_and_label_follow_score() {
        let catalog = SkillCatalog::default();
        let results = rank_candidates(JOB, &[doc("same", JOB)], &catalog);

        assert_eq!(results[0].percent, 100);
        assert_eq!(results[0].label, MatchLabel::Excellent);
        assert!(results[0].missing.is_empty());
    }

    #[test]
    fn test_recommendations_link_every_provider() {
        let catalog = SkillCatalog::default();
        let results = rank_candidates(JOB, &[doc("B", "Java backend developer")], &catalog);

        let recs = &results[0].recommendations;
        assert!(!recs.is_empty());
        for rec in recs {
            assert_eq!(rec.providers.len(), catalog.providers.len());
            assert!(rec.providers.iter().all(|p| p.url.contains(&rec.skill)));
        }
    }

    #[test]
    fn test_to_percent_rounds_and_clamps() {
        assert_eq!(to_percent(0.0), 0);
        assert_eq!(to_percent(0.844), 84);
        assert_eq!(to_percent(0.846), 85);
        assert_eq!(to_percent(1.0), 100);
        assert_eq!(to_percent(1.2), 100);
    }
}
