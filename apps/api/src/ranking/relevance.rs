//! Relevance Ranker — TF-IDF vectorization of a query plus its candidates, scored by cosine
//! similarity against the query.
//!
//! # Weighting
//! - Tokens: lower-cased runs of two or more word characters (letters, digits, `_`).
//! - `tf` is the raw token count in a document.
//! - `idf = ln((1 + n) / (1 + df)) + 1`, with `n` the document count including the query.
//!
//! The term space is built per call from `[query] + candidates` and dropped afterwards.
//! Term ids are assigned in first-seen order and vectors are kept sorted by term id, so
//! every floating-point sum runs in a fixed order and scores are bit-reproducible.

use std::collections::{BTreeMap, HashMap};

/// Sparse term-weight vector, sorted by term id.
type SparseVector = Vec<(usize, f64)>;

/// Scores each candidate against the query. One score per candidate, in input order, each
/// in `[0, 1]`. Empty or token-less documents score 0.
pub fn rank<S: AsRef<str>>(query: &str, candidates: &[S]) -> Vec<f64> {
    if candidates.is_empty() {
        return Vec::new();
    }

    let documents: Vec<&str> = std::iter::once(query)
        .chain(candidates.iter().map(|c| c.as_ref()))
        .collect();

    let vectors = TfIdfSpace::fit(&documents).into_vectors();
    let (query_vector, candidate_vectors) = vectors.split_at(1);

    candidate_vectors
        .iter()
        .map(|candidate| cosine_similarity(&query_vector[0], candidate))
        .collect()
}

/// Cosine similarity of two sparse vectors; 0 when either norm is 0.
pub fn cosine_similarity(a: &[(usize, f64)], b: &[(usize, f64)]) -> f64 {
    let norm_a = norm(a);
    let norm_b = norm(b);
    if norm_a == 0.0 || norm_b == 0.0 {
        return 0.0;
    }
    (dot(a, b) / (norm_a * norm_b)).clamp(0.0, 1.0)
}

/// Splits text into lower-cased tokens of at least two word characters.
pub fn tokenize(text: &str) -> Vec<String> {
    text.to_lowercase()
        .split(|c: char| !(c.is_alphanumeric() || c == '_'))
        .filter(|token| token.chars().count() >= 2)
        .map(str::to_string)
        .collect()
}

// ────────────────────────────────────────────────────────────────────────────
// Term space
// ────────────────────────────────────────────────────────────────────────────

struct TfIdfSpace {
    /// Raw term counts per document, keyed by term id.
    counts: Vec<BTreeMap<usize, u32>>,
    /// Number of documents containing each term id.
    document_frequency: Vec<u32>,
}

impl TfIdfSpace {
    fn fit(documents: &[&str]) -> Self {
        let mut term_ids: HashMap<String, usize> = HashMap::new();
        let mut document_frequency: Vec<u32> = Vec::new();
        let mut counts = Vec::with_capacity(documents.len());

        for document in documents {
            let mut doc_counts: BTreeMap<usize, u32> = BTreeMap::new();
            for token in tokenize(document) {
                let next_id = term_ids.len();
                let id = *term_ids.entry(token).or_insert(next_id);
                if id == document_frequency.len() {
                    document_frequency.push(0);
                }
                *doc_counts.entry(id).or_insert(0) += 1;
            }
            for id in doc_counts.keys() {
                document_frequency[*id] += 1;
            }
            counts.push(doc_counts);
        }

        Self {
            counts,
            document_frequency,
        }
    }

    fn idf(&self, term_id: usize) -> f64 {
        let n = self.counts.len() as f64;
        let df = f64::from(self.document_frequency[term_id]);
        ((1.0 + n) / (1.0 + df)).ln() + 1.0
    }

    fn into_vectors(self) -> Vec<SparseVector> {
        self.counts
            .iter()
            .map(|doc_counts| {
                doc_counts
                    .iter()
                    .map(|(&id, &tf)| (id, f64::from(tf) * self.idf(id)))
                    .collect()
            })
            .collect()
    }
}

fn norm(v: &[(usize, f64)]) -> f64 {
    v.iter().map(|(_, w)| w * w).sum::<f64>().sqrt()
}

/// Merge-join dot product over two id-sorted sparse vectors.
fn dot(a: &[(usize, f64)], b: &[(usize, f64)]) -> f64 {
    let (mut i, mut j) = (0, 0);
    let mut sum = 0.0;
    while i < a.len() && j < b.len() {
        match a[i].0.cmp(&b[j].0) {
            std::cmp::Ordering::Less => i += 1,
            std::cmp::Ordering::Greater => j += 1,
            std::cmp::Ordering::Equal => {
                sum += a[i].1 * b[j].1;
                i += 1;
                j += 1;
            }
        }
    }
    sum
}
