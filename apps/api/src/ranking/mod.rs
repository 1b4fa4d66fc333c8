// Ranking engine: TF-IDF relevance, keyword skill matching, skill-gap analysis.
// Everything below `handlers` is pure and synchronous; handlers hop onto spawn_blocking.

pub mod catalog;
pub mod classifier;
pub mod handlers;
pub mod keywords;
pub mod normalizer;
pub mod orchestrator;
pub mod relevance;
pub mod skill_gap;
