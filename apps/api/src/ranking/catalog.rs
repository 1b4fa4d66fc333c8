//! Skill catalog — the keyword vocabulary and learning providers, fixed at startup.
//!
//! Defaults are compiled in. `SKILL_CATALOG_PATH` may point at a TOML file overriding either
//! part; a missing section keeps its default:
//!
//! ```toml
//! skills = ["rust", "tokio", "kubernetes"]
//!
//! [[providers]]
//! name = "Coursera"
//! url_template = "https://www.coursera.org/search?query={skill}"
//! ```

use std::path::Path;

use anyhow::{Context, Result};
use serde::Deserialize;
use tracing::{info, warn};

use crate::ranking::keywords::KeywordVocabulary;
use crate::ranking::skill_gap::LearningProvider;

pub const DEFAULT_SKILLS: &[&str] = &[
    // Languages
    "python", "java", "javascript", "typescript", "c", "c++", "c#", "golang", "rust", "ruby",
    "php", "swift", "kotlin", "scala", "matlab", "perl", "bash", "sql",
    // Web and frameworks
    "html", "css", "react", "angular", "vue", "node.js", "express.js", "django", "flask",
    "fastapi", "spring boot", ".net", "asp.net", "ruby on rails", "graphql", "rest api",
    // Data and ML
    "machine learning", "deep learning", "nlp", "computer vision", "data analysis",
    "data science", "pandas", "numpy", "scikit learn", "tensorflow", "pytorch", "keras",
    "spark", "hadoop", "tableau", "power bi", "excel", "statistics",
    // Storage
    "mysql", "postgresql", "mongodb", "redis", "elasticsearch", "kafka", "cassandra",
    "dynamodb", "oracle",
    // Cloud and tooling
    "aws", "azure", "gcp", "docker", "kubernetes", "terraform", "ansible", "jenkins",
    "ci cd", "git", "linux", "microservices", "agile", "scrum", "jira",
];

pub const DEFAULT_PROVIDERS: &[(&str, &str)] = &[
    ("Coursera", "https://www.coursera.org/search?query={skill}"),
    ("Udemy", "https://www.udemy.com/courses/search/?q={skill}"),
    ("YouTube", "https://www.youtube.com/results?search_query={skill}"),
];

/// Read-only catalog shared by all ranking calls.
#[derive(Debug, Clone)]
pub struct SkillCatalog {
    pub vocabulary: KeywordVocabulary,
    pub providers: Vec<LearningProvider>,
}

impl Default for SkillCatalog {
    fn default() -> Self {
        Self {
            vocabulary: KeywordVocabulary::new(DEFAULT_SKILLS.iter().copied()),
            providers: default_providers(),
        }
    }
}

#[derive(Debug, Deserialize)]
struct CatalogFile {
    skills: Option<Vec<String>>,
    providers: Option<Vec<LearningProvider>>,
}

impl SkillCatalog {
    /// Loads the catalog from `path` when given, otherwise returns the built-in defaults.
    pub fn load(path: Option<&Path>) -> Result<Self> {
        let Some(path) = path else {
            let catalog = Self::default();
            info!(
                "Using built-in skill catalog ({} skills, {} providers)",
                catalog.vocabulary.len(),
                catalog.providers.len()
            );
            return Ok(catalog);
        };

        let raw = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read skill catalog at {}", path.display()))?;
        let catalog = Self::from_toml(&raw)
            .with_context(|| format!("Invalid skill catalog at {}", path.display()))?;

        info!(
            "Loaded skill catalog from {} ({} skills, {} providers)",
            path.display(),
            catalog.vocabulary.len(),
            catalog.providers.len()
        );
        Ok(catalog)
    }

    pub fn from_toml(raw: &str) -> Result<Self> {
        let file: CatalogFile = toml::from_str(raw)?;

        let vocabulary = match file.skills {
            Some(skills) => KeywordVocabulary::new(skills),
            None => KeywordVocabulary::new(DEFAULT_SKILLS.iter().copied()),
        };
        let providers = file.providers.unwrap_or_else(default_providers);

        if vocabulary.is_empty() {
            warn!("Skill catalog has no skills; every skill-gap report will be empty");
        }

        Ok(Self {
            vocabulary,
            providers,
        })
    }
}

fn default_providers() -> Vec<LearningProvider> {
    DEFAULT_PROVIDERS
        .iter()
        .map(|(name, url_template)| LearningProvider {
            name: name.to_string(),
            url_template: url_template.to_string(),
        })
        .collect()
}
