//! Keyword Matcher: whole-token lookup of a fixed skill vocabulary in free text.

use std::collections::{BTreeSet, HashSet};

use tracing::warn;

use crate::ranking::normalizer::normalize;

/// Ordered set of canonical skill strings, stored in normalized form.
///
/// Built once at startup and shared read-only across ranking calls. Entries that normalize
/// to blank are dropped, and so are duplicates after normalization (first occurrence wins).
#[derive(Debug, Clone, Default, PartialEq)]
pub struct KeywordVocabulary {
    entries: Vec<String>,
}

impl KeywordVocabulary {
    pub fn new<I, S>(skills: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut seen = HashSet::new();
        let mut entries = Vec::new();

        for skill in skills {
            let normalized = normalize(skill.as_ref()).trim().to_string();
            if normalized.is_empty() {
                warn!("Skipping blank vocabulary entry {:?}", skill.as_ref());
                continue;
            }
            if !seen.insert(normalized.clone()) {
                warn!("Skipping duplicate vocabulary entry {:?}", skill.as_ref());
                continue;
            }
            entries.push(normalized);
        }

        Self { entries }
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> + '_ {
        self.entries.iter().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// Returns the vocabulary entries that occur in `text` as whole tokens or phrases.
///
/// Both sides are normalized and space-padded, so `" java "` never matches inside
/// `" javascript "`. No stemming and no fuzzy matching.
pub fn extract_skills(text: &str, vocabulary: &KeywordVocabulary) -> BTreeSet<String> {
    let haystack = format!(" {} ", normalize(text));

    vocabulary
        .iter()
        .filter(|skill| haystack.contains(&format!(" {skill} ")))
        .map(str::to_string)
        .collect()
}
