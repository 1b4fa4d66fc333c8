//! Skill-Gap Analyzer — set algebra over query and candidate skills, plus learning links
//! for whatever the candidate is missing.

use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};

/// External learning provider. `{skill}` in `url_template` is replaced by the
/// URL-encoded skill name.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LearningProvider {
    pub name: String,
    pub url_template: String,
}

impl LearningProvider {
    pub fn link_for(&self, skill: &str) -> ProviderLink {
        ProviderLink {
            name: self.name.clone(),
            url: self
                .url_template
                .replace("{skill}", &urlencoding::encode(skill)),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProviderLink {
    pub name: String,
    pub url: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Recommendation {
    pub skill: String,
    pub providers: Vec<ProviderLink>,
}

/// Query skills split into what the candidate lacks and what it has.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SkillGap {
    pub missing: Vec<String>,
    pub present: Vec<String>,
}

/// `missing = query − candidate`, `present = query ∩ candidate`, both sorted.
pub fn analyze(query_skills: &BTreeSet<String>, candidate_skills: &BTreeSet<String>) -> SkillGap {
    let (present, missing): (Vec<String>, Vec<String>) = query_skills
        .iter()
        .cloned()
        .partition(|skill| candidate_skills.contains(skill));

    SkillGap { missing, present }
}

/// One recommendation per missing skill, in the order given.
pub fn build_recommendations(missing: &[String], providers: &[LearningProvider]) -> Vec<Recommendation> {
    missing
        .iter()
        .map(|skill| Recommendation {
            skill: skill.clone(),
            providers: providers.iter().map(|p| p.link_for(skill)).collect(),
        })
        .collect()
}
