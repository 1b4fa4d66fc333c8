//! Match Classifier — maps a similarity percent to a qualitative label and a display tier.

use std::fmt;

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum MatchLabel {
    #[serde(rename = "Excellent Match")]
    Excellent,
    #[serde(rename = "Good Match")]
    Good,
    #[serde(rename = "Fair Match")]
    Fair,
    #[serde(rename = "Low Match")]
    Low,
}

impl MatchLabel {
    pub fn as_str(&self) -> &'static str {
        match self {
            MatchLabel::Excellent => "Excellent Match",
            MatchLabel::Good => "Good Match",
            MatchLabel::Fair => "Fair Match",
            MatchLabel::Low => "Low Match",
        }
    }
}

impl fmt::Display for MatchLabel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Presentation tier; its snake_case name doubles as the CSS color class.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MatchTier {
    Excellent,
    Good,
    Fair,
    Low,
}

const EXCELLENT_THRESHOLD: i64 = 85;
const GOOD_THRESHOLD: i64 = 70;
const FAIR_THRESHOLD: i64 = 50;

/// Total over all integers; anything below 50 (including negatives) is a low match.
pub fn classify(percent: i64) -> (MatchLabel, MatchTier) {
    if percent >= EXCELLENT_THRESHOLD {
        (MatchLabel::Excellent, MatchTier::Excellent)
    } else if percent >= GOOD_THRESHOLD {
        (MatchLabel::Good, MatchTier::Good)
    } else if percent >= FAIR_THRESHOLD {
        (MatchLabel::Fair, MatchTier::Fair)
    } else {
        (MatchLabel::Low, MatchTier::Low)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_threshold_boundaries() {
        assert_eq!(classify(100), (MatchLabel::Excellent, MatchTier::Excellent));
        assert_eq!(classify(85), (MatchLabel::Excellent, MatchTier::Excellent));
        assert_eq!(classify(84), (MatchLabel::Good, MatchTier::Good));
        assert_eq!(classify(70), (MatchLabel::Good, MatchTier::Good));
        assert_eq!(classify(69), (MatchLabel::Fair, MatchTier::Fair));
        assert_eq!(classify(50), (MatchLabel::Fair, MatchTier::Fair));
        assert_eq!(classify(49), (MatchLabel::Low, MatchTier::Low));
        assert_eq!(classify(0), (MatchLabel::Low, MatchTier::Low));
    }

    #[test]
    fn test_tiers_partition_percent_range() {
        let mut counts = [0usize; 4];
        for percent in 0..=100 {
            let idx = match classify(percent).1 {
                MatchTier::Excellent => 0,
                MatchTier::Good => 1,
                MatchTier::Fair => 2,
                MatchTier::Low => 3,
            };
            counts[idx] += 1;
        }
        assert_eq!(counts, [16, 15, 20, 50]);
        assert_eq!(counts.iter().sum::<usize>(), 101);
    }

    #[test]
    fn test_out_of_range_values_are_defined() {
        assert_eq!(classify(-5).0, MatchLabel::Low);
        assert_eq!(classify(250).0, MatchLabel::Excellent);
    }

    #[test]
    fn test_label_and_tier_serialization() {
        assert_eq!(
            serde_json::to_string(&MatchLabel::Excellent).unwrap(),
            r#""Excellent Match""#
        );
        assert_eq!(serde_json::to_string(&MatchTier::Fair).unwrap(), r#""fair""#);
        assert_eq!(MatchLabel::Low.to_string(), "Low Match");
        assert_eq!(serde_json::to_string(&MatchTier::Excellent).unwrap(), r#""excellent""#);
    }
}
