use serde::{Deserialize, Serialize};

/// Default window for the "Recently Posted" tag
const DEFAULT_RECENT_WINDOW: &str = "7d";

/// Main scoring configuration.
///
/// Holds the hand-tuned weights and thresholds the matchers use. Every field
/// falls back to its default, so a partial YAML section only overrides what it
/// names.
///
/// Example YAML:
/// ```yaml
/// scoring:
///   weights:
///     skills: 0.5
///     experience: 0.2
///     location: 0.1
///     salary: 0.1
///     preferences: 0.1
///   fuzzy_skill_threshold: 0.7
///   recent_window: "14d"
/// ```
#[derive(Debug, Clone, Deserialize, Serialize, PartialEq)]
#[serde(default, deny_unknown_fields)]
pub struct ScoringConfig {
    /// Share of each component in the overall score. Must sum to 1.0.
    pub weights: Weights,

    /// Word similarity a skill name must exceed to count as a fuzzy match
    pub fuzzy_skill_threshold: f64,

    /// Word similarity a past job title must exceed to count as relevant experience
    pub related_title_threshold: f64,

    /// Score difference at or below which two feed entries are ordered by recency
    pub tie_tolerance: u8,

    /// How long a posting stays "Recently Posted", as a humantime duration ("7d", "36h")
    pub recent_window: String,
}

impl Default for ScoringConfig {
    fn default() -> Self {
        Self {
            weights: Weights::default(),
            fuzzy_skill_threshold: 0.7,
            related_title_threshold: 0.5,
            tie_tolerance: 5,
            recent_window: DEFAULT_RECENT_WINDOW.to_string(),
        }
    }
}

impl ScoringConfig {
    /// Parsed `recent_window`. An unparsable value falls back to seven days;
    /// `validate_scoring` reports it separately.
    pub fn recent_window(&self) -> chrono::Duration {
        humantime::parse_duration(&self.recent_window)
            .ok()
            .and_then(|d| chrono::Duration::from_std(d).ok())
            .unwrap_or_else(|| chrono::Duration::days(7))
    }
}

/// Weight of each match component in the overall score.
#[derive(Debug, Clone, Copy, Deserialize, Serialize, PartialEq)]
#[serde(deny_unknown_fields)]
pub struct Weights {
    pub skills: f64,
    pub experience: f64,
    pub location: f64,
    pub salary: f64,
    pub preferences: f64,
}

pub const DEFAULT_WEIGHTS: Weights = Weights {
    skills: 0.40,
    experience: 0.25,
    location: 0.15,
    salary: 0.10,
    preferences: 0.10,
};

impl Default for Weights {
    fn default() -> Self {
        DEFAULT_WEIGHTS
    }
}

impl Weights {
    pub fn sum(&self) -> f64 {
        self.skills + self.experience + self.location + self.salary + self.preferences
    }
}
