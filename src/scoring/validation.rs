use super::config::ScoringConfig;

/// Allowed drift of the weight sum from 1.0
const WEIGHT_SUM_TOLERANCE: f64 = 1e-9;

/// Validate scoring configuration at startup.
/// Returns all validation errors at once (not just the first).
pub fn validate_scoring(config: &ScoringConfig) -> Result<(), Vec<String>> {
    let mut errors = Vec::new();

    let weights = [
        ("skills", config.weights.skills),
        ("experience", config.weights.experience),
        ("location", config.weights.location),
        ("salary", config.weights.salary),
        ("preferences", config.weights.preferences),
    ];
    for (name, weight) in weights {
        if !weight.is_finite() || weight < 0.0 {
            errors.push(format!("scoring.weights.{}: must be a non-negative number", name));
        }
    }

    let sum = config.weights.sum();
    if (sum - 1.0).abs() > WEIGHT_SUM_TOLERANCE {
        errors.push(format!("scoring.weights: must sum to 1.0, got {}", sum));
    }

    for (name, threshold) in [
        ("fuzzy_skill_threshold", config.fuzzy_skill_threshold),
        ("related_title_threshold", config.related_title_threshold),
    ] {
        if !(0.0..=1.0).contains(&threshold) {
            errors.push(format!("scoring.{}: must be between 0 and 1, got {}", name, threshold));
        }
    }

    if let Err(e) = humantime::parse_duration(&config.recent_window) {
        errors.push(format!(
            "scoring.recent_window: invalid duration '{}' - {}",
            config.recent_window, e
        ));
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}
