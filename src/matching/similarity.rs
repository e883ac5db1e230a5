use std::collections::HashSet;

/// Word-set (Jaccard) similarity between two free-text labels, in [0, 1].
///
/// Both sides are lower-cased and split on whitespace. Two empty inputs share
/// no words and score 0.
pub fn similarity(a: &str, b: &str) -> f64 {
    let a = a.to_lowercase();
    let b = b.to_lowercase();
    let words_a: HashSet<&str> = a.split_whitespace().collect();
    let words_b: HashSet<&str> = b.split_whitespace().collect();

    let union = words_a.union(&words_b).count();
    if union == 0 {
        return 0.0;
    }
    let intersection = words_a.intersection(&words_b).count();
    intersection as f64 / union as f64
}
