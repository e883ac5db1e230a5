mod experience;
mod location;
mod preferences;
mod salary;
mod similarity;
mod skills;

pub use experience::match_experience;
pub use location::{distance_score, match_location};
pub use preferences::match_preferences;
pub use salary::{match_salary, to_yearly};
pub use similarity::similarity;
pub use skills::match_skills;

/// Round a raw score into the 0-100 integer range. Non-finite input scores zero.
pub(crate) fn clamp_score(raw: f64) -> u8 {
    if !raw.is_finite() {
        return 0;
    }
    raw.clamp(0.0, 100.0).round() as u8
}
