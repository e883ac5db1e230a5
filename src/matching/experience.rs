use chrono::NaiveDate;

use crate::model::{ExperienceMatch, Job, LevelFit, WorkExperience};

use super::{clamp_score, similarity};

/// Experience past this multiple of the requirement counts as overqualified
const OVERQUALIFIED_RATIO: f64 = 1.5;
const RATIO_CAP: f64 = 2.0;
const RELEVANCE_BONUS_CAP: f64 = 20.0;

/// Score a work history against the years a job's level asks for.
///
/// Overlapping roles are summed as-is, so concurrent positions count twice.
/// An entry-level requirement of zero years is treated as already met at the
/// ratio cap: it always scores 100 and classifies as `Above`.
pub fn match_experience(
    experience: &[WorkExperience],
    job: &Job,
    title_threshold: f64,
    skill_threshold: f64,
    today: NaiveDate,
) -> ExperienceMatch {
    let total_months: u32 = experience.iter().map(|e| e.months(today)).sum();
    let total_years = round_tenth(f64::from(total_months) / 12.0);
    let required_years = job.experience_level.required_years();

    let (base, fit) = if required_years <= 0.0 {
        (fit_score(RATIO_CAP), LevelFit::Above)
    } else if total_years >= required_years {
        let ratio = (total_years / required_years).min(RATIO_CAP);
        let fit = if total_years > OVERQUALIFIED_RATIO * required_years {
            LevelFit::Above
        } else {
            LevelFit::Exact
        };
        (fit_score(ratio), fit)
    } else {
        (total_years / required_years * 50.0, LevelFit::Below)
    };

    let relevant_experience: Vec<WorkExperience> = experience
        .iter()
        .filter(|e| is_relevant(e, job, title_threshold, skill_threshold))
        .cloned()
        .collect();

    let mut score = base;
    if !relevant_experience.is_empty() && total_months > 0 {
        // Share of raw months, so display rounding of total_years can't skew it
        let relevant_months: u32 = relevant_experience.iter().map(|e| e.months(today)).sum();
        let share = f64::from(relevant_months) / f64::from(total_months);
        score += (share * RELEVANCE_BONUS_CAP).min(RELEVANCE_BONUS_CAP);
    }

    ExperienceMatch {
        score: clamp_score(score),
        total_years,
        required_years,
        fit,
        relevant_experience,
    }
}

fn fit_score(ratio: f64) -> f64 {
    (50.0 + (ratio - 1.0) * 50.0).min(100.0)
}

/// A role is relevant when its title resembles the job title or one of its
/// skills resembles a required skill.
fn is_relevant(entry: &WorkExperience, job: &Job, title_threshold: f64, skill_threshold: f64) -> bool {
    if similarity(&entry.title, &job.title) > title_threshold {
        return true;
    }
    entry.skills.iter().any(|skill| {
        job.required_skills
            .iter()
            .any(|required| similarity(skill, required) > skill_threshold)
    })
}

fn round_tenth(value: f64) -> f64 {
    (value * 10.0).round() / 10.0
}
