use chrono::{DateTime, Utc};
use rayon::prelude::*;

use super::config::{ScoringConfig, Weights};
use crate::explain::{build_reasoning, recommendation_tags};
use crate::feed::rank_feed_with_tolerance;
use crate::geo::{DistanceProvider, NoDistance};
use crate::matching::{
    clamp_score, match_experience, match_location, match_preferences, match_salary, match_skills,
};
use crate::model::{Confidence, Job, JobMatch, MatchComponents, UserProfile};

/// Profile needs at least this many skills for a high-confidence match
const HIGH_CONFIDENCE_MIN_SKILLS: usize = 3;

/// Scores profiles against jobs.
///
/// Holds only immutable configuration and a distance provider; every call is
/// a pure function of its arguments, so one engine can be shared across
/// threads.
#[derive(Debug, Clone)]
pub struct MatchEngine<D = NoDistance> {
    config: ScoringConfig,
    distance: D,
}

impl MatchEngine<NoDistance> {
    pub fn new(config: ScoringConfig) -> Self {
        Self {
            config,
            distance: NoDistance,
        }
    }
}

impl Default for MatchEngine<NoDistance> {
    fn default() -> Self {
        Self::new(ScoringConfig::default())
    }
}

impl<D: DistanceProvider> MatchEngine<D> {
    /// Replace the distance provider used by location scoring
    pub fn with_distance_provider<P: DistanceProvider>(self, distance: P) -> MatchEngine<P> {
        MatchEngine {
            config: self.config,
            distance,
        }
    }

    pub fn config(&self) -> &ScoringConfig {
        &self.config
    }

    /// Run the five matchers for one pair without aggregating
    pub fn components(&self, profile: &UserProfile, job: &Job, now: DateTime<Utc>) -> MatchComponents {
        MatchComponents {
            skills: match_skills(&profile.skills, job, self.config.fuzzy_skill_threshold),
            experience: match_experience(
                &profile.experience,
                job,
                self.config.related_title_threshold,
                self.config.fuzzy_skill_threshold,
                now.date_naive(),
            ),
            location: match_location(profile, job, &self.distance),
            salary: match_salary(profile.salary_expectation.as_ref(), job.salary_range.as_ref()),
            preferences: match_preferences(&profile.preferences, job),
        }
    }

    /// Score, explain and tag one (profile, job) pair.
    ///
    /// `now` anchors ongoing roles and the "Recently Posted" tag, so the same
    /// inputs and `now` always produce the same match.
    pub fn evaluate<'a>(&self, profile: &UserProfile, job: &'a Job, now: DateTime<Utc>) -> JobMatch<'a> {
        let components = self.components(profile, job, now);
        let overall_score = overall_score(&components, &self.config.weights);
        let confidence = confidence(&components, profile);
        let reasoning = build_reasoning(&components, job);
        let recommendation_tags = recommendation_tags(&components, job, now, self.config.recent_window());

        tracing::debug!(
            job = %job.id,
            skills = components.skills.score,
            experience = components.experience.score,
            location = components.location.score,
            salary = components.salary.score,
            preferences = components.preferences.score,
            overall = overall_score,
            confidence = confidence.as_str(),
            "scored job"
        );

        JobMatch {
            job,
            overall_score,
            confidence,
            components,
            reasoning,
            recommendation_tags,
        }
    }

    /// Score many jobs for one profile in parallel. Output order follows `jobs`.
    pub fn evaluate_all<'a>(
        &self,
        profile: &UserProfile,
        jobs: &'a [Job],
        now: DateTime<Utc>,
    ) -> Vec<JobMatch<'a>>
    where
        D: Sync,
    {
        jobs.par_iter()
            .map(|job| self.evaluate(profile, job, now))
            .collect()
    }

    /// Score every job and rank the results into a feed
    pub fn feed<'a>(&self, profile: &UserProfile, jobs: &'a [Job], now: DateTime<Utc>) -> Vec<JobMatch<'a>>
    where
        D: Sync,
    {
        let matches = self.evaluate_all(profile, jobs, now);
        rank_feed_with_tolerance(matches, self.config.tie_tolerance)
    }
}

/// Weighted sum of the five component scores, rounded into 0-100
pub fn overall_score(components: &MatchComponents, weights: &Weights) -> u8 {
    let weighted = f64::from(components.skills.score) * weights.skills
        + f64::from(components.experience.score) * weights.experience
        + f64::from(components.location.score) * weights.location
        + f64::from(components.salary.score) * weights.salary
        + f64::from(components.preferences.score) * weights.preferences;
    clamp_score(weighted)
}

/// Coarse trust label for a match. High confidence also requires a profile
/// with enough skills and at least one role to judge from.
pub fn confidence(components: &MatchComponents, profile: &UserProfile) -> Confidence {
    let skills = components.skills.score;
    let experience = components.experience.score;

    if skills >= 80
        && experience >= 70
        && profile.skills.len() >= HIGH_CONFIDENCE_MIN_SKILLS
        && !profile.experience.is_empty()
    {
        Confidence::High
    } else if skills >= 60 && experience >= 50 {
        Confidence::Medium
    } else {
        Confidence::Low
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{
        Company, CompanySize, ExperienceLevel, JobPreferences, JobType, LevelFit, RecommendationTag,
        RemotePreference, SalaryPeriod, SalaryRange, SkillCategory, UserSkill, WorkExperience,
    };
    use chrono::{NaiveDate, TimeZone};

    fn now() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2024, 1, 15, 12, 0, 0).unwrap()
    }

    fn skill(name: &str, level: u8) -> UserSkill {
        UserSkill {
            name: name.to_string(),
            level,
            category: SkillCategory::Technical,
        }
    }

    fn sample_profile() -> UserProfile {
        UserProfile {
            id: "u-1".to_string(),
            name: "Ada".to_string(),
            email: None,
            location: "Berlin".to_string(),
            skills: vec![skill("Rust", 4), skill("PostgreSQL", 4), skill("Docker", 3)],
            experience: vec![WorkExperience {
                title: "Backend Engineer".to_string(),
                company: "Initech".to_string(),
                start_date: NaiveDate::from_ymd_opt(2019, 1, 1).unwrap(),
                end_date: Some(NaiveDate::from_ymd_opt(2023, 1, 1).unwrap()),
                skills: vec!["Rust".to_string()],
            }],
            education: vec![],
            preferences: JobPreferences {
                job_types: vec![JobType::FullTime],
                industries: vec!["Fintech".to_string()],
                company_sizes: vec![CompanySize::Startup],
                remote: RemotePreference::Flexible,
            },
            salary_expectation: Some(SalaryRange {
                min: 80_000.0,
                max: 100_000.0,
                currency: "EUR".to_string(),
                period: SalaryPeriod::Yearly,
            }),
        }
    }

    fn sample_job() -> Job {
        Job {
            id: "job-1".to_string(),
            title: "Backend Engineer".to_string(),
            company: Company {
                name: "Acme".to_string(),
                size: CompanySize::Startup,
                industry: "Fintech".to_string(),
                location: "Berlin".to_string(),
            },
            location: "Berlin".to_string(),
            is_remote: true,
            is_hybrid: false,
            job_type: JobType::FullTime,
            experience_level: ExperienceLevel::Mid,
            required_skills: vec!["Rust".to_string(), "PostgreSQL".to_string()],
            preferred_skills: vec!["Docker".to_string()],
            salary_range: Some(SalaryRange {
                min: 90_000.0,
                max: 110_000.0,
                currency: "EUR".to_string(),
                period: SalaryPeriod::Yearly,
            }),
            posted_date: Utc.with_ymd_and_hms(2024, 1, 12, 0, 0, 0).unwrap(),
        }
    }

    #[test]
    fn test_strong_match_end_to_end() {
        let profile = sample_profile();
        let job = sample_job();
        let result = MatchEngine::default().evaluate(&profile, &job, now());

        // skills 100 + 5 bonus capped, experience 67 + 20 relevance
        assert_eq!(result.components.skills.score, 100);
        assert_eq!(result.components.experience.score, 87);
        assert_eq!(result.components.location.score, 100);
        assert_eq!(result.components.salary.score, 100);
        assert_eq!(result.components.preferences.score, 100);
        // 40 + 21.75 + 15 + 10 + 10
        assert_eq!(result.overall_score, 97);
        assert_eq!(result.confidence, Confidence::High);
        assert!(result
            .recommendation_tags
            .contains(&RecommendationTag::PerfectSkillsMatch));
        assert!(result.recommendation_tags.contains(&RecommendationTag::RemoteFriendly));
        assert!(result.recommendation_tags.contains(&RecommendationTag::RecentlyPosted));
        assert!(result.reasoning.ends_with('.'));
    }

    #[test]
    fn test_alternate_weights_change_overall_only() {
        let profile = sample_profile();
        let job = sample_job();
        let skills_only = ScoringConfig {
            weights: Weights {
                skills: 1.0,
                experience: 0.0,
                location: 0.0,
                salary: 0.0,
                preferences: 0.0,
            },
            ..ScoringConfig::default()
        };

        let default = MatchEngine::default().evaluate(&profile, &job, now());
        let custom = MatchEngine::new(skills_only).evaluate(&profile, &job, now());

        assert_eq!(default.components, custom.components);
        assert_eq!(custom.overall_score, 100);
    }

    #[test]
    fn test_confidence_high_needs_three_skills() {
        let mut profile = sample_profile();
        profile.skills.truncate(2);
        let job = sample_job();
        let components = MatchEngine::default().components(&profile, &job, now());

        assert_eq!(components.skills.score, 100);
        assert_eq!(confidence(&components, &profile), Confidence::Medium);
    }

    #[test]
    fn test_confidence_low() {
        let mut profile = sample_profile();
        profile.skills.clear();
        let job = sample_job();
        let components = MatchEngine::default().components(&profile, &job, now());
        assert_eq!(confidence(&components, &profile), Confidence::Low);
    }

    #[test]
    fn test_distance_provider_is_consulted() {
        let mut profile = sample_profile();
        profile.preferences.remote = RemotePreference::Onsite;
        let job = sample_job();

        let engine = MatchEngine::default().with_distance_provider(|_: &str, _: &str| Some(120.0));
        let result = engine.evaluate(&profile, &job, now());
        assert_eq!(result.components.location.score, 20);
        assert_eq!(result.components.location.distance_km, Some(120.0));
    }

    #[test]
    fn test_evaluate_all_keeps_input_order() {
        let profile = sample_profile();
        let mut jobs = Vec::new();
        for i in 0..20 {
            let mut job = sample_job();
            job.id = format!("job-{}", i);
            jobs.push(job);
        }

        let results = MatchEngine::default().evaluate_all(&profile, &jobs, now());
        let ids: Vec<&str> = results.iter().map(|m| m.job.id.as_str()).collect();
        let expected: Vec<String> = (0..20).map(|i| format!("job-{}", i)).collect();
        assert_eq!(ids, expected.iter().map(String::as_str).collect::<Vec<_>>());
    }

    #[test]
    fn test_entry_level_job_tags_senior_opportunity() {
        let profile = sample_profile();
        let mut job = sample_job();
        job.experience_level = ExperienceLevel::Entry;
        let result = MatchEngine::default().evaluate(&profile, &job, now());
        assert_eq!(result.components.experience.fit, LevelFit::Above);
        assert!(result
            .recommendation_tags
            .contains(&RecommendationTag::SeniorOpportunity));
    }
}
