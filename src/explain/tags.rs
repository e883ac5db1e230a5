use chrono::{DateTime, Duration, Utc};

use crate::model::{Job, LevelFit, MatchComponents, RecommendationTag, SalaryAlignment};

/// Tag a match with short labels for quick scanning.
///
/// Each tag is decided on its own; only the two skill tags and the two
/// experience tags exclude each other.
pub fn recommendation_tags(
    components: &MatchComponents,
    job: &Job,
    now: DateTime<Utc>,
    recent_window: Duration,
) -> Vec<RecommendationTag> {
    let mut tags = Vec::new();

    if components.skills.score >= 90 {
        tags.push(RecommendationTag::PerfectSkillsMatch);
    } else if components.skills.score >= 70 {
        tags.push(RecommendationTag::StrongSkillsMatch);
    }

    match components.experience.fit {
        LevelFit::Above => tags.push(RecommendationTag::SeniorOpportunity),
        LevelFit::Below => tags.push(RecommendationTag::GrowthOpportunity),
        LevelFit::Exact => {}
    }

    if components.location.remote_compatible {
        tags.push(RecommendationTag::RemoteFriendly);
    }

    if components.salary.alignment == SalaryAlignment::Above {
        tags.push(RecommendationTag::HighCompensation);
    }

    if job.age(now) <= recent_window {
        tags.push(RecommendationTag::RecentlyPosted);
    }

    tags
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{
        Company, CompanySize, ExperienceLevel, ExperienceMatch, JobType, LocationMatch,
        PreferencesMatch, RemotePreference, SalaryMatch, SkillsMatch,
    };
    use chrono::TimeZone;

    fn now() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2024, 1, 15, 0, 0, 0).unwrap()
    }

    fn sample_job(posted_days_ago: i64) -> Job {
        Job {
            id: "job-1".to_string(),
            title: "Engineer".to_string(),
            company: Company {
                name: "Acme".to_string(),
                size: CompanySize::Medium,
                industry: "Software".to_string(),
                location: "Berlin".to_string(),
            },
            location: "Berlin".to_string(),
            is_remote: true,
            is_hybrid: false,
            job_type: JobType::FullTime,
            experience_level: ExperienceLevel::Mid,
            required_skills: vec![],
            preferred_skills: vec![],
            salary_range: None,
            posted_date: now() - Duration::days(posted_days_ago),
        }
    }

    fn components(skills: u8, fit: LevelFit, remote: bool, alignment: SalaryAlignment) -> MatchComponents {
        MatchComponents {
            skills: SkillsMatch {
                score: skills,
                matched_skills: vec![],
                missing_skills: vec![],
                total_required: 0,
                total_matched: 0,
            },
            experience: ExperienceMatch {
                score: 50,
                total_years: 3.0,
                required_years: 3.0,
                fit,
                relevant_experience: vec![],
            },
            location: LocationMatch {
                score: 100,
                distance_km: None,
                remote_compatible: remote,
                preference: RemotePreference::Flexible,
                job_location: "Berlin".to_string(),
            },
            salary: SalaryMatch {
                score: 82,
                alignment,
                expected_yearly: None,
                offered_yearly: None,
            },
            preferences: PreferencesMatch {
                score: 100,
                job_type: true,
                industry: true,
                company_size: true,
                remote: true,
            },
        }
    }

    #[test]
    fn test_all_tags() {
        let tags = recommendation_tags(
            &components(95, LevelFit::Above, true, SalaryAlignment::Above),
            &sample_job(1),
            now(),
            Duration::days(7),
        );
        assert_eq!(
            tags,
            vec![
                RecommendationTag::PerfectSkillsMatch,
                RecommendationTag::SeniorOpportunity,
                RecommendationTag::RemoteFriendly,
                RecommendationTag::HighCompensation,
                RecommendationTag::RecentlyPosted,
            ]
        );
    }

    #[test]
    fn test_strong_skills_and_growth() {
        let tags = recommendation_tags(
            &components(75, LevelFit::Below, false, SalaryAlignment::Within),
            &sample_job(30),
            now(),
            Duration::days(7),
        );
        assert_eq!(
            tags,
            vec![
                RecommendationTag::StrongSkillsMatch,
                RecommendationTag::GrowthOpportunity,
            ]
        );
    }

    #[test]
    fn test_no_tags() {
        let tags = recommendation_tags(
            &components(60, LevelFit::Exact, false, SalaryAlignment::Unknown),
            &sample_job(8),
            now(),
            Duration::days(7),
        );
        assert!(tags.is_empty());
    }

    #[test]
    fn test_recent_window_boundary() {
        let c = components(0, LevelFit::Exact, false, SalaryAlignment::Unknown);
        let tags = recommendation_tags(&c, &sample_job(7), now(), Duration::days(7));
        assert_eq!(tags, vec![RecommendationTag::RecentlyPosted]);
    }

    #[test]
    fn test_tag_labels_serialize() {
        let json = serde_json::to_string(&RecommendationTag::RemoteFriendly).unwrap();
        assert_eq!(json, "\"Remote Friendly\"");
        assert_eq!(RecommendationTag::HighCompensation.to_string(), "High Compensation");
    }
}
