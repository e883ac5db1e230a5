use crate::model::{Job, LevelFit, MatchComponents, RemotePreference, SalaryAlignment};

/// Gaps named in the reasoning before the rest are left out
const MAX_NAMED_GAPS: usize = 3;

/// Build the human-readable explanation of a match.
///
/// Sentences appear in a fixed order (skills, experience, location, salary)
/// regardless of which component scored highest. Location and salary only
/// speak up when they are a selling point.
pub fn build_reasoning(components: &MatchComponents, job: &Job) -> String {
    let mut sentences = vec![
        skills_sentence(components),
        experience_sentence(components, job),
    ];

    let location = &components.location;
    if location.score >= 90 {
        if location.remote_compatible && location.preference != RemotePreference::Onsite {
            sentences.push("The role is remote-friendly, so location is not a constraint".to_string());
        } else {
            sentences.push(format!("{} is a great location match for you", location.job_location));
        }
    }

    match components.salary.alignment {
        SalaryAlignment::Above => sentences.push("The salary exceeds your expectations".to_string()),
        SalaryAlignment::Within => sentences.push("The salary is within your expected range".to_string()),
        SalaryAlignment::Below | SalaryAlignment::Unknown => {}
    }

    format!("{}.", sentences.join(". "))
}

fn skills_sentence(components: &MatchComponents) -> String {
    let skills = &components.skills;
    if skills.score >= 80 {
        format!(
            "Strong skills match: you have {} of {} required skills",
            skills.total_matched, skills.total_required
        )
    } else if skills.score >= 60 {
        format!(
            "Good skills match with {} of {} required skills",
            skills.total_matched, skills.total_required
        )
    } else if skills.missing_skills.is_empty() {
        "This role is an opportunity to build new skills".to_string()
    } else {
        let named: Vec<&str> = skills
            .missing_skills
            .iter()
            .take(MAX_NAMED_GAPS)
            .map(String::as_str)
            .collect();
        format!(
            "Picking up {} would close the skills gap, a chance to grow in this role",
            named.join(", ")
        )
    }
}

fn experience_sentence(components: &MatchComponents, job: &Job) -> String {
    let experience = &components.experience;
    let level = job.experience_level.as_str();
    let years = format_years(experience.total_years);

    match experience.fit {
        LevelFit::Exact => format!(
            "Your {} of experience is a perfect fit for this {}-level role",
            years, level
        ),
        LevelFit::Above => format!(
            "With {} of experience you are overqualified, which positions you well for a leadership angle",
            years
        ),
        LevelFit::Below => format!(
            "This {}-level role is a growth opportunity: it asks for {} and you have {}",
            level,
            format_years(experience.required_years),
            years
        ),
    }
}

/// "1 year", "4 years", "2.5 years"
fn format_years(years: f64) -> String {
    let number = if years.fract() == 0.0 {
        format!("{:.0}", years)
    } else {
        format!("{:.1}", years)
    };
    if years == 1.0 {
        format!("{} year", number)
    } else {
        format!("{} years", number)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{
        Company, CompanySize, ExperienceLevel, ExperienceMatch, JobType, LocationMatch,
        PreferencesMatch, SalaryMatch, SkillsMatch,
    };
    use chrono::{TimeZone, Utc};

    fn sample_job() -> Job {
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
            is_remote: false,
            is_hybrid: false,
            job_type: JobType::FullTime,
            experience_level: ExperienceLevel::Mid,
            required_skills: vec![],
            preferred_skills: vec![],
            salary_range: None,
            posted_date: Utc.with_ymd_and_hms(2024, 1, 10, 0, 0, 0).unwrap(),
        }
    }

    fn components(skills: u8, fit: LevelFit, location: u8, alignment: SalaryAlignment) -> MatchComponents {
        MatchComponents {
            skills: SkillsMatch {
                score: skills,
                matched_skills: vec![],
                missing_skills: vec!["AWS".to_string()],
                total_required: 3,
                total_matched: 2,
            },
            experience: ExperienceMatch {
                score: 60,
                total_years: 4.0,
                required_years: 3.0,
                fit,
                relevant_experience: vec![],
            },
            location: LocationMatch {
                score: location,
                distance_km: None,
                remote_compatible: false,
                preference: RemotePreference::Onsite,
                job_location: "Berlin".to_string(),
            },
            salary: SalaryMatch {
                score: 50,
                alignment,
                expected_yearly: None,
                offered_yearly: None,
            },
            preferences: PreferencesMatch {
                score: 0,
                job_type: false,
                industry: false,
                company_size: false,
                remote: false,
            },
        }
    }

    #[test]
    fn test_full_reasoning_in_fixed_order() {
        let reasoning = build_reasoning(
            &components(85, LevelFit::Exact, 100, SalaryAlignment::Within),
            &sample_job(),
        );
        assert_eq!(
            reasoning,
            "Strong skills match: you have 2 of 3 required skills. \
             Your 4 years of experience is a perfect fit for this mid-level role. \
             Berlin is a great location match for you. \
             The salary is within your expected range."
        );
    }

    #[test]
    fn test_low_location_and_unknown_salary_omitted() {
        let reasoning = build_reasoning(
            &components(65, LevelFit::Below, 40, SalaryAlignment::Unknown),
            &sample_job(),
        );
        assert!(reasoning.starts_with("Good skills match with 2 of 3 required skills. "));
        assert!(reasoning.contains("growth opportunity"));
        assert!(!reasoning.contains("location"));
        assert!(!reasoning.contains("salary"));
        assert!(reasoning.ends_with('.'));
    }

    #[test]
    fn test_skill_gap_framed_as_opportunity() {
        let reasoning = build_reasoning(
            &components(40, LevelFit::Above, 0, SalaryAlignment::Below),
            &sample_job(),
        );
        assert!(reasoning.starts_with("Picking up AWS would close the skills gap"));
        assert!(reasoning.contains("overqualified"));
        assert!(!reasoning.contains("salary"));
    }

    #[test]
    fn test_remote_friendly_phrasing() {
        let mut c = components(85, LevelFit::Exact, 100, SalaryAlignment::Above);
        c.location.remote_compatible = true;
        c.location.preference = RemotePreference::Remote;
        let reasoning = build_reasoning(&c, &sample_job());
        assert!(reasoning.contains("remote-friendly"));
        assert!(reasoning.ends_with("The salary exceeds your expectations."));
    }

    #[test]
    fn test_format_years() {
        assert_eq!(format_years(1.0), "1 year");
        assert_eq!(format_years(4.0), "4 years");
        assert_eq!(format_years(2.5), "2.5 years");
        assert_eq!(format_years(0.0), "0 years");
    }
}
