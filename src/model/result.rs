use serde::Serialize;

use super::job::Job;
use super::profile::{RemotePreference, WorkExperience};

/// How a candidate's level compares to what is asked for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum LevelFit {
    Exact,
    Above,
    Below,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MatchedSkill {
    /// Skill name as the job spells it
    pub skill: String,
    /// Skill name as the profile spells it
    pub user_skill: String,
    pub user_level: u8,
    pub required_level: u8,
    pub fit: LevelFit,
    pub preferred: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SkillsMatch {
    pub score: u8,
    pub matched_skills: Vec<MatchedSkill>,
    pub missing_skills: Vec<String>,
    pub total_required: usize,
    /// Matched required skills only
    pub total_matched: usize,
}

impl SkillsMatch {
    /// Required skills the profile lacks
    pub fn skills_gap(&self) -> &[String] {
        &self.missing_skills
    }

    pub fn preferred_matched(&self) -> usize {
        self.matched_skills.iter().filter(|m| m.preferred).count()
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ExperienceMatch {
    pub score: u8,
    pub total_years: f64,
    pub required_years: f64,
    pub fit: LevelFit,
    pub relevant_experience: Vec<WorkExperience>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct LocationMatch {
    pub score: u8,
    pub distance_km: Option<f64>,
    pub remote_compatible: bool,
    pub preference: RemotePreference,
    pub job_location: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum SalaryAlignment {
    Within,
    Above,
    Below,
    Unknown,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct YearlyRange {
    pub min: f64,
    pub max: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SalaryMatch {
    pub score: u8,
    pub alignment: SalaryAlignment,
    pub expected_yearly: Option<YearlyRange>,
    pub offered_yearly: Option<YearlyRange>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PreferencesMatch {
    pub score: u8,
    pub job_type: bool,
    pub industry: bool,
    pub company_size: bool,
    pub remote: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MatchComponents {
    pub skills: SkillsMatch,
    pub experience: ExperienceMatch,
    pub location: LocationMatch,
    pub salary: SalaryMatch,
    pub preferences: PreferencesMatch,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Confidence {
    High,
    Medium,
    Low,
}

impl Confidence {
    pub fn as_str(self) -> &'static str {
        match self {
            Confidence::High => "high",
            Confidence::Medium => "medium",
            Confidence::Low => "low",
        }
    }
}

/// Short label attached to a match for quick scanning.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum RecommendationTag {
    #[serde(rename = "Perfect Skills Match")]
    PerfectSkillsMatch,
    #[serde(rename = "Strong Skills Match")]
    StrongSkillsMatch,
    #[serde(rename = "Senior Opportunity")]
    SeniorOpportunity,
    #[serde(rename = "Growth Opportunity")]
    GrowthOpportunity,
    #[serde(rename = "Remote Friendly")]
    RemoteFriendly,
    #[serde(rename = "High Compensation")]
    HighCompensation,
    #[serde(rename = "Recently Posted")]
    RecentlyPosted,
}

impl RecommendationTag {
    pub fn label(self) -> &'static str {
        match self {
            RecommendationTag::PerfectSkillsMatch => "Perfect Skills Match",
            RecommendationTag::StrongSkillsMatch => "Strong Skills Match",
            RecommendationTag::SeniorOpportunity => "Senior Opportunity",
            RecommendationTag::GrowthOpportunity => "Growth Opportunity",
            RecommendationTag::RemoteFriendly => "Remote Friendly",
            RecommendationTag::HighCompensation => "High Compensation",
            RecommendationTag::RecentlyPosted => "Recently Posted",
        }
    }
}

impl std::fmt::Display for RecommendationTag {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

/// The scored, explained result for one (profile, job) pair.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct JobMatch<'a> {
    pub job: &'a Job,
    pub overall_score: u8,
    pub confidence: Confidence,
    pub components: MatchComponents,
    pub reasoning: String,
    pub recommendation_tags: Vec<RecommendationTag>,
}
