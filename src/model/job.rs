use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum JobType {
    FullTime,
    PartTime,
    Contract,
    Internship,
    Temporary,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CompanySize {
    Startup,
    Small,
    Medium,
    Large,
    Enterprise,
}

/// Seniority a posting asks for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ExperienceLevel {
    Entry,
    Mid,
    Senior,
    Lead,
    Executive,
}

impl ExperienceLevel {
    /// Skill level (1-5) a required skill is assumed to need at this seniority
    pub fn expected_skill_level(self) -> u8 {
        match self {
            ExperienceLevel::Entry => 2,
            ExperienceLevel::Mid => 3,
            ExperienceLevel::Senior => 4,
            ExperienceLevel::Lead | ExperienceLevel::Executive => 5,
        }
    }

    /// Years of experience the level asks for
    pub fn required_years(self) -> f64 {
        match self {
            ExperienceLevel::Entry => 0.0,
            ExperienceLevel::Mid => 3.0,
            ExperienceLevel::Senior => 6.0,
            ExperienceLevel::Lead => 10.0,
            ExperienceLevel::Executive => 15.0,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            ExperienceLevel::Entry => "entry",
            ExperienceLevel::Mid => "mid",
            ExperienceLevel::Senior => "senior",
            ExperienceLevel::Lead => "lead",
            ExperienceLevel::Executive => "executive",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SalaryPeriod {
    Hourly,
    Monthly,
    Yearly,
}

impl SalaryPeriod {
    /// Multiplier that converts an amount in this period to a yearly amount.
    /// Hourly assumes 40 hours a week, 52 weeks a year.
    pub fn yearly_factor(self) -> f64 {
        match self {
            SalaryPeriod::Hourly => 2080.0,
            SalaryPeriod::Monthly => 12.0,
            SalaryPeriod::Yearly => 1.0,
        }
    }
}

/// A salary band. `min <= max` is assumed, not enforced.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SalaryRange {
    pub min: f64,
    pub max: f64,
    pub currency: String,
    pub period: SalaryPeriod,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Company {
    pub name: String,
    pub size: CompanySize,
    pub industry: String,
    #[serde(default)]
    pub location: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Job {
    pub id: String,
    pub title: String,
    pub company: Company,
    pub location: String,
    #[serde(default)]
    pub is_remote: bool,
    #[serde(default)]
    pub is_hybrid: bool,
    pub job_type: JobType,
    pub experience_level: ExperienceLevel,
    pub required_skills: Vec<String>,
    #[serde(default)]
    pub preferred_skills: Vec<String>,
    #[serde(default)]
    pub salary_range: Option<SalaryRange>,
    pub posted_date: DateTime<Utc>,
}

impl Job {
    /// Whether the posting allows working away from the office at least part time
    pub fn is_remote_compatible(&self) -> bool {
        self.is_remote || self.is_hybrid
    }

    /// Time since the posting went up, relative to `now`
    pub fn age(&self, now: DateTime<Utc>) -> chrono::Duration {
        now - self.posted_date
    }
}
