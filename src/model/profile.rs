use chrono::{Datelike, NaiveDate};
use serde::{Deserialize, Serialize};

use super::job::{CompanySize, JobType, SalaryRange};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SkillCategory {
    Technical,
    Soft,
    Industry,
    Language,
}

/// A self-reported skill. `level` runs from 1 (novice) to 5 (expert).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UserSkill {
    pub name: String,
    pub level: u8,
    pub category: SkillCategory,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WorkExperience {
    pub title: String,
    pub company: String,
    pub start_date: NaiveDate,
    /// None while the role is ongoing
    #[serde(default)]
    pub end_date: Option<NaiveDate>,
    #[serde(default)]
    pub skills: Vec<String>,
}

impl WorkExperience {
    /// Whole calendar months spent in the role, counting an ongoing role up to `today`.
    ///
    /// A partial trailing month does not count. An end date before the start
    /// date yields zero.
    pub fn months(&self, today: NaiveDate) -> u32 {
        let end = self.end_date.unwrap_or(today);
        if end <= self.start_date {
            return 0;
        }

        let mut months = (end.year() - self.start_date.year()) * 12 + end.month() as i32
            - self.start_date.month() as i32;
        if end.day() < self.start_date.day() {
            months -= 1;
        }
        months.max(0) as u32
    }
}

/// Informational only, never scored.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Education {
    pub institution: String,
    pub degree: String,
    #[serde(default)]
    pub field: Option<String>,
    #[serde(default)]
    pub graduation_year: Option<i32>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RemotePreference {
    Remote,
    Hybrid,
    Onsite,
    Flexible,
}

impl RemotePreference {
    pub fn as_str(self) -> &'static str {
        match self {
            RemotePreference::Remote => "remote",
            RemotePreference::Hybrid => "hybrid",
            RemotePreference::Onsite => "onsite",
            RemotePreference::Flexible => "flexible",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct JobPreferences {
    #[serde(default)]
    pub job_types: Vec<JobType>,
    #[serde(default)]
    pub industries: Vec<String>,
    #[serde(default)]
    pub company_sizes: Vec<CompanySize>,
    pub remote: RemotePreference,
}

impl Default for JobPreferences {
    fn default() -> Self {
        Self {
            job_types: Vec::new(),
            industries: Vec::new(),
            company_sizes: Vec::new(),
            remote: RemotePreference::Flexible,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UserProfile {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default)]
    pub location: String,
    #[serde(default)]
    pub skills: Vec<UserSkill>,
    #[serde(default)]
    pub experience: Vec<WorkExperience>,
    #[serde(default)]
    pub education: Vec<Education>,
    #[serde(default)]
    pub preferences: JobPreferences,
    #[serde(default)]
    pub salary_expectation: Option<SalaryRange>,
}
