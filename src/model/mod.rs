mod job;
mod profile;
mod result;

pub use job::{Company, CompanySize, ExperienceLevel, Job, JobType, SalaryPeriod, SalaryRange};
pub use profile::{
    Education, JobPreferences, RemotePreference, SkillCategory, UserProfile, UserSkill,
    WorkExperience,
};
pub use result::{
    Confidence, ExperienceMatch, JobMatch, LevelFit, LocationMatch, MatchComponents,
    MatchedSkill, PreferencesMatch, RecommendationTag, SalaryAlignment, SalaryMatch,
    SkillsMatch, YearlyRange,
};
