use crate::model::{Job, JobPreferences, PreferencesMatch, RemotePreference};

const POINTS_PER_CHECK: u8 = 25;

/// Score how many of the candidate's four discrete preferences a job meets.
pub fn match_preferences(preferences: &JobPreferences, job: &Job) -> PreferencesMatch {
    let job_type = preferences.job_types.contains(&job.job_type);
    let industry = preferences
        .industries
        .iter()
        .any(|i| i.eq_ignore_ascii_case(&job.company.industry));
    let company_size = preferences.company_sizes.contains(&job.company.size);
    let remote = match preferences.remote {
        RemotePreference::Remote => job.is_remote,
        RemotePreference::Hybrid => job.is_hybrid || job.is_remote,
        RemotePreference::Onsite => !job.is_remote,
        RemotePreference::Flexible => true,
    };

    let met = [job_type, industry, company_size, remote]
        .iter()
        .filter(|&&ok| ok)
        .count() as u8;

    PreferencesMatch {
        score: POINTS_PER_CHECK * met,
        job_type,
        industry,
        company_size,
        remote,
    }
}
