use crate::geo::DistanceProvider;
use crate::model::{Job, LocationMatch, RemotePreference, UserProfile};

use super::{clamp_score, similarity};

/// Score for a remote-only candidate looking at an office-bound job
const REMOTE_MISMATCH_SCORE: u8 = 20;

/// Score geographic and remote-work compatibility between a profile and a job.
///
/// Remote-compatible jobs satisfy everyone except candidates who insist on
/// working onsite. Otherwise the distance provider is asked; when it cannot
/// answer, the two location strings are compared as text.
pub fn match_location<D>(profile: &UserProfile, job: &Job, distance: &D) -> LocationMatch
where
    D: DistanceProvider + ?Sized,
{
    let remote_compatible = job.is_remote_compatible();
    let preference = profile.preferences.remote;

    let mut distance_km = None;
    let score = if remote_compatible && preference != RemotePreference::Onsite {
        100
    } else if preference == RemotePreference::Remote && !remote_compatible {
        REMOTE_MISMATCH_SCORE
    } else {
        distance_km = distance
            .distance_km(&profile.location, &job.location)
            .filter(|km| km.is_finite());
        match distance_km {
            Some(km) => distance_score(km),
            None => {
                tracing::debug!(
                    from = %profile.location,
                    to = %job.location,
                    "distance unknown, comparing location text"
                );
                clamp_score(similarity(&profile.location, &job.location) * 100.0)
            }
        }
    };

    LocationMatch {
        score,
        distance_km,
        remote_compatible,
        preference,
        job_location: job.location.clone(),
    }
}

/// Map a commute distance onto fixed score tiers
pub fn distance_score(km: f64) -> u8 {
    if km <= 10.0 {
        100
    } else if km <= 25.0 {
        80
    } else if km <= 50.0 {
        60
    } else if km <= 100.0 {
        40
    } else {
        20
    }
}
