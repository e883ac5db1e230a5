use crate::model::{Job, LevelFit, MatchedSkill, SkillsMatch, UserSkill};

use super::{clamp_score, similarity};

/// Level assumed for a preferred skill, independent of seniority
const PREFERRED_SKILL_LEVEL: u8 = 3;
const PREFERRED_BONUS_PER_SKILL: f64 = 5.0;
const PREFERRED_BONUS_CAP: f64 = 20.0;
const LEVEL_GAP_PENALTY: f64 = 5.0;
const LEVEL_GAP_PENALTY_CAP: f64 = 30.0;

/// Score how well a profile's skills cover a job's required and preferred skills.
///
/// Required skills drive the base score. Preferred skills only ever add a
/// bonus and are never reported missing. Matched skills below the expected
/// level cost a capped penalty.
pub fn match_skills(user_skills: &[UserSkill], job: &Job, fuzzy_threshold: f64) -> SkillsMatch {
    let required_level = job.experience_level.expected_skill_level();
    let mut matched_skills = Vec::new();
    let mut missing_skills = Vec::new();

    for required in &job.required_skills {
        match find_user_skill(user_skills, required, fuzzy_threshold) {
            Some(user_skill) => matched_skills.push(matched(required, user_skill, required_level, false)),
            None => missing_skills.push(required.clone()),
        }
    }
    let total_matched = matched_skills.len();

    for preferred in &job.preferred_skills {
        if matched_skills.iter().any(|m| same_name(&m.skill, preferred)) {
            continue;
        }
        if let Some(user_skill) = find_user_skill(user_skills, preferred, fuzzy_threshold) {
            matched_skills.push(matched(preferred, user_skill, PREFERRED_SKILL_LEVEL, true));
        }
    }

    let total_required = job.required_skills.len();
    let base = if total_required == 0 {
        0.0
    } else {
        total_matched as f64 / total_required as f64 * 100.0
    };

    let preferred_matched = matched_skills.iter().filter(|m| m.preferred).count();
    let bonus = (PREFERRED_BONUS_PER_SKILL * preferred_matched as f64).min(PREFERRED_BONUS_CAP);

    let level_gap: i32 = matched_skills
        .iter()
        .filter(|m| m.fit == LevelFit::Below)
        .map(|m| i32::from(m.required_level) - i32::from(m.user_level))
        .sum();
    let penalty = (LEVEL_GAP_PENALTY * f64::from(level_gap)).min(LEVEL_GAP_PENALTY_CAP);

    SkillsMatch {
        score: clamp_score(base + bonus - penalty),
        matched_skills,
        missing_skills,
        total_required,
        total_matched,
    }
}

/// Exact (case-insensitive) name match first, then the first fuzzy match above the threshold
fn find_user_skill<'a>(
    user_skills: &'a [UserSkill],
    name: &str,
    fuzzy_threshold: f64,
) -> Option<&'a UserSkill> {
    if let Some(exact) = user_skills.iter().find(|s| same_name(&s.name, name)) {
        return Some(exact);
    }

    let fuzzy = user_skills
        .iter()
        .find(|s| similarity(&s.name, name) > fuzzy_threshold);
    if let Some(skill) = fuzzy {
        tracing::trace!(skill = name, matched = %skill.name, "fuzzy skill match");
    }
    fuzzy
}

fn matched(skill: &str, user_skill: &UserSkill, required_level: u8, preferred: bool) -> MatchedSkill {
    MatchedSkill {
        skill: skill.to_string(),
        user_skill: user_skill.name.clone(),
        user_level: user_skill.level,
        required_level,
        fit: classify(user_skill.level, required_level),
        preferred,
    }
}

fn classify(user_level: u8, required_level: u8) -> LevelFit {
    match user_level.cmp(&required_level) {
        std::cmp::Ordering::Equal => LevelFit::Exact,
        std::cmp::Ordering::Greater => LevelFit::Above,
        std::cmp::Ordering::Less => LevelFit::Below,
    }
}

fn same_name(a: &str, b: &str) -> bool {
    a.to_lowercase() == b.to_lowercase()
}
