use chrono::{DateTime, Duration, Utc};
use owo_colors::OwoColorize;
use std::io::IsTerminal;
use terminal_size::{terminal_size, Width};

use crate::model::{Confidence, JobMatch};

/// Check if stdout is a TTY (for auto-detecting color support)
pub fn should_use_colors() -> bool {
    std::io::stdout().is_terminal()
}

/// Width available for the feed table; `None` when piped, so titles stay whole
fn get_terminal_width() -> Option<usize> {
    terminal_size().map(|(Width(w), _)| w as usize)
}

/// Shorten a job title to `max_width` characters, ending in "..." when cut
fn truncate_title(title: &str, max_width: usize) -> String {
    let chars: Vec<char> = title.chars().collect();
    if chars.len() <= max_width {
        title.to_string()
    } else if max_width > 3 {
        format!("{}...", chars[..max_width - 3].iter().collect::<String>())
    } else {
        chars[..max_width].iter().collect()
    }
}

fn colored_score(score: u8, text: String) -> String {
    if score >= 80 {
        text.green().bold().to_string()
    } else if score >= 60 {
        text.yellow().bold().to_string()
    } else {
        text.red().to_string()
    }
}

fn colored_confidence(confidence: Confidence) -> String {
    let label = format!("{:<6}", confidence.as_str());
    match confidence {
        Confidence::High => label.green().to_string(),
        Confidence::Medium => label.yellow().to_string(),
        Confidence::Low => label.dimmed().to_string(),
    }
}

/// Format ranked matches as a table with columns: Index, Score, Confidence, Title, Company
/// No headers.
pub fn format_feed_table(matches: &[JobMatch], use_colors: bool) -> String {
    if matches.is_empty() {
        return "No matching jobs found.".to_string();
    }

    let term_width = get_terminal_width();

    // "99." + space + "100" + separator + "medium" + separator
    let separator = "  ";
    let fixed_prefix = 3 + 1 + 3 + separator.len() + 6 + separator.len();

    matches
        .iter()
        .enumerate()
        .map(|(idx, m)| {
            let index_str = format!("{:>2}.", idx + 1);
            let score_str = format!("{:>3}", m.overall_score);
            let company = &m.job.company.name;

            let fixed_width = fixed_prefix + separator.len() + company.chars().count();
            let title = match term_width {
                Some(width) if width > fixed_width + 10 => truncate_title(&m.job.title, width - fixed_width),
                Some(_) => truncate_title(&m.job.title, 20),
                None => m.job.title.clone(),
            };

            if use_colors {
                format!(
                    "{} {}{}{}{}{}{}{}",
                    index_str.dimmed(),
                    colored_score(m.overall_score, score_str),
                    separator,
                    colored_confidence(m.confidence),
                    separator,
                    title.bold(),
                    separator,
                    company.cyan()
                )
            } else {
                format!(
                    "{} {}{}{:<6}{}{}{}{}",
                    index_str,
                    score_str,
                    separator,
                    m.confidence.as_str(),
                    separator,
                    title,
                    separator,
                    company
                )
            }
        })
        .collect::<Vec<_>>()
        .join("\n")
}

/// Format matches as tab-separated values for scripting
/// Columns: score, confidence, job id, title, company (no headers, no colors)
pub fn format_tsv(matches: &[JobMatch]) -> String {
    matches
        .iter()
        .map(|m| {
            format!(
                "{}\t{}\t{}\t{}\t{}",
                m.overall_score,
                m.confidence.as_str(),
                m.job.id,
                m.job.title,
                m.job.company.name
            )
        })
        .collect::<Vec<_>>()
        .join("\n")
}

/// Format one match with its full breakdown (for the explain command)
pub fn format_match_detail(m: &JobMatch, now: DateTime<Utc>, use_colors: bool) -> String {
    let c = &m.components;
    let header = format!("{} at {}", m.job.title, m.job.company.name);
    let mut lines = vec![
        if use_colors {
            header.bold().to_string()
        } else {
            header
        },
        format!(
            "  Score: {} ({} confidence)",
            m.overall_score,
            m.confidence.as_str()
        ),
        format!("  Posted: {} ago", format_age(m.job.age(now))),
        format!(
            "  Skills: {} ({}/{} required)",
            c.skills.score, c.skills.total_matched, c.skills.total_required
        ),
    ];

    if !c.skills.skills_gap().is_empty() {
        lines.push(format!("    Gap: {}", c.skills.skills_gap().join(", ")));
    }
    lines.push(format!(
        "  Experience: {} ({} of {} years, {:?})",
        c.experience.score, c.experience.total_years, c.experience.required_years, c.experience.fit
    ));
    let distance = c
        .location
        .distance_km
        .map(|km| format!(", {:.0} km", km))
        .unwrap_or_default();
    lines.push(format!(
        "  Location: {} ({}{}, prefers {})",
        c.location.score,
        c.location.job_location,
        distance,
        c.location.preference.as_str()
    ));
    lines.push(format!("  Salary: {} ({:?})", c.salary.score, c.salary.alignment));
    lines.push(format!("  Preferences: {}", c.preferences.score));
    lines.push(format!("  Why: {}", m.reasoning));

    if !m.recommendation_tags.is_empty() {
        let tags: Vec<&str> = m.recommendation_tags.iter().map(|t| t.label()).collect();
        let tags = tags.join(" | ");
        lines.push(format!(
            "  Tags: {}",
            if use_colors { tags.magenta().to_string() } else { tags }
        ));
    }

    lines.join("\n")
}

/// Compact posting age for the detail view: "45m", "2h", "3d", "1w"
pub fn format_age(duration: Duration) -> String {
    let hours = duration.num_hours();
    let days = duration.num_days();
    let weeks = days / 7;

    if weeks >= 1 {
        format!("{}w", weeks)
    } else if days >= 1 {
        format!("{}d", days)
    } else if hours >= 1 {
        format!("{}h", hours)
    } else {
        let minutes = duration.num_minutes();
        if minutes >= 1 {
            format!("{}m", minutes)
        } else {
            "now".to_string()
        }
    }
}
