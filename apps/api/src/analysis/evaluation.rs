//! Secondary measures: role-independent ATS score, role readiness, and role-fit ranking.

use serde::Serialize;

use crate::analysis::roles::ROLE_PROFILES;
use crate::analysis::scoring::Diagnostics;
use crate::analysis::sections::{Section, SectionMap};
use crate::analysis::signals::has_literal_signal;

const ATS_FLOOR: i32 = 40;
const READINESS_FLOOR: i32 = 30;
const READINESS_CEILING: i32 = 95;
const MAX_RECOMMENDED_ROLES: usize = 3;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Evaluation {
    pub ats_score: u32,
    pub role_readiness_score: u32,
    pub recommended_roles: Vec<String>,
    pub primary_role: String,
}

/// Structure and formatting quality, independent of role. Never below 40.
pub fn compute_ats_score(sections: &SectionMap) -> u32 {
    let mut score: i32 = 100;

    if sections.text(Section::Skills).chars().count() > 900 {
        score -= 15;
    }
    if sections.is_empty_or_missing(Section::Experience) {
        score -= 20;
    }
    if sections.is_empty_or_missing(Section::Projects) {
        score -= 10;
    }

    // Digit count is a proxy for quantified achievements. Any Unicode digit
    // counts, so fullwidth numerals from CJK-typeset resumes are included.
    let digits: usize = sections
        .bodies()
        .map(|body| body.chars().filter(|c| c.is_numeric()).count())
        .sum();
    if digits < 10 {
        score -= 10;
    }

    if sections.is_empty_or_missing(Section::Education) {
        score -= 5;
    }

    score.max(ATS_FLOOR) as u32
}

/// ATS score adjusted by role diagnostics, clamped to [30, 95].
///
/// `base_score` is the ATS score from [`compute_ats_score`], not the role-fit
/// score.
pub fn compute_role_readiness(diagnostics: &Diagnostics, base_score: u32) -> u32 {
    let mut score = base_score as i32;

    score -= diagnostics.missing_must_have.len() as i32 * 10;
    score -= diagnostics.weak_signals.len() as i32 * 4;
    score += (diagnostics.strengths.len() as i32 * 2).min(8);

    score.clamp(READINESS_FLOOR, READINESS_CEILING) as u32
}

/// Affinity of the resume to one registry profile: 3 per literal must-have,
/// 2 per literal strong signal. The implicit-signal table is not consulted.
fn role_affinity(text_lower: &str, must_have: &[&str], strong_signals: &[&str]) -> u32 {
    let must = must_have
        .iter()
        .filter(|item| has_literal_signal(text_lower, item))
        .count() as u32;
    let strong = strong_signals
        .iter()
        .filter(|item| has_literal_signal(text_lower, item))
        .count() as u32;
    must * 3 + strong * 2
}

/// Ranks every registry role (generic included) by affinity and returns up to
/// three role keys. Ties keep registry order.
pub fn recommend_best_roles(resume_text: &str) -> Vec<String> {
    let text = resume_text.to_lowercase();

    let mut role_scores: Vec<(&str, u32)> = ROLE_PROFILES
        .iter()
        .map(|p| (p.key, role_affinity(&text, p.must_have, p.strong_signals)))
        .collect();

    // Stable sort preserves registry order among equal scores.
    role_scores.sort_by(|a, b| b.1.cmp(&a.1));

    role_scores
        .into_iter()
        .take(MAX_RECOMMENDED_ROLES)
        .map(|(key, _)| key.to_string())
        .collect()
}

/// Runs ATS scoring, readiness, and role ranking for one resume.
pub fn evaluate_resume(
    resume_text: &str,
    sections: &SectionMap,
    diagnostics: &Diagnostics,
    target_role: &str,
) -> Evaluation {
    let ats_score = compute_ats_score(sections);
    let role_readiness_score = compute_role_readiness(diagnostics, ats_score);

    Evaluation {
        ats_score,
        role_readiness_score,
        recommended_roles: recommend_best_roles(resume_text),
        primary_role: target_role.to_string(),
    }
}
