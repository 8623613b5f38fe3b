//! Scoring Engine: deterministic role-fit score with structured diagnostics.
//!
//! Pure function of its inputs: no I/O, no randomness, no failure modes.

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::analysis::roles::resolve_role_profile;
use crate::analysis::sections::{Section, SectionMap};
use crate::analysis::signals::has_signal;

pub const REASON_MISSING_CORE: &str =
    "Core role expectations are present only partially or lack clear framing.";
pub const REASON_WEAK_SIGNALS: &str =
    "Advanced role signals are present but not explicitly articulated.";
pub const REASON_SKILLS_OVERLOADED: &str =
    "Skills section is overloaded and may dilute ATS signals.";
pub const REASON_THIN_PROJECTS: &str = "Projects could benefit from deeper applied context.";

const MUST_HAVE_PENALTY: i32 = 12;
const WEAK_SIGNAL_PENALTY: i32 = 4;
const WEAK_SIGNAL_PENALTY_CAP: i32 = 16;
const SKILLS_OVERLOAD_CHARS: usize = 800;
const SKILLS_OVERLOAD_PENALTY: i32 = 8;
const THIN_PROJECTS_WORDS: usize = 120;
const THIN_PROJECTS_PENALTY: i32 = 6;
/// Scores above this with any recorded reason are forced to `GUARDRAIL_SCORE`.
const GUARDRAIL_CEILING: i32 = 85;
const GUARDRAIL_SCORE: i32 = 78;

/// Competency names split by detection outcome.
///
/// `strengths` holds detected must-haves followed by detected strong signals.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Diagnostics {
    pub missing_must_have: Vec<String>,
    pub weak_signals: Vec<String>,
    pub strengths: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ScoreOutcome {
    /// 0 – 100
    pub score: u32,
    /// Distinct reasons in trigger order.
    pub reasons: Vec<String>,
    pub diagnostics: Diagnostics,
}

/// Scores a resume against the profile resolved from `target_role`.
///
/// Algorithm:
/// 1. Start at 100.
/// 2. Each undetected must-have: −12 (one reason if any are missing).
/// 3. Undetected strong signals: −min(4 × count, 16) (one reason if any).
/// 4. Skills body over 800 chars: −8. Projects present with under 120 words: −6.
/// 5. Any reason and score above 85 → exactly 78.
/// 6. Floor at 0.
pub fn score_resume(resume_text: &str, sections: &SectionMap, target_role: &str) -> ScoreOutcome {
    let profile = resolve_role_profile(target_role);
    let full_text = resume_text.to_lowercase();

    let mut score: i32 = 100;
    let mut reasons = Vec::new();
    let mut diagnostics = Diagnostics::default();

    for &item in profile.must_have {
        if has_signal(&full_text, item) {
            diagnostics.strengths.push(item.to_string());
        } else {
            diagnostics.missing_must_have.push(item.to_string());
            score -= MUST_HAVE_PENALTY;
        }
    }

    if !diagnostics.missing_must_have.is_empty() {
        reasons.push(REASON_MISSING_CORE.to_string());
    }

    for &signal in profile.strong_signals {
        if has_signal(&full_text, signal) {
            diagnostics.strengths.push(signal.to_string());
        } else {
            diagnostics.weak_signals.push(signal.to_string());
        }
    }

    if !diagnostics.weak_signals.is_empty() {
        let weak = diagnostics.weak_signals.len() as i32;
        score -= (weak * WEAK_SIGNAL_PENALTY).min(WEAK_SIGNAL_PENALTY_CAP);
        reasons.push(REASON_WEAK_SIGNALS.to_string());
    }

    // Char count, not bytes.
    if sections.text(Section::Skills).chars().count() > SKILLS_OVERLOAD_CHARS {
        score -= SKILLS_OVERLOAD_PENALTY;
        reasons.push(REASON_SKILLS_OVERLOADED.to_string());
    }

    if let Some(projects) = sections.get(Section::Projects) {
        if projects.split_whitespace().count() < THIN_PROJECTS_WORDS {
            score -= THIN_PROJECTS_PENALTY;
            reasons.push(REASON_THIN_PROJECTS.to_string());
        }
    }

    debug!(
        profile = profile.key,
        pre_guardrail = score,
        reasons = reasons.len(),
        "Computed role-fit score"
    );

    if !reasons.is_empty() && score > GUARDRAIL_CEILING {
        score = GUARDRAIL_SCORE;
    }

    ScoreOutcome {
        score: score.max(0) as u32,
        reasons,
        diagnostics,
    }
}
