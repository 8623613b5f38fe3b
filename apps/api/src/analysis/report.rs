//! Final report: orchestrates the full analysis pipeline.
//!
//! Flow: split_into_sections → score_resume → evaluate_resume →
//!       explanations (oracle) → improvements → project bullet rewrites.
//!
//! Everything up to the explanations is deterministic. Oracle calls run
//! sequentially and any failure aborts the report.

use chrono::{DateTime, Utc};
use serde::Serialize;
use tracing::info;
use uuid::Uuid;

use crate::analysis::evaluation::{evaluate_resume, Evaluation};
use crate::analysis::explain::{
    explain_ats_diagnostics, explain_rejection, rewrite_resume_bullets, summarize_strengths,
};
use crate::analysis::improvements::{generate_improvements, ImprovementSuggestion};
use crate::analysis::prompts::NO_REWRITE_NEEDED_TEXT;
use crate::analysis::roles::resolve_role_profile;
use crate::analysis::scoring::{score_resume, ScoreOutcome};
use crate::analysis::sections::{split_into_sections, Section, SectionMap};
use crate::errors::AppError;
use crate::llm_client::Oracle;

/// Separator between project bullets in extracted text.
const PROJECT_BULLET_SEPARATOR: char = '–';
const MIN_BULLET_CHARS: usize = 40;
const MAX_REWRITE_BULLETS: usize = 4;

/// Deterministic portion of an analysis. No oracle involvement.
#[derive(Debug, Clone, Serialize)]
pub struct DeterministicAnalysis {
    pub target_role: String,
    pub resolved_profile: &'static str,
    pub sections: SectionMap,
    #[serde(flatten)]
    pub outcome: ScoreOutcome,
    pub evaluation: Evaluation,
    pub improvements: Vec<ImprovementSuggestion>,
}

/// Everything the presentation layer renders for one analysis.
#[derive(Debug, Clone, Serialize)]
pub struct FinalReport {
    pub analysis_id: Uuid,
    pub generated_at: DateTime<Utc>,
    pub target_role: String,

    // Scores
    pub ats_score: u32,
    pub role_fit_score: u32,
    pub role_readiness_score: u32,
    pub reasons: Vec<String>,

    // Fit
    pub recommended_roles: Vec<String>,

    // Explanations
    pub rejection_explanation: String,
    pub strengths_summary: String,
    pub ats_diagnostics: String,

    // Gaps
    pub missing_core_expectations: Vec<String>,
    pub weak_signals: Vec<String>,
    pub strengths: Vec<String>,

    pub improvements: Vec<ImprovementSuggestion>,
    pub rewritten_bullets: Vec<String>,
}

/// Runs every deterministic stage for one resume.
pub fn analyze(resume_text: &str, target_role: &str) -> DeterministicAnalysis {
    let sections = split_into_sections(resume_text);
    let outcome = score_resume(resume_text, &sections, target_role);
    let evaluation = evaluate_resume(resume_text, &sections, &outcome.diagnostics, target_role);
    let improvements = generate_improvements(&outcome.diagnostics, target_role);

    DeterministicAnalysis {
        target_role: target_role.to_string(),
        resolved_profile: resolve_role_profile(target_role).key,
        sections,
        outcome,
        evaluation,
        improvements,
    }
}

/// Picks up to four project bullets worth rewriting: pieces of the projects
/// body split on en dashes, longer than 40 characters.
pub fn select_project_bullets(sections: &SectionMap) -> Vec<String> {
    sections
        .text(Section::Projects)
        .split(PROJECT_BULLET_SEPARATOR)
        .map(str::trim)
        .filter(|b| b.chars().count() > MIN_BULLET_CHARS)
        .take(MAX_REWRITE_BULLETS)
        .map(str::to_string)
        .collect()
}

/// Full pipeline: deterministic analysis plus oracle explanations and rewrites.
pub async fn generate_final_report(
    resume_text: &str,
    target_role: &str,
    oracle: &dyn Oracle,
) -> Result<FinalReport, AppError> {
    let analysis = analyze(resume_text, target_role);
    let DeterministicAnalysis {
        sections,
        outcome,
        evaluation,
        improvements,
        ..
    } = analysis;

    info!(
        "Deterministic analysis done: role_fit={} ats={} readiness={} (role: {})",
        outcome.score, evaluation.ats_score, evaluation.role_readiness_score, target_role
    );

    let diagnostics = &outcome.diagnostics;

    let rejection_explanation =
        explain_rejection(oracle, outcome.score, &outcome.reasons, diagnostics, target_role)
            .await?;
    let strengths_summary = summarize_strengths(oracle, diagnostics, target_role).await?;
    let ats_diagnostics = explain_ats_diagnostics(oracle, diagnostics, target_role).await?;

    let project_bullets = select_project_bullets(&sections);
    let rewritten_bullets = if project_bullets.is_empty() {
        vec![NO_REWRITE_NEEDED_TEXT.to_string()]
    } else {
        rewrite_resume_bullets(oracle, &project_bullets, target_role).await?
    };

    let ScoreOutcome {
        score,
        reasons,
        diagnostics,
    } = outcome;

    let report = FinalReport {
        analysis_id: Uuid::new_v4(),
        generated_at: Utc::now(),
        target_role: target_role.to_string(),
        ats_score: evaluation.ats_score,
        role_fit_score: score,
        role_readiness_score: evaluation.role_readiness_score,
        reasons,
        recommended_roles: evaluation.recommended_roles,
        rejection_explanation,
        strengths_summary,
        ats_diagnostics,
        missing_core_expectations: diagnostics.missing_must_have,
        weak_signals: diagnostics.weak_signals,
        strengths: diagnostics.strengths,
        improvements,
        rewritten_bullets,
    };

    info!("Report {} generated", report.analysis_id);
    Ok(report)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::analysis::prompts::{NOT_REJECTED_TEXT, SYSTEM_EDITOR};
    use crate::llm_client::testing::ScriptedOracle;

    const PROJECT_A: &str = "Built an image classifier for retail shelves using transfer learning";
    const PROJECT_B: &str = "Wrote a CLI that syncs dotfiles across machines over ssh";

    fn resume_with_projects() -> String {
        format!(
            "Jane Doe\nExperience\nTrained models and cut latency 40% for 3 teams in 2023\n\
             Projects\n– {PROJECT_A}\n– {PROJECT_B}\n– tiny one\nEducation\nBSc"
        )
    }

    #[test]
    fn test_select_project_bullets_filters_short_pieces() {
        let sections = split_into_sections(&resume_with_projects());
        let bullets = select_project_bullets(&sections);
        assert_eq!(bullets, vec![PROJECT_A.to_lowercase(), PROJECT_B.to_lowercase()]);
    }

    #[test]
    fn test_select_project_bullets_caps_at_four() {
        let piece = "a project description that is comfortably over forty characters";
        let text = format!("Projects\n{}", vec![piece; 6].join(" – "));
        assert_eq!(select_project_bullets(&split_into_sections(&text)).len(), 4);
    }

    #[test]
    fn test_select_project_bullets_without_projects() {
        assert!(select_project_bullets(&SectionMap::default()).is_empty());
    }

    #[test]
    fn test_analyze_is_deterministic_and_resolves_profile() {
        let text = resume_with_projects();
        let a = analyze(&text, "Machine Learning Engineer");
        let b = analyze(&text, "Machine Learning Engineer");
        assert_eq!(a.resolved_profile, "machine_learning_engineer");
        assert_eq!(a.outcome, b.outcome);
        assert_eq!(a.evaluation, b.evaluation);
        assert_eq!(a.improvements, b.improvements);
    }

    #[tokio::test]
    async fn test_report_for_clean_generic_resume() {
        let oracle = ScriptedOracle::always("No material gaps.");
        let report = generate_final_report("", "generic", &oracle).await.unwrap();

        assert_eq!(report.role_fit_score, 100);
        assert!(report.reasons.is_empty());
        assert_eq!(report.rejection_explanation, NOT_REJECTED_TEXT);
        assert_eq!(report.ats_diagnostics, "No material gaps.");
        assert_eq!(report.rewritten_bullets, vec![NO_REWRITE_NEEDED_TEXT]);
        // Only the ATS diagnostics call reaches the oracle.
        assert_eq!(oracle.recorded().len(), 1);
    }

    #[tokio::test]
    async fn test_report_rewrites_project_bullets() {
        let oracle = ScriptedOracle::with_replies(vec![
            Ok("Rejected for gaps.".to_string()),
            Ok("Strong training.".to_string()),
            Ok("Gaps hurt screening.".to_string()),
            Ok("- Rewritten A\n- Rewritten B".to_string()),
        ]);
        let report = generate_final_report(&resume_with_projects(), "ML Engineer", &oracle)
            .await
            .unwrap();

        assert_eq!(report.rejection_explanation, "Rejected for gaps.");
        assert_eq!(report.strengths_summary, "Strong training.");
        assert_eq!(report.ats_diagnostics, "Gaps hurt screening.");
        assert_eq!(report.rewritten_bullets, vec!["Rewritten A", "Rewritten B"]);
        assert_eq!(report.missing_core_expectations, vec!["data preprocessing"]);
        assert!(report
            .improvements
            .iter()
            .any(|s| s.issue == "Missing or unclear: data preprocessing"));

        let calls = oracle.recorded();
        assert_eq!(calls.len(), 4);
        assert_eq!(calls[3].system, SYSTEM_EDITOR);
    }

    #[tokio::test]
    async fn test_report_aborts_on_oracle_failure() {
        let oracle = ScriptedOracle::with_replies(vec![Err("unavailable".to_string())]);
        let result = generate_final_report(&resume_with_projects(), "ML Engineer", &oracle).await;
        assert!(matches!(result, Err(AppError::Llm(_))));
    }

    #[tokio::test]
    async fn test_report_serializes_presentation_fields() {
        let oracle = ScriptedOracle::always("text");
        let report = generate_final_report("", "generic", &oracle).await.unwrap();
        let json = serde_json::to_value(&report).unwrap();
        for key in [
            "ats_score",
            "role_fit_score",
            "role_readiness_score",
            "recommended_roles",
            "rejection_explanation",
            "strengths_summary",
            "ats_diagnostics",
            "missing_core_expectations",
            "weak_signals",
            "improvements",
            "rewritten_bullets",
        ] {
            assert!(json.get(key).is_some(), "missing {key}");
        }
    }
}
