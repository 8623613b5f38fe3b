//! Oracle-backed explanations and rewrites.
//!
//! Prompts are built only from already-computed scores, reasons, and
//! diagnostics. Short-circuit cases return fixed text without an oracle call.

use tracing::debug;

use crate::analysis::improvements::ImprovementSuggestion;
use crate::analysis::prompts::{
    ATS_DIAGNOSTICS_PROMPT_TEMPLATE, GUIDED_REWRITE_PROMPT_TEMPLATE, NOT_REJECTED_TEXT,
    NO_STRENGTHS_TEXT, REJECTION_PROMPT_TEMPLATE, REWRITE_PROMPT_TEMPLATE,
    STRENGTHS_PROMPT_TEMPLATE, SYSTEM_EDITOR, SYSTEM_GUIDED_REWRITE, SYSTEM_RECRUITER,
};
use crate::analysis::scoring::Diagnostics;
use crate::llm_client::prompts::{
    bullet_block, comma_list_or_none, fill_template, NO_NEW_FACTS_INSTRUCTION,
};
use crate::llm_client::{parse_bullet_lines, LlmError, Oracle, DEFAULT_TEMPERATURE};

const REWRITE_TEMPERATURE: f32 = 0.25;

pub async fn explain_rejection(
    oracle: &dyn Oracle,
    score: u32,
    reasons: &[String],
    diagnostics: &Diagnostics,
    target_role: &str,
) -> Result<String, LlmError> {
    if reasons.is_empty() {
        return Ok(NOT_REJECTED_TEXT.to_string());
    }

    let prompt = fill_template(
        REJECTION_PROMPT_TEMPLATE,
        &[
            ("target_role", target_role),
            ("score", &score.to_string()),
            ("reasons", &bullet_block(reasons)),
            ("missing", &comma_list_or_none(&diagnostics.missing_must_have)),
            ("weak", &comma_list_or_none(&diagnostics.weak_signals)),
            ("no_new_facts", NO_NEW_FACTS_INSTRUCTION),
        ],
    );

    oracle
        .generate(SYSTEM_RECRUITER, &prompt, DEFAULT_TEMPERATURE)
        .await
}

pub async fn summarize_strengths(
    oracle: &dyn Oracle,
    diagnostics: &Diagnostics,
    target_role: &str,
) -> Result<String, LlmError> {
    if diagnostics.strengths.is_empty() {
        return Ok(NO_STRENGTHS_TEXT.to_string());
    }

    let prompt = fill_template(
        STRENGTHS_PROMPT_TEMPLATE,
        &[
            ("target_role", target_role),
            ("strengths", &bullet_block(&diagnostics.strengths)),
            ("no_new_facts", NO_NEW_FACTS_INSTRUCTION),
        ],
    );

    oracle
        .generate(SYSTEM_RECRUITER, &prompt, DEFAULT_TEMPERATURE)
        .await
}

pub async fn explain_ats_diagnostics(
    oracle: &dyn Oracle,
    diagnostics: &Diagnostics,
    target_role: &str,
) -> Result<String, LlmError> {
    let prompt = fill_template(
        ATS_DIAGNOSTICS_PROMPT_TEMPLATE,
        &[
            ("target_role", target_role),
            ("missing", &comma_list_or_none(&diagnostics.missing_must_have)),
            ("weak", &comma_list_or_none(&diagnostics.weak_signals)),
            ("no_new_facts", NO_NEW_FACTS_INSTRUCTION),
        ],
    );

    oracle
        .generate(SYSTEM_RECRUITER, &prompt, DEFAULT_TEMPERATURE)
        .await
}

/// Wording-only rewrite, one output line per bullet (not enforced on the output).
pub async fn rewrite_resume_bullets(
    oracle: &dyn Oracle,
    bullets: &[String],
    target_role: &str,
) -> Result<Vec<String>, LlmError> {
    if bullets.is_empty() {
        return Ok(Vec::new());
    }

    let prompt = fill_template(
        REWRITE_PROMPT_TEMPLATE,
        &[
            ("target_role", target_role),
            ("bullets", &bullet_block(bullets)),
        ],
    );

    let output = oracle
        .generate(SYSTEM_EDITOR, &prompt, REWRITE_TEMPERATURE)
        .await?;
    let rewritten = parse_bullet_lines(&output);
    debug!(
        input = bullets.len(),
        output = rewritten.len(),
        "Rewrote resume bullets"
    );
    Ok(rewritten)
}

/// Rewrite steered by improvement suggestions. Needs both bullets and suggestions.
pub async fn generate_guided_rewrite(
    oracle: &dyn Oracle,
    bullets: &[String],
    suggestions: &[ImprovementSuggestion],
    target_role: &str,
) -> Result<Vec<String>, LlmError> {
    if bullets.is_empty() || suggestions.is_empty() {
        return Ok(Vec::new());
    }

    let guidance: Vec<String> = suggestions
        .iter()
        .map(|s| format!("{}: {}", s.issue, s.what_to_add))
        .collect();

    let prompt = fill_template(
        GUIDED_REWRITE_PROMPT_TEMPLATE,
        &[
            ("target_role", target_role),
            ("bullets", &bullet_block(bullets)),
            ("guidance", &bullet_block(&guidance)),
        ],
    );

    let output = oracle
        .generate(SYSTEM_GUIDED_REWRITE, &prompt, REWRITE_TEMPERATURE)
        .await?;
    Ok(parse_bullet_lines(&output))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::llm_client::testing::ScriptedOracle;

    fn diag() -> Diagnostics {
        Diagnostics {
            missing_must_have: vec!["data preprocessing".to_string()],
            weak_signals: vec!["monitoring".to_string(), "error analysis".to_string()],
            strengths: vec!["model training".to_string()],
        }
    }

    #[tokio::test]
    async fn test_rejection_without_reasons_skips_oracle() {
        let oracle = ScriptedOracle::always("should not be used");
        let text = explain_rejection(&oracle, 100, &[], &diag(), "ML Engineer")
            .await
            .unwrap();
        assert_eq!(text, NOT_REJECTED_TEXT);
        assert!(oracle.recorded().is_empty());
    }

    #[tokio::test]
    async fn test_rejection_prompt_carries_only_supplied_facts() {
        let oracle = ScriptedOracle::always("Because.");
        let reasons = vec!["Projects could benefit from deeper applied context.".to_string()];
        let text = explain_rejection(&oracle, 70, &reasons, &diag(), "ML Engineer")
            .await
            .unwrap();
        assert_eq!(text, "Because.");

        let calls = oracle.recorded();
        assert_eq!(calls.len(), 1);
        let call = &calls[0];
        assert_eq!(call.system, SYSTEM_RECRUITER);
        assert!((call.temperature - 0.2).abs() < f32::EPSILON);
        assert!(call.user.contains("ML Engineer"));
        assert!(call.user.contains("70 / 100"));
        assert!(call.user.contains("- Projects could benefit"));
        assert!(call.user.contains("data preprocessing"));
        assert!(call.user.contains("monitoring, error analysis"));
        assert!(call.user.contains(NO_NEW_FACTS_INSTRUCTION));
        assert!(!call.user.contains('{'));
    }

    #[tokio::test]
    async fn test_rejection_empty_lists_render_none() {
        let oracle = ScriptedOracle::always("ok");
        let reasons = vec!["Skills section is overloaded and may dilute ATS signals.".to_string()];
        explain_rejection(&oracle, 78, &reasons, &Diagnostics::default(), "generic")
            .await
            .unwrap();
        let user = &oracle.recorded()[0].user;
        assert!(user.contains("Missing Core Expectations:\nNone"));
        assert!(user.contains("Weak or Underrepresented Signals:\nNone"));
    }

    #[tokio::test]
    async fn test_strengths_summary_short_circuits_when_empty() {
        let oracle = ScriptedOracle::always("unused");
        let text = summarize_strengths(&oracle, &Diagnostics::default(), "pm")
            .await
            .unwrap();
        assert_eq!(text, NO_STRENGTHS_TEXT);
        assert!(oracle.recorded().is_empty());
    }

    #[tokio::test]
    async fn test_strengths_summary_lists_strengths() {
        let oracle = ScriptedOracle::always("Strong training background.");
        summarize_strengths(&oracle, &diag(), "ML Engineer")
            .await
            .unwrap();
        assert!(oracle.recorded()[0].user.contains("- model training"));
    }

    #[tokio::test]
    async fn test_ats_diagnostics_always_calls_oracle() {
        let oracle = ScriptedOracle::always("No gaps.");
        let text = explain_ats_diagnostics(&oracle, &Diagnostics::default(), "generic")
            .await
            .unwrap();
        assert_eq!(text, "No gaps.");
        assert_eq!(oracle.recorded().len(), 1);
    }

    #[tokio::test]
    async fn test_rewrite_parses_lines_at_rewrite_temperature() {
        let oracle = ScriptedOracle::always("- First rewritten\n\n- Second rewritten\n");
        let bullets = vec!["first".to_string(), "second".to_string()];
        let out = rewrite_resume_bullets(&oracle, &bullets, "Backend Engineer")
            .await
            .unwrap();
        assert_eq!(out, vec!["First rewritten", "Second rewritten"]);
        let call = &oracle.recorded()[0];
        assert_eq!(call.system, SYSTEM_EDITOR);
        assert!((call.temperature - 0.25).abs() < f32::EPSILON);
        assert!(call.user.contains("- first\n- second"));
    }

    #[tokio::test]
    async fn test_rewrite_empty_input_skips_oracle() {
        let oracle = ScriptedOracle::always("unused");
        let out = rewrite_resume_bullets(&oracle, &[], "x").await.unwrap();
        assert!(out.is_empty());
        assert!(oracle.recorded().is_empty());
    }

    #[tokio::test]
    async fn test_guided_rewrite_requires_bullets_and_suggestions() {
        let oracle = ScriptedOracle::always("unused");
        let bullets = vec!["built a model".to_string()];
        assert!(generate_guided_rewrite(&oracle, &bullets, &[], "ml")
            .await
            .unwrap()
            .is_empty());
        assert!(oracle.recorded().is_empty());
    }

    #[tokio::test]
    async fn test_guided_rewrite_includes_guidance() {
        let oracle = ScriptedOracle::always("- Built and monitored a model");
        let bullets = vec!["built a model".to_string()];
        let suggestion = ImprovementSuggestion {
            issue: "Weakly represented: monitoring".to_string(),
            section_to_update: "Experience".to_string(),
            what_to_add: "Explain monitoring.".to_string(),
            example_wording: vec![],
        };
        let out = generate_guided_rewrite(&oracle, &bullets, &[suggestion], "ml")
            .await
            .unwrap();
        assert_eq!(out, vec!["Built and monitored a model"]);
        let call = &oracle.recorded()[0];
        assert_eq!(call.system, SYSTEM_GUIDED_REWRITE);
        assert!(call
            .user
            .contains("- Weakly represented: monitoring: Explain monitoring."));
    }

    #[tokio::test]
    async fn test_guided_rewrite_passes_braced_bullets_through() {
        let oracle = ScriptedOracle::always("- ok");
        let bullets = vec!["built {guidance} tool".to_string()];
        let suggestion = ImprovementSuggestion {
            issue: "Missing or unclear: monitoring".to_string(),
            section_to_update: "Projects".to_string(),
            what_to_add: "Describe monitoring.".to_string(),
            example_wording: vec![],
        };
        generate_guided_rewrite(&oracle, &bullets, &[suggestion], "{bullets} engineer")
            .await
            .unwrap();
        let user = &oracle.recorded()[0].user;
        assert!(user.contains("- built {guidance} tool"));
        assert!(user.contains("{bullets} engineer"));
        assert_eq!(user.matches("Describe monitoring.").count(), 1);
    }

    #[tokio::test]
    async fn test_rejection_keeps_braced_role_title() {
        let oracle = ScriptedOracle::always("ok");
        let reasons = vec!["Projects could benefit from deeper applied context.".to_string()];
        explain_rejection(&oracle, 64, &reasons, &diag(), "{score} {reasons} Lead")
            .await
            .unwrap();
        let user = &oracle.recorded()[0].user;
        assert!(user.contains("{score} {reasons} Lead"));
        assert_eq!(user.matches("Projects could benefit").count(), 1);
    }

    #[tokio::test]
    async fn test_oracle_error_propagates() {
        let oracle = ScriptedOracle::with_replies(vec![Err("down".to_string())]);
        let result = explain_ats_diagnostics(&oracle, &diag(), "ml").await;
        assert!(matches!(result, Err(LlmError::Api { status: 503, .. })));
    }
}
