use axum::{
    extract::{Multipart, State},
    Json,
};
use bytes::Bytes;
use serde::{Deserialize, Serialize};
use tracing::info;

use crate::analysis::explain::generate_guided_rewrite;
use crate::analysis::report::{
    analyze, generate_final_report, select_project_bullets, DeterministicAnalysis, FinalReport,
};
use crate::analysis::roles::{resolve_role_profile, RoleProfile, ROLE_PROFILES};
use crate::errors::AppError;
use crate::extraction::extract_text_from_mem;
use crate::state::AppState;

#[derive(Debug, Deserialize)]
pub struct AnalysisRequest {
    pub resume_text: String,
    pub target_role: String,
}

#[derive(Debug, Deserialize)]
pub struct ResolveRoleRequest {
    pub role: String,
}

#[derive(Debug, Serialize)]
pub struct ResolveRoleResponse {
    pub role: String,
    pub resolved_key: &'static str,
    pub profile: &'static RoleProfile,
}

#[derive(Debug, Serialize)]
pub struct GuidedRewriteResponse {
    pub target_role: String,
    pub original_bullets: Vec<String>,
    pub rewritten_bullets: Vec<String>,
}

impl AnalysisRequest {
    fn validate(&self) -> Result<(), AppError> {
        require_non_blank("resume_text", &self.resume_text)?;
        require_non_blank("target_role", &self.target_role)
    }
}

fn require_non_blank(field: &str, value: &str) -> Result<(), AppError> {
    if value.trim().is_empty() {
        return Err(AppError::Validation(format!("{field} must not be empty")));
    }
    Ok(())
}

/// GET /api/v1/roles
pub async fn handle_list_roles() -> Json<&'static [RoleProfile]> {
    Json(ROLE_PROFILES)
}

/// POST /api/v1/roles/resolve
pub async fn handle_resolve_role(
    Json(req): Json<ResolveRoleRequest>,
) -> Result<Json<ResolveRoleResponse>, AppError> {
    require_non_blank("role", &req.role)?;
    let profile = resolve_role_profile(&req.role);
    Ok(Json(ResolveRoleResponse {
        role: req.role,
        resolved_key: profile.key,
        profile,
    }))
}

/// POST /api/v1/analysis/score
///
/// Deterministic only. Never calls the oracle.
pub async fn handle_score(
    Json(req): Json<AnalysisRequest>,
) -> Result<Json<DeterministicAnalysis>, AppError> {
    req.validate()?;
    Ok(Json(analyze(&req.resume_text, &req.target_role)))
}

/// POST /api/v1/analysis/report
pub async fn handle_report(
    State(state): State<AppState>,
    Json(req): Json<AnalysisRequest>,
) -> Result<Json<FinalReport>, AppError> {
    req.validate()?;
    let report =
        generate_final_report(&req.resume_text, &req.target_role, state.oracle.as_ref()).await?;
    info!("Report {} generated (role: {})", report.analysis_id, report.target_role);
    Ok(Json(report))
}

/// POST /api/v1/analysis/rewrite
///
/// Project bullets rewritten against the resume's own improvement suggestions.
/// Empty when there are no qualifying bullets or nothing to improve.
pub async fn handle_guided_rewrite(
    State(state): State<AppState>,
    Json(req): Json<AnalysisRequest>,
) -> Result<Json<GuidedRewriteResponse>, AppError> {
    req.validate()?;
    let analysis = analyze(&req.resume_text, &req.target_role);
    let bullets = select_project_bullets(&analysis.sections);

    let rewritten = generate_guided_rewrite(
        state.oracle.as_ref(),
        &bullets,
        &analysis.improvements,
        &req.target_role,
    )
    .await?;

    Ok(Json(GuidedRewriteResponse {
        target_role: req.target_role,
        original_bullets: bullets,
        rewritten_bullets: rewritten,
    }))
}

/// POST /api/v1/analysis/upload
///
/// Multipart form: `file` (PDF bytes) and `target_role` (text).
pub async fn handle_upload(
    State(state): State<AppState>,
    mut multipart: Multipart,
) -> Result<Json<FinalReport>, AppError> {
    let mut file: Option<Bytes> = None;
    let mut target_role: Option<String> = None;

    while let Some(field) = multipart
        .next_field()
        .await
        .map_err(|e| AppError::Validation(format!("Malformed multipart body: {e}")))?
    {
        match field.name() {
            Some("file") => {
                let data = field
                    .bytes()
                    .await
                    .map_err(|e| AppError::Validation(format!("Failed to read file: {e}")))?;
                file = Some(data);
            }
            Some("target_role") => {
                let text = field
                    .text()
                    .await
                    .map_err(|e| AppError::Validation(format!("Failed to read target_role: {e}")))?;
                target_role = Some(text);
            }
            _ => {}
        }
    }

    let file = file
        .filter(|b| !b.is_empty())
        .ok_or_else(|| AppError::Validation("file is required".to_string()))?;
    let target_role = target_role.unwrap_or_default();
    require_non_blank("target_role", &target_role)?;

    info!("Extracting uploaded resume ({} bytes)", file.len());
    let resume_text = tokio::task::spawn_blocking(move || extract_text_from_mem(&file))
        .await
        .map_err(anyhow::Error::from)??;

    // Refuse rather than score an empty document as an all-missing resume.
    if resume_text.is_empty() {
        return Err(AppError::UnprocessableEntity(
            "No text could be extracted from the uploaded PDF".to_string(),
        ));
    }

    let report = generate_final_report(&resume_text, &target_role, state.oracle.as_ref()).await?;
    info!("Report {} generated from upload (role: {})", report.analysis_id, target_role);
    Ok(Json(report))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_blank_fields_fail_validation() {
        let req = AnalysisRequest {
            resume_text: "skills rust".into(),
            target_role: "   ".into(),
        };
        assert!(matches!(req.validate(), Err(AppError::Validation(msg)) if msg.contains("target_role")));

        let req = AnalysisRequest {
            resume_text: "\n\t".into(),
            target_role: "Backend Engineer".into(),
        };
        assert!(matches!(req.validate(), Err(AppError::Validation(msg)) if msg.contains("resume_text")));
    }

    #[tokio::test]
    async fn test_resolve_role_returns_profile() {
        let Json(resp) = handle_resolve_role(Json(ResolveRoleRequest {
            role: "Senior Backend Engineer".into(),
        }))
        .await
        .unwrap();
        assert_eq!(resp.resolved_key, "backend_engineer");
        assert_eq!(resp.profile.key, "backend_engineer");
        assert_eq!(resp.role, "Senior Backend Engineer");
    }
}
