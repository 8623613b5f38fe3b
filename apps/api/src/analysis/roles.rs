//! Role Profile Registry: static role profiles and free-text role resolution.
//!
//! The registry is a compile-time table. Its iteration order is significant:
//! the role-fit ranker uses it as the implicit tie-break.

use serde::Serialize;
use tracing::debug;

/// Requirement bundle for one job discipline.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RoleProfile {
    pub key: &'static str,
    pub must_have: &'static [&'static str],
    pub strong_signals: &'static [&'static str],
    /// Informational only. Not consulted by any scorer.
    pub red_flags: &'static [&'static str],
}

pub const GENERIC_ROLE: &str = "generic";

// ────────────────────────────────────────────────────────────────────────────
// Registry
// ────────────────────────────────────────────────────────────────────────────

pub static ROLE_PROFILES: &[RoleProfile] = &[
    RoleProfile {
        key: "software_engineer",
        must_have: &[
            "data structures",
            "algorithms",
            "problem solving",
            "programming",
        ],
        strong_signals: &[
            "system design",
            "scalability",
            "performance optimization",
            "testing",
        ],
        red_flags: &[
            "only coursework projects",
            "no production or applied work",
            "tool listing without usage",
        ],
    },
    RoleProfile {
        key: "machine_learning_engineer",
        must_have: &["model training", "evaluation metrics", "data preprocessing"],
        strong_signals: &[
            "deployment",
            "error analysis",
            "baseline comparison",
            "monitoring",
        ],
        red_flags: &[
            "accuracy without context",
            "no dataset description",
            "no evaluation methodology",
        ],
    },
    RoleProfile {
        key: "data_scientist",
        must_have: &["data analysis", "statistics", "visualization"],
        strong_signals: &["business insights", "hypothesis testing", "experimentation"],
        red_flags: &["models without interpretation", "no impact metrics"],
    },
    RoleProfile {
        key: "backend_engineer",
        must_have: &["api development", "databases", "backend frameworks"],
        strong_signals: &["scalability", "security", "distributed systems"],
        red_flags: &["crud-only work", "no performance considerations"],
    },
    RoleProfile {
        key: "frontend_engineer",
        must_have: &["ui development", "javascript", "frontend frameworks"],
        strong_signals: &[
            "performance optimization",
            "accessibility",
            "state management",
        ],
        red_flags: &["design-only focus", "no interaction logic"],
    },
    RoleProfile {
        key: "product_manager",
        must_have: &[
            "requirements gathering",
            "stakeholder communication",
            "roadmapping",
        ],
        strong_signals: &["user research", "metrics", "prioritization frameworks"],
        red_flags: &["only coordination", "no ownership evidence"],
    },
    RoleProfile {
        key: "business_analyst",
        must_have: &["data interpretation", "requirements analysis", "reporting"],
        strong_signals: &["process optimization", "decision support"],
        red_flags: &["tool usage without insights"],
    },
    RoleProfile {
        key: "cybersecurity_engineer",
        must_have: &[
            "security principles",
            "risk assessment",
            "network fundamentals",
        ],
        strong_signals: &["incident response", "threat modeling", "compliance"],
        red_flags: &["certs without practice", "theory-only exposure"],
    },
    RoleProfile {
        key: "mechanical_engineer",
        must_have: &["design principles", "manufacturing processes"],
        strong_signals: &["cad tools", "simulation", "optimization"],
        red_flags: &["no applied projects"],
    },
    RoleProfile {
        key: "electrical_engineer",
        must_have: &["circuit analysis", "signal fundamentals"],
        strong_signals: &["embedded systems", "hardware testing"],
        red_flags: &["theory without implementation"],
    },
    RoleProfile {
        key: GENERIC_ROLE,
        must_have: &[],
        strong_signals: &[],
        red_flags: &[],
    },
];

/// Ordered resolution rules: (phrases, profile key). First rule with any phrase
/// contained in the lowercased role text wins.
///
/// "ml" is a bare substring check, so "html" resolves to machine learning.
const RESOLUTION_RULES: &[(&[&str], &str)] = &[
    (&["machine learning", "ml"], "machine_learning_engineer"),
    (&["data scientist"], "data_scientist"),
    (&["backend"], "backend_engineer"),
    (&["frontend"], "frontend_engineer"),
    (&["product"], "product_manager"),
    (&["business analyst"], "business_analyst"),
    (&["security"], "cybersecurity_engineer"),
    (&["software", "developer"], "software_engineer"),
];

/// Looks up a profile by its registry key.
pub fn profile_by_key(key: &str) -> Option<&'static RoleProfile> {
    ROLE_PROFILES.iter().find(|p| p.key == key)
}

fn generic_profile() -> &'static RoleProfile {
    // The generic entry is always the last registry row.
    &ROLE_PROFILES[ROLE_PROFILES.len() - 1]
}

/// Maps an arbitrary role title to a known profile. Never fails: unknown
/// titles resolve to the permissive `generic` profile.
pub fn resolve_role_profile(target_role: &str) -> &'static RoleProfile {
    let role = target_role.to_lowercase();

    let profile = RESOLUTION_RULES
        .iter()
        .find(|(phrases, _)| phrases.iter().any(|phrase| role.contains(phrase)))
        .and_then(|(_, key)| profile_by_key(key))
        .unwrap_or_else(generic_profile);

    debug!(target_role, profile = profile.key, "Resolved role profile");
    profile
}
