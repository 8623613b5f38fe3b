//! Improvement Mapper: templated remediation for missing and weak competencies.
//!
//! Competencies without a template are skipped. Coverage is intentionally
//! partial: ML, general software engineering, and product/business entries.

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::analysis::scoring::Diagnostics;

/// Static remediation template for one competency.
#[derive(Debug, Clone, Copy)]
struct ImprovementTemplate {
    section: &'static str,
    what_to_add: &'static str,
    how_to_word: &'static [&'static str],
}

/// One actionable suggestion: issue, section to edit, remediation, example phrasings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ImprovementSuggestion {
    pub issue: String,
    pub section_to_update: String,
    pub what_to_add: String,
    pub example_wording: Vec<String>,
}

const IMPROVEMENT_LIBRARY: &[(&str, ImprovementTemplate)] = &[
    // ML / AI
    (
        "model training",
        ImprovementTemplate {
            section: "Projects / Experience",
            what_to_add: "Explicitly describe how the model was trained.",
            how_to_word: &[
                "Trained a [model type] using [dataset description], optimizing for [objective].",
                "Implemented training pipelines with appropriate loss functions and optimization strategies.",
            ],
        },
    ),
    (
        "evaluation metrics",
        ImprovementTemplate {
            section: "Projects",
            what_to_add: "Clarify how model performance was evaluated.",
            how_to_word: &[
                "Evaluated model performance using metrics such as accuracy, precision, recall, and F1-score.",
                "Measured performance on a held-out validation set to assess generalization.",
            ],
        },
    ),
    (
        "data preprocessing",
        ImprovementTemplate {
            section: "Projects / Experience",
            what_to_add: "Describe data cleaning and feature preparation steps.",
            how_to_word: &[
                "Preprocessed raw data by handling missing values, normalization, and feature extraction.",
                "Applied domain-specific preprocessing techniques to improve model input quality.",
            ],
        },
    ),
    (
        "error analysis",
        ImprovementTemplate {
            section: "Projects",
            what_to_add: "Mention analysis of failure cases or errors.",
            how_to_word: &[
                "Performed error analysis to identify common misclassification patterns.",
                "Reviewed failure cases to guide model refinement.",
            ],
        },
    ),
    (
        "baseline comparison",
        ImprovementTemplate {
            section: "Projects",
            what_to_add: "Compare model results against a baseline.",
            how_to_word: &[
                "Compared model performance against baseline approaches to validate improvements.",
                "Benchmarked results against simpler models to justify architectural choices.",
            ],
        },
    ),
    (
        "monitoring",
        ImprovementTemplate {
            section: "Experience",
            what_to_add: "Explain how models or systems were monitored post-deployment.",
            how_to_word: &[
                "Implemented logging and monitoring to track system performance over time.",
                "Monitored key metrics to ensure system reliability and performance stability.",
            ],
        },
    ),
    // Software engineering
    (
        "system design",
        ImprovementTemplate {
            section: "Experience / Projects",
            what_to_add: "Show architectural decision-making.",
            how_to_word: &[
                "Designed modular system architecture to support scalability and maintainability.",
                "Defined service boundaries and data flow for backend systems.",
            ],
        },
    ),
    (
        "scalability",
        ImprovementTemplate {
            section: "Experience",
            what_to_add: "Explain how systems handled growth or load.",
            how_to_word: &[
                "Optimized system components to handle increased load efficiently.",
                "Improved system scalability through caching, async processing, or load balancing.",
            ],
        },
    ),
    (
        "testing",
        ImprovementTemplate {
            section: "Experience",
            what_to_add: "Demonstrate validation and quality assurance.",
            how_to_word: &[
                "Implemented unit and integration tests to ensure system reliability.",
                "Used automated testing to catch regressions during development.",
            ],
        },
    ),
    // Product / business
    (
        "metrics",
        ImprovementTemplate {
            section: "Experience",
            what_to_add: "Tie work to measurable outcomes.",
            how_to_word: &[
                "Defined and tracked key metrics to evaluate feature success.",
                "Used data-driven insights to inform decision-making.",
            ],
        },
    ),
    (
        "stakeholder communication",
        ImprovementTemplate {
            section: "Experience",
            what_to_add: "Show cross-functional collaboration.",
            how_to_word: &[
                "Collaborated with cross-functional stakeholders to gather requirements.",
                "Communicated project progress and trade-offs to non-technical teams.",
            ],
        },
    ),
];

fn template_for(competency: &str) -> Option<&'static ImprovementTemplate> {
    IMPROVEMENT_LIBRARY
        .iter()
        .find(|(name, _)| *name == competency)
        .map(|(_, template)| template)
}

impl ImprovementSuggestion {
    fn from_template(issue: String, template: &ImprovementTemplate) -> Self {
        Self {
            issue,
            section_to_update: template.section.to_string(),
            what_to_add: template.what_to_add.to_string(),
            example_wording: template.how_to_word.iter().map(|s| s.to_string()).collect(),
        }
    }
}

/// Builds suggestions for missing must-haves first, then weak signals.
pub fn generate_improvements(
    diagnostics: &Diagnostics,
    target_role: &str,
) -> Vec<ImprovementSuggestion> {
    let missing = diagnostics.missing_must_have.iter().filter_map(|name| {
        template_for(name).map(|t| {
            ImprovementSuggestion::from_template(format!("Missing or unclear: {name}"), t)
        })
    });
    let weak = diagnostics.weak_signals.iter().filter_map(|name| {
        template_for(name).map(|t| {
            ImprovementSuggestion::from_template(format!("Weakly represented: {name}"), t)
        })
    });

    let suggestions: Vec<_> = missing.chain(weak).collect();
    debug!(
        target_role,
        count = suggestions.len(),
        "Generated improvement suggestions"
    );
    suggestions
}
