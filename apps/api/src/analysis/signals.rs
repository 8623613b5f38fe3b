//! Signal Detector: substring evidence for competencies.
//!
//! Matching is raw substring containment with no word boundaries or stemming,
//! so recall wins over precision ("api" matches inside "rapid").

/// Indirect keyword evidence per competency. Only the ML-oriented competencies
/// have entries; everything else is matched by its literal name alone.
pub const IMPLICIT_SIGNALS: &[(&str, &[&str])] = &[
    (
        "model training",
        &[
            "trained",
            "training",
            "cnn",
            "lstm",
            "bert",
            "fine-tuned",
            "fine tuned",
            "fit model",
        ],
    ),
    (
        "evaluation metrics",
        &["accuracy", "precision", "recall", "f1", "%", "auc", "latency"],
    ),
    (
        "data preprocessing",
        &[
            "preprocess",
            "pre-processing",
            "feature extraction",
            "normalization",
            "tokenization",
            "cleaned data",
        ],
    ),
    (
        "deployment",
        &[
            "api",
            "fastapi",
            "flask",
            "lambda",
            "serverless",
            "tflite",
            "inference",
            "production",
        ],
    ),
    (
        "baseline comparison",
        &["baseline", "compared", "improved over", "outperformed"],
    ),
    (
        "error analysis",
        &["error analysis", "failure cases", "misclassification"],
    ),
    ("monitoring", &["monitoring", "logging", "metrics tracking"]),
];

fn implicit_keywords(competency: &str) -> &'static [&'static str] {
    IMPLICIT_SIGNALS
        .iter()
        .find(|(name, _)| *name == competency)
        .map(|(_, keywords)| *keywords)
        .unwrap_or(&[])
}

/// True if any implicit keyword for `competency` occurs in `text`.
pub fn has_implicit_signal(text: &str, competency: &str) -> bool {
    let text = text.to_lowercase();
    implicit_keywords(competency)
        .iter()
        .any(|keyword| text.contains(keyword))
}

/// Literal-name substring match only. Used by the role-fit ranker.
/// `text_lower` must already be lowercased.
pub fn has_literal_signal(text_lower: &str, competency: &str) -> bool {
    text_lower.contains(competency)
}

/// A competency is present if its literal name or any implicit keyword occurs
/// in the text. `text_lower` must already be lowercased.
pub fn has_signal(text_lower: &str, competency: &str) -> bool {
    has_literal_signal(text_lower, competency) || has_implicit_signal(text_lower, competency)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_literal_name_matches() {
        assert!(has_signal("experience with system design reviews", "system design"));
    }

    #[test]
    fn test_implicit_keyword_matches() {
        assert!(has_signal("fine-tuned bert on support tickets", "model training"));
        assert!(has_signal("reduced p99 latency", "evaluation metrics"));
    }

    #[test]
    fn test_percent_sign_counts_as_evaluation_metric() {
        assert!(has_signal("cut costs by 30%", "evaluation metrics"));
    }

    #[test]
    fn test_no_word_boundaries() {
        // Known false positive: "api" inside "rapid".
        assert!(has_signal("rapid prototyping", "deployment"));
    }

    #[test]
    fn test_competency_outside_table_uses_literal_only() {
        assert!(!has_signal("wrote unit tests", "testing"));
        assert!(has_signal("integration testing", "testing"));
        assert!(!has_implicit_signal("anything at all", "testing"));
    }

    #[test]
    fn test_implicit_detection_lowercases_input() {
        assert!(has_implicit_signal("Deployed with FLASK", "deployment"));
    }

    #[test]
    fn test_absent_signal() {
        assert!(!has_signal("trained a cnn", "data preprocessing"));
    }

    #[test]
    fn test_literal_only_ignores_implicit_table() {
        assert!(!has_literal_signal("trained a cnn", "model training"));
        assert!(has_literal_signal("model training at scale", "model training"));
    }
}
