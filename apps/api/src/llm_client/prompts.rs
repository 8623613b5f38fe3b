// Shared prompt-building utilities.
// Each service that needs LLM calls defines its own prompts.rs alongside it.
// This file contains cross-cutting fragments and formatting helpers.

/// Placeholder used wherever a list is empty, so the model never sees a blank field.
pub const NONE_PLACEHOLDER: &str = "None";

/// Instruction appended to every explanation prompt.
pub const NO_NEW_FACTS_INSTRUCTION: &str = "\
    Use ONLY the facts listed above. \
    Do NOT add skills, tools, metrics, or reasons that are not listed.";

/// Fills `{name}` placeholders in one pass over `template`.
///
/// Substituted values are never rescanned, so user text containing `{...}`
/// reaches the model verbatim. Unknown placeholders are left as-is.
pub fn fill_template(template: &str, vars: &[(&str, &str)]) -> String {
    let mut out = String::with_capacity(template.len());
    let mut rest = template;

    while let Some(open) = rest.find('{') {
        out.push_str(&rest[..open]);
        let after = &rest[open + 1..];
        let hit = after.find('}').and_then(|close| {
            let name = &after[..close];
            vars.iter()
                .find(|(key, _)| *key == name)
                .map(|(_, value)| (close, *value))
        });
        match hit {
            Some((close, value)) => {
                out.push_str(value);
                rest = &after[close + 1..];
            }
            None => {
                out.push('{');
                rest = after;
            }
        }
    }

    out.push_str(rest);
    out
}

/// Renders items as a `- item` block, one per line.
pub fn bullet_block<S: AsRef<str>>(items: &[S]) -> String {
    items
        .iter()
        .map(|item| format!("- {}", item.as_ref()))
        .collect::<Vec<_>>()
        .join("\n")
}

/// Comma-joins items, or returns [`NONE_PLACEHOLDER`] when there are none.
pub fn comma_list_or_none<S: AsRef<str>>(items: &[S]) -> String {
    if items.is_empty() {
        NONE_PLACEHOLDER.to_string()
    } else {
        items
            .iter()
            .map(AsRef::as_ref)
            .collect::<Vec<_>>()
            .join(", ")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bullet_block() {
        assert_eq!(bullet_block(&["a", "b"]), "- a\n- b");
        assert_eq!(bullet_block::<&str>(&[]), "");
    }

    #[test]
    fn test_fill_template_single_pass() {
        let filled = fill_template(
            "Role: {target_role}\n{bullets}\n{guidance}",
            &[
                ("target_role", "{guidance} lead"),
                ("bullets", "- built {target_role} tool"),
                ("guidance", "- add metrics"),
            ],
        );
        assert_eq!(
            filled,
            "Role: {guidance} lead\n- built {target_role} tool\n- add metrics"
        );
    }

    #[test]
    fn test_fill_template_keeps_unknown_and_unbalanced_braces() {
        assert_eq!(fill_template("{a} {b} {", &[("a", "1")]), "1 {b} {");
        assert_eq!(fill_template("no placeholders", &[]), "no placeholders");
    }

    #[test]
    fn test_comma_list_or_none() {
        assert_eq!(comma_list_or_none(&["x", "y"]), "x, y");
        assert_eq!(comma_list_or_none::<String>(&[]), "None");
    }
}
