//! Section Splitter: line-heuristic partitioning of resume text.
//!
//! This is not a parser. Any non-blank line containing a header token as a
//! substring switches the active section, even a bullet that merely mentions
//! "skills" mid-sentence, and that line's content is dropped.

use std::collections::BTreeMap;

use serde::Serialize;

/// Fixed section vocabulary. `Header` collects everything before the first
/// recognized header line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Section {
    Header,
    Skills,
    Experience,
    Projects,
    Education,
    Certifications,
}

/// Header tokens in match order. First token found in a line wins.
const HEADER_TOKENS: &[(&str, Section)] = &[
    ("skills", Section::Skills),
    ("experience", Section::Experience),
    ("projects", Section::Projects),
    ("education", Section::Education),
    ("certifications", Section::Certifications),
];

impl Section {
    fn detect(line: &str) -> Option<Section> {
        HEADER_TOKENS
            .iter()
            .find(|(token, _)| line.contains(token))
            .map(|(_, section)| *section)
    }
}

/// Lowercased section bodies keyed by section. A key is present once its
/// header has been seen, even when the body stayed empty.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct SectionMap {
    sections: BTreeMap<Section, String>,
}

impl SectionMap {
    pub fn get(&self, section: Section) -> Option<&str> {
        self.sections.get(&section).map(String::as_str)
    }

    #[cfg(test)]
    pub fn contains(&self, section: Section) -> bool {
        self.sections.contains_key(&section)
    }

    /// Body text, or `""` when the section is absent.
    pub fn text(&self, section: Section) -> &str {
        self.get(section).unwrap_or("")
    }

    /// True when the section is absent or its body is empty.
    pub fn is_empty_or_missing(&self, section: Section) -> bool {
        self.text(section).is_empty()
    }

    pub fn bodies(&self) -> impl Iterator<Item = &str> {
        self.sections.values().map(String::as_str)
    }
}

/// Splits resume text into sections.
///
/// Lines are lowercased and trimmed. Blank lines are skipped. A header line
/// resets its section's accumulator, so a repeated header discards the body
/// collected under its earlier occurrence. Body lines are appended followed by
/// a single space.
pub fn split_into_sections(text: &str) -> SectionMap {
    let text = text.to_lowercase();
    let mut sections = BTreeMap::new();
    sections.insert(Section::Header, String::new());
    let mut current = Section::Header;

    for line in text.split('\n') {
        let clean = line.trim();
        if clean.is_empty() {
            continue;
        }

        match Section::detect(clean) {
            Some(section) => {
                current = section;
                sections.insert(current, String::new());
            }
            None => {
                let body = sections.entry(current).or_default();
                body.push_str(clean);
                body.push(' ');
            }
        }
    }

    SectionMap { sections }
}
