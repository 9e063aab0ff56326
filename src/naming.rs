//! Centralized name handling for the kebab-case pillar convention.
//!
//! Every pillar is keyed by a lowercase kebab-case name that doubles as its
//! directory name and URL segment. Display text is always derived from that
//! key, never stored separately:
//!
//! - `adoption` → "Adoption"
//! - `market-relevance` → "Market Relevance"
//! - `in-progress` → "In Progress" (status labels use the same rule)

/// Convert a kebab-case key to a title-cased display string.
///
/// Each dash-separated word gets an uppercase first letter and lowercase rest;
/// empty segments (from doubled or trailing dashes) are dropped.
pub fn display_title(name: &str) -> String {
    name.split('-')
        .filter(|word| !word.is_empty())
        .map(capitalize)
        .collect::<Vec<_>>()
        .join(" ")
}

fn capitalize(word: &str) -> String {
    let mut chars = word.chars();
    match chars.next() {
        Some(first) => first
            .to_uppercase()
            .chain(chars.flat_map(char::to_lowercase))
            .collect(),
        None => String::new(),
    }
}

/// Convert a kebab-case key to a CSS class token (`in-progress` → `in_progress`).
pub fn class_token(name: &str) -> String {
    name.replace('-', "_")
}

/// Whether `name` is a valid pillar key: lowercase ASCII letters and digits
/// in dash-separated words, no leading, trailing, or doubled dashes.
pub fn is_kebab_case(name: &str) -> bool {
    !name.is_empty()
        && name.split('-').all(|word| {
            !word.is_empty()
                && word
                    .chars()
                    .all(|c| c.is_ascii_lowercase() || c.is_ascii_digit())
        })
}
