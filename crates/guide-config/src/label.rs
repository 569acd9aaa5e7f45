//! Display labels for content types

use once_cell::sync::Lazy;
use regex::Regex;

static CAMEL_BOUNDARY: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"([a-z])([A-Z])").expect("static regex is valid"));

/// Human readable form of a content type id
///
/// Splits camel case on lower → upper boundaries and capitalizes the first
/// character: `blogPost` becomes `Blog Post`.
#[must_use]
pub fn readable_content_type(content_type: &str) -> String {
    let spaced = CAMEL_BOUNDARY.replace_all(content_type, "$1 $2");
    let mut chars = spaced.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}
