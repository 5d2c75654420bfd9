use regex::Regex;
use std::sync::LazyLock;
use unicode_normalization::UnicodeNormalization;

/// Combining Diacritical Marks block
static COMBINING_MARKS: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[\u{0300}-\u{036f}]").expect("combining mark pattern"));

/// Canonicalize a string for comparison
/// - Lowercase
/// - Unicode normalization (NFD) and removal of combining diacritical marks
/// - Trim leading/trailing whitespace
///
/// Lowercasing runs first so that case mappings which produce combining
/// marks (e.g. 'İ') are stripped in the same pass; this keeps the function
/// idempotent.
pub fn normalize(text: &str) -> String {
    let decomposed: String = text.to_lowercase().nfd().collect();
    COMBINING_MARKS.replace_all(&decomposed, "").trim().to_string()
}

/// Check whether `haystack` contains an already normalized needle.
/// An empty needle matches everything.
pub fn contains_normalized(haystack: &str, normalized_needle: &str) -> bool {
    normalized_needle.is_empty() || normalize(haystack).contains(normalized_needle)
}

/// Compare two strings after normalization
pub fn eq_normalized(a: &str, b: &str) -> bool {
    normalize(a) == normalize(b)
}
