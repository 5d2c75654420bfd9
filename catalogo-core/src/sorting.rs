use crate::models::{Dataset, Record};
use crate::normalize::normalize;
use std::borrow::Borrow;
use unicode_normalization::UnicodeNormalization;

/// Collation key for a display name.
///
/// Fields are compared in declaration order:
/// 1. `leading`: letter-led names before digit/symbol-led names (technology only)
/// 2. `primary`: accent-free lowercase characters, ranked by character class
/// 3. `secondary`: lowercase with accents kept, so "a" < "á" < "b"
/// 4. `raw`: the untouched name, for a total order
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord)]
pub struct CollationKey {
    leading: u8,
    primary: Vec<(u8, char)>,
    secondary: String,
    raw: String,
}

impl CollationKey {
    /// Key for plain locale-aware ordering
    pub fn new(name: &str) -> Self {
        Self {
            leading: 0,
            primary: fold_letters(&normalize(name))
                .chars()
                .map(|c| (char_class(c), c))
                .collect(),
            secondary: name.trim().to_lowercase().nfd().collect(),
            raw: name.to_string(),
        }
    }

    /// Key that additionally puts letter-led names first
    pub fn letters_first(name: &str) -> Self {
        Self {
            leading: if starts_with_letter(name) { 0 } else { 1 },
            ..Self::new(name)
        }
    }

    pub fn for_dataset(name: &str, dataset: Dataset) -> Self {
        match dataset {
            Dataset::Technology => Self::letters_first(name),
            Dataset::Laboratory => Self::new(name),
        }
    }
}

/// Base letters for lowercase letters whose marks NFD does not separate
fn base_letters(c: char) -> Option<&'static str> {
    let base = match c {
        'ø' => "o",
        'ł' => "l",
        'đ' | 'ð' => "d",
        'æ' => "ae",
        'œ' => "oe",
        'ß' => "ss",
        'þ' => "th",
        'ħ' => "h",
        'ı' => "i",
        'ª' => "a",
        'º' => "o",
        _ => return None,
    };
    Some(base)
}

fn fold_letters(normalized: &str) -> String {
    let mut folded = String::with_capacity(normalized.len());
    for c in normalized.chars() {
        match base_letters(c) {
            Some(base) => folded.push_str(base),
            None => folded.push(c),
        }
    }
    folded
}

/// Character classes in collation order: whitespace, punctuation and
/// symbols, digits, letters
fn char_class(c: char) -> u8 {
    if c.is_whitespace() {
        0
    } else if c.is_numeric() {
        2
    } else if c.is_alphabetic() {
        3
    } else {
        1
    }
}

/// Whether a display name starts with a letter (accented letters included)
pub fn starts_with_letter(name: &str) -> bool {
    name.trim_start()
        .chars()
        .next()
        .is_some_and(char::is_alphabetic)
}

/// Sort records by display name using the ordering rules of the dataset.
/// The sort is stable: records with identical names keep their relative order.
pub fn sort_records<R: Borrow<Record>>(records: &mut [R], dataset: Dataset) {
    records.sort_by_cached_key(|r| CollationKey::for_dataset(r.borrow().display_name(), dataset));
}

/// Sort plain labels (classification values, group names) in collation order
pub fn sort_labels(labels: &mut [String]) {
    labels.sort_by_cached_key(|label| CollationKey::new(label));
}
