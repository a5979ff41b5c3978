//! Title normalization for mapping discovered releases onto stored series.

use once_cell::sync::Lazy;
use regex_lite::Regex;

static NON_WORD: Lazy<Regex> = Lazy::new(|| Regex::new(r"[\W_]+").expect("static pattern"));

/// Normalize a release title so it can be matched against a series'
/// stored clean title: lowercase, all separators and punctuation removed.
///
/// "The Office (US)" and "the.office.us" both normalize to "theofficeus".
pub fn normalize_title(title: &str) -> String {
    NON_WORD.replace_all(title, "").to_lowercase()
}
