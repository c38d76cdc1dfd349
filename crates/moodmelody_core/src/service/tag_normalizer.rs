//! Free-text tag normalization.
//!
//! # Invariants
//! - Output order matches token order in the raw input.
//! - Every output tag is lowercase and starts with `#`.
//! - Duplicates are retained, even when they only differed by case.

use once_cell::sync::Lazy;
use regex::Regex;

// Commas plus the `model::text` whitespace set: `\s` with U+FEFF added and
// U+0085 removed.
static TAG_DELIMITER_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"[[,\s\x{FEFF}]--[\x{85}]]+").expect("valid tag delimiter regex")
});

const TAG_PREFIX: char = '#';

/// Converts raw tag text into a normalized tag list.
///
/// Splits on runs of commas and form whitespace, drops empty tokens, lowercases
/// each token and prefixes `#` where missing.
pub fn normalize_tags(raw: &str) -> Vec<String> {
    TAG_DELIMITER_RE
        .split(raw)
        .filter(|token| !token.is_empty())
        .map(normalize_tag)
        .collect()
}

fn normalize_tag(token: &str) -> String {
    let lowered = token.to_lowercase();
    if lowered.starts_with(TAG_PREFIX) {
        lowered
    } else {
        let mut tag = String::with_capacity(lowered.len() + 1);
        tag.push(TAG_PREFIX);
        tag.push_str(&lowered);
        tag
    }
}

#[cfg(test)]
mod tests {
    use super::{normalize_tags, TAG_DELIMITER_RE};
    use crate::model::text::is_form_whitespace;

    #[test]
    fn blank_input_yields_no_tags() {
        assert!(normalize_tags("").is_empty());
        assert!(normalize_tags("  ").is_empty());
        assert!(normalize_tags(" ,\t,\n ").is_empty());
    }

    #[test]
    fn mixed_delimiters_keep_order_and_fold_case() {
        assert_eq!(
            normalize_tags("happy, #Sad  night"),
            vec!["#happy", "#sad", "#night"]
        );
    }

    #[test]
    fn duplicates_are_retained() {
        assert_eq!(normalize_tags("#A #a"), vec!["#a", "#a"]);
    }

    #[test]
    fn bare_hash_stays_as_is() {
        assert_eq!(normalize_tags("#"), vec!["#"]);
    }

    #[test]
    fn leading_and_trailing_delimiters_are_ignored() {
        assert_eq!(normalize_tags(",,Jazz,,"), vec!["#jazz"]);
    }

    #[test]
    fn unicode_whitespace_splits_and_non_ascii_lowercases() {
        // U+3000 ideographic space separates the two tags.
        assert_eq!(
            normalize_tags("#癒し系\u{3000}ÉTÉ"),
            vec!["#癒し系", "#été"]
        );
    }

    #[test]
    fn bom_splits_tags_and_next_line_does_not() {
        assert_eq!(
            normalize_tags("a\u{FEFF}b x\u{85}y"),
            vec!["#a", "#b", "#x\u{85}y"]
        );
    }

    #[test]
    fn delimiter_class_matches_form_whitespace_and_comma() {
        for code in 0..=0xFFFFu32 {
            let Some(ch) = char::from_u32(code) else {
                continue;
            };
            let expected = ch == ',' || is_form_whitespace(ch);
            let single = ch.to_string();
            let matched = TAG_DELIMITER_RE
                .find(&single)
                .is_some_and(|m| m.as_str() == single);
            assert_eq!(matched, expected, "U+{code:04X}");
        }
    }
}
