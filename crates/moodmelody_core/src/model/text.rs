//! Form text whitespace rules.
//!
//! Blank checks and tag splitting share one whitespace set: Unicode
//! `White_Space` without U+0085 NEXT LINE, plus U+FEFF ZERO WIDTH NO-BREAK
//! SPACE. That is the set browser form handling treats as whitespace.

const NEXT_LINE: char = '\u{85}';
const ZERO_WIDTH_NO_BREAK_SPACE: char = '\u{FEFF}';

/// Returns whether `ch` counts as whitespace in form input.
pub fn is_form_whitespace(ch: char) -> bool {
    ch == ZERO_WIDTH_NO_BREAK_SPACE || (ch != NEXT_LINE && ch.is_whitespace())
}

/// Returns whether `value` is empty or only form whitespace.
pub fn is_blank(value: &str) -> bool {
    value.chars().all(is_form_whitespace)
}
