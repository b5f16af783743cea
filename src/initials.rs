//! # Initials Extraction
//!
//! Derives up to two uppercase initials from a display name or email
//! address. Extraction works on extended grapheme clusters, not code points,
//! so combining marks, emoji, and other multi-code-point clusters come
//! through intact.

use unicode_segmentation::UnicodeSegmentation;

/// Non-whitespace characters that split a display name into words.
const WORD_DELIMITERS: [char; 8] = ['.', '_', ';', '-', ',', '|', '/', '\\'];

/// Initials for a display name or email address.
///
/// Rules:
/// 1. An absent source is treated as the empty string.
/// 2. Only the part before the first `@` is considered, so an email address
///    contributes its local part and never its domain.
/// 3. The basis is split into words on runs of whitespace and
///    `. _ ; - , | / \`; empty tokens are discarded, so consecutive,
///    leading, or trailing delimiters never contribute.
/// 4. The first grapheme of each of the first two words is uppercased and
///    concatenated, in order. Remaining words are ignored.
///
/// The result holds 0, 1, or 2 graphemes. Uppercasing follows the full
/// Unicode case mapping, so a single grapheme may expand to several code
/// points (`ß` becomes `SS`); the result is deliberately not clamped.
pub fn initials(source: Option<&str>) -> String {
    // Drop the domain part if the source is an email address.
    let basis = source
        .unwrap_or_default()
        .split('@')
        .next()
        .unwrap_or_default();

    basis
        .split(is_word_delimiter)
        .filter(|word| !word.is_empty())
        .take(2)
        .map(first_grapheme_upper)
        .collect()
}

fn is_word_delimiter(c: char) -> bool {
    c.is_whitespace() || WORD_DELIMITERS.contains(&c)
}

/// First extended grapheme cluster of `word`, uppercased.
fn first_grapheme_upper(word: &str) -> String {
    word.graphemes(true)
        .next()
        .map(str::to_uppercase)
        .unwrap_or_default()
}
