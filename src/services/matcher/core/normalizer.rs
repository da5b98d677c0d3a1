//! Text normalization for table, backglass and media names.
//!
//! Reduces a raw name to a lowercase canonical form so that differently
//! decorated names of the same table compare equal.

use regex::Regex;
use std::collections::HashSet;

use crate::services::matcher::models::config::{prepare_word_list, MatchConfig};
use crate::types::errors::MatcherResult;

/// Quote variants and punctuation with no identity value. Non-ASCII goes too,
/// which also covers mis-decoded apostrophes such as `â€™`.
const STRIP_CHARS_PATTERN: &str = r"[',;!?&`]|[^\x00-\x7F]";

/// Trailing version token: `v2`, `1.0`, `v1_2_3`.
const VERSION_SUFFIX_PATTERN: &str = r"(?:v\d+|v?\d+(?:[._]\d+)+)\s*$";

/// Leading file-id run.
const NUMERIC_PREAMBLE_PATTERN: &str = r"^\d{5,}";

const MULTI_WHITESPACE_PATTERN: &str = r"\s{2,}";

const ELLIPSIS: &str = "...";

/// Apostrophe look-alikes folded to `'` before stopword removal.
const QUOTE_VARIANTS: [char; 4] = ['\u{2019}', '\u{2018}', '`', '\u{00B4}'];

/// Space-delimited roman numerals, longest first.
const ROMAN_NUMERALS: &[(&str, &str)] = &[("iv", "4"), ("iii", "3"), ("ii", "2")];

/// Compiled normalization context.
///
/// Built once from a [`MatchConfig`] and shared read-only by every
/// normalization call.
#[derive(Debug, Clone)]
pub struct Normalizer {
    stopwords: Vec<String>,
    title_case_exceptions: HashSet<String>,
    re_strip_chars: Regex,
    re_version_suffix: Regex,
    re_numeric_preamble: Regex,
    re_multi_whitespace: Regex,
}

impl Normalizer {
    pub fn new(config: &MatchConfig) -> MatcherResult<Self> {
        Ok(Self {
            stopwords: prepare_word_list(&config.stopwords, "stopwords"),
            title_case_exceptions: prepare_word_list(
                &config.title_case_exceptions,
                "title_case_exceptions",
            )
            .into_iter()
            .collect(),
            re_strip_chars: Regex::new(STRIP_CHARS_PATTERN)?,
            re_version_suffix: Regex::new(VERSION_SUFFIX_PATTERN)?,
            re_numeric_preamble: Regex::new(NUMERIC_PREAMBLE_PATTERN)?,
            re_multi_whitespace: Regex::new(MULTI_WHITESPACE_PATTERN)?,
        })
    }

    /// Normalize a raw name.
    ///
    /// Pipeline (order matters):
    /// 1. Split camel case (`SpinACard` → `Spin A Card`)
    /// 2. Lowercase, trim and fold quote variants to `'`
    /// 3. Remove whole-word stopwords
    /// 4. Strip quotes, punctuation and non-ASCII
    /// 5. Drop a single trailing period (not an ellipsis)
    /// 6. `-` and ` - ` become a space
    /// 7. Strip a trailing version token (not after an ellipsis)
    /// 8. Strip a leading 5+ digit file id
    /// 9. `_` and `.` become a space
    /// 10. Roman numerals `ii`/`iii`/`iv` become digits
    /// 11. Collapse whitespace and trim
    /// 12. Remove all spaces (if `strip_whitespace`)
    pub fn normalize(&self, raw: &str, strip_whitespace: bool) -> String {
        if raw.trim().is_empty() {
            return String::new();
        }

        // Steps 1-2
        let split = self.split_camel_case(raw);
        let lower = split.to_lowercase().replace(QUOTE_VARIANTS, "'");

        // Step 3
        let text = self.remove_stopwords(lower.trim());

        // Step 4
        let mut text = self.re_strip_chars.replace_all(&text, "").into_owned();

        // Step 5
        if text.ends_with('.') && !text.ends_with(ELLIPSIS) {
            text.pop();
        }

        // Step 6
        let text = text.replace(" - ", " ").replace('-', " ");

        // Step 7
        let text = if text.ends_with(ELLIPSIS) {
            text
        } else {
            self.re_version_suffix.replace(&text, "").into_owned()
        };

        // Step 8
        let text = self.re_numeric_preamble.replace(&text, "");

        // Step 9
        let text = text.replace(['_', '.'], " ");

        // Step 10
        let text = replace_roman_numerals(&text);

        // Step 11
        let text = self.re_multi_whitespace.replace_all(&text, " ");
        let text = text.trim();

        // Step 12
        if strip_whitespace {
            text.replace(' ', "")
        } else {
            text.to_string()
        }
    }

    /// Insert a space before an uppercase letter that follows a lowercase
    /// letter, or follows an `a`/`A` that itself starts the word or follows a
    /// lowercase letter. Words on the exception list are left alone.
    pub fn split_camel_case(&self, raw: &str) -> String {
        let mut out = String::with_capacity(raw.len() + 8);
        for (index, word) in raw.split(' ').enumerate() {
            if index > 0 {
                out.push(' ');
            }
            if self.title_case_exceptions.contains(&word.to_lowercase()) {
                out.push_str(word);
            } else {
                split_camel_word(word, &mut out);
            }
        }
        out
    }

    /// Remove stopwords bounded by non-alphanumeric characters (or the string
    /// edges). A stopword that starts or ends with punctuation (`'n`, `n'`)
    /// supplies its own boundary on that side. Expects lowercase input.
    pub fn remove_stopwords(&self, text: &str) -> String {
        let mut out = String::with_capacity(text.len());
        let mut previous: Option<char> = None;
        let mut index = 0;

        while index < text.len() {
            let rest = &text[index..];

            let hit = self.stopwords.iter().find(|word| {
                rest.starts_with(word.as_str())
                    && (is_word_boundary(previous) || is_word_boundary(word.chars().next()))
                    && (is_word_boundary(rest[word.len()..].chars().next())
                        || is_word_boundary(word.chars().last()))
            });
            if let Some(word) = hit {
                previous = word.chars().last();
                index += word.len();
                continue;
            }

            let Some(ch) = rest.chars().next() else {
                break;
            };
            out.push(ch);
            previous = Some(ch);
            index += ch.len_utf8();
        }

        out
    }
}

fn split_camel_word(word: &str, out: &mut String) {
    let chars: Vec<char> = word.chars().collect();
    for (index, &ch) in chars.iter().enumerate() {
        if index > 0 && ch.is_uppercase() {
            let previous = chars[index - 1];
            let after_lowercase = previous.is_lowercase();
            let after_article = (previous == 'a' || previous == 'A')
                && (index < 2 || chars[index - 2].is_lowercase());
            if after_lowercase || after_article {
                out.push(' ');
            }
        }
        out.push(ch);
    }
}

fn is_word_boundary(ch: Option<char>) -> bool {
    !matches!(ch, Some(c) if c.is_alphanumeric())
}

/// Replace roman numeral tokens that follow a space.
fn replace_roman_numerals(text: &str) -> String {
    text.split(' ')
        .enumerate()
        .map(|(index, token)| {
            if index == 0 {
                return token;
            }
            ROMAN_NUMERALS
                .iter()
                .find(|(numeral, _)| token == *numeral)
                .map(|(_, digit)| *digit)
                .unwrap_or(token)
        })
        .collect::<Vec<_>>()
        .join(" ")
}

/// First `len` characters of `text` (the whole string if shorter).
pub fn truncate_chars(text: &str, len: usize) -> &str {
    match text.char_indices().nth(len) {
        Some((byte_index, _)) => &text[..byte_index],
        None => text,
    }
}

/// Last `len` characters of `text` (the whole string if shorter).
pub fn last_chars(text: &str, len: usize) -> &str {
    let count = text.chars().count();
    if count <= len {
        return text;
    }
    match text.char_indices().nth(count - len) {
        Some((byte_index, _)) => &text[byte_index..],
        None => text,
    }
}

#[cfg(test)]
#[path = "tests/normalizer_tests.rs"]
mod tests;
