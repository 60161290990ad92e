//! Plain string transforms behind the echo and slug endpoints

use once_cell::sync::Lazy;
use regex::Regex;
use unicode_normalization::UnicodeNormalization;

/// Runs of ASCII whitespace (including `\x0b` and `\x1c`..`\x1f`) and hyphens
static SEPARATOR_RUN: Lazy<Regex> =
  Lazy::new(|| Regex::new(r"[\t-\r\x1C-\x1F -]+").expect("separator pattern is valid"));

/// ASCII characters that count as whitespace for slugs. Wider than
/// `char::is_ascii_whitespace`, which leaves out `\x0b` and the `\x1c`..`\x1f`
/// separators.
fn is_slug_whitespace(c: char) -> bool {
  matches!(c, ' ' | '\t'..='\r' | '\x1c'..='\x1f')
}

/// URL-friendly slug: ASCII-folded, lowercase words joined by single hyphens
pub fn slugify(text: &str) -> String {
  let ascii: String = text
    .nfkd()
    .filter(char::is_ascii)
    .filter(|c| c.is_ascii_alphanumeric() || is_slug_whitespace(*c) || *c == '-')
    .collect();

  // Only whitespace is trimmed; a trailing hyphen survives as a separator
  let lowered = ascii.trim_matches(is_slug_whitespace).to_ascii_lowercase();
  SEPARATOR_RUN.replace_all(&lowered, "-").into_owned()
}
