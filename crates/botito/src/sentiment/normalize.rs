//! Text folding applied before tokenization

use unicode_normalization::UnicodeNormalization;

/// Fold raw text to lowercase ASCII words separated by single spaces.
///
/// Accented letters decompose and lose their marks ("é" → "e", "ñ" → "n").
/// Anything that is not an ASCII letter, digit or whitespace becomes a space,
/// so emoji and punctuation never reach the tokenizer.
pub fn normalize(raw: &str) -> String {
  let folded: String = raw
    .nfkd()
    .filter(char::is_ascii)
    .map(|c| c.to_ascii_lowercase())
    .map(|c| if c.is_ascii_alphanumeric() || c.is_ascii_whitespace() { c } else { ' ' })
    .collect();

  folded.split_whitespace().collect::<Vec<_>>().join(" ")
}
