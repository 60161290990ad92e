//! Word splitting over normalized text

/// Split on runs of whitespace, hyphens or underscores, keeping order
pub fn tokenize(normalized: &str) -> Vec<String> {
  normalized
    .split(|c: char| c.is_whitespace() || c == '-' || c == '_')
    .filter(|token| !token.is_empty())
    .map(str::to_string)
    .collect()
}
