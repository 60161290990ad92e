//! Lexical matching with windowed modifiers and the emoji pass

use std::collections::BTreeMap;

use super::lexicon::{self, Category, ATTENUATION};

/// Number of tokens before a match that can modify it
pub const MODIFIER_WINDOW: usize = 2;

/// Modifiers found in the window preceding a matched token
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct WindowModifiers {
  pub multiplier: f64,
  pub attenuated: bool,
  pub negated: bool,
}

impl Default for WindowModifiers {
  fn default() -> Self {
    Self { multiplier: 1.0, attenuated: false, negated: false }
  }
}

impl WindowModifiers {
  /// Inspect the up-to-`MODIFIER_WINDOW` tokens immediately before `index`
  pub fn before(tokens: &[String], index: usize) -> Self {
    let start = index.saturating_sub(MODIFIER_WINDOW);
    tokens[start..index].iter().fold(Self::default(), |mut found, token| {
      if let Some(multiplier) = lexicon::intensifier_multiplier(token) {
        found.multiplier = found.multiplier.max(multiplier);
      }
      found.attenuated |= lexicon::is_attenuator(token);
      found.negated |= lexicon::is_negator(token);
      found
    })
  }

  /// Signed contribution of a word with the given base polarity.
  ///
  /// Intensify, then attenuate, then negate. Attenuation has no floor, so a
  /// weak word (sorpresa) can end up pointing the other way.
  pub fn apply(&self, polarity: f64) -> f64 {
    let magnitude = polarity.abs() * self.multiplier - if self.attenuated { ATTENUATION } else { 0.0 };
    let contribution = polarity.signum() * magnitude;
    if self.negated {
      -contribution
    } else {
      contribution
    }
  }
}

/// Per-category membership counts, every category present
pub type CategoryCounts = BTreeMap<Category, usize>;

pub fn empty_counts() -> CategoryCounts {
  Category::ALL.into_iter().map(|category| (category, 0)).collect()
}

/// Score every token against the vocabularies.
pub fn score_tokens(tokens: &[String]) -> (f64, CategoryCounts) {
  score_tokens_with(tokens, |token| lexicon::categories_of(token).collect())
}

/// Score tokens with `lookup` giving the categories of each token.
///
/// A token in several categories contributes once per category, under the
/// same window modifiers, and bumps each of those counts.
pub fn score_tokens_with<F>(tokens: &[String], lookup: F) -> (f64, CategoryCounts)
where
  F: Fn(&str) -> Vec<Category>,
{
  let mut counts = empty_counts();
  let mut total = 0.0;

  for (index, token) in tokens.iter().enumerate() {
    let matched = lookup(token);
    if matched.is_empty() {
      continue;
    }

    let modifiers = WindowModifiers::before(tokens, index);
    for category in matched {
      total += modifiers.apply(category.polarity());
      *counts.entry(category).or_insert(0) += 1;
    }
  }

  (total, counts)
}

/// Sum emoji polarity over the raw text, before normalization strips glyphs
pub fn score_emoji(raw: &str) -> f64 {
  raw.chars().map(lexicon::emoji_polarity).sum()
}
