//! Lexicon-based Spanish sentiment scoring
//!
//! A stateless rule engine run in four stages:
//!
//! 1. [`normalize`] folds case, diacritics and punctuation
//! 2. [`tokenize`] splits the folded text into ordered words
//! 3. [`matcher`] scores words against emotion vocabularies with a backward
//!    window of intensifiers, attenuators and negators, plus emoji in the raw text
//! 4. [`aggregate`] clamps the total into a score, label and color
//!
//! Only immutable tables are shared between calls, so [`analyze`] can run from
//! any number of request handlers at once.

pub mod aggregate;
pub mod lexicon;
pub mod matcher;
pub mod normalize;
pub mod tokenize;

pub use aggregate::{Label, SentimentResult};
pub use lexicon::Category;
pub use normalize::normalize;
pub use tokenize::tokenize;

/// Score a single text. Total over every input, never fails.
pub fn analyze(text: &str) -> SentimentResult {
  let tokens = tokenize(&normalize(text));
  let (token_total, counts) = matcher::score_tokens(&tokens);
  let total = token_total + matcher::score_emoji(text);

  aggregate::aggregate(total, counts, tokens)
}
