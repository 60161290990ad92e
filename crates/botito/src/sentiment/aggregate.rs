//! Folding the raw total into a bounded, labeled result

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use super::matcher::CategoryCounts;

/// Raw totals beyond this magnitude saturate
pub const TOTAL_BOUND: f64 = 5.0;

/// Scores strictly above this are positive, strictly below its negation negative
pub const LABEL_THRESHOLD: f64 = 0.15;

/// Maximum number of tokens echoed back for inspection
pub const MAX_DEBUG_TOKENS: usize = 50;

pub const POSITIVE_COLOR: &str = "#2ecc71";
pub const NEGATIVE_COLOR: &str = "#e74c3c";
pub const NEUTRAL_COLOR: &str = "#f1c40f";

/// Overall polarity of a text
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "lowercase")]
pub enum Label {
  Positivo,
  Negativo,
  Neutral,
}

impl Label {
  pub fn from_score(score: f64) -> Self {
    if score > LABEL_THRESHOLD {
      Label::Positivo
    } else if score < -LABEL_THRESHOLD {
      Label::Negativo
    } else {
      Label::Neutral
    }
  }

  /// Display color for this label
  pub fn color(self) -> &'static str {
    match self {
      Label::Positivo => POSITIVE_COLOR,
      Label::Negativo => NEGATIVE_COLOR,
      Label::Neutral => NEUTRAL_COLOR,
    }
  }
}

/// Outcome of scoring one text
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct SentimentResult {
  /// Polarity label derived from `score`
  pub sentimiento: Label,

  /// Bounded score in [-1, 1], three decimals
  pub score: f64,

  /// Hex display color for the label
  pub color: String,

  /// Raw vocabulary hits per category
  pub detalles: CategoryCounts,

  /// Leading tokens, for inspection only
  pub tokens: Vec<String>,
}

/// Clamp, scale to [-1, 1] and round to three decimals
pub fn bounded_score(total: f64) -> f64 {
  let scaled = total.clamp(-TOTAL_BOUND, TOTAL_BOUND) / TOTAL_BOUND;
  let rounded = (scaled * 1000.0).round() / 1000.0;
  // -0.0 would serialize as "-0.0"
  if rounded == 0.0 {
    0.0
  } else {
    rounded
  }
}

pub fn aggregate(total: f64, counts: CategoryCounts, mut tokens: Vec<String>) -> SentimentResult {
  let score = bounded_score(total);
  let label = Label::from_score(score);
  tokens.truncate(MAX_DEBUG_TOKENS);

  SentimentResult { sentimiento: label, score, color: label.color().to_string(), detalles: counts, tokens }
}
