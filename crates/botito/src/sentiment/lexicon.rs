//! Fixed Spanish lexicon: emotion vocabularies, polarity weights, window
//! modifiers and emoji polarity.
//!
//! Every word form here is lowercase and diacritic-stripped, matching what
//! [`super::normalize::normalize`] produces.

use once_cell::sync::Lazy;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use std::collections::{HashMap, HashSet};

/// Emotional dimension a vocabulary word belongs to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "lowercase")]
pub enum Category {
  Alegria,
  Enojo,
  Tristeza,
  Miedo,
  Asco,
  Sorpresa,
}

impl Category {
  pub const ALL: [Category; 6] = [
    Category::Alegria,
    Category::Enojo,
    Category::Tristeza,
    Category::Miedo,
    Category::Asco,
    Category::Sorpresa,
  ];

  /// Signed weight a matched word of this category contributes
  pub fn polarity(self) -> f64 {
    match self {
      Category::Alegria => 1.0,
      Category::Enojo | Category::Tristeza | Category::Miedo | Category::Asco => -1.0,
      Category::Sorpresa => 0.3,
    }
  }

  pub fn as_str(self) -> &'static str {
    match self {
      Category::Alegria => "alegria",
      Category::Enojo => "enojo",
      Category::Tristeza => "tristeza",
      Category::Miedo => "miedo",
      Category::Asco => "asco",
      Category::Sorpresa => "sorpresa",
    }
  }

  fn words(self) -> &'static [&'static str] {
    match self {
      Category::Alegria => ALEGRIA,
      Category::Enojo => ENOJO,
      Category::Tristeza => TRISTEZA,
      Category::Miedo => MIEDO,
      Category::Asco => ASCO,
      Category::Sorpresa => SORPRESA,
    }
  }
}

// Vocabularies
// ============

const ALEGRIA: &[&str] = &[
  "feliz", "felices", "felicidad", "alegre", "alegria", "contento", "contenta", "bien", "genial",
  "excelente", "encanta", "encanto", "gracias", "amor", "amo", "maravilloso", "maravillosa",
  "fantastico", "fantastica", "bueno", "buena", "divertido", "divertida", "gusta", "perfecto",
  "perfecta", "hermoso", "hermosa", "satisfecho", "satisfecha", "orgulloso", "orgullosa",
  "disfruto", "disfrutar", "encantado", "encantada",
];

const ENOJO: &[&str] = &[
  "odio", "odiar", "odia", "enojado", "enojada", "enojo", "furioso", "furiosa", "rabia", "molesto",
  "molesta", "ira", "harto", "harta", "irritado", "irritada", "indignado", "indignada", "coraje",
];

const TRISTEZA: &[&str] = &[
  "triste", "tristes", "tristeza", "mal", "deprimido", "deprimida", "llorar", "lloro", "llorando",
  "melancolia", "dolor", "pena", "desanimado", "desanimada", "infeliz", "decepcionado",
  "decepcionada", "decepcion", "solitario", "solitaria",
];

const MIEDO: &[&str] = &[
  "miedo", "asustado", "asustada", "temor", "terror", "panico", "nervioso", "nerviosa", "ansiedad",
  "preocupado", "preocupada", "aterrado", "aterrada", "susto",
];

const ASCO: &[&str] = &[
  "asco", "asqueroso", "asquerosa", "repugnante", "nauseabundo", "horrible", "desagradable",
  "vomito", "podrido", "podrida", "repulsivo", "repulsiva",
];

const SORPRESA: &[&str] = &[
  "sorpresa", "sorprendido", "sorprendida", "increible", "asombroso", "asombrosa", "asombrado",
  "asombrada", "wow", "guau", "inesperado", "inesperada", "impresionante",
];

// Window Modifiers
// ================

/// Intensifiers and the multiplier each applies to a matched word's magnitude
const INTENSIFIERS: &[(&str, f64)] = &[
  ("muy", 1.5),
  ("mucho", 1.5),
  ("mucha", 1.5),
  ("muchisimo", 1.8),
  ("super", 2.0),
  ("demasiado", 1.7),
  ("realmente", 1.5),
  ("bastante", 1.3),
  ("tan", 1.4),
  ("sumamente", 1.8),
  ("extremadamente", 2.0),
  ("totalmente", 1.6),
];

const ATTENUATORS: &[&str] = &["poco", "algo", "apenas", "medio", "ligeramente", "casi"];

const NEGATORS: &[&str] = &["no", "nunca", "jamas", "tampoco", "ni", "sin"];

/// Magnitude removed from a word when an attenuator precedes it
pub const ATTENUATION: f64 = 0.5;

// Emoji
// =====

const POSITIVE_EMOJI: &[char] = &['😊', '😀', '😁', '😃', '😄', '😍', '🥰', '😂', '👍', '❤', '🎉', '🙂'];

const NEGATIVE_EMOJI: &[char] = &['😢', '😭', '😡', '😠', '👎', '💔', '😞', '😔', '😤', '🤬'];

/// Weight a single emoji adds to (or removes from) the running total
pub const EMOJI_WEIGHT: f64 = 1.0;

static VOCABULARIES: Lazy<HashMap<Category, HashSet<&'static str>>> = Lazy::new(|| {
  Category::ALL.iter().map(|category| (*category, category.words().iter().copied().collect())).collect()
});

static INTENSIFIER_TABLE: Lazy<HashMap<&'static str, f64>> =
  Lazy::new(|| INTENSIFIERS.iter().copied().collect());

static ATTENUATOR_SET: Lazy<HashSet<&'static str>> = Lazy::new(|| ATTENUATORS.iter().copied().collect());

static NEGATOR_SET: Lazy<HashSet<&'static str>> = Lazy::new(|| NEGATORS.iter().copied().collect());

/// Every category whose vocabulary contains `token`, in [`Category::ALL`] order
pub fn categories_of(token: &str) -> impl Iterator<Item = Category> + '_ {
  Category::ALL
    .into_iter()
    .filter(move |category| VOCABULARIES.get(category).is_some_and(|words| words.contains(token)))
}

pub fn intensifier_multiplier(token: &str) -> Option<f64> {
  INTENSIFIER_TABLE.get(token).copied()
}

pub fn is_attenuator(token: &str) -> bool {
  ATTENUATOR_SET.contains(token)
}

pub fn is_negator(token: &str) -> bool {
  NEGATOR_SET.contains(token)
}

/// Signed emoji weight for a single char, zero when it carries no polarity
pub fn emoji_polarity(c: char) -> f64 {
  if POSITIVE_EMOJI.contains(&c) {
    EMOJI_WEIGHT
  } else if NEGATIVE_EMOJI.contains(&c) {
    -EMOJI_WEIGHT
  } else {
    0.0
  }
}
