//! Seed strings: a compact, deliberately lossy snapshot of sampled
//! prompt parameters.
//!
//! Encoding keeps only the fields that anchor topical consistency
//! (category, era, size, difficulty) plus abbreviations and a
//! millisecond timestamp that doubles as an audit token. Decoding
//! recovers exactly those fields; everything else is re-sampled by the
//! caller. Two encodings of the same parameters therefore differ in
//! the timestamp field but decode identically.

use chrono::Utc;

use crate::catalog::{
  CategoryConfig, DifficultyConfig, TextSizeConfig, TimePeriod, CATEGORIES, DIFFICULTY_LEVELS,
  TEXT_SIZES, TIME_PERIODS,
};
use crate::domain::SampledParams;
use crate::error::SeedError;

/// A seed must carry at least category, subcategory, period, size,
/// difficulty and content-type fields to be decodable.
pub const MIN_FIELDS: usize = 6;

/// The exactly-recoverable part of a seed. The lossy remainder
/// (subcategories, year, content type, perspective, geography, focus)
/// is re-sampled by `sampler::resample_around`.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct DecodedSeed {
  pub category: &'static CategoryConfig,
  pub time_period: Option<&'static TimePeriod>,
  pub size: &'static TextSizeConfig,
  pub difficulty: &'static DifficultyConfig,
}

/// Serialize `params` into a fresh seed string.
pub fn encode(params: &SampledParams) -> String {
  let mut parts: Vec<String> = Vec::with_capacity(7);

  parts.push(prefix(params.primary_category.id, 4).to_string());

  // First subcategory, lower-cased with whitespace stripped. "none" is
  // the stable placeholder so field positions never shift.
  match params.subcategories.first() {
    Some(name) => {
      let compact: String = name.to_lowercase().split_whitespace().collect();
      parts.push(prefix(&compact, 6).to_string());
    }
    None => parts.push("none".into()),
  }

  match params.time_period {
    Some(p) => parts.push(p.id.replace('_', "")),
    None => parts.push("none".into()),
  }

  parts.push(prefix(params.text_size.label, 3).to_string());
  parts.push(prefix(params.difficulty.id, 3).to_string());

  let content = params.content_type.as_str();
  let head = content.split('_').next().unwrap_or(content);
  parts.push(prefix(head, 4).to_string());

  parts.push(Utc::now().timestamp_millis().to_string());

  parts.join("_")
}

/// Attempt to recover the stable fields from a seed string.
///
/// Every prefix match is case-sensitive and resolves to the first
/// catalog entry in declaration order.
pub fn decode(seed: &str) -> Result<DecodedSeed, SeedError> {
  let parts: Vec<&str> = seed.split('_').collect();
  if parts.len() < MIN_FIELDS {
    return Err(SeedError::InvalidFormat { found: parts.len(), expected: MIN_FIELDS });
  }

  let category = CATEGORIES
    .iter()
    .find(|c| c.id.starts_with(parts[0]))
    .ok_or_else(|| SeedError::UnknownCategory(parts[0].to_string()))?;

  let size = TEXT_SIZES
    .iter()
    .find(|s| s.label.starts_with(parts[3]))
    .ok_or_else(|| SeedError::UnknownSize(parts[3].to_string()))?;

  let difficulty = DIFFICULTY_LEVELS
    .iter()
    .find(|d| d.id.starts_with(parts[4]))
    .ok_or_else(|| SeedError::UnknownDifficulty(parts[4].to_string()))?;

  // Period ids are stored with their underscores stripped.
  let time_period = if parts[2] == "none" {
    None
  } else {
    Some(
      TIME_PERIODS
        .iter()
        .find(|p| p.id.replace('_', "").starts_with(parts[2]))
        .ok_or_else(|| SeedError::UnknownTimePeriod(parts[2].to_string()))?,
    )
  };

  Ok(DecodedSeed { category, time_period, size, difficulty })
}

/// First `n` characters of `s` (the whole of `s` when shorter).
fn prefix(s: &str, n: usize) -> &str {
  match s.char_indices().nth(n) {
    Some((i, _)) => &s[..i],
    None => s,
  }
}
