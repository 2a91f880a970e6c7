//! Typed errors for seed decoding and prompt generation.

use thiserror::Error;

/// Why a seed string could not be decoded back into prompt parameters.
///
/// These never escape [`crate::generator::PromptGenerator::generate`]:
/// a failed decode is reported to the logging collaborator and the
/// request falls back to fresh random sampling.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum SeedError {
  /// Fewer '_'-delimited fields than the seed format requires.
  #[error("seed has {found} fields, expected at least {expected}")]
  InvalidFormat { found: usize, expected: usize },

  /// Field 0 is not a prefix of any category id.
  #[error("no category matches seed field '{0}'")]
  UnknownCategory(String),

  /// Field 2 is neither "none" nor a prefix of any time period id.
  #[error("no time period matches seed field '{0}'")]
  UnknownTimePeriod(String),

  /// Field 3 is not a prefix of any text size label.
  #[error("no text size matches seed field '{0}'")]
  UnknownSize(String),

  /// Field 4 is not a prefix of any difficulty id.
  #[error("no difficulty matches seed field '{0}'")]
  UnknownDifficulty(String),
}

/// Errors raised by prompt generation itself. Unlike [`SeedError`]
/// these propagate to the caller (after being logged) and the request
/// is considered failed; there is no retry here.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum GenerateError {
  /// The caller explicitly requested a category id that is not in the
  /// catalog.
  #[error("unknown category '{0}'")]
  UnknownCategory(String),
}
