//! Generation logging collaborator: structured records of each
//! attempt, success, and failure.
//!
//! Persistence of the records (and its failure handling) belongs to
//! the storage layer, not here; the in-crate implementation emits
//! tracing events so generations stay observable in any deployment.

use std::time::Duration;

use serde_json::json;
use tracing::{debug, error, info, warn};
use uuid::Uuid;

use crate::domain::{GenerateOptions, GeneratedPrompt, SampledParams};
use crate::error::{GenerateError, SeedError};

/// Receives one record per notable generation event. All hooks are
/// fire-and-forget: implementations swallow their own failures and
/// must never propagate anything back into generation.
pub trait GenerationLog: Send + Sync {
  /// A caller-supplied seed decoded successfully.
  fn seed_decoded(&self, seed: &str, user_id: Option<i64>);

  /// A caller-supplied seed was rejected; generation falls back to
  /// random sampling.
  fn seed_decode_failed(&self, seed: &str, error: &SeedError, user_id: Option<i64>);

  /// A prompt was produced (on both the seed and the random path).
  fn prompt_generated(&self, prompt: &GeneratedPrompt, user_id: Option<i64>, elapsed: Duration);

  /// Generation failed outright; the error is re-raised to the caller
  /// after this hook returns.
  fn generation_failed(&self, error: &GenerateError, options: &GenerateOptions, user_id: Option<i64>);
}

/// Emits each record as a structured tracing event under the
/// `prompt_log` target, one minted record id per event.
#[derive(Clone, Copy, Debug, Default)]
pub struct TracingLog;

impl GenerationLog for TracingLog {
  fn seed_decoded(&self, seed: &str, user_id: Option<i64>) {
    debug!(target: "prompt_log", record_id = %Uuid::new_v4(), %seed, user_id = ?user_id,
      "Seed decoded successfully");
  }

  fn seed_decode_failed(&self, seed: &str, error: &SeedError, user_id: Option<i64>) {
    warn!(target: "prompt_log", record_id = %Uuid::new_v4(), %seed, user_id = ?user_id, error = %error,
      "Failed to decode seed, generating random prompt instead");
  }

  fn prompt_generated(&self, prompt: &GeneratedPrompt, user_id: Option<i64>, elapsed: Duration) {
    info!(target: "prompt_log", record_id = %Uuid::new_v4(), seed = %prompt.seed, user_id = ?user_id,
      params = %log_params(&prompt.params), duration_ms = elapsed.as_millis() as u64,
      "Prompt generated successfully for reading text");
  }

  fn generation_failed(&self, error: &GenerateError, options: &GenerateOptions, user_id: Option<i64>) {
    error!(target: "prompt_log", record_id = %Uuid::new_v4(), user_id = ?user_id, options = ?options,
      error = %error, "Failed to generate prompt");
  }
}

/// Trimmed JSON view of the parameters, the shape handed to the
/// persistence collaborator.
pub fn log_params(params: &SampledParams) -> serde_json::Value {
  json!({
    "primaryCategory": params.primary_category.id,
    "subcategories": params.subcategories,
    "timePeriod": params.time_period.map(|p| json!({ "id": p.id, "name": p.name })),
    "specificYear": params.specific_year,
    "textSize": {
      "label": params.text_size.label,
      "min": params.text_size.min,
      "max": params.text_size.max,
    },
    "difficulty": params.difficulty.id,
    "contentType": params.content_type,
    "perspective": params.perspective,
    "geographicContext": params.geographic_context,
    "uniqueFocusElement": params.unique_focus_element,
  })
}

#[cfg(test)]
mod tests {
  use super::*;
  use crate::catalog::{self, DIFFICULTY_LEVELS, TEXT_SIZES};
  use crate::domain::{ContentType, GeographicRegion, Perspective};

  #[test]
  fn log_params_produces_the_trimmed_record_shape() {
    let params = SampledParams {
      primary_category: catalog::category("programming").expect("category"),
      subcategories: vec!["Web Development"],
      time_period: catalog::time_period("modern_computing"),
      specific_year: Some(1999),
      text_size: &TEXT_SIZES[2],
      difficulty: &DIFFICULTY_LEVELS[1],
      content_type: ContentType::Evolution,
      perspective: Perspective::Benefits,
      geographic_context: Some(GeographicRegion::Global),
      unique_focus_element: "evolution of best practices",
    };
    let v = log_params(&params);
    assert_eq!(v["primaryCategory"], "programming");
    assert_eq!(v["timePeriod"]["id"], "modern_computing");
    assert_eq!(v["timePeriod"]["name"], "the modern computing era");
    assert_eq!(v["specificYear"], 1999);
    assert_eq!(v["textSize"]["max"], 350);
    assert_eq!(v["difficulty"], "medium");
    assert_eq!(v["contentType"], "evolution");
    assert_eq!(v["geographicContext"], "global");
  }

  #[test]
  fn absent_optionals_serialize_as_null() {
    let params = SampledParams {
      primary_category: catalog::category("education").expect("category"),
      subcategories: vec!["Study Techniques"],
      time_period: None,
      specific_year: None,
      text_size: &TEXT_SIZES[0],
      difficulty: &DIFFICULTY_LEVELS[0],
      content_type: ContentType::HowItWorks,
      perspective: Perspective::Process,
      geographic_context: None,
      unique_focus_element: "the psychology behind it",
    };
    let v = log_params(&params);
    assert!(v["timePeriod"].is_null());
    assert!(v["specificYear"].is_null());
    assert!(v["geographicContext"].is_null());
  }
}
