//! The prompt generation service: wires the seed codec, the sampler
//! and the prompt builder together and reports every attempt to the
//! logging collaborator.
//!
//! The service is synchronous and stateless apart from its config and
//! log handle; concurrent callers need no coordination.

use std::sync::Arc;
use std::time::Instant;

use rand::Rng;
use tracing::instrument;

use crate::config::{load_generator_config_from_env, GeneratorConfig};
use crate::domain::{GenerateOptions, GeneratedPrompt, SampledParams};
use crate::error::{GenerateError, SeedError};
use crate::log::{GenerationLog, TracingLog};
use crate::{prompt, sampler, seed};

pub struct PromptGenerator {
  log: Arc<dyn GenerationLog>,
  config: GeneratorConfig,
}

impl PromptGenerator {
  /// Build with the tracing-backed log and, when GENERATOR_CONFIG_PATH
  /// points at a readable TOML file, its tuning overrides.
  pub fn new() -> Self {
    Self::with_log(Arc::new(TracingLog), load_generator_config_from_env().unwrap_or_default())
  }

  pub fn with_log(log: Arc<dyn GenerationLog>, config: GeneratorConfig) -> Self {
    Self { log, config }
  }

  /// Generate a prompt with the ambient random source.
  pub fn generate(
    &self,
    options: &GenerateOptions,
    user_id: Option<i64>,
  ) -> Result<GeneratedPrompt, GenerateError> {
    self.generate_with(options, user_id, &mut rand::thread_rng())
  }

  /// Generate with a caller-supplied random source.
  #[instrument(level = "info", skip(self, options, rng), fields(has_seed = options.seed.is_some(), user_id = ?user_id))]
  pub fn generate_with<R: Rng>(
    &self,
    options: &GenerateOptions,
    user_id: Option<i64>,
    rng: &mut R,
  ) -> Result<GeneratedPrompt, GenerateError> {
    let started = Instant::now();

    // A present seed wins over the other option fields. A seed that
    // fails to decode is reported and the request falls through to
    // fresh random sampling; the caller never sees the decode error.
    if let Some(seed_str) = options.seed.as_deref() {
      match seed::decode(seed_str) {
        Ok(decoded) => {
          let generated = assemble(sampler::resample_around(decoded, &self.config, rng));
          self.log.seed_decoded(seed_str, user_id);
          self.log.prompt_generated(&generated, user_id, started.elapsed());
          return Ok(generated);
        }
        Err(err) => self.log.seed_decode_failed(seed_str, &err, user_id),
      }
    }

    let params = match sampler::sample(options, &self.config, rng) {
      Ok(params) => params,
      Err(err) => {
        self.log.generation_failed(&err, options, user_id);
        return Err(err);
      }
    };

    let generated = assemble(params);
    self.log.prompt_generated(&generated, user_id, started.elapsed());
    Ok(generated)
  }

  /// Strict regeneration from a seed: decode errors propagate instead
  /// of falling back to random sampling.
  pub fn generate_from_seed(&self, seed_str: &str) -> Result<GeneratedPrompt, SeedError> {
    self.generate_from_seed_with(seed_str, &mut rand::thread_rng())
  }

  pub fn generate_from_seed_with<R: Rng>(
    &self,
    seed_str: &str,
    rng: &mut R,
  ) -> Result<GeneratedPrompt, SeedError> {
    let decoded = seed::decode(seed_str)?;
    Ok(assemble(sampler::resample_around(decoded, &self.config, rng)))
  }
}

impl Default for PromptGenerator {
  fn default() -> Self {
    Self::new()
  }
}

/// Render both prompts and mint the fresh seed for a parameter set.
fn assemble(params: SampledParams) -> GeneratedPrompt {
  let system_prompt = prompt::build_system_prompt();
  let user_prompt = prompt::build_user_prompt(&params);
  let seed = seed::encode(&params);
  GeneratedPrompt { system_prompt, user_prompt, params, seed }
}

#[cfg(test)]
mod tests {
  use std::sync::Mutex;
  use std::time::Duration;

  use rand::rngs::StdRng;
  use rand::SeedableRng;

  use super::*;

  #[derive(Default)]
  struct SpyLog {
    events: Mutex<Vec<&'static str>>,
  }

  impl SpyLog {
    fn events(&self) -> Vec<&'static str> {
      self.events.lock().unwrap().clone()
    }
  }

  impl GenerationLog for SpyLog {
    fn seed_decoded(&self, _seed: &str, _user_id: Option<i64>) {
      self.events.lock().unwrap().push("seed_decoded");
    }
    fn seed_decode_failed(&self, _seed: &str, _error: &SeedError, _user_id: Option<i64>) {
      self.events.lock().unwrap().push("seed_decode_failed");
    }
    fn prompt_generated(&self, _p: &GeneratedPrompt, _user_id: Option<i64>, _elapsed: Duration) {
      self.events.lock().unwrap().push("prompt_generated");
    }
    fn generation_failed(&self, _e: &GenerateError, _o: &GenerateOptions, _user_id: Option<i64>) {
      self.events.lock().unwrap().push("generation_failed");
    }
  }

  fn spied_generator() -> (Arc<SpyLog>, PromptGenerator) {
    let spy = Arc::new(SpyLog::default());
    let generator = PromptGenerator::with_log(spy.clone(), GeneratorConfig::default());
    (spy, generator)
  }

  #[test]
  fn malformed_seed_falls_back_to_random_sampling() {
    let (spy, generator) = spied_generator();
    let options = GenerateOptions { seed: Some("x".into()), ..Default::default() };
    let generated = generator
      .generate_with(&options, None, &mut StdRng::seed_from_u64(1))
      .expect("fallback must not error");

    assert!((1..=2).contains(&generated.params.subcategories.len()));
    assert!(!generated.seed.is_empty());
    assert_eq!(spy.events(), ["seed_decode_failed", "prompt_generated"]);
  }

  #[test]
  fn decodable_seed_pins_the_stable_fields_and_wins_over_options() {
    let (spy, generator) = spied_generator();
    let options = GenerateOptions {
      category: Some("technology".into()),
      seed: Some("prog_webdev_none_sho_easy_how_1700000000000".into()),
      ..Default::default()
    };
    let generated = generator
      .generate_with(&options, Some(42), &mut StdRng::seed_from_u64(2))
      .expect("seed path");

    assert_eq!(generated.params.primary_category.id, "programming");
    assert_eq!(generated.params.text_size.label, "short");
    assert_eq!(generated.params.difficulty.id, "easy");
    assert!(generated.params.time_period.is_none());
    assert_eq!(spy.events(), ["seed_decoded", "prompt_generated"]);
  }

  #[test]
  fn unknown_explicit_category_is_logged_then_raised() {
    let (spy, generator) = spied_generator();
    let options = GenerateOptions { category: Some("astrology".into()), ..Default::default() };
    let err = generator
      .generate_with(&options, None, &mut StdRng::seed_from_u64(3))
      .unwrap_err();

    assert_eq!(err, GenerateError::UnknownCategory("astrology".into()));
    assert_eq!(spy.events(), ["generation_failed"]);
  }

  #[test]
  fn random_generation_emits_a_decodable_seed() {
    let (spy, generator) = spied_generator();
    let generated = generator
      .generate_with(&GenerateOptions::default(), None, &mut StdRng::seed_from_u64(4))
      .expect("random path");

    let decoded = seed::decode(&generated.seed).expect("own seed decodes");
    assert_eq!(decoded.category.id, generated.params.primary_category.id);
    assert_eq!(decoded.size.label, generated.params.text_size.label);
    assert_eq!(decoded.difficulty.id, generated.params.difficulty.id);
    assert_eq!(
      decoded.time_period.map(|p| p.id),
      generated.params.time_period.map(|p| p.id)
    );
    assert_eq!(spy.events(), ["prompt_generated"]);
  }

  #[test]
  fn strict_seed_regeneration_propagates_decode_errors() {
    let (spy, generator) = spied_generator();
    let err = generator
      .generate_from_seed_with("x", &mut StdRng::seed_from_u64(5))
      .unwrap_err();
    assert!(matches!(err, SeedError::InvalidFormat { .. }));
    assert!(spy.events().is_empty());
  }
}
