//! Random sampling of prompt parameters over the static catalogs.
//!
//! Every public entry point takes the random source as a parameter so
//! callers (and tests) control determinism; only the generator facade
//! reaches for `thread_rng`.

use rand::seq::SliceRandom;
use rand::Rng;

use crate::catalog::{self, CategoryConfig, TimePeriod, CATEGORIES, DIFFICULTY_LEVELS, TEXT_SIZES};
use crate::config::GeneratorConfig;
use crate::domain::{ContentType, GenerateOptions, GeographicRegion, Perspective, SampledParams};
use crate::error::GenerateError;
use crate::seed::DecodedSeed;

/// Sample a full parameter set, honoring whatever the options pin down.
///
/// The only failure mode is an explicit `options.category` naming a
/// category that is not in the catalog; every random branch has a
/// defined fallback.
pub fn sample<R: Rng>(
  options: &GenerateOptions,
  cfg: &GeneratorConfig,
  rng: &mut R,
) -> Result<SampledParams, GenerateError> {
  let category = match options.category.as_deref() {
    Some(id) => {
      catalog::category(id).ok_or_else(|| GenerateError::UnknownCategory(id.to_string()))?
    }
    None => CATEGORIES.choose(rng).unwrap_or(&CATEGORIES[0]),
  };

  let subcategories = sample_subcategories(category, rng);

  let text_size = match options.size {
    Some(size) => catalog::size_config(size),
    None => TEXT_SIZES.choose(rng).unwrap_or(&TEXT_SIZES[0]),
  };

  let difficulty = match options.difficulty {
    Some(level) => catalog::difficulty_config(level),
    None => DIFFICULTY_LEVELS.choose(rng).unwrap_or(&DIFFICULTY_LEVELS[0]),
  };

  let time_period = if category.supports_time_period {
    match options.time_period.as_deref() {
      // An explicit era skips the applicability filter; an unknown id
      // leaves the era unset rather than erroring.
      Some(id) => catalog::time_period(id),
      None if rng.gen_bool(cfg.time_period_probability) => sample_period_for(category, rng),
      None => None,
    }
  } else {
    None
  };

  let specific_year = time_period.and_then(|p| sample_year(p, cfg, rng));

  Ok(SampledParams {
    primary_category: category,
    subcategories,
    time_period,
    specific_year,
    text_size,
    difficulty,
    content_type: sample_content_type(rng),
    perspective: sample_perspective(rng),
    geographic_context: sample_geography(cfg, rng),
    unique_focus_element: sample_focus(category, rng),
  })
}

/// Rebuild full parameters from the stable fields of a decoded seed,
/// re-sampling everything the seed does not retain.
pub fn resample_around<R: Rng>(
  decoded: DecodedSeed,
  cfg: &GeneratorConfig,
  rng: &mut R,
) -> SampledParams {
  let subcategories = sample_subcategories(decoded.category, rng);
  let specific_year = decoded.time_period.and_then(|p| sample_year(p, cfg, rng));

  SampledParams {
    primary_category: decoded.category,
    subcategories,
    time_period: decoded.time_period,
    specific_year,
    text_size: decoded.size,
    difficulty: decoded.difficulty,
    content_type: sample_content_type(rng),
    perspective: sample_perspective(rng),
    geographic_context: sample_geography(cfg, rng),
    unique_focus_element: sample_focus(decoded.category, rng),
  }
}

/// 1-2 distinct subcategories, recorded by display name.
fn sample_subcategories<R: Rng>(category: &'static CategoryConfig, rng: &mut R) -> Vec<&'static str> {
  let count = rng.gen_range(1..=2usize);
  category
    .subcategories
    .choose_multiple(rng, count)
    .map(|s| s.name)
    .collect()
}

fn sample_period_for<R: Rng>(
  category: &'static CategoryConfig,
  rng: &mut R,
) -> Option<&'static TimePeriod> {
  let pool = catalog::periods_for(category.id);
  pool.choose(rng).copied()
}

fn sample_year<R: Rng>(period: &TimePeriod, cfg: &GeneratorConfig, rng: &mut R) -> Option<i32> {
  if rng.gen_bool(cfg.specific_year_probability) {
    Some(rng.gen_range(period.year_range[0]..=period.year_range[1]))
  } else {
    None
  }
}

fn sample_content_type<R: Rng>(rng: &mut R) -> ContentType {
  *ContentType::ALL.choose(rng).unwrap_or(&ContentType::ALL[0])
}

fn sample_perspective<R: Rng>(rng: &mut R) -> Perspective {
  *Perspective::ALL.choose(rng).unwrap_or(&Perspective::ALL[0])
}

fn sample_geography<R: Rng>(cfg: &GeneratorConfig, rng: &mut R) -> Option<GeographicRegion> {
  if rng.gen_bool(cfg.geographic_probability) {
    GeographicRegion::ALL.choose(rng).copied()
  } else {
    None
  }
}

fn sample_focus<R: Rng>(category: &'static CategoryConfig, rng: &mut R) -> &'static str {
  category.focus_elements.choose(rng).copied().unwrap_or(category.focus_elements[0])
}
