//! Loading generator tuning (sampling probabilities) from TOML.
//!
//! Defaults reproduce the production sampling behavior; a TOML file
//! pointed at by GENERATOR_CONFIG_PATH can override individual values.

use std::path::Path;

use serde::Deserialize;
use tracing::{error, info};

/// Probabilities the sampler rolls against. All values are in [0, 1].
#[derive(Clone, Copy, Debug, Deserialize)]
#[serde(default)]
pub struct GeneratorConfig {
  /// Chance a time-period-capable category gets an era attached.
  pub time_period_probability: f64,
  /// Chance an attached era also gets a specific year.
  pub specific_year_probability: f64,
  /// Chance the text gets a geographic scope.
  pub geographic_probability: f64,
}

impl Default for GeneratorConfig {
  fn default() -> Self {
    Self {
      time_period_probability: 0.7,
      specific_year_probability: 0.5,
      geographic_probability: 0.3,
    }
  }
}

impl GeneratorConfig {
  fn is_valid(&self) -> bool {
    [
      self.time_period_probability,
      self.specific_year_probability,
      self.geographic_probability,
    ]
    .iter()
    .all(|p| (0.0..=1.0).contains(p))
  }
}

/// Attempt to load a `GeneratorConfig` from a TOML file. On any IO,
/// parsing, or range error, returns None (callers fall back to the
/// defaults).
pub fn load_generator_config(path: &Path) -> Option<GeneratorConfig> {
  match std::fs::read_to_string(path) {
    Ok(s) => match toml::from_str::<GeneratorConfig>(&s) {
      Ok(cfg) if cfg.is_valid() => {
        info!(target: "lectura_core", path = %path.display(), "Loaded generator config (TOML)");
        Some(cfg)
      }
      Ok(_) => {
        error!(target: "lectura_core", path = %path.display(), "Generator config has probabilities outside [0, 1]");
        None
      }
      Err(e) => {
        error!(target: "lectura_core", path = %path.display(), error = %e, "Failed to parse TOML config");
        None
      }
    },
    Err(e) => {
      error!(target: "lectura_core", path = %path.display(), error = %e, "Failed to read TOML config file");
      None
    }
  }
}

/// Attempt to load a `GeneratorConfig` from GENERATOR_CONFIG_PATH.
pub fn load_generator_config_from_env() -> Option<GeneratorConfig> {
  let path = std::env::var("GENERATOR_CONFIG_PATH").ok()?;
  load_generator_config(Path::new(&path))
}

#[cfg(test)]
mod tests {
  use std::io::Write;

  use super::*;

  #[test]
  fn defaults_match_production_probabilities() {
    let cfg = GeneratorConfig::default();
    assert_eq!(cfg.time_period_probability, 0.7);
    assert_eq!(cfg.specific_year_probability, 0.5);
    assert_eq!(cfg.geographic_probability, 0.3);
  }

  #[test]
  fn partial_toml_overrides_keep_remaining_defaults() {
    let mut f = tempfile::NamedTempFile::new().expect("tempfile");
    writeln!(f, "time_period_probability = 1.0").expect("write");
    let cfg = load_generator_config(f.path()).expect("loads");
    assert_eq!(cfg.time_period_probability, 1.0);
    assert_eq!(cfg.specific_year_probability, 0.5);
  }

  #[test]
  fn out_of_range_probability_is_rejected() {
    let mut f = tempfile::NamedTempFile::new().expect("tempfile");
    writeln!(f, "geographic_probability = 1.5").expect("write");
    assert!(load_generator_config(f.path()).is_none());
  }

  #[test]
  fn unreadable_or_malformed_files_yield_none() {
    assert!(load_generator_config(Path::new("/nonexistent/generator.toml")).is_none());
    let mut f = tempfile::NamedTempFile::new().expect("tempfile");
    writeln!(f, "not toml at all [").expect("write");
    assert!(load_generator_config(f.path()).is_none());
  }
}
