//! Lectura · Reading-Practice Backend Core
//!
//! - Deterministic prompt building over randomly sampled topic parameters
//! - Compact lossy seed strings for reproducing a generation
//! - Structured generation logging (tracing) behind a collaborator trait
//! - Daily streak arithmetic for the gamification layer
//!
//! The HTTP controllers, persistence, auth, and the client that talks to
//! the external text-generation service live in the surrounding
//! application; this crate is the synchronous core they call into.
//!
//! Important env variables:
//!   GENERATOR_CONFIG_PATH : TOML file overriding sampling probabilities
//!   LOG_LEVEL    : tracing filter, e.g. "debug" or full directives
//!   LOG_FORMAT   : "pretty" (default) or "json"

pub mod catalog;
pub mod config;
pub mod domain;
pub mod error;
pub mod generator;
pub mod log;
pub mod prompt;
pub mod protocol;
pub mod sampler;
pub mod seed;
pub mod streak;
pub mod telemetry;

pub use config::GeneratorConfig;
pub use domain::{
  ContentType, DifficultyLevel, GenerateOptions, GeneratedPrompt, GeographicRegion, Perspective,
  SampledParams, TextSize,
};
pub use error::{GenerateError, SeedError};
pub use generator::PromptGenerator;
pub use log::{GenerationLog, TracingLog};
