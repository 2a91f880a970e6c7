//! Domain models: generation options, sampled prompt parameters, and
//! the closed enumerations they draw from.

use serde::{Deserialize, Serialize, Serializer};

use crate::catalog::{CategoryConfig, DifficultyConfig, TextSizeConfig, TimePeriod};

/// Text length bucket a caller may request.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TextSize {
  Short,
  Medium,
  Long,
}

/// Difficulty level a caller may request (CEFR-aligned, see the
/// difficulty catalog for the mapping).
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DifficultyLevel {
  Easy,
  Medium,
  Hard,
}

/// What kind of text the model is asked to write.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ContentType {
  HistoricalFact,
  InterestingDiscovery,
  HowItWorks,
  Comparison,
  Evolution,
  CuriousPhenomenon,
  PracticalApplication,
}

impl ContentType {
  pub const ALL: [ContentType; 7] = [
    ContentType::HistoricalFact,
    ContentType::InterestingDiscovery,
    ContentType::HowItWorks,
    ContentType::Comparison,
    ContentType::Evolution,
    ContentType::CuriousPhenomenon,
    ContentType::PracticalApplication,
  ];

  pub fn as_str(self) -> &'static str {
    match self {
      ContentType::HistoricalFact => "historical_fact",
      ContentType::InterestingDiscovery => "interesting_discovery",
      ContentType::HowItWorks => "how_it_works",
      ContentType::Comparison => "comparison",
      ContentType::Evolution => "evolution",
      ContentType::CuriousPhenomenon => "curious_phenomenon",
      ContentType::PracticalApplication => "practical_application",
    }
  }

  /// Noun phrase used in the user prompt ("Write about ...").
  pub fn description(self) -> &'static str {
    match self {
      ContentType::HistoricalFact => "a historical fact or event",
      ContentType::InterestingDiscovery => "an interesting discovery or finding",
      ContentType::HowItWorks => "an explanation of how something works",
      ContentType::Comparison => "a comparison between two related concepts or things",
      ContentType::Evolution => "the evolution or development of something over time",
      ContentType::CuriousPhenomenon => "a curious or surprising phenomenon",
      ContentType::PracticalApplication => "a practical application or real-world use case",
    }
  }
}

/// Rhetorical angle the text should take, orthogonal to [`ContentType`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Perspective {
  Causes,
  Effects,
  Process,
  Comparison,
  Evolution,
  Benefits,
  Challenges,
}

impl Perspective {
  pub const ALL: [Perspective; 7] = [
    Perspective::Causes,
    Perspective::Effects,
    Perspective::Process,
    Perspective::Comparison,
    Perspective::Evolution,
    Perspective::Benefits,
    Perspective::Challenges,
  ];

  /// Noun phrase used in the user prompt ("Focus on ...").
  pub fn description(self) -> &'static str {
    match self {
      Perspective::Causes => "the causes and origins",
      Perspective::Effects => "the effects and consequences",
      Perspective::Process => "the process and methodology",
      Perspective::Comparison => "comparisons and contrasts",
      Perspective::Evolution => "evolution and changes over time",
      Perspective::Benefits => "the benefits and advantages",
      Perspective::Challenges => "the challenges and difficulties",
    }
  }
}

/// Optional geographic scope of the text.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum GeographicRegion {
  Global,
  Europe,
  Asia,
  Americas,
  Africa,
  Oceania,
}

impl GeographicRegion {
  pub const ALL: [GeographicRegion; 6] = [
    GeographicRegion::Global,
    GeographicRegion::Europe,
    GeographicRegion::Asia,
    GeographicRegion::Americas,
    GeographicRegion::Africa,
    GeographicRegion::Oceania,
  ];
}

/// Options a caller may pass when generating. Every field is optional;
/// a present `seed` wins over the other fields when it decodes.
#[derive(Clone, Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct GenerateOptions {
  pub category: Option<String>,
  pub size: Option<TextSize>,
  pub difficulty: Option<DifficultyLevel>,
  pub time_period: Option<String>,
  pub seed: Option<String>,
}

/// The full parameter set one generation was sampled with. Built by the
/// sampler, consumed by the prompt builder, then discarded; the seed
/// string is its only durable trace.
#[derive(Clone, Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SampledParams {
  #[serde(serialize_with = "category_as_id")]
  pub primary_category: &'static CategoryConfig,
  /// 1-2 subcategory display names (not ids).
  pub subcategories: Vec<&'static str>,
  pub time_period: Option<&'static TimePeriod>,
  pub specific_year: Option<i32>,
  pub text_size: &'static TextSizeConfig,
  pub difficulty: &'static DifficultyConfig,
  pub content_type: ContentType,
  pub perspective: Perspective,
  pub geographic_context: Option<GeographicRegion>,
  pub unique_focus_element: &'static str,
}

/// A prompt ready for submission to the text-generation service.
#[derive(Clone, Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GeneratedPrompt {
  pub system_prompt: String,
  pub user_prompt: String,
  pub params: SampledParams,
  pub seed: String,
}

fn category_as_id<S: Serializer>(c: &&'static CategoryConfig, s: S) -> Result<S::Ok, S::Error> {
  s.serialize_str(c.id)
}
