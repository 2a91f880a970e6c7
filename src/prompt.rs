//! Rendering sampled parameters into the system/user prompt pair.
//!
//! Pure string templating: fixed parameters render byte-identically on
//! every call. An unmapped enum key here would be a configuration
//! defect, not a runtime condition, so nothing returns `Result`.

use crate::catalog::CATEGORIES;
use crate::domain::{GeographicRegion, SampledParams};

/// The fixed system prompt: output format contract plus behavioral
/// constraints. Embeds the live category id enumeration so the model
/// is told the exact allowed values.
pub fn build_system_prompt() -> String {
  let categories = CATEGORIES.iter().map(|c| c.id).collect::<Vec<_>>().join(" | ");
  format!(
    r#"You are an English content generator for language learners.
Your task is to generate neutral, informative reading texts in English.
The text must be expository, not narrative.
Do not create stories or characters.
Do not use personal names or personal experiences.
Do not mention that you are an AI.

IMPORTANT: You must respond ONLY with a valid JSON object in this exact format:
{{
  "title": "A short, engaging title for the text (max 100 characters)",
  "description": "A brief 1-2 sentence summary of what the text is about",
  "content": "The full reading text",
  "category": "{categories}",
  "difficulty": "easy | medium | hard"
}}

Do not include any text before or after the JSON. Only output the JSON object."#
  )
}

/// The parameter-driven user prompt. Optional blocks (temporal,
/// geographic) are omitted entirely when their parameter is absent.
pub fn build_user_prompt(params: &SampledParams) -> String {
  let mut prompt = format!(
    "Generate a reading text in English with the following specific constraints:

TOPIC REQUIREMENTS:
- Primary topic: {}, focusing on {}
- Content type: Write about {}
- Perspective: Focus on {}
- Unique angle: Explore {}
",
    params.primary_category.name,
    params.subcategories.join(" and "),
    params.content_type.description(),
    params.perspective.description(),
    params.unique_focus_element,
  );

  if let Some(period) = params.time_period {
    let year = params.specific_year.map(|y| format!(" (around {y})")).unwrap_or_default();
    prompt.push_str(&format!(
      "
TEMPORAL CONTEXT:
- Time period: {}{}
- Reference this era's context, terminology, and developments
",
      period.name, year
    ));
  }

  if let Some(region) = params.geographic_context {
    prompt.push_str(&format!(
      "
GEOGRAPHIC SCOPE:
- Consider {}
",
      region_phrase(region)
    ));
  }

  prompt.push_str(&format!(
    "
TEXT SPECIFICATIONS:
- Length: {}-{} words ({} length)
- Style: Informative and explanatory, like a short article
- Tone: Neutral and engaging

LANGUAGE LEVEL REQUIREMENTS (CRITICAL - THIS IS THE DIFFICULTY):
- Target level: {}
- The output \"difficulty\" field MUST be \"{}\"
- VOCABULARY: {}
- GRAMMAR: {}

STRICT RULES:
- Do NOT tell a story or create characters
- Do NOT use personal names or experiences
- Do NOT write in first or third person narrative
- Do NOT use bullet points or numbered lists in the content
- Output ONLY the JSON object as specified",
    params.text_size.min,
    params.text_size.max,
    params.text_size.label,
    params.difficulty.description,
    params.difficulty.id,
    params.difficulty.vocabulary_guidelines,
    params.difficulty.grammar_guidelines,
  ));

  prompt
}

fn region_phrase(region: GeographicRegion) -> &'static str {
  match region {
    GeographicRegion::Global => "a global perspective",
    GeographicRegion::Europe => "Europe",
    GeographicRegion::Asia => "Asia",
    GeographicRegion::Americas => "the Americas",
    GeographicRegion::Africa => "Africa",
    GeographicRegion::Oceania => "Oceania",
  }
}
