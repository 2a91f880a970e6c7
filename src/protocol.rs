//! Public DTOs the API layer returns to the mobile client (serde
//! ready). Keep this small and stable so backend and app can evolve
//! independently.

use serde::Serialize;

use crate::catalog::{CATEGORIES, TEXT_SIZES, TIME_PERIODS};

/// Everything a client needs to render the generation form.
#[derive(Clone, Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GenerationOptionsView {
  pub categories: Vec<CategoryOption>,
  pub sizes: Vec<SizeOption>,
  pub time_periods: Vec<TimePeriodOption>,
}

#[derive(Clone, Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CategoryOption {
  pub id: &'static str,
  pub name: &'static str,
  pub subcategories: Vec<SubcategoryOption>,
  pub supports_time_period: bool,
}

#[derive(Clone, Debug, Serialize)]
pub struct SubcategoryOption {
  pub id: &'static str,
  pub name: &'static str,
}

#[derive(Clone, Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SizeOption {
  pub id: &'static str,
  /// Capitalized display label ("Short").
  pub label: String,
  pub word_range: String,
  pub reading_time: &'static str,
}

#[derive(Clone, Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TimePeriodOption {
  pub id: &'static str,
  pub name: &'static str,
  /// Human year window; BCE years are spelled out.
  pub year_range: String,
}

/// Assemble the full option listing from the catalogs.
pub fn generation_options() -> GenerationOptionsView {
  GenerationOptionsView {
    categories: CATEGORIES
      .iter()
      .map(|cat| CategoryOption {
        id: cat.id,
        name: cat.name,
        subcategories: cat
          .subcategories
          .iter()
          .map(|sub| SubcategoryOption { id: sub.id, name: sub.name })
          .collect(),
        supports_time_period: cat.supports_time_period,
      })
      .collect(),
    sizes: TEXT_SIZES
      .iter()
      .map(|size| SizeOption {
        id: size.label,
        label: capitalize(size.label),
        word_range: format!("{}-{} words", size.min, size.max),
        reading_time: size.reading_time,
      })
      .collect(),
    time_periods: TIME_PERIODS
      .iter()
      .map(|period| TimePeriodOption {
        id: period.id,
        name: period.name,
        year_range: format_year_range(period.year_range),
      })
      .collect(),
  }
}

fn capitalize(s: &str) -> String {
  let mut chars = s.chars();
  match chars.next() {
    Some(first) => first.to_uppercase().chain(chars).collect(),
    None => String::new(),
  }
}

fn format_year_range([start, end]: [i32; 2]) -> String {
  if start < 0 {
    format!("{} BCE - {} CE", -start, end)
  } else {
    format!("{start} - {end}")
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn options_cover_every_catalog_entry() {
    let view = generation_options();
    assert_eq!(view.categories.len(), CATEGORIES.len());
    assert_eq!(view.sizes.len(), TEXT_SIZES.len());
    assert_eq!(view.time_periods.len(), TIME_PERIODS.len());
  }

  #[test]
  fn size_options_are_display_formatted() {
    let view = generation_options();
    let short = &view.sizes[0];
    assert_eq!(short.id, "short");
    assert_eq!(short.label, "Short");
    assert_eq!(short.word_range, "80-120 words");
    assert_eq!(short.reading_time, "~1 min");
  }

  #[test]
  fn bce_year_ranges_are_spelled_out() {
    let view = generation_options();
    let ancient = view.time_periods.iter().find(|p| p.id == "ancient").expect("ancient");
    assert_eq!(ancient.year_range, "3000 BCE - 500 CE");
    let nineties = view.time_periods.iter().find(|p| p.id == "1990s").expect("1990s");
    assert_eq!(nineties.year_range, "1990 - 1999");
  }

  #[test]
  fn view_serializes_with_camel_case_keys() {
    let v = serde_json::to_value(generation_options()).expect("serializable");
    assert!(v["timePeriods"].is_array());
    assert!(v["categories"][0]["supportsTimePeriod"].is_boolean());
  }
}
