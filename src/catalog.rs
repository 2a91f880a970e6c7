//! Static content catalogs: categories, time periods, text sizes and
//! difficulty levels, plus lookup helpers over them.
//!
//! All tables are compile-time constants; nothing here mutates at
//! runtime. Sampling over the tables lives in `sampler`, rendering in
//! `prompt`.

use serde::Serialize;

use crate::domain::{DifficultyLevel, TextSize};

/// A topical subcategory, child of exactly one category.
#[derive(Clone, Copy, Debug, PartialEq, Serialize)]
pub struct Subcategory {
  pub id: &'static str,
  pub name: &'static str,
  pub keywords: &'static [&'static str],
}

/// One entry of the category catalog.
#[derive(Clone, Copy, Debug, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CategoryConfig {
  pub id: &'static str,
  pub name: &'static str,
  pub supports_time_period: bool,
  pub default_time_period: Option<&'static str>,
  pub subcategories: &'static [Subcategory],
  /// "Unique angle" phrases the sampler draws one of per generation.
  pub focus_elements: &'static [&'static str],
}

/// A named historical era with its year window and the categories it
/// may be attached to.
#[derive(Clone, Copy, Debug, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TimePeriod {
  pub id: &'static str,
  pub name: &'static str,
  /// Inclusive `[start, end]`; negative years denote BCE.
  pub year_range: [i32; 2],
  pub applicable_categories: &'static [&'static str],
}

/// Word-count bucket for a generated text.
#[derive(Clone, Copy, Debug, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TextSizeConfig {
  pub label: &'static str,
  pub min: u32,
  pub max: u32,
  pub reading_time: &'static str,
}

/// CEFR-aligned difficulty level with the guidance strings the prompt
/// builder hands to the model.
#[derive(Clone, Copy, Debug, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DifficultyConfig {
  pub id: &'static str,
  pub label: &'static str,
  pub cefr_levels: [&'static str; 2],
  pub description: &'static str,
  pub vocabulary_guidelines: &'static str,
  pub grammar_guidelines: &'static str,
}

macro_rules! sub {
  ($id:expr, $name:expr, $kw:expr) => {
    Subcategory { id: $id, name: $name, keywords: $kw }
  };
}

pub const TEXT_SIZES: &[TextSizeConfig] = &[
  TextSizeConfig { label: "short", min: 80, max: 120, reading_time: "~1 min" },
  TextSizeConfig { label: "medium", min: 150, max: 220, reading_time: "~2 min" },
  TextSizeConfig { label: "long", min: 250, max: 350, reading_time: "~3 min" },
];

pub const DIFFICULTY_LEVELS: &[DifficultyConfig] = &[
  DifficultyConfig {
    id: "easy",
    label: "Beginner",
    cefr_levels: ["A1", "A2"],
    description: "A1-A2 level (Beginner to Elementary)",
    vocabulary_guidelines: "Use only basic, everyday vocabulary (around 500-1000 most common words). Avoid idioms, phrasal verbs, and technical terms.",
    grammar_guidelines: "Use simple present, simple past, and simple future. Short sentences (8-12 words). Avoid complex structures like conditionals, passive voice, or relative clauses.",
  },
  DifficultyConfig {
    id: "medium",
    label: "Intermediate",
    cefr_levels: ["B1", "B2"],
    description: "B1-B2 level (Intermediate to Upper-Intermediate)",
    vocabulary_guidelines: "Use intermediate vocabulary with some less common words. Include common idioms and phrasal verbs. Topic-specific vocabulary is acceptable with context.",
    grammar_guidelines: "Use a variety of tenses including perfect tenses and conditionals. Medium-length sentences (12-20 words). Can include passive voice and relative clauses.",
  },
  DifficultyConfig {
    id: "hard",
    label: "Advanced",
    cefr_levels: ["C1", "C2"],
    description: "C1-C2 level (Advanced to Proficiency)",
    vocabulary_guidelines: "Use sophisticated vocabulary including academic and specialized terms. Include idiomatic expressions, collocations, and nuanced word choices.",
    grammar_guidelines: "Use complex grammatical structures freely: mixed conditionals, subjunctive, cleft sentences, inversion. Longer, compound-complex sentences are encouraged.",
  },
];

pub const CATEGORIES: &[CategoryConfig] = &[
  CategoryConfig {
    id: "technology",
    name: "Technology",
    supports_time_period: true,
    default_time_period: None,
    subcategories: &[
      sub!("smartphones", "Smartphones and Mobile Technology", &["mobile", "apps", "connectivity"]),
      sub!("ai", "Artificial Intelligence", &["machine learning", "automation", "algorithms"]),
      sub!("cybersecurity", "Cybersecurity", &["privacy", "hacking", "protection"]),
      sub!("social_media", "Social Media", &["platforms", "communication", "networks"]),
      sub!("robotics", "Robotics", &["automation", "machines", "manufacturing"]),
      sub!("cloud", "Cloud Computing", &["servers", "storage", "services"]),
      sub!("iot", "Internet of Things", &["sensors", "smart devices", "connectivity"]),
      sub!("vr_ar", "Virtual and Augmented Reality", &["immersive", "simulation", "3D"]),
    ],
    focus_elements: &[
      "its impact on daily life",
      "how it changed communication",
      "its unexpected origins",
      "common misconceptions about it",
      "its environmental implications",
      "how it affects human behavior",
      "its role in solving global problems",
      "the pioneers who made it possible",
    ],
  },
  CategoryConfig {
    id: "history",
    name: "History",
    supports_time_period: true,
    default_time_period: None,
    subcategories: &[
      sub!("ancient", "Ancient Civilizations", &["empires", "cultures", "archaeology"]),
      sub!("medieval", "Medieval Period", &["kingdoms", "feudalism", "castles"]),
      sub!("wars", "Wars and Conflicts", &["battles", "military", "treaties"]),
      sub!("industrial", "Industrial Revolution", &["factories", "inventions", "urbanization"]),
      sub!("cultural", "Cultural Movements", &["art", "philosophy", "social change"]),
      sub!("inventions", "Famous Inventions", &["innovation", "discovery", "progress"]),
      sub!("exploration", "Exploration and Discovery", &["voyages", "navigation", "colonization"]),
    ],
    focus_elements: &[
      "the key figures involved",
      "the lasting impact on society",
      "lesser-known facts",
      "how it shaped the modern world",
      "the cultural context of the time",
      "what we can learn from it today",
      "the causes that led to it",
      "how different groups experienced it",
    ],
  },
  CategoryConfig {
    id: "education",
    name: "Education",
    supports_time_period: false,
    default_time_period: None,
    subcategories: &[
      sub!("learning", "Learning Methods", &["techniques", "strategies", "retention"]),
      sub!("online", "Online Education", &["e-learning", "platforms", "remote"]),
      sub!("study", "Study Techniques", &["memory", "focus", "habits"]),
      sub!("psychology", "Educational Psychology", &["motivation", "development", "cognition"]),
      sub!("languages", "Language Learning", &["acquisition", "bilingualism", "immersion"]),
      sub!("skills", "Skills Development", &["practice", "mastery", "competence"]),
    ],
    focus_elements: &[
      "research-backed strategies",
      "common mistakes to avoid",
      "how technology is changing it",
      "cultural differences in approach",
      "the psychology behind it",
      "practical tips for implementation",
      "historical development of methods",
      "future trends and innovations",
    ],
  },
  CategoryConfig {
    id: "programming",
    name: "Programming",
    supports_time_period: true,
    default_time_period: Some("modern_computing"),
    subcategories: &[
      sub!("web", "Web Development", &["websites", "frontend", "backend"]),
      sub!("databases", "Databases", &["SQL", "storage", "queries"]),
      sub!("algorithms", "Algorithms", &["sorting", "searching", "optimization"]),
      sub!("software", "Software Engineering", &["design", "architecture", "testing"]),
      sub!("mobile", "Mobile Development", &["apps", "iOS", "Android"]),
      sub!("devops", "DevOps", &["deployment", "automation", "infrastructure"]),
      sub!("security", "Software Security", &["vulnerabilities", "encryption", "authentication"]),
    ],
    focus_elements: &[
      "real-world applications",
      "common pitfalls and how to avoid them",
      "evolution of best practices",
      "performance considerations",
      "security implications",
      "how beginners can get started",
      "advanced techniques for experts",
      "industry standards and conventions",
    ],
  },
  CategoryConfig {
    id: "culture",
    name: "Culture",
    supports_time_period: true,
    default_time_period: None,
    subcategories: &[
      sub!("music", "Music", &["genres", "instruments", "composers"]),
      sub!("art", "Visual Arts", &["painting", "sculpture", "movements"]),
      sub!("literature", "Literature", &["novels", "poetry", "authors"]),
      sub!("traditions", "Traditions and Customs", &["festivals", "rituals", "heritage"]),
      sub!("cinema", "Cinema", &["films", "directors", "genres"]),
      sub!("gastronomy", "Gastronomy", &["cuisine", "recipes", "ingredients"]),
      sub!("architecture", "Architecture", &["buildings", "styles", "design"]),
    ],
    focus_elements: &[
      "historical origins and evolution",
      "regional variations",
      "influence on modern society",
      "famous examples and masterpieces",
      "the creative process behind it",
      "social and political context",
      "cross-cultural comparisons",
      "preservation and future challenges",
    ],
  },
  CategoryConfig {
    id: "pop_culture",
    name: "Pop Culture",
    supports_time_period: true,
    default_time_period: None,
    subcategories: &[
      sub!("anime_manga", "Anime and Manga", &["shonen", "studio ghibli", "naruto", "one piece", "attack on titan", "dragon ball"]),
      sub!("disney", "Disney", &["animated films", "pixar", "princesses", "theme parks", "classics"]),
      sub!("marvel", "Marvel Universe", &["superheroes", "avengers", "comics", "MCU", "spider-man"]),
      sub!("dc", "DC Universe", &["batman", "superman", "justice league", "comics", "dceu"]),
      sub!("pixar", "Pixar Animation", &["toy story", "finding nemo", "inside out", "animation technology"]),
      sub!("dreamworks", "DreamWorks Animation", &["shrek", "how to train your dragon", "kung fu panda", "madagascar"]),
      sub!("gaming", "Video Games", &["nintendo", "playstation", "esports", "minecraft", "fortnite"]),
      sub!("youtubers", "YouTubers and Content Creators", &["vegetta777", "elrubius", "quackity", "auronplay"]),
      sub!("kpop", "K-Pop and Asian Pop Culture", &["korean dramas", "kdrama"]),
      sub!("fun_facts", "Fun Facts and Trivia", &["curiosities", "surprising facts", "behind the scenes", "easter eggs"]),
      sub!("memes", "Internet Culture and Memes", &["viral trends", "social media", "internet phenomena"]),
      sub!("scifi_fantasy", "Sci-Fi and Fantasy Franchises", &["star wars", "harry potter", "lord of the rings", "game of thrones"]),
    ],
    focus_elements: &[
      "behind-the-scenes secrets and fun facts",
      "the creative minds and studios behind it",
      "its cultural impact and global influence",
      "interesting trivia fans might not know",
      "how it revolutionized its genre",
      "memorable characters and why fans love them",
      "connections between different franchises",
      "the evolution from original to modern adaptations",
      "fan theories and hidden meanings",
      "record-breaking achievements and milestones",
    ],
  },
];

pub const TIME_PERIODS: &[TimePeriod] = &[
  TimePeriod {
    id: "ancient",
    name: "ancient times",
    year_range: [-3000, 500],
    applicable_categories: &["history", "culture"],
  },
  TimePeriod {
    id: "medieval",
    name: "the medieval period",
    year_range: [500, 1500],
    applicable_categories: &["history", "culture"],
  },
  TimePeriod {
    id: "renaissance",
    name: "the Renaissance",
    year_range: [1400, 1600],
    applicable_categories: &["history", "culture"],
  },
  TimePeriod {
    id: "early_modern",
    name: "the early modern era",
    year_range: [1500, 1800],
    applicable_categories: &["history", "culture"],
  },
  TimePeriod {
    id: "industrial",
    name: "the Industrial Revolution",
    year_range: [1760, 1840],
    applicable_categories: &["history", "technology", "culture"],
  },
  TimePeriod {
    id: "late_1800s",
    name: "the late 19th century",
    year_range: [1850, 1900],
    applicable_categories: &["history", "technology", "culture"],
  },
  TimePeriod {
    id: "early_1900s",
    name: "the early 20th century",
    year_range: [1900, 1950],
    applicable_categories: &["history", "technology", "culture", "programming"],
  },
  TimePeriod {
    id: "1950s_60s",
    name: "the 1950s and 1960s",
    year_range: [1950, 1969],
    applicable_categories: &["history", "technology", "culture", "programming"],
  },
  TimePeriod {
    id: "1970s",
    name: "the 1970s",
    year_range: [1970, 1979],
    applicable_categories: &["history", "technology", "culture", "programming"],
  },
  TimePeriod {
    id: "1980s",
    name: "the 1980s",
    year_range: [1980, 1989],
    applicable_categories: &["history", "technology", "culture", "programming", "pop_culture"],
  },
  TimePeriod {
    id: "1990s",
    name: "the 1990s",
    year_range: [1990, 1999],
    applicable_categories: &["history", "technology", "culture", "programming", "pop_culture"],
  },
  TimePeriod {
    id: "2000s",
    name: "the 2000s",
    year_range: [2000, 2010],
    applicable_categories: &["technology", "culture", "programming", "pop_culture"],
  },
  TimePeriod {
    id: "modern_computing",
    name: "the modern computing era",
    year_range: [1970, 2026],
    applicable_categories: &["technology", "programming"],
  },
  TimePeriod {
    id: "present",
    name: "present day",
    year_range: [2015, 2026],
    applicable_categories: &["technology", "education", "programming", "culture", "pop_culture"],
  },
];

/// Exact-id lookup in the category catalog.
pub fn category(id: &str) -> Option<&'static CategoryConfig> {
  CATEGORIES.iter().find(|c| c.id == id)
}

/// Exact-id lookup in the time period catalog.
pub fn time_period(id: &str) -> Option<&'static TimePeriod> {
  TIME_PERIODS.iter().find(|p| p.id == id)
}

/// All periods whose applicability set contains `category_id`.
pub fn periods_for(category_id: &str) -> Vec<&'static TimePeriod> {
  TIME_PERIODS
    .iter()
    .filter(|p| p.applicable_categories.contains(&category_id))
    .collect()
}

pub fn size_config(size: TextSize) -> &'static TextSizeConfig {
  match size {
    TextSize::Short => &TEXT_SIZES[0],
    TextSize::Medium => &TEXT_SIZES[1],
    TextSize::Long => &TEXT_SIZES[2],
  }
}

pub fn difficulty_config(level: DifficultyLevel) -> &'static DifficultyConfig {
  match level {
    DifficultyLevel::Easy => &DIFFICULTY_LEVELS[0],
    DifficultyLevel::Medium => &DIFFICULTY_LEVELS[1],
    DifficultyLevel::Hard => &DIFFICULTY_LEVELS[2],
  }
}

#[cfg(test)]
mod tests {
  use std::collections::HashSet;

  use super::*;

  #[test]
  fn category_ids_are_unique() {
    let mut seen = HashSet::new();
    for c in CATEGORIES {
      assert!(seen.insert(c.id), "duplicate category id {}", c.id);
    }
  }

  #[test]
  fn subcategory_ids_are_unique_within_their_category() {
    for c in CATEGORIES {
      assert!(!c.subcategories.is_empty(), "{} has no subcategories", c.id);
      let mut seen = HashSet::new();
      for s in c.subcategories {
        assert!(seen.insert(s.id), "duplicate subcategory {} in {}", s.id, c.id);
      }
    }
  }

  #[test]
  fn periods_reference_only_known_categories() {
    for p in TIME_PERIODS {
      for id in p.applicable_categories {
        assert!(category(id).is_some(), "period {} references unknown category {}", p.id, id);
      }
    }
  }

  #[test]
  fn period_year_ranges_are_ordered() {
    for p in TIME_PERIODS {
      assert!(p.year_range[0] <= p.year_range[1], "period {} has inverted range", p.id);
    }
  }

  #[test]
  fn default_time_periods_exist() {
    for c in CATEGORIES {
      if let Some(id) = c.default_time_period {
        assert!(time_period(id).is_some(), "{} defaults to unknown period {}", c.id, id);
        assert!(c.supports_time_period, "{} defaults a period but does not support one", c.id);
      }
    }
  }

  #[test]
  fn focus_lists_are_well_sized() {
    for c in CATEGORIES {
      let n = c.focus_elements.len();
      assert!((8..=10).contains(&n), "{} has {} focus elements", c.id, n);
    }
  }

  #[test]
  fn sizes_are_ordered_buckets() {
    assert_eq!(TEXT_SIZES.len(), 3);
    for s in TEXT_SIZES {
      assert!(s.min <= s.max, "size {} has min > max", s.label);
    }
  }

  #[test]
  fn difficulty_catalog_is_exactly_three_levels() {
    let ids: Vec<_> = DIFFICULTY_LEVELS.iter().map(|d| d.id).collect();
    assert_eq!(ids, ["easy", "medium", "hard"]);
  }

  #[test]
  fn education_does_not_support_time_periods() {
    let edu = category("education").expect("education exists");
    assert!(!edu.supports_time_period);
  }
}
