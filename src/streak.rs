//! Daily streak arithmetic: consecutive-day tracking and the recent
//! completion history.
//!
//! Pure date math over `NaiveDate`; loading the user row and the
//! completion dates (and saving the result) belongs to the storage
//! layer. Callers pass "today" in so the functions stay deterministic.

use std::collections::HashMap;

use chrono::{Days, NaiveDate};
use serde::Serialize;

/// Outcome of applying a passed evaluation to a user's streak.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct StreakUpdate {
  pub previous_streak: u32,
  pub new_streak: u32,
  pub streak_broken: bool,
  pub streak_extended: bool,
  pub first_completion_today: bool,
}

/// One day of the trailing completion history.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct StreakDay {
  pub date: NaiveDate,
  pub completed: bool,
  pub texts_completed: u32,
}

/// Decide the new streak after a passed evaluation on `today`.
///
/// A repeat completion on the same day leaves the streak untouched; a
/// completion on the day after the last activity extends it; a longer
/// gap resets it to 1.
pub fn apply_completion(
  current_streak: u32,
  last_activity: Option<NaiveDate>,
  today: NaiveDate,
) -> StreakUpdate {
  if last_activity == Some(today) {
    return StreakUpdate {
      previous_streak: current_streak,
      new_streak: current_streak,
      streak_broken: false,
      streak_extended: false,
      first_completion_today: false,
    };
  }

  let (new_streak, streak_broken, streak_extended) = match last_activity {
    None => (1, false, true),
    Some(last) => {
      let gap = (today - last).num_days();
      if gap <= 1 {
        (current_streak + 1, false, true)
      } else {
        (1, true, false)
      }
    }
  };

  StreakUpdate {
    previous_streak: current_streak,
    new_streak,
    streak_broken,
    streak_extended,
    first_completion_today: true,
  }
}

/// Per-day completion counts for the trailing `days`-day window ending
/// at `today`, newest first. Days without completions are present with
/// a zero count, so an empty input yields the all-empty window.
pub fn history(completions: &[NaiveDate], today: NaiveDate, days: u32) -> Vec<StreakDay> {
  let mut by_date: HashMap<NaiveDate, u32> = HashMap::new();
  for date in completions {
    *by_date.entry(*date).or_insert(0) += 1;
  }

  (0..days)
    .filter_map(|i| today.checked_sub_days(Days::new(u64::from(i))))
    .map(|date| {
      let texts_completed = by_date.get(&date).copied().unwrap_or(0);
      StreakDay { date, completed: texts_completed > 0, texts_completed }
    })
    .collect()
}

#[cfg(test)]
mod tests {
  use super::*;

  fn day(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).expect("valid date")
  }

  #[test]
  fn first_ever_completion_starts_a_streak() {
    let update = apply_completion(0, None, day(2026, 3, 10));
    assert_eq!(update.previous_streak, 0);
    assert_eq!(update.new_streak, 1);
    assert!(update.streak_extended);
    assert!(!update.streak_broken);
    assert!(update.first_completion_today);
  }

  #[test]
  fn next_day_completion_extends_the_streak() {
    let update = apply_completion(4, Some(day(2026, 3, 9)), day(2026, 3, 10));
    assert_eq!(update.new_streak, 5);
    assert!(update.streak_extended);
    assert!(!update.streak_broken);
  }

  #[test]
  fn repeat_completion_on_the_same_day_changes_nothing() {
    let update = apply_completion(4, Some(day(2026, 3, 10)), day(2026, 3, 10));
    assert_eq!(update.previous_streak, 4);
    assert_eq!(update.new_streak, 4);
    assert!(!update.streak_extended);
    assert!(!update.streak_broken);
    assert!(!update.first_completion_today);
  }

  #[test]
  fn a_missed_day_resets_the_streak() {
    let update = apply_completion(12, Some(day(2026, 3, 7)), day(2026, 3, 10));
    assert_eq!(update.previous_streak, 12);
    assert_eq!(update.new_streak, 1);
    assert!(update.streak_broken);
    assert!(!update.streak_extended);
    assert!(update.first_completion_today);
  }

  #[test]
  fn history_is_newest_first_with_zero_filled_gaps() {
    let today = day(2026, 3, 10);
    let completions = [day(2026, 3, 10), day(2026, 3, 10), day(2026, 3, 8)];
    let h = history(&completions, today, 4);

    assert_eq!(h.len(), 4);
    assert_eq!(h[0].date, today);
    assert_eq!(h[0].texts_completed, 2);
    assert!(h[0].completed);
    assert_eq!(h[1].date, day(2026, 3, 9));
    assert!(!h[1].completed);
    assert_eq!(h[2].texts_completed, 1);
    assert_eq!(h[3].texts_completed, 0);
  }

  #[test]
  fn empty_input_yields_the_all_empty_window() {
    let h = history(&[], day(2026, 3, 10), 10);
    assert_eq!(h.len(), 10);
    assert!(h.iter().all(|d| !d.completed && d.texts_completed == 0));
  }
}
