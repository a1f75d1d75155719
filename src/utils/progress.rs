use crate::store::entities::HabitEntity;
use crate::utils::calendar::{date_key, days_in_month};

/// Share of `part` in `whole` as a whole-number percentage, rounding half
/// away from zero: 10/30 gives 33, 20/30 gives 67.
fn count_percentage(part: usize, whole: usize) -> i32 {
    if whole == 0 {
        return 0;
    }
    (part as f64 / whole as f64 * 100.).round() as i32
}

/// Percentage of days in the month the habit was completed on.
pub fn habit_progress(habit: &HabitEntity, year: i32, month0: u32) -> i32 {
    count_percentage(
        completed_count(habit, year, month0) as usize,
        days_in_month(year, month0) as usize,
    )
}

/// Raw number of completed days within the month, used by detail displays.
pub fn completed_count(habit: &HabitEntity, year: i32, month0: u32) -> u32 {
    (1..=days_in_month(year, month0))
        .filter(|day| habit.is_done_on(&date_key(year, month0, *day)))
        .count() as u32
}

/// Overall progress of a habit collection: the mean of the per-habit rounded
/// percentages, rounded again. This is deliberately not the flattened
/// completed-cells over all-cells ratio.
pub fn total_progress(habits: &[HabitEntity], year: i32, month0: u32) -> i32 {
    if habits.is_empty() {
        return 0;
    }
    let sum: i32 = habits
        .iter()
        .map(|habit| habit_progress(habit, year, month0))
        .sum();
    (f64::from(sum) / habits.len() as f64).round() as i32
}

/// How one day went across the whole collection.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DailyCompletion {
    pub completed_count: usize,
    pub total_habits: usize,
    pub percentage: i32,
}

pub fn daily_completion(
    habits: &[HabitEntity],
    year: i32,
    month0: u32,
    day: u32,
) -> DailyCompletion {
    let key = date_key(year, month0, day);
    let completed = habits.iter().filter(|habit| habit.is_done_on(&key)).count();
    DailyCompletion {
        completed_count: completed,
        total_habits: habits.len(),
        percentage: count_percentage(completed, habits.len()),
    }
}
