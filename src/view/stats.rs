use std::sync::Arc;

use crate::store::entities::HabitEntity;
use crate::utils::calendar::{days_in_month, month_label};
use crate::utils::progress::{daily_completion, habit_progress};

/// One point of the per-day completion series that feeds the chart.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DailyPoint {
    pub day: u32,
    pub percentage: i32,
    pub completed_count: usize,
    pub total_habits: usize,
}

#[derive(Debug)]
pub struct HabitStat {
    pub name: Arc<str>,
    pub emoji: Arc<str>,
    pub progress: i32,
}

/// Full-month statistics. Unlike the weekly summary, the monthly average is
/// taken over the already rounded per-day percentages, matching the series
/// the chart renders.
#[derive(Debug)]
pub struct MonthlyStats {
    pub label: String,
    pub days_in_month: u32,
    pub total_habits: usize,
    pub daily: Vec<DailyPoint>,
    pub average_completion: i32,
    pub days_tracked: usize,
    pub best_day: DailyPoint,
    pub habit_stats: Vec<HabitStat>,
}

pub fn monthly_stats(habits: &[HabitEntity], year: i32, month0: u32) -> MonthlyStats {
    let days = days_in_month(year, month0);

    let daily: Vec<DailyPoint> = (1..=days)
        .map(|day| {
            let completion = daily_completion(habits, year, month0, day);
            DailyPoint {
                day,
                percentage: completion.percentage,
                completed_count: completion.completed_count,
                total_habits: completion.total_habits,
            }
        })
        .collect();

    let percentage_sum: i32 = daily.iter().map(|point| point.percentage).sum();
    let days_tracked = daily
        .iter()
        .filter(|point| point.completed_count > 0)
        .count();
    let best_day = daily
        .iter()
        .copied()
        .reduce(|best, point| {
            if point.percentage > best.percentage {
                point
            } else {
                best
            }
        })
        // A month always has at least 28 days, so the series is never empty.
        .unwrap_or(DailyPoint {
            day: 1,
            percentage: 0,
            completed_count: 0,
            total_habits: habits.len(),
        });

    let habit_stats = habits
        .iter()
        .map(|habit| HabitStat {
            name: habit.name.clone(),
            emoji: habit.emoji.clone(),
            progress: habit_progress(habit, year, month0),
        })
        .collect();

    MonthlyStats {
        label: month_label(year, month0),
        days_in_month: days,
        total_habits: habits.len(),
        daily,
        average_completion: (f64::from(percentage_sum) / f64::from(days)).round() as i32,
        days_tracked,
        best_day,
        habit_stats,
    }
}

#[cfg(test)]
mod tests {
    use crate::utils::calendar::date_key;

    use super::*;

    const YEAR: i32 = 2026;
    const JUNE: u32 = 5;

    fn habit_done_on_days(id: i64, days: impl IntoIterator<Item = u32>) -> HabitEntity {
        days.into_iter()
            .fold(HabitEntity::new(id, "Gym", "💪"), |habit, day| {
                habit.with_done(&date_key(YEAR, JUNE, day), true)
            })
    }

    #[test]
    fn the_series_covers_every_day_of_the_month() {
        let stats = monthly_stats(&[], YEAR, JUNE);

        assert_eq!(stats.label, "June 2026");
        assert_eq!(stats.days_in_month, 30);
        assert_eq!(stats.daily.len(), 30);
        assert_eq!(stats.daily[0].day, 1);
        assert_eq!(stats.daily[29].day, 30);
    }

    #[test]
    fn points_carry_count_and_rounded_percentage() {
        let habits = vec![
            habit_done_on_days(1, [3, 4]),
            habit_done_on_days(2, [3]),
        ];
        let stats = monthly_stats(&habits, YEAR, JUNE);

        assert_eq!(
            stats.daily[2],
            DailyPoint {
                day: 3,
                percentage: 100,
                completed_count: 2,
                total_habits: 2,
            }
        );
        assert_eq!(stats.daily[3].percentage, 50);
        assert_eq!(stats.daily[4].percentage, 0);
    }

    #[test]
    fn average_sums_the_rounded_day_percentages() {
        // One of three habits on 14 days: rounded day values are 33, so the
        // average is round(462 / 30) = 15. Unrounded ratios would give 16.
        let habits = vec![
            habit_done_on_days(1, 1..=14),
            habit_done_on_days(2, []),
            habit_done_on_days(3, []),
        ];
        let stats = monthly_stats(&habits, YEAR, JUNE);

        assert_eq!(stats.average_completion, 15);
    }

    #[test]
    fn days_tracked_counts_days_with_any_completion() {
        let habits = vec![
            habit_done_on_days(1, [1, 2, 10]),
            habit_done_on_days(2, [2, 20]),
        ];
        let stats = monthly_stats(&habits, YEAR, JUNE);

        assert_eq!(stats.days_tracked, 4);
    }

    #[test]
    fn best_day_is_the_first_occurrence_of_the_maximum() {
        let habits = vec![habit_done_on_days(1, [5, 9])];
        let stats = monthly_stats(&habits, YEAR, JUNE);

        assert_eq!(stats.best_day.day, 5);
        assert_eq!(stats.best_day.percentage, 100);
    }

    #[test]
    fn best_day_defaults_to_day_one_when_nothing_is_done() {
        let stats = monthly_stats(&[habit_done_on_days(1, [])], YEAR, JUNE);

        assert_eq!(stats.best_day.day, 1);
        assert_eq!(stats.best_day.percentage, 0);
    }

    #[test]
    fn an_empty_collection_yields_a_zeroed_overview() {
        let stats = monthly_stats(&[], YEAR, JUNE);

        assert_eq!(stats.total_habits, 0);
        assert_eq!(stats.average_completion, 0);
        assert_eq!(stats.days_tracked, 0);
        assert_eq!(stats.best_day.day, 1);
        assert!(stats.habit_stats.is_empty());
        assert!(stats.daily.iter().all(|point| point.percentage == 0));
    }

    #[test]
    fn habit_stats_mirror_the_collection() {
        let habits = vec![
            habit_done_on_days(1, 1..=15),
            HabitEntity::new(2, "Reading", "📚"),
        ];
        let stats = monthly_stats(&habits, YEAR, JUNE);

        assert_eq!(stats.habit_stats.len(), 2);
        assert_eq!(&*stats.habit_stats[0].name, "Gym");
        assert_eq!(stats.habit_stats[0].progress, 50);
        assert_eq!(&*stats.habit_stats[1].name, "Reading");
        assert_eq!(stats.habit_stats[1].progress, 0);
    }
}
