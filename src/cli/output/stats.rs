use ansi_term::Style;

use crate::view::stats::MonthlyStats;

use super::{clip_label, completion_bar, paint_percentage};

const CHART_WIDTH: usize = 25;
const NAME_WIDTH: usize = 22;

/// Prints monthly statistics: the overview numbers, a per-day completion
/// chart and the per-habit progress list.
pub fn print_monthly_stats(stats: &MonthlyStats) {
    println!("{}", Style::new().bold().paint(stats.label.as_str()));
    println!();
    println!(
        "Average completion  {}",
        paint_percentage(stats.average_completion)
    );
    println!(
        "Days tracked        {} of {}",
        stats.days_tracked, stats.days_in_month
    );
    println!(
        "Best day            day {} at {}",
        stats.best_day.day,
        paint_percentage(stats.best_day.percentage)
    );
    println!("Habits              {}", stats.total_habits);

    println!();
    for point in &stats.daily {
        println!(
            "{:>2} {} {}  {}/{}",
            point.day,
            completion_bar(point.percentage, CHART_WIDTH),
            paint_percentage(point.percentage),
            point.completed_count,
            point.total_habits,
        );
    }

    if stats.habit_stats.is_empty() {
        return;
    }
    println!();
    println!("{}", Style::new().bold().paint("Habit progress"));
    for habit in &stats.habit_stats {
        let label = clip_label(&format!("{} {}", habit.emoji, habit.name), NAME_WIDTH - 2);
        println!(
            "{label:<NAME_WIDTH$} {} {}",
            completion_bar(habit.progress, 10),
            paint_percentage(habit.progress),
        );
    }
}
