use std::sync::Arc;

use chrono::{Datelike, Local, NaiveDate};

use crate::store::entities::HabitEntity;
use crate::utils::calendar::{date_key_of, is_today_at, week_days, week_start};

/// One habit's completion flag for a single day of the week.
#[derive(Debug)]
pub struct HabitMark {
    pub name: Arc<str>,
    pub emoji: Arc<str>,
    pub done: bool,
}

#[derive(Debug)]
pub struct DayCard {
    pub date: NaiveDate,
    pub day: u32,
    pub day_name: Arc<str>,
    pub marks: Vec<HabitMark>,
    pub completed_count: usize,
    pub total_habits: usize,
    pub percentage: i32,
    pub is_today: bool,
}

/// Seven day cards plus the week summary. The summary average divides by
/// seven even when some days track zero habits, and the best day is the
/// first one reaching the highest raw completion ratio.
#[derive(Debug)]
pub struct WeekOverview {
    pub range_label: String,
    pub is_current_week: bool,
    pub cards: Vec<DayCard>,
    pub average_completion: i32,
    pub best_day: Option<Arc<str>>,
    pub total_completed: usize,
}

pub fn week_overview(habits: &[HabitEntity], start: NaiveDate) -> WeekOverview {
    week_overview_at(Local::now().date_naive(), habits, start)
}

pub fn week_overview_at(today: NaiveDate, habits: &[HabitEntity], start: NaiveDate) -> WeekOverview {
    let days = week_days(start);

    let mut cards = Vec::with_capacity(days.len());
    let mut total_completed = 0;
    let mut ratio_sum = 0.0;
    let mut best: Option<(f64, Arc<str>)> = None;

    for day in &days {
        let key = date_key_of(day.date);
        let marks: Vec<HabitMark> = habits
            .iter()
            .map(|habit| HabitMark {
                name: habit.name.clone(),
                emoji: habit.emoji.clone(),
                done: habit.is_done_on(&key),
            })
            .collect();

        let completed_count = marks.iter().filter(|mark| mark.done).count();
        let day_name: Arc<str> = day.date.format("%a").to_string().into();
        let ratio = if habits.is_empty() {
            0.0
        } else {
            completed_count as f64 / habits.len() as f64 * 100.0
        };

        if !habits.is_empty() {
            match &best {
                Some((best_ratio, _)) if ratio <= *best_ratio => {}
                _ => best = Some((ratio, day_name.clone())),
            }
        }

        total_completed += completed_count;
        ratio_sum += ratio;
        cards.push(DayCard {
            date: day.date,
            day: day.day,
            day_name,
            marks,
            completed_count,
            total_habits: habits.len(),
            percentage: ratio.round() as i32,
            is_today: is_today_at(today, day.year, day.month0, day.day),
        });
    }

    let end = days
        .last()
        .map(|day| day.date)
        .unwrap_or(start);

    WeekOverview {
        range_label: range_label(start, end),
        is_current_week: week_start(today) == start,
        cards,
        // Days without habits keep a zero ratio in the sum; the denominator
        // stays at seven.
        average_completion: (ratio_sum / 7.0).round() as i32,
        best_day: best.map(|(_, day_name)| day_name),
        total_completed,
    }
}

/// "March 1 - 7, 2026" within a month, "Feb 23 - Mar 1, 2026" across a
/// month boundary. The year shown is always the starting day's.
fn range_label(start: NaiveDate, end: NaiveDate) -> String {
    if start.month() == end.month() {
        format!(
            "{} {} - {}, {}",
            start.format("%B"),
            start.day(),
            end.day(),
            start.year()
        )
    } else {
        format!(
            "{} {} - {} {}, {}",
            start.format("%b"),
            start.day(),
            end.format("%b"),
            end.day(),
            start.year()
        )
    }
}
