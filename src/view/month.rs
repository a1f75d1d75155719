use std::sync::Arc;

use chrono::{Local, NaiveDate};

use crate::store::entities::HabitEntity;
use crate::utils::calendar::{
    date_key, days_in_month, is_future_at, month_label, weekday_short_name,
};
use crate::utils::progress::{habit_progress, total_progress};

/// State of a single habit/day cell. Future days stay inert even when the
/// completion map carries a stray entry for them.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DayCell {
    Checked,
    Unchecked,
    Future,
}

#[derive(Debug)]
pub struct DayHeading {
    pub day: u32,
    pub weekday: String,
}

#[derive(Debug)]
pub struct HabitRow {
    pub id: i64,
    pub name: Arc<str>,
    pub emoji: Arc<str>,
    pub cells: Vec<DayCell>,
    pub progress: i32,
}

/// Month grid: one heading per day, one row per habit, and the totals row
/// percentage for the whole collection.
#[derive(Debug)]
pub struct MonthlyTable {
    pub label: String,
    pub headings: Vec<DayHeading>,
    pub rows: Vec<HabitRow>,
    pub total_progress: i32,
}

pub fn monthly_table(habits: &[HabitEntity], year: i32, month0: u32) -> MonthlyTable {
    monthly_table_at(Local::now().date_naive(), habits, year, month0)
}

pub fn monthly_table_at(
    today: NaiveDate,
    habits: &[HabitEntity],
    year: i32,
    month0: u32,
) -> MonthlyTable {
    let days = days_in_month(year, month0);

    let headings = (1..=days)
        .map(|day| DayHeading {
            day,
            weekday: weekday_short_name(year, month0, day),
        })
        .collect();

    let rows = habits
        .iter()
        .map(|habit| {
            let cells = (1..=days)
                .map(|day| {
                    if is_future_at(today, year, month0, day) {
                        DayCell::Future
                    } else if habit.is_done_on(&date_key(year, month0, day)) {
                        DayCell::Checked
                    } else {
                        DayCell::Unchecked
                    }
                })
                .collect();
            HabitRow {
                id: habit.id,
                name: habit.name.clone(),
                emoji: habit.emoji.clone(),
                cells,
                progress: habit_progress(habit, year, month0),
            }
        })
        .collect();

    MonthlyTable {
        label: month_label(year, month0),
        headings,
        rows,
        total_progress: total_progress(habits, year, month0),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const TEST_TODAY: NaiveDate = NaiveDate::from_ymd_opt(2026, 3, 15).unwrap();
    const YEAR: i32 = 2026;
    const MARCH: u32 = 2;

    fn habit_done_on_days(id: i64, days: impl IntoIterator<Item = u32>) -> HabitEntity {
        days.into_iter()
            .fold(HabitEntity::new(id, "Gym", "💪"), |habit, day| {
                habit.with_done(&date_key(YEAR, MARCH, day), true)
            })
    }

    fn cell_count(row: &HabitRow, cell: DayCell) -> usize {
        row.cells.iter().filter(|c| **c == cell).count()
    }

    #[test]
    fn headings_cover_the_month_with_weekday_names() {
        let table = monthly_table_at(TEST_TODAY, &[], YEAR, MARCH);

        assert_eq!(table.label, "March 2026");
        assert_eq!(table.headings.len(), 31);
        assert_eq!(table.headings[0].day, 1);
        assert_eq!(table.headings[0].weekday, "Sun");
        assert_eq!(table.headings[14].weekday, "Sun");
        assert_eq!(table.headings[30].day, 31);
    }

    #[test]
    fn cells_split_into_checked_unchecked_and_future() {
        let habit = habit_done_on_days(1, [1, 2, 15]);
        let table = monthly_table_at(TEST_TODAY, std::slice::from_ref(&habit), YEAR, MARCH);

        let row = &table.rows[0];
        assert_eq!(row.cells[0], DayCell::Checked);
        assert_eq!(row.cells[2], DayCell::Unchecked);
        assert_eq!(row.cells[15], DayCell::Future);
        assert_eq!(cell_count(row, DayCell::Checked), 3);
        assert_eq!(cell_count(row, DayCell::Future), 16);
        assert_eq!(cell_count(row, DayCell::Unchecked), 12);
    }

    #[test]
    fn future_wins_over_a_stray_completion_entry() {
        let habit = habit_done_on_days(1, [20]);
        let table = monthly_table_at(TEST_TODAY, std::slice::from_ref(&habit), YEAR, MARCH);

        assert_eq!(table.rows[0].cells[19], DayCell::Future);
    }

    #[test]
    fn a_past_month_has_no_future_cells() {
        let habit = habit_done_on_days(1, []);
        let table = monthly_table_at(TEST_TODAY, std::slice::from_ref(&habit), YEAR, 0);

        assert_eq!(cell_count(&table.rows[0], DayCell::Future), 0);
        assert_eq!(cell_count(&table.rows[0], DayCell::Unchecked), 31);
    }

    #[test]
    fn a_future_month_is_entirely_inert() {
        let habit = habit_done_on_days(1, []);
        let table = monthly_table_at(TEST_TODAY, std::slice::from_ref(&habit), YEAR, 3);

        assert_eq!(cell_count(&table.rows[0], DayCell::Future), 30);
    }

    #[test]
    fn row_progress_spans_the_whole_month_even_mid_month() {
        // 3 of 31 days, future days still count in the denominator.
        let habit = habit_done_on_days(1, [1, 2, 15]);
        let table = monthly_table_at(TEST_TODAY, std::slice::from_ref(&habit), YEAR, MARCH);

        assert_eq!(table.rows[0].progress, 10);
    }

    #[test]
    fn totals_row_uses_the_mean_of_row_percentages() {
        let habits = vec![
            habit_done_on_days(1, 1..=31),
            habit_done_on_days(2, [1, 2, 3]),
        ];
        let table = monthly_table_at(TEST_TODAY, &habits, YEAR, MARCH);

        assert_eq!(table.rows[0].progress, 100);
        assert_eq!(table.rows[1].progress, 10);
        assert_eq!(table.total_progress, 55);
    }

    #[test]
    fn an_empty_collection_still_produces_headings() {
        let table = monthly_table_at(TEST_TODAY, &[], YEAR, MARCH);

        assert!(table.rows.is_empty());
        assert_eq!(table.headings.len(), 31);
        assert_eq!(table.total_progress, 0);
    }
}
