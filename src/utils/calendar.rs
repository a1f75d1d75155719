use chrono::{Datelike, Duration, Local, Months, NaiveDate};

/// Months are 0-indexed everywhere in this crate (January = 0), days are
/// 1-indexed. Only the canonical date key renders the month 1-based.
fn nth_day(year: i32, month0: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(year, month0 + 1, day).expect("invalid calendar day")
}

fn first_of_month(year: i32, month0: u32) -> NaiveDate {
    nth_day(year, month0, 1)
}

pub fn days_in_month(year: i32, month0: u32) -> u32 {
    let first = first_of_month(year, month0);
    let next = first + Months::new(1);
    (next - first).num_days() as u32
}

/// This is the standard way of converting a day to a completion-map key.
/// Keys are zero padded so lexicographic order matches calendar order.
pub fn date_key(year: i32, month0: u32, day: u32) -> String {
    date_key_of(nth_day(year, month0, day))
}

pub fn date_key_of(date: NaiveDate) -> String {
    date.format("%Y-%m-%d").to_string()
}

pub fn parse_date_key(key: &str) -> Option<NaiveDate> {
    NaiveDate::parse_from_str(key, "%Y-%m-%d").ok()
}

/// Human readable month header, for example "March 2026".
pub fn month_label(year: i32, month0: u32) -> String {
    first_of_month(year, month0).format("%B %Y").to_string()
}

/// Three letter weekday abbreviation, for example "Mon".
pub fn weekday_short_name(year: i32, month0: u32, day: u32) -> String {
    nth_day(year, month0, day).format("%a").to_string()
}

pub fn is_future(year: i32, month0: u32, day: u32) -> bool {
    is_future_at(Local::now().date_naive(), year, month0, day)
}

/// True if the day is strictly after `today`. Comparison happens on whole
/// calendar days, time of day never plays a role.
pub fn is_future_at(today: NaiveDate, year: i32, month0: u32, day: u32) -> bool {
    nth_day(year, month0, day) > today
}

pub fn is_today(year: i32, month0: u32, day: u32) -> bool {
    is_today_at(Local::now().date_naive(), year, month0, day)
}

pub fn is_today_at(today: NaiveDate, year: i32, month0: u32, day: u32) -> bool {
    nth_day(year, month0, day) == today
}

/// Returns the Sunday on or before `date`. Weeks anchor on Sunday, which
/// keeps the boundary stable while navigating between weeks.
pub fn week_start(date: NaiveDate) -> NaiveDate {
    date - Duration::days(date.weekday().num_days_from_sunday() as i64)
}

/// One day of a week window, carrying both the split fields used by the
/// aggregation layer and the underlying date.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WeekDay {
    pub year: i32,
    pub month0: u32,
    pub day: u32,
    pub date: NaiveDate,
}

/// The 7 contiguous days starting at `start`.
pub fn week_days(start: NaiveDate) -> Vec<WeekDay> {
    (0..7)
        .map(|offset| {
            let date = start + Duration::days(offset);
            WeekDay {
                year: date.year(),
                month0: date.month0(),
                day: date.day(),
                date,
            }
        })
        .collect()
}

/// Shifts a week start by `direction` weeks. Negative values go back in
/// time, anything beyond ±1 jumps several weeks at once. `None` when the
/// shift lands outside the supported calendar range.
pub fn navigate_week(start: NaiveDate, direction: i64) -> Option<NaiveDate> {
    let delta = Duration::try_days(direction.checked_mul(7)?)?;
    start.checked_add_signed(delta)
}

#[cfg(test)]
mod tests {
    use chrono::{Datelike, NaiveDate, Weekday};

    use super::*;

    const TEST_TODAY: NaiveDate = NaiveDate::from_ymd_opt(2026, 3, 15).unwrap();

    #[test]
    fn days_in_month_follows_calendar_rules() {
        assert_eq!(days_in_month(2026, 0), 31);
        assert_eq!(days_in_month(2026, 3), 30);
        assert_eq!(days_in_month(2023, 1), 28);
        assert_eq!(days_in_month(2024, 1), 29);
        // Century rules, not a divisible-by-four table.
        assert_eq!(days_in_month(1900, 1), 28);
        assert_eq!(days_in_month(2000, 1), 29);
    }

    #[test]
    fn date_key_is_zero_padded_and_month_is_rendered_one_based() {
        assert_eq!(date_key(2026, 0, 5), "2026-01-05");
        assert_eq!(date_key(2026, 11, 31), "2026-12-31");
        assert_eq!(date_key(2026, 8, 9).len(), 10);
    }

    #[test]
    fn date_key_round_trips_through_parse() {
        let parsed = parse_date_key(&date_key(2026, 0, 5)).unwrap();
        assert_eq!(parsed.year(), 2026);
        assert_eq!(parsed.month0(), 0);
        assert_eq!(parsed.day(), 5);
        assert!(parse_date_key("not a key").is_none());
    }

    #[test]
    fn date_keys_sort_like_calendar_days() {
        let mut keys = vec![
            date_key(2026, 9, 2),
            date_key(2026, 1, 28),
            date_key(2025, 11, 31),
            date_key(2026, 9, 10),
        ];
        keys.sort();
        assert_eq!(
            keys,
            vec!["2025-12-31", "2026-02-28", "2026-10-02", "2026-10-10"]
        );
    }

    #[test]
    fn labels_render_in_english() {
        assert_eq!(month_label(2026, 2), "March 2026");
        assert_eq!(month_label(2024, 0), "January 2024");
        // 2026-01-05 is a Monday.
        assert_eq!(weekday_short_name(2026, 0, 5), "Mon");
        assert_eq!(weekday_short_name(2026, 0, 4), "Sun");
    }

    #[test]
    fn future_and_today_are_mutually_exclusive() {
        for day in 1..=days_in_month(2026, 2) {
            let future = is_future_at(TEST_TODAY, 2026, 2, day);
            let today = is_today_at(TEST_TODAY, 2026, 2, day);
            assert!(!(future && today), "day {day} was both future and today");
            if day < 15 {
                assert!(!future && !today);
            } else if day == 15 {
                assert!(today);
            } else {
                assert!(future);
            }
        }
    }

    #[test]
    fn week_start_lands_on_sunday_for_every_weekday() {
        // 2026-03-15 is a Sunday.
        let sunday = NaiveDate::from_ymd_opt(2026, 3, 15).unwrap();
        for offset in 0..7 {
            let date = sunday + Duration::days(offset);
            let start = week_start(date);
            assert_eq!(start, sunday, "{date}");
            assert_eq!(start.weekday(), Weekday::Sun);
        }
        assert_eq!(week_start(sunday), sunday);
    }

    #[test]
    fn week_days_are_contiguous_and_cross_month_boundaries() {
        let start = NaiveDate::from_ymd_opt(2026, 3, 29).unwrap();
        let days = week_days(start);
        assert_eq!(days.len(), 7);
        for (offset, day) in days.iter().enumerate() {
            assert_eq!(day.date, start + Duration::days(offset as i64));
            assert_eq!(day.year, day.date.year());
            assert_eq!(day.month0, day.date.month0());
            assert_eq!(day.day, day.date.day());
        }
        assert_eq!(days[0].month0, 2);
        assert_eq!(days[6].month0, 3);
        assert_eq!(days[6].day, 4);
    }

    #[test]
    fn navigate_week_round_trips() {
        let start = week_start(TEST_TODAY);
        let next = navigate_week(start, 1).unwrap();
        assert_eq!(navigate_week(next, -1), Some(start));
        assert_eq!(navigate_week(start, 3), Some(start + Duration::days(21)));
        assert_eq!(navigate_week(start, 0), Some(start));
    }

    #[test]
    fn navigate_week_rejects_shifts_outside_the_calendar_range() {
        let start = week_start(TEST_TODAY);
        // Past the last representable date, past the largest day delta, and
        // past what the multiplication itself can hold.
        assert_eq!(navigate_week(start, 10_000_000_000), None);
        assert_eq!(navigate_week(start, 100_000_000_000_000), None);
        assert_eq!(navigate_week(start, i64::MAX), None);
        assert_eq!(navigate_week(start, -10_000_000_000), None);
    }
}
