use std::{fmt::Display, path::PathBuf};

use anyhow::Result;
use chrono::{Datelike, Local, NaiveDate};
use chrono_english::parse_date_string;
use clap::{CommandFactory, Parser, ValueEnum};
use tracing::warn;

use crate::{
    store::{
        habit_storage::{HabitStorage, JsonHabitStorage},
        habit_store::HabitStore,
    },
    utils::{
        calendar::{date_key_of, days_in_month, is_future, navigate_week, week_start},
        progress::{completed_count, habit_progress},
    },
    view::{month::monthly_table, stats::monthly_stats, week::week_overview},
};

use super::{
    output::{
        self,
        month::print_monthly_table,
        stats::print_monthly_stats,
        week::print_week_overview,
    },
    Args,
};

#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum DateStyle {
    Uk,
    Us,
}

impl From<DateStyle> for chrono_english::Dialect {
    fn from(value: DateStyle) -> Self {
        match value {
            DateStyle::Uk => Self::Uk,
            DateStyle::Us => Self::Us,
        }
    }
}

impl Display for DateStyle {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            DateStyle::Uk => write!(f, "uk"),
            DateStyle::Us => write!(f, "us"),
        }
    }
}

#[derive(Debug, Parser)]
pub struct DaySelection {
    #[arg(
        long,
        help = "Day to use. Examples are \"yesterday\", \"2 days ago\", \"15/03/2026\". Defaults to today"
    )]
    date: Option<String>,
    #[arg(long, default_value_t = DateStyle::Uk, help = "Style of dates used during parsing. For Uk it's day/month/year. For Us it's month/day/year")]
    date_style: DateStyle,
}

impl DaySelection {
    fn resolve(self) -> Result<NaiveDate> {
        let Some(date) = self.date else {
            return Ok(Local::now().date_naive());
        };
        match parse_date_string(&date, Local::now(), self.date_style.into()) {
            Ok(v) => Ok(v.with_timezone(&Local).date_naive()),
            Err(e) => Err(Args::command()
                .error(
                    clap::error::ErrorKind::ValueValidation,
                    format!("Failed to parse date {date}: {e}"),
                )
                .into()),
        }
    }
}

pub async fn process_add(app_dir: PathBuf, name: &str, emoji: Option<&str>) -> Result<()> {
    if name.trim().is_empty() {
        return Err(Args::command()
            .error(
                clap::error::ErrorKind::ValueValidation,
                "Habit name can't be empty",
            )
            .into());
    }

    let mut store = open_store(app_dir).await?;
    let habit = store.add(name, emoji).await?;
    println!("Added {} {} with id {}", habit.emoji, habit.name, habit.id);
    Ok(())
}

pub async fn process_toggle(app_dir: PathBuf, id: i64, day: DaySelection) -> Result<()> {
    let date = day.resolve()?;
    if is_future(date.year(), date.month0(), date.day()) {
        return Err(Args::command()
            .error(
                clap::error::ErrorKind::ValueValidation,
                format!("Can't toggle {date}, it hasn't happened yet"),
            )
            .into());
    }

    let mut store = open_store(app_dir).await?;
    let key = date_key_of(date);
    if !store.toggle_day(id, &key).await {
        println!("No habit with id {id}");
        return Ok(());
    }
    match store.find(id) {
        Some(habit) if habit.is_done_on(&key) => {
            println!("{} {} marked done on {key}", habit.emoji, habit.name)
        }
        Some(habit) => println!("{} {} marked not done on {key}", habit.emoji, habit.name),
        None => {}
    }
    Ok(())
}

pub async fn process_remove(app_dir: PathBuf, id: i64) -> Result<()> {
    let mut store = open_store(app_dir).await?;
    if store.remove(id).await {
        println!("Removed habit {id}");
    } else {
        println!("No habit with id {id}");
    }
    Ok(())
}

/// Lists habits with their raw counts and percentage for the current month.
pub async fn process_list(app_dir: PathBuf) -> Result<()> {
    let store = open_store(app_dir).await?;
    if store.habits().is_empty() {
        println!("No habits yet");
        return Ok(());
    }

    let today = Local::now().date_naive();
    let (year, month0) = (today.year(), today.month0());
    let days = days_in_month(year, month0);
    for habit in store.habits() {
        println!(
            "{:>13}  {} {}  {} of {days} days  {}",
            habit.id,
            habit.emoji,
            habit.name,
            completed_count(habit, year, month0),
            output::paint_percentage(habit_progress(habit, year, month0)),
        );
    }
    Ok(())
}

pub async fn process_month(app_dir: PathBuf, month: Option<String>) -> Result<()> {
    let (year, month0) = parse_month(month)?;
    let store = open_store(app_dir).await?;
    print_monthly_table(&monthly_table(store.habits(), year, month0));
    Ok(())
}

pub async fn process_week(app_dir: PathBuf, day: DaySelection, offset: i64) -> Result<()> {
    let Some(start) = navigate_week(week_start(day.resolve()?), offset) else {
        return Err(Args::command()
            .error(
                clap::error::ErrorKind::ValueValidation,
                format!("Week offset {offset} is out of range"),
            )
            .into());
    };
    let store = open_store(app_dir).await?;
    print_week_overview(&week_overview(store.habits(), start));
    Ok(())
}

pub async fn process_stats(app_dir: PathBuf, month: Option<String>) -> Result<()> {
    let (year, month0) = parse_month(month)?;
    let store = open_store(app_dir).await?;
    print_monthly_stats(&monthly_stats(store.habits(), year, month0));
    Ok(())
}

/// Deletes the stored collection. Best effort, a failed removal only warns.
pub async fn process_clear(app_dir: PathBuf) -> Result<()> {
    let storage = JsonHabitStorage::new(app_dir)?;
    if let Err(e) = storage.clear().await {
        warn!("Failed to clear stored habits {e:?}");
    }
    println!("Cleared all habit data");
    Ok(())
}

async fn open_store(app_dir: PathBuf) -> Result<HabitStore<JsonHabitStorage>> {
    Ok(HabitStore::load_initial(JsonHabitStorage::new(app_dir)?).await)
}

fn parse_month(value: Option<String>) -> Result<(i32, u32)> {
    let Some(value) = value else {
        let today = Local::now().date_naive();
        return Ok((today.year(), today.month0()));
    };
    match NaiveDate::parse_from_str(&format!("{value}-01"), "%Y-%m-%d") {
        Ok(parsed) => Ok((parsed.year(), parsed.month0())),
        Err(e) => Err(Args::command()
            .error(
                clap::error::ErrorKind::ValueValidation,
                format!("Failed to parse month {value}, expected YYYY-MM: {e}"),
            )
            .into()),
    }
}
