use ansi_term::{Colour, Style};

use crate::view::week::{DayCard, WeekOverview};

use super::{completion_bar, paint_percentage};

/// Cards list at most this many habits, the rest collapse into "+N more".
const VISIBLE_MARKS: usize = 5;

/// Prints seven day cards with the week summary underneath.
pub fn print_week_overview(overview: &WeekOverview) {
    let title = if overview.is_current_week {
        format!("{} (this week)", overview.range_label)
    } else {
        overview.range_label.clone()
    };
    println!("{}", Style::new().bold().paint(title));

    for card in &overview.cards {
        println!();
        print_day_card(card);
    }

    println!();
    let best_day = overview.best_day.as_deref().unwrap_or("N/A");
    println!(
        "Week average {}, best day {best_day}, {} completed in total",
        paint_percentage(overview.average_completion),
        overview.total_completed,
    );
}

fn print_day_card(card: &DayCard) {
    if card.is_today {
        println!(
            "{} {}  {}",
            Style::new().bold().paint(&*card.day_name),
            card.day,
            Colour::Yellow.bold().paint("Today")
        );
    } else {
        println!("{} {}", Style::new().bold().paint(&*card.day_name), card.day);
    }
    println!(
        "  {} of {} completed  {} {}",
        card.completed_count,
        card.total_habits,
        completion_bar(card.percentage, 10),
        paint_percentage(card.percentage),
    );

    if card.marks.is_empty() {
        println!("  No habits for this day");
        return;
    }
    for mark in card.marks.iter().take(VISIBLE_MARKS) {
        if mark.done {
            println!("  {} {} {}", Colour::Green.paint("✓"), mark.emoji, mark.name);
        } else {
            println!("    {} {}", mark.emoji, mark.name);
        }
    }
    if card.marks.len() > VISIBLE_MARKS {
        println!("  +{} more", card.marks.len() - VISIBLE_MARKS);
    }
}
