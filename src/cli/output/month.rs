use ansi_term::{Colour, Style};

use crate::view::month::{DayCell, MonthlyTable};

use super::{clip_label, paint_percentage};

const NAME_WIDTH: usize = 22;

/// Prints the month as a habit/day grid with a totals row at the bottom.
pub fn print_monthly_table(table: &MonthlyTable) {
    println!("{}", Style::new().bold().paint(table.label.as_str()));
    println!();

    let mut day_row = " ".repeat(NAME_WIDTH);
    let mut weekday_row = " ".repeat(NAME_WIDTH);
    for heading in &table.headings {
        day_row.push_str(&format!("{:>4}", heading.day));
        weekday_row.push_str(&format!("{:>4}", heading.weekday));
    }
    println!("{day_row}   Progress");
    println!("{weekday_row}");

    for row in &table.rows {
        let label = clip_label(&format!("{} {}", row.emoji, row.name), NAME_WIDTH - 2);
        let mut line = format!("{label:<NAME_WIDTH$}");
        for cell in &row.cells {
            line.push_str("   ");
            match cell {
                DayCell::Checked => line.push_str(&Colour::Green.paint("✓").to_string()),
                DayCell::Unchecked => line.push('·'),
                DayCell::Future => line.push(' '),
            }
        }
        println!("{line}   {}", paint_percentage(row.progress));
    }

    println!();
    let width = NAME_WIDTH + 4 * table.headings.len();
    println!(
        "{:<width$}   {}",
        "Total progress",
        paint_percentage(table.total_progress)
    );
}
