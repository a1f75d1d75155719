pub mod month;
pub mod stats;
pub mod week;

use ansi_term::{ANSIString, Colour};

/// Shared colour ramp for completion percentages.
pub fn percentage_colour(percentage: i32) -> Colour {
    if percentage < 25 {
        Colour::Red
    } else if percentage < 50 {
        Colour::Yellow
    } else if percentage < 75 {
        Colour::Cyan
    } else {
        Colour::Green
    }
}

/// Right aligned percentage like ` 33%`, painted with the shared ramp.
pub fn paint_percentage(percentage: i32) -> ANSIString<'static> {
    percentage_colour(percentage).paint(format!("{percentage:>3}%"))
}

/// Fixed width completion bar, for example `██████░░░░░░░░░░░░░░`.
pub fn completion_bar(percentage: i32, width: usize) -> String {
    let filled = percentage.clamp(0, 100) as usize * width / 100;
    format!("{}{}", "█".repeat(filled), "░".repeat(width - filled))
}

/// Clips a label to `width` characters, ending in an ellipsis when the label
/// doesn't fit.
pub fn clip_label(label: &str, width: usize) -> String {
    if label.chars().count() <= width {
        return label.to_string();
    }
    let mut clipped: String = label.chars().take(width.saturating_sub(1)).collect();
    clipped.push('…');
    clipped
}
